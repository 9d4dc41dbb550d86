use chrono::{DateTime, Utc};
use diesel::{Identifiable, Queryable};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Queryable, Identifiable, Serialize)]
#[diesel(table_name = crate::schema::subscribers)]
pub struct Subscriber {
    pub id: Uuid,
    pub email: String,
    pub cpf_cnpj: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
