use crate::models::entities::enum_types::FraudFlagKind;
use chrono::{DateTime, Utc};
use diesel::{Identifiable, Insertable, Queryable};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, Queryable, Identifiable, Serialize)]
#[diesel(table_name = crate::schema::fraud_flags)]
pub struct FraudFlag {
    pub id: Uuid,
    pub subscriber_id: Option<Uuid>,
    pub creator_id: Option<Uuid>,
    pub flag_kind: FraudFlagKind,
    pub severity: i32,
    pub description: String,
    pub metadata: Value,
    pub is_resolved: bool,
    pub resolved_by: Option<Uuid>,
    pub resolution: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::fraud_flags)]
pub struct NewFraudFlag {
    pub subscriber_id: Option<Uuid>,
    pub creator_id: Option<Uuid>,
    pub flag_kind: FraudFlagKind,
    pub severity: i32,
    pub description: String,
    pub metadata: Value,
}
