use crate::models::entities::enum_types::ChargebackState;
use chrono::{DateTime, Utc};
use diesel::{Associations, Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::chargebacks)]
#[diesel(belongs_to(crate::models::entities::creator::Creator))]
pub struct Chargeback {
    pub id: Uuid,
    pub payment_id: Uuid,
    pub creator_id: Uuid,
    pub amount: i64,
    pub status: ChargebackState,
    pub external_chargeback_id: Option<String>,
    pub penalty_amount: i64,
    pub penalty_applied: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::chargebacks)]
pub struct NewChargeback {
    pub payment_id: Uuid,
    pub creator_id: Uuid,
    pub amount: i64,
    pub external_chargeback_id: Option<String>,
}
