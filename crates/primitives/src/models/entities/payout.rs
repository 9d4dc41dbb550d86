use crate::models::entities::enum_types::PayoutState;
use chrono::{DateTime, Utc};
use diesel::{Associations, Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::payouts)]
#[diesel(belongs_to(crate::models::entities::creator::Creator))]
pub struct Payout {
    pub id: Uuid,
    pub creator_id: Uuid,
    pub amount: i64,
    pub fee: i64,
    pub net_amount: i64,
    pub status: PayoutState,
    pub external_transfer_id: Option<String>,
    pub failed_reason: Option<String>,
    pub processed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::payouts)]
pub struct NewPayout {
    pub creator_id: Uuid,
    pub amount: i64,
    pub fee: i64,
    pub net_amount: i64,
    pub status: PayoutState,
}
