use crate::models::entities::enum_types::PayoutState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct PayoutRequest {
    /// Gross amount in minor units. Omitted = pay out the entire
    /// available balance.
    #[validate(range(min = 1))]
    pub amount: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PayoutResponse {
    pub payout_id: Uuid,
    pub amount: i64,
    pub fee: i64,
    pub net_amount: i64,
    pub status: PayoutState,
    pub processed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BalanceSummary {
    pub available: i64,
    pub pending: i64,
}
