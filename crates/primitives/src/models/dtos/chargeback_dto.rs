use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Dispute notification as delivered by the payment-gateway webhook
/// handler (out of scope) into the chargeback resolver.
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct RecordChargebackRequest {
    pub payment_id: Uuid,
    pub creator_id: Uuid,
    #[validate(range(min = 1))]
    pub amount: i64,
    pub external_chargeback_id: Option<String>,
}
