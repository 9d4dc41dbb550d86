use crate::models::entities::enum_types::FraudFlagKind;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Closed filter for the admin flag listing. Every field is typed; there is
/// no free-form filter map.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct FraudFlagFilter {
    pub flag_kind: Option<FraudFlagKind>,
    pub creator_id: Option<Uuid>,
    pub subscriber_id: Option<Uuid>,
    pub is_resolved: Option<bool>,
    pub min_severity: Option<i32>,
    pub limit: Option<i64>,
}
