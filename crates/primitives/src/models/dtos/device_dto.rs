use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Raw client signals collected by the session layer. The settlement core
/// reduces them to a stable digest; the individual fields are never stored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeviceSignals {
    pub user_agent: String,
    pub screen_resolution: String,
    pub timezone: String,
    pub language: String,
    pub ip_address: String,
}
