use crate::models::entities::enum_types::PixKeyType;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct PixTransferRequest<'a> {
    /// Decimal string in major units, e.g. "45.00".
    pub amount: &'a str,
    pub pix_key: &'a str,
    pub pix_key_type: PixKeyType,
    pub description: &'a str,
    pub external_reference: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct PixTransferResponse {
    pub id: String,
    pub status: PixTransferStatus,
    #[serde(default)]
    pub message: Option<String>,
}

/// Gateway-side transfer state. `Done` means settled synchronously;
/// anything unrecognized stays in flight for the reconciliation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PixTransferStatus {
    Done,
    Processing,
    Failed,
    #[serde(other)]
    Unknown,
}
