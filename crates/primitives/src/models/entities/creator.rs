use crate::models::entities::enum_types::{KycStatus, PixKeyType};
use chrono::{DateTime, Utc};
use diesel::{Associations, Identifiable, Queryable};
use serde::Serialize;
use uuid::Uuid;

/// Creator record as seen by the settlement core: the risk-state columns
/// plus the PIX settlement destination. Profile/content columns live with
/// the out-of-scope platform code.
#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::creators)]
#[diesel(belongs_to(crate::models::entities::subscriber::Subscriber))]
pub struct Creator {
    pub id: Uuid,
    pub subscriber_id: Uuid,
    pub display_name: String,
    pub cpf_cnpj: Option<String>,
    pub kyc_status: KycStatus,
    pub payouts_blocked: bool,
    pub payout_block_reason: Option<String>,
    pub is_pro: bool,
    pub chargeback_count: i32,
    pub chargeback_penalty_balance: i64,
    pub pix_key: Option<String>,
    pub pix_key_type: Option<PixKeyType>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
