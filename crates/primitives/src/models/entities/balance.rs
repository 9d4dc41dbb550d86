use chrono::{DateTime, Utc};
use diesel::{Associations, Identifiable, Queryable};
use serde::Serialize;
use uuid::Uuid;

/// Per-creator balance row, minor currency units. `available` never goes
/// negative; the only writers are the ledger's atomic credit/debit.
#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::balances)]
#[diesel(belongs_to(crate::models::entities::creator::Creator))]
pub struct Balance {
    pub id: Uuid,
    pub creator_id: Uuid,
    pub available: i64,
    pub pending: i64,
    pub updated_at: DateTime<Utc>,
}
