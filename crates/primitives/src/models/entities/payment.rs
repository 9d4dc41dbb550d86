use crate::models::entities::enum_types::PaymentState;
use chrono::{DateTime, Utc};
use diesel::{Identifiable, Queryable};
use serde::Serialize;
use uuid::Uuid;

/// Subscription/PPV payment event. Rows are written by the payments
/// pipeline; this core only reads them (velocity counting, chargebacks).
#[derive(Debug, Clone, Queryable, Identifiable, Serialize)]
#[diesel(table_name = crate::schema::payments)]
pub struct Payment {
    pub id: Uuid,
    pub subscriber_id: Uuid,
    pub creator_id: Uuid,
    pub amount: i64,
    pub status: PaymentState,
    pub created_at: DateTime<Utc>,
}
