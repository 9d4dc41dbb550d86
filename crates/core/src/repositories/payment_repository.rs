use crate::repositories::DbPool;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use fanpix_primitives::error::ApiError;
use fanpix_primitives::schema::payments;
use uuid::Uuid;

/// Read-only view over the payment events written by the payments
/// pipeline; the velocity guard is the only consumer here.
pub trait PaymentRepository: Send + Sync {
    fn count_by_payer_since(
        &self,
        subscriber_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<i64, ApiError>;
}

pub struct PgPaymentRepository {
    pool: DbPool,
}

impl PgPaymentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl PaymentRepository for PgPaymentRepository {
    fn count_by_payer_since(
        &self,
        subscriber_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<i64, ApiError> {
        let mut conn = self.pool.get()?;
        payments::table
            .filter(payments::subscriber_id.eq(subscriber_id))
            .filter(payments::created_at.ge(since))
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(ApiError::from)
    }
}
