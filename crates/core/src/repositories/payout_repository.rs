use crate::repositories::DbPool;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use fanpix_primitives::error::ApiError;
use fanpix_primitives::models::enum_types::PayoutState;
use fanpix_primitives::models::payout::{NewPayout, Payout};
use fanpix_primitives::schema::payouts;
use uuid::Uuid;

pub trait PayoutRepository: Send + Sync {
    fn create(&self, new_payout: NewPayout) -> Result<Payout, ApiError>;
    fn find(&self, id: Uuid) -> Result<Option<Payout>, ApiError>;
    fn mark_completed(&self, id: Uuid, transfer_id: &str) -> Result<(), ApiError>;
    fn mark_processing_transfer(&self, id: Uuid, transfer_id: &str) -> Result<(), ApiError>;
    fn mark_failed(&self, id: Uuid, reason: &str) -> Result<(), ApiError>;
    /// Payout rows created in the window, any status. Request velocity.
    fn count_since(&self, creator_id: Uuid, since: DateTime<Utc>) -> Result<i64, ApiError>;
    /// Payout rows created in the window excluding `failed`. Monthly cap.
    fn count_countable_since(
        &self,
        creator_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<i64, ApiError>;
    fn stale_processing(&self, older_than: DateTime<Utc>) -> Result<Vec<Payout>, ApiError>;
}

pub struct PgPayoutRepository {
    pool: DbPool,
}

impl PgPayoutRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl PayoutRepository for PgPayoutRepository {
    fn create(&self, new_payout: NewPayout) -> Result<Payout, ApiError> {
        let mut conn = self.pool.get()?;
        diesel::insert_into(payouts::table)
            .values(&new_payout)
            .get_result::<Payout>(&mut conn)
            .map_err(ApiError::from)
    }

    fn find(&self, id: Uuid) -> Result<Option<Payout>, ApiError> {
        let mut conn = self.pool.get()?;
        payouts::table
            .find(id)
            .first::<Payout>(&mut conn)
            .optional()
            .map_err(ApiError::from)
    }

    fn mark_completed(&self, id: Uuid, transfer_id: &str) -> Result<(), ApiError> {
        let mut conn = self.pool.get()?;
        diesel::update(payouts::table.find(id))
            .set((
                payouts::status.eq(PayoutState::Completed),
                payouts::external_transfer_id.eq(transfer_id),
                payouts::processed_at.eq(Utc::now()),
            ))
            .execute(&mut conn)?;
        Ok(())
    }

    fn mark_processing_transfer(&self, id: Uuid, transfer_id: &str) -> Result<(), ApiError> {
        let mut conn = self.pool.get()?;
        diesel::update(payouts::table.find(id))
            .set(payouts::external_transfer_id.eq(transfer_id))
            .execute(&mut conn)?;
        Ok(())
    }

    fn mark_failed(&self, id: Uuid, reason: &str) -> Result<(), ApiError> {
        let mut conn = self.pool.get()?;
        diesel::update(payouts::table.find(id))
            .set((
                payouts::status.eq(PayoutState::Failed),
                payouts::failed_reason.eq(reason),
            ))
            .execute(&mut conn)?;
        Ok(())
    }

    fn count_since(&self, creator_id: Uuid, since: DateTime<Utc>) -> Result<i64, ApiError> {
        let mut conn = self.pool.get()?;
        payouts::table
            .filter(payouts::creator_id.eq(creator_id))
            .filter(payouts::created_at.ge(since))
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(ApiError::from)
    }

    fn count_countable_since(
        &self,
        creator_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<i64, ApiError> {
        let mut conn = self.pool.get()?;
        payouts::table
            .filter(payouts::creator_id.eq(creator_id))
            .filter(payouts::created_at.ge(since))
            .filter(payouts::status.ne(PayoutState::Failed))
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(ApiError::from)
    }

    fn stale_processing(&self, older_than: DateTime<Utc>) -> Result<Vec<Payout>, ApiError> {
        let mut conn = self.pool.get()?;
        payouts::table
            .filter(payouts::status.eq(PayoutState::Processing))
            .filter(payouts::created_at.lt(older_than))
            .order(payouts::created_at.asc())
            .load::<Payout>(&mut conn)
            .map_err(ApiError::from)
    }
}
