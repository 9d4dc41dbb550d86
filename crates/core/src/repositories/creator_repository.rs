use crate::repositories::DbPool;
use chrono::Utc;
use diesel::prelude::*;
use fanpix_primitives::error::ApiError;
use fanpix_primitives::models::creator::Creator;
use fanpix_primitives::schema::creators;
use uuid::Uuid;

pub trait CreatorRepository: Send + Sync {
    fn find(&self, id: Uuid) -> Result<Option<Creator>, ApiError>;
    fn find_by_subscriber(&self, subscriber_id: Uuid) -> Result<Option<Creator>, ApiError>;
    /// Match on the normalized or originally-formatted document, excluding
    /// the requesting creator profile when one exists.
    fn find_by_document(
        &self,
        normalized: &str,
        raw: &str,
        exclude: Option<Uuid>,
    ) -> Result<Option<Creator>, ApiError>;
    /// Returns the count after the increment.
    fn increment_chargeback_count(&self, id: Uuid) -> Result<i32, ApiError>;
    /// Floored at zero; returns the count after the decrement.
    fn decrement_chargeback_count(&self, id: Uuid) -> Result<i32, ApiError>;
    fn block_payouts(&self, id: Uuid, reason: &str) -> Result<(), ApiError>;
    fn add_penalty_balance(&self, id: Uuid, amount: i64) -> Result<(), ApiError>;
    /// Floored at zero.
    fn reduce_penalty_balance(&self, id: Uuid, amount: i64) -> Result<(), ApiError>;
    fn with_outstanding_penalty(&self) -> Result<Vec<Creator>, ApiError>;
}

pub struct PgCreatorRepository {
    pool: DbPool,
}

impl PgCreatorRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl CreatorRepository for PgCreatorRepository {
    fn find(&self, id: Uuid) -> Result<Option<Creator>, ApiError> {
        let mut conn = self.pool.get()?;
        creators::table
            .find(id)
            .first::<Creator>(&mut conn)
            .optional()
            .map_err(ApiError::from)
    }

    fn find_by_subscriber(&self, subscriber_id: Uuid) -> Result<Option<Creator>, ApiError> {
        let mut conn = self.pool.get()?;
        creators::table
            .filter(creators::subscriber_id.eq(subscriber_id))
            .first::<Creator>(&mut conn)
            .optional()
            .map_err(ApiError::from)
    }

    fn find_by_document(
        &self,
        normalized: &str,
        raw: &str,
        exclude: Option<Uuid>,
    ) -> Result<Option<Creator>, ApiError> {
        let mut conn = self.pool.get()?;
        let mut query = creators::table
            .filter(
                creators::cpf_cnpj
                    .eq(normalized)
                    .or(creators::cpf_cnpj.eq(raw)),
            )
            .into_boxed();

        if let Some(exclude) = exclude {
            query = query.filter(creators::id.ne(exclude));
        }

        query
            .first::<Creator>(&mut conn)
            .optional()
            .map_err(ApiError::from)
    }

    fn increment_chargeback_count(&self, id: Uuid) -> Result<i32, ApiError> {
        let mut conn = self.pool.get()?;
        diesel::update(creators::table.find(id))
            .set((
                creators::chargeback_count.eq(creators::chargeback_count + 1),
                creators::updated_at.eq(Utc::now()),
            ))
            .returning(creators::chargeback_count)
            .get_result::<i32>(&mut conn)
            .map_err(ApiError::from)
    }

    fn decrement_chargeback_count(&self, id: Uuid) -> Result<i32, ApiError> {
        let mut conn = self.pool.get()?;
        let updated = diesel::update(creators::table)
            .filter(creators::id.eq(id))
            .filter(creators::chargeback_count.gt(0))
            .set((
                creators::chargeback_count.eq(creators::chargeback_count - 1),
                creators::updated_at.eq(Utc::now()),
            ))
            .returning(creators::chargeback_count)
            .get_result::<i32>(&mut conn)
            .optional()?;

        // no row matched: the count was already zero
        Ok(updated.unwrap_or(0))
    }

    fn block_payouts(&self, id: Uuid, reason: &str) -> Result<(), ApiError> {
        let mut conn = self.pool.get()?;
        diesel::update(creators::table.find(id))
            .set((
                creators::payouts_blocked.eq(true),
                creators::payout_block_reason.eq(reason),
                creators::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)?;
        Ok(())
    }

    fn add_penalty_balance(&self, id: Uuid, amount: i64) -> Result<(), ApiError> {
        let mut conn = self.pool.get()?;
        diesel::update(creators::table.find(id))
            .set((
                creators::chargeback_penalty_balance
                    .eq(creators::chargeback_penalty_balance + amount),
                creators::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)?;
        Ok(())
    }

    fn reduce_penalty_balance(&self, id: Uuid, amount: i64) -> Result<(), ApiError> {
        let mut conn = self.pool.get()?;
        let updated = diesel::update(creators::table)
            .filter(creators::id.eq(id))
            .filter(creators::chargeback_penalty_balance.ge(amount))
            .set((
                creators::chargeback_penalty_balance
                    .eq(creators::chargeback_penalty_balance - amount),
                creators::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)?;

        if updated == 0 {
            diesel::update(creators::table.find(id))
                .set((
                    creators::chargeback_penalty_balance.eq(0),
                    creators::updated_at.eq(Utc::now()),
                ))
                .execute(&mut conn)?;
        }
        Ok(())
    }

    fn with_outstanding_penalty(&self) -> Result<Vec<Creator>, ApiError> {
        let mut conn = self.pool.get()?;
        creators::table
            .filter(creators::chargeback_penalty_balance.gt(0))
            .order(creators::updated_at.asc())
            .load::<Creator>(&mut conn)
            .map_err(ApiError::from)
    }
}
