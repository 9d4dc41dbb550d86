use crate::repositories::DbPool;
use chrono::Utc;
use diesel::prelude::*;
use fanpix_primitives::error::ApiError;
use fanpix_primitives::models::balance::Balance;
use fanpix_primitives::schema::balances;
use uuid::Uuid;

/// The only writers of a creator's balance row. Both mutations are a
/// single server-side arithmetic UPDATE; the debit carries its
/// sufficiency check in the same statement, so two concurrent payouts
/// cannot both observe sufficient funds and overdraw.
pub trait BalanceRepository: Send + Sync {
    fn get(&self, creator_id: Uuid) -> Result<Balance, ApiError>;
    fn credit(&self, creator_id: Uuid, amount: i64) -> Result<(), ApiError>;
    fn debit(&self, creator_id: Uuid, amount: i64) -> Result<(), ApiError>;
}

pub struct PgBalanceRepository {
    pool: DbPool,
}

impl PgBalanceRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl BalanceRepository for PgBalanceRepository {
    fn get(&self, creator_id: Uuid) -> Result<Balance, ApiError> {
        let mut conn = self.pool.get()?;
        balances::table
            .filter(balances::creator_id.eq(creator_id))
            .first::<Balance>(&mut conn)
            .optional()?
            .ok_or_else(|| ApiError::NotFound("Balance".into()))
    }

    fn credit(&self, creator_id: Uuid, amount: i64) -> Result<(), ApiError> {
        let mut conn = self.pool.get()?;
        let updated = diesel::update(balances::table)
            .filter(balances::creator_id.eq(creator_id))
            .set((
                balances::available.eq(balances::available + amount),
                balances::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)?;

        if updated == 0 {
            return Err(ApiError::NotFound("Balance".into()));
        }
        Ok(())
    }

    fn debit(&self, creator_id: Uuid, amount: i64) -> Result<(), ApiError> {
        let mut conn = self.pool.get()?;
        let updated = diesel::update(balances::table)
            .filter(balances::creator_id.eq(creator_id))
            .filter(balances::available.ge(amount))
            .set((
                balances::available.eq(balances::available - amount),
                balances::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)?;

        if updated == 0 {
            return Err(ApiError::InsufficientFunds);
        }
        Ok(())
    }
}
