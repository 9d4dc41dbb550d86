use crate::repositories::DbPool;
use chrono::Utc;
use diesel::prelude::*;
use fanpix_primitives::error::ApiError;
use fanpix_primitives::models::chargeback::{Chargeback, NewChargeback};
use fanpix_primitives::models::enum_types::ChargebackState;
use fanpix_primitives::schema::chargebacks;
use uuid::Uuid;

pub trait ChargebackRepository: Send + Sync {
    fn create(&self, new_chargeback: NewChargeback) -> Result<Chargeback, ApiError>;
    fn find(&self, id: Uuid) -> Result<Option<Chargeback>, ApiError>;
    fn update_status(&self, id: Uuid, status: ChargebackState) -> Result<(), ApiError>;
    /// Records the penalty and raises `penalty_applied`; called at most
    /// once per chargeback.
    fn set_penalty(&self, id: Uuid, amount: i64) -> Result<(), ApiError>;
}

pub struct PgChargebackRepository {
    pool: DbPool,
}

impl PgChargebackRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl ChargebackRepository for PgChargebackRepository {
    fn create(&self, new_chargeback: NewChargeback) -> Result<Chargeback, ApiError> {
        let mut conn = self.pool.get()?;
        diesel::insert_into(chargebacks::table)
            .values(&new_chargeback)
            .get_result::<Chargeback>(&mut conn)
            .map_err(ApiError::from)
    }

    fn find(&self, id: Uuid) -> Result<Option<Chargeback>, ApiError> {
        let mut conn = self.pool.get()?;
        chargebacks::table
            .find(id)
            .first::<Chargeback>(&mut conn)
            .optional()
            .map_err(ApiError::from)
    }

    fn update_status(&self, id: Uuid, status: ChargebackState) -> Result<(), ApiError> {
        let mut conn = self.pool.get()?;
        diesel::update(chargebacks::table.find(id))
            .set((
                chargebacks::status.eq(status),
                chargebacks::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)?;
        Ok(())
    }

    fn set_penalty(&self, id: Uuid, amount: i64) -> Result<(), ApiError> {
        let mut conn = self.pool.get()?;
        diesel::update(chargebacks::table.find(id))
            .set((
                chargebacks::penalty_amount.eq(amount),
                chargebacks::penalty_applied.eq(true),
                chargebacks::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)?;
        Ok(())
    }
}
