use crate::app_state::AppState;
use fanpix_primitives::error::ApiError;
use fanpix_primitives::models::payout_dto::BalanceSummary;
use tracing::info;
use uuid::Uuid;

/// Exclusive owner of balance mutation. Both operations delegate to the
/// store's single-statement arithmetic update; no read-then-write here.
pub struct LedgerService;

impl LedgerService {
    pub fn credit(state: &AppState, creator_id: Uuid, amount: i64) -> Result<(), ApiError> {
        if amount <= 0 {
            return Err(ApiError::Validation("credit amount must be positive".into()));
        }

        state.stores.balances.credit(creator_id, amount)?;
        info!(%creator_id, amount, "Balance credited");
        Ok(())
    }

    /// Fails with `InsufficientFunds` when `available < amount`.
    pub fn debit(state: &AppState, creator_id: Uuid, amount: i64) -> Result<(), ApiError> {
        if amount <= 0 {
            return Err(ApiError::Validation("debit amount must be positive".into()));
        }

        state.stores.balances.debit(creator_id, amount)?;
        info!(%creator_id, amount, "Balance debited");
        Ok(())
    }

    pub fn get_balance(state: &AppState, creator_id: Uuid) -> Result<BalanceSummary, ApiError> {
        let balance = state.stores.balances.get(creator_id)?;

        Ok(BalanceSummary {
            available: balance.available,
            pending: balance.pending,
        })
    }
}
