use crate::app_state::AppState;
use crate::services::fraud_service::FraudService;
use fanpix_primitives::error::ApiError;
use fanpix_primitives::models::chargeback::{Chargeback, NewChargeback};
use fanpix_primitives::models::chargeback_dto::RecordChargebackRequest;
use fanpix_primitives::models::enum_types::{ChargebackState, FraudFlagKind};
use fanpix_primitives::models::fraud_flag::NewFraudFlag;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

/// Owns the chargeback lifecycle and is the only writer of the creator's
/// chargeback counters.
pub struct ChargebackService;

impl ChargebackService {
    pub fn record(
        state: &AppState,
        req: RecordChargebackRequest,
    ) -> Result<Chargeback, ApiError> {
        req.validate()?;
        let creator_id = req.creator_id;

        let creator = state
            .stores
            .creators
            .find(creator_id)?
            .ok_or_else(|| ApiError::NotFound("Creator".into()))?;

        let chargeback = state.stores.chargebacks.create(NewChargeback {
            payment_id: req.payment_id,
            creator_id,
            amount: req.amount,
            external_chargeback_id: req.external_chargeback_id,
        })?;

        let flag = NewFraudFlag {
            subscriber_id: None,
            creator_id: Some(creator_id),
            flag_kind: FraudFlagKind::Chargeback,
            severity: 4,
            description: "Chargeback received on payment".into(),
            metadata: json!({
                "chargeback_id": chargeback.id,
                "payment_id": chargeback.payment_id,
                "amount": chargeback.amount,
            }),
        };
        if let Err(e) = FraudService::create(state, flag) {
            warn!(error = %e, %creator_id, "Failed to record chargeback flag");
        }

        let count = state.stores.creators.increment_chargeback_count(creator_id)?;
        if count >= state.config.settlement.chargeback_block_threshold && !creator.payouts_blocked
        {
            state
                .stores
                .creators
                .block_payouts(creator_id, "multiple chargebacks")?;
            warn!(%creator_id, count, "Payouts blocked after repeated chargebacks");
        }

        info!(
            chargeback_id = %chargeback.id,
            %creator_id,
            amount = chargeback.amount,
            count,
            "Chargeback recorded"
        );
        Ok(chargeback)
    }

    /// pending → disputed → {won, lost}; a direct pending → won|lost is
    /// also allowed, and re-delivering the current status is a no-op
    /// transition so gateway webhooks can repeat themselves safely.
    pub fn update_status(
        state: &AppState,
        chargeback_id: Uuid,
        new_status: ChargebackState,
    ) -> Result<Chargeback, ApiError> {
        let chargeback = state
            .stores
            .chargebacks
            .find(chargeback_id)?
            .ok_or_else(|| ApiError::NotFound("Chargeback".into()))?;

        if !Self::transition_allowed(chargeback.status, new_status) {
            return Err(ApiError::Validation(format!(
                "illegal chargeback transition {} -> {}",
                chargeback.status, new_status
            )));
        }

        state.stores.chargebacks.update_status(chargeback_id, new_status)?;

        match new_status {
            ChargebackState::Lost if !chargeback.penalty_applied => {
                Self::apply_penalty(state, &chargeback)?;
            }
            ChargebackState::Won if chargeback.status != ChargebackState::Won => {
                let count = state
                    .stores
                    .creators
                    .decrement_chargeback_count(chargeback.creator_id)?;
                info!(
                    chargeback_id = %chargeback.id,
                    creator_id = %chargeback.creator_id,
                    count,
                    "Chargeback won, count decremented"
                );
            }
            _ => {}
        }

        state
            .stores
            .chargebacks
            .find(chargeback_id)?
            .ok_or_else(|| ApiError::Internal("chargeback row disappeared".into()))
    }

    fn transition_allowed(from: ChargebackState, to: ChargebackState) -> bool {
        use ChargebackState::*;
        matches!(
            (from, to),
            (Pending, Disputed)
                | (Pending, Won)
                | (Pending, Lost)
                | (Disputed, Won)
                | (Disputed, Lost)
        ) || from == to
    }

    /// The penalty lands on `chargeback_penalty_balance` first, then is
    /// settled from the available balance immediately when it covers the
    /// full amount; otherwise it stays outstanding for the settlement
    /// sweep. `penalty_applied` makes this once-only.
    fn apply_penalty(state: &AppState, chargeback: &Chargeback) -> Result<(), ApiError> {
        let amount = chargeback.amount;

        state
            .stores
            .creators
            .add_penalty_balance(chargeback.creator_id, amount)?;

        match state.stores.balances.debit(chargeback.creator_id, amount) {
            Ok(()) => {
                state
                    .stores
                    .creators
                    .reduce_penalty_balance(chargeback.creator_id, amount)?;
                info!(
                    chargeback_id = %chargeback.id,
                    creator_id = %chargeback.creator_id,
                    amount,
                    "Chargeback penalty settled from balance"
                );
            }
            Err(ApiError::InsufficientFunds) => {
                info!(
                    chargeback_id = %chargeback.id,
                    creator_id = %chargeback.creator_id,
                    amount,
                    "Chargeback penalty left outstanding"
                );
            }
            Err(e) => return Err(e),
        }

        state.stores.chargebacks.set_penalty(chargeback.id, amount)
    }
}
