use crate::app_state::AppState;
use crate::services::fraud_service::FraudService;
use crate::services::ledger_service::LedgerService;
use crate::services::velocity_service::VelocityService;
use chrono::{Duration, Utc};
use fanpix_primitives::error::{ApiError, PixError};
use fanpix_primitives::models::enum_types::{FraudFlagKind, KycStatus, PayoutState, VelocityKind};
use fanpix_primitives::models::fraud_flag::NewFraudFlag;
use fanpix_primitives::models::payout::{NewPayout, Payout};
use fanpix_primitives::models::payout_dto::{PayoutRequest, PayoutResponse};
use fanpix_primitives::models::pix_dto::PixTransferStatus;
use serde_json::json;
use tracing::{error, info, warn};
use uuid::Uuid;
use validator::Validate;

const MONTHLY_WINDOW_DAYS: i64 = 30;

pub struct PayoutService;

impl PayoutService {
    /// Validate, debit, transfer. Checks run in a fixed order and the
    /// first failure aborts before any ledger mutation; once the debit has
    /// happened, every failure path credits the gross back before the
    /// payout is marked failed.
    ///
    /// The monthly cap counts non-failed payouts in a trailing 30-day
    /// window without locking against a request that is mid-flight, so two
    /// simultaneous requests near the boundary can both pass the count.
    /// Known gap carried from the original design; the atomic debit keeps
    /// the failure mode at "one extra payout", never an overdraw.
    pub async fn request_payout(
        state: &AppState,
        creator_id: Uuid,
        req: PayoutRequest,
    ) -> Result<PayoutResponse, ApiError> {
        req.validate()?;
        let settlement = &state.config.settlement;

        // 1. creator exists
        let creator = state
            .stores
            .creators
            .find(creator_id)?
            .ok_or_else(|| ApiError::NotFound("Creator".into()))?;

        // 2. KYC approved
        if creator.kyc_status != KycStatus::Approved {
            return Err(ApiError::KycRequired);
        }

        // 3. payouts not blocked
        if creator.payouts_blocked {
            return Err(ApiError::PayoutsBlocked(
                creator
                    .payout_block_reason
                    .clone()
                    .unwrap_or_else(|| "account under review".into()),
            ));
        }

        // 4. settlement destination configured
        let (pix_key, pix_key_type) = match (&creator.pix_key, creator.pix_key_type) {
            (Some(key), Some(key_type)) => (key.clone(), key_type),
            _ => return Err(ApiError::Validation("PIX key is not configured".into())),
        };

        // 5. request velocity
        let velocity = VelocityService::check(
            state,
            VelocityKind::Payout,
            creator.subscriber_id,
            settlement.velocity_window_minutes,
            settlement.velocity_payout_limit,
        )?;
        if !velocity.allowed {
            let flag = NewFraudFlag {
                subscriber_id: Some(creator.subscriber_id),
                creator_id: Some(creator.id),
                flag_kind: FraudFlagKind::VelocityPayout,
                severity: 3,
                description: "Payout velocity limit exceeded".into(),
                metadata: json!({
                    "count": velocity.count,
                    "limit": velocity.limit,
                    "window_minutes": velocity.window_minutes,
                }),
            };
            if let Err(e) = FraudService::create(state, flag) {
                warn!(error = %e, %creator_id, "Failed to record velocity flag");
            }
            return Err(ApiError::RateLimited(
                "too many payout requests, try again later".into(),
            ));
        }

        // 6. monthly cap (failed payouts don't count)
        let month_start = Utc::now() - Duration::days(MONTHLY_WINDOW_DAYS);
        let monthly = state
            .stores
            .payouts
            .count_countable_since(creator.id, month_start)?;
        let monthly_limit = if creator.is_pro {
            settlement.monthly_payout_limit_pro
        } else {
            settlement.monthly_payout_limit
        };
        if monthly >= monthly_limit {
            return Err(ApiError::RateLimited(format!(
                "monthly payout limit of {} reached",
                monthly_limit
            )));
        }

        // 7. resolve the gross amount
        let balance = state.stores.balances.get(creator.id)?;
        let gross = req.amount.unwrap_or(balance.available);
        if gross < settlement.min_payout_amount {
            return Err(ApiError::BelowMinimum(format!(
                "minimum payout is {} centavos",
                settlement.min_payout_amount
            )));
        }
        if gross > balance.available {
            return Err(ApiError::InsufficientFunds);
        }

        // 8. fee and net
        let fee = settlement.payout_fee;
        let net_amount = gross - fee;
        if net_amount < settlement.min_net_amount {
            return Err(ApiError::BelowMinimum(format!(
                "net amount after the {} centavos fee is below the minimum",
                fee
            )));
        }

        // validation done; record the payout, then take the funds
        let payout = state.stores.payouts.create(NewPayout {
            creator_id: creator.id,
            amount: gross,
            fee,
            net_amount,
            status: PayoutState::Processing,
        })?;

        if let Err(e) = LedgerService::debit(state, creator.id, gross) {
            // a concurrent request took the balance between the check and
            // the debit; nothing was moved, so fail terminally without
            // compensation
            state
                .stores
                .payouts
                .mark_failed(payout.id, "balance debit failed")?;
            return Err(e);
        }

        info!(
            payout_id = %payout.id,
            %creator_id,
            gross,
            net_amount,
            "Payout dispatched to settlement gateway"
        );

        let transfer = match state
            .pix
            .transfer(net_amount, &pix_key, pix_key_type, &payout.id.to_string())
            .await
        {
            Ok(transfer) => transfer,
            Err(gateway_err) => {
                return Err(Self::compensate(state, &payout, gateway_err));
            }
        };

        if transfer.status == PixTransferStatus::Done {
            state.stores.payouts.mark_completed(payout.id, &transfer.id)?;
            info!(payout_id = %payout.id, transfer_id = %transfer.id, "Payout settled");
        } else {
            state
                .stores
                .payouts
                .mark_processing_transfer(payout.id, &transfer.id)?;
            info!(
                payout_id = %payout.id,
                transfer_id = %transfer.id,
                "Payout in flight at the gateway"
            );
        }

        let payout = state
            .stores
            .payouts
            .find(payout.id)?
            .ok_or_else(|| ApiError::Internal("payout row disappeared".into()))?;

        Ok(PayoutResponse {
            payout_id: payout.id,
            amount: payout.amount,
            fee: payout.fee,
            net_amount: payout.net_amount,
            status: payout.status,
            processed_at: payout.processed_at,
        })
    }

    /// The gateway call is the one step the store cannot roll back, so any
    /// failure there (rejection and timeout alike) reverses the debit first
    /// and only then writes the terminal state. A payout is never left both
    /// debited and failed.
    fn compensate(state: &AppState, payout: &Payout, gateway_err: PixError) -> ApiError {
        error!(
            payout_id = %payout.id,
            creator_id = %payout.creator_id,
            error = %gateway_err,
            "Gateway transfer failed, compensating the debit"
        );

        if let Err(credit_err) = LedgerService::credit(state, payout.creator_id, payout.amount) {
            // the debit is stranded; this must surface, never be swallowed
            error!(
                payout_id = %payout.id,
                error = %credit_err,
                "Compensating credit failed, payout remains debited"
            );
            return ApiError::Reconciliation(format!(
                "payout {} debited but the compensating credit failed",
                payout.id
            ));
        }

        if let Err(mark_err) = state
            .stores
            .payouts
            .mark_failed(payout.id, &gateway_err.to_string())
        {
            // funds are back; the stale `processing` row is picked up by
            // the reconciliation sweep
            error!(
                payout_id = %payout.id,
                error = %mark_err,
                "Funds returned but the payout could not be marked failed"
            );
            return mark_err;
        }

        ApiError::Gateway("payout failed, funds returned".into())
    }
}
