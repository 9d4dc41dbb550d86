use crate::app_state::AppState;
use chrono::{Duration, Utc};
use fanpix_primitives::error::ApiError;
use fanpix_primitives::models::enum_types::VelocityKind;
use fanpix_primitives::models::velocity_dto::VelocityCheck;
use uuid::Uuid;

/// Trailing-window event counter. This is read-count-then-decide with no
/// reservation step: two requests racing inside the same window can both
/// observe a count below the limit and both proceed. The imprecision is
/// accepted; money movement is still bounded by the ledger's atomic debit.
pub struct VelocityService;

impl VelocityService {
    pub fn check(
        state: &AppState,
        kind: VelocityKind,
        actor_id: Uuid,
        window_minutes: i64,
        limit: i64,
    ) -> Result<VelocityCheck, ApiError> {
        let since = Utc::now() - Duration::minutes(window_minutes);

        let count = match kind {
            VelocityKind::Payment => state
                .stores
                .payments
                .count_by_payer_since(actor_id, since)?,
            VelocityKind::Payout => {
                // payouts are scoped by the creator record behind the actor
                let creator = state
                    .stores
                    .creators
                    .find_by_subscriber(actor_id)?
                    .ok_or_else(|| ApiError::NotFound("Creator".into()))?;
                state.stores.payouts.count_since(creator.id, since)?
            }
        };

        Ok(VelocityCheck {
            allowed: count < limit,
            count,
            limit,
            window_minutes,
        })
    }
}
