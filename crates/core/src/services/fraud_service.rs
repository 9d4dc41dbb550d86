use crate::app_state::AppState;
use fanpix_primitives::error::ApiError;
use fanpix_primitives::models::fraud_dto::FraudFlagFilter;
use fanpix_primitives::models::fraud_flag::{FraudFlag, NewFraudFlag};
use tracing::info;
use uuid::Uuid;

const MIN_SEVERITY: i32 = 1;
const MAX_SEVERITY: i32 = 5;

/// Advisory signal registry. Components only create flags; resolution is
/// an administrative action and the single mutation a flag ever sees.
pub struct FraudService;

impl FraudService {
    pub fn create(state: &AppState, mut flag: NewFraudFlag) -> Result<FraudFlag, ApiError> {
        flag.severity = flag.severity.clamp(MIN_SEVERITY, MAX_SEVERITY);

        let created = state.stores.fraud_flags.create(flag)?;
        info!(
            flag_id = %created.id,
            kind = %created.flag_kind,
            severity = created.severity,
            "Fraud flag raised"
        );
        Ok(created)
    }

    pub fn resolve(
        state: &AppState,
        flag_id: Uuid,
        resolver_id: Uuid,
        resolution: &str,
    ) -> Result<FraudFlag, ApiError> {
        let flag = state
            .stores
            .fraud_flags
            .find(flag_id)?
            .ok_or_else(|| ApiError::NotFound("Fraud flag".into()))?;

        if flag.is_resolved {
            return Err(ApiError::Validation("fraud flag is already resolved".into()));
        }

        state.stores.fraud_flags.resolve(flag_id, resolver_id, resolution)
    }

    pub fn list(state: &AppState, filter: &FraudFlagFilter) -> Result<Vec<FraudFlag>, ApiError> {
        state.stores.fraud_flags.list(filter)
    }
}
