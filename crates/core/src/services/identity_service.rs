use crate::app_state::AppState;
use crate::services::fraud_service::FraudService;
use fanpix_primitives::error::ApiError;
use fanpix_primitives::models::device_dto::DeviceSignals;
use fanpix_primitives::models::device_fingerprint::NewDeviceFingerprint;
use fanpix_primitives::models::enum_types::FraudFlagKind;
use fanpix_primitives::models::fraud_flag::NewFraudFlag;
use fanpix_primitives::utility::{normalize_document, validate_document};
use serde_json::json;
use sha2::{Digest, Sha256};
use tracing::warn;
use uuid::Uuid;

/// The identity the supplied document already belongs to, when it is not
/// the requester's own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityMatch {
    Subscriber(Uuid),
    Creator(Uuid),
}

pub struct IdentityService;

impl IdentityService {
    /// Scan both identity tables for the document, excluding the
    /// requesting subscriber and any creator profile it owns. Matches on
    /// the normalized digits or the originally-formatted value.
    pub fn find_duplicate_document(
        state: &AppState,
        document: &str,
        requester: Uuid,
    ) -> Result<Option<IdentityMatch>, ApiError> {
        validate_document(document)?;
        let normalized = normalize_document(document);

        if let Some(subscriber) =
            state
                .stores
                .subscribers
                .find_by_document(&normalized, document, Some(requester))?
        {
            return Ok(Some(IdentityMatch::Subscriber(subscriber.id)));
        }

        let own_creator = state
            .stores
            .creators
            .find_by_subscriber(requester)?
            .map(|c| c.id);
        if let Some(creator) =
            state
                .stores
                .creators
                .find_by_document(&normalized, document, own_creator)?
        {
            return Ok(Some(IdentityMatch::Creator(creator.id)));
        }

        Ok(None)
    }

    /// Record a device sighting. Known (subscriber, fingerprint) pairs
    /// just refresh `last_seen_at`; a new pair whose fingerprint already
    /// belongs to someone else raises a correlation flag. Returns the
    /// fingerprint digest.
    pub fn record_fingerprint(
        state: &AppState,
        subscriber_id: Uuid,
        signals: &DeviceSignals,
    ) -> Result<String, ApiError> {
        let fingerprint = Self::digest(signals);

        if state.stores.fingerprints.touch(subscriber_id, &fingerprint)? {
            return Ok(fingerprint);
        }

        state.stores.fingerprints.insert(NewDeviceFingerprint {
            subscriber_id,
            fingerprint: fingerprint.clone(),
        })?;

        let others = state
            .stores
            .fingerprints
            .other_subscribers_with(&fingerprint, subscriber_id)?;

        if !others.is_empty() {
            let flag = NewFraudFlag {
                subscriber_id: Some(subscriber_id),
                creator_id: None,
                flag_kind: FraudFlagKind::DeviceFingerprint,
                severity: 3,
                description: "Device fingerprint shared across accounts".into(),
                metadata: json!({
                    "fingerprint": fingerprint,
                    "also_seen_on": others,
                }),
            };
            // advisory only; a flag failure never fails the recording
            if let Err(e) = FraudService::create(state, flag) {
                warn!(error = %e, %subscriber_id, "Failed to record device fingerprint flag");
            }
        }

        Ok(fingerprint)
    }

    fn digest(signals: &DeviceSignals) -> String {
        let mut hasher = Sha256::new();
        for part in [
            &signals.user_agent,
            &signals.screen_resolution,
            &signals.timezone,
            &signals.language,
            &signals.ip_address,
        ] {
            hasher.update(part.as_bytes());
            hasher.update(b"\n");
        }
        hex::encode(hasher.finalize())
    }
}
