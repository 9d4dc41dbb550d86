use crate::repositories::DbPool;
use chrono::Utc;
use diesel::prelude::*;
use fanpix_primitives::error::ApiError;
use fanpix_primitives::models::device_fingerprint::{DeviceFingerprint, NewDeviceFingerprint};
use fanpix_primitives::schema::device_fingerprints;
use uuid::Uuid;

pub trait DeviceFingerprintRepository: Send + Sync {
    /// Refresh `last_seen_at` for an existing (subscriber, fingerprint)
    /// pair. Returns whether the pair existed.
    fn touch(&self, subscriber_id: Uuid, fingerprint: &str) -> Result<bool, ApiError>;
    fn insert(&self, record: NewDeviceFingerprint) -> Result<DeviceFingerprint, ApiError>;
    /// Other subscribers already associated with the same fingerprint.
    fn other_subscribers_with(
        &self,
        fingerprint: &str,
        excluding: Uuid,
    ) -> Result<Vec<Uuid>, ApiError>;
}

pub struct PgDeviceFingerprintRepository {
    pool: DbPool,
}

impl PgDeviceFingerprintRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl DeviceFingerprintRepository for PgDeviceFingerprintRepository {
    fn touch(&self, subscriber_id: Uuid, fingerprint: &str) -> Result<bool, ApiError> {
        let mut conn = self.pool.get()?;
        let updated = diesel::update(device_fingerprints::table)
            .filter(device_fingerprints::subscriber_id.eq(subscriber_id))
            .filter(device_fingerprints::fingerprint.eq(fingerprint))
            .set(device_fingerprints::last_seen_at.eq(Utc::now()))
            .execute(&mut conn)?;

        Ok(updated > 0)
    }

    fn insert(&self, record: NewDeviceFingerprint) -> Result<DeviceFingerprint, ApiError> {
        let mut conn = self.pool.get()?;
        diesel::insert_into(device_fingerprints::table)
            .values(&record)
            .get_result::<DeviceFingerprint>(&mut conn)
            .map_err(ApiError::from)
    }

    fn other_subscribers_with(
        &self,
        fingerprint: &str,
        excluding: Uuid,
    ) -> Result<Vec<Uuid>, ApiError> {
        let mut conn = self.pool.get()?;
        device_fingerprints::table
            .filter(device_fingerprints::fingerprint.eq(fingerprint))
            .filter(device_fingerprints::subscriber_id.ne(excluding))
            .select(device_fingerprints::subscriber_id)
            .distinct()
            .load::<Uuid>(&mut conn)
            .map_err(ApiError::from)
    }
}
