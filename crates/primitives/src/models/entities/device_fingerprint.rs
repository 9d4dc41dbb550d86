use chrono::{DateTime, Utc};
use diesel::{Associations, Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

/// One (subscriber, fingerprint) pair. The same fingerprint appearing under
/// several subscribers is a correlation signal, not a constraint violation.
#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::device_fingerprints)]
#[diesel(belongs_to(crate::models::entities::subscriber::Subscriber))]
pub struct DeviceFingerprint {
    pub id: Uuid,
    pub subscriber_id: Uuid,
    pub fingerprint: String,
    pub first_seen_at: DateTime<Utc>,
    pub last_seen_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::device_fingerprints)]
pub struct NewDeviceFingerprint {
    pub subscriber_id: Uuid,
    pub fingerprint: String,
}
