use serde::Serialize;
use utoipa::ToSchema;

/// Advisory result of a velocity check. `count` is the number of events
/// already inside the trailing window; `allowed` is `count < limit`.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct VelocityCheck {
    pub allowed: bool,
    pub count: i64,
    pub limit: i64,
    pub window_minutes: i64,
}
