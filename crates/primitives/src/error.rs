use axum::response::{IntoResponse, Response};
use diesel::r2d2;
use http::StatusCode;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    Database(diesel::result::Error),
    DatabaseConnection(String),
    NotFound(String),
    Validation(String),
    KycRequired,
    PayoutsBlocked(String),
    RateLimited(String),
    InsufficientFunds,
    BelowMinimum(String),
    Gateway(String),
    Reconciliation(String),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Database(e) => write!(f, "Database error: {}", e),
            ApiError::DatabaseConnection(e) => write!(f, "Database connection error: {}", e),
            ApiError::NotFound(what) => write!(f, "{} not found", what),
            ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
            ApiError::KycRequired => write!(f, "Identity verification required before payouts"),
            ApiError::PayoutsBlocked(reason) => write!(f, "Payouts blocked: {}", reason),
            ApiError::RateLimited(msg) => write!(f, "Rate limited: {}", msg),
            ApiError::InsufficientFunds => write!(f, "Insufficient available balance"),
            ApiError::BelowMinimum(msg) => write!(f, "Amount below minimum: {}", msg),
            ApiError::Gateway(msg) => write!(f, "Settlement gateway error: {}", msg),
            ApiError::Reconciliation(msg) => write!(f, "Reconciliation required: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Database(e) => Some(e),
            _ => None,
        }
    }
}

impl From<r2d2::PoolError> for ApiError {
    fn from(err: r2d2::PoolError) -> Self {
        ApiError::DatabaseConnection(err.to_string())
    }
}

impl From<diesel::result::Error> for ApiError {
    fn from(err: diesel::result::Error) -> Self {
        ApiError::Database(err)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<validator::ValidationError> for ApiError {
    fn from(err: validator::ValidationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<PixError> for ApiError {
    fn from(err: PixError) -> Self {
        ApiError::Gateway(err.to_string())
    }
}

impl From<ApiError> for (StatusCode, String) {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Database(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            ),
            ApiError::DatabaseConnection(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database connection error: {}", e),
            ),
            ApiError::NotFound(what) => (StatusCode::NOT_FOUND, format!("{} not found", what)),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::KycRequired => (
                StatusCode::FORBIDDEN,
                "Identity verification required before payouts".to_string(),
            ),
            ApiError::PayoutsBlocked(reason) => {
                (StatusCode::FORBIDDEN, format!("Payouts blocked: {}", reason))
            }
            ApiError::RateLimited(msg) => (StatusCode::TOO_MANY_REQUESTS, msg),
            ApiError::InsufficientFunds => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Insufficient available balance".to_string(),
            ),
            ApiError::BelowMinimum(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Gateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            ApiError::Reconciliation(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Reconciliation required: {}", msg),
            ),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal error: {}", msg),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body): (StatusCode, String) = self.into();
        (status, body).into_response()
    }
}

/// Errors from the PIX settlement gateway client. Raw gateway payloads stay
/// in logs and `failed_reason`; callers only see the sanitized mapping.
#[derive(Debug)]
pub enum PixError {
    RequestFailed,
    Api(String),
}

impl fmt::Display for PixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixError::RequestFailed => write!(f, "gateway request failed"),
            PixError::Api(msg) => write!(f, "gateway rejected the transfer: {}", msg),
        }
    }
}

impl std::error::Error for PixError {}
