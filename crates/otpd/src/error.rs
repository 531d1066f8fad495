//! Error types for otpd.

use thiserror::Error;

/// Errors surfaced by the OTP service
#[derive(Debug, Error)]
pub enum OtpdError {
    /// Token absent from the store when a caller required it
    #[error("Token not found: {0}")]
    TokenNotFound(String),

    /// SMS provider failure
    #[error("SMS delivery error: {0}")]
    Sms(String),
}
