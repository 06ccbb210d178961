//! OTP authenticator port for phone-number sign-in.
//!
//! Defines the contract for one-time-passcode issuance and verification.
//! The shipped implementation is a mock with simulated latency
//! (`adapters::auth::MockOtpAuthenticator`); a real SMS gateway adapter can
//! be swapped in without touching call sites.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A one-time passcode issued for a phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OtpCode(String);

impl OtpCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OtpCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors from OTP operations.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The phone number contained no digits or leading plus sign.
    #[error("Invalid phone number: no digits to dial")]
    InvalidPhoneNumber,

    /// The underlying SMS gateway rejected or dropped the message.
    ///
    /// Never produced by the mock; reserved for real gateway adapters.
    #[error("OTP delivery failed: {0}")]
    DeliveryFailed(String),
}

/// Port for phone-OTP issuance and verification.
///
/// # Contract
///
/// - `send_otp` must reject input that strips to nothing with
///   `AuthError::InvalidPhoneNumber` before any delivery attempt.
/// - `verify_otp` reports a mismatched code as `Ok(false)`, not an error.
#[async_trait]
pub trait OtpAuthenticator: Send + Sync {
    /// Issues a one-time passcode for the given phone number.
    ///
    /// Input is sanitized to ASCII digits plus an optional leading `+`
    /// before use.
    async fn send_otp(&self, phone_number: &str) -> Result<OtpCode, AuthError>;

    /// Checks a user-entered code against the issued one.
    ///
    /// Surrounding whitespace in the input is ignored.
    async fn verify_otp(&self, code: &str) -> Result<bool, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn otp_authenticator_is_object_safe() {
        fn _accepts_dyn(_auth: &dyn OtpAuthenticator) {}
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn OtpAuthenticator>>();
    }

    #[test]
    fn otp_code_displays_inner_value() {
        let code = OtpCode::new("123456");
        assert_eq!(code.as_str(), "123456");
        assert_eq!(format!("{}", code), "123456");
    }

    #[test]
    fn auth_error_messages() {
        assert_eq!(
            AuthError::InvalidPhoneNumber.to_string(),
            "Invalid phone number: no digits to dial"
        );
        assert!(AuthError::DeliveryFailed("carrier timeout".into())
            .to_string()
            .contains("carrier timeout"));
    }
}
