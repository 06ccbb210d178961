//! Mock phone-OTP authenticator.
//!
//! Simulates the OTP flow with fixed latencies and a constant code. No SMS
//! is sent; the only side effect is the simulated delay. Latencies are
//! injectable so tests run without real sleeps.
//!
//! # Example
//!
//! ```ignore
//! let auth = MockOtpAuthenticator::new().with_send_latency(Duration::ZERO);
//! let code = auth.send_otp("+49 171 555 0134").await?;
//! assert_eq!(code.as_str(), auth.otp_code());
//! ```

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;

use crate::config::MockAuthConfig;
use crate::ports::{AuthError, OtpAuthenticator, OtpCode};

/// The constant code every send resolves to.
const MOCK_OTP_CODE: &str = "123456";

/// Simulated SMS round-trip latency.
const DEFAULT_SEND_LATENCY: Duration = Duration::from_millis(600);

/// Simulated verification latency.
const DEFAULT_VERIFY_LATENCY: Duration = Duration::from_millis(250);

/// Mock OTP authenticator with simulated latency and a constant code.
#[derive(Debug, Clone)]
pub struct MockOtpAuthenticator {
    send_latency: Duration,
    verify_latency: Duration,
}

impl MockOtpAuthenticator {
    /// Creates an authenticator with the default simulated latencies.
    pub fn new() -> Self {
        Self {
            send_latency: DEFAULT_SEND_LATENCY,
            verify_latency: DEFAULT_VERIFY_LATENCY,
        }
    }

    /// Creates an authenticator with latencies from configuration.
    pub fn from_config(config: &MockAuthConfig) -> Self {
        Self {
            send_latency: Duration::from_millis(config.otp_send_latency_ms),
            verify_latency: Duration::from_millis(config.otp_verify_latency_ms),
        }
    }

    /// Overrides the send latency.
    pub fn with_send_latency(mut self, latency: Duration) -> Self {
        self.send_latency = latency;
        self
    }

    /// Overrides the verify latency.
    pub fn with_verify_latency(mut self, latency: Duration) -> Self {
        self.verify_latency = latency;
        self
    }

    /// Returns the constant code. Test/debug affordance.
    pub fn otp_code(&self) -> &'static str {
        MOCK_OTP_CODE
    }
}

impl Default for MockOtpAuthenticator {
    fn default() -> Self {
        Self::new()
    }
}

/// Strips everything except ASCII digits and a leading plus sign.
///
/// A `+` is kept only as the first retained character; later plus signs
/// and all other characters are dropped.
fn sanitize_phone_number(raw: &str) -> String {
    let mut sanitized = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_digit() {
            sanitized.push(c);
        } else if c == '+' && sanitized.is_empty() {
            sanitized.push(c);
        }
    }
    sanitized
}

#[async_trait]
impl OtpAuthenticator for MockOtpAuthenticator {
    async fn send_otp(&self, phone_number: &str) -> Result<OtpCode, AuthError> {
        let sanitized = sanitize_phone_number(phone_number);
        if sanitized.is_empty() {
            tracing::warn!(input = %phone_number, "Rejected phone number with no dialable characters");
            return Err(AuthError::InvalidPhoneNumber);
        }

        sleep(self.send_latency).await;

        tracing::debug!(phone = %sanitized, "Issued mock OTP");
        Ok(OtpCode::new(MOCK_OTP_CODE))
    }

    async fn verify_otp(&self, code: &str) -> Result<bool, AuthError> {
        sleep(self.verify_latency).await;
        Ok(code.trim() == MOCK_OTP_CODE)
    }
}
