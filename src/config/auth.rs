//! Mock authentication configuration

use serde::Deserialize;

fn default_otp_send_latency_ms() -> u64 {
    600
}

fn default_otp_verify_latency_ms() -> u64 {
    250
}

fn default_social_fetch_latency_ms() -> u64 {
    600
}

/// Simulated-latency settings for the mock auth services
///
/// Defaults match what the production mocks ship with; tests and local
/// tooling can dial them down to zero.
#[derive(Debug, Clone, Deserialize)]
pub struct MockAuthConfig {
    /// Simulated OTP delivery latency in milliseconds
    #[serde(default = "default_otp_send_latency_ms")]
    pub otp_send_latency_ms: u64,

    /// Simulated OTP verification latency in milliseconds
    #[serde(default = "default_otp_verify_latency_ms")]
    pub otp_verify_latency_ms: u64,

    /// Simulated social profile fetch latency in milliseconds
    #[serde(default = "default_social_fetch_latency_ms")]
    pub social_fetch_latency_ms: u64,
}

impl Default for MockAuthConfig {
    fn default() -> Self {
        Self {
            otp_send_latency_ms: default_otp_send_latency_ms(),
            otp_verify_latency_ms: default_otp_verify_latency_ms(),
            social_fetch_latency_ms: default_social_fetch_latency_ms(),
        }
    }
}
