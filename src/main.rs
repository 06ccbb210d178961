//! Touchline service wiring binary.
//!
//! Loads and validates configuration, constructs the service adapters, and
//! logs readiness. The mobile front end talks to these services through
//! the library crate; this binary exists as a configuration smoke check
//! for local development and deploy pipelines.

use tracing_subscriber::EnvFilter;

use touchline::adapters::auth::MockOtpAuthenticator;
use touchline::adapters::social::MockSocialProfileFetcher;
use touchline::adapters::stripe::{StripeConfig, StripePaymentAdapter};
use touchline::config::{AppConfig, ConfigError};

#[tokio::main]
async fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    let otp = MockOtpAuthenticator::from_config(&config.auth);
    let _social = MockSocialProfileFetcher::from_config(&config.auth);
    let _payments = StripePaymentAdapter::new(StripeConfig::from_payment_config(&config.payment));

    if config.payment.is_test_mode() {
        // Surface the debug affordance where it is actually useful.
        tracing::info!(mock_otp_code = otp.otp_code(), "Running against Stripe test mode");
    }

    tracing::info!("Touchline services wired and configuration validated");
    Ok(())
}
