//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `TOUCHLINE` prefix and nested values use double
//! underscores as separators. Dotenv files (`.env.local`, `.env`) are
//! applied to the process environment first, once per process.
//!
//! # Example
//!
//! ```no_run
//! use touchline::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod auth;
mod env_loader;
mod error;
mod payment;

pub use auth::MockAuthConfig;
pub use env_loader::{init_process_env, EnvLoader, FileProbe, LoadReport};
pub use error::{ConfigError, ValidationError};
pub use payment::PaymentConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Payment configuration (Stripe)
    pub payment: PaymentConfig,

    /// Mock auth latency settings
    #[serde(default)]
    pub auth: MockAuthConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Applies `.env.local`/`.env` files if present (once per process)
    /// 2. Reads environment variables with the `TOUCHLINE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `TOUCHLINE__PAYMENT__STRIPE_SECRET_KEY=sk_test_...`
    /// - `TOUCHLINE__AUTH__OTP_SEND_LATENCY_MS=600`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Best-effort dotenv application (development)
        init_process_env().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TOUCHLINE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.payment.validate()?;
        Ok(())
    }
}
