//! Stripe payment provider adapter.
//!
//! Implements the `PaymentProvider` port against the Stripe REST API:
//! form-encoded requests, basic auth with the secret key, and a narrow
//! typed view of the response. Every underlying failure is wrapped into
//! `PaymentError` with the original message preserved; the raw HTTP or
//! parse error type never crosses the port.
//!
//! Out of scope here, matching the payment flow's contract: retries,
//! idempotency keys, local amount/currency validation, and timeouts
//! (callers wrap the future if they need cancellation).

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::config::PaymentConfig;
use crate::ports::{PaymentError, PaymentIntent, PaymentProvider};

use super::intent_types::{error_message_from_body, StripePaymentIntent};

/// Stripe API configuration.
#[derive(Clone)]
pub struct StripeConfig {
    /// Stripe secret API key (sk_live_... or sk_test_...).
    secret_key: SecretString,

    /// Base URL for the Stripe API (default: https://api.stripe.com).
    api_base_url: String,
}

impl StripeConfig {
    /// Creates a new Stripe configuration.
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: SecretString::new(secret_key.into()),
            api_base_url: "https://api.stripe.com".to_string(),
        }
    }

    /// Creates the configuration from the application payment config.
    pub fn from_payment_config(config: &PaymentConfig) -> Self {
        Self {
            secret_key: SecretString::new(config.stripe_secret_key.clone()),
            api_base_url: config.stripe_api_base_url.clone(),
        }
    }

    /// Sets a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

/// Stripe payment adapter.
///
/// Implements `PaymentProvider` over `/v1/payment_intents`.
pub struct StripePaymentAdapter {
    config: StripeConfig,
    http_client: reqwest::Client,
}

impl StripePaymentAdapter {
    /// Creates a new adapter with the given configuration.
    pub fn new(config: StripeConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Posts a form to Stripe and parses the payment intent response.
    ///
    /// Returns the cause message on any failure; the caller wraps it into
    /// the operation-specific `PaymentError` variant.
    async fn post_intent_request(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<PaymentIntent, String> {
        let response = self
            .http_client
            .post(url)
            .basic_auth(self.config.secret_key.expose_secret(), Option::<&str>::None)
            .form(params)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message_from_body(&body);
            tracing::error!(status = %status, error = %message, "Stripe request failed");
            return Err(message);
        }

        let wire: StripePaymentIntent = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse Stripe response: {}", e))?;

        Ok(wire.into_payment_intent())
    }
}

#[async_trait]
impl PaymentProvider for StripePaymentAdapter {
    async fn create_payment_intent(
        &self,
        amount: i64,
        currency: &str,
    ) -> Result<PaymentIntent, PaymentError> {
        let url = format!("{}/v1/payment_intents", self.config.api_base_url);
        let params = [
            ("amount", amount.to_string()),
            ("currency", currency.to_string()),
        ];

        let intent = self
            .post_intent_request(&url, &params)
            .await
            .map_err(PaymentError::intent_creation)?;

        tracing::info!(
            intent_id = %intent.id,
            amount,
            currency,
            "Created payment intent"
        );
        Ok(intent)
    }

    async fn confirm_payment_intent(
        &self,
        intent_id: &str,
    ) -> Result<PaymentIntent, PaymentError> {
        let url = format!(
            "{}/v1/payment_intents/{}/confirm",
            self.config.api_base_url, intent_id
        );

        let intent = self
            .post_intent_request(&url, &[])
            .await
            .map_err(PaymentError::confirmation)?;

        tracing::info!(
            intent_id = %intent.id,
            status = ?intent.status,
            "Confirmed payment intent"
        );
        Ok(intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_new_sets_default_base_url() {
        let config = StripeConfig::new("sk_test_key");
        assert_eq!(config.api_base_url, "https://api.stripe.com");
    }

    #[test]
    fn config_with_base_url() {
        let config = StripeConfig::new("sk_test_key").with_base_url("http://localhost:12111");
        assert_eq!(config.api_base_url, "http://localhost:12111");
    }

    #[test]
    fn config_from_payment_config_copies_fields() {
        let payment = PaymentConfig {
            stripe_secret_key: "sk_test_abc".to_string(),
            stripe_api_base_url: "http://localhost:12111".to_string(),
        };
        let config = StripeConfig::from_payment_config(&payment);
        assert_eq!(config.secret_key.expose_secret(), "sk_test_abc");
        assert_eq!(config.api_base_url, "http://localhost:12111");
    }

    #[tokio::test]
    async fn create_wraps_connection_failure_with_cause() {
        // Nothing listens on this port; reqwest fails to connect.
        let config = StripeConfig::new("sk_test_key").with_base_url("http://127.0.0.1:9");
        let adapter = StripePaymentAdapter::new(config);

        let err = adapter.create_payment_intent(1000, "eur").await.unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.starts_with("Payment Intent creation failed:"));
    }

    #[tokio::test]
    async fn confirm_wraps_connection_failure_with_cause() {
        let config = StripeConfig::new("sk_test_key").with_base_url("http://127.0.0.1:9");
        let adapter = StripePaymentAdapter::new(config);

        let err = adapter.confirm_payment_intent("pi_1").await.unwrap_err();
        assert!(err.to_string().starts_with("Payment confirmation failed:"));
    }
}
