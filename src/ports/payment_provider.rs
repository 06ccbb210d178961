//! Payment provider port for external payment processing.
//!
//! Defines the contract for payment gateway integrations (e.g. Stripe).
//! This is a deliberately thin surface: create and confirm a payment
//! intent, nothing else. Retry, idempotency keys, and amount/currency
//! validation are left to the gateway and to callers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Port for payment intent management.
///
/// # Contract
///
/// Implementations must wrap every underlying failure (network,
/// validation, auth) into `PaymentError`, preserving the original message
/// as context and never leaking the raw SDK/HTTP error type.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Creates a payment intent for the given amount.
    ///
    /// `amount` is in minor currency units (cents); `currency` is a
    /// lowercase ISO-4217 code.
    async fn create_payment_intent(
        &self,
        amount: i64,
        currency: &str,
    ) -> Result<PaymentIntent, PaymentError>;

    /// Confirms a previously created payment intent.
    async fn confirm_payment_intent(&self, intent_id: &str)
        -> Result<PaymentIntent, PaymentError>;
}

/// The subset of a gateway payment intent this application consumes.
///
/// Everything else in the provider's response is dropped at the adapter
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentIntent {
    /// Provider's intent id (`pi_...` for Stripe).
    pub id: String,

    /// Current intent status.
    pub status: PaymentIntentStatus,

    /// Amount in minor currency units.
    pub amount: i64,

    /// Lowercase ISO-4217 currency code.
    pub currency: String,

    /// Client secret for completing payment on-device, when returned.
    pub client_secret: Option<String>,
}

/// Payment intent lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentIntentStatus {
    RequiresPaymentMethod,
    RequiresConfirmation,
    RequiresAction,
    Processing,
    Succeeded,
    Canceled,
    /// Status string the adapter did not recognize.
    Unknown,
}

impl PaymentIntentStatus {
    /// Whether the payment has completed successfully.
    pub fn is_succeeded(&self) -> bool {
        matches!(self, PaymentIntentStatus::Succeeded)
    }
}

/// Errors from payment operations.
///
/// The original gateway message is preserved as context; the gateway's
/// error type is discarded at the adapter boundary.
#[derive(Debug, Clone, Error)]
pub enum PaymentError {
    #[error("Payment Intent creation failed: {message}")]
    IntentCreationFailed { message: String },

    #[error("Payment confirmation failed: {message}")]
    ConfirmationFailed { message: String },
}

impl PaymentError {
    /// Wraps an intent-creation failure.
    pub fn intent_creation(message: impl Into<String>) -> Self {
        PaymentError::IntentCreationFailed {
            message: message.into(),
        }
    }

    /// Wraps a confirmation failure.
    pub fn confirmation(message: impl Into<String>) -> Self {
        PaymentError::ConfirmationFailed {
            message: message.into(),
        }
    }
}
