//! Stripe payment adapter.
//!
//! Implements the `PaymentProvider` port over the Stripe REST API, plus an
//! in-memory mock for tests and offline development.
//!
//! # Configuration
//!
//! Required environment variable:
//! - `TOUCHLINE__PAYMENT__STRIPE_SECRET_KEY`: Stripe secret API key

mod intent_types;
mod mock_payment_provider;
mod stripe_adapter;

pub use intent_types::{StripeApiError, StripeErrorEnvelope, StripePaymentIntent};
pub use mock_payment_provider::MockPaymentProvider;
pub use stripe_adapter::{StripeConfig, StripePaymentAdapter};
