//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Phone-OTP authentication (mock)
//! - `social` - Social-login profile retrieval (mock)
//! - `stripe` - Payment processing (Stripe REST API + mock)

pub mod auth;
pub mod social;
pub mod stripe;
