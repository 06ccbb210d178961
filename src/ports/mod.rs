//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `OtpAuthenticator` - Phone-OTP issuance and verification
//! - `SocialProfileFetcher` - OAuth profile retrieval
//! - `PaymentProvider` - Payment intent creation and confirmation

mod otp_authenticator;
mod payment_provider;
mod social_profile;

pub use otp_authenticator::{AuthError, OtpAuthenticator, OtpCode};
pub use payment_provider::{PaymentError, PaymentIntent, PaymentIntentStatus, PaymentProvider};
pub use social_profile::{SocialAuthError, SocialProfile, SocialProfileFetcher, SocialProvider};
