//! Phone-OTP authentication adapters.
//!
//! Currently mock-only: the app ships against `MockOtpAuthenticator`
//! until the real SMS gateway integration lands server-side.

mod mock_otp;

pub use mock_otp::MockOtpAuthenticator;
