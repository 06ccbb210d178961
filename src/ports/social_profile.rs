//! Social profile fetcher port for OAuth sign-in.
//!
//! Defines the contract for retrieving a basic profile from a social
//! identity provider. The shipped implementation returns canned profiles
//! with simulated latency (`adapters::social::MockSocialProfileFetcher`).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Supported social identity providers. Closed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialProvider {
    Google,
    Facebook,
}

impl fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SocialProvider::Google => "google",
            SocialProvider::Facebook => "facebook",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SocialProvider {
    type Err = SocialAuthError;

    /// Runtime guard for provider strings arriving from the outside
    /// (deep links, stored preferences). Matching is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "google" => Ok(SocialProvider::Google),
            "facebook" => Ok(SocialProvider::Facebook),
            other => Err(SocialAuthError::UnknownProvider(other.to_string())),
        }
    }
}

/// Basic profile returned by a social provider.
///
/// Ephemeral value object: regenerated per call, never persisted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialProfile {
    pub provider: SocialProvider,
    pub full_name: String,
    pub email: String,
    /// Marketing consent carried over from the provider, when offered.
    pub marketing_opt_in: Option<bool>,
}

/// Errors from social profile retrieval.
#[derive(Debug, Clone, Error)]
pub enum SocialAuthError {
    /// Provider string outside the closed enumeration.
    #[error("Unknown social provider: {0}")]
    UnknownProvider(String),

    /// The provider could not be reached or returned an error.
    ///
    /// Never produced by the mock; reserved for real OAuth adapters.
    #[error("Social provider unavailable: {0}")]
    ProviderUnavailable(String),
}

/// Port for social-login profile retrieval.
#[async_trait]
pub trait SocialProfileFetcher: Send + Sync {
    /// Fetches the signed-in user's basic profile from the provider.
    async fn fetch_profile(&self, provider: SocialProvider)
        -> Result<SocialProfile, SocialAuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn social_profile_fetcher_is_object_safe() {
        fn _accepts_dyn(_fetcher: &dyn SocialProfileFetcher) {}
    }

    #[test]
    fn provider_parses_known_names() {
        assert_eq!("google".parse::<SocialProvider>().unwrap(), SocialProvider::Google);
        assert_eq!(
            "Facebook".parse::<SocialProvider>().unwrap(),
            SocialProvider::Facebook
        );
    }

    #[test]
    fn provider_rejects_unknown_name() {
        let result = "myspace".parse::<SocialProvider>();
        match result {
            Err(SocialAuthError::UnknownProvider(name)) => assert_eq!(name, "myspace"),
            _ => panic!("Expected UnknownProvider error"),
        }
    }

    #[test]
    fn provider_display_round_trips_through_from_str() {
        for provider in [SocialProvider::Google, SocialProvider::Facebook] {
            let parsed: SocialProvider = provider.to_string().parse().unwrap();
            assert_eq!(parsed, provider);
        }
    }

    #[test]
    fn provider_serializes_lowercase() {
        let json = serde_json::to_string(&SocialProvider::Google).unwrap();
        assert_eq!(json, "\"google\"");
    }
}
