//! Mock social-login profile fetcher.
//!
//! Returns canned per-provider profiles after a simulated network delay.
//! No OAuth flow runs; this stands in for the real providers until the
//! backend exchange is wired up.

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;

use crate::config::MockAuthConfig;
use crate::ports::{SocialAuthError, SocialProfile, SocialProfileFetcher, SocialProvider};

/// Simulated OAuth round-trip latency.
const DEFAULT_FETCH_LATENCY: Duration = Duration::from_millis(600);

/// Mock profile fetcher with canned per-provider profiles.
#[derive(Debug, Clone)]
pub struct MockSocialProfileFetcher {
    fetch_latency: Duration,
}

impl MockSocialProfileFetcher {
    /// Creates a fetcher with the default simulated latency.
    pub fn new() -> Self {
        Self {
            fetch_latency: DEFAULT_FETCH_LATENCY,
        }
    }

    /// Creates a fetcher with the latency from configuration.
    pub fn from_config(config: &MockAuthConfig) -> Self {
        Self {
            fetch_latency: Duration::from_millis(config.social_fetch_latency_ms),
        }
    }

    /// Overrides the fetch latency.
    pub fn with_fetch_latency(mut self, latency: Duration) -> Self {
        self.fetch_latency = latency;
        self
    }

    /// Canned profile for a provider. Each call builds a fresh value.
    fn canned_profile(provider: SocialProvider) -> SocialProfile {
        match provider {
            SocialProvider::Google => SocialProfile {
                provider,
                full_name: "Jordan Matthews".to_string(),
                email: "jordan.matthews@gmail.com".to_string(),
                marketing_opt_in: Some(true),
            },
            SocialProvider::Facebook => SocialProfile {
                provider,
                full_name: "Alex Rivera".to_string(),
                email: "alex.rivera.fc@outlook.com".to_string(),
                marketing_opt_in: None,
            },
        }
    }
}

impl Default for MockSocialProfileFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SocialProfileFetcher for MockSocialProfileFetcher {
    async fn fetch_profile(
        &self,
        provider: SocialProvider,
    ) -> Result<SocialProfile, SocialAuthError> {
        sleep(self.fetch_latency).await;

        let profile = Self::canned_profile(provider);
        tracing::debug!(provider = %provider, email = %profile.email, "Returning mock social profile");
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_fetcher() -> MockSocialProfileFetcher {
        MockSocialProfileFetcher::new().with_fetch_latency(Duration::ZERO)
    }

    #[tokio::test]
    async fn google_profile_matches_canned_data() {
        let fetcher = fast_fetcher();
        let profile = fetcher.fetch_profile(SocialProvider::Google).await.unwrap();

        assert_eq!(profile.provider, SocialProvider::Google);
        assert_eq!(profile.full_name, "Jordan Matthews");
        assert_eq!(profile.email, "jordan.matthews@gmail.com");
        assert_eq!(profile.marketing_opt_in, Some(true));
    }

    #[tokio::test]
    async fn facebook_profile_matches_canned_data() {
        let fetcher = fast_fetcher();
        let profile = fetcher
            .fetch_profile(SocialProvider::Facebook)
            .await
            .unwrap();

        assert_eq!(profile.provider, SocialProvider::Facebook);
        assert_eq!(profile.email, "alex.rivera.fc@outlook.com");
        assert_eq!(profile.marketing_opt_in, None);
    }

    #[tokio::test]
    async fn successive_calls_return_equal_but_distinct_values() {
        let fetcher = fast_fetcher();
        let first = fetcher.fetch_profile(SocialProvider::Google).await.unwrap();
        let second = fetcher.fetch_profile(SocialProvider::Google).await.unwrap();

        assert_eq!(first, second);
        // Both are independently owned; mutating one leaves the other intact.
        let mut mutated = first.clone();
        mutated.full_name.push_str(" Jr.");
        assert_ne!(mutated, second);
    }

    #[tokio::test]
    async fn unknown_provider_string_is_guarded_before_fetch() {
        // The runtime guard lives in SocialProvider::from_str; anything that
        // parses is a member of the closed enumeration.
        let err = "twitter".parse::<SocialProvider>().unwrap_err();
        assert!(matches!(err, SocialAuthError::UnknownProvider(_)));
    }
}
