//! Social-login adapters.

mod mock_fetcher;

pub use mock_fetcher::MockSocialProfileFetcher;
