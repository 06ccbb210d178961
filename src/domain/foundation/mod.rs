//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the Touchline domain.

mod email;
mod errors;
mod ids;
mod timestamp;

pub use email::{is_valid_email, EmailAddress};
pub use errors::ValidationError;
pub use ids::{generate_display_id, PlayerId, TeamId, TournamentId, UserId};
pub use timestamp::Timestamp;
