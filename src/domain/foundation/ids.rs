//! Strongly-typed identifier value objects.
//!
//! Every entity in the club domain is addressed by a unique string id.
//! Freshly created entities get a display id of the form `id-` followed by
//! a 9-character base-36 fragment. These ids are for display and client-side
//! correlation only; the collision probability is non-zero and they must not
//! be used where cryptographic uniqueness matters.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Prefix for generated display ids.
const ID_PREFIX: &str = "id-";

/// Length of the random base-36 fragment.
const ID_FRAGMENT_LEN: usize = 9;

const BASE36_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a display id: `id-` plus a random base-36 fragment.
pub fn generate_display_id() -> String {
    let mut rng = rand::thread_rng();
    let mut id = String::with_capacity(ID_PREFIX.len() + ID_FRAGMENT_LEN);
    id.push_str(ID_PREFIX);
    for _ in 0..ID_FRAGMENT_LEN {
        let idx = rng.gen_range(0..BASE36_ALPHABET.len());
        id.push(BASE36_ALPHABET[idx] as char);
    }
    id
}

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident, $field:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an id from an existing string.
            ///
            /// Fails if the string is empty.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                Ok(Self(id))
            }

            /// Creates a new random display id.
            pub fn generate() -> Self {
                Self(generate_display_id())
            }

            /// Returns the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

entity_id!(
    /// Unique identifier for a user.
    UserId,
    "user_id"
);

entity_id!(
    /// Unique identifier for a team.
    TeamId,
    "team_id"
);

entity_id!(
    /// Unique identifier for a player.
    PlayerId,
    "player_id"
);

entity_id!(
    /// Unique identifier for a tournament.
    TournamentId,
    "tournament_id"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_display_id_has_prefix_and_length() {
        let id = generate_display_id();
        assert!(id.starts_with("id-"));
        assert_eq!(id.len(), ID_PREFIX.len() + ID_FRAGMENT_LEN);
    }

    #[test]
    fn generated_display_id_fragment_is_base36() {
        let id = generate_display_id();
        let fragment = &id[ID_PREFIX.len()..];
        assert!(fragment
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn generated_ids_differ() {
        let id1 = UserId::generate();
        let id2 = UserId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn user_id_accepts_non_empty_string() {
        let id = UserId::new("user-123").unwrap();
        assert_eq!(id.as_str(), "user-123");
    }

    #[test]
    fn user_id_rejects_empty_string() {
        let result = UserId::new("");
        match result {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "user_id"),
            _ => panic!("Expected EmptyField error"),
        }
    }

    #[test]
    fn team_id_rejects_whitespace_only_string() {
        assert!(TeamId::new("   ").is_err());
    }

    #[test]
    fn player_id_displays_inner_value() {
        let id = PlayerId::new("player-7").unwrap();
        assert_eq!(format!("{}", id), "player-7");
    }

    #[test]
    fn tournament_id_parses_from_str() {
        let id: TournamentId = "cup-2026".parse().unwrap();
        assert_eq!(id.as_str(), "cup-2026");
    }

    #[test]
    fn id_serializes_as_plain_string() {
        let id = TeamId::new("team-1").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"team-1\"");
    }
}
