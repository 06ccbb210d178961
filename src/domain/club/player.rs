//! Player entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PlayerId, ValidationError};

/// A player registered with a team.
///
/// A player belongs to exactly one team context at a time; the owning
/// `Team` holds the player, so no back-reference is kept here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    /// Free-form position label ("GK", "centre back", ...).
    position: String,
    age: u8,
}

impl Player {
    /// Creates a player with a fresh display id.
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        age: u8,
    ) -> Result<Self, ValidationError> {
        Self::with_id(PlayerId::generate(), name, position, age)
    }

    /// Creates a player with a known id (e.g. loaded from the backend).
    pub fn with_id(
        id: PlayerId,
        name: impl Into<String>,
        position: impl Into<String>,
        age: u8,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("player_name"));
        }
        Ok(Self {
            id,
            name,
            position: position.into(),
            age,
        })
    }

    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn age(&self) -> u8 {
        self.age
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_gets_display_id() {
        let player = Player::new("Dana Okafor", "striker", 24).unwrap();
        assert!(player.id().as_str().starts_with("id-"));
        assert_eq!(player.name(), "Dana Okafor");
        assert_eq!(player.position(), "striker");
        assert_eq!(player.age(), 24);
    }

    #[test]
    fn rejects_empty_name() {
        let result = Player::new("  ", "GK", 30);
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn position_is_free_form() {
        let player = Player::new("Sam Lee", "box-to-box midfielder", 27).unwrap();
        assert_eq!(player.position(), "box-to-box midfielder");
    }
}
