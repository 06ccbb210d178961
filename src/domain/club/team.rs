//! Team entity.

use serde::{Deserialize, Serialize};

use crate::domain::club::Player;
use crate::domain::foundation::{PlayerId, TeamId, TournamentId, ValidationError};

/// A club team: an ordered squad of players plus the tournaments the team
/// is entered in.
///
/// Squad and tournament lists are read and written through the service
/// layer; nothing here enforces backend lifecycle rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    name: String,
    players: Vec<Player>,
    tournaments: Vec<TournamentId>,
}

impl Team {
    /// Creates an empty team with a fresh display id.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_id(TeamId::generate(), name)
    }

    /// Creates an empty team with a known id.
    pub fn with_id(id: TeamId, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("team_name"));
        }
        Ok(Self {
            id,
            name,
            players: Vec::new(),
            tournaments: Vec::new(),
        })
    }

    pub fn id(&self) -> &TeamId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Squad in registration order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn tournaments(&self) -> &[TournamentId] {
        &self.tournaments
    }

    /// Appends a player to the squad.
    pub fn add_player(&mut self, player: Player) {
        self.players.push(player);
    }

    /// Removes a player by id; returns whether one was removed.
    pub fn remove_player(&mut self, player_id: &PlayerId) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p.id() != player_id);
        self.players.len() != before
    }

    /// Registers the team in a tournament. Re-entering is a no-op.
    pub fn enter_tournament(&mut self, tournament_id: TournamentId) {
        if !self.tournaments.contains(&tournament_id) {
            self.tournaments.push(tournament_id);
        }
    }
}
