//! Tournament entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{TeamId, Timestamp, TournamentId, ValidationError};

/// A named competition with a date, a prize, and participating teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    id: TournamentId,
    name: String,
    date: Timestamp,
    /// Free-form prize description ("Golden boot + 500 EUR").
    prize: String,
    teams: Vec<TeamId>,
}

impl Tournament {
    /// Creates a tournament with a fresh display id.
    pub fn new(
        name: impl Into<String>,
        date: Timestamp,
        prize: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_id(TournamentId::generate(), name, date, prize)
    }

    /// Creates a tournament with a known id.
    pub fn with_id(
        id: TournamentId,
        name: impl Into<String>,
        date: Timestamp,
        prize: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("tournament_name"));
        }
        Ok(Self {
            id,
            name,
            date,
            prize: prize.into(),
            teams: Vec::new(),
        })
    }

    pub fn id(&self) -> &TournamentId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date(&self) -> Timestamp {
        self.date
    }

    pub fn prize(&self) -> &str {
        &self.prize
    }

    pub fn teams(&self) -> &[TeamId] {
        &self.teams
    }

    /// Adds a participating team. Duplicate entries are ignored.
    pub fn add_team(&mut self, team_id: TeamId) {
        if !self.teams.contains(&team_id) {
            self.teams.push(team_id);
        }
    }
}
