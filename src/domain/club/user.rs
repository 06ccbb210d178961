//! User entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EmailAddress, TeamId, UserId, ValidationError};

/// An account holder: a manager or club member who belongs to teams.
///
/// Holds references to team ids only; the teams themselves live behind the
/// service layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    username: String,
    email: EmailAddress,
    teams: Vec<TeamId>,
}

impl User {
    /// Creates a user with a fresh display id.
    pub fn new(username: impl Into<String>, email: EmailAddress) -> Result<Self, ValidationError> {
        Self::with_id(UserId::generate(), username, email)
    }

    /// Creates a user with a known id.
    pub fn with_id(
        id: UserId,
        username: impl Into<String>,
        email: EmailAddress,
    ) -> Result<Self, ValidationError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(ValidationError::empty_field("username"));
        }
        Ok(Self {
            id,
            username,
            email,
            teams: Vec::new(),
        })
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn teams(&self) -> &[TeamId] {
        &self.teams
    }

    /// Adds a team membership. Joining the same team twice is a no-op.
    pub fn join_team(&mut self, team_id: TeamId) {
        if !self.teams.contains(&team_id) {
            self.teams.push(team_id);
        }
    }

    /// Drops a team membership; returns whether the user was a member.
    pub fn leave_team(&mut self, team_id: &TeamId) -> bool {
        let before = self.teams.len();
        self.teams.retain(|t| t != team_id);
        self.teams.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> EmailAddress {
        EmailAddress::new("manager@club.example.com").unwrap()
    }

    #[test]
    fn new_user_has_no_teams() {
        let user = User::new("coach_kim", email()).unwrap();
        assert_eq!(user.username(), "coach_kim");
        assert!(user.teams().is_empty());
    }

    #[test]
    fn rejects_empty_username() {
        assert!(User::new("", email()).is_err());
    }

    #[test]
    fn join_and_leave_team() {
        let mut user = User::new("coach_kim", email()).unwrap();
        let team = TeamId::new("team-1").unwrap();

        user.join_team(team.clone());
        user.join_team(team.clone());
        assert_eq!(user.teams().len(), 1);

        assert!(user.leave_team(&team));
        assert!(user.teams().is_empty());
        assert!(!user.leave_team(&team));
    }
}
