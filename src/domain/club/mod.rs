//! Club module - Entities of the football club domain.
//!
//! Users belong to teams; teams hold an ordered squad of players and enter
//! tournaments. Match scoring follows standard league rules.

mod player;
mod score;
mod team;
mod tournament;
mod user;

pub use player::Player;
pub use score::{calculate_team_score, MatchResult};
pub use team::Team;
pub use tournament::Tournament;
pub use user::User;
