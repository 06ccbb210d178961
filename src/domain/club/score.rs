//! Match results and league-style point accumulation.

use serde::{Deserialize, Serialize};

/// Points awarded for a win.
const WIN_POINTS: u32 = 3;

/// Points awarded for a draw.
const DRAW_POINTS: u32 = 1;

/// Final score of a single match from one team's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub goals_for: u32,
    pub goals_against: u32,
}

impl MatchResult {
    pub fn new(goals_for: u32, goals_against: u32) -> Self {
        Self {
            goals_for,
            goals_against,
        }
    }

    /// Points earned from this match: 3 for a win, 1 for a draw, 0 for a
    /// loss.
    pub fn points(&self) -> u32 {
        if self.goals_for > self.goals_against {
            WIN_POINTS
        } else if self.goals_for == self.goals_against {
            DRAW_POINTS
        } else {
            0
        }
    }
}

/// Sums match points over a season slice.
///
/// Order-independent: the total is a plain sum of per-match points.
pub fn calculate_team_score(matches: &[MatchResult]) -> u32 {
    matches.iter().map(MatchResult::points).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn win_draw_loss_points() {
        assert_eq!(MatchResult::new(3, 1).points(), 3);
        assert_eq!(MatchResult::new(1, 1).points(), 1);
        assert_eq!(MatchResult::new(0, 2).points(), 0);
    }

    #[test]
    fn season_total_sums_per_match_points() {
        let season = [
            MatchResult::new(3, 1),
            MatchResult::new(1, 1),
            MatchResult::new(0, 2),
        ];
        assert_eq!(calculate_team_score(&season), 4);
    }

    #[test]
    fn empty_season_scores_zero() {
        assert_eq!(calculate_team_score(&[]), 0);
    }

    #[test]
    fn goalless_draw_earns_a_point() {
        assert_eq!(MatchResult::new(0, 0).points(), 1);
    }

    fn arb_match() -> impl Strategy<Value = MatchResult> {
        (0u32..20, 0u32..20).prop_map(|(gf, ga)| MatchResult::new(gf, ga))
    }

    proptest! {
        #[test]
        fn score_is_order_independent(mut matches in prop::collection::vec(arb_match(), 0..16)) {
            let forward = calculate_team_score(&matches);
            matches.reverse();
            prop_assert_eq!(forward, calculate_team_score(&matches));
        }

        #[test]
        fn score_is_associative_over_splits(
            matches in prop::collection::vec(arb_match(), 0..16),
            split in 0usize..16,
        ) {
            let split = split.min(matches.len());
            let (first, second) = matches.split_at(split);
            prop_assert_eq!(
                calculate_team_score(&matches),
                calculate_team_score(first) + calculate_team_score(second)
            );
        }

        #[test]
        fn per_match_points_are_bounded(m in arb_match()) {
            prop_assert!(m.points() <= WIN_POINTS);
        }
    }
}
