//! Wolf for three to five players.
//!
//! Each hole one player is the wolf and either picks a partner or goes alone
//! against the field. The best ball of each side decides the hole.

use crate::error::{GolfError, Result};
use serde::{Deserialize, Serialize};

pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "partner", rename_all = "snake_case")]
pub enum WolfChoice {
    Lone,
    Partner(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WolfPoints {
    /// Paid to the wolf for winning alone.
    pub lone_wolf_win: u32,
    /// Paid to each opponent when a lone wolf loses.
    pub lone_wolf_loss: u32,
    /// Paid to each member of the winning side in partner holes.
    pub team_win: u32,
}

impl Default for WolfPoints {
    fn default() -> Self {
        Self {
            lone_wolf_win: 4,
            lone_wolf_loss: 1,
            team_win: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WolfSide {
    Wolf,
    Opponents,
    Tie,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WolfScoreResult {
    pub winning_side: WolfSide,
    pub player_points: Vec<u32>,
}

pub fn wolf_hole_score(
    scores: &[Option<i32>],
    wolf: usize,
    choice: WolfChoice,
    points: &WolfPoints,
) -> Result<WolfScoreResult> {
    let player_count = scores.len();
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
        return Err(GolfError::InvalidWolfSetup(format!(
            "wolf needs {MIN_PLAYERS}-{MAX_PLAYERS} players, got {player_count}"
        )));
    }
    if wolf >= player_count {
        return Err(GolfError::InvalidWolfSetup(format!(
            "wolf index {wolf} out of range for {player_count} players"
        )));
    }
    if let WolfChoice::Partner(partner) = choice {
        if partner >= player_count || partner == wolf {
            return Err(GolfError::InvalidWolfSetup(format!(
                "partner index {partner} is not another player"
            )));
        }
    }

    let on_wolf_side = |player: usize| match choice {
        WolfChoice::Lone => player == wolf,
        WolfChoice::Partner(partner) => player == wolf || player == partner,
    };

    let mut player_points = vec![0; player_count];
    let Some(scores) = scores.iter().copied().collect::<Option<Vec<i32>>>() else {
        return Ok(WolfScoreResult {
            winning_side: WolfSide::Tie,
            player_points,
        });
    };

    let side_best = |wolf_side: bool| {
        scores
            .iter()
            .enumerate()
            .filter(|(player, _)| on_wolf_side(*player) == wolf_side)
            .map(|(_, score)| *score)
            .min()
    };
    let (Some(wolf_best), Some(opponents_best)) = (side_best(true), side_best(false)) else {
        return Ok(WolfScoreResult {
            winning_side: WolfSide::Tie,
            player_points,
        });
    };

    let winning_side = match wolf_best.cmp(&opponents_best) {
        std::cmp::Ordering::Less => WolfSide::Wolf,
        std::cmp::Ordering::Greater => WolfSide::Opponents,
        std::cmp::Ordering::Equal => WolfSide::Tie,
    };

    for (player, slot) in player_points.iter_mut().enumerate() {
        *slot = match (choice, winning_side, on_wolf_side(player)) {
            (_, WolfSide::Tie, _) => 0,
            (WolfChoice::Lone, WolfSide::Wolf, true) => points.lone_wolf_win,
            (WolfChoice::Lone, WolfSide::Opponents, false) => points.lone_wolf_loss,
            (WolfChoice::Partner(_), WolfSide::Wolf, true) => points.team_win,
            (WolfChoice::Partner(_), WolfSide::Opponents, false) => points.team_win,
            _ => 0,
        };
    }

    Ok(WolfScoreResult {
        winning_side,
        player_points,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WolfTeeOrder {
    /// The wolf hits first on its hole.
    #[default]
    First,
    /// The wolf hits last and watches everyone's drive before choosing.
    Last,
}

/// The wolf on a 1-based hole. The tee order rotates one player per hole.
pub fn wolf_for_hole(hole: u32, player_count: usize, order: WolfTeeOrder) -> usize {
    if player_count == 0 {
        return 0;
    }
    let first_to_tee = hole.saturating_sub(1) as usize % player_count;
    match order {
        WolfTeeOrder::First => first_to_tee,
        WolfTeeOrder::Last => (first_to_tee + player_count - 1) % player_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all(scores: &[i32]) -> Vec<Option<i32>> {
        scores.iter().copied().map(Some).collect()
    }

    #[test]
    fn lone_wolf_win_pays_only_the_wolf() {
        let result = wolf_hole_score(&all(&[3, 4, 4, 5]), 0, WolfChoice::Lone, &WolfPoints::default())
            .expect("valid setup");
        assert_eq!(result.winning_side, WolfSide::Wolf);
        assert_eq!(result.player_points, vec![4, 0, 0, 0]);
    }

    #[test]
    fn lone_wolf_loss_pays_each_opponent() {
        let result = wolf_hole_score(&all(&[5, 4, 6, 6]), 0, WolfChoice::Lone, &WolfPoints::default())
            .expect("valid setup");
        assert_eq!(result.winning_side, WolfSide::Opponents);
        assert_eq!(result.player_points, vec![0, 1, 1, 1]);
    }

    #[test]
    fn partner_win_pays_both_teammates() {
        let result = wolf_hole_score(
            &all(&[5, 6, 3, 4]),
            1,
            WolfChoice::Partner(2),
            &WolfPoints::default(),
        )
        .expect("valid setup");
        assert_eq!(result.winning_side, WolfSide::Wolf);
        assert_eq!(result.player_points, vec![0, 2, 2, 0]);
    }

    #[test]
    fn partner_loss_pays_the_opponents() {
        let result = wolf_hole_score(
            &all(&[3, 6, 5, 4]),
            1,
            WolfChoice::Partner(2),
            &WolfPoints::default(),
        )
        .expect("valid setup");
        assert_eq!(result.winning_side, WolfSide::Opponents);
        assert_eq!(result.player_points, vec![2, 0, 0, 2]);
    }

    #[test]
    fn equal_best_balls_tie_with_no_points() {
        let result = wolf_hole_score(&all(&[4, 4, 5]), 0, WolfChoice::Lone, &WolfPoints::default())
            .expect("valid setup");
        assert_eq!(result.winning_side, WolfSide::Tie);
        assert_eq!(result.player_points, vec![0, 0, 0]);
    }

    #[test]
    fn missing_score_is_a_tie() {
        let scores = vec![Some(3), None, Some(5)];
        let result = wolf_hole_score(&scores, 0, WolfChoice::Lone, &WolfPoints::default())
            .expect("valid setup");
        assert_eq!(result.winning_side, WolfSide::Tie);
    }

    #[test]
    fn rejects_partner_equal_to_wolf_and_bad_counts() {
        let points = WolfPoints::default();
        assert!(matches!(
            wolf_hole_score(&all(&[4, 4, 4]), 1, WolfChoice::Partner(1), &points),
            Err(GolfError::InvalidWolfSetup(_))
        ));
        assert!(matches!(
            wolf_hole_score(&all(&[4, 4]), 0, WolfChoice::Lone, &points),
            Err(GolfError::InvalidWolfSetup(_))
        ));
        assert!(matches!(
            wolf_hole_score(&all(&[4, 4, 4]), 3, WolfChoice::Lone, &points),
            Err(GolfError::InvalidWolfSetup(_))
        ));
    }

    #[test]
    fn rotation_cycles_through_players() {
        let order: Vec<_> = (1..=5)
            .map(|hole| wolf_for_hole(hole, 4, WolfTeeOrder::First))
            .collect();
        assert_eq!(order, vec![0, 1, 2, 3, 0]);
    }

    #[test]
    fn wolf_last_is_the_final_player_in_tee_order() {
        assert_eq!(wolf_for_hole(1, 4, WolfTeeOrder::Last), 3);
        assert_eq!(wolf_for_hole(2, 4, WolfTeeOrder::Last), 0);
        assert_eq!(wolf_for_hole(4, 3, WolfTeeOrder::Last), 2);
    }
}
