//! Skins: the outright low score takes the pot.
//!
//! A tied hole either carries its skin into the next hole's pot or is lost,
//! depending on whether carryovers are enabled.

use super::{PlayerHole, ScoreBasis};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkinsSettings {
    pub basis: ScoreBasis,
    pub carryover: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkinsHoleResult {
    Won { player: usize, skins: u32 },
    /// Tied with carryovers on; `pot` is the number of skins now riding.
    Carryover { pot: u32 },
    /// Tied with carryovers off; the skin is lost.
    Halved,
    /// Not every score is in yet.
    Pending,
}

impl SkinsHoleResult {
    pub fn winner(&self) -> Option<usize> {
        match self {
            SkinsHoleResult::Won { player, .. } => Some(*player),
            _ => None,
        }
    }

    pub fn skins_won(&self) -> u32 {
        match self {
            SkinsHoleResult::Won { skins, .. } => *skins,
            _ => 0,
        }
    }

    pub fn is_carryover(&self) -> bool {
        matches!(self, SkinsHoleResult::Carryover { .. })
    }

    /// Pot for the next hole given the pot this hole was played for.
    pub fn next_pot(&self, available: u32) -> u32 {
        match self {
            SkinsHoleResult::Won { .. } | SkinsHoleResult::Halved => 1,
            SkinsHoleResult::Carryover { pot } => *pot,
            SkinsHoleResult::Pending => available,
        }
    }
}

pub fn skins_hole_result(
    scores: &[PlayerHole],
    settings: SkinsSettings,
    skins_available: u32,
) -> SkinsHoleResult {
    let Some(values) = scores
        .iter()
        .map(|entry| entry.score(settings.basis))
        .collect::<Option<Vec<_>>>()
    else {
        return SkinsHoleResult::Pending;
    };
    let Some(&low) = values.iter().min() else {
        return SkinsHoleResult::Pending;
    };

    let mut holders = values
        .iter()
        .enumerate()
        .filter(|(_, value)| **value == low)
        .map(|(player, _)| player);

    match (holders.next(), holders.next()) {
        (Some(player), None) => SkinsHoleResult::Won {
            player,
            skins: skins_available,
        },
        _ if settings.carryover => SkinsHoleResult::Carryover {
            pot: skins_available + 1,
        },
        _ => SkinsHoleResult::Halved,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkinsStanding {
    pub player: usize,
    pub skins: u32,
    pub winnings: f64,
    pub holes_won: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkinsLeaderboard {
    pub standings: Vec<SkinsStanding>,
    /// Skins still riding after the last scored hole.
    pub unclaimed: u32,
}

/// Plays every hole in order, threading the pot. `holes` pairs each hole
/// number with the players' entries in player order.
pub fn skins_leaderboard(
    holes: &[(u32, Vec<PlayerHole>)],
    player_count: usize,
    settings: SkinsSettings,
    value_per_skin: f64,
) -> (Vec<SkinsHoleResult>, SkinsLeaderboard) {
    let mut standings: Vec<SkinsStanding> = (0..player_count)
        .map(|player| SkinsStanding {
            player,
            skins: 0,
            winnings: 0.0,
            holes_won: Vec::new(),
        })
        .collect();

    let mut pot = 1;
    let mut results = Vec::with_capacity(holes.len());
    for (number, entries) in holes {
        let result = skins_hole_result(entries, settings, pot);
        if let SkinsHoleResult::Won { player, skins } = result {
            if let Some(standing) = standings.get_mut(player) {
                standing.skins += skins;
                standing.winnings += f64::from(skins) * value_per_skin;
                standing.holes_won.push(*number);
            }
        }
        pot = result.next_pot(pot);
        results.push(result);
    }

    let unclaimed = if settings.carryover && pot > 1 { pot - 1 } else { 0 };
    standings.sort_by(|a, b| b.skins.cmp(&a.skins).then(a.player.cmp(&b.player)));
    (results, SkinsLeaderboard { standings, unclaimed })
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROSS_CARRY: SkinsSettings = SkinsSettings {
        basis: ScoreBasis::Gross,
        carryover: true,
    };

    fn gross(scores: &[i32]) -> Vec<PlayerHole> {
        scores.iter().map(|&score| PlayerHole::gross(score)).collect()
    }

    #[test]
    fn outright_low_collects_the_pot() {
        let result = skins_hole_result(&gross(&[4, 5, 5]), GROSS_CARRY, 3);
        assert_eq!(result, SkinsHoleResult::Won { player: 0, skins: 3 });
        assert_eq!(result.next_pot(3), 1);
    }

    #[test]
    fn tie_carries_when_enabled() {
        let result = skins_hole_result(&gross(&[4, 4, 5]), GROSS_CARRY, 2);
        assert_eq!(result, SkinsHoleResult::Carryover { pot: 3 });
        assert_eq!(result.skins_won(), 0);
        assert_eq!(result.next_pot(2), 3);
    }

    #[test]
    fn tie_is_lost_without_carryover() {
        let settings = SkinsSettings {
            carryover: false,
            ..GROSS_CARRY
        };
        let result = skins_hole_result(&gross(&[4, 4, 5]), settings, 1);
        assert_eq!(result, SkinsHoleResult::Halved);
        assert_eq!(result.next_pot(1), 1);
    }

    #[test]
    fn net_basis_uses_strokes() {
        let entries = vec![PlayerHole::new(Some(5), 1), PlayerHole::gross(5)];
        let settings = SkinsSettings {
            basis: ScoreBasis::Net,
            carryover: true,
        };
        assert_eq!(
            skins_hole_result(&entries, settings, 1).winner(),
            Some(0)
        );
    }

    #[test]
    fn missing_score_leaves_pot_untouched() {
        let entries = vec![PlayerHole::gross(4), PlayerHole::default()];
        let result = skins_hole_result(&entries, GROSS_CARRY, 2);
        assert_eq!(result, SkinsHoleResult::Pending);
        assert_eq!(result.next_pot(2), 2);
    }

    #[test]
    fn tie_tie_win_awards_three_then_resets() {
        let holes = vec![
            (1, gross(&[4, 4])),
            (2, gross(&[3, 3])),
            (3, gross(&[5, 4])),
            (4, gross(&[4, 5])),
        ];
        let (results, board) = skins_leaderboard(&holes, 2, GROSS_CARRY, 5.0);
        assert_eq!(results[0], SkinsHoleResult::Carryover { pot: 2 });
        assert_eq!(results[1], SkinsHoleResult::Carryover { pot: 3 });
        assert_eq!(results[2], SkinsHoleResult::Won { player: 1, skins: 3 });
        assert_eq!(results[3], SkinsHoleResult::Won { player: 0, skins: 1 });
        assert_eq!(board.standings[0].player, 1);
        assert_eq!(board.standings[0].skins, 3);
        assert_eq!(board.standings[0].winnings, 15.0);
        assert_eq!(board.standings[0].holes_won, vec![3]);
        assert_eq!(board.unclaimed, 0);
    }

    #[test]
    fn trailing_ties_are_reported_unclaimed() {
        let holes = vec![(1, gross(&[4, 4])), (2, gross(&[4, 4]))];
        let (_, board) = skins_leaderboard(&holes, 2, GROSS_CARRY, 1.0);
        assert_eq!(board.unclaimed, 2);
    }
}
