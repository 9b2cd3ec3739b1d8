//! Pure per-hole scoring engines for the supported side games.
//!
//! Every function here is deterministic and free of I/O: callers pass in the
//! hole's scores and settings and persist whatever comes back.

pub mod copenhagen;
pub mod handicap;
pub mod match_play;
pub mod skins;
pub mod stroke_play;
pub mod umbriago;
pub mod wolf;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which score a game compares: the raw strokes or strokes less handicap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBasis {
    #[default]
    Gross,
    Net,
}

/// One player's entry on one hole. `gross` is `None` until a score is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerHole {
    pub gross: Option<i32>,
    pub strokes: i32,
}

impl PlayerHole {
    pub fn new(gross: Option<i32>, strokes: i32) -> Self {
        Self { gross, strokes }
    }

    pub fn gross(gross: i32) -> Self {
        Self {
            gross: Some(gross),
            strokes: 0,
        }
    }

    pub fn score(&self, basis: ScoreBasis) -> Option<i32> {
        match basis {
            ScoreBasis::Gross => self.gross,
            ScoreBasis::Net => self
                .gross
                .map(|gross| handicap::net_score(gross, self.strokes)),
        }
    }
}

/// Side of a two-team game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
}

impl Team {
    pub fn opponent(self) -> Self {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::A => f.write_str("Team A"),
            Team::B => f.write_str("Team B"),
        }
    }
}

/// Lower score wins; equal scores produce no winner.
pub fn lower_wins(a: i32, b: i32) -> Option<Team> {
    match a.cmp(&b) {
        std::cmp::Ordering::Less => Some(Team::A),
        std::cmp::Ordering::Greater => Some(Team::B),
        std::cmp::Ordering::Equal => None,
    }
}
