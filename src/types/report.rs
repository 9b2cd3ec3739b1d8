use crate::scoring::copenhagen::CopenhagenOutcome;
use crate::scoring::match_play::{HoleOutcome, MatchResult};
use crate::scoring::skins::SkinsHoleResult;
use crate::scoring::umbriago::{HoleMultiplier, HolePoints, UmbriagoCategories};
use crate::scoring::wolf::WolfSide;
use crate::scoring::ScoreBasis;
use crate::types::round::GameFormat;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RoundReport {
    pub name: String,
    pub format: GameFormat,
    pub basis: ScoreBasis,
    pub generated_at: String,
    pub holes_scored: u32,
    /// Holes with at least one score (or wolf call) still missing.
    pub holes_pending: Vec<u32>,
    pub summary: GameSummary,
}

impl RoundReport {
    pub fn is_complete(&self) -> bool {
        self.holes_pending.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "game", rename_all = "snake_case")]
pub enum GameSummary {
    StrokePlay {
        standings: Vec<StrokeStanding>,
    },
    Scramble {
        standings: Vec<StrokeStanding>,
    },
    Match {
        holes: Vec<MatchHoleLine>,
        status: i32,
        holes_remaining: u32,
        dormie: bool,
        /// Hole on which the match was decided, if it finished early.
        decided_on: Option<u32>,
        result: MatchResult,
        label: String,
    },
    Skins {
        holes: Vec<SkinsHoleLine>,
        standings: Vec<SkinsLine>,
        unclaimed: u32,
    },
    Wolf {
        holes: Vec<WolfHoleLine>,
        standings: Vec<PointsLine>,
    },
    Umbriago {
        holes: Vec<UmbriagoHoleLine>,
        team_a: u32,
        team_b: u32,
    },
    Copenhagen {
        holes: Vec<CopenhagenHoleLine>,
        standings: Vec<PointsLine>,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct StrokeStanding {
    pub name: String,
    pub holes: u32,
    pub gross: i32,
    pub net: i32,
    pub to_par: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointsLine {
    pub name: String,
    pub points: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkinsLine {
    pub name: String,
    pub skins: u32,
    pub winnings: f64,
    pub holes_won: Vec<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkinsHoleLine {
    pub hole: u32,
    pub result: SkinsHoleResult,
    pub winner: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchHoleLine {
    pub hole: u32,
    pub team_a: i32,
    pub team_b: i32,
    pub counting_a: String,
    pub counting_b: String,
    pub outcome: HoleOutcome,
    pub status: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct WolfHoleLine {
    pub hole: u32,
    pub wolf: String,
    pub partner: Option<String>,
    pub winning_side: WolfSide,
    pub points: Vec<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UmbriagoHoleLine {
    pub hole: u32,
    pub categories: UmbriagoCategories,
    pub multiplier: HoleMultiplier,
    pub points: HolePoints,
}

#[derive(Debug, Clone, Serialize)]
pub struct CopenhagenHoleLine {
    pub hole: u32,
    pub points: [u32; 3],
    pub outcome: CopenhagenOutcome,
}

/// Sorts by points descending, keeping file order on ties.
pub fn rank_points(mut lines: Vec<PointsLine>) -> Vec<PointsLine> {
    lines.sort_by(|a, b| b.points.cmp(&a.points));
    lines
}
