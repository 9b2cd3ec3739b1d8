//! Copenhagen (six point) for three players.
//!
//! Six points are split on every hole. A birdie-or-better that beats both
//! other players by two or more takes all six; otherwise the split is decided
//! by how the scores tie.

use serde::Serialize;

pub const POINTS_PER_HOLE: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CopenhagenOutcome {
    Sweep { winner: usize },
    ThreeWayTie,
    LowTie,
    HighTie,
    Ordered,
    /// At least one score has not been entered; nobody scores yet.
    Incomplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CopenhagenHoleResult {
    pub points: [u32; 3],
    pub outcome: CopenhagenOutcome,
}

impl CopenhagenHoleResult {
    pub fn is_sweep(&self) -> bool {
        matches!(self.outcome, CopenhagenOutcome::Sweep { .. })
    }

    pub fn sweep_winner(&self) -> Option<usize> {
        match self.outcome {
            CopenhagenOutcome::Sweep { winner } => Some(winner),
            _ => None,
        }
    }
}

pub fn copenhagen_points(scores: [Option<i32>; 3], par: i32) -> CopenhagenHoleResult {
    let [Some(a), Some(b), Some(c)] = scores else {
        return CopenhagenHoleResult {
            points: [0; 3],
            outcome: CopenhagenOutcome::Incomplete,
        };
    };
    let scores = [a, b, c];

    // stable: equal scores keep input order
    let mut order = [0usize, 1, 2];
    order.sort_by_key(|&player| scores[player]);
    let [low, mid, high] = order;
    let (lowest, middle, highest) = (scores[low], scores[mid], scores[high]);

    let mut points = [0u32; 3];
    let outcome = if lowest <= par - 1 && middle - lowest >= 2 && highest - lowest >= 2 {
        points[low] = POINTS_PER_HOLE;
        CopenhagenOutcome::Sweep { winner: low }
    } else if lowest == highest {
        points = [2, 2, 2];
        CopenhagenOutcome::ThreeWayTie
    } else if lowest == middle {
        points[low] = 3;
        points[mid] = 3;
        CopenhagenOutcome::LowTie
    } else if middle == highest {
        points[low] = 4;
        points[mid] = 1;
        points[high] = 1;
        CopenhagenOutcome::HighTie
    } else {
        points[low] = 4;
        points[mid] = 2;
        CopenhagenOutcome::Ordered
    };

    CopenhagenHoleResult { points, outcome }
}
