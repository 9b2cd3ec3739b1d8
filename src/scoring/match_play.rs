//! Best ball team scores and match play status.

use super::{lower_wins, PlayerHole, ScoreBasis, Team};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamBall {
    pub score: i32,
    /// Index into the team slice of the member whose score counts. Ties go to
    /// the first member in input order.
    pub counting_player: usize,
}

/// The team's best score on the hole, or `None` if no member has a score.
pub fn best_ball(team: &[PlayerHole], basis: ScoreBasis) -> Option<TeamBall> {
    let mut best: Option<TeamBall> = None;
    for (index, entry) in team.iter().enumerate() {
        let Some(score) = entry.score(basis) else {
            continue;
        };
        if best.map_or(true, |current| score < current.score) {
            best = Some(TeamBall {
                score,
                counting_player: index,
            });
        }
    }
    best
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HoleOutcome {
    Won(Team),
    Halved,
}

pub fn hole_outcome(team_a: i32, team_b: i32) -> HoleOutcome {
    match lower_wins(team_a, team_b) {
        Some(team) => HoleOutcome::Won(team),
        None => HoleOutcome::Halved,
    }
}

/// Running match. `status` is positive when team A leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchState {
    pub status: i32,
    pub holes_remaining: u32,
}

impl MatchState {
    pub fn new(holes: u32) -> Self {
        Self {
            status: 0,
            holes_remaining: holes,
        }
    }

    pub fn is_decided(&self) -> bool {
        self.status.unsigned_abs() > self.holes_remaining || self.holes_remaining == 0
    }

    pub fn is_dormie(&self) -> bool {
        self.holes_remaining > 0 && self.status.unsigned_abs() == self.holes_remaining
    }

    /// Plays one hole. A decided match ignores further holes.
    pub fn apply(self, outcome: HoleOutcome) -> Self {
        if self.is_decided() {
            return self;
        }
        let swing = match outcome {
            HoleOutcome::Won(Team::A) => 1,
            HoleOutcome::Won(Team::B) => -1,
            HoleOutcome::Halved => 0,
        };
        Self {
            status: self.status + swing,
            holes_remaining: self.holes_remaining - 1,
        }
    }

    pub fn leader(&self) -> Option<Team> {
        match self.status {
            0 => None,
            status if status > 0 => Some(Team::A),
            _ => Some(Team::B),
        }
    }

    pub fn result(&self) -> MatchResult {
        let margin = self.status.unsigned_abs();
        match self.leader() {
            None => MatchResult::AllSquare,
            Some(leader) if self.holes_remaining > 0 && self.is_decided() => MatchResult::Closed {
                leader,
                margin,
                remaining: self.holes_remaining,
            },
            Some(leader) => MatchResult::Up { leader, margin },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchResult {
    AllSquare,
    Up { leader: Team, margin: u32 },
    /// Won before the last hole, e.g. "3 & 2".
    Closed {
        leader: Team,
        margin: u32,
        remaining: u32,
    },
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchResult::AllSquare => f.write_str("All Square"),
            MatchResult::Up { margin, .. } => write!(f, "{margin} Up"),
            MatchResult::Closed {
                margin, remaining, ..
            } => write!(f, "{margin} & {remaining}"),
        }
    }
}
