//! Stroke play totals, shared by individual stroke play and scramble teams.

use super::{PlayerHole, ScoreBasis};
use serde::Serialize;

/// "E" for even, otherwise a signed number of strokes.
pub fn format_to_par(relative: i32) -> String {
    match relative {
        0 => "E".to_string(),
        r if r > 0 => format!("+{r}"),
        r => r.to_string(),
    }
}

/// Running totals over the holes a player has entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StrokeTotals {
    pub holes: u32,
    pub par: i32,
    pub gross: i32,
    pub net: i32,
}

impl StrokeTotals {
    /// Adds a hole; unentered holes are skipped so to-par stays meaningful
    /// mid-round.
    pub fn add(&mut self, par: i32, entry: PlayerHole) {
        let Some(gross) = entry.gross else {
            return;
        };
        self.holes += 1;
        self.par += par;
        self.gross += gross;
        self.net += entry.score(ScoreBasis::Net).unwrap_or(gross);
    }

    pub fn total(&self, basis: ScoreBasis) -> i32 {
        match basis {
            ScoreBasis::Gross => self.gross,
            ScoreBasis::Net => self.net,
        }
    }

    pub fn to_par(&self, basis: ScoreBasis) -> i32 {
        self.total(basis) - self.par
    }
}
