//! Umbriago: two teams of two play four categories per hole.
//!
//! Team low, individual low, closest to the pin and birdie-or-better are each
//! worth a point. Winning all four doubles the team's points, then the hole
//! multiplier from any Double / Double Back call scales both teams.

use super::{lower_wins, Team};
use serde::{Deserialize, Serialize};

pub const CATEGORY_COUNT: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct UmbriagoCategories {
    pub team_low: Option<Team>,
    pub individual_low: Option<Team>,
    pub closest_to_pin: Option<Team>,
    pub birdie_or_better: Option<Team>,
}

impl UmbriagoCategories {
    pub fn won_by(&self, team: Team) -> u32 {
        [
            self.team_low,
            self.individual_low,
            self.closest_to_pin,
            self.birdie_or_better,
        ]
        .iter()
        .filter(|winner| **winner == Some(team))
        .count() as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoleMultiplier {
    #[default]
    Normal,
    Double,
    DoubleBack,
}

impl HoleMultiplier {
    pub fn factor(self) -> u32 {
        match self {
            HoleMultiplier::Normal => 1,
            HoleMultiplier::Double => 2,
            HoleMultiplier::DoubleBack => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HolePoints {
    pub team_a: u32,
    pub team_b: u32,
    /// The team that swept all four categories.
    pub umbriago: Option<Team>,
}

impl HolePoints {
    pub fn is_umbriago(&self) -> bool {
        self.umbriago.is_some()
    }
}

/// Decides the four categories. The closest-to-pin winner is measured on the
/// course and passed in. Score-based categories need all four scores.
pub fn umbriago_categories(
    team_a: [Option<i32>; 2],
    team_b: [Option<i32>; 2],
    par: i32,
    closest_to_pin: Option<Team>,
) -> UmbriagoCategories {
    let ([Some(a1), Some(a2)], [Some(b1), Some(b2)]) = (team_a, team_b) else {
        return UmbriagoCategories {
            closest_to_pin,
            ..UmbriagoCategories::default()
        };
    };

    let team_low = lower_wins(a1 + a2, b1 + b2);

    let low_a = a1.min(a2);
    let low_b = b1.min(b2);
    let individual_low = lower_wins(low_a, low_b);

    let birdie_line = par - 1;
    let birdie_a = low_a <= birdie_line;
    let birdie_b = low_b <= birdie_line;
    let birdie_or_better = match (birdie_a, birdie_b) {
        (true, false) => Some(Team::A),
        (false, true) => Some(Team::B),
        _ => None,
    };

    UmbriagoCategories {
        team_low,
        individual_low,
        closest_to_pin,
        birdie_or_better,
    }
}

pub fn umbriago_points(
    categories: &UmbriagoCategories,
    multiplier: HoleMultiplier,
    point_value: u32,
) -> HolePoints {
    let mut umbriago = None;
    let mut total = |team: Team| {
        let won = categories.won_by(team);
        let base = if won == CATEGORY_COUNT {
            umbriago = Some(team);
            won * 2
        } else {
            won
        };
        base.saturating_mul(point_value).saturating_mul(multiplier.factor())
    };
    let team_a = total(Team::A);
    let team_b = total(Team::B);

    HolePoints {
        team_a,
        team_b,
        umbriago,
    }
}
