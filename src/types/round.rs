use crate::error::GolfError;
use crate::scoring::umbriago::HoleMultiplier;
use crate::scoring::wolf;
use crate::scoring::{ScoreBasis, Team};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

pub const MAX_STROKE_INDEX: u32 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameFormat {
    StrokePlay,
    MatchPlay,
    BestBall,
    Scramble,
    Skins,
    Wolf,
    Umbriago,
    Copenhagen,
}

impl fmt::Display for GameFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameFormat::StrokePlay => "stroke play",
            GameFormat::MatchPlay => "match play",
            GameFormat::BestBall => "best ball",
            GameFormat::Scramble => "scramble",
            GameFormat::Skins => "skins",
            GameFormat::Wolf => "wolf",
            GameFormat::Umbriago => "umbriago",
            GameFormat::Copenhagen => "copenhagen",
        };
        f.write_str(name)
    }
}

/// A round file: who played, which game, and the scores entered so far.
///
/// In a scramble each entry in `players` is a team playing one ball.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Round {
    pub name: String,
    pub format: GameFormat,
    #[serde(default = "default_holes_played")]
    pub holes_played: u32,
    #[serde(default)]
    pub basis: ScoreBasis,
    pub players: Vec<PlayerEntry>,
    #[serde(default)]
    pub holes: Vec<HoleEntry>,
    /// Per-round overrides layered on top of the loaded game settings.
    #[serde(default)]
    pub settings: Option<toml::Value>,
}

fn default_holes_played() -> u32 {
    18
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayerEntry {
    pub name: String,
    pub handicap: Option<f64>,
    pub team: Option<Team>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HoleEntry {
    pub number: u32,
    pub par: i32,
    pub stroke_index: Option<u32>,
    /// Gross scores by player name. A missing name has not been entered.
    #[serde(default)]
    pub scores: BTreeMap<String, i32>,
    pub wolf: Option<WolfCall>,
    pub closest_to_pin: Option<Team>,
    #[serde(default)]
    pub multiplier: HoleMultiplier,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WolfCall {
    Lone,
    Partner(String),
}

impl Round {
    pub fn player_index(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|player| player.name == name)
    }

    /// Indexes of the players on `team`, in file order.
    pub fn team_members(&self, team: Team) -> Vec<usize> {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, player)| player.team == Some(team))
            .map(|(index, _)| index)
            .collect()
    }

    pub fn ordered_holes(&self) -> Vec<&HoleEntry> {
        let mut holes: Vec<&HoleEntry> = self.holes.iter().collect();
        holes.sort_by_key(|hole| hole.number);
        holes
    }

    pub fn validate(&self) -> Result<(), GolfError> {
        if !matches!(self.holes_played, 9 | 18) {
            return Err(invalid(format!(
                "holes_played must be 9 or 18 (found {})",
                self.holes_played
            )));
        }

        let mut names = HashSet::new();
        for player in &self.players {
            let name = player.name.as_str();
            if name.trim().is_empty() {
                return Err(invalid("player names must be non-empty".to_string()));
            }
            if name.trim() != name {
                return Err(invalid(format!(
                    "player name {name:?} has leading or trailing whitespace"
                )));
            }
            if !names.insert(name) {
                return Err(invalid(format!("duplicate player: {name}")));
            }
        }

        self.validate_format()?;

        let mut numbers = HashSet::new();
        for hole in &self.holes {
            self.validate_hole(hole)?;
            if !numbers.insert(hole.number) {
                return Err(invalid(format!("hole {} appears twice", hole.number)));
            }
        }

        Ok(())
    }

    fn validate_format(&self) -> Result<(), GolfError> {
        let count = self.players.len();
        match self.format {
            GameFormat::StrokePlay | GameFormat::Scramble if count == 0 => {
                Err(invalid(format!("{} needs at least one entry", self.format)))
            }
            GameFormat::Skins if count < 2 => {
                Err(invalid("skins needs at least 2 players".to_string()))
            }
            GameFormat::Copenhagen if count != 3 => Err(invalid(format!(
                "copenhagen needs exactly 3 players (found {count})"
            ))),
            GameFormat::Wolf if !(wolf::MIN_PLAYERS..=wolf::MAX_PLAYERS).contains(&count) => {
                Err(invalid(format!(
                    "wolf needs {}-{} players (found {count})",
                    wolf::MIN_PLAYERS,
                    wolf::MAX_PLAYERS
                )))
            }
            GameFormat::MatchPlay => self.validate_teams(Some(1)),
            GameFormat::BestBall => self.validate_teams(None),
            GameFormat::Umbriago => self.validate_teams(Some(2)),
            _ => Ok(()),
        }
    }

    fn validate_teams(&self, size: Option<usize>) -> Result<(), GolfError> {
        if let Some(player) = self.players.iter().find(|player| player.team.is_none()) {
            return Err(invalid(format!(
                "{} requires a team for every player; {} has none",
                self.format, player.name
            )));
        }
        for team in [Team::A, Team::B] {
            let members = self.team_members(team).len();
            if members == 0 {
                return Err(invalid(format!("{team} has no players")));
            }
            if let Some(size) = size {
                if members != size {
                    return Err(invalid(format!(
                        "{} needs {size} player(s) per team; {team} has {members}",
                        self.format
                    )));
                }
            }
        }
        Ok(())
    }

    fn validate_hole(&self, hole: &HoleEntry) -> Result<(), GolfError> {
        if hole.number == 0 || hole.number > self.holes_played {
            return Err(invalid(format!(
                "hole number {} outside 1-{}",
                hole.number, self.holes_played
            )));
        }
        if hole.par <= 0 {
            return Err(invalid(format!("hole {} has par {}", hole.number, hole.par)));
        }
        if let Some(stroke_index) = hole.stroke_index {
            if stroke_index == 0 || stroke_index > MAX_STROKE_INDEX {
                return Err(invalid(format!(
                    "hole {} stroke_index {stroke_index} outside 1-{MAX_STROKE_INDEX}",
                    hole.number
                )));
            }
        }
        for (name, score) in &hole.scores {
            if self.player_index(name).is_none() {
                return Err(invalid(format!(
                    "hole {} has a score for unknown player {name}",
                    hole.number
                )));
            }
            if *score <= 0 {
                return Err(invalid(format!(
                    "hole {} score for {name} must be positive (found {score})",
                    hole.number
                )));
            }
        }
        if let Some(WolfCall::Partner(partner)) = &hole.wolf {
            if self.player_index(partner).is_none() {
                return Err(invalid(format!(
                    "hole {} names unknown wolf partner {partner}",
                    hole.number
                )));
            }
        }
        Ok(())
    }
}

fn invalid(message: String) -> GolfError {
    GolfError::InvalidRound(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_str: &str) -> Round {
        toml::from_str(toml_str).expect("round should parse")
    }

    #[test]
    fn parse_round_with_optional_fields() {
        let round = parse(
            r#"
name = "Saturday"
format = "wolf"
basis = "net"

[[players]]
name = "Ann"
handicap = 8.2

[[players]]
name = "Bob"

[[players]]
name = "Cy"

[[holes]]
number = 1
par = 4
stroke_index = 5
scores = { Ann = 4, Bob = 5 }
wolf = { partner = "Cy" }

[[holes]]
number = 2
par = 3
wolf = "lone"
multiplier = "double_back"
"#,
        );
        assert_eq!(round.holes_played, 18);
        assert_eq!(round.basis, ScoreBasis::Net);
        assert_eq!(round.holes[0].wolf, Some(WolfCall::Partner("Cy".to_string())));
        assert_eq!(round.holes[1].wolf, Some(WolfCall::Lone));
        assert_eq!(round.holes[1].multiplier, HoleMultiplier::DoubleBack);
        assert!(round.validate().is_ok());
    }

    #[test]
    fn rejects_score_for_unknown_player() {
        let round = parse(
            r#"
name = "r"
format = "skins"

[[players]]
name = "Ann"

[[players]]
name = "Bob"

[[holes]]
number = 1
par = 4
scores = { Zed = 4 }
"#,
        );
        assert!(matches!(round.validate(), Err(GolfError::InvalidRound(_))));
    }

    #[test]
    fn rejects_padded_player_name() {
        let round = parse(
            r#"
name = "r"
format = "skins"
players = [{ name = " Ann" }, { name = "Bob" }]
holes = [{ number = 1, par = 4, scores = { Bob = 4 } }]
"#,
        );
        let err = round.validate().expect_err("padded name");
        assert!(err.to_string().contains("whitespace"));
    }

    #[test]
    fn rejects_wrong_copenhagen_player_count() {
        let round = parse(
            r#"
name = "r"
format = "copenhagen"

[[players]]
name = "Ann"

[[players]]
name = "Bob"
"#,
        );
        let err = round.validate().expect_err("two players is invalid");
        assert!(err.to_string().contains("exactly 3 players"));
    }

    #[test]
    fn umbriago_requires_two_per_team() {
        let round = parse(
            r#"
name = "r"
format = "umbriago"
players = [
  { name = "Ann", team = "A" },
  { name = "Bob", team = "A" },
  { name = "Cy", team = "A" },
  { name = "Di", team = "B" },
]
"#,
        );
        assert!(round.validate().is_err());
    }

    #[test]
    fn rejects_hole_beyond_round_length() {
        let round = parse(
            r#"
name = "r"
format = "stroke_play"
holes_played = 9
players = [{ name = "Ann" }]
holes = [{ number = 10, par = 4 }]
"#,
        );
        assert!(round.validate().is_err());
    }

    #[test]
    fn rejects_stroke_index_out_of_range() {
        let round = parse(
            r#"
name = "r"
format = "stroke_play"
players = [{ name = "Ann" }]
holes = [{ number = 1, par = 4, stroke_index = 19 }]
"#,
        );
        assert!(round.validate().is_err());
    }

    #[test]
    fn ordered_holes_sorts_by_number() {
        let round = parse(
            r#"
name = "r"
format = "stroke_play"
players = [{ name = "Ann" }]
holes = [{ number = 3, par = 4 }, { number = 1, par = 5 }]
"#,
        );
        let numbers: Vec<u32> = round.ordered_holes().iter().map(|hole| hole.number).collect();
        assert_eq!(numbers, vec![1, 3]);
    }
}
