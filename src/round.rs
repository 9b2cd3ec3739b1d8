//! Runs a game's per-hole engine over a whole round.
//!
//! The engines themselves are stateless; this module threads the state that
//! crosses holes (skins pot, match status) and turns names into indexes.

use crate::error::{GolfError, Result};
use crate::scoring::copenhagen::copenhagen_points;
use crate::scoring::handicap::{playing_handicap, strokes_for_playing_handicap};
use crate::scoring::match_play::{best_ball, hole_outcome, MatchState};
use crate::scoring::skins::skins_leaderboard;
use crate::scoring::stroke_play::{format_to_par, StrokeTotals};
use crate::scoring::umbriago::{umbriago_categories, umbriago_points};
use crate::scoring::wolf::{wolf_for_hole, wolf_hole_score, WolfChoice};
use crate::scoring::{PlayerHole, Team};
use crate::types::config::GameSettings;
use crate::types::report::{
    rank_points, CopenhagenHoleLine, GameSummary, MatchHoleLine, PointsLine, RoundReport,
    SkinsHoleLine, SkinsLine, StrokeStanding, UmbriagoHoleLine, WolfHoleLine,
};
use crate::types::round::{GameFormat, HoleEntry, Round, WolfCall};
use chrono::Utc;
use tracing::{debug, info, warn};

pub fn score_round(round: &Round, settings: &GameSettings) -> Result<RoundReport> {
    round.validate()?;
    settings.validate()?;

    let card = Scorecard::new(round, settings);
    let holes = round.ordered_holes();
    let holes_pending: Vec<u32> = holes
        .iter()
        .filter(|hole| card.is_pending(hole))
        .map(|hole| hole.number)
        .collect();
    for hole in &holes_pending {
        warn!(round = %round.name, hole, "hole has missing entries");
    }

    let summary = match round.format {
        GameFormat::StrokePlay => GameSummary::StrokePlay {
            standings: stroke_standings(&card, &holes),
        },
        GameFormat::Scramble => GameSummary::Scramble {
            standings: stroke_standings(&card, &holes),
        },
        GameFormat::MatchPlay | GameFormat::BestBall => match_summary(&card, &holes),
        GameFormat::Skins => skins_summary(&card, &holes, settings),
        GameFormat::Wolf => wolf_summary(&card, &holes, settings)?,
        GameFormat::Umbriago => umbriago_summary(&card, &holes, settings),
        GameFormat::Copenhagen => copenhagen_summary(&card, &holes),
    };

    let holes_scored = (holes.len() - holes_pending.len()) as u32;
    info!(
        round = %round.name,
        format = %round.format,
        holes_scored,
        pending = holes_pending.len(),
        "round scored"
    );

    Ok(RoundReport {
        name: round.name.clone(),
        format: round.format,
        basis: round.basis,
        generated_at: Utc::now().to_rfc3339(),
        holes_scored,
        holes_pending,
        summary,
    })
}

/// A round with each player's playing handicap worked out once.
struct Scorecard<'a> {
    round: &'a Round,
    handicaps: Vec<i32>,
}

impl<'a> Scorecard<'a> {
    fn new(round: &'a Round, settings: &GameSettings) -> Self {
        let handicaps = round
            .players
            .iter()
            .map(|player| playing_handicap(player.handicap, settings.handicap.allowance))
            .collect();
        Self { round, handicaps }
    }

    fn name(&self, player: usize) -> String {
        self.round
            .players
            .get(player)
            .map(|player| player.name.clone())
            .unwrap_or_default()
    }

    fn entry(&self, hole: &HoleEntry, player: usize) -> PlayerHole {
        let gross = self
            .round
            .players
            .get(player)
            .and_then(|entry| hole.scores.get(&entry.name))
            .copied();
        let strokes = strokes_for_playing_handicap(
            self.handicaps.get(player).copied().unwrap_or(0),
            hole.stroke_index.unwrap_or(0),
            self.round.holes_played,
        );
        PlayerHole::new(gross, strokes)
    }

    fn entries(&self, hole: &HoleEntry) -> Vec<PlayerHole> {
        (0..self.round.players.len())
            .map(|player| self.entry(hole, player))
            .collect()
    }

    fn scores(&self, hole: &HoleEntry) -> Vec<Option<i32>> {
        self.entries(hole)
            .iter()
            .map(|entry| entry.score(self.round.basis))
            .collect()
    }

    fn is_pending(&self, hole: &HoleEntry) -> bool {
        let missing_score = self
            .round
            .players
            .iter()
            .any(|player| !hole.scores.contains_key(&player.name));
        let missing_call = self.round.format == GameFormat::Wolf && hole.wolf.is_none();
        missing_score || missing_call
    }
}

fn stroke_standings(card: &Scorecard<'_>, holes: &[&HoleEntry]) -> Vec<StrokeStanding> {
    let basis = card.round.basis;
    let mut totals = vec![StrokeTotals::default(); card.round.players.len()];
    for hole in holes {
        for (player, total) in totals.iter_mut().enumerate() {
            total.add(hole.par, card.entry(hole, player));
        }
    }

    let mut standings: Vec<(usize, StrokeTotals)> = totals.into_iter().enumerate().collect();
    standings.sort_by_key(|(_, total)| (total.holes == 0, total.to_par(basis)));
    standings
        .into_iter()
        .map(|(player, total)| StrokeStanding {
            name: card.name(player),
            holes: total.holes,
            gross: total.gross,
            net: total.net,
            to_par: format_to_par(total.to_par(basis)),
        })
        .collect()
}

fn match_summary(card: &Scorecard<'_>, holes: &[&HoleEntry]) -> GameSummary {
    let basis = card.round.basis;
    let team_a = card.round.team_members(Team::A);
    let team_b = card.round.team_members(Team::B);

    let mut state = MatchState::new(card.round.holes_played);
    let mut decided_on = None;
    let mut lines = Vec::new();
    for hole in holes {
        if state.is_decided() {
            debug!(hole = hole.number, "match already decided; hole ignored");
            continue;
        }
        if card.is_pending(hole) {
            debug!(hole = hole.number, "scores missing; hole not played");
            continue;
        }
        let side = |members: &[usize]| {
            let entries: Vec<PlayerHole> = members
                .iter()
                .map(|&player| card.entry(hole, player))
                .collect();
            best_ball(&entries, basis).map(|ball| (ball.score, members[ball.counting_player]))
        };
        let (Some((score_a, counting_a)), Some((score_b, counting_b))) =
            (side(&team_a), side(&team_b))
        else {
            debug!(hole = hole.number, "team score missing; hole not played");
            continue;
        };

        let outcome = hole_outcome(score_a, score_b);
        state = state.apply(outcome);
        debug!(hole = hole.number, ?outcome, status = state.status, "match hole");
        if state.is_decided() && state.holes_remaining > 0 {
            decided_on = Some(hole.number);
        }
        lines.push(MatchHoleLine {
            hole: hole.number,
            team_a: score_a,
            team_b: score_b,
            counting_a: card.name(counting_a),
            counting_b: card.name(counting_b),
            outcome,
            status: state.status,
        });
    }

    let result = state.result();
    GameSummary::Match {
        holes: lines,
        status: state.status,
        holes_remaining: state.holes_remaining,
        dormie: state.is_dormie(),
        decided_on,
        result,
        label: result.to_string(),
    }
}

fn skins_summary(card: &Scorecard<'_>, holes: &[&HoleEntry], settings: &GameSettings) -> GameSummary {
    let entries: Vec<(u32, Vec<PlayerHole>)> = holes
        .iter()
        .map(|hole| (hole.number, card.entries(hole)))
        .collect();
    let (results, board) = skins_leaderboard(
        &entries,
        card.round.players.len(),
        settings.skins.engine_settings(card.round.basis),
        settings.skins.value_per_skin,
    );

    let lines = holes
        .iter()
        .zip(results)
        .map(|(hole, result)| {
            debug!(hole = hole.number, ?result, "skins hole");
            SkinsHoleLine {
                hole: hole.number,
                winner: result.winner().map(|player| card.name(player)),
                result,
            }
        })
        .collect();
    let standings = board
        .standings
        .into_iter()
        .map(|standing| SkinsLine {
            name: card.name(standing.player),
            skins: standing.skins,
            winnings: standing.winnings,
            holes_won: standing.holes_won,
        })
        .collect();

    GameSummary::Skins {
        holes: lines,
        standings,
        unclaimed: board.unclaimed,
    }
}

fn wolf_summary(
    card: &Scorecard<'_>,
    holes: &[&HoleEntry],
    settings: &GameSettings,
) -> Result<GameSummary> {
    let player_count = card.round.players.len();
    let points = settings.wolf.points();
    let mut totals = vec![0u32; player_count];
    let mut lines = Vec::new();

    for hole in holes {
        let wolf = wolf_for_hole(hole.number, player_count, settings.wolf.tee_order);
        let Some(call) = &hole.wolf else {
            debug!(hole = hole.number, wolf = %card.name(wolf), "no wolf call yet");
            continue;
        };
        let choice = match call {
            WolfCall::Lone => WolfChoice::Lone,
            WolfCall::Partner(name) => {
                let partner = card.round.player_index(name).ok_or_else(|| {
                    GolfError::InvalidRound(format!("unknown wolf partner {name}"))
                })?;
                WolfChoice::Partner(partner)
            }
        };

        let result = wolf_hole_score(&card.scores(hole), wolf, choice, &points).map_err(
            |err| GolfError::InvalidRound(format!("hole {}: {err}", hole.number)),
        )?;
        debug!(hole = hole.number, wolf, ?choice, side = ?result.winning_side, "wolf hole");
        for (total, earned) in totals.iter_mut().zip(&result.player_points) {
            *total += earned;
        }
        lines.push(WolfHoleLine {
            hole: hole.number,
            wolf: card.name(wolf),
            partner: match choice {
                WolfChoice::Partner(partner) => Some(card.name(partner)),
                WolfChoice::Lone => None,
            },
            winning_side: result.winning_side,
            points: result.player_points,
        });
    }

    Ok(GameSummary::Wolf {
        holes: lines,
        standings: points_lines(card, &totals),
    })
}

fn umbriago_summary(
    card: &Scorecard<'_>,
    holes: &[&HoleEntry],
    settings: &GameSettings,
) -> GameSummary {
    let team_a = card.round.team_members(Team::A);
    let team_b = card.round.team_members(Team::B);
    let pair = |scores: &[Option<i32>], members: &[usize]| -> [Option<i32>; 2] {
        [
            members.first().and_then(|&player| scores[player]),
            members.get(1).and_then(|&player| scores[player]),
        ]
    };

    let (mut total_a, mut total_b) = (0, 0);
    let mut lines = Vec::new();
    for hole in holes {
        let scores = card.scores(hole);
        let categories = umbriago_categories(
            pair(&scores, &team_a),
            pair(&scores, &team_b),
            hole.par,
            hole.closest_to_pin,
        );
        let points = umbriago_points(&categories, hole.multiplier, settings.umbriago.point_value);
        debug!(hole = hole.number, ?categories, ?points, "umbriago hole");
        total_a += points.team_a;
        total_b += points.team_b;
        lines.push(UmbriagoHoleLine {
            hole: hole.number,
            categories,
            multiplier: hole.multiplier,
            points,
        });
    }

    GameSummary::Umbriago {
        holes: lines,
        team_a: total_a,
        team_b: total_b,
    }
}

fn copenhagen_summary(card: &Scorecard<'_>, holes: &[&HoleEntry]) -> GameSummary {
    let mut totals = vec![0u32; 3];
    let mut lines = Vec::new();
    for hole in holes {
        let scores = card.scores(hole);
        let triple = [scores[0], scores[1], scores[2]];
        let result = copenhagen_points(triple, hole.par);
        debug!(hole = hole.number, outcome = ?result.outcome, "copenhagen hole");
        for (total, earned) in totals.iter_mut().zip(result.points) {
            *total += earned;
        }
        lines.push(CopenhagenHoleLine {
            hole: hole.number,
            points: result.points,
            outcome: result.outcome,
        });
    }

    GameSummary::Copenhagen {
        holes: lines,
        standings: points_lines(card, &totals),
    }
}

fn points_lines(card: &Scorecard<'_>, totals: &[u32]) -> Vec<PointsLine> {
    rank_points(
        totals
            .iter()
            .enumerate()
            .map(|(player, &points)| PointsLine {
                name: card.name(player),
                points,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::copenhagen::CopenhagenOutcome;
    use crate::scoring::match_play::MatchResult;
    use crate::scoring::skins::SkinsHoleResult;

    fn round(toml_str: &str) -> Round {
        toml::from_str(toml_str).expect("round should parse")
    }

    fn score(toml_str: &str) -> RoundReport {
        score_round(&round(toml_str), &GameSettings::default()).expect("round should score")
    }

    #[test]
    fn stroke_play_ranks_by_net_to_par() {
        let report = score(
            r#"
name = "medal"
format = "stroke_play"
basis = "net"
players = [{ name = "Ann", handicap = 18.0 }, { name = "Bob" }]

[[holes]]
number = 1
par = 4
stroke_index = 1
scores = { Ann = 5, Bob = 4 }

[[holes]]
number = 2
par = 3
stroke_index = 2
scores = { Ann = 3 }
"#,
        );
        assert_eq!(report.holes_pending, vec![2]);
        let GameSummary::StrokePlay { standings } = report.summary else {
            panic!("expected stroke play summary");
        };
        assert_eq!(standings[0].name, "Ann");
        assert_eq!(standings[0].to_par, "-1");
        assert_eq!(standings[1].to_par, "E");
    }

    #[test]
    fn skins_thread_the_pot_across_holes() {
        let report = score(
            r#"
name = "skins"
format = "skins"
players = [{ name = "Ann" }, { name = "Bob" }, { name = "Cy" }]
holes = [
  { number = 1, par = 4, scores = { Ann = 4, Bob = 4, Cy = 5 } },
  { number = 2, par = 4, scores = { Ann = 5, Bob = 5, Cy = 5 } },
  { number = 3, par = 4, scores = { Ann = 6, Bob = 4, Cy = 5 } },
]
"#,
        );
        assert!(report.is_complete());
        let GameSummary::Skins {
            holes, standings, ..
        } = report.summary
        else {
            panic!("expected skins summary");
        };
        assert_eq!(holes[2].result, SkinsHoleResult::Won { player: 1, skins: 3 });
        assert_eq!(holes[2].winner.as_deref(), Some("Bob"));
        assert_eq!(standings[0].name, "Bob");
        assert_eq!(standings[0].holes_won, vec![3]);
    }

    #[test]
    fn best_ball_match_closes_out_early_and_ignores_later_holes() {
        let mut holes = String::new();
        for number in 1..=18 {
            // A wins the first ten holes outright
            let (a, b) = if number <= 10 { (3, 5) } else { (6, 4) };
            holes.push_str(&format!(
                "[[holes]]\nnumber = {number}\npar = 4\nscores = {{ Ann = {a}, Bob = 6, Cy = {b}, Di = 6 }}\n\n"
            ));
        }
        let report = score(&format!(
            r#"
name = "fourball"
format = "best_ball"
players = [
  {{ name = "Ann", team = "A" }},
  {{ name = "Bob", team = "A" }},
  {{ name = "Cy", team = "B" }},
  {{ name = "Di", team = "B" }},
]

{holes}"#
        ));
        let GameSummary::Match {
            holes,
            decided_on,
            result,
            label,
            ..
        } = report.summary
        else {
            panic!("expected match summary");
        };
        assert_eq!(holes.len(), 10);
        assert_eq!(decided_on, Some(10));
        assert_eq!(
            result,
            MatchResult::Closed {
                leader: Team::A,
                margin: 10,
                remaining: 8
            }
        );
        assert_eq!(label, "10 & 8");
        assert_eq!(holes[0].counting_a, "Ann");
    }

    #[test]
    fn wolf_rotates_and_totals_points() {
        let report = score(
            r#"
name = "wolf"
format = "wolf"
players = [{ name = "Ann" }, { name = "Bob" }, { name = "Cy" }, { name = "Di" }]

[[holes]]
number = 1
par = 4
scores = { Ann = 3, Bob = 4, Cy = 5, Di = 5 }
wolf = "lone"

[[holes]]
number = 2
par = 4
scores = { Ann = 4, Bob = 4, Cy = 3, Di = 5 }
wolf = { partner = "Cy" }

[[holes]]
number = 3
par = 4
scores = { Ann = 4, Bob = 4, Cy = 4, Di = 4 }
"#,
        );
        assert_eq!(report.holes_pending, vec![3]);
        let GameSummary::Wolf { holes, standings } = report.summary else {
            panic!("expected wolf summary");
        };
        assert_eq!(holes.len(), 2);
        assert_eq!(holes[0].wolf, "Ann");
        assert_eq!(holes[1].wolf, "Bob");
        assert_eq!(holes[1].partner.as_deref(), Some("Cy"));
        let ann = standings.iter().find(|line| line.name == "Ann").expect("Ann listed");
        assert_eq!(ann.points, 4);
        let bob = standings.iter().find(|line| line.name == "Bob").expect("Bob listed");
        assert_eq!(bob.points, 2);
    }

    #[test]
    fn wolf_partner_cannot_be_the_wolf() {
        let round = round(
            r#"
name = "wolf"
format = "wolf"
players = [{ name = "Ann" }, { name = "Bob" }, { name = "Cy" }]
holes = [{ number = 1, par = 4, scores = { Ann = 4, Bob = 4, Cy = 4 }, wolf = { partner = "Ann" } }]
"#,
        );
        let err = score_round(&round, &GameSettings::default()).expect_err("invalid call");
        assert!(err.to_string().contains("hole 1"));
    }

    #[test]
    fn umbriago_totals_apply_multipliers() {
        let report = score(
            r#"
name = "umbriago"
format = "umbriago"
players = [
  { name = "Ann", team = "A" },
  { name = "Bob", team = "A" },
  { name = "Cy", team = "B" },
  { name = "Di", team = "B" },
]

[[holes]]
number = 1
par = 4
scores = { Ann = 3, Bob = 4, Cy = 5, Di = 5 }
closest_to_pin = "A"

[[holes]]
number = 2
par = 4
scores = { Ann = 5, Bob = 5, Cy = 4, Di = 5 }
multiplier = "double"
"#,
        );
        let GameSummary::Umbriago {
            holes,
            team_a,
            team_b,
        } = report.summary
        else {
            panic!("expected umbriago summary");
        };
        assert!(holes[0].points.is_umbriago());
        // hole 2: B takes team low and individual low, doubled
        assert_eq!(holes[1].points.team_b, 4);
        assert_eq!(team_a, 8);
        assert_eq!(team_b, 4);
    }

    #[test]
    fn copenhagen_totals_six_per_complete_hole() {
        let report = score(
            r#"
name = "sixes"
format = "copenhagen"
players = [{ name = "Ann" }, { name = "Bob" }, { name = "Cy" }]
holes = [
  { number = 1, par = 5, scores = { Ann = 3, Bob = 5, Cy = 6 } },
  { number = 2, par = 4, scores = { Ann = 4, Bob = 4, Cy = 5 } },
  { number = 3, par = 4, scores = { Ann = 4 } },
]
"#,
        );
        let GameSummary::Copenhagen { holes, standings } = report.summary else {
            panic!("expected copenhagen summary");
        };
        assert_eq!(holes[0].outcome, CopenhagenOutcome::Sweep { winner: 0 });
        assert_eq!(holes[2].outcome, CopenhagenOutcome::Incomplete);
        let total: u32 = standings.iter().map(|line| line.points).sum();
        assert_eq!(total, 12);
        assert_eq!(standings[0].name, "Ann");
        assert_eq!(standings[0].points, 9);
    }


    fn assert_match_untouched(report: RoundReport) {
        assert_eq!(report.holes_pending, vec![1]);
        let GameSummary::Match {
            holes,
            status,
            holes_remaining,
            decided_on,
            ..
        } = report.summary
        else {
            panic!("expected match summary");
        };
        assert!(holes.is_empty());
        assert_eq!(status, 0);
        assert_eq!(holes_remaining, 18);
        assert_eq!(decided_on, None);
    }

    #[test]
    fn best_ball_hole_with_missing_teammate_is_not_played() {
        // Bob has not entered a score, so Ann's 5 cannot stand for team A
        assert_match_untouched(score(
            r#"
name = "fourball"
format = "best_ball"
players = [
  { name = "Ann", team = "A" },
  { name = "Bob", team = "A" },
  { name = "Cy", team = "B" },
  { name = "Di", team = "B" },
]
holes = [{ number = 1, par = 4, scores = { Ann = 5, Cy = 4, Di = 4 } }]
"#,
        ));
    }

    #[test]
    fn match_play_hole_with_one_score_is_not_played() {
        assert_match_untouched(score(
            r#"
name = "singles"
format = "match_play"
players = [{ name = "Ann", team = "A" }, { name = "Bob", team = "B" }]
holes = [{ number = 1, par = 4, scores = { Ann = 3 } }]
"#,
        ));
    }

    #[test]
    fn net_scoring_uses_allowance() {
        let round = round(
            r#"
name = "net skins"
format = "skins"
basis = "net"
players = [{ name = "Ann", handicap = 20.0 }, { name = "Bob" }]
holes = [{ number = 1, par = 4, stroke_index = 1, scores = { Ann = 5, Bob = 4 } }]
"#,
        );
        // full handicap: Ann gets 2 on SI 1 -> net 3 wins
        let full = score_round(&round, &GameSettings::default()).expect("round should score");
        let GameSummary::Skins { holes, .. } = full.summary else {
            panic!("expected skins summary");
        };
        assert_eq!(holes[0].winner.as_deref(), Some("Ann"));

        // no allowance: gross decides -> Bob wins
        let mut settings = GameSettings::default();
        settings.handicap.allowance = 0.0;
        let scratch = score_round(&round, &settings).expect("round should score");
        let GameSummary::Skins { holes, .. } = scratch.summary else {
            panic!("expected skins summary");
        };
        assert_eq!(holes[0].winner.as_deref(), Some("Bob"));
    }
}
