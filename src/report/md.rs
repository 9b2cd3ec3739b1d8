use crate::scoring::copenhagen::CopenhagenOutcome;
use crate::scoring::match_play::{HoleOutcome, MatchResult};
use crate::scoring::skins::SkinsHoleResult;
use crate::scoring::wolf::WolfSide;
use crate::types::report::{GameSummary, PointsLine, RoundReport, StrokeStanding};

pub fn to_markdown(report: &RoundReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", report.name));
    output.push_str(&format!(
        "Format: {} ({:?})\n\nHoles scored: {}\n\n",
        report.format, report.basis, report.holes_scored
    ));
    if !report.holes_pending.is_empty() {
        let pending: Vec<String> = report.holes_pending.iter().map(u32::to_string).collect();
        output.push_str(&format!("Pending holes: {}\n\n", pending.join(", ")));
    }

    match &report.summary {
        GameSummary::StrokePlay { standings } | GameSummary::Scramble { standings } => {
            push_stroke_standings(&mut output, standings);
        }
        GameSummary::Match {
            holes,
            label,
            result,
            dormie,
            ..
        } => {
            output.push_str("## Holes\n\n");
            for line in holes {
                let outcome = match line.outcome {
                    HoleOutcome::Won(team) => format!("{team} wins"),
                    HoleOutcome::Halved => "halved".to_string(),
                };
                output.push_str(&format!(
                    "- {}: {} ({}) v {} ({}), {}, status {:+}\n",
                    line.hole,
                    line.team_a,
                    line.counting_a,
                    line.team_b,
                    line.counting_b,
                    outcome,
                    line.status
                ));
            }
            output.push_str("\n## Result\n\n");
            match result {
                MatchResult::AllSquare => {
                    output.push_str(&format!("- {label}\n"));
                }
                MatchResult::Up { leader, .. }
                | MatchResult::Closed { leader, .. } => {
                    output.push_str(&format!("- {leader} {label}\n"));
                }
            }
            if *dormie {
                output.push_str("- dormie\n");
            }
        }
        GameSummary::Skins {
            holes,
            standings,
            unclaimed,
        } => {
            output.push_str("## Holes\n\n");
            for line in holes {
                let text = match (&line.result, &line.winner) {
                    (SkinsHoleResult::Won { skins, .. }, Some(winner)) => {
                        format!("{winner} wins {skins} skin(s)")
                    }
                    (SkinsHoleResult::Carryover { pot }, _) => format!("tied, {pot} riding"),
                    (SkinsHoleResult::Halved, _) => "tied, skin lost".to_string(),
                    _ => "pending".to_string(),
                };
                output.push_str(&format!("- {}: {}\n", line.hole, text));
            }
            output.push_str("\n## Standings\n\n");
            for line in standings {
                output.push_str(&format!(
                    "- {}: {} skin(s), {:.2}\n",
                    line.name, line.skins, line.winnings
                ));
            }
            if *unclaimed > 0 {
                output.push_str(&format!("\nUnclaimed skins: {unclaimed}\n"));
            }
        }
        GameSummary::Wolf { holes, standings } => {
            output.push_str("## Holes\n\n");
            for line in holes {
                let side = match line.winning_side {
                    WolfSide::Wolf => "wolf wins",
                    WolfSide::Opponents => "opponents win",
                    WolfSide::Tie => "tie",
                };
                let call = match &line.partner {
                    Some(partner) => format!("{} + {}", line.wolf, partner),
                    None => format!("{} alone", line.wolf),
                };
                output.push_str(&format!("- {}: {}, {}\n", line.hole, call, side));
            }
            push_points(&mut output, standings);
        }
        GameSummary::Umbriago {
            holes,
            team_a,
            team_b,
        } => {
            output.push_str("## Holes\n\n");
            for line in holes {
                output.push_str(&format!(
                    "- {}: A {} / B {} (x{}){}\n",
                    line.hole,
                    line.points.team_a,
                    line.points.team_b,
                    line.multiplier.factor(),
                    if line.points.is_umbriago() {
                        " umbriago!"
                    } else {
                        ""
                    }
                ));
            }
            output.push_str(&format!(
                "\n## Totals\n\n- Team A: {team_a}\n- Team B: {team_b}\n"
            ));
        }
        GameSummary::Copenhagen { holes, standings } => {
            output.push_str("## Holes\n\n");
            for line in holes {
                let note = match line.outcome {
                    CopenhagenOutcome::Sweep { .. } => " sweep",
                    CopenhagenOutcome::Incomplete => " pending",
                    _ => "",
                };
                output.push_str(&format!(
                    "- {}: {}-{}-{}{}\n",
                    line.hole, line.points[0], line.points[1], line.points[2], note
                ));
            }
            push_points(&mut output, standings);
        }
    }

    output
}

fn push_stroke_standings(output: &mut String, standings: &[StrokeStanding]) {
    output.push_str("## Standings\n\n");
    if standings.is_empty() {
        output.push_str("- none\n");
    }
    for line in standings {
        output.push_str(&format!(
            "- {}: {} thru {} (gross {}, net {})\n",
            line.name, line.to_par, line.holes, line.gross, line.net
        ));
    }
}

fn push_points(output: &mut String, standings: &[PointsLine]) {
    output.push_str("\n## Standings\n\n");
    for line in standings {
        output.push_str(&format!("- {}: {}\n", line.name, line.points));
    }
}
