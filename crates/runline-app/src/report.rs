// Report rendering for evaluated matchups (plain text or JSON).

use runline_core::TeamId;
use serde_json::{json, Value};

use crate::app::MatchupOutcome;
use crate::config::OutputFormat;

/// Render every outcome in the configured format.
///
/// Text blocks are separated by a blank line; JSON is one compact document
/// per line.
pub fn render(format: OutputFormat, outcomes: &[MatchupOutcome]) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(outcomes.iter().map(render_text).collect::<Vec<_>>().join("\n")),
        OutputFormat::Json => {
            let mut out = String::new();
            for outcome in outcomes {
                out.push_str(&serde_json::to_string(&render_json(outcome))?);
                out.push('\n');
            }
            Ok(out)
        }
    }
}

pub fn render_text(outcome: &MatchupOutcome) -> String {
    let m = &outcome.matchup;
    let home = TeamId::new(&m.home);
    let away = TeamId::new(&m.away);

    let mut out = format!("{home} vs {away}\n");
    match &outcome.result {
        Err(e) => {
            out.push_str(&format!("No projection: {e}\n"));
        }
        Ok(eval) => {
            let p = &eval.projection;
            let a = &eval.assessment;
            out.push_str(&format!(
                "Projected: {home} {:.2}, {away} {:.2} (spread {:.2}, total {:.2})\n",
                p.home_projected, p.away_projected, p.projected_spread, p.projected_total
            ));
            out.push_str(&format!(
                "Market: spread {}, total {}\n\n",
                m.market_spread, m.market_total
            ));
            out.push_str("Value Analysis Results:\n");
            out.push_str(&format!("Spread Value: {:.2} runs\n", a.spread_value));
            out.push_str(&format!("Total Value: {:.2} runs\n\n", a.total_value));
            out.push_str("Recommended Bets:\n");
            if a.has_value() {
                for msg in a.messages() {
                    out.push_str(&format!("- {msg}\n"));
                }
            } else {
                out.push_str("- none\n");
            }
        }
    }
    out
}

pub fn render_json(outcome: &MatchupOutcome) -> Value {
    let m = &outcome.matchup;
    let mut doc = json!({
        "home": TeamId::new(&m.home),
        "away": TeamId::new(&m.away),
        "market_spread": m.market_spread,
        "market_total": m.market_total,
    });

    match &outcome.result {
        Ok(eval) => {
            doc["projection"] = json!(eval.projection);
            doc["spread_value"] = json!(eval.assessment.spread_value);
            doc["total_value"] = json!(eval.assessment.total_value);
            doc["recommendations"] = json!(eval.assessment.recommendations);
            doc["messages"] = json!(eval.assessment.messages());
        }
        Err(e) => {
            doc["error"] = json!({ "kind": e.kind(), "message": e.to_string() });
        }
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Evaluation;
    use crate::config::Matchup;
    use runline_core::{AnalysisError, MatchupProjection, Recommendation, ValueAssessment};

    fn nyy_bos() -> Matchup {
        Matchup {
            home: "nyy".into(),
            away: "BOS".into(),
            market_spread: -1.5,
            market_total: 8.5,
        }
    }

    fn flagged() -> MatchupOutcome {
        MatchupOutcome {
            matchup: nyy_bos(),
            result: Ok(Evaluation {
                projection: MatchupProjection::from_scores(6.0, 2.0),
                assessment: ValueAssessment {
                    spread_value: 5.5,
                    total_value: -0.5,
                    recommendations: vec![Recommendation::Spread {
                        team: TeamId::new("NYY"),
                        line: -1.5,
                    }],
                },
            }),
        }
    }

    #[test]
    fn text_report_lists_values_and_bets() {
        let text = render_text(&flagged());
        assert!(text.starts_with("NYY vs BOS\n"));
        assert!(text.contains("Projected: NYY 6.00, BOS 2.00 (spread 4.00, total 8.00)"));
        assert!(text.contains("Value Analysis Results:\nSpread Value: 5.50 runs\nTotal Value: -0.50 runs"));
        assert!(text.contains("Recommended Bets:\n- Value on NYY spread -1.5\n"));
    }

    #[test]
    fn text_report_says_none_without_value() {
        let mut outcome = flagged();
        if let Ok(eval) = &mut outcome.result {
            eval.assessment.recommendations.clear();
        }
        assert!(render_text(&outcome).ends_with("Recommended Bets:\n- none\n"));
    }

    #[test]
    fn text_report_explains_failures() {
        let unknown = MatchupOutcome {
            matchup: nyy_bos(),
            result: Err(AnalysisError::UnknownTeam(TeamId::new("NYY"))),
        };
        assert_eq!(render_text(&unknown), "NYY vs BOS\nNo projection: team not found: NYY\n");

        let unavailable = MatchupOutcome {
            matchup: nyy_bos(),
            result: Err(AnalysisError::DataUnavailable("request timed out".into())),
        };
        assert!(render_text(&unavailable).contains("team statistics unavailable: request timed out"));
    }

    #[test]
    fn json_report_carries_projection_and_recommendations() {
        let doc = render_json(&flagged());
        assert_eq!(doc["home"], "NYY");
        assert_eq!(doc["projection"]["projected_spread"], 4.0);
        assert_eq!(doc["spread_value"], 5.5);
        assert_eq!(doc["recommendations"][0]["kind"], "spread");
        assert_eq!(doc["recommendations"][0]["team"], "NYY");
        assert_eq!(doc["messages"][0], "Value on NYY spread -1.5");
        assert!(doc.get("error").is_none());
    }

    #[test]
    fn json_report_carries_error_kind() {
        let outcome = MatchupOutcome {
            matchup: nyy_bos(),
            result: Err(AnalysisError::DataUnavailable("boom".into())),
        };
        let doc = render_json(&outcome);
        assert_eq!(doc["error"]["kind"], "data_unavailable");
        assert_eq!(doc["error"]["message"], "team statistics unavailable: boom");
        assert!(doc.get("projection").is_none());
    }

    #[test]
    fn json_render_is_one_line_per_matchup() {
        let out = render(OutputFormat::Json, &[flagged(), flagged()]).unwrap();
        assert_eq!(out.lines().count(), 2);
        for line in out.lines() {
            let doc: Value = serde_json::from_str(line).unwrap();
            assert_eq!(doc["away"], "BOS");
        }
    }
}
