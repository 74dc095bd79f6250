use chrono::Utc;
use clap::ValueEnum;
use serde::Serialize;
use stack_advisor::advisor::{Candidate, Question, Recommendation, RecommendationResponse};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Debug, Serialize)]
struct RecommendationRow<'a> {
    rank: usize,
    id: &'a str,
    name: &'a str,
    match_score: u8,
    raw_score: u32,
    difficulty: &'a str,
    performance: &'a str,
    learning_curve: &'a str,
    installation: &'a str,
}

impl<'a> From<&'a Recommendation> for RecommendationRow<'a> {
    fn from(rec: &'a Recommendation) -> Self {
        Self {
            rank: rec.rank,
            id: rec.candidate.id,
            name: rec.candidate.name,
            match_score: rec.match_score,
            raw_score: rec.raw_score,
            difficulty: rec.candidate.difficulty.label(),
            performance: rec.candidate.performance.label(),
            learning_curve: rec.candidate.learning_curve.label(),
            installation: rec.candidate.installation,
        }
    }
}

pub(crate) fn write_questions<W: Write>(out: &mut W, questions: &[Question]) -> io::Result<()> {
    let total = questions.len();
    for (index, question) in questions.iter().enumerate() {
        writeln!(out, "[{}/{}] {} ({})", index + 1, total, question.prompt, question.id)?;
        for option in &question.options {
            writeln!(out, "  {} {:<14} {}", option.glyph, option.value, option.label)?;
        }
    }
    Ok(())
}

pub(crate) fn write_candidates<W: Write>(out: &mut W, candidates: &[Candidate]) -> io::Result<()> {
    for candidate in candidates {
        writeln!(
            out,
            "{:<14} {} | difficulty {} | performance {} | learning curve {}",
            candidate.id,
            candidate.name,
            candidate.difficulty.label(),
            candidate.performance.label(),
            candidate.learning_curve.label()
        )?;
    }
    Ok(())
}

pub(crate) fn write_candidate_detail<W: Write>(out: &mut W, candidate: &Candidate) -> io::Result<()> {
    writeln!(out, "{} ({})", candidate.name, candidate.id)?;
    writeln!(out, "{}", candidate.description)?;
    writeln!(
        out,
        "Difficulty: {} | Performance: {} | Learning curve: {}",
        candidate.difficulty.label(),
        candidate.performance.label(),
        candidate.learning_curve.label()
    )?;
    write_list(out, "Pros", &candidate.pros)?;
    write_list(out, "Cons", &candidate.cons)?;
    write_list(out, "Best for", &candidate.best_for)?;
    writeln!(out, "Install: {}", candidate.installation)?;
    writeln!(out, "\nExample:\n{}", candidate.code_example)?;
    Ok(())
}

fn write_list<W: Write>(out: &mut W, heading: &str, items: &[&str]) -> io::Result<()> {
    writeln!(out, "{heading}:")?;
    for item in items {
        writeln!(out, "  - {item}")?;
    }
    Ok(())
}

pub(crate) fn write_recommendations<W: Write>(
    out: &mut W,
    recommendations: &[Recommendation],
    missing_questions: &[&'static str],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_recommendation_text(out, recommendations, missing_questions),
        OutputFormat::Json => {
            let response = RecommendationResponse {
                generated_at: Utc::now(),
                complete: missing_questions.is_empty(),
                missing_questions: missing_questions.to_vec(),
                recommendations: recommendations.to_vec(),
            };
            serde_json::to_writer_pretty(&mut *out, &response)?;
            writeln!(out)
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            for rec in recommendations {
                writer.serialize(RecommendationRow::from(rec))?;
            }
            writer.flush()
        }
    }
}

fn write_recommendation_text<W: Write>(
    out: &mut W,
    recommendations: &[Recommendation],
    missing_questions: &[&'static str],
) -> io::Result<()> {
    if !missing_questions.is_empty() {
        writeln!(out, "Unanswered: {}", missing_questions.join(", "))?;
    }
    writeln!(out, "Recommended state management")?;
    for rec in recommendations {
        writeln!(
            out,
            "{}. {} - {}% match (score {})",
            rec.rank, rec.candidate.name, rec.match_score, rec.raw_score
        )?;
        writeln!(out, "   {}", rec.candidate.description)?;
        writeln!(out, "   Install: {}", rec.candidate.installation)?;
        if !rec.contributions.is_empty() {
            let reasons: Vec<String> = rec
                .contributions
                .iter()
                .map(|c| format!("{}={} +{}", c.question, c.answer, c.points))
                .collect();
            writeln!(out, "   Why: {}", reasons.join(", "))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stack_advisor::advisor::{AnswerSet, EngineConfig, RecommendationEngine};

    fn starter_recommendations() -> Vec<Recommendation> {
        let engine =
            RecommendationEngine::standard(EngineConfig::default()).expect("standard engine");
        let answers = AnswerSet::new()
            .with("projectSize", "small")
            .with("teamExperience", "beginner")
            .with("stateComplexity", "simple")
            .with("primaryUse", "forms")
            .with("performance", "not-critical")
            .with("learningCurve", "gentle");
        engine.recommend(&answers).expect("recommendations")
    }

    fn render(format: OutputFormat, missing: &[&'static str]) -> String {
        let mut buffer = Vec::new();
        write_recommendations(&mut buffer, &starter_recommendations(), missing, format)
            .expect("report renders");
        String::from_utf8(buffer).expect("utf8 output")
    }

    #[test]
    fn text_report_lists_ranked_candidates() {
        let output = render(OutputFormat::Text, &[]);

        assert!(output.contains("1. React Context API - 58% match (score 115)"));
        assert!(output.contains("2. Zustand - 48% match"));
        assert!(output.contains("3. Valtio - 35% match"));
        assert!(!output.contains("Unanswered"));
    }

    #[test]
    fn json_report_wraps_recommendations() {
        let output = render(OutputFormat::Json, &["budget"]);
        let value: serde_json::Value = serde_json::from_str(&output).expect("valid json");

        assert_eq!(value["complete"], serde_json::json!(false));
        assert_eq!(value["recommendations"][0]["id"], "context-api");
        assert!(value.get("generated_at").is_some());
    }

    #[test]
    fn csv_report_has_header_and_one_row_per_candidate() {
        let output = render(OutputFormat::Csv, &[]);
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("rank,id,name,match_score,raw_score"));
        assert!(lines[1].starts_with("1,context-api,React Context API,58,115"));
    }

    #[test]
    fn candidate_detail_includes_install_command() {
        let engine =
            RecommendationEngine::standard(EngineConfig::default()).expect("standard engine");
        let candidate = engine.catalog().get("zustand").expect("zustand listed");
        let mut buffer = Vec::new();

        write_candidate_detail(&mut buffer, candidate).expect("detail renders");

        let output = String::from_utf8(buffer).expect("utf8 output");
        assert!(output.starts_with("Zustand (zustand)"));
        assert!(output.contains("Install: npm install zustand"));
    }
}
