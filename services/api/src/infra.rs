use metrics_exporter_prometheus::PrometheusHandle;
use stack_advisor::advisor::{EngineConfig, RecommendationEngine};
use stack_advisor::config::AppConfig;
use stack_advisor::error::AppError;
use stack_advisor::telemetry::{self, LogSink};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds the shipped engine, failing fast if the tables are inconsistent.
pub(crate) fn build_engine(config: EngineConfig) -> Result<Arc<RecommendationEngine>, AppError> {
    let engine = RecommendationEngine::standard(config)?;
    info!(
        candidates = engine.catalog().len(),
        questions = engine.questions().len(),
        top_n = config.top_n,
        "recommendation engine ready"
    );
    Ok(Arc::new(engine))
}

/// Loads configuration and logging for one-shot CLI commands, which keep stdout for output.
pub(crate) fn cli_config() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, LogSink::Stderr)?;
    Ok(config)
}

/// Parses `question=value` pairs given on the command line.
pub(crate) fn parse_answer(raw: &str) -> Result<(String, String), String> {
    let (question, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected QUESTION=VALUE, got '{raw}'"))?;
    let question = question.trim();
    let value = value.trim();
    if question.is_empty() || value.is_empty() {
        return Err(format!("expected QUESTION=VALUE, got '{raw}'"));
    }
    Ok((question.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_answer_splits_on_first_equals() {
        assert_eq!(
            parse_answer("primaryUse = api-data"),
            Ok(("primaryUse".to_string(), "api-data".to_string()))
        );
        assert_eq!(
            parse_answer("note=a=b"),
            Ok(("note".to_string(), "a=b".to_string()))
        );
    }

    #[test]
    fn parse_answer_rejects_missing_parts() {
        assert!(parse_answer("projectSize").is_err());
        assert!(parse_answer("=small").is_err());
        assert!(parse_answer("projectSize=").is_err());
    }
}
