use career_fit::assessment::ScoringEngine;
use career_fit::config::AppConfig;
use career_fit::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the engine over the bank named by `APP_QUESTION_BANK`, or the standard bank.
pub(crate) fn scoring_engine(config: &AppConfig) -> Result<ScoringEngine, AppError> {
    let bank = config.assessment.load_bank()?;
    let source = config
        .assessment
        .question_bank_path
        .as_deref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "standard".to_string());
    info!(
        version = bank.version(),
        questions = bank.len(),
        %source,
        "question bank loaded"
    );
    Ok(ScoringEngine::new(Arc::new(bank)))
}

pub(crate) fn cli_engine() -> Result<ScoringEngine, AppError> {
    let config = AppConfig::load()?;
    scoring_engine(&config)
}
