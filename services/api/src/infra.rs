use std::fs;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use footprint::config::FactorsConfig;
use footprint::engine::FootprintEngine;
use footprint::error::AppError;
use footprint::factors::FactorTable;
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds the engine from the configured factor table override, falling back
/// to the embedded baseline table.
pub(crate) fn load_engine(config: &FactorsConfig) -> Result<FootprintEngine, AppError> {
    match &config.path {
        Some(path) => {
            let table = load_factor_table(path)?;
            info!(path = %path.display(), version = %table.metadata.version, "loaded factor table override");
            Ok(FootprintEngine::new(table))
        }
        None => Ok(FootprintEngine::baseline()),
    }
}

pub(crate) fn load_factor_table(path: &Path) -> Result<FactorTable, AppError> {
    let raw = fs::read_to_string(path)?;
    Ok(FactorTable::from_json_str(&raw)?)
}
