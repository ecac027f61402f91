//! Record source and controller construction.

use crate::config::AppConfig;
use crate::controller::DrillDownController;
use crate::error::{ErrorContext, Result};
use crate::source::{FixtureSource, RecordSource, SyntheticSource};

/// The record source selected by configuration: fixtures when a file is
/// configured, seeded or unseeded synthetic data otherwise.
pub fn build_source(config: &AppConfig) -> Result<Box<dyn RecordSource>> {
    if let Some(path) = &config.drilldown.fixtures {
        let source = FixtureSource::from_path(path).context("building record source")?;
        tracing::debug!(path = %path.display(), "using fixture records");
        return Ok(Box::new(source));
    }
    let source = match config.drilldown.seed {
        Some(seed) => SyntheticSource::seeded(seed),
        None => SyntheticSource::unseeded(),
    };
    tracing::debug!(seed = ?config.drilldown.seed, "using synthetic records");
    Ok(Box::new(source))
}

/// A controller over the configured source with the configured grace period.
pub fn build_controller(config: &AppConfig) -> Result<DrillDownController> {
    Ok(DrillDownController::new(build_source(config)?)
        .with_grace_period(config.drilldown.grace_period()))
}
