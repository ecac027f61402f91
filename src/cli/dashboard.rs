//! Dashboard command handler.

use crate::config::AppConfig;
use crate::pipeline::{build_controller, exit_codes};
use crate::tui::{run_dashboard_tui, DashboardApp};
use anyhow::{Context, Result};

/// Run the interactive dashboard until the user quits
pub fn run_dashboard(config: &AppConfig) -> Result<i32> {
    let controller = build_controller(config)?;
    let mut app = DashboardApp::new(controller, config)?;
    run_dashboard_tui(&mut app).context("dashboard terminal error")?;
    Ok(exit_codes::SUCCESS)
}
