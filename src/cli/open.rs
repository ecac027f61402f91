//! Open command handler.
//!
//! Implements the `open` subcommand: one drill-down opened through a
//! controller and rendered as a report or in the dashboard.

use crate::catalog;
use crate::config::AppConfig;
use crate::controller::{DrillDownController, OpenRequest};
use crate::error::OptionContext;
use crate::filter::parse_filter_args;
use crate::model::{Category, RelatedItemType, Session};
use crate::pipeline::{
    auto_detect_format, build_controller, exit_codes, output_session, OutputTarget,
};
use crate::reports::ReportFormat;
use crate::tui::{run_dashboard_tui, DashboardApp};
use anyhow::{Context, Result};

/// Inputs of the `open` command
#[derive(Debug, Clone)]
pub struct OpenConfig {
    /// Category tag, e.g. `contracts`
    pub category: String,
    pub title: Option<String>,
    pub module: Option<String>,
    /// Raw `key=value` filter arguments
    pub filters: Vec<String>,
    /// Record id to show relationships for
    pub select: Option<String>,
    pub fail_on_empty: bool,
    pub quiet: bool,
    pub app: AppConfig,
}

/// Run the open command
#[allow(clippy::needless_pass_by_value)]
pub fn run_open(config: OpenConfig) -> Result<i32> {
    let mut controller = build_controller(&config.app)?;
    open_session(&mut controller, &config)?;

    let target = OutputTarget::from_option(config.app.output.file.clone());
    let format = auto_detect_format(config.app.output.format, &target);

    let (empty, failed) = match controller.drill_down_data() {
        Some(session) => (session.is_empty(), session.has_error()),
        None => (true, false),
    };

    if format == ReportFormat::Tui {
        let mut app = DashboardApp::new(controller, &config.app)?;
        run_dashboard_tui(&mut app).context("dashboard terminal error")?;
    } else if let Some(session) = controller.drill_down_data() {
        output_session(session, format, &target, &config.app, config.quiet)?;
        controller.close_drill_down();
    }

    if failed {
        return Ok(exit_codes::ERROR);
    }
    if config.fail_on_empty && empty {
        tracing::info!("drill-down matched no records");
        return Ok(exit_codes::EMPTY_RESULT);
    }
    Ok(exit_codes::SUCCESS)
}

/// Open the drill-down described by `config` on `controller`.
pub fn open_session<'a>(
    controller: &'a mut DrillDownController,
    config: &OpenConfig,
) -> Result<&'a Session> {
    let filters = parse_filter_args(&config.filters).context("invalid --filter argument")?;
    let category = Category::from_tag(&config.category);
    let title = config
        .title
        .clone()
        .unwrap_or_else(|| default_title(&category));
    let module = config.module.clone().unwrap_or_else(|| {
        catalog::entry(&category)
            .map_or("Dashboard", |entry| entry.module)
            .to_string()
    });

    let mut request = OpenRequest::new(category, title, module).maybe_filters(filters);
    if let Some(id) = &config.select {
        let item_type = RelatedItemType::parse(&config.category)
            .context_none(format!("'{}' records have no relationships", config.category))?;
        request = request.relationships(item_type.as_str(), id.as_str());
    }
    Ok(controller.open(request))
}

/// `risks` -> `Risks`, `due-diligence` -> `Due Diligence`
fn default_title(category: &Category) -> String {
    category
        .as_str()
        .split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
