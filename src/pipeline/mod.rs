//! Pipeline orchestration for drill-down commands.
//!
//! Shared plumbing for the CLI handlers: build a record source and
//! controller from configuration, then render a session to its destination.

mod output;
mod report_stage;
mod source_stage;

pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};
pub use report_stage::{output_session, report_config};
pub use source_stage::{build_controller, build_source};

/// Exit codes for scripting
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// The drill-down matched no records (with `--fail-on-empty`)
    pub const EMPTY_RESULT: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
