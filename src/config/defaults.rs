//! Default values shared by config types and the CLI.

/// Grace period between hiding and clearing a session, in milliseconds.
pub const DEFAULT_GRACE_PERIOD_MS: u64 = 300;

/// Seed used for synthetic data unless configured otherwise.
pub const DEFAULT_SEED: u64 = 20_240_101;

/// Upper bound on the days-ahead window for "due soon" statistics.
pub const MAX_DUE_SOON_DAYS: i64 = 3650;

/// Default display-width limit for table cells.
pub const DEFAULT_MAX_CELL_WIDTH: usize = 32;

/// Dashboard event-loop tick, in milliseconds.
pub const DEFAULT_TICK_RATE_MS: u64 = 50;
