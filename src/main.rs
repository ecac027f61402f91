//! counsel-drilldown: drill-down data exploration for legal dashboards
//!
//! Opens category drill-downs over synthetic or fixture records and renders
//! them as reports or in an interactive dashboard.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use counsel_drilldown::{
    cli,
    config::{self, AppConfig, Validatable},
    model::RelationshipKind,
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "counsel-drilldown")]
#[command(version)]
#[command(about = "Drill-down data exploration for legal practice dashboards", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Drill-down matched no records (with --fail-on-empty)
    3  Error occurred

EXAMPLES:
    # Executed contracts as a table
    counsel-drilldown open contracts --filter status=executed -o table

    # Critical risks as CSV
    counsel-drilldown open risks --filter severity=critical -o csv -O risks.csv

    # Items linked to a contract
    counsel-drilldown related contract-001 contract

    # Interactive dashboard
    counsel-drilldown dashboard")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "COUNSEL_DRILLDOWN_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Record source overrides shared by commands that load records
#[derive(Args)]
struct SourceArgs {
    /// Seed for synthetic records (overrides the config file)
    #[arg(long, conflicts_with = "random")]
    seed: Option<u64>,

    /// Draw synthetic records from OS entropy instead of a seed
    #[arg(long)]
    random: bool,

    /// JSON file of records per category, used instead of synthetic data
    #[arg(long)]
    fixtures: Option<PathBuf>,
}

impl SourceArgs {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(seed) = self.seed {
            config.drilldown.seed = Some(seed);
        }
        if self.random {
            config.drilldown.seed = None;
        }
        if let Some(path) = &self.fixtures {
            config.drilldown.fixtures = Some(path.clone());
        }
    }
}

/// Arguments for the `open` subcommand
#[derive(Args)]
struct OpenArgs {
    /// Category tag (contracts, matters, tasks, risks, compliance)
    category: String,

    /// Drill-down title (defaults to the category name)
    #[arg(long)]
    title: Option<String>,

    /// Module label (defaults to the category's module)
    #[arg(long)]
    module: Option<String>,

    /// Exact-match filter `key=value`; repeat to narrow further
    #[arg(short, long = "filter", value_name = "KEY=VALUE")]
    filters: Vec<String>,

    /// Show relationships for this record id
    #[arg(long, value_name = "ITEM_ID")]
    select: Option<String>,

    /// Output format (auto detects TTY: tui if interactive, table otherwise)
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 if the drill-down has no records
    #[arg(long)]
    fail_on_empty: bool,

    #[command(flatten)]
    source: SourceArgs,
}

/// Arguments for the `related` subcommand
#[derive(Args)]
struct RelatedArgs {
    /// Source record id, e.g. contract-001
    item_id: String,

    /// Source record type (singular or plural)
    item_type: String,

    /// Only items linked with this relationship
    #[arg(long, value_enum)]
    kind: Option<RelationshipKind>,

    /// Only items owned by this module
    #[arg(long)]
    module: Option<String>,

    /// Case-insensitive search over title and module
    #[arg(long)]
    search: Option<String>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Exit with code 1 if nothing is related
    #[arg(long)]
    fail_on_empty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Open one drill-down and render it
    Open(OpenArgs),

    /// List known categories with record and column counts
    Categories {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the column schema of a category
    Columns {
        category: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List items related to a record
    Related(RelatedArgs),

    /// Run the interactive dashboard
    Dashboard {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .counsel-drilldown.yaml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}

/// Effective configuration: config file (or defaults) plus global flags.
fn load_config(cli: &Cli) -> AppConfig {
    let (mut config, loaded_from) = config::load_or_default(cli.config.as_deref());
    if let Some(path) = loaded_from {
        tracing::debug!("loaded config from {}", path.display());
    }
    config.output.no_color |= cli.no_color;
    config
}

fn validated(config: AppConfig) -> Result<AppConfig> {
    config.ensure_valid()?;
    Ok(config)
}

fn run(cli: Cli) -> Result<i32> {
    match &cli.command {
        Commands::Open(args) => {
            let mut app = load_config(&cli);
            args.source.apply(&mut app);
            if let Some(format) = args.output {
                app.output.format = format;
            }
            if args.output_file.is_some() {
                app.output.file.clone_from(&args.output_file);
            }
            cli::run_open(cli::OpenConfig {
                category: args.category.clone(),
                title: args.title.clone(),
                module: args.module.clone(),
                filters: args.filters.clone(),
                select: args.select.clone(),
                fail_on_empty: args.fail_on_empty,
                quiet: cli.quiet,
                app: validated(app)?,
            })
        }

        Commands::Categories { json, source } => {
            let mut app = load_config(&cli);
            source.apply(&mut app);
            cli::run_categories(&validated(app)?, *json)
        }

        Commands::Columns { category, json } => cli::run_columns(category, *json),

        Commands::Related(args) => cli::run_related(
            &cli::RelatedQuery {
                item_id: args.item_id.clone(),
                item_type: args.item_type.clone(),
                kind: args.kind,
                module: args.module.clone(),
                search: args.search.clone(),
            },
            args.json,
            args.fail_on_empty,
        ),

        Commands::Dashboard { source } => {
            let mut app = load_config(&cli);
            source.apply(&mut app);
            cli::run_dashboard(&validated(app)?)
        }

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "counsel-drilldown", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema()?;
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
                match &loaded_from {
                    Some(path) => eprintln!("# Loaded from: {}", path.display()),
                    None => eprintln!("# No config file found; showing defaults"),
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                for path in config::file::search_dirs() {
                    eprintln!("  {}", path.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in config::file::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".counsel-drilldown.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                std::fs::write(&target, config::generate_example_config())
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}
