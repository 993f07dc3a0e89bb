//! Gourmet CLI - Terminal front-end for the gourmet ordering session.
//!
//! # Usage
//!
//! ```bash
//! # Start an interactive ordering session (default)
//! gourmet shell
//!
//! # List the catalog, optionally filtered
//! gourmet catalog --category meats --search filete
//!
//! # Same, as JSON, using a custom catalog file
//! gourmet --catalog products.yaml catalog --format json
//! ```
//!
//! # Commands
//!
//! - `shell` - Interactive session: browse, fill the cart, check out, post
//!   messages, pick calendar dates and change settings
//! - `catalog` - Print the (filtered) catalog and exit

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gourmet_core::CategoryFilter;
use gourmet_storefront::{LogFormat, SessionConfig};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "gourmet")]
#[command(author, version, about = "Gourmet Orders terminal front-end")]
struct Cli {
    /// YAML product list replacing the built-in catalog
    #[arg(long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Emit logs as JSON (overrides `GOURMET_LOG_FORMAT`)
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive ordering session
    Shell,
    /// Print the catalog
    Catalog {
        /// Category to show (`all` or a category name)
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,

        /// Case-insensitive product name filter
        #[arg(short, long, default_value = "")]
        search: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for `catalog`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

fn init_tracing(format: LogFormat) {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "gourmet_cli=info,gourmet_storefront=info".into());

    let is_json = format == LogFormat::Json;
    let json_layer = is_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!is_json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let config = SessionConfig::from_env();
    let log_format = match (&config, cli.json_logs) {
        (_, true) => LogFormat::Json,
        (Ok(config), false) => config.log_format,
        (Err(_), false) => LogFormat::Pretty,
    };
    init_tracing(log_format);

    let result = config
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
        .and_then(|config| run(cli, config));

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: SessionConfig) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = commands::load_catalog(cli.catalog.as_deref())?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => commands::shell::run(catalog, config.settings)?,
        Commands::Catalog {
            category,
            search,
            format,
        } => commands::catalog::list(&catalog, category, &search, format)?,
    }
    Ok(())
}
