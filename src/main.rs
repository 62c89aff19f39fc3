//! mealdesk - Entry Point

use clap::Parser;
use mealdesk::config::CliOverrides;
use mealdesk::model::DayZone;
use mealdesk::state::SortOrder;
use mealdesk::view::{ColorConfig, LaunchOptions, Theme};
use std::path::PathBuf;
use tracing::{info, warn};

/// mealdesk - browse meal events, menu items and menu sets
#[derive(Parser, Debug)]
#[command(name = "mealdesk")]
#[command(version)]
#[command(about = "Terminal client for a catering coordination service")]
pub struct Args {
    /// Path to a catalog snapshot (JSON). Reads from stdin if not provided
    pub file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Extra cards laid out above and below the visible window
    #[arg(long)]
    pub overscan: Option<usize>,

    /// Start with search query active
    #[arg(short, long)]
    pub search: Option<String>,

    /// Initial meal event order: date-asc, date-desc, name-asc, name-desc
    #[arg(long)]
    pub sort: Option<SortOrder>,

    /// Hide meal events whose day has passed
    #[arg(long)]
    pub hide_past: bool,

    /// Calendar used for "today": local, utc or an offset like +10:00
    #[arg(long)]
    pub day_zone: Option<DayZone>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            overscan: self.overscan,
            sort: self.sort,
            // only an explicit flag overrides the config file
            hide_past: self.hide_past.then_some(true),
            day_zone: self.day_zone,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let (config, env_warnings) = {
        let config_file = mealdesk::config::load_config_with_precedence(args.config.clone())?;
        let merged = mealdesk::config::merge_config(config_file);
        let (with_env, warnings) = mealdesk::config::apply_env_overrides(merged);
        (mealdesk::config::apply_cli_overrides(with_env, &args.overrides()), warnings)
    };

    // flushes buffered log lines when main returns
    let _log_guard = mealdesk::logging::init(&config.log_file_path)?;

    for warning in &env_warnings {
        warn!(var = warning.var, value = %warning.value, "{warning}");
    }
    info!(config = ?config, "Configuration loaded and resolved");

    let input_source = mealdesk::source::detect_input_source(args.file.clone())?;

    let options = LaunchOptions {
        settings: config.list_settings(),
        theme: Theme::new(ColorConfig::from_env_and_args(args.no_color)),
        initial_search: args.search.clone(),
    };

    mealdesk::view::run_with_source(input_source, options)?;

    Ok(())
}
