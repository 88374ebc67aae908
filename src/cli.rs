//! CLI definition and dispatch.

use clap::{Parser, Subcommand, ValueEnum};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::domain::error::ConfigError;
use crate::domain::raw_config::{require_keys, RawConfig};

#[derive(Parser, Debug)]
#[command(name = "kvconf", about = "Inspect key = value config files")]
pub struct Cli {
    /// Diagnostic output level on stderr
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every entry, sorted by key
    Show {
        #[arg(short, long)]
        config: PathBuf,
        /// Key that must be present (repeatable)
        #[arg(short, long = "require")]
        require: Vec<String>,
    },
    /// Print the value of one key
    Get {
        #[arg(short, long)]
        config: PathBuf,
        key: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

pub fn run(cli: Cli) -> ExitCode {
    // A subscriber may already be set when run is called from tests.
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(cli.log_level))
        .with_writer(std::io::stderr)
        .try_init();

    let result = match cli.command {
        Command::Show { config, require } => run_show(&config, &require),
        Command::Get { config, key } => run_get(&config, &key),
    };
    match result {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

pub fn run_show(config_path: &PathBuf, required: &[String]) -> Result<String, ConfigError> {
    tracing::info!(path = %config_path.display(), "loading config");
    let config = crate::read_raw_config(config_path)?;
    require_keys(&config, required)?;
    tracing::debug!(entries = config.len(), "config loaded");
    Ok(render_config(&config))
}

pub fn run_get(config_path: &PathBuf, key: &str) -> Result<String, ConfigError> {
    tracing::info!(path = %config_path.display(), key, "loading config");
    let config = crate::read_raw_config(config_path)?;
    config
        .get(key)
        .map(|value| format!("{value}\n"))
        .ok_or_else(|| ConfigError::MissingKey {
            key: key.to_string(),
        })
}

/// Formats entries as `key = value` lines in key order.
pub fn render_config(config: &RawConfig) -> String {
    let sorted: BTreeMap<_, _> = config.iter().collect();
    sorted
        .into_iter()
        .map(|(key, value)| format!("{key} = {value}\n"))
        .collect()
}
