//! Configuration management for pos2neoden
//!
//! This module handles CLI argument parsing and application settings.

use anyhow::{anyhow, Context, Result};
use clap::builder::styling;
use clap::{value_parser, Arg, ColorChoice, Command};
use std::path::PathBuf;
use tracing::info;

/// Build the CLI command
pub fn build_cli() -> Command {
    let styles = styling::Styles::styled()
        .header(styling::AnsiColor::Green.on_default() | styling::Effects::BOLD)
        .usage(styling::AnsiColor::Green.on_default() | styling::Effects::BOLD)
        .literal(styling::AnsiColor::Blue.on_default() | styling::Effects::BOLD)
        .placeholder(styling::AnsiColor::Cyan.on_default());

    Command::new("pos2neoden")
        .about("pos2neoden - Convert pick-and-place position files to NEODEN YY1 CSV")
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("input")
                .help("Input position file (.pos/.csv) exported by the PCB CAD tool")
                .value_parser(value_parser!(String))
                .required(true),
        )
        .arg(
            Arg::new("output")
                .help("Output CSV file for the NEODEN YY1 controller")
                .value_parser(value_parser!(String))
                .required(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no_progress")
                .long("no-progress")
                .help("Disable progress indicators")
                .action(clap::ArgAction::SetTrue),
        )
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Input position file path
    pub input: PathBuf,

    /// Output CSV file path
    pub output: PathBuf,

    /// Enable verbose logging
    pub verbose: bool,

    /// Disable progress bars
    pub no_progress: bool,
}

impl Config {
    /// Parse arguments and apply initial configuration
    pub fn from_args() -> Result<Self> {
        let matches = build_cli().get_matches();

        let input = matches
            .get_one::<String>("input")
            .ok_or_else(|| anyhow!("Input file path is required"))?
            .to_string();
        let input = PathBuf::from(input);

        let output = matches
            .get_one::<String>("output")
            .ok_or_else(|| anyhow!("Output file path is required"))?
            .to_string();
        let output = PathBuf::from(output);

        let verbose = matches.get_flag("verbose");
        let no_progress = matches.get_flag("no_progress");

        let config = Config {
            input,
            output,
            verbose,
            no_progress,
        };

        // Set up tracing with environment variable support
        // RUST_LOG takes precedence over verbose flag
        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off"));

        tracing_subscriber::fmt().with_env_filter(env_filter).init();

        if config.verbose {
            info!("Configuration: {:?}", config);
        }

        Ok(config)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        // Validate input path exists
        if !self.input.exists() {
            return Err(crate::error::PosConvertError::FileNotFound {
                path: self.input.display().to_string(),
            }
            .into());
        }

        // Create the output file's parent directory if it doesn't exist
        if let Some(parent) = self.output.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory: {}", parent.display())
                })?;
                info!("Created output directory: {}", parent.display());
            }
        }

        info!("Configuration validation completed successfully");
        Ok(())
    }
}
