//! CLI argument definitions.

use crate::constants::{DEFAULT_OUTPUT_FILENAME, probability};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Bat call detection and acoustic survey reporting.
#[derive(Debug, Parser)]
#[command(name = "batscan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory containing recordings to analyze.
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Filename for the CSV report.
    #[arg(default_value = DEFAULT_OUTPUT_FILENAME)]
    pub output: PathBuf,

    /// Detection threshold, a value from 0 to 1.
    #[arg(value_parser = parse_threshold)]
    pub threshold: Option<f32>,

    /// Common options for a survey run.
    #[command(flatten)]
    pub run: RunArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for a survey run.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Path to the ONNX model file (overrides config).
    #[arg(long, env = "BATSCAN_MODEL_PATH")]
    pub model_path: Option<PathBuf>,

    /// Path to the class labels file (overrides config).
    #[arg(long, env = "BATSCAN_LABELS_PATH")]
    pub labels_path: Option<PathBuf>,

    /// Audio segment duration in seconds.
    #[arg(long, value_parser = parse_chunk_size, env = "BATSCAN_CHUNK_SIZE")]
    pub chunk_size: Option<f32>,

    /// Sample rate the model expects, in Hz.
    #[arg(long, env = "BATSCAN_SAMPLE_RATE")]
    pub sample_rate: Option<u32>,

    /// Low-frequency cutoff in Hz.
    #[arg(long, env = "BATSCAN_MIN_FREQ")]
    pub min_freq: Option<u32>,

    /// Suppress progress output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable the progress bar.
    #[arg(long)]
    pub no_progress: bool,
}

/// Parse and validate a threshold value.
fn parse_threshold(s: &str) -> Result<f32, String> {
    let value: f32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !(probability::MIN..=probability::MAX).contains(&value) {
        return Err(format!("threshold must be between 0.0 and 1.0, got {value}"));
    }

    Ok(value)
}

/// Parse and validate a segment duration.
fn parse_chunk_size(s: &str) -> Result<f32, String> {
    let value: f32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if value <= 0.0 || !value.is_finite() {
        return Err(format!("chunk size must be a positive number, got {value}"));
    }

    Ok(value)
}
