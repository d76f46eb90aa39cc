//! Batscan - bat call detection and acoustic survey reporting.
//!
//! This crate batch-processes directories of full-spectrum recordings
//! through an ONNX bat call detection model and aggregates the results
//! into a single CSV survey report.

#![warn(missing_docs)]

pub mod audio;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod inference;
pub mod output;
pub mod pipeline;
pub mod species;
pub mod utils;

use clap::Parser;
use cli::{Cli, Command, ConfigAction};
use config::{Config, config_file_path, load_default_config, save_default_config};
use inference::{DetectorConfig, OnnxDetector};
use output::ReportWriter;
use pipeline::{collect_audio_files, run_batch};
use std::path::PathBuf;
use tracing::info;

pub use error::{Error, Result};

/// Main entry point for the batscan CLI.
pub fn run() -> Result<()> {
    let mut cli = Cli::parse();

    init_logging(cli.run.verbose, cli.run.quiet);

    let config = load_default_config()?;

    if let Some(command) = cli.command.take() {
        return handle_command(command, &config);
    }

    survey(&cli, &config)
}

/// Run a survey over the input directory and write the report.
fn survey(cli: &Cli, config: &Config) -> Result<()> {
    use std::time::Instant;

    let start = Instant::now();

    let detector_config = resolve_detector_config(cli, config);
    let (model_path, labels_path) = resolve_model_paths(cli, config)?;

    let files = collect_audio_files(&cli.directory)?;
    if files.is_empty() {
        return Err(Error::NoValidAudioFiles {
            path: cli.directory.clone(),
        });
    }

    info!(
        "Found {} audio file(s) in {}",
        files.len(),
        cli.directory.display()
    );
    info!(
        "Detector: threshold {:.2}, chunk {:.1}s, {} Hz, min freq {} Hz",
        detector_config.detection_threshold,
        detector_config.chunk_size,
        detector_config.target_sample_rate,
        detector_config.min_freq_hz
    );

    let mut detector = OnnxDetector::from_paths(&model_path, &labels_path, detector_config)?;
    let mut writer = ReportWriter::create(&cli.output)?;

    let progress_enabled = !cli.run.quiet && !cli.run.no_progress;
    let summary = run_batch(&mut detector, &files, &mut writer, progress_enabled)?;

    info!(
        "Processing complete: {} of {} file(s) had detections, report written to {} in {:.2}s",
        summary.rows_written,
        summary.files_processed,
        cli.output.display(),
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Merge CLI arguments over config file values over built-in defaults.
fn resolve_detector_config(cli: &Cli, config: &Config) -> DetectorConfig {
    let defaults = &config.detector;
    DetectorConfig {
        detection_threshold: cli.threshold.unwrap_or(defaults.detection_threshold),
        chunk_size: cli.run.chunk_size.unwrap_or(defaults.chunk_size),
        target_sample_rate: cli.run.sample_rate.unwrap_or(defaults.target_sample_rate),
        min_freq_hz: cli.run.min_freq.unwrap_or(defaults.min_freq_hz),
    }
}

/// Resolve model and labels paths from CLI arguments or config.
fn resolve_model_paths(cli: &Cli, config: &Config) -> Result<(PathBuf, PathBuf)> {
    let model_path = cli
        .run
        .model_path
        .clone()
        .or_else(|| config.model.path.clone())
        .ok_or(Error::ModelNotConfigured)?;

    let labels_path = cli
        .run
        .labels_path
        .clone()
        .or_else(|| config.model.labels.clone())
        .ok_or(Error::ModelNotConfigured)?;

    Ok((model_path, labels_path))
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    // ONNX Runtime logging is noisy at info level; keep it off unless
    // explicitly traced.
    let filter_str = if quiet {
        "warn,ort=off"
    } else {
        match verbose {
            0 => "info,ort=off",
            1 => "debug,ort=warn",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).init();
}

#[allow(clippy::print_stdout)]
fn handle_command(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Config { action } => match action {
            ConfigAction::Init => {
                let path = config_file_path()?;
                if path.exists() {
                    println!("Configuration file already exists: {}", path.display());
                } else {
                    let saved_path = save_default_config(&Config::default())?;
                    println!("Created configuration file: {}", saved_path.display());
                    println!("\nNext step: set model.path and model.labels, then run:");
                    println!("  batscan <directory> <output.csv> <threshold>");
                }
                Ok(())
            }
            ConfigAction::Show => {
                println!("{config:#?}");
                Ok(())
            }
            ConfigAction::Path => {
                let path = config_file_path()?;
                println!("{}", path.display());
                Ok(())
            }
        },
    }
}
