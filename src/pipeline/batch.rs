//! Sequential batch driver.

use crate::error::{Error, Result};
use crate::inference::Detector;
use crate::output::{ReportRow, ReportWriter, progress};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of a batch run.
#[derive(Debug)]
pub struct BatchSummary {
    /// Number of recordings processed.
    pub files_processed: usize,
    /// Number of report rows written (recordings with at least one
    /// detection).
    pub rows_written: usize,
}

/// List the audio files directly inside a directory, sorted by name.
///
/// Recorders drop all of a night's files into one flat directory, so no
/// recursive descent happens here.
pub fn collect_audio_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_audio_file(&path) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Check if a file is a supported audio format.
fn is_audio_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| {
        ext.eq_ignore_ascii_case(OsStr::new("wav")) || ext.eq_ignore_ascii_case(OsStr::new("flac"))
    })
}

/// Process every file through the detector and write the report.
///
/// The header goes out before the first file. Files whose prediction has
/// no annotations produce no row. Any per-file failure aborts the run;
/// rows written so far remain on disk.
pub fn run_batch(
    detector: &mut dyn Detector,
    files: &[PathBuf],
    writer: &mut ReportWriter,
    progress_enabled: bool,
) -> Result<BatchSummary> {
    writer.write_header()?;

    let total = files.len();
    let bar = progress::create_file_progress(total, progress_enabled);
    let mut rows_written = 0;

    for (count, file) in (1..).zip(files.iter()) {
        info!("Processing file {count} of {total}: {}", file.display());

        let prediction = detector.process_file(file)?;
        if let Some(row) = ReportRow::from_prediction(&prediction) {
            writer.write_row(&row)?;
            rows_written += 1;
        } else {
            debug!("no detections in {}, skipping row", prediction.id);
        }

        progress::inc_progress(bar.as_ref());
    }

    progress::finish_progress(bar, "Complete");
    writer.finalize()?;

    Ok(BatchSummary {
        files_processed: total,
        rows_written,
    })
}
