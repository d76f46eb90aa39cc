//! CSV report writer.

use crate::constants::{DURATION_DECIMAL_PLACES, probability::DECIMAL_PLACES};
use crate::error::{Error, Result};
use crate::output::ReportRow;
use crate::species;
use crate::utils::timestamp::format_timestamp;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Writes the survey report incrementally.
///
/// The header goes out before any file is processed; each row is flushed
/// as soon as it is written so a partial report survives an aborted run.
pub struct ReportWriter {
    writer: csv::Writer<File>,
    path: PathBuf,
}

impl ReportWriter {
    /// Create the report file, truncating any existing one.
    pub fn create(path: &Path) -> Result<Self> {
        let writer = csv::Writer::from_path(path).map_err(|e| Error::ReportWrite {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(Self {
            writer,
            path: path.to_path_buf(),
        })
    }

    /// Write the fixed 19-field header.
    pub fn write_header(&mut self) -> Result<()> {
        self.writer
            .write_record(species::report_header())
            .map_err(|e| self.write_error(e))?;
        self.flush()
    }

    /// Append one row and flush it to disk.
    pub fn write_row(&mut self, row: &ReportRow) -> Result<()> {
        let mut record = Vec::with_capacity(3 + species::SPECIES_COUNT);
        record.push(row.filename.clone());
        record.push(format_timestamp(row.timestamp));
        record.push(format!("{:.*}", DURATION_DECIMAL_PLACES, row.duration));
        for probability in &row.probabilities {
            record.push(format!("{probability:.DECIMAL_PLACES$}"));
        }

        self.writer
            .write_record(&record)
            .map_err(|e| self.write_error(e))?;
        self.flush()
    }

    /// Flush any buffered output.
    pub fn finalize(&mut self) -> Result<()> {
        self.flush()
    }

    fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| self.write_error(csv::Error::from(e)))
    }

    fn write_error(&self, source: csv::Error) -> Error {
        Error::ReportWrite {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_header_is_nineteen_fields_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");

        let mut writer = ReportWriter::create(&path).unwrap();
        writer.write_header().unwrap();
        writer.finalize().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let header: Vec<&str> = contents.lines().next().unwrap().split(',').collect();
        assert_eq!(header.len(), 19);
        assert_eq!(header[0], "filename");
        assert_eq!(header[3], "Barbastellus barbastellus");
        assert_eq!(header[18], "Rhinolophus hipposideros");
    }

    #[test]
    fn test_row_values_and_empty_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");

        let mut row = ReportRow::new("calls.wav".to_string(), None, 12.5);
        row.record("Eptesicus serotinus", 0.8125);

        let mut writer = ReportWriter::create(&path).unwrap();
        writer.write_header().unwrap();
        writer.write_row(&row).unwrap();
        writer.finalize().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let data: Vec<&str> = contents.lines().nth(1).unwrap().split(',').collect();
        assert_eq!(data[0], "calls.wav");
        assert_eq!(data[1], "");
        assert_eq!(data[2], "12.50");
        // Eptesicus serotinus is the second species column
        assert_eq!(data[4], "0.8125");
        // Everything else defaults to zero
        assert_eq!(data[3], "0.0000");
        assert_eq!(data[18], "0.0000");
    }

    #[test]
    fn test_timestamp_rendered_in_report_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");

        let row = ReportRow::new(
            "SITE1_20230615_230045.wav".to_string(),
            crate::utils::timestamp::timestamp_from_filename("SITE1_20230615_230045.wav"),
            5.0,
        );

        let mut writer = ReportWriter::create(&path).unwrap();
        writer.write_header().unwrap();
        writer.write_row(&row).unwrap();
        writer.finalize().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("2023-06-15 23:00:45"));
    }

    #[test]
    fn test_create_in_missing_directory_is_error() {
        let result = ReportWriter::create(Path::new("/no/such/dir/report.csv"));
        assert!(result.is_err());
    }
}
