//! Report row aggregation.

use crate::inference::FilePrediction;
use crate::species::{self, SPECIES_COUNT};
use crate::utils::timestamp::timestamp_from_filename;
use chrono::NaiveDateTime;
use tracing::debug;

/// One row of the survey report: a recording with its best probability
/// per species.
#[derive(Debug, Clone)]
pub struct ReportRow {
    /// Recording identifier.
    pub filename: String,
    /// Recording start time derived from the filename, when present.
    pub timestamp: Option<NaiveDateTime>,
    /// Recording duration in seconds.
    pub duration: f32,
    /// Best probability per species, aligned with `species::SPECIES`.
    pub probabilities: [f32; SPECIES_COUNT],
}

impl ReportRow {
    /// Create a row with every species column initialised to 0.
    ///
    /// Each row gets its own fresh array; rows never share default state.
    pub fn new(filename: String, timestamp: Option<NaiveDateTime>, duration: f32) -> Self {
        Self {
            filename,
            timestamp,
            duration,
            probabilities: [0.0; SPECIES_COUNT],
        }
    }

    /// Aggregate one file's prediction into a report row.
    ///
    /// Returns `None` for a prediction with no annotations; such files
    /// produce no row at all. Multiple detections of the same species
    /// keep only the best score.
    pub fn from_prediction(prediction: &FilePrediction) -> Option<Self> {
        if prediction.annotations.is_empty() {
            return None;
        }

        let mut row = Self::new(
            prediction.id.clone(),
            timestamp_from_filename(&prediction.id),
            prediction.duration,
        );

        for annotation in &prediction.annotations {
            row.record(&annotation.class, annotation.class_prob);
        }

        Some(row)
    }

    /// Record a detection, keeping the maximum probability seen for the
    /// species. Labels outside the report taxonomy are dropped.
    pub fn record(&mut self, class: &str, probability: f32) {
        if let Some(index) = species::index_of(class) {
            self.probabilities[index] = self.probabilities[index].max(probability);
        } else {
            debug!("dropping detection with unknown class '{class}'");
        }
    }

    /// Probability recorded for a species, if it is a report species.
    pub fn probability(&self, name: &str) -> Option<f32> {
        species::index_of(name).map(|index| self.probabilities[index])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::inference::Annotation;

    fn annotation(class: &str, prob: f32) -> Annotation {
        Annotation {
            class: class.to_string(),
            class_prob: prob,
        }
    }

    #[test]
    fn test_empty_annotations_produce_no_row() {
        let prediction = FilePrediction {
            id: "quiet_night.wav".to_string(),
            duration: 300.0,
            annotations: Vec::new(),
        };
        assert!(ReportRow::from_prediction(&prediction).is_none());
    }

    #[test]
    fn test_repeat_detections_keep_maximum() {
        let prediction = FilePrediction {
            id: "test.wav".to_string(),
            duration: 5.0,
            annotations: vec![
                annotation("Myotis daubentonii", 0.3),
                annotation("Myotis daubentonii", 0.7),
            ],
        };

        let row = ReportRow::from_prediction(&prediction).unwrap();
        assert_eq!(row.probability("Myotis daubentonii"), Some(0.7));
    }

    #[test]
    fn test_absent_species_default_to_zero() {
        let prediction = FilePrediction {
            id: "test.wav".to_string(),
            duration: 5.0,
            annotations: vec![annotation("Nyctalus noctula", 0.9)],
        };

        let row = ReportRow::from_prediction(&prediction).unwrap();
        assert_eq!(row.probability("Nyctalus noctula"), Some(0.9));
        for name in crate::species::SPECIES {
            if name != "Nyctalus noctula" {
                assert_eq!(row.probability(name), Some(0.0), "{name} should be 0");
            }
        }
    }

    #[test]
    fn test_unknown_class_is_dropped() {
        let prediction = FilePrediction {
            id: "test.wav".to_string(),
            duration: 5.0,
            annotations: vec![
                annotation("Felis catus", 0.99),
                annotation("Plecotus auritus", 0.6),
            ],
        };

        let row = ReportRow::from_prediction(&prediction).unwrap();
        assert_eq!(row.probability("Plecotus auritus"), Some(0.6));
        assert_eq!(row.probabilities.iter().filter(|&&p| p > 0.0).count(), 1);
    }

    #[test]
    fn test_timestamp_derived_from_filename() {
        let prediction = FilePrediction {
            id: "SITE1_20230615_230045.wav".to_string(),
            duration: 5.0,
            annotations: vec![annotation("Myotis nattereri", 0.5)],
        };

        let row = ReportRow::from_prediction(&prediction).unwrap();
        let ts = row.timestamp.unwrap();
        assert_eq!(ts.format("%Y-%m-%d %H:%M:%S").to_string(), "2023-06-15 23:00:45");
    }

    #[test]
    fn test_missing_timestamp_is_none() {
        let prediction = FilePrediction {
            id: "nocturnal.wav".to_string(),
            duration: 5.0,
            annotations: vec![annotation("Myotis nattereri", 0.5)],
        };

        let row = ReportRow::from_prediction(&prediction).unwrap();
        assert!(row.timestamp.is_none());
    }

    #[test]
    fn test_rows_do_not_share_default_state() {
        let mut first = ReportRow::new("a.wav".to_string(), None, 1.0);
        first.record("Myotis brandtii", 0.8);
        let second = ReportRow::new("b.wav".to_string(), None, 1.0);
        assert_eq!(second.probability("Myotis brandtii"), Some(0.0));
    }
}
