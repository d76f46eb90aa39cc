//! ONNX-backed bat call detector.

use crate::audio::{decode_audio_file, high_pass, resample, segment_audio};
use crate::error::Result;
use crate::inference::{Annotation, BatModel, Detector, DetectorConfig, FilePrediction};
use std::path::Path;
use tracing::debug;

/// Production detector: decodes a recording, conditions the audio, and
/// runs the classification model over fixed-duration segments.
pub struct OnnxDetector {
    model: BatModel,
    config: DetectorConfig,
}

impl OnnxDetector {
    /// Build a detector from a loaded model.
    pub fn new(model: BatModel, config: DetectorConfig) -> Self {
        Self { model, config }
    }

    /// Build a detector by loading the model and labels from disk.
    pub fn from_paths(
        model_path: &Path,
        labels_path: &Path,
        config: DetectorConfig,
    ) -> Result<Self> {
        Ok(Self::new(BatModel::load(model_path, labels_path)?, config))
    }
}

impl Detector for OnnxDetector {
    fn config(&self) -> &DetectorConfig {
        &self.config
    }

    fn process_file(&mut self, path: &Path) -> Result<FilePrediction> {
        let decoded = decode_audio_file(path)?;
        let duration = decoded.duration_secs;
        debug!(
            "decoded {}: {:.1}s at {} Hz",
            path.display(),
            duration,
            decoded.sample_rate
        );

        let mut samples = resample(
            decoded.samples,
            decoded.sample_rate,
            self.config.target_sample_rate,
        )?;
        high_pass(
            &mut samples,
            self.config.min_freq_hz,
            self.config.target_sample_rate,
        );

        let segments = segment_audio(
            &samples,
            self.config.target_sample_rate,
            self.config.chunk_size,
        );

        let mut annotations = Vec::new();
        for segment in &segments {
            let scores = self.model.predict(&segment.samples)?;
            for (index, &prob) in scores.iter().enumerate() {
                if prob >= self.config.detection_threshold {
                    debug!(
                        "detection at {:.1}s: {} ({prob:.3})",
                        segment.start_time, self.model.labels()[index]
                    );
                    annotations.push(Annotation {
                        class: self.model.labels()[index].clone(),
                        class_prob: prob,
                    });
                }
            }
        }

        let id = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

        Ok(FilePrediction {
            id,
            duration,
            annotations,
        })
    }
}
