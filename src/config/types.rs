//! Configuration type definitions.

use crate::constants::{
    DEFAULT_CHUNK_SIZE, DEFAULT_DETECTION_THRESHOLD, DEFAULT_MIN_FREQ_HZ,
    DEFAULT_TARGET_SAMPLE_RATE,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Model settings.
    #[serde(default)]
    pub model: ModelConfig,

    /// Detector defaults.
    #[serde(default)]
    pub detector: DetectorDefaults,
}

/// Model file locations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Path to the ONNX model file.
    pub path: Option<PathBuf>,

    /// Path to the class labels file.
    pub labels: Option<PathBuf>,
}

/// Default detector settings, overridable from the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorDefaults {
    /// Detection threshold applied to per-class probabilities.
    pub detection_threshold: f32,

    /// Duration of audio segments fed to the model, in seconds.
    pub chunk_size: f32,

    /// Sample rate the model expects, in Hz.
    pub target_sample_rate: u32,

    /// Low-frequency cutoff in Hz.
    pub min_freq_hz: u32,
}

impl Default for DetectorDefaults {
    fn default() -> Self {
        Self {
            detection_threshold: DEFAULT_DETECTION_THRESHOLD,
            chunk_size: DEFAULT_CHUNK_SIZE,
            target_sample_rate: DEFAULT_TARGET_SAMPLE_RATE,
            min_freq_hz: DEFAULT_MIN_FREQ_HZ,
        }
    }
}
