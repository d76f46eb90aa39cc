//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "batscan";

/// Default output filename for the survey report.
pub const DEFAULT_OUTPUT_FILENAME: &str = "output.csv";

/// Default detection threshold applied to per-class probabilities.
pub const DEFAULT_DETECTION_THRESHOLD: f32 = 0.5;

/// Default duration of audio segments fed to the model, in seconds.
pub const DEFAULT_CHUNK_SIZE: f32 = 5.0;

/// Default sample rate the model expects, in Hz.
///
/// Full-spectrum bat recorders sample at 256-500 kHz; 384 kHz is the
/// common rate for UK survey gear.
pub const DEFAULT_TARGET_SAMPLE_RATE: u32 = 384_000;

/// Default low-frequency cutoff in Hz.
///
/// Content below this is not bat vocalisation and is filtered out before
/// inference.
pub const DEFAULT_MIN_FREQ_HZ: u32 = 16_000;

/// Detection probability bounds.
pub mod probability {
    /// Minimum valid probability value.
    pub const MIN: f32 = 0.0;
    /// Maximum valid probability value.
    pub const MAX: f32 = 1.0;
    /// Decimal places for probability formatting in the report.
    pub const DECIMAL_PLACES: usize = 4;
}

/// Decimal places for the duration column in the report.
pub const DURATION_DECIMAL_PLACES: usize = 2;
