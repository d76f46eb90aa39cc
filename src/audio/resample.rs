//! Audio resampling using rubato.

use crate::error::{Error, Result};
use audioadapter_buffers::direct::SequentialSlice;
use rubato::{Fft, FixedSync, Resampler};

const BLOCK_SIZE: usize = 1024;

/// Resample mono audio to the target sample rate.
///
/// Returns the input unchanged if already at the target rate. Recorders
/// occasionally deliver 250 kHz or 500 kHz files; the model expects one
/// fixed rate.
pub fn resample(samples: Vec<f32>, from_rate: u32, to_rate: u32) -> Result<Vec<f32>> {
    if from_rate == to_rate {
        return Ok(samples);
    }

    let channels = 1;
    let mut resampler = Fft::<f32>::new(
        from_rate as usize,
        to_rate as usize,
        BLOCK_SIZE,
        1,
        channels,
        FixedSync::Both,
    )
    .map_err(|e| Error::Resample {
        reason: e.to_string(),
    })?;

    let block_frames = resampler.input_frames_next();
    let mut output = Vec::with_capacity(scaled_len(samples.len(), from_rate, to_rate) + BLOCK_SIZE);

    let mut pos = 0;
    while pos + block_frames <= samples.len() {
        let block = &samples[pos..pos + block_frames];
        let input = SequentialSlice::new(block, channels, block_frames).map_err(|e| {
            Error::Resample {
                reason: format!("failed to wrap input block: {e}"),
            }
        })?;

        let resampled = resampler
            .process(&input, 0, None)
            .map_err(|e| Error::Resample {
                reason: e.to_string(),
            })?;

        output.extend_from_slice(&resampled.take_data());
        pos += block_frames;
    }

    // Pad the tail out to a full block, then keep only the frames that
    // correspond to real input.
    if pos < samples.len() {
        let remaining = samples.len() - pos;
        let mut tail = samples[pos..].to_vec();
        tail.resize(block_frames, 0.0);

        let input = SequentialSlice::new(&tail, channels, block_frames).map_err(|e| {
            Error::Resample {
                reason: format!("failed to wrap input block: {e}"),
            }
        })?;

        let resampled = resampler
            .process(&input, 0, None)
            .map_err(|e| Error::Resample {
                reason: e.to_string(),
            })?;

        let wanted = scaled_len(remaining, from_rate, to_rate);
        let data = resampled.take_data();
        let take = wanted.min(data.len());
        output.extend_from_slice(&data[..take]);
    }

    Ok(output)
}

/// Frame count after rate conversion, rounded up.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn scaled_len(frames: usize, from_rate: u32, to_rate: u32) -> usize {
    (frames as f64 * f64::from(to_rate) / f64::from(from_rate)).ceil() as usize
}
