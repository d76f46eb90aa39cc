//! Low-frequency noise suppression.

use std::f32::consts::PI;

/// Biquad high-pass with Butterworth response (Q = 1/sqrt(2)).
///
/// Recordings from field sites carry wind, traffic and insect noise in
/// the audible band; bat vocalisations sit above the cutoff. Coefficients
/// follow the RBJ audio EQ cookbook, state is Direct Form II transposed.
struct HighPassFilter {
    b0: f32,
    b1: f32,
    b2: f32,
    a1: f32,
    a2: f32,
    z1: f32,
    z2: f32,
}

impl HighPassFilter {
    #[allow(clippy::cast_precision_loss)]
    fn new(cutoff_hz: u32, sample_rate: u32) -> Self {
        let w0 = 2.0 * PI * cutoff_hz as f32 / sample_rate as f32;
        let cos_w0 = w0.cos();
        // alpha = sin(w0) / (2 * Q) with Q = 1/sqrt(2)
        let alpha = w0.sin() * std::f32::consts::FRAC_1_SQRT_2;

        let b0 = (1.0 + cos_w0) / 2.0;
        let b1 = -(1.0 + cos_w0);
        let b2 = (1.0 + cos_w0) / 2.0;
        let a0 = 1.0 + alpha;
        let a1 = -2.0 * cos_w0;
        let a2 = 1.0 - alpha;

        Self {
            b0: b0 / a0,
            b1: b1 / a0,
            b2: b2 / a0,
            a1: a1 / a0,
            a2: a2 / a0,
            z1: 0.0,
            z2: 0.0,
        }
    }

    fn process(&mut self, sample: f32) -> f32 {
        let output = self.b0 * sample + self.z1;
        self.z1 = self.b1 * sample + self.z2 - self.a1 * output;
        self.z2 = self.b2 * sample - self.a2 * output;
        output
    }
}

/// Apply a high-pass filter at `cutoff_hz` to the samples in place.
///
/// A cutoff of 0, or one at or above the Nyquist frequency, leaves the
/// samples untouched.
pub fn high_pass(samples: &mut [f32], cutoff_hz: u32, sample_rate: u32) {
    if cutoff_hz == 0 || cutoff_hz * 2 >= sample_rate {
        return;
    }

    let mut filter = HighPassFilter::new(cutoff_hz, sample_rate);
    for sample in samples {
        *sample = filter.process(*sample);
    }
}
