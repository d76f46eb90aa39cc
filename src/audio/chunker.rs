//! Splitting recordings into fixed-duration segments for inference.

/// A segment of audio with its offset into the recording.
#[derive(Debug, Clone)]
pub struct AudioSegment {
    /// Audio samples for this segment.
    pub samples: Vec<f32>,
    /// Offset of the segment start in seconds.
    pub start_time: f32,
}

/// Split audio into consecutive segments of `chunk_duration` seconds.
///
/// The final partial segment is zero-padded to the full segment length.
/// Empty input yields no segments.
pub fn segment_audio(samples: &[f32], sample_rate: u32, chunk_duration: f32) -> Vec<AudioSegment> {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let segment_len = (chunk_duration * sample_rate as f32) as usize;
    if segment_len == 0 {
        return Vec::new();
    }

    let mut segments = Vec::with_capacity(samples.len().div_ceil(segment_len));

    for (index, window) in samples.chunks(segment_len).enumerate() {
        let mut segment = window.to_vec();
        segment.resize(segment_len, 0.0);

        #[allow(clippy::cast_precision_loss)]
        let start_time = (index * segment_len) as f32 / sample_rate as f32;

        segments.push(AudioSegment {
            samples: segment,
            start_time,
        });
    }

    segments
}
