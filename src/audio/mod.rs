//! Audio decoding and conditioning.

mod chunker;
mod decode;
mod filter;
mod resample;

pub use chunker::{AudioSegment, segment_audio};
pub use decode::{DecodedAudio, decode_audio_file};
pub use filter::high_pass;
pub use resample::resample;
