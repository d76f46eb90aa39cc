//! Batch processing pipeline.

mod batch;

pub use batch::{BatchSummary, collect_audio_files, run_batch};
