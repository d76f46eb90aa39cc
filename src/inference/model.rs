//! ONNX session wrapper for bat call classification models.

use crate::error::{Error, Result};
use ort::session::Session;
use ort::value::Tensor;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// A loaded classification model together with its class labels.
///
/// The model is treated as opaque: it consumes a fixed-length mono
/// waveform and emits one probability per class. Class order matches the
/// labels file (one scientific name per line, blank lines ignored).
pub struct BatModel {
    session: Session,
    labels: Vec<String>,
}

impl BatModel {
    /// Load a model and its labels file.
    pub fn load(model_path: &Path, labels_path: &Path) -> Result<Self> {
        if !model_path.exists() {
            return Err(Error::ModelFileNotFound {
                path: model_path.to_path_buf(),
            });
        }

        let labels = read_labels(labels_path)?;

        let session = Session::builder()
            .and_then(|mut builder| builder.commit_from_file(model_path))
            .map_err(|e| Error::ModelLoad {
                path: model_path.to_path_buf(),
                reason: e.to_string(),
            })?;

        info!(
            "Loaded model: {} ({} classes)",
            model_path.display(),
            labels.len()
        );

        Ok(Self { session, labels })
    }

    /// Class labels in model output order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Run one audio segment through the model.
    ///
    /// Returns one probability per class, aligned with `labels()`.
    pub fn predict(&mut self, samples: &[f32]) -> Result<Vec<f32>> {
        let input = Tensor::from_array((vec![1, samples.len()], samples.to_vec())).map_err(|e| {
            Error::Inference {
                reason: e.to_string(),
            }
        })?;

        let outputs = self
            .session
            .run(ort::inputs![input])
            .map_err(|e| Error::Inference {
                reason: e.to_string(),
            })?;

        let (_, scores) =
            outputs[0]
                .try_extract_tensor::<f32>()
                .map_err(|e| Error::Inference {
                    reason: e.to_string(),
                })?;

        if scores.len() < self.labels.len() {
            return Err(Error::Inference {
                reason: format!(
                    "model emitted {} scores for {} labels",
                    scores.len(),
                    self.labels.len()
                ),
            });
        }

        debug!("segment scored: {} classes", self.labels.len());
        Ok(scores[..self.labels.len()].to_vec())
    }
}

/// Read class labels, one per line, skipping blanks.
fn read_labels(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| Error::LabelsRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut labels = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| Error::LabelsRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let trimmed = line.trim();
        if !trimmed.is_empty() {
            labels.push(trimmed.to_string());
        }
    }

    if labels.is_empty() {
        return Err(Error::LabelsEmpty {
            path: path.to_path_buf(),
        });
    }

    Ok(labels)
}
