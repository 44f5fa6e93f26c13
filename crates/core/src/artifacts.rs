//! Serialized model artifacts.
//!
//! Three JSON documents are produced offline by the training pipeline and
//! loaded read-only at startup: the ordered training column list, a fitted
//! standard scaler, and a logistic-regression classifier. The service
//! refuses to start when any of them is missing or internally inconsistent.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Failure while loading or validating an artifact file.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("Failed to read artifact {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse artifact {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Inconsistent artifacts: {0}")]
    Inconsistent(String),
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ArtifactError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Ordered list of feature column names the classifier was trained on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Columns(pub Vec<String>);

impl Columns {
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        read_json(path)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }
}

/// Fitted standard scaler: `transform(x) = (x - mean) / scale` elementwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl Scaler {
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        read_json(path)
    }

    /// Standardize a feature vector.
    ///
    /// The vector length is checked against the fitted dimensions; a
    /// mismatch means the caller aligned against the wrong column list.
    pub fn transform(&self, vector: &[f64]) -> Result<Vec<f64>, ArtifactError> {
        if vector.len() != self.mean.len() {
            return Err(ArtifactError::Inconsistent(format!(
                "Scaler fitted on {} features, got {}",
                self.mean.len(),
                vector.len()
            )));
        }
        Ok(vector
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (m, s))| (x - m) / s)
            .collect())
    }
}

/// Logistic-regression binary classifier.
///
/// `probability` records whether the training run calibrated class
/// probabilities; when false, [`Classifier::predict_proba`] is unavailable
/// and predictions carry no confidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classifier {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default)]
    pub probability: bool,
}

impl Classifier {
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        read_json(path)
    }

    /// Decision value `intercept + w.x` for a scaled feature vector.
    fn decision(&self, scaled: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(scaled)
                .map(|(w, x)| w * x)
                .sum::<f64>()
    }

    /// Predicted class: 1 (diabetic) when the decision value is
    /// non-negative, otherwise 0.
    pub fn predict(&self, scaled: &[f64]) -> u8 {
        if self.decision(scaled) >= 0.0 {
            1
        } else {
            0
        }
    }

    /// Class probabilities `[P(class 0), P(class 1)]`.
    ///
    /// Returns `None` when the model was exported without probability
    /// support or the computation produces a non-finite value; prediction
    /// proceeds without a confidence figure in that case.
    pub fn predict_proba(&self, scaled: &[f64]) -> Option<[f64; 2]> {
        if !self.probability {
            return None;
        }
        let p = sigmoid(self.decision(scaled));
        if !p.is_finite() {
            return None;
        }
        Some([1.0 - p, p])
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
