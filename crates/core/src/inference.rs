//! Inference service tying the loaded artifacts together.
//!
//! Constructed once at startup from explicit artifacts (no global state)
//! and shared read-only across requests. One prediction is a linear
//! pipeline: align features to the training columns, standardize, classify.

use std::path::Path;

use crate::artifacts::{ArtifactError, Classifier, Columns, Scaler};
use crate::error::CoreError;
use crate::features::build_feature_vector;
use crate::request::{PredictionLabel, PredictionRequest};

/// Outcome of one classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: PredictionLabel,
    /// Probability of the predicted class as a percentage string rounded
    /// to two decimals (e.g. `"97.35%"`). Absent when the classifier has
    /// no probability support.
    pub confidence: Option<String>,
}

/// Immutable classifier + scaler + column schema, validated at construction.
#[derive(Debug, Clone)]
pub struct InferenceService {
    classifier: Classifier,
    scaler: Scaler,
    columns: Columns,
}

impl InferenceService {
    /// Assemble the service, checking that all three artifacts agree on
    /// the feature dimensionality and that the scaler cannot divide by
    /// zero.
    pub fn new(
        classifier: Classifier,
        scaler: Scaler,
        columns: Columns,
    ) -> Result<Self, ArtifactError> {
        let n = columns.len();
        if n == 0 {
            return Err(ArtifactError::Inconsistent(
                "Column list is empty".to_string(),
            ));
        }
        if classifier.coefficients.len() != n {
            return Err(ArtifactError::Inconsistent(format!(
                "Classifier has {} coefficients for {} columns",
                classifier.coefficients.len(),
                n
            )));
        }
        if scaler.mean.len() != n || scaler.scale.len() != n {
            return Err(ArtifactError::Inconsistent(format!(
                "Scaler fitted on {}x{} features for {} columns",
                scaler.mean.len(),
                scaler.scale.len(),
                n
            )));
        }
        if scaler.scale.iter().any(|s| *s == 0.0) {
            return Err(ArtifactError::Inconsistent(
                "Scaler contains a zero scale entry".to_string(),
            ));
        }
        Ok(Self {
            classifier,
            scaler,
            columns,
        })
    }

    /// Load all three artifacts from disk and assemble the service.
    pub fn load(
        model_path: &Path,
        scaler_path: &Path,
        columns_path: &Path,
    ) -> Result<Self, ArtifactError> {
        let classifier = Classifier::load(model_path)?;
        let scaler = Scaler::load(scaler_path)?;
        let columns = Columns::load(columns_path)?;
        Self::new(classifier, scaler, columns)
    }

    /// Number of features the classifier expects.
    pub fn feature_count(&self) -> usize {
        self.columns.len()
    }

    /// Classify one validated request.
    pub fn predict(&self, request: &PredictionRequest) -> Result<Prediction, CoreError> {
        let vector = build_feature_vector(request, self.columns.names());
        let scaled = self
            .scaler
            .transform(&vector)
            .map_err(|e| CoreError::Internal(e.to_string()))?;

        let class = self.classifier.predict(&scaled);
        let label = if class == 1 {
            PredictionLabel::Diabetic
        } else {
            PredictionLabel::NonDiabetic
        };

        let confidence = self
            .classifier
            .predict_proba(&scaled)
            .map(|probs| format!("{:.2}%", probs[class as usize] * 100.0));

        Ok(Prediction { label, confidence })
    }
}
