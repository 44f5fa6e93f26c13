//! Validated prediction request types.

use serde::{Deserialize, Serialize};

/// Patient gender as accepted by the prediction endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// One-hot indicator for the `gender_Male` training column.
    pub fn male_indicator(&self) -> f64 {
        match self {
            Gender::Male => 1.0,
            Gender::Female => 0.0,
        }
    }
}

/// Smoking history as accepted by the prediction endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SmokingHistory {
    Yes,
    No,
}

impl SmokingHistory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SmokingHistory::Yes => "Yes",
            SmokingHistory::No => "No",
        }
    }

    /// One-hot indicator for the `smoking_history_Yes` training column.
    pub fn yes_indicator(&self) -> f64 {
        match self {
            SmokingHistory::Yes => 1.0,
            SmokingHistory::No => 0.0,
        }
    }
}

/// A fully validated prediction request.
///
/// Construction goes through [`crate::validation::parse_request`]; every
/// numeric field is inside its documented closed range and the two
/// categorical fields hold one of their two allowed values.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRequest {
    pub age: f64,
    pub bmi: f64,
    pub hba1c: f64,
    pub blood_glucose: f64,
    pub gender: Gender,
    pub smoking: SmokingHistory,
}

/// Binary classification outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredictionLabel {
    Diabetic,
    NonDiabetic,
}

impl PredictionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PredictionLabel::Diabetic => "Diabetic",
            PredictionLabel::NonDiabetic => "Non-Diabetic",
        }
    }
}

impl std::fmt::Display for PredictionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
