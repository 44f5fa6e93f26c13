//! Feature vector construction.
//!
//! The classifier was trained on a one-hot encoded frame whose column list
//! ships alongside the model. A request only populates six of those
//! columns; every other training column is zero-filled, and the output
//! order always equals the persisted column order.

use crate::request::PredictionRequest;

/// Training column fed from the `age` field.
pub const COL_AGE: &str = "age";
/// Training column fed from the `bmi` field.
pub const COL_BMI: &str = "bmi";
/// Training column fed from the `hba1c` field.
pub const COL_HBA1C: &str = "HbA1c_level";
/// Training column fed from the `blood_glucose` field.
pub const COL_BLOOD_GLUCOSE: &str = "blood_glucose_level";
/// One-hot column set when gender is Male.
pub const COL_GENDER_MALE: &str = "gender_Male";
/// One-hot column set when smoking history is Yes.
pub const COL_SMOKING_YES: &str = "smoking_history_Yes";

/// Map a validated request onto the training column layout.
///
/// Pure and deterministic: the same request and column list always yield
/// the same vector, with length `columns.len()`.
pub fn build_feature_vector(request: &PredictionRequest, columns: &[String]) -> Vec<f64> {
    columns
        .iter()
        .map(|column| match column.as_str() {
            COL_AGE => request.age,
            COL_BMI => request.bmi,
            COL_HBA1C => request.hba1c,
            COL_BLOOD_GLUCOSE => request.blood_glucose,
            COL_GENDER_MALE => request.gender.male_indicator(),
            COL_SMOKING_YES => request.smoking.yes_indicator(),
            _ => 0.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{Gender, SmokingHistory};

    fn request() -> PredictionRequest {
        PredictionRequest {
            age: 52.0,
            bmi: 31.2,
            hba1c: 7.4,
            blood_glucose: 185.0,
            gender: Gender::Male,
            smoking: SmokingHistory::No,
        }
    }

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn vector_follows_column_order() {
        let cols = columns(&[COL_BLOOD_GLUCOSE, COL_AGE, COL_GENDER_MALE]);
        let vector = build_feature_vector(&request(), &cols);
        assert_eq!(vector, vec![185.0, 52.0, 1.0]);
    }

    #[test]
    fn unknown_columns_are_zero_filled() {
        let cols = columns(&[COL_AGE, "gender_Other", "smoking_history_never", COL_HBA1C]);
        let vector = build_feature_vector(&request(), &cols);
        assert_eq!(vector, vec![52.0, 0.0, 0.0, 7.4]);
    }

    #[test]
    fn vector_length_matches_column_count() {
        let cols = columns(&[COL_AGE, COL_BMI, "extra_a", "extra_b", "extra_c"]);
        assert_eq!(build_feature_vector(&request(), &cols).len(), 5);
    }

    #[test]
    fn construction_is_deterministic() {
        let cols = columns(&[
            COL_AGE,
            COL_BMI,
            COL_HBA1C,
            COL_BLOOD_GLUCOSE,
            COL_GENDER_MALE,
            COL_SMOKING_YES,
        ]);
        let first = build_feature_vector(&request(), &cols);
        let second = build_feature_vector(&request(), &cols);
        assert_eq!(first, second);
    }

    #[test]
    fn indicator_columns_are_binary() {
        let cols = columns(&[COL_GENDER_MALE, COL_SMOKING_YES]);
        for gender in [Gender::Male, Gender::Female] {
            for smoking in [SmokingHistory::Yes, SmokingHistory::No] {
                let req = PredictionRequest {
                    gender,
                    smoking,
                    ..request()
                };
                let vector = build_feature_vector(&req, &cols);
                assert!(vector.iter().all(|v| *v == 0.0 || *v == 1.0));
            }
        }
    }
}
