//! Request validation for the prediction endpoint.
//!
//! Checks run in a fixed order and the first failure wins:
//! 1. all six required fields present (error lists every missing name);
//! 2. the four numeric fields parse as numbers (generic message, no field
//!    named);
//! 3. each numeric field lies inside its closed range (field-specific
//!    message, first violation short-circuits);
//! 4. gender is exactly "Male" or "Female";
//! 5. smoking is exactly "Yes" or "No".

use serde_json::Value;

use crate::error::CoreError;
use crate::request::{Gender, PredictionRequest, SmokingHistory};

/// Required request fields, in the order they are checked and reported.
pub const REQUIRED_FIELDS: &[&str] = &["age", "bmi", "hba1c", "blood_glucose", "gender", "smoking"];

/// Closed ranges for the numeric fields, in check order.
pub const NUMERIC_RANGES: &[(&str, f64, f64)] = &[
    ("age", 1.0, 120.0),
    ("bmi", 1.0, 100.0),
    ("hba1c", 1.0, 20.0),
    ("blood_glucose", 1.0, 1000.0),
];

/// Parse and validate a JSON request body into a [`PredictionRequest`].
pub fn parse_request(body: &Value) -> Result<PredictionRequest, CoreError> {
    let obj = body
        .as_object()
        .ok_or_else(|| CoreError::Validation("Request body must be a JSON object".into()))?;

    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .filter(|name| !obj.contains_key(**name))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(CoreError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let age = parse_number(&obj["age"]);
    let bmi = parse_number(&obj["bmi"]);
    let hba1c = parse_number(&obj["hba1c"]);
    let blood_glucose = parse_number(&obj["blood_glucose"]);
    let (Some(age), Some(bmi), Some(hba1c), Some(blood_glucose)) = (age, bmi, hba1c, blood_glucose)
    else {
        return Err(CoreError::Validation(
            "Invalid numeric values provided".into(),
        ));
    };

    for &(name, min, max) in NUMERIC_RANGES {
        let value = match name {
            "age" => age,
            "bmi" => bmi,
            "hba1c" => hba1c,
            _ => blood_glucose,
        };
        if !(min..=max).contains(&value) {
            return Err(CoreError::Validation(format!(
                "{name} must be between {min} and {max}"
            )));
        }
    }

    let gender = match obj["gender"].as_str() {
        Some("Male") => Gender::Male,
        Some("Female") => Gender::Female,
        _ => {
            return Err(CoreError::Validation(
                "gender must be 'Male' or 'Female'".into(),
            ))
        }
    };

    let smoking = match obj["smoking"].as_str() {
        Some("Yes") => SmokingHistory::Yes,
        Some("No") => SmokingHistory::No,
        _ => return Err(CoreError::Validation("smoking must be 'Yes' or 'No'".into())),
    };

    Ok(PredictionRequest {
        age,
        bmi,
        hba1c,
        blood_glucose,
        gender,
        smoking,
    })
}

/// Extract a float from a JSON value, accepting numbers and numeric strings
/// (the upstream clients send both).
fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({
            "age": 45,
            "bmi": 27.5,
            "hba1c": 6.1,
            "blood_glucose": 130,
            "gender": "Female",
            "smoking": "No",
        })
    }

    #[test]
    fn accepts_a_fully_valid_body() {
        let req = parse_request(&valid_body()).unwrap();
        assert_eq!(req.age, 45.0);
        assert_eq!(req.bmi, 27.5);
        assert_eq!(req.gender, Gender::Female);
        assert_eq!(req.smoking, SmokingHistory::No);
    }

    #[test]
    fn accepts_numeric_strings() {
        let mut body = valid_body();
        body["age"] = json!("45");
        body["blood_glucose"] = json!(" 130.5 ");
        let req = parse_request(&body).unwrap();
        assert_eq!(req.age, 45.0);
        assert_eq!(req.blood_glucose, 130.5);
    }

    #[test]
    fn rejects_non_object_bodies() {
        assert_matches!(parse_request(&json!([1, 2])), Err(CoreError::Validation(_)));
        assert_matches!(parse_request(&json!("text")), Err(CoreError::Validation(_)));
    }

    #[test]
    fn missing_fields_are_listed_by_name() {
        let mut body = valid_body();
        body.as_object_mut().unwrap().remove("bmi");
        body.as_object_mut().unwrap().remove("smoking");
        let err = parse_request(&body).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Missing required fields"));
        assert!(msg.contains("bmi"));
        assert!(msg.contains("smoking"));
        assert!(!msg.contains("age"));
    }

    #[test]
    fn unparseable_numbers_get_a_generic_message() {
        let mut body = valid_body();
        body["bmi"] = json!("heavy");
        let err = parse_request(&body).unwrap_err();
        assert_eq!(err.to_string(), "Invalid numeric values provided");

        let mut body = valid_body();
        body["age"] = json!(null);
        let err = parse_request(&body).unwrap_err();
        assert_eq!(err.to_string(), "Invalid numeric values provided");
    }

    #[test]
    fn range_bounds_are_inclusive() {
        for &(name, min, max) in NUMERIC_RANGES {
            let mut body = valid_body();
            body[name] = json!(min);
            assert!(parse_request(&body).is_ok(), "{name} at min must pass");
            body[name] = json!(max);
            assert!(parse_request(&body).is_ok(), "{name} at max must pass");
        }
    }

    #[test]
    fn out_of_range_values_name_the_field() {
        let cases = [
            ("age", 0.0),
            ("age", 121.0),
            ("bmi", 0.0),
            ("hba1c", 21.0),
            ("blood_glucose", 1001.0),
        ];
        for (name, value) in cases {
            let mut body = valid_body();
            body[name] = json!(value);
            let err = parse_request(&body).unwrap_err();
            assert!(
                err.to_string().starts_with(name),
                "expected message for {name}={value} to name the field, got: {err}"
            );
        }
    }

    #[test]
    fn first_out_of_range_field_short_circuits() {
        let mut body = valid_body();
        body["age"] = json!(0);
        body["bmi"] = json!(0);
        let err = parse_request(&body).unwrap_err();
        assert!(err.to_string().starts_with("age"));
    }

    #[test]
    fn rejects_unknown_gender_and_smoking_values() {
        let mut body = valid_body();
        body["gender"] = json!("Other");
        assert_matches!(parse_request(&body), Err(CoreError::Validation(_)));

        let mut body = valid_body();
        body["smoking"] = json!("Maybe");
        assert_matches!(parse_request(&body), Err(CoreError::Validation(_)));

        // Case matters.
        let mut body = valid_body();
        body["gender"] = json!("male");
        assert_matches!(parse_request(&body), Err(CoreError::Validation(_)));
    }
}
