//! Per-request correlation identifiers.
//!
//! Identifiers are timestamp-derived (`YYYYMMDDHHMMSS-` plus a three-digit
//! millisecond suffix). They are unique enough for log correlation but make
//! no global-uniqueness guarantee; two requests landing in the same
//! millisecond share an id.

use chrono::Utc;

/// Generate a correlation id for one in-flight request.
pub fn generate() -> String {
    let now = Utc::now();
    format!(
        "{}-{:03}",
        now.format("%Y%m%d%H%M%S"),
        now.timestamp_subsec_millis() % 1000
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_has_timestamp_and_millisecond_parts() {
        let id = generate();
        let (stamp, millis) = id.split_once('-').expect("id must contain a hyphen");
        assert_eq!(stamp.len(), 14);
        assert!(stamp.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(millis.len(), 3);
        assert!(millis.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn stamp_starts_with_current_year() {
        let id = generate();
        let year = Utc::now().format("%Y").to_string();
        assert!(id.starts_with(&year));
    }
}
