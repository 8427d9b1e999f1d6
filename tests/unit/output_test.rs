//! Tests for the Output module
//!
//! Output provides a structured result type that can be rendered as
//! either human-readable text or machine-parseable JSON.

use isbncheck::output::{CheckReport, OutputMode};

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// CheckReport Serialization Tests
// =============================================================================

#[test]
fn check_report_valid_serialization() {
    let report = CheckReport {
        candidate: "0140449116".to_string(),
        valid: true,
    };

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"candidate\":\"0140449116\""));
    assert!(json.contains("\"valid\":true"));
}

#[test]
fn check_report_invalid_serialization() {
    let report = CheckReport {
        candidate: "0140449117".to_string(),
        valid: false,
    };

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"valid\":false"));
}
