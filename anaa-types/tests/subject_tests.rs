use anaa_types::{Error, SubjectId, SubjectRecord, SubjectStatus, TagId};
use serde_json::json;
use std::str::FromStr;

// ── SubjectId ───────────────────────────────────────────────────

#[test]
fn subject_id_from_json_number() {
    assert_eq!(SubjectId::from_json(&json!(7)), Some(SubjectId::Number(7)));
}

#[test]
fn subject_id_from_json_whole_float() {
    assert_eq!(SubjectId::from_json(&json!(12.0)), Some(SubjectId::Number(12)));
}

#[test]
fn subject_id_from_json_string() {
    assert_eq!(
        SubjectId::from_json(&json!("F-42")),
        Some(SubjectId::Text("F-42".to_string()))
    );
}

#[test]
fn subject_id_string_is_kept_verbatim() {
    for raw in [" F1 ", "   ", "f-1\t"] {
        assert_eq!(
            SubjectId::from_json(&json!(raw)),
            Some(SubjectId::Text(raw.to_string()))
        );
    }
}

#[test]
fn subject_id_rejects_unusable_values() {
    for value in [
        json!(0),
        json!(""),
        json!(null),
        json!(true),
        json!(1.5),
        json!([1]),
        json!({"id": 1}),
    ] {
        assert_eq!(SubjectId::from_json(&value), None, "accepted {value}");
    }
}

#[test]
fn subject_id_serializes_in_original_type() {
    assert_eq!(serde_json::to_value(SubjectId::Number(7)).unwrap(), json!(7));
    assert_eq!(
        serde_json::to_value(SubjectId::Text("a1".into())).unwrap(),
        json!("a1")
    );
}

#[test]
fn subject_id_display() {
    assert_eq!(SubjectId::from(7).to_string(), "7");
    assert_eq!(SubjectId::Text("abc".into()).to_string(), "abc");
}

// ── SubjectRecord ───────────────────────────────────────────────

#[test]
fn subject_record_display_name() {
    let record = SubjectRecord {
        id: SubjectId::Number(7),
        first_name: "Jo".into(),
        last_name: "Ann".into(),
        department: "IT".into(),
        email: "jo@example.com".into(),
        tag: TagId::from("XYZ9"),
    };
    assert_eq!(record.display_name(), "Jo Ann");
}

// ── SubjectStatus ───────────────────────────────────────────────

#[test]
fn subject_status_serializes_capitalized() {
    assert_eq!(
        serde_json::to_value(SubjectStatus::Active).unwrap(),
        json!("Active")
    );
    assert_eq!(
        serde_json::to_value(SubjectStatus::Offline).unwrap(),
        json!("Offline")
    );
}

#[test]
fn subject_status_from_str() {
    assert_eq!(SubjectStatus::from_str("Busy").unwrap(), SubjectStatus::Busy);
    assert_eq!(SubjectStatus::Active.to_string(), "Active");
}

#[test]
fn subject_status_from_str_rejects_unknown() {
    let err = SubjectStatus::from_str("active").unwrap_err();
    assert!(matches!(err, Error::InvalidStatus(ref s) if s == "active"));
    assert!(format!("{err}").contains("invalid subject status"));
}
