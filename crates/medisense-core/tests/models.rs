use medisense_core::models::analysis::{AnalysisResult, AnalysisStatus};
use medisense_core::models::record::{
    AnalysisRecord, DEFAULT_LANGUAGE, new_analysis_id, validate_analysis_id,
};
use medisense_core::s3_keys;

fn sample_result() -> AnalysisResult {
    AnalysisResult {
        symptoms: vec!["Headache".to_string()],
        possible_conditions: vec!["Tension Headache".to_string()],
        recommendations: vec!["Rest".to_string()],
        status: AnalysisStatus::Complete,
        analysis_id: None,
        language: None,
        debug: None,
    }
}

#[test]
fn result_serializes_with_camel_case_names() {
    let json = serde_json::to_value(sample_result()).unwrap();
    assert!(json.get("possibleConditions").is_some());
    assert_eq!(json["status"], "complete");
    assert!(json.get("analysisId").is_none());
    assert!(json.get("debug").is_none());
}

#[test]
fn result_without_status_defaults_to_complete() {
    let json = r#"{"symptoms":["Fever"],"possibleConditions":[],"recommendations":[]}"#;
    let result: AnalysisResult = serde_json::from_str(json).unwrap();
    assert_eq!(result.status, AnalysisStatus::Complete);
}

#[test]
fn analysis_id_has_expected_shape() {
    let now = jiff::Timestamp::from_millisecond(1_700_000_000_123).unwrap();
    let id = new_analysis_id(now);
    assert!(id.starts_with("va_1700000000123_"));
    let suffix = id.rsplit('_').next().unwrap();
    assert_eq!(suffix.len(), 8);
    assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    assert!(validate_analysis_id(&id).is_ok());
}

#[test]
fn analysis_id_rejects_path_characters() {
    assert!(validate_analysis_id("").is_err());
    assert!(validate_analysis_id("../etc/passwd").is_err());
    assert!(validate_analysis_id("va_1/2").is_err());
}

#[test]
fn record_defaults_language() {
    let record = AnalysisRecord::new(
        "user@example.com",
        "va_1_abcdef12".to_string(),
        "I have a fever",
        Some("  "),
        sample_result(),
        jiff::Timestamp::UNIX_EPOCH,
    );
    assert_eq!(record.language, DEFAULT_LANGUAGE);
}

#[test]
fn voice_analysis_key_is_scoped_by_user() {
    let key = s3_keys::voice_analysis("user@example.com", "va_1_abcdef12");
    assert_eq!(key, "voice-analyses/user%40example.com/va_1_abcdef12.json");
    assert!(key.starts_with(&s3_keys::voice_analyses_prefix("user@example.com")));
    assert_eq!(
        s3_keys::voice_analyses_prefix("a/b"),
        "voice-analyses/a%2Fb/"
    );
}

#[test]
fn similar_emails_get_distinct_prefixes() {
    let pairs = [
        ("john+health@gmail.com", "john_health@gmail.com"),
        ("a/b@x.com", "a_b@x.com"),
        ("a%2Fb@x.com", "a/b@x.com"),
        ("ana@example.com", "ana@example.com "),
    ];
    for (a, b) in pairs {
        assert_ne!(
            s3_keys::voice_analyses_prefix(a),
            s3_keys::voice_analyses_prefix(b),
            "{a} vs {b}"
        );
    }
}
