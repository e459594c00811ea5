use medisense_bedrock::error::BedrockError;
use medisense_bedrock::prompt::{MAX_REPORT_CHARS, build_report_message};
use medisense_bedrock::report::{DEFAULT_DISCLAIMER, parse_report_analysis, strip_code_fence};
use medisense_core::models::report::{FindingStatus, ReportSource};

const FULL_REPLY: &str = r#"{
  "summary": "Cholesterol is mildly elevated; other markers are within range.",
  "findings": [
    {"label": "LDL", "value": "130 mg/dL", "status": "attention", "note": "borderline high"},
    {"label": "HDL", "value": "45 mg/dL", "status": "normal"}
  ],
  "symptoms": ["Usually none"],
  "prevention": ["Reduce saturated fat"],
  "futureSuggestions": ["Repeat lipid panel in 6 months"],
  "recommendations": ["Discuss statin therapy with your doctor"],
  "disclaimer": "Not medical advice."
}"#;

#[test]
fn full_reply_parses() {
    let analysis = parse_report_analysis(FULL_REPLY).unwrap();
    assert_eq!(analysis.source, ReportSource::Enhanced);
    assert_eq!(analysis.findings.len(), 2);
    assert_eq!(analysis.findings[0].status, FindingStatus::Attention);
    assert_eq!(analysis.findings[0].note.as_deref(), Some("borderline high"));
    assert_eq!(analysis.findings[1].note, None);
    assert_eq!(analysis.future_suggestions, ["Repeat lipid panel in 6 months"]);
    assert_eq!(analysis.disclaimer, "Not medical advice.");
}

#[test]
fn fenced_reply_parses() {
    let fenced = format!("```json\n{FULL_REPLY}\n```");
    let analysis = parse_report_analysis(&fenced).unwrap();
    assert_eq!(analysis.recommendations.len(), 1);
}

#[test]
fn strip_code_fence_leaves_plain_text_alone() {
    assert_eq!(strip_code_fence("  {\"a\":1}  "), "{\"a\":1}");
    assert_eq!(strip_code_fence("```\n{\"a\":1}\n```"), "{\"a\":1}");
}

#[test]
fn optional_lists_and_disclaimer_default() {
    let reply = r#"{"summary": "All good.", "findings": [], "recommendations": ["Stay active"], "symptoms": "none"}"#;
    let analysis = parse_report_analysis(reply).unwrap();
    assert!(analysis.symptoms.is_empty());
    assert!(analysis.prevention.is_empty());
    assert!(analysis.future_suggestions.is_empty());
    assert_eq!(analysis.disclaimer, DEFAULT_DISCLAIMER);
}

#[test]
fn blank_summary_is_a_schema_violation() {
    let reply = r#"{"summary": "  ", "findings": [], "recommendations": []}"#;
    assert!(matches!(
        parse_report_analysis(reply),
        Err(BedrockError::SchemaViolation(_))
    ));
}

#[test]
fn findings_must_be_an_array() {
    let reply = r#"{"summary": "x", "findings": {}, "recommendations": []}"#;
    assert!(matches!(
        parse_report_analysis(reply),
        Err(BedrockError::SchemaViolation(_))
    ));
}

#[test]
fn missing_recommendations_is_a_schema_violation() {
    let reply = r#"{"summary": "x", "findings": []}"#;
    assert!(matches!(
        parse_report_analysis(reply),
        Err(BedrockError::SchemaViolation(_))
    ));
}

#[test]
fn non_json_reply_is_a_parse_error() {
    assert!(matches!(
        parse_report_analysis("I'm sorry, I can't help with that."),
        Err(BedrockError::ResponseParse(_))
    ));
    assert!(matches!(
        parse_report_analysis("   "),
        Err(BedrockError::ResponseParse(_))
    ));
}

#[test]
fn report_message_is_truncated() {
    let text = "a".repeat(MAX_REPORT_CHARS + 500);
    let message = build_report_message(&text);
    let body = message
        .strip_prefix("Analyze this medical report text:\n\n")
        .unwrap();
    assert_eq!(body.chars().count(), MAX_REPORT_CHARS);
}
