use medisense_analysis::Analyzer;
use medisense_analysis::error::ReportError;
use medisense_analysis::report::{
    DEFAULT_DISCLAIMER, ReportCategory, analyze_report_rule_based, terms_found,
    validate_medical_report,
};
use medisense_core::models::report::ReportSource;

const LIPID_PANEL: &str = "Lipid panel: total cholesterol 210 mg/dl, LDL 130 mg/dl, HDL 45 mg/dl. Result: borderline high.";

#[test]
fn lab_report_is_accepted() {
    assert_eq!(validate_medical_report(LIPID_PANEL), Ok(()));
}

#[test]
fn business_document_is_rejected() {
    let text = "Quarterly business meeting agenda: budget review, marketing plan and sales targets for the next quarter.";
    assert_eq!(
        validate_medical_report(text),
        Err(ReportError::NonMedicalContent)
    );
}

#[test]
fn text_without_medical_signal_is_rejected() {
    let text = "Dear friend, thank you for the lovely letter you sent me last week. I hope you are well.";
    assert_eq!(
        validate_medical_report(text),
        Err(ReportError::InsufficientMedicalContent)
    );
}

#[test]
fn short_medical_text_is_rejected() {
    assert_eq!(
        validate_medical_report("Glucose 95 mg/dl, normal."),
        Err(ReportError::TooShort)
    );
}

#[test]
fn category_detection_follows_keyword_priority() {
    assert_eq!(ReportCategory::detect("mri of the spine"), ReportCategory::Spinal);
    assert_eq!(ReportCategory::detect("ecg and blood panel"), ReportCategory::Cardiac);
    assert_eq!(ReportCategory::detect("fasting glucose"), ReportCategory::BloodMetabolic);
    assert_eq!(ReportCategory::detect("lipid profile"), ReportCategory::Lipid);
    assert_eq!(ReportCategory::detect("tsh level"), ReportCategory::Thyroid);
    assert_eq!(ReportCategory::detect("general checkup"), ReportCategory::General);
}

#[test]
fn terms_are_reported_once_in_table_order() {
    let found = terms_found("Diagnosis: normal. Diagnosis confirmed by glucose test.");
    assert_eq!(found.first(), Some(&"glucose"));
    assert_eq!(found.iter().filter(|t| **t == "diagnosis").count(), 1);
}

#[test]
fn lipid_report_uses_category_hints_when_no_symptom_matches() {
    let analysis = analyze_report_rule_based(LIPID_PANEL, &Analyzer::new());
    assert_eq!(analysis.source, ReportSource::RuleBased);
    assert!(
        analysis
            .summary
            .starts_with("Your report appears to include cholesterol and lipid panel results.")
    );
    assert!(analysis.summary.contains("cholesterol, LDL, HDL"));
    assert_eq!(analysis.symptoms, ReportCategory::Lipid.symptom_hints());
    assert!(analysis.possible_conditions.is_empty());
    assert_eq!(analysis.prevention.len(), 4);
    assert_eq!(analysis.future_suggestions.len(), 3);
    assert_eq!(analysis.recommendations.len(), 3);
    assert_eq!(analysis.disclaimer, DEFAULT_DISCLAIMER);
    assert!(analysis.findings.is_empty());
}

#[test]
fn report_symptoms_come_from_the_pipeline_when_it_matches() {
    let text = "Patient presented with chest pain and shortness of breath. ECG within range.";
    let analysis = analyze_report_rule_based(text, &Analyzer::new());
    assert!(analysis.symptoms.contains(&"Chest pain".to_string()));
    assert!(analysis.symptoms.contains(&"Shortness of breath".to_string()));
    assert!(!analysis.possible_conditions.is_empty());
    assert!(analysis.summary.starts_with("Your report appears to include cardiac-related markers"));
}

#[test]
fn general_report_without_numbers_gets_plain_summary() {
    let text = "Clinical examination of the patient was unremarkable; no acute disease noted.";
    let analysis = analyze_report_rule_based(text, &Analyzer::new());
    assert!(analysis.summary.starts_with("We've processed your document."));
}
