//! Rule-based reading of uploaded medical document text.
//!
//! This path has no external dependency and is the guaranteed fallback when
//! the enhanced (model-backed) analysis is unavailable or fails.

use std::sync::LazyLock;

use medisense_core::models::analysis::AnalysisStatus;
use medisense_core::models::report::{ReportAnalysis, ReportSource};
use regex::Regex;

use crate::error::ReportError;
use crate::pipeline::Analyzer;

/// Documents shorter than this (in characters) are refused.
pub const MIN_REPORT_LEN: usize = 50;
const MIN_MEDICAL_TERMS: usize = 3;
const MAX_NON_MEDICAL_TERMS: usize = 3;
const SUMMARY_TERMS: usize = 5;

pub const DEFAULT_DISCLAIMER: &str = "This analysis is for informational purposes only and does not replace professional medical advice, diagnosis, or treatment. Always seek the advice of your physician or qualified health provider with any questions.";

/// Matched case-insensitively as substrings. A term listed twice counts twice.
const MEDICAL_TERMS: &[&str] = &[
    "glucose", "HbA1c", "cholesterol", "LDL", "HDL", "triglycerides", "creatinine", "eGFR",
    "hemoglobin", "RBC", "WBC", "platelet", "TSH", "T3", "T4", "blood pressure", "BMI",
    "bilirubin", "ALT", "AST", "ALP", "urea", "BUN", "sodium", "potassium", "calcium",
    "vitamin D", "vitamin B12", "ferritin", "ESR", "CRP", "Hb", "RBC count", "platelets",
    "diagnosis", "treatment", "medication", "prescription", "symptoms", "examination",
    "laboratory", "lab test", "blood test", "urine test", "x-ray", "ct scan", "mri",
    "ultrasound", "ecg", "eeg", "pathology", "clinical", "patient", "medical history",
    "physical examination", "vital signs", "pulse", "temperature", "respiratory", "heart rate",
    "systolic", "diastolic", "fasting", "random", "specimen", "sample", "diagnosis",
    "prognosis", "therapy", "surgery", "operation", "procedure", "consultation",
    "follow-up", "checkup", "screening", "diagnostic", "prognosis", "mortality",
    "morbidity", "chronic", "acute", "infection", "inflammation", "disease",
    "condition", "disorder", "syndrome", "pathology", "abnormal", "normal",
    "range", "reference", "value", "result", "finding", "conclusion", "impression",
];

const NON_MEDICAL_INDICATORS: &[&str] = &[
    "meeting", "agenda", "minutes", "presentation", "business", "financial", "budget",
    "marketing", "sales", "revenue", "profit", "invoice", "contract", "agreement",
    "legal", "court", "lawsuit", "insurance", "policy", "claim", "coverage",
    "recipe", "ingredients", "cooking", "baking", "restaurant", "menu", "food",
    "travel", "vacation", "hotel", "flight", "booking", "reservation", "itinerary",
    "education", "school", "university", "course", "exam", "grade", "student",
    "entertainment", "movie", "music", "game", "sport", "team", "player",
    "shopping", "product", "price", "discount", "sale", "order", "delivery",
    "weather", "forecast", "temperature", "rain", "snow", "wind", "climate",
];

static MEDICAL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // lab values with units
        r"(?i)\b\d+\.?\d*\s*(?:mg/dl|mmol/l|g/dl|u/l|ng/ml|pg/ml)\b",
        r"(?i)\b(?:normal|abnormal|high|low|elevated|decreased|within range)\b",
        r"(?i)\b(?:patient|subject|specimen|sample)\b",
        r"(?i)\b(?:diagnosis|impression|conclusion|finding|result)\b",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("static medical pattern"))
    .collect()
});

static HAS_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d").expect("static number pattern"));

/// Decide whether `text` reads like a medical document.
pub fn validate_medical_report(text: &str) -> Result<(), ReportError> {
    let lower = text.to_lowercase();
    let medical_terms = count_terms(&lower, MEDICAL_TERMS);
    let non_medical_terms = count_terms(&lower, NON_MEDICAL_INDICATORS);
    let has_medical_pattern = MEDICAL_PATTERNS.iter().any(|re| re.is_match(text));

    let enough_medical = medical_terms >= MIN_MEDICAL_TERMS;
    if non_medical_terms >= MAX_NON_MEDICAL_TERMS && !enough_medical {
        return Err(ReportError::NonMedicalContent);
    }
    if !enough_medical && !has_medical_pattern {
        return Err(ReportError::InsufficientMedicalContent);
    }
    if text.chars().count() < MIN_REPORT_LEN {
        return Err(ReportError::TooShort);
    }
    Ok(())
}

fn count_terms(lower: &str, terms: &[&str]) -> usize {
    terms
        .iter()
        .filter(|t| lower.contains(t.to_lowercase().as_str()))
        .count()
}

/// Report families recognized by keyword, checked in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportCategory {
    Spinal,
    Cardiac,
    BloodMetabolic,
    Lipid,
    Thyroid,
    General,
}

impl ReportCategory {
    pub fn detect(lower: &str) -> Self {
        let any = |words: &[&str]| words.iter().any(|w| lower.contains(w));
        if any(&["back pain", "spine", "vertebrae"]) {
            ReportCategory::Spinal
        } else if any(&["heart", "cardiac", "ecg"]) {
            ReportCategory::Cardiac
        } else if any(&["blood", "glucose", "hba1c"]) {
            ReportCategory::BloodMetabolic
        } else if any(&["cholesterol", "lipid"]) {
            ReportCategory::Lipid
        } else if any(&["thyroid", "tsh", "t3"]) {
            ReportCategory::Thyroid
        } else {
            ReportCategory::General
        }
    }

    fn lead(self) -> &'static str {
        match self {
            ReportCategory::Spinal => "Your report appears to reference spinal or back-related health issues.",
            ReportCategory::Cardiac => "Your report appears to include cardiac-related markers and heart health indicators.",
            ReportCategory::BloodMetabolic => "Your report appears to include blood test results and metabolic markers.",
            ReportCategory::Lipid => "Your report appears to include cholesterol and lipid panel results.",
            ReportCategory::Thyroid => "Your report appears to include thyroid function tests.",
            ReportCategory::General => "Your report appears to include lab values and health metrics.",
        }
    }

    /// Symptoms commonly associated with this family of report.
    pub fn symptom_hints(self) -> &'static [&'static str] {
        match self {
            ReportCategory::Spinal => &[
                "Back pain or discomfort",
                "Muscle stiffness or spasms",
                "Limited range of motion",
                "Numbness or tingling in extremities",
            ],
            ReportCategory::Cardiac => &[
                "Chest pain or discomfort",
                "Irregular heartbeat or palpitations",
                "Shortness of breath",
                "Fatigue or weakness",
            ],
            ReportCategory::BloodMetabolic => &[
                "Unusual thirst or hunger",
                "Frequent urination",
                "Fatigue or low energy",
                "Blurred vision",
            ],
            ReportCategory::Lipid => &[
                "High cholesterol may cause fatty deposits in blood vessels",
                "Increased risk of heart disease",
                "Potential gallbladder issues",
                "Yellowish skin growths (xanthomas)",
            ],
            ReportCategory::Thyroid => &[
                "Unexplained weight changes",
                "Temperature sensitivity (hot/cold intolerance)",
                "Mood changes or depression",
                "Changes in menstrual patterns",
            ],
            ReportCategory::General => &[
                "Fatigue or low energy",
                "Headaches or lightheadedness",
                "Shortness of breath on exertion",
                "Unintentional weight changes",
            ],
        }
    }
}

const PREVENTION: &[&str] = &[
    "Maintain a balanced diet rich in fruits, vegetables, whole grains, and lean protein.",
    "Limit added sugars, deep-fried foods, and highly processed snacks.",
    "Aim for at least 30 minutes of moderate physical activity most days of the week.",
    "Avoid smoking and limit alcohol intake as advised by your doctor.",
];

const FUTURE_SUGGESTIONS: &[&str] = &[
    "Repeat key tests at the interval recommended by your doctor to monitor trends over time.",
    "Share this report and any changes in symptoms with your healthcare provider.",
    "Keep a personal health log of lab results, medications, and major symptoms.",
];

const RECOMMENDATIONS: &[&str] = &[
    "Discuss these results with your healthcare provider for personalized advice.",
    "Keep a copy of this report for your records and future visits.",
    "If any values were flagged, schedule a follow-up as recommended.",
];

/// Medical terms present in the text, in table order, first occurrence only.
pub fn terms_found(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    let mut found: Vec<&'static str> = Vec::new();
    for term in MEDICAL_TERMS {
        if lower.contains(term.to_lowercase().as_str()) && !found.contains(term) {
            found.push(term);
        }
    }
    found
}

/// Analyze document text without any external collaborator.
///
/// The caller is expected to have run [`validate_medical_report`] first.
pub fn analyze_report_rule_based(text: &str, analyzer: &Analyzer) -> ReportAnalysis {
    let lower = text.to_lowercase();
    let category = ReportCategory::detect(&lower);
    let found = terms_found(text);
    let named = if found.is_empty() {
        "General health markers".to_string()
    } else {
        found
            .iter()
            .take(SUMMARY_TERMS)
            .copied()
            .collect::<Vec<_>>()
            .join(", ")
    };

    let summary = match category {
        ReportCategory::General if !HAS_NUMBER.is_match(text) => "We've processed your document. Below is a structured overview. For precise interpretation of values and ranges, please share with your healthcare provider.".to_string(),
        ReportCategory::General => format!(
            "{} We identified references to: {named}. The analysis below is a structured interpretation based on extracted text. Always confirm with your doctor.",
            category.lead()
        ),
        _ => format!("{} We identified references to: {named}", category.lead()),
    };

    let symptom_pass = analyzer.analyze(text, None);
    let (symptoms, possible_conditions) = if symptom_pass.status == AnalysisStatus::Complete {
        (symptom_pass.symptoms, symptom_pass.possible_conditions)
    } else {
        (to_strings(category.symptom_hints()), Vec::new())
    };

    tracing::debug!(
        category = ?category,
        terms = found.len(),
        symptoms = symptoms.len(),
        "rule-based report analysis"
    );

    ReportAnalysis {
        summary,
        findings: Vec::new(),
        symptoms,
        possible_conditions,
        prevention: to_strings(PREVENTION),
        future_suggestions: to_strings(FUTURE_SUGGESTIONS),
        recommendations: to_strings(RECOMMENDATIONS),
        disclaimer: DEFAULT_DISCLAIMER.to_string(),
        source: ReportSource::RuleBased,
    }
}

fn to_strings(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}
