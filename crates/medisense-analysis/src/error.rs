use thiserror::Error;

/// Why an uploaded document was refused before analysis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error(
        "This document appears to be non-medical content (business, legal, or other non-healthcare related). Please upload a medical report or health document."
    )]
    NonMedicalContent,

    #[error(
        "This document doesn't contain sufficient medical terminology or health-related content to be analyzed as a medical report. Please upload a valid medical report, lab results, or health document."
    )]
    InsufficientMedicalContent,

    #[error(
        "Document is too short to be a medical report. Please upload a complete medical report or health document."
    )]
    TooShort,
}
