use thiserror::Error;

/// Lookup failures and defects in the compiled rule tables. Table defects are
/// only raised by the start-up validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexiconError {
    #[error("unknown lexicon: {0}")]
    UnknownLexicon(String),

    #[error("lexicon '{lexicon}': duplicate canonical label '{label}'")]
    DuplicateLabel { lexicon: String, label: String },

    #[error("lexicon '{lexicon}': rule '{label}' has no patterns")]
    EmptyPatterns { lexicon: String, label: String },

    #[error("lexicon '{lexicon}': rule '{label}' has a blank pattern or label")]
    BlankPattern { lexicon: String, label: String },

    #[error("condition '{condition}': '{symptom}' is both required and optional")]
    OverlappingSymptoms { condition: String, symptom: String },

    #[error("duplicate condition name: {0}")]
    DuplicateCondition(String),

    #[error("condition '{0}' has a blank symptom label")]
    BlankConditionSymptom(String),
}
