//! User-facing sentinel strings returned in place of real results.

pub const INPUT_TOO_SHORT: &str = "Please speak for longer and describe your symptoms in detail";

pub const NO_SYMPTOMS_DETECTED: &str = "Unable to detect specific symptoms from the transcript";

pub const COMMON_TERMS_HINT: &str =
    "Please try describing your symptoms using common terms like: headache, fever, cough, pain, etc.";

/// Condition placeholder when symptoms matched but no condition qualified.
pub const NEEDS_EVALUATION: &str = "Health concern requiring evaluation";

/// Condition placeholder when nothing matched at all.
pub const DESCRIBE_MORE_SPECIFICALLY: &str = "Please describe your symptoms more specifically";

/// How much of the raw transcript is echoed back in the no-match sentinel.
pub const ECHO_CHARS: usize = 100;

/// The three-line sentinel for input that was long enough but matched nothing.
pub fn no_match_symptoms(raw: &str) -> Vec<String> {
    let mut echoed: String = raw.chars().take(ECHO_CHARS).collect();
    if raw.chars().count() > ECHO_CHARS {
        echoed.push_str("...");
    }
    vec![
        NO_SYMPTOMS_DETECTED.to_string(),
        COMMON_TERMS_HINT.to_string(),
        format!("Transcript received: \"{echoed}\""),
    ]
}
