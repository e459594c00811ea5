use thiserror::Error;

/// Failures of the enhanced analysis path. Callers fall back to the
/// rule-based analysis on any of these.
#[derive(Debug, Error)]
pub enum BedrockError {
    #[error("bedrock converse call failed: {0}")]
    Invocation(String),

    #[error("unreadable model reply: {0}")]
    ResponseParse(String),

    #[error("model reply has the wrong shape: {0}")]
    SchemaViolation(String),

    #[error("no reply from the model within {0}s")]
    Timeout(u64),
}
