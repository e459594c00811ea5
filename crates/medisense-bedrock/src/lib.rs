//! medisense-bedrock
//!
//! Enhanced report analysis through the Bedrock Converse API, plus parsing
//! and validation of the model's structured reply.

pub mod client;
pub mod error;
pub mod prompt;
pub mod report;
pub mod tokens;
pub mod transaction;
