//! medisense-analysis
//!
//! The symptom pipeline: normalize, match against a lexicon, score the
//! condition table and compose advice. Also the rule-based reader for
//! uploaded medical documents. Everything here is synchronous and free of
//! I/O; callers own persistence and any remote collaborators.

pub mod compose;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod pipeline;
pub mod report;
pub mod scorer;

pub use pipeline::Analyzer;
