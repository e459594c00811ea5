//! S3 key/path conventions.
//!
//! Pure string functions with no AWS SDK dependency. These define the canonical
//! layout of objects in the MediSense S3 bucket.

pub const VOICE_ANALYSES_PREFIX: &str = "voice-analyses/";

pub fn voice_analyses_prefix(user_id: &str) -> String {
    format!("{VOICE_ANALYSES_PREFIX}{}/", path_segment(user_id))
}

pub fn voice_analysis(user_id: &str, analysis_id: &str) -> String {
    format!(
        "{}{}.json",
        voice_analyses_prefix(user_id),
        path_segment(analysis_id)
    )
}

/// Percent-encode an id into a single key segment. The encoding is
/// reversible, so distinct ids never share a prefix.
fn path_segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}
