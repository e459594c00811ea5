use std::env;
use std::str::FromStr;
use std::time::Duration;

use medisense_storage::otp::DEFAULT_OTP_TTL;
use medisense_storage::session::DEFAULT_SESSION_TTL;

/// Where saved analyses live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    S3,
    Memory,
}

/// Runtime settings, read once at start-up.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub bucket: String,
    pub store: StoreBackend,
    /// Enables enhanced report analysis when set.
    pub bedrock_model: Option<String>,
    pub enhanced_timeout: Duration,
    /// Adds the `debug` block to analysis responses.
    pub development: bool,
    pub otp_ttl: Duration,
    pub session_ttl: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source. Unset variables take their defaults;
    /// malformed ones do too, with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let bucket = lookup("MEDISENSE_BUCKET").unwrap_or_else(|| "medisense".to_string());

        let store = match lookup("MEDISENSE_STORE").as_deref().map(str::trim) {
            Some("s3") => StoreBackend::S3,
            None | Some("") | Some("memory") => StoreBackend::Memory,
            Some(other) => {
                tracing::warn!(value = other, "unknown MEDISENSE_STORE, using memory");
                StoreBackend::Memory
            }
        };

        let bedrock_model = lookup("MEDISENSE_BEDROCK_MODEL")
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());

        let development = lookup("MEDISENSE_ENV").is_some_and(|e| e.trim() == "development");

        Self {
            bucket,
            store,
            bedrock_model,
            enhanced_timeout: Duration::from_secs(parse_or(
                &lookup,
                "MEDISENSE_ENHANCED_TIMEOUT_SECS",
                30,
            )),
            development,
            otp_ttl: Duration::from_secs(parse_or(
                &lookup,
                "MEDISENSE_OTP_TTL_SECS",
                DEFAULT_OTP_TTL.as_secs(),
            )),
            session_ttl: Duration::from_secs(parse_or(
                &lookup,
                "MEDISENSE_SESSION_TTL_SECS",
                DEFAULT_SESSION_TTL.as_secs(),
            )),
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    let Some(raw) = lookup(name) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(variable = name, value = %raw, "malformed value, using default");
            default
        }
    }
}
