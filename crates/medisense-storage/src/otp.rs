use std::sync::{Arc, LazyLock};
use std::time::Duration;

use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StorageError;
use crate::expiring::{ExpiringStore, purge_logged};

pub const DEFAULT_OTP_TTL: Duration = Duration::from_secs(5 * 60);

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"));

/// What a one-time code was issued for. Codes do not carry across purposes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OtpPurpose {
    #[default]
    Login,
    Signup,
}

impl OtpPurpose {
    fn as_str(self) -> &'static str {
        match self {
            OtpPurpose::Login => "login",
            OtpPurpose::Signup => "signup",
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email.trim())
}

/// Issues and checks six-digit one-time codes.
pub struct OtpService {
    store: Arc<dyn ExpiringStore<String>>,
    ttl: Duration,
}

impl OtpService {
    pub fn new(store: Arc<dyn ExpiringStore<String>>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    /// Create a fresh code for `email`, replacing any outstanding one for the
    /// same purpose. Delivery is the caller's concern.
    pub async fn issue(&self, email: &str, purpose: OtpPurpose) -> Result<String, StorageError> {
        if !is_valid_email(email) {
            return Err(StorageError::InvalidEmail(email.to_string()));
        }
        purge_logged(self.store.as_ref()).await?;
        let code = generate_code();
        self.store
            .set(&otp_key(email, purpose), code.clone(), self.ttl)
            .await?;
        Ok(code)
    }

    /// Check a submitted code. A correct code is consumed; a wrong one leaves
    /// the stored code in place so the user can retry until it expires.
    pub async fn verify(
        &self,
        email: &str,
        purpose: OtpPurpose,
        code: &str,
    ) -> Result<bool, StorageError> {
        let key = otp_key(email, purpose);
        match self.store.get(&key).await? {
            Some(stored) if stored == code.trim() => {
                self.store.delete(&key).await?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

fn otp_key(email: &str, purpose: OtpPurpose) -> String {
    format!("otp:{}:{}", purpose.as_str(), email.trim().to_lowercase())
}

/// A code in 100000..=999999.
fn generate_code() -> String {
    let random = Uuid::new_v4().as_u128();
    (100_000 + (random % 900_000) as u32).to_string()
}
