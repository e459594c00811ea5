use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::error::StorageError;
use crate::expiring::{ExpiringStore, purge_logged};

pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);
pub const TOKEN_PREFIX: &str = "tk_";

/// Opaque bearer tokens mapped to user ids.
pub struct SessionService {
    store: Arc<dyn ExpiringStore<String>>,
    ttl: Duration,
}

impl SessionService {
    pub fn new(store: Arc<dyn ExpiringStore<String>>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    pub async fn issue(&self, user_id: &str) -> Result<String, StorageError> {
        purge_logged(self.store.as_ref()).await?;
        let token = generate_token();
        self.store
            .set(&session_key(&token), user_id.to_string(), self.ttl)
            .await?;
        Ok(token)
    }

    /// The user a live token belongs to.
    pub async fn resolve(&self, token: &str) -> Result<Option<String>, StorageError> {
        if !token.starts_with(TOKEN_PREFIX) {
            return Ok(None);
        }
        self.store.get(&session_key(token)).await
    }

    pub async fn revoke(&self, token: &str) -> Result<bool, StorageError> {
        self.store.delete(&session_key(token)).await
    }
}

fn session_key(token: &str) -> String {
    format!("session:{token}")
}

/// `tk_` followed by 48 hex characters.
fn generate_token() -> String {
    let hex = format!(
        "{}{}",
        Uuid::new_v4().simple(),
        Uuid::new_v4().simple()
    );
    format!("{TOKEN_PREFIX}{}", &hex[..48])
}
