use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use medisense_storage::expiring::{Clock, ExpiringStore, MemoryExpiringStore};
use medisense_storage::session::{DEFAULT_SESSION_TTL, SessionService, TOKEN_PREFIX};

fn service() -> (Arc<AtomicI64>, SessionService) {
    let now = Arc::new(AtomicI64::new(0));
    let handle = now.clone();
    let clock: Clock = Arc::new(move || handle.load(Ordering::SeqCst));
    let store: Arc<dyn ExpiringStore<String>> =
        Arc::new(MemoryExpiringStore::<String>::with_clock(clock));
    (now, SessionService::new(store, DEFAULT_SESSION_TTL))
}

#[tokio::test]
async fn token_shape() {
    let (_, sessions) = service();
    let token = sessions.issue("user-1").await.unwrap();
    assert!(token.starts_with(TOKEN_PREFIX));
    let hex = &token[TOKEN_PREFIX.len()..];
    assert_eq!(hex.len(), 48);
    assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
}

#[tokio::test]
async fn tokens_are_unique() {
    let (_, sessions) = service();
    let a = sessions.issue("user-1").await.unwrap();
    let b = sessions.issue("user-1").await.unwrap();
    assert_ne!(a, b);
}

#[tokio::test]
async fn resolve_and_revoke() {
    let (_, sessions) = service();
    let token = sessions.issue("user-1").await.unwrap();
    assert_eq!(sessions.resolve(&token).await.unwrap().as_deref(), Some("user-1"));

    assert!(sessions.revoke(&token).await.unwrap());
    assert!(sessions.resolve(&token).await.unwrap().is_none());
}

#[tokio::test]
async fn unknown_or_malformed_tokens_resolve_to_none() {
    let (_, sessions) = service();
    assert!(sessions.resolve("tk_deadbeef").await.unwrap().is_none());
    assert!(sessions.resolve("Bearer whatever").await.unwrap().is_none());
}

#[tokio::test]
async fn session_expires_after_seven_days() {
    let (now, sessions) = service();
    let token = sessions.issue("user-1").await.unwrap();

    now.fetch_add(DEFAULT_SESSION_TTL.as_millis() as i64 - 1, Ordering::SeqCst);
    assert!(sessions.resolve(&token).await.unwrap().is_some());

    now.fetch_add(1, Ordering::SeqCst);
    assert!(sessions.resolve(&token).await.unwrap().is_none());
    assert_eq!(DEFAULT_SESSION_TTL, Duration::from_secs(604_800));
}

#[tokio::test]
async fn expired_sessions_are_dropped_on_next_issue() {
    let now = Arc::new(AtomicI64::new(0));
    let handle = now.clone();
    let clock: Clock = Arc::new(move || handle.load(Ordering::SeqCst));
    let memory = Arc::new(MemoryExpiringStore::<String>::with_clock(clock));
    let store: Arc<dyn ExpiringStore<String>> = memory.clone();
    let sessions = SessionService::new(store, Duration::from_secs(60));

    sessions.issue("user-1").await.unwrap();
    sessions.issue("user-2").await.unwrap();
    assert_eq!(memory.len().await, 2);

    now.fetch_add(60_000, Ordering::SeqCst);
    sessions.issue("user-3").await.unwrap();
    assert_eq!(memory.len().await, 1);
    assert!(!memory.is_empty().await);
}
