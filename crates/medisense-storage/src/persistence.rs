//! Saved symptom analyses.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_s3::Client;
use medisense_core::models::record::AnalysisRecord;
use medisense_core::s3_keys;
use tokio::sync::Mutex;

use crate::error::StorageError;
use crate::{objects, state};

/// Where analyses of authenticated users are kept.
#[async_trait]
pub trait AnalysisStore: Send + Sync {
    /// Insert or replace the record with this user and analysis id.
    async fn save(&self, record: &AnalysisRecord) -> Result<(), StorageError>;

    /// All records of one user, newest first.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<AnalysisRecord>, StorageError>;
}

/// One JSON object per analysis under `voice-analyses/{user}/`.
pub struct S3AnalysisStore {
    client: Client,
    bucket: String,
}

impl S3AnalysisStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl AnalysisStore for S3AnalysisStore {
    async fn save(&self, record: &AnalysisRecord) -> Result<(), StorageError> {
        let key = s3_keys::voice_analysis(&record.user_id, &record.analysis_id);
        state::save_json(&self.client, &self.bucket, &key, record).await
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<AnalysisRecord>, StorageError> {
        let prefix = s3_keys::voice_analyses_prefix(user_id);
        let keys = objects::list_keys(&self.client, &self.bucket, &prefix, ".json").await?;

        let mut loaded = Vec::with_capacity(keys.len());
        for key in &keys {
            match state::load_json::<AnalysisRecord>(&self.client, &self.bucket, key).await {
                Ok(record) => loaded.push(record),
                // removed between list and get
                Err(StorageError::NotFound { .. }) => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(records_for_user(loaded, user_id))
    }
}

/// Process-local store, used in development and tests.
#[derive(Default)]
pub struct MemoryAnalysisStore {
    records: Mutex<HashMap<String, Vec<AnalysisRecord>>>,
}

impl MemoryAnalysisStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AnalysisStore for MemoryAnalysisStore {
    async fn save(&self, record: &AnalysisRecord) -> Result<(), StorageError> {
        let mut records = self.records.lock().await;
        let user_records = records.entry(record.user_id.clone()).or_default();
        user_records.retain(|r| r.analysis_id != record.analysis_id);
        user_records.push(record.clone());
        Ok(())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<AnalysisRecord>, StorageError> {
        let records = self.records.lock().await;
        let found = records.get(user_id).cloned().unwrap_or_default();
        Ok(records_for_user(found, user_id))
    }
}

/// Keep only `user_id`'s records, newest first. A record stored under the
/// user's prefix but owned by someone else is dropped and logged.
pub fn records_for_user(records: Vec<AnalysisRecord>, user_id: &str) -> Vec<AnalysisRecord> {
    let mut owned: Vec<AnalysisRecord> = records
        .into_iter()
        .filter(|record| {
            let mine = record.user_id == user_id;
            if !mine {
                tracing::warn!(
                    analysis_id = %record.analysis_id,
                    "skipping saved analysis owned by another user"
                );
            }
            mine
        })
        .collect();
    owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    owned
}
