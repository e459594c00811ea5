//! Thin wrappers over the S3 calls the analysis store needs.

use aws_sdk_s3::Client;
use aws_smithy_types::byte_stream::ByteStream;

use crate::error::StorageError;

/// Fetch an object's bytes. A missing key is [`StorageError::NotFound`].
pub async fn get_object(client: &Client, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError> {
    let resp = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| match e.into_service_error() {
            err if err.is_no_such_key() => StorageError::NotFound {
                key: key.to_string(),
            },
            err => StorageError::GetObject(err.to_string()),
        })?;

    let bytes = resp
        .body
        .collect()
        .await
        .map_err(|e| StorageError::GetObject(e.to_string()))?;
    Ok(bytes.into_bytes().to_vec())
}

pub async fn put_object(
    client: &Client,
    bucket: &str,
    key: &str,
    body: Vec<u8>,
    content_type: &str,
) -> Result<(), StorageError> {
    client
        .put_object()
        .bucket(bucket)
        .key(key)
        .content_type(content_type)
        .body(ByteStream::from(body))
        .send()
        .await
        .map_err(|e| StorageError::PutObject(e.into_service_error().to_string()))?;

    tracing::debug!(bucket, key, "object written");
    Ok(())
}

/// Every key under `prefix` that ends with `suffix`, following pagination.
pub async fn list_keys(
    client: &Client,
    bucket: &str,
    prefix: &str,
    suffix: &str,
) -> Result<Vec<String>, StorageError> {
    let mut keys = Vec::new();
    let mut pages = client
        .list_objects_v2()
        .bucket(bucket)
        .prefix(prefix)
        .into_paginator()
        .send();

    while let Some(page) = pages.next().await {
        let page = page.map_err(|e| StorageError::ListObjects(e.to_string()))?;
        keys.extend(
            page.contents()
                .iter()
                .filter_map(|obj| obj.key())
                .filter(|key| key.ends_with(suffix))
                .map(str::to_string),
        );
    }

    Ok(keys)
}
