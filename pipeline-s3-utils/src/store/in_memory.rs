/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! In-memory implementation of the ObjectStore trait.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tokio::sync::RwLock;

use super::{GetObjectResponse, ObjectStore, PutObjectRequest, PutObjectResponse};
use crate::error::{self, Error};
use crate::types::ObjectMetadata;

#[derive(Debug, Clone)]
struct StoredObject {
    content: Bytes,
    content_type: Option<String>,
}

impl StoredObject {
    fn metadata(&self) -> ObjectMetadata {
        ObjectMetadata {
            content_length: Some(self.content.len() as u64),
            content_type: self.content_type.clone(),
            ..Default::default()
        }
    }
}

/// An in-memory implementation of the [`ObjectStore`] trait.
///
/// Buckets spring into existence on first write. Useful for local development and tests of
/// code built on the storage client.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    // (bucket, key) -> object
    objects: RwLock<HashMap<(String, String), StoredObject>>,
}

impl InMemoryStore {
    /// Create a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the content of an object, if present.
    pub async fn object_content(&self, bucket: &str, key: &str) -> Option<Bytes> {
        let objects = self.objects.read().await;
        objects
            .get(&(bucket.to_owned(), key.to_owned()))
            .map(|obj| obj.content.clone())
    }

    /// Returns the number of stored objects across all buckets.
    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    /// Returns true if no objects are stored.
    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }

    async fn find(&self, bucket: &str, key: &str) -> Result<StoredObject, Error> {
        let objects = self.objects.read().await;
        objects
            .get(&(bucket.to_owned(), key.to_owned()))
            .cloned()
            .ok_or_else(|| not_found(bucket, key))
    }
}

fn not_found(bucket: &str, key: &str) -> Error {
    error::not_found(format!("no such key: s3://{bucket}/{key}"))
}

#[async_trait]
impl ObjectStore for InMemoryStore {
    async fn put_object(&self, request: PutObjectRequest) -> Result<PutObjectResponse, Error> {
        let content = request.body.collect().await?.into_bytes();
        let mut objects = self.objects.write().await;
        objects.insert(
            (request.bucket, request.key),
            StoredObject {
                content,
                content_type: request.content_type,
            },
        );
        Ok(PutObjectResponse::default())
    }

    async fn get_object(&self, bucket: &str, key: &str) -> Result<GetObjectResponse, Error> {
        let object = self.find(bucket, key).await?;
        let metadata = object.metadata();
        Ok(GetObjectResponse {
            body: ByteStream::from(object.content),
            metadata,
        })
    }

    async fn head_object(&self, bucket: &str, key: &str) -> Result<ObjectMetadata, Error> {
        Ok(self.find(bucket, key).await?.metadata())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn put_request(key: &str, content: &'static [u8]) -> PutObjectRequest {
        PutObjectRequest {
            bucket: "test-bucket".to_owned(),
            key: key.to_owned(),
            body: ByteStream::from_static(content),
            content_length: Some(content.len() as u64),
            content_type: Some("text/plain".to_owned()),
        }
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let store = InMemoryStore::new();
        store
            .put_object(put_request("a.txt", b"first"))
            .await
            .unwrap();

        let resp = store.get_object("test-bucket", "a.txt").await.unwrap();
        assert_eq!(Some(5), resp.metadata.content_length());
        assert_eq!(Some("text/plain"), resp.metadata.content_type());
        let body = resp.body.collect().await.unwrap().into_bytes();
        assert_eq!(Bytes::from_static(b"first"), body);
    }

    #[tokio::test]
    async fn test_put_replaces_existing() {
        let store = InMemoryStore::new();
        store
            .put_object(put_request("a.txt", b"first"))
            .await
            .unwrap();
        store
            .put_object(put_request("a.txt", b"second"))
            .await
            .unwrap();

        assert_eq!(1, store.len().await);
        assert_eq!(
            Some(Bytes::from_static(b"second")),
            store.object_content("test-bucket", "a.txt").await
        );
    }

    #[tokio::test]
    async fn test_missing_object() {
        let store = InMemoryStore::new();
        let err = store.get_object("test-bucket", "nope").await.unwrap_err();
        assert_eq!(&ErrorKind::NotFound, err.kind());

        let err = store.head_object("test-bucket", "nope").await.unwrap_err();
        assert_eq!(&ErrorKind::NotFound, err.kind());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_buckets_are_separate() {
        let store = InMemoryStore::new();
        store
            .put_object(put_request("shared-key", b"data"))
            .await
            .unwrap();

        let err = store
            .get_object("other-bucket", "shared-key")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
