/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt::Debug;

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;

use crate::error::Error;
use crate::types::ObjectMetadata;

mod in_memory;
mod s3;

pub use in_memory::InMemoryStore;
pub use s3::S3Store;

/// The object operations the storage client is built on.
///
/// Implementations pass requests straight through to the backing store; they do not retry,
/// cache or batch.
#[async_trait]
pub trait ObjectStore: Send + Sync + Debug {
    /// Store `request.body` as the object `request.key` in `request.bucket`, replacing any
    /// existing object.
    async fn put_object(&self, request: PutObjectRequest) -> Result<PutObjectResponse, Error>;

    /// Retrieve an object's body and metadata.
    ///
    /// Returns an error of kind [`NotFound`](crate::error::ErrorKind::NotFound) if the object
    /// does not exist.
    async fn get_object(&self, bucket: &str, key: &str) -> Result<GetObjectResponse, Error>;

    /// Retrieve an object's metadata without its body.
    async fn head_object(&self, bucket: &str, key: &str) -> Result<ObjectMetadata, Error>;
}

/// A single object write.
#[derive(Debug)]
pub struct PutObjectRequest {
    /// Destination bucket
    pub bucket: String,

    /// Destination key
    pub key: String,

    /// Object content
    pub body: ByteStream,

    /// Size of the body in bytes, when known up front
    pub content_length: Option<u64>,

    /// MIME type stored with the object
    pub content_type: Option<String>,
}

/// Result of a successful [`ObjectStore::put_object`].
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct PutObjectResponse {
    /// Entity tag assigned by the store, if it reports one
    pub e_tag: Option<String>,
}

/// Result of a successful [`ObjectStore::get_object`].
#[derive(Debug)]
pub struct GetObjectResponse {
    /// Object content. Not yet consumed.
    pub body: ByteStream,

    /// Object metadata
    pub metadata: ObjectMetadata,
}
