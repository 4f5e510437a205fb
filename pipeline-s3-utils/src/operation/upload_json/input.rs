/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;
use bytes::Bytes;
use serde::Serialize;

use crate::operation::required_str;

/// Input type for uploading a JSON document
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct UploadJsonInput {
    /// The bucket to upload to.
    pub bucket: String,

    /// Key to store the document under.
    pub key: String,

    /// The serialized JSON text.
    pub body: Bytes,
}

impl UploadJsonInput {
    /// Creates a new builder-style object to manufacture [`UploadJsonInput`].
    pub fn builder() -> UploadJsonInputBuilder {
        UploadJsonInputBuilder::default()
    }

    /// The bucket to upload to.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Key to store the document under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The serialized JSON text.
    pub fn body(&self) -> &Bytes {
        &self.body
    }
}

/// A builder for [`UploadJsonInput`].
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct UploadJsonInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) body: Option<Bytes>,
}

impl UploadJsonInputBuilder {
    /// The bucket to upload to.
    /// This field is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket to upload to.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket to upload to.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Key to store the document under.
    /// This field is required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// Key to store the document under.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// Key to store the document under.
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// Serialize `data` as the document body.
    /// This field is required.
    pub fn body<T>(mut self, data: &T) -> Result<Self, serde_json::Error>
    where
        T: Serialize + ?Sized,
    {
        self.body = Some(serde_json::to_vec(data)?.into());
        Ok(self)
    }

    /// Already serialized JSON text to use as the document body.
    pub fn set_body(mut self, input: Option<Bytes>) -> Self {
        self.body = input;
        self
    }

    /// The serialized JSON text.
    pub fn get_body(&self) -> &Option<Bytes> {
        &self.body
    }

    /// Consumes the builder and constructs an [`UploadJsonInput`].
    pub fn build(self) -> Result<UploadJsonInput, BuildError> {
        Ok(UploadJsonInput {
            bucket: required_str(self.bucket, "bucket", "A bucket is required")?,
            key: required_str(self.key, "key", "A key is required")?,
            body: self
                .body
                .ok_or_else(|| BuildError::missing_field("body", "A JSON body is required"))?,
        })
    }
}
