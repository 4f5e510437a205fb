/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;
use std::sync::Arc;

use super::ObjectMetadataInputBuilder;
use crate::types::{ObjectMetadata, S3Uri};

/// Fluent builder for constructing an object metadata lookup
#[derive(Debug)]
pub struct ObjectMetadataFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: ObjectMetadataInputBuilder,
}

impl ObjectMetadataFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: std::default::Default::default(),
        }
    }

    /// Fetch the object's metadata.
    #[tracing::instrument(skip_all, level = "debug", name = "object-metadata", fields(
        bucket = self.inner.bucket.as_deref().unwrap_or_default(),
        key = self.inner.key.as_deref().unwrap_or_default(),
    ))]
    pub async fn send(self) -> Result<ObjectMetadata, crate::error::Error> {
        let input = self.inner.build()?;
        crate::operation::object_metadata::ObjectMetadata::orchestrate(self.handle, input).await
    }

    /// Fetch only the object's user-defined metadata.
    ///
    /// Any failure (missing object, denied access, invalid input, ...) is logged as a warning
    /// and yields an empty map.
    pub async fn user_metadata_or_empty(self) -> HashMap<String, String> {
        let bucket = self.inner.bucket.clone().unwrap_or_default();
        let key = self.inner.key.clone().unwrap_or_default();
        let result = match self.inner.build() {
            Ok(input) => {
                let uri = S3Uri::new(input.bucket(), input.key());
                crate::operation::object_metadata::ObjectMetadata::head(&self.handle, &uri).await
            }
            Err(err) => Err(err.into()),
        };
        match result {
            Ok(metadata) => metadata.user_metadata,
            Err(err) => {
                tracing::warn!("failed to get metadata for {bucket}/{key}: {err}");
                HashMap::new()
            }
        }
    }

    /// The bucket containing the object.
    /// Required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// The bucket containing the object.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket containing the object.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// Key of the object.
    /// Required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// Key of the object.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_key(input);
        self
    }

    /// Key of the object.
    pub fn get_key(&self) -> &Option<String> {
        self.inner.get_key()
    }
}
