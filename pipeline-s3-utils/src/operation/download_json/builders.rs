/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::DownloadJsonInputBuilder;

/// Fluent builder for constructing a JSON document download
#[derive(Debug)]
pub struct DownloadJsonFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: DownloadJsonInputBuilder,
}

impl DownloadJsonFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: std::default::Default::default(),
        }
    }

    /// Download the document and deserialize it into `T`.
    #[tracing::instrument(skip_all, level = "debug", name = "download-json", fields(
        bucket = self.inner.bucket.as_deref().unwrap_or_default(),
        key = self.inner.key.as_deref().unwrap_or_default(),
    ))]
    pub async fn send<T>(self) -> Result<T, crate::error::Error>
    where
        T: DeserializeOwned,
    {
        let input = self.inner.build()?;
        crate::operation::download_json::DownloadJson::orchestrate(self.handle, input).await
    }

    /// The bucket containing the document.
    /// Required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// The bucket containing the document.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket containing the document.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// Key of the document.
    /// Required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// Key of the document.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_key(input);
        self
    }

    /// Key of the document.
    pub fn get_key(&self) -> &Option<String> {
        self.inner.get_key()
    }
}
