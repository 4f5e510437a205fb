/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::PathBuf;
use std::sync::Arc;

use super::{DownloadFileInputBuilder, DownloadFileOutput};

/// Fluent builder for constructing a single object download to a local file
#[derive(Debug)]
pub struct DownloadFileFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: DownloadFileInputBuilder,
}

impl DownloadFileFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: std::default::Default::default(),
        }
    }

    /// Download the object and write it to the destination path.
    ///
    /// Fails if the object does not exist or cannot be read, in which case no file is left
    /// at the destination.
    #[tracing::instrument(skip_all, level = "debug", name = "download-file", fields(
        bucket = self.inner.bucket.as_deref().unwrap_or_default(),
        key = self.inner.key.as_deref().unwrap_or_default(),
    ))]
    pub async fn send(self) -> Result<DownloadFileOutput, crate::error::Error> {
        let input = self.inner.build()?;
        crate::operation::download_file::DownloadFile::orchestrate(self.handle, input).await
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

    /// Key of the object to download.
    /// Required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// Key of the object to download.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_key(input);
        self
    }

    /// Key of the object to download.
    pub fn get_key(&self) -> &Option<String> {
        self.inner.get_key()
    }

    /// Local path the object is written to.
    /// Required. An existing file at this path is replaced.
    pub fn destination(mut self, input: impl Into<PathBuf>) -> Self {
        self.inner = self.inner.destination(input);
        self
    }

    /// Local path the object is written to.
    pub fn set_destination(mut self, input: Option<PathBuf>) -> Self {
        self.inner = self.inner.set_destination(input);
        self
    }

    /// Local path the object is written to.
    pub fn get_destination(&self) -> &Option<PathBuf> {
        self.inner.get_destination()
    }
}
