/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::PathBuf;
use std::sync::Arc;

use super::{UploadFileInputBuilder, UploadFileOutput};

/// Fluent builder for constructing a single local file upload
#[derive(Debug)]
pub struct UploadFileFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: UploadFileInputBuilder,
}

impl UploadFileFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: std::default::Default::default(),
        }
    }

    /// Upload the file.
    #[tracing::instrument(skip_all, level = "debug", name = "upload-file", fields(
        bucket = self.inner.bucket.as_deref().unwrap_or_default(),
        key = self.inner.key.as_deref().unwrap_or_default(),
    ))]
    pub async fn send(self) -> Result<UploadFileOutput, crate::error::Error> {
        let input = self.inner.build()?;
        crate::operation::upload_file::UploadFile::orchestrate(self.handle, input).await
    }

    /// Local file to upload.
    /// Required.
    pub fn source(mut self, input: impl Into<PathBuf>) -> Self {
        self.inner = self.inner.source(input);
        self
    }

    /// Local file to upload.
    pub fn set_source(mut self, input: Option<PathBuf>) -> Self {
        self.inner = self.inner.set_source(input);
        self
    }

    /// Local file to upload.
    pub fn get_source(&self) -> &Option<PathBuf> {
        self.inner.get_source()
    }

    /// The bucket to upload to.
    /// Required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// The bucket to upload to.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket to upload to.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// Key to store the object under.
    /// Required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// Key to store the object under.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_key(input);
        self
    }

    /// Key to store the object under.
    pub fn get_key(&self) -> &Option<String> {
        self.inner.get_key()
    }

    /// MIME type stored with the object.
    /// If not provided, the store's default applies.
    pub fn content_type(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.content_type(input);
        self
    }

    /// MIME type stored with the object.
    pub fn set_content_type(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_content_type(input);
        self
    }

    /// MIME type stored with the object.
    pub fn get_content_type(&self) -> &Option<String> {
        self.inner.get_content_type()
    }
}
