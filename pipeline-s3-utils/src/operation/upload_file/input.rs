/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::{Path, PathBuf};

use aws_smithy_types::error::operation::BuildError;

use crate::operation::required_str;

/// Input type for uploading a single local file
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct UploadFileInput {
    /// Local file to upload.
    pub source: PathBuf,

    /// The bucket to upload to.
    pub bucket: String,

    /// Key to store the object under.
    pub key: String,

    /// MIME type stored with the object.
    pub content_type: Option<String>,
}

impl UploadFileInput {
    /// Creates a new builder-style object to manufacture [`UploadFileInput`].
    pub fn builder() -> UploadFileInputBuilder {
        UploadFileInputBuilder::default()
    }

    /// Local file to upload.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The bucket to upload to.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Key to store the object under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// MIME type stored with the object.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }
}

/// A builder for [`UploadFileInput`].
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct UploadFileInputBuilder {
    pub(crate) source: Option<PathBuf>,
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) content_type: Option<String>,
}

impl UploadFileInputBuilder {
    /// Local file to upload.
    /// This field is required.
    pub fn source(mut self, input: impl Into<PathBuf>) -> Self {
        self.source = Some(input.into());
        self
    }

    /// Local file to upload.
    pub fn set_source(mut self, input: Option<PathBuf>) -> Self {
        self.source = input;
        self
    }

    /// Local file to upload.
    pub fn get_source(&self) -> &Option<PathBuf> {
        &self.source
    }

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

    /// Key to store the object under.
    /// This field is required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// Key to store the object under.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// Key to store the object under.
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// MIME type stored with the object.
    pub fn content_type(mut self, input: impl Into<String>) -> Self {
        self.content_type = Some(input.into());
        self
    }

    /// MIME type stored with the object.
    pub fn set_content_type(mut self, input: Option<String>) -> Self {
        self.content_type = input;
        self
    }

    /// MIME type stored with the object.
    pub fn get_content_type(&self) -> &Option<String> {
        &self.content_type
    }

    /// Consumes the builder and constructs an [`UploadFileInput`].
    pub fn build(self) -> Result<UploadFileInput, BuildError> {
        Ok(UploadFileInput {
            source: self.source.ok_or_else(|| {
                BuildError::missing_field("source", "A source path is required")
            })?,
            bucket: required_str(self.bucket, "bucket", "A bucket is required")?,
            key: required_str(self.key, "key", "A key is required")?,
            content_type: self.content_type,
        })
    }
}
