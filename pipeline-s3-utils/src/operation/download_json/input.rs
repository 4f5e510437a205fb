/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

use crate::operation::required_str;

/// Input type for downloading a JSON document
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct DownloadJsonInput {
    /// The bucket containing the document.
    pub bucket: String,

    /// Key of the document.
    pub key: String,
}

impl DownloadJsonInput {
    /// Creates a new builder-style object to manufacture [`DownloadJsonInput`].
    pub fn builder() -> DownloadJsonInputBuilder {
        DownloadJsonInputBuilder::default()
    }

    /// The bucket containing the document.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Key of the document.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// A builder for [`DownloadJsonInput`].
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct DownloadJsonInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
}

impl DownloadJsonInputBuilder {
    /// The bucket containing the document.
    /// This field is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket containing the document.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket containing the document.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Key of the document.
    /// This field is required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// Key of the document.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// Key of the document.
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// Consumes the builder and constructs a [`DownloadJsonInput`].
    pub fn build(self) -> Result<DownloadJsonInput, BuildError> {
        Ok(DownloadJsonInput {
            bucket: required_str(self.bucket, "bucket", "A bucket is required")?,
            key: required_str(self.key, "key", "A key is required")?,
        })
    }
}
