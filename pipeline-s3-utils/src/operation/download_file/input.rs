/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::{Path, PathBuf};

use aws_smithy_types::error::operation::BuildError;

use crate::operation::required_str;

/// Input type for downloading a single object to a local file
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct DownloadFileInput {
    /// The bucket containing the object.
    pub bucket: String,

    /// Key of the object to download.
    pub key: String,

    /// Local path the object is written to. Missing parent directories are created.
    pub destination: PathBuf,
}

impl DownloadFileInput {
    /// Creates a new builder-style object to manufacture [`DownloadFileInput`].
    pub fn builder() -> DownloadFileInputBuilder {
        DownloadFileInputBuilder::default()
    }

    /// The bucket containing the object.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Key of the object to download.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Local path the object is written to.
    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

/// A builder for [`DownloadFileInput`].
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct DownloadFileInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) destination: Option<PathBuf>,
}

impl DownloadFileInputBuilder {
    /// The bucket containing the object.
    /// This field is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket containing the object.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket containing the object.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Key of the object to download.
    /// This field is required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// Key of the object to download.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// Key of the object to download.
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// Local path the object is written to.
    /// This field is required.
    pub fn destination(mut self, input: impl Into<PathBuf>) -> Self {
        self.destination = Some(input.into());
        self
    }

    /// Local path the object is written to.
    pub fn set_destination(mut self, input: Option<PathBuf>) -> Self {
        self.destination = input;
        self
    }

    /// Local path the object is written to.
    pub fn get_destination(&self) -> &Option<PathBuf> {
        &self.destination
    }

    /// Consumes the builder and constructs a [`DownloadFileInput`].
    pub fn build(self) -> Result<DownloadFileInput, BuildError> {
        Ok(DownloadFileInput {
            bucket: required_str(self.bucket, "bucket", "A bucket is required")?,
            key: required_str(self.key, "key", "A key is required")?,
            destination: self.destination.ok_or_else(|| {
                BuildError::missing_field("destination", "A destination path is required")
            })?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::DownloadFileInput;

    #[test]
    fn test_build() {
        let input = DownloadFileInput::builder()
            .bucket("test-bucket")
            .key("test-key")
            .destination("/tmp/test-key")
            .build()
            .unwrap();
        assert_eq!("test-bucket", input.bucket());
        assert_eq!("test-key", input.key());
        assert_eq!(std::path::Path::new("/tmp/test-key"), input.destination());
    }

    #[test]
    fn test_build_missing_key() {
        let result = DownloadFileInput::builder()
            .bucket("test-bucket")
            .destination("/tmp/test-key")
            .build();
        assert!(result.is_err());
    }
}
