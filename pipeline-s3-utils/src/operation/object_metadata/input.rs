/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

use crate::operation::required_str;

/// Input type for fetching the metadata of a single object
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectMetadataInput {
    /// The bucket containing the object.
    pub bucket: String,

    /// Key of the object.
    pub key: String,
}

impl ObjectMetadataInput {
    /// Creates a new builder-style object to manufacture [`ObjectMetadataInput`].
    pub fn builder() -> ObjectMetadataInputBuilder {
        ObjectMetadataInputBuilder::default()
    }

    /// The bucket containing the object.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Key of the object.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// A builder for [`ObjectMetadataInput`].
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct ObjectMetadataInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
}

impl ObjectMetadataInputBuilder {
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

    /// Key of the object.
    /// This field is required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// Key of the object.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// Key of the object.
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// Consumes the builder and constructs an [`ObjectMetadataInput`].
    pub fn build(self) -> Result<ObjectMetadataInput, BuildError> {
        Ok(ObjectMetadataInput {
            bucket: required_str(self.bucket, "bucket", "A bucket is required")?,
            key: required_str(self.key, "key", "A key is required")?,
        })
    }
}
