/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{self, Error};

const S3_SCHEME: &str = "s3://";

/// Location of an object in S3, printed and parsed as `s3://bucket/key`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct S3Uri {
    bucket: String,
    key: String,
}

impl S3Uri {
    /// Create a new URI for the object `key` in `bucket`.
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// The bucket name
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The object key. Empty when the URI only names a bucket.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Split the URI into it's component parts '(bucket, key)'
    pub fn parts(&self) -> (&str, &str) {
        (&self.bucket, &self.key)
    }
}

impl fmt::Display for S3Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{S3_SCHEME}{}/{}", self.bucket, self.key)
    }
}

impl FromStr for S3Uri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix(S3_SCHEME)
            .ok_or_else(|| error::invalid_input(format!("`{s}` is not an s3:// URI")))?;
        let (bucket, key) = rest.split_once('/').unwrap_or((rest, ""));
        if bucket.is_empty() {
            return Err(error::invalid_input(format!(
                "`{s}` does not name a bucket"
            )));
        }
        Ok(S3Uri::new(bucket, key))
    }
}

/// Metadata describing a stored object.
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectMetadata {
    /// Size of the object body in bytes
    pub content_length: Option<u64>,

    /// Standard MIME type of the object body
    pub content_type: Option<String>,

    /// Entity tag of the object
    pub e_tag: Option<String>,

    /// User-defined metadata (`x-amz-meta-*` headers, without the prefix)
    pub user_metadata: HashMap<String, String>,
}

impl ObjectMetadata {
    /// Size of the object body in bytes
    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }

    /// Standard MIME type of the object body
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Entity tag of the object
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    /// User-defined metadata
    pub fn user_metadata(&self) -> &HashMap<String, String> {
        &self.user_metadata
    }
}
