/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::S3Uri;

/// Output type for uploading a single local file
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct UploadFileOutput {
    /// Location of the uploaded object
    pub uri: S3Uri,

    /// Entity tag of the uploaded object, if the store reports one
    pub e_tag: Option<String>,

    /// Number of bytes uploaded
    pub content_length: u64,
}

impl UploadFileOutput {
    /// Location of the uploaded object
    pub fn uri(&self) -> &S3Uri {
        &self.uri
    }

    /// Entity tag of the uploaded object
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    /// Number of bytes uploaded
    pub fn content_length(&self) -> u64 {
        self.content_length
    }
}
