/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::S3Uri;

/// Output type for uploading a JSON document
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct UploadJsonOutput {
    /// Location of the uploaded document
    pub uri: S3Uri,

    /// Entity tag of the uploaded document, if the store reports one
    pub e_tag: Option<String>,
}

impl UploadJsonOutput {
    /// Location of the uploaded document
    pub fn uri(&self) -> &S3Uri {
        &self.uri
    }

    /// Entity tag of the uploaded document
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }
}
