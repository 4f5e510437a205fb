/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::{Path, PathBuf};

use crate::types::ObjectMetadata;

/// Output type for downloading a single object to a local file
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct DownloadFileOutput {
    /// Path of the written file
    pub destination: PathBuf,

    /// Number of bytes written to the file
    pub bytes_written: u64,

    /// Metadata of the downloaded object
    pub metadata: ObjectMetadata,
}

impl DownloadFileOutput {
    /// Path of the written file
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Number of bytes written to the file
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Metadata of the downloaded object
    pub fn metadata(&self) -> &ObjectMetadata {
        &self.metadata
    }
}
