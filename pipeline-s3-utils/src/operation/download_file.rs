/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Request type for downloading an object to a local file
pub use input::{DownloadFileInput, DownloadFileInputBuilder};

mod output;
/// Response type for downloading an object to a local file
pub use output::DownloadFileOutput;

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use aws_sdk_s3::primitives::ByteStream;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::{self, Error};
use crate::types::S3Uri;

/// Operation struct for downloading a single object to a local file
#[derive(Clone, Default, Debug)]
pub(crate) struct DownloadFile;

impl DownloadFile {
    /// Execute a single `DownloadFile` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: DownloadFileInput,
    ) -> Result<DownloadFileOutput, Error> {
        let uri = S3Uri::new(input.bucket(), input.key());
        let destination = input.destination();
        tracing::info!("downloading {uri} to {}", destination.display());

        let result = download(&handle, &uri, destination).await;
        if let Err(err) = &result {
            crate::operation::log_failure("download", &uri, err);
        }
        result
    }
}

async fn download(
    handle: &crate::client::Handle,
    uri: &S3Uri,
    destination: &Path,
) -> Result<DownloadFileOutput, Error> {
    let partial = partial_path(destination)?;

    // fetch before touching the filesystem so a missing object leaves nothing behind
    let resp = handle.store().get_object(uri.bucket(), uri.key()).await?;

    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }

    let bytes_written = match write_body(resp.body, &partial).await {
        Ok(n) => n,
        Err(err) => {
            discard(&partial).await;
            return Err(err);
        }
    };

    if let Err(err) = fs::rename(&partial, destination).await {
        discard(&partial).await;
        return Err(err.into());
    }

    tracing::info!(
        "downloaded {uri} to {} ({bytes_written} bytes)",
        destination.display()
    );

    Ok(DownloadFileOutput {
        destination: destination.to_path_buf(),
        bytes_written,
        metadata: resp.metadata,
    })
}

/// Sibling path the body is streamed into before being renamed to `destination`.
///
/// The random suffix keeps concurrent downloads to the same destination apart.
fn partial_path(destination: &Path) -> Result<PathBuf, Error> {
    let file_name = destination.file_name().ok_or_else(|| {
        error::invalid_input(format!(
            "destination `{}` does not name a file",
            destination.display()
        ))
    })?;
    let mut partial = OsString::from(".");
    partial.push(file_name);
    partial.push(format!(".{:016x}.partial", fastrand::u64(..)));
    Ok(destination.with_file_name(partial))
}

async fn write_body(mut body: ByteStream, path: &Path) -> Result<u64, Error> {
    let mut file = fs::File::create(path).await?;
    let mut written = 0u64;
    while let Some(chunk) = body.try_next().await? {
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;
    file.sync_all().await?;
    Ok(written)
}

async fn discard(path: &Path) {
    if let Err(err) = fs::remove_file(path).await {
        tracing::warn!("failed to remove partial download {}: {err}", path.display());
    }
}
