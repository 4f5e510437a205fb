/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Request type for uploading a local file
pub use input::{UploadFileInput, UploadFileInputBuilder};

mod output;
/// Response type for uploading a local file
pub use output::UploadFileOutput;

use std::sync::Arc;

use aws_sdk_s3::primitives::ByteStream;
use tokio::fs;

use crate::error::{self, Error};
use crate::store::PutObjectRequest;
use crate::types::S3Uri;

/// Operation struct for uploading a single local file
#[derive(Clone, Default, Debug)]
pub(crate) struct UploadFile;

impl UploadFile {
    /// Execute a single `UploadFile` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: UploadFileInput,
    ) -> Result<UploadFileOutput, Error> {
        let uri = S3Uri::new(input.bucket(), input.key());
        tracing::info!("uploading {} to {uri}", input.source().display());

        let result = upload(&handle, uri.clone(), input).await;
        if let Err(err) = &result {
            crate::operation::log_failure("upload", &uri, err);
        }
        result
    }
}

async fn upload(
    handle: &crate::client::Handle,
    uri: S3Uri,
    input: UploadFileInput,
) -> Result<UploadFileOutput, Error> {
    // an absent or unreadable source fails here, before any request is sent
    let file_metadata = fs::metadata(&input.source).await?;
    if !file_metadata.is_file() {
        return Err(error::invalid_input(format!(
            "`{}` is not a regular file",
            input.source.display()
        )));
    }
    let body = ByteStream::from_path(&input.source).await?;
    let content_length = file_metadata.len();

    let resp = handle
        .store()
        .put_object(PutObjectRequest {
            bucket: input.bucket,
            key: input.key,
            body,
            content_length: Some(content_length),
            content_type: input.content_type,
        })
        .await?;

    tracing::info!("uploaded {content_length} bytes to {uri}");
    Ok(UploadFileOutput {
        uri,
        e_tag: resp.e_tag,
        content_length,
    })
}
