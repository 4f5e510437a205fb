/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Request type for uploading a JSON document
pub use input::{UploadJsonInput, UploadJsonInputBuilder};

mod output;
/// Response type for uploading a JSON document
pub use output::UploadJsonOutput;

use std::sync::Arc;

use aws_sdk_s3::primitives::ByteStream;

use crate::error::Error;
use crate::store::PutObjectRequest;
use crate::types::S3Uri;
use crate::JSON_CONTENT_TYPE;

/// Operation struct for uploading a JSON document
#[derive(Clone, Default, Debug)]
pub(crate) struct UploadJson;

impl UploadJson {
    /// Execute a single `UploadJson` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: UploadJsonInput,
    ) -> Result<UploadJsonOutput, Error> {
        let uri = S3Uri::new(input.bucket(), input.key());
        let content_length = input.body().len() as u64;
        tracing::info!("uploading JSON data ({content_length} bytes) to {uri}");

        let result = handle
            .store()
            .put_object(PutObjectRequest {
                bucket: input.bucket,
                key: input.key,
                body: ByteStream::from(input.body),
                content_length: Some(content_length),
                content_type: Some(JSON_CONTENT_TYPE.to_owned()),
            })
            .await;

        match result {
            Ok(resp) => Ok(UploadJsonOutput {
                uri,
                e_tag: resp.e_tag,
            }),
            Err(err) => {
                crate::operation::log_failure("JSON upload", &uri, &err);
                Err(err)
            }
        }
    }
}
