/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Request type for downloading a JSON document
pub use input::{DownloadJsonInput, DownloadJsonInputBuilder};

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::error::Error;
use crate::types::S3Uri;

/// Operation struct for downloading and parsing a JSON document
#[derive(Clone, Default, Debug)]
pub(crate) struct DownloadJson;

impl DownloadJson {
    /// Execute a single `DownloadJson` operation
    pub(crate) async fn orchestrate<T>(
        handle: Arc<crate::client::Handle>,
        input: DownloadJsonInput,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let uri = S3Uri::new(input.bucket(), input.key());
        tracing::info!("downloading and parsing JSON from {uri}");

        let result = download_json(&handle, &uri).await;
        if let Err(err) = &result {
            crate::operation::log_failure("JSON download", &uri, err);
        }
        result
    }
}

async fn download_json<T: DeserializeOwned>(
    handle: &crate::client::Handle,
    uri: &S3Uri,
) -> Result<T, Error> {
    let resp = handle.store().get_object(uri.bucket(), uri.key()).await?;
    let content = resp.body.collect().await?.into_bytes();
    tracing::debug!("parsing {} bytes of JSON from {uri}", content.len());
    Ok(serde_json::from_slice(&content)?)
}

#[cfg(test)]
mod tests {
    use aws_sdk_s3::operation::get_object::GetObjectOutput;
    use aws_sdk_s3::primitives::ByteStream;
    use aws_smithy_mocks::{mock, mock_client, RuleMode};
    use serde::Deserialize;

    use crate::error::ErrorKind;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Segment {
        start_time: f64,
        end_time: f64,
        text: String,
    }

    fn test_client(s3_client: aws_sdk_s3::Client) -> crate::Client {
        let config = crate::Config::builder().client(s3_client).build();
        crate::Client::new(config)
    }

    #[tokio::test]
    async fn test_download_json() {
        let get_object = mock!(aws_sdk_s3::Client::get_object)
            .match_requests(|r| r.key() == Some("segments.json"))
            .then_output(|| {
                GetObjectOutput::builder()
                    .body(ByteStream::from_static(
                        br#"[{"start_time":0.0,"end_time":1.5,"text":"hello"}]"#,
                    ))
                    .build()
            });
        let client = test_client(mock_client!(
            aws_sdk_s3,
            RuleMode::Sequential,
            &[&get_object]
        ));

        let segments: Vec<Segment> = client
            .download_json()
            .bucket("test-bucket")
            .key("segments.json")
            .send()
            .await
            .unwrap();

        assert_eq!(
            vec![Segment {
                start_time: 0.0,
                end_time: 1.5,
                text: "hello".to_owned()
            }],
            segments
        );
    }

    #[tokio::test]
    async fn test_download_invalid_json() {
        let get_object = mock!(aws_sdk_s3::Client::get_object).then_output(|| {
            GetObjectOutput::builder()
                .body(ByteStream::from_static(b"not json"))
                .build()
        });
        let client = test_client(mock_client!(
            aws_sdk_s3,
            RuleMode::Sequential,
            &[&get_object]
        ));

        let err = client
            .download_json()
            .bucket("test-bucket")
            .key("broken.json")
            .send::<serde_json::Value>()
            .await
            .unwrap_err();

        assert_eq!(&ErrorKind::SerializationFailed, err.kind());
    }
}
