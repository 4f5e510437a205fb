/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Request type for fetching object metadata
pub use input::{ObjectMetadataInput, ObjectMetadataInputBuilder};

use std::sync::Arc;

use crate::error::Error;
use crate::types::{ObjectMetadata as Metadata, S3Uri};

/// Operation struct for fetching the metadata of a single object
#[derive(Clone, Default, Debug)]
pub(crate) struct ObjectMetadata;

impl ObjectMetadata {
    /// Execute a single `ObjectMetadata` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: ObjectMetadataInput,
    ) -> Result<Metadata, Error> {
        let uri = S3Uri::new(input.bucket(), input.key());
        let result = Self::head(&handle, &uri).await;
        if let Err(err) = &result {
            crate::operation::log_failure("metadata lookup", &uri, err);
        }
        result
    }

    /// Send the HeadObject request, leaving failures for the caller to report.
    pub(crate) async fn head(
        handle: &crate::client::Handle,
        uri: &S3Uri,
    ) -> Result<Metadata, Error> {
        tracing::info!("fetching metadata for {uri}");
        handle.store().head_object(uri.bucket(), uri.key()).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use aws_sdk_s3::operation::head_object::{HeadObjectError, HeadObjectOutput};
    use aws_smithy_mocks::{mock, mock_client, RuleMode};
    use aws_smithy_types::error::ErrorMetadata;

    use tracing::Level;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    use crate::error::ErrorKind;
    use crate::store::InMemoryStore;

    fn test_client(s3_client: aws_sdk_s3::Client) -> crate::Client {
        let config = crate::Config::builder().client(s3_client).build();
        crate::Client::new(config)
    }

    #[tokio::test]
    async fn test_object_metadata() {
        let head_object = mock!(aws_sdk_s3::Client::head_object)
            .match_requests(|r| r.bucket() == Some("test-bucket") && r.key() == Some("talk.mp4"))
            .then_output(|| {
                HeadObjectOutput::builder()
                    .content_length(42)
                    .content_type("video/mp4")
                    .metadata("speaker", "Grace Hopper")
                    .metadata("day", "2")
                    .build()
            });
        let client = test_client(mock_client!(
            aws_sdk_s3,
            RuleMode::Sequential,
            &[&head_object]
        ));

        let metadata = client
            .object_metadata()
            .bucket("test-bucket")
            .key("talk.mp4")
            .send()
            .await
            .unwrap();

        assert_eq!(Some(42), metadata.content_length());
        assert_eq!(Some("video/mp4"), metadata.content_type());
        assert_eq!(
            &HashMap::from([
                ("speaker".to_owned(), "Grace Hopper".to_owned()),
                ("day".to_owned(), "2".to_owned()),
            ]),
            metadata.user_metadata()
        );
    }

    #[tokio::test]
    async fn test_object_metadata_not_found() {
        let head_object = mock!(aws_sdk_s3::Client::head_object).then_error(|| {
            HeadObjectError::generic(ErrorMetadata::builder().code("NotFound").build())
        });
        let client = test_client(mock_client!(
            aws_sdk_s3,
            RuleMode::Sequential,
            &[&head_object]
        ));

        let err = client
            .object_metadata()
            .bucket("test-bucket")
            .key("missing.mp4")
            .send()
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::NotFound, err.kind());
    }

    #[tokio::test]
    async fn test_user_metadata_or_empty_on_failure() {
        let head_object = mock!(aws_sdk_s3::Client::head_object).then_error(|| {
            HeadObjectError::generic(ErrorMetadata::builder().code("AccessDenied").build())
        });
        let client = test_client(mock_client!(
            aws_sdk_s3,
            RuleMode::Sequential,
            &[&head_object]
        ));

        let metadata = client
            .object_metadata()
            .bucket("test-bucket")
            .key("private.mp4")
            .user_metadata_or_empty()
            .await;
        assert!(metadata.is_empty());
        assert_eq!(1, head_object.num_calls());
    }

    #[derive(Clone, Default)]
    struct LevelRecorder(Arc<Mutex<Vec<Level>>>);

    impl<S: tracing::Subscriber> Layer<S> for LevelRecorder {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            self.0.lock().unwrap().push(*event.metadata().level());
        }
    }

    #[tokio::test]
    async fn test_user_metadata_or_empty_only_warns() {
        let recorder = LevelRecorder::default();
        let _guard = tracing::subscriber::set_default(
            tracing_subscriber::registry().with(recorder.clone()),
        );

        let config = crate::Config::builder().store(InMemoryStore::new()).build();
        let client = crate::Client::new(config);
        let metadata = client
            .object_metadata()
            .bucket("test-bucket")
            .key("missing.mp4")
            .user_metadata_or_empty()
            .await;
        assert!(metadata.is_empty());

        let levels = recorder.0.lock().unwrap().clone();
        assert!(!levels.contains(&Level::ERROR), "{levels:?}");
        assert_eq!(1, levels.iter().filter(|l| **l == Level::WARN).count());
    }

    #[tokio::test]
    async fn test_send_logs_failure_as_error() {
        let recorder = LevelRecorder::default();
        let _guard = tracing::subscriber::set_default(
            tracing_subscriber::registry().with(recorder.clone()),
        );

        let config = crate::Config::builder().store(InMemoryStore::new()).build();
        let client = crate::Client::new(config);
        let err = client
            .object_metadata()
            .bucket("test-bucket")
            .key("missing.mp4")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        let levels = recorder.0.lock().unwrap().clone();
        assert_eq!(1, levels.iter().filter(|l| **l == Level::ERROR).count());
    }
}
