/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use async_trait::async_trait;

use super::{GetObjectResponse, ObjectStore, PutObjectRequest, PutObjectResponse};
use crate::error::{self, Error};
use crate::types::ObjectMetadata;

/// [`ObjectStore`] backed by Amazon S3 (or an S3 compatible endpoint).
#[derive(Debug, Clone)]
pub struct S3Store {
    client: aws_sdk_s3::Client,
}

impl S3Store {
    /// Create a store that sends requests with the given S3 client.
    pub fn new(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }

    /// The Amazon S3 client instance used to send requests to S3.
    pub fn client(&self) -> &aws_sdk_s3::Client {
        &self.client
    }
}

fn content_length(value: Option<i64>) -> Option<u64> {
    value.and_then(|len| u64::try_from(len).ok())
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put_object(&self, request: PutObjectRequest) -> Result<PutObjectResponse, Error> {
        let content_length = request
            .content_length
            .map(i64::try_from)
            .transpose()
            .map_err(|_| {
                error::invalid_input(format!(
                    "content_length:{:?} is invalid.",
                    request.content_length
                ))
            })?;

        let resp = self
            .client
            .put_object()
            .bucket(request.bucket)
            .key(request.key)
            .set_content_length(content_length)
            .set_content_type(request.content_type)
            .body(request.body)
            .send()
            .await?;

        Ok(PutObjectResponse {
            e_tag: resp.e_tag,
        })
    }

    async fn get_object(&self, bucket: &str, key: &str) -> Result<GetObjectResponse, Error> {
        let resp = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await?;

        let metadata = ObjectMetadata {
            content_length: content_length(resp.content_length),
            content_type: resp.content_type,
            e_tag: resp.e_tag,
            user_metadata: resp.metadata.unwrap_or_default(),
        };

        Ok(GetObjectResponse {
            body: resp.body,
            metadata,
        })
    }

    async fn head_object(&self, bucket: &str, key: &str) -> Result<ObjectMetadata, Error> {
        let resp = self
            .client
            .head_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await?;

        Ok(ObjectMetadata {
            content_length: content_length(resp.content_length),
            content_type: resp.content_type,
            e_tag: resp.e_tag,
            user_metadata: resp.metadata.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use aws_sdk_s3::operation::get_object::{GetObjectError, GetObjectOutput};
    use aws_sdk_s3::operation::head_object::{HeadObjectError, HeadObjectOutput};
    use aws_sdk_s3::operation::put_object::PutObjectOutput;
    use aws_sdk_s3::primitives::ByteStream;
    use aws_smithy_mocks::{mock, mock_client, RuleMode};
    use aws_smithy_types::error::ErrorMetadata;

    use super::S3Store;
    use crate::error::ErrorKind;
    use crate::store::{ObjectStore, PutObjectRequest};

    #[tokio::test]
    async fn test_put_object_sets_content_type() {
        let put_object = mock!(aws_sdk_s3::Client::put_object)
            .match_requests(|r| {
                r.bucket() == Some("test-bucket")
                    && r.key() == Some("test-key")
                    && r.content_type() == Some("application/json")
                    && r.content_length() == Some(2)
            })
            .then_output(|| PutObjectOutput::builder().e_tag("test-etag").build());
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&put_object]);

        let store = S3Store::new(client);
        let resp = store
            .put_object(PutObjectRequest {
                bucket: "test-bucket".to_owned(),
                key: "test-key".to_owned(),
                body: ByteStream::from_static(b"{}"),
                content_length: Some(2),
                content_type: Some("application/json".to_owned()),
            })
            .await
            .unwrap();

        assert_eq!(Some("test-etag"), resp.e_tag.as_deref());
        assert_eq!(1, put_object.num_calls());
    }

    #[tokio::test]
    async fn test_get_object_maps_metadata() {
        let get_object = mock!(aws_sdk_s3::Client::get_object)
            .match_requests(|r| r.bucket() == Some("test-bucket") && r.key() == Some("test-key"))
            .then_output(|| {
                GetObjectOutput::builder()
                    .body(ByteStream::from_static(b"hello"))
                    .content_length(5)
                    .content_type("text/plain")
                    .metadata("speaker", "Ada")
                    .build()
            });
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&get_object]);

        let store = S3Store::new(client);
        let resp = store.get_object("test-bucket", "test-key").await.unwrap();

        assert_eq!(Some(5), resp.metadata.content_length());
        assert_eq!(Some("text/plain"), resp.metadata.content_type());
        assert_eq!(
            Some(&"Ada".to_owned()),
            resp.metadata.user_metadata().get("speaker")
        );
        let body = resp.body.collect().await.unwrap().into_bytes();
        assert_eq!(&b"hello"[..], &body[..]);
    }

    #[tokio::test]
    async fn test_get_object_missing_key() {
        let get_object = mock!(aws_sdk_s3::Client::get_object).then_error(|| {
            GetObjectError::generic(ErrorMetadata::builder().code("NoSuchKey").build())
        });
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&get_object]);

        let store = S3Store::new(client);
        let err = store
            .get_object("test-bucket", "missing-key")
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::NotFound, err.kind());
    }

    #[tokio::test]
    async fn test_head_object_access_denied() {
        let head_object = mock!(aws_sdk_s3::Client::head_object).then_error(|| {
            HeadObjectError::generic(ErrorMetadata::builder().code("AccessDenied").build())
        });
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&head_object]);

        let store = S3Store::new(client);
        let err = store
            .head_object("test-bucket", "test-key")
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::AccessDenied, err.kind());
    }

    #[tokio::test]
    async fn test_head_object() {
        let head_object = mock!(aws_sdk_s3::Client::head_object).then_output(|| {
            HeadObjectOutput::builder()
                .content_length(1024)
                .e_tag("\"abc\"")
                .set_metadata(Some(HashMap::from([(
                    "track".to_owned(),
                    "AI/ML".to_owned(),
                )])))
                .build()
        });
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&head_object]);

        let store = S3Store::new(client);
        let metadata = store.head_object("test-bucket", "test-key").await.unwrap();
        assert_eq!(Some(1024), metadata.content_length());
        assert_eq!(Some("\"abc\""), metadata.e_tag());
        assert_eq!("AI/ML", metadata.user_metadata()["track"]);
    }
}
