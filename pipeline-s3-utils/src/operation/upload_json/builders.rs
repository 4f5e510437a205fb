/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use bytes::Bytes;
use serde::Serialize;

use super::{UploadJsonInputBuilder, UploadJsonOutput};
use crate::error::{Error, ErrorKind};

/// Fluent builder for constructing a JSON document upload
#[derive(Debug)]
pub struct UploadJsonFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: UploadJsonInputBuilder,
    serialize_error: Option<serde_json::Error>,
}

impl UploadJsonFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: std::default::Default::default(),
            serialize_error: None,
        }
    }

    /// Upload the document.
    ///
    /// Fails without sending a request if the value given to [`body`](Self::body) could not
    /// be serialized.
    #[tracing::instrument(skip_all, level = "debug", name = "upload-json", fields(
        bucket = self.inner.bucket.as_deref().unwrap_or_default(),
        key = self.inner.key.as_deref().unwrap_or_default(),
    ))]
    pub async fn send(self) -> Result<UploadJsonOutput, Error> {
        if let Some(err) = self.serialize_error {
            tracing::error!("failed to serialize JSON body: {err}");
            return Err(Error::new(ErrorKind::SerializationFailed, err));
        }
        let input = self.inner.build()?;
        crate::operation::upload_json::UploadJson::orchestrate(self.handle, input).await
    }

    /// The bucket to upload to.
    /// Required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// The bucket to upload to.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket to upload to.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// Key to store the document under.
    /// Required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// Key to store the document under.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_key(input);
        self
    }

    /// Key to store the document under.
    pub fn get_key(&self) -> &Option<String> {
        self.inner.get_key()
    }

    /// The value to upload. It is serialized to JSON text immediately.
    /// Required.
    pub fn body<T>(mut self, data: &T) -> Self
    where
        T: Serialize + ?Sized,
    {
        match serde_json::to_vec(data) {
            Ok(json) => {
                self.inner = self.inner.set_body(Some(json.into()));
                self.serialize_error = None;
            }
            Err(err) => {
                self.inner = self.inner.set_body(None);
                self.serialize_error = Some(err);
            }
        }
        self
    }

    /// Already serialized JSON text to upload as-is.
    pub fn set_body(mut self, input: Option<Bytes>) -> Self {
        self.inner = self.inner.set_body(input);
        self.serialize_error = None;
        self
    }

    /// The serialized JSON text.
    pub fn get_body(&self) -> &Option<Bytes> {
        self.inner.get_body()
    }
}
