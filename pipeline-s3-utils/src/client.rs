/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::store::ObjectStore;
use crate::Config;
use std::sync::Arc;

/// Storage client for Amazon Simple Storage Service.
///
/// Cheap to clone; clones share the same configuration and object store.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
}

impl Handle {
    /// The object store to send requests to
    pub(crate) fn store(&self) -> &dyn ObjectStore {
        self.config.store().as_ref()
    }
}

impl Client {
    /// Creates a new client from a config.
    pub fn new(config: Config) -> Client {
        let handle = Arc::new(Handle { config });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// Download a single object to a local file.
    ///
    /// Constructs a fluent builder for the
    /// [`DownloadFile`](crate::operation::download_file::builders::DownloadFileFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::error::Error;
    ///
    /// async fn fetch_video(client: &pipeline_s3_utils::Client) -> Result<(), Box<dyn Error>> {
    ///     let output = client
    ///         .download_file()
    ///         .bucket("my-bucket")
    ///         .key("videos/talk.mp4")
    ///         .destination("/tmp/talk.mp4")
    ///         .send()
    ///         .await?;
    ///
    ///     println!("wrote {} bytes", output.bytes_written());
    ///     Ok(())
    /// }
    /// ```
    pub fn download_file(
        &self,
    ) -> crate::operation::download_file::builders::DownloadFileFluentBuilder {
        crate::operation::download_file::builders::DownloadFileFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Upload a local file as a single object.
    ///
    /// Constructs a fluent builder for the
    /// [`UploadFile`](crate::operation::upload_file::builders::UploadFileFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::error::Error;
    /// use std::path::Path;
    ///
    /// async fn upload_file(
    ///     client: &pipeline_s3_utils::Client,
    ///     path: impl AsRef<Path>
    /// ) -> Result<(), Box<dyn Error>> {
    ///     let output = client
    ///         .upload_file()
    ///         .source(path.as_ref())
    ///         .bucket("my-bucket")
    ///         .key("my-key")
    ///         .send()
    ///         .await?;
    ///
    ///     println!("uploaded to {}", output.uri());
    ///     Ok(())
    /// }
    /// ```
    pub fn upload_file(&self) -> crate::operation::upload_file::builders::UploadFileFluentBuilder {
        crate::operation::upload_file::builders::UploadFileFluentBuilder::new(self.handle.clone())
    }

    /// Serialize a value to JSON and upload it as a single object.
    ///
    /// Constructs a fluent builder for the
    /// [`UploadJson`](crate::operation::upload_json::builders::UploadJsonFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::collections::HashMap;
    /// use pipeline_s3_utils::error::Error;
    ///
    /// async fn publish(client: &pipeline_s3_utils::Client) -> Result<(), Error> {
    ///     let counts = HashMap::from([("segments", 12), ("speakers", 2)]);
    ///     client
    ///         .upload_json()
    ///         .bucket("my-bucket")
    ///         .key("results/counts.json")
    ///         .body(&counts)
    ///         .send()
    ///         .await?;
    ///     Ok(())
    /// }
    /// ```
    pub fn upload_json(&self) -> crate::operation::upload_json::builders::UploadJsonFluentBuilder {
        crate::operation::upload_json::builders::UploadJsonFluentBuilder::new(self.handle.clone())
    }

    /// Download a single object and parse its content as JSON.
    ///
    /// Constructs a fluent builder for the
    /// [`DownloadJson`](crate::operation::download_json::builders::DownloadJsonFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pipeline_s3_utils::error::Error;
    ///
    /// async fn load(client: &pipeline_s3_utils::Client) -> Result<serde_json::Value, Error> {
    ///     client
    ///         .download_json()
    ///         .bucket("my-bucket")
    ///         .key("results/counts.json")
    ///         .send()
    ///         .await
    /// }
    /// ```
    pub fn download_json(
        &self,
    ) -> crate::operation::download_json::builders::DownloadJsonFluentBuilder {
        crate::operation::download_json::builders::DownloadJsonFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Fetch the metadata of a single object without downloading it.
    ///
    /// Constructs a fluent builder for the
    /// [`ObjectMetadata`](crate::operation::object_metadata::builders::ObjectMetadataFluentBuilder) operation.
    pub fn object_metadata(
        &self,
    ) -> crate::operation::object_metadata::builders::ObjectMetadataFluentBuilder {
        crate::operation::object_metadata::builders::ObjectMetadataFluentBuilder::new(
            self.handle.clone(),
        )
    }
}
