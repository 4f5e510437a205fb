/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */
#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! Amazon S3 storage utilities shared by the video pipeline stages.
//!
//! The client is a thin layer over an object store: it downloads objects to local files,
//! uploads local files, and uploads (or downloads) JSON documents. Errors from the
//! underlying store are surfaced as-is through [`Error::source`](std::error::Error::source);
//! nothing is retried or batched beyond what the AWS SDK already does.
//!
//! # Examples
//!
//! Load the default configuration:
//!
//! ```no_run
//! # async fn example() {
//! let config = pipeline_s3_utils::from_env().load().await;
//! let client = pipeline_s3_utils::Client::new(config);
//! # }
//! ```
//!
//! Publish a stage result and fetch the input of the next stage:
//!
//! ```no_run
//! # async fn example() -> Result<(), pipeline_s3_utils::error::Error> {
//! let config = pipeline_s3_utils::from_env().load().await;
//! let client = pipeline_s3_utils::Client::new(config);
//!
//! let summary = serde_json::json!({ "job_name": "talk-42", "segments": 12 });
//! client
//!     .upload_json()
//!     .bucket("transcriptions")
//!     .key("talk-42/summary.json")
//!     .body(&summary)
//!     .send()
//!     .await?;
//!
//! client
//!     .download_file()
//!     .bucket("videos")
//!     .key("talk-42.mp4")
//!     .destination("/tmp/talk-42.mp4")
//!     .send()
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! See the documentation for each client operation for more information:
//!
//! * [`download_file`](crate::Client::download_file) - download a single object to a local file
//! * [`upload_file`](crate::Client::upload_file) - upload a local file as a single object
//! * [`upload_json`](crate::Client::upload_json) - serialize a value and upload it as JSON
//! * [`download_json`](crate::Client::download_json) - download an object and parse it as JSON
//! * [`object_metadata`](crate::Client::object_metadata) - fetch an object's metadata

/// Content type set on JSON uploads
pub(crate) const JSON_CONTENT_TYPE: &str = "application/json";

/// Error types emitted by `pipeline-s3-utils`
pub mod error;

/// Common types used by `pipeline-s3-utils`
pub mod types;

/// Object store backends
pub mod store;

/// Storage client
pub mod client;

/// Storage operations
pub mod operation;

/// Client configuration
pub mod config;

/// Settings for tests that call live services
pub mod test_env;

pub use self::client::Client;
use self::config::loader::ConfigLoader;
pub use self::config::Config;

/// Create a config loader
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
