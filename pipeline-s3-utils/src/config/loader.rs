/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_config::{BehaviorVersion, Region};

use crate::config::Builder;
use crate::Config;

/// Region used when neither the loader nor the environment provides one
const DEFAULT_REGION: &str = "us-east-1";

/// Load storage client [`Config`] from the environment.
///
/// Credentials, region and other SDK settings are resolved by `aws-config` from the usual
/// sources (environment variables, shared config/credentials files, instance metadata, ...).
#[derive(Default, Debug)]
pub struct ConfigLoader {
    builder: Builder,
    region: Option<Region>,
    endpoint_url: Option<String>,
    force_path_style: Option<bool>,
}

impl ConfigLoader {
    /// Override the region requests are sent to.
    ///
    /// Default is whatever the environment configures (`AWS_REGION`, profile, ...),
    /// falling back to `us-east-1`.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(Region::new(region.into()));
        self
    }

    /// Send requests to a custom endpoint, e.g. an S3 compatible service such as
    /// LocalStack or MinIO.
    pub fn endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    /// Address buckets as part of the path (`https://host/bucket/key`) rather than the
    /// host name. Usually needed together with [`endpoint_url`](Self::endpoint_url).
    pub fn force_path_style(mut self, force_path_style: bool) -> Self {
        self.force_path_style = Some(force_path_style);
        self
    }

    /// Load the default configuration
    ///
    /// If fields have been overridden during builder construction, the override values will be
    /// used. Otherwise, the default values for each field will be provided.
    pub async fn load(self) -> Config {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = self.region {
            loader = loader.region(region);
        }
        if let Some(endpoint_url) = self.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        let shared_config = loader.load().await;

        let mut s3_config = aws_sdk_s3::config::Builder::from(&shared_config);
        if shared_config.region().is_none() {
            tracing::debug!("no region configured; using {DEFAULT_REGION}");
            s3_config = s3_config.region(Region::from_static(DEFAULT_REGION));
        }
        if let Some(force_path_style) = self.force_path_style {
            s3_config = s3_config.force_path_style(force_path_style);
        }

        let s3_client = aws_sdk_s3::Client::from_conf(s3_config.build());
        self.builder.client(s3_client).build()
    }
}
