/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::store::{ObjectStore, S3Store};

pub(crate) mod loader;

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    store: Arc<dyn ObjectStore>,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The object store the client sends requests to.
    pub fn store(&self) -> &Arc<dyn ObjectStore> {
        &self.store
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    store: Option<Arc<dyn ObjectStore>>,
}

impl Builder {
    /// Set an explicit S3 client to use.
    pub fn client(self, client: aws_sdk_s3::Client) -> Self {
        self.store(S3Store::new(client))
    }

    /// Set the object store to use.
    ///
    /// Use this to run the client against something other than Amazon S3, e.g. an
    /// [`InMemoryStore`](crate::store::InMemoryStore).
    pub fn store(mut self, store: impl ObjectStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Set a shared object store to use.
    pub fn shared_store(mut self, store: Arc<dyn ObjectStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Consumes the builder and constructs a [`Config`]
    ///
    /// # Panics
    ///
    /// Panics if neither an S3 client nor an object store was set.
    pub fn build(self) -> Config {
        Config {
            store: self.store.expect("client or store set"),
        }
    }
}
