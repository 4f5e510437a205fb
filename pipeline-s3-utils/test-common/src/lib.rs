/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use pipeline_s3_utils::store::InMemoryStore;
use tempfile::TempDir;

/// Random alphanumeric content of the given size
pub fn rand_data(size: usize) -> Bytes {
    std::iter::repeat_with(fastrand::alphanumeric)
        .take(size)
        .map(|x| x as u8)
        .collect::<Vec<_>>()
        .into()
}

/// Create a temporary directory containing a single file `name` with `contents`.
///
/// Returns the directory (which removes itself when dropped) and the path of the file.
pub fn create_test_file(name: &str, contents: &[u8]) -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, contents).unwrap();
    (temp_dir, path)
}

/// A client backed by a fresh in-memory store.
///
/// The store is returned as well so tests can inspect what was written.
pub fn in_memory_client() -> (pipeline_s3_utils::Client, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    let config = pipeline_s3_utils::Config::builder()
        .shared_store(store.clone())
        .build();
    (pipeline_s3_utils::Client::new(config), store)
}
