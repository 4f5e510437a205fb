/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

// These tests talk to a real bucket. They are skipped unless RUN_LIVE_TESTS is set and
// PIPELINE_S3_UTILS_TEST_BUCKET names a bucket the ambient credentials can write to.

use pipeline_s3_utils::test_env::TestEnv;
use test_common::{create_test_file, rand_data};

const BUCKET_ENV: &str = "PIPELINE_S3_UTILS_TEST_BUCKET";
const KEY_PREFIX: &str = "pipeline-s3-utils/e2e/";

async fn live_client() -> Option<(pipeline_s3_utils::Client, String)> {
    if !TestEnv::from_env().live_tests_enabled() {
        eprintln!("skipping: live tests are disabled");
        return None;
    }
    let Ok(bucket) = std::env::var(BUCKET_ENV) else {
        eprintln!("skipping: {BUCKET_ENV} is not set");
        return None;
    };
    let config = pipeline_s3_utils::from_env().load().await;
    Some((pipeline_s3_utils::Client::new(config), bucket))
}

fn unique_key(name: &str) -> String {
    format!("{KEY_PREFIX}{}-{name}", fastrand::u64(..))
}

#[tokio::test]
async fn test_live_file_round_trip() {
    let Some((client, bucket)) = live_client().await else {
        return;
    };

    let contents = rand_data(64 * 1024);
    let (_src_dir, source) = create_test_file("upload.bin", &contents);
    let key = unique_key("upload.bin");

    client
        .upload_file()
        .source(&source)
        .bucket(&bucket)
        .key(&key)
        .send()
        .await
        .unwrap();

    let dest_dir = tempfile::tempdir().unwrap();
    let dest = dest_dir.path().join("download.bin");
    client
        .download_file()
        .bucket(&bucket)
        .key(&key)
        .destination(&dest)
        .send()
        .await
        .unwrap();

    assert_eq!(&contents[..], &std::fs::read(&dest).unwrap()[..]);
}

#[tokio::test]
async fn test_live_json_round_trip() {
    let Some((client, bucket)) = live_client().await else {
        return;
    };

    let data = serde_json::json!({"job_name": "e2e", "segments": [1, 2, 3]});
    let key = unique_key("data.json");
    client
        .upload_json()
        .bucket(&bucket)
        .key(&key)
        .body(&data)
        .send()
        .await
        .unwrap();

    let downloaded: serde_json::Value = client
        .download_json()
        .bucket(&bucket)
        .key(&key)
        .send()
        .await
        .unwrap();
    assert_eq!(data, downloaded);
}

#[tokio::test]
async fn test_live_missing_object() {
    let Some((client, bucket)) = live_client().await else {
        return;
    };

    let dest_dir = tempfile::tempdir().unwrap();
    let dest = dest_dir.path().join("missing.bin");
    let err = client
        .download_file()
        .bucket(&bucket)
        .key(unique_key("never-uploaded"))
        .destination(&dest)
        .send()
        .await
        .unwrap_err();

    assert!(err.is_not_found(), "{err:?}");
    assert!(!dest.exists());
}
