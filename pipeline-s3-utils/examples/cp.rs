/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::error::Error;
use std::path::PathBuf;
use std::str::FromStr;
use std::time;

use aws_smithy_types::error::display::DisplayErrorContext;
use clap::{CommandFactory, Parser};
use pipeline_s3_utils::types::S3Uri;

type BoxError = Box<dyn Error + Send + Sync>;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "cp")]
#[command(about = "Copies a local file to S3 or an S3 object to a local file.")]
pub struct Args {
    /// Source to copy from <S3Uri | Local>
    #[arg(required = true)]
    source: TransferUri,

    /// Destination to copy to <S3Uri | Local>
    #[arg(required = true)]
    dest: TransferUri,

    /// Region to use when none is configured in the environment
    #[arg(long)]
    region: Option<String>,

    /// Custom endpoint, e.g. a local S3-compatible server
    #[arg(long)]
    endpoint_url: Option<String>,
}

#[derive(Clone, Debug)]
enum TransferUri {
    /// Local filesystem source/destination
    Local(PathBuf),

    /// S3 source/destination
    S3(S3Uri),
}

impl FromStr for TransferUri {
    type Err = BoxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uri = if s.starts_with("s3://") {
            TransferUri::S3(s.parse()?)
        } else {
            TransferUri::Local(PathBuf::from(s))
        };
        Ok(uri)
    }
}

fn invalid_arg(message: &str) -> ! {
    Args::command()
        .error(clap::error::ErrorKind::InvalidValue, message)
        .exit()
}

async fn client(args: &Args) -> pipeline_s3_utils::Client {
    let mut loader = pipeline_s3_utils::from_env();
    if let Some(region) = &args.region {
        loader = loader.region(region);
    }
    if let Some(endpoint_url) = &args.endpoint_url {
        loader = loader.endpoint_url(endpoint_url).force_path_style(true);
    }
    pipeline_s3_utils::Client::new(loader.load().await)
}

async fn do_download(
    client: pipeline_s3_utils::Client,
    source: &S3Uri,
    dest: &PathBuf,
) -> Result<(), BoxError> {
    let start = time::Instant::now();
    let output = client
        .download_file()
        .bucket(source.bucket())
        .key(source.key())
        .destination(dest)
        .send()
        .await?;

    println!(
        "downloaded {} bytes from {source} to {} in {:?}",
        output.bytes_written(),
        output.destination().display(),
        start.elapsed(),
    );
    Ok(())
}

async fn do_upload(
    client: pipeline_s3_utils::Client,
    source: &PathBuf,
    dest: &S3Uri,
) -> Result<(), BoxError> {
    let start = time::Instant::now();
    let output = client
        .upload_file()
        .source(source)
        .bucket(dest.bucket())
        .key(dest.key())
        .send()
        .await?;

    println!(
        "uploaded {} bytes to {} in {:?}",
        output.content_length(),
        output.uri(),
        start.elapsed(),
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_thread_ids(true)
        .init();

    use TransferUri::*;
    let result = match (&args.source, &args.dest) {
        (Local(path), S3(uri)) => do_upload(client(&args).await, path, uri).await,
        (Local(_), Local(_)) => invalid_arg("local to local transfer not supported"),
        (S3(uri), Local(path)) => do_download(client(&args).await, uri, path).await,
        (S3(_), S3(_)) => invalid_arg("s3 to s3 transfer not supported"),
    };

    if let Err(ref err) = result {
        tracing::error!("transfer failed: {}", DisplayErrorContext(err.as_ref()));
    }
    result
}
