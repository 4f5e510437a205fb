/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::display::DisplayErrorContext;
use aws_smithy_types::error::operation::BuildError;

use crate::error::{Error, ErrorKind};
use crate::types::S3Uri;

/// Types for downloading an object to a local file
pub mod download_file;

/// Types for uploading a local file
pub mod upload_file;

/// Types for uploading a value serialized as JSON
pub mod upload_json;

/// Types for downloading an object and parsing it as JSON
pub mod download_json;

/// Types for fetching object metadata
pub mod object_metadata;

/// Validate a required, non-empty string field of an operation input.
pub(crate) fn required_str(
    value: Option<String>,
    field: &'static str,
    details: &'static str,
) -> Result<String, BuildError> {
    match value {
        None => Err(BuildError::missing_field(field, details)),
        Some(value) if value.is_empty() => Err(BuildError::invalid_field(
            field,
            format!("{field} must not be empty"),
        )),
        Some(value) => Ok(value),
    }
}

/// Log a failed request against `uri` before it is handed back to the caller.
pub(crate) fn log_failure(operation: &str, uri: &S3Uri, err: &Error) {
    match err.kind() {
        ErrorKind::NotFound => {
            tracing::error!("{operation} failed: {uri} does not exist")
        }
        ErrorKind::AccessDenied => {
            tracing::error!("{operation} failed: access denied to {uri}; check IAM permissions")
        }
        _ => tracing::error!(
            "{operation} failed for {uri}: {}",
            DisplayErrorContext(err)
        ),
    }
}
