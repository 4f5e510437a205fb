/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

use aws_sdk_s3::error::ProvideErrorMetadata;

/// Errors returned by this library
///
/// The error reported by the object store (e.g. the AWS SDK error) is kept unchanged and is
/// available through [`std::error::Error::source`].
///
/// NOTE: Use [`aws_smithy_types::error::display::DisplayErrorContext`] or similar to display
/// the entire error cause/source chain.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

/// General categories of storage errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Operation input validation issues
    InputInvalid,

    /// Local I/O errors (missing or unreadable file, failed write, broken body stream)
    IOError,

    /// The bucket or object does not exist
    NotFound,

    /// Credentials are missing, invalid or lack permission for the request
    AccessDenied,

    /// A value could not be serialized to, or deserialized from, JSON
    SerializationFailed,

    /// Any other failure reported by the object store
    ServiceError,
}

impl Error {
    /// Creates a new storage [`Error`] from a known kind of error as well as an arbitrary error
    /// source.
    pub fn new<E>(kind: ErrorKind, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            source: err.into(),
        }
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns true if the requested bucket or object does not exist.
    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InputInvalid => write!(f, "invalid input"),
            ErrorKind::IOError => write!(f, "I/O error"),
            ErrorKind::NotFound => write!(f, "resource not found"),
            ErrorKind::AccessDenied => write!(f, "access denied"),
            ErrorKind::SerializationFailed => write!(f, "JSON serialization failed"),
            ErrorKind::ServiceError => write!(f, "object store request failed"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::new(ErrorKind::IOError, value)
    }
}

impl From<aws_smithy_types::byte_stream::error::Error> for Error {
    fn from(value: aws_smithy_types::byte_stream::error::Error) -> Self {
        Self::new(ErrorKind::IOError, value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::new(ErrorKind::SerializationFailed, value)
    }
}

impl From<aws_smithy_types::error::operation::BuildError> for Error {
    fn from(value: aws_smithy_types::error::operation::BuildError) -> Self {
        Self::new(ErrorKind::InputInvalid, value)
    }
}

pub(crate) fn invalid_input<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::InputInvalid, err)
}

pub(crate) fn not_found<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::NotFound, err)
}

/// Classify an S3 error code
fn kind_for_code(code: Option<&str>) -> ErrorKind {
    match code {
        Some("NotFound" | "NoSuchKey" | "NoSuchBucket") => ErrorKind::NotFound,
        Some(
            "AccessDenied"
            | "Forbidden"
            | "InvalidAccessKeyId"
            | "SignatureDoesNotMatch"
            | "ExpiredToken"
            | "InvalidToken",
        ) => ErrorKind::AccessDenied,
        _ => ErrorKind::ServiceError,
    }
}

impl<E, R> From<aws_sdk_s3::error::SdkError<E, R>> for Error
where
    E: std::error::Error + ProvideErrorMetadata + Send + Sync + 'static,
    R: Send + Sync + fmt::Debug + 'static,
{
    fn from(value: aws_sdk_s3::error::SdkError<E, R>) -> Self {
        let kind = kind_for_code(value.code());
        Error::new(kind, value)
    }
}
