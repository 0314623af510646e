//! Defines [`PolylineError`], representing all errors returned by this crate.

use std::borrow::Cow;
use std::fmt::Debug;

use thiserror::Error;

/// Enum with all errors in this crate.
///
/// Every error is a deterministic function of the input, so retrying a failed call with the same
/// input always fails the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PolylineError {
    /// The leading varint encodes a format version other than [`FORMAT_VERSION`].
    ///
    /// [`FORMAT_VERSION`]: crate::FORMAT_VERSION
    #[error("Unsupported format version: {0}")]
    UnsupportedVersion(u64),

    /// A precision outside of `0..=15` was requested.
    #[error("Invalid precision: {0} (supported range is 0..=15)")]
    InvalidPrecision(u32),

    /// The encoded data is corrupt.
    ///
    /// Covers unmapped characters, unterminated or overflowing varints, an oversized header and
    /// coordinates truncated in the middle of a point.
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(Cow<'static, str>),
}

impl PolylineError {
    pub(crate) fn invalid_encoding(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidEncoding(msg.into())
    }
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, PolylineError>;
