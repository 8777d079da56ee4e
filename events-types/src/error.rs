//! Error types for event decoding.

use thiserror::Error;

/// Errors that can occur while decoding host deliveries.
///
/// Decoding a [`crate::RawEvent`] into a [`crate::SystemEvent`] never fails;
/// these only surface when the raw delivery itself cannot be read.
#[derive(Debug, Error)]
pub enum EventError {
    /// An extra was given in a form that cannot be parsed
    #[error("invalid extra {0:?}: expected KEY=VALUE")]
    InvalidExtra(String),
}
