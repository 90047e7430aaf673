//! Error types for the persistence codec and library file container.

use std::io;

/// Errors from reading or writing a unit tree.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("malformed container: {0}")]
    MalformedContainer(String),

    #[error("missing property `{name}` in unit `{unit}`")]
    MissingField { unit: String, name: String },

    #[error("unit `{unit}` has version {found}, this build reads at most {max}")]
    UnsupportedVersion { unit: String, found: f64, max: f64 },

    #[error("property `{name}` holds {value}, which is not a valid {kind}")]
    InvalidEnumValue {
        name: String,
        kind: &'static str,
        value: i64,
    },

    #[error("property `{name}` is {found}, expected {expected}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("property `{name}` is {value}; only finite numbers can be stored")]
    NonFiniteFloat { name: String, value: f64 },

    #[error("invalid library file magic bytes")]
    InvalidMagic,

    #[error("unsupported library file format {major}.{minor}")]
    UnsupportedFormat { major: u8, minor: u8 },

    #[error("content hash mismatch: file is corrupted")]
    HashMismatch,

    #[error("library file too short: need at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl StoreError {
    /// Build a [`StoreError::MalformedContainer`] from any displayable reason.
    pub fn malformed(reason: impl Into<String>) -> Self {
        StoreError::MalformedContainer(reason.into())
    }
}
