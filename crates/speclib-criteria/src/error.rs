//! Error types for criteria entries and the specification library.

use speclib_store::StoreError;

/// Errors from loading, saving, or managing specification entries.
#[derive(Debug, thiserror::Error)]
pub enum CriteriaError {
    /// Any format problem found while loading. The target is left untouched.
    #[error("invalid file format: {0}")]
    InvalidFileFormat(#[source] StoreError),

    /// A failure while saving, propagated unchanged from the codec.
    #[error(transparent)]
    Store(StoreError),

    #[error("`{0}` is a reserved name and cannot be used for an entry")]
    ReservedName(String),

    #[error("an entry named `{0}` already exists")]
    DuplicateEntry(String),

    #[error("entry `{0}` not found")]
    EntryNotFound(String),
}

impl CriteriaError {
    /// Wrap a codec error raised during a load.
    pub fn invalid_format(err: StoreError) -> Self {
        CriteriaError::InvalidFileFormat(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CriteriaError::invalid_format(StoreError::malformed("expected unit `X`"));
        assert!(err.to_string().starts_with("invalid file format"));

        let err = CriteriaError::ReservedName("HL-93".into());
        assert!(err.to_string().contains("reserved"));
    }

    #[test]
    fn source_is_preserved() {
        use std::error::Error;
        let err = CriteriaError::invalid_format(StoreError::MissingField {
            unit: "U".into(),
            name: "P".into(),
        });
        assert!(err.source().is_some());
    }
}
