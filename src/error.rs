//! Error types for loading and querying reports.

use std::path::PathBuf;

/// Errors surfaced by report loading and source lookup.
///
/// Input errors are fatal and happen before any query runs. [`ViewerError::NotFound`]
/// is the only error a query itself can produce.
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    /// The report file is missing or cannot be read.
    #[error("failed to read report {}: {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report content does not match the osv-scanner output shape.
    #[error("failed to parse report {}: {source}", path.display())]
    InputMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No scanned source has the requested identifier.
    #[error("no such source: {id}")]
    NotFound { id: String },
}

pub type Result<T> = std::result::Result<T, ViewerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ViewerError::NotFound {
            id: "abcdef012345".to_string(),
        };
        assert_eq!(err.to_string(), "no such source: abcdef012345");
    }

    #[test]
    fn test_input_unavailable_message() {
        let err = ViewerError::InputUnavailable {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().starts_with("failed to read report missing.json"));
    }
}
