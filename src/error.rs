//! Error types for the selector and performance pipelines.

use std::path::PathBuf;

/// Failures that abort a pipeline run.
///
/// Unrecognized score values are not errors; they are reported as warnings
/// by the aggregator.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize questions")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_message_includes_path() {
        let err = PipelineError::Read {
            path: PathBuf::from("src/assets/responses.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };

        assert!(err.to_string().contains("src/assets/responses.json"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
