//! The built-in question catalog.

use crate::error::PipelineError;
use crate::models::InterviewQuestion;
use std::path::Path;
use tracing::info;

const BUILTIN_CATALOG: &str = include_str!("../assets/questions.json");

/// Parse the catalog embedded in the binary.
pub fn builtin() -> Result<Vec<InterviewQuestion>, PipelineError> {
    serde_json::from_str(BUILTIN_CATALOG).map_err(|source| PipelineError::Parse {
        path: "assets/questions.json".into(),
        source,
    })
}

/// Load a catalog file with the same format as the built-in one.
pub async fn load(path: &Path) -> Result<Vec<InterviewQuestion>, PipelineError> {
    info!("Loading question catalog from {}", path.display());

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| PipelineError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_str(&content).map_err(|source| PipelineError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Level, Technology};
    use tempfile::TempDir;

    #[test]
    fn test_builtin_catalog_parses() {
        let questions = builtin().unwrap();
        assert!(!questions.is_empty());
    }

    #[test]
    fn test_builtin_catalog_covers_every_technology() {
        let questions = builtin().unwrap();
        for technology in [
            Technology::JavaScript,
            Technology::DOM,
            Technology::TypeScript,
            Technology::Angular,
            Technology::Redux,
            Technology::NgRx,
            Technology::RxJS,
        ] {
            assert!(
                questions.iter().any(|q| q.technology == technology),
                "no question for {}",
                technology
            );
        }
        assert!(questions.iter().any(|q| q.level == Level::Advanced));
    }

    #[test]
    fn test_load_catalog_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        let questions = vec![InterviewQuestion::new("What is JSX?", Level::Beginner, Technology::Redux)];
        std::fs::write(&path, serde_json::to_string(&questions).unwrap()).unwrap();

        let loaded = tokio_test::block_on(load(&path)).unwrap();
        assert_eq!(loaded, questions);
    }

    #[test]
    fn test_load_invalid_catalog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "not json").unwrap();

        let result = tokio_test::block_on(load(&path));
        assert!(matches!(result, Err(PipelineError::Parse { .. })));
    }
}
