//! Question selection.
//!
//! Filters the question catalog by technology and level and writes the
//! selection as a JSON file into the assets directory.

use crate::error::PipelineError;
use crate::models::{InterviewQuestion, Level, Technology};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Options for creating an interview question file.
#[derive(Debug, Clone)]
pub struct SelectionOptions {
    /// Technologies to keep.
    pub technologies: HashSet<Technology>,
    /// Levels to keep.
    pub levels: HashSet<Level>,
    /// Output file name, without the `.json` extension.
    pub filename: String,
    /// Pretty-print the written JSON.
    pub pretty: bool,
}

/// Keep questions matching both a selected technology and a selected level.
///
/// Input order is preserved.
pub fn select_questions(
    all_questions: &[InterviewQuestion],
    technologies: &HashSet<Technology>,
    levels: &HashSet<Level>,
) -> Vec<InterviewQuestion> {
    all_questions
        .iter()
        .filter(|q| technologies.contains(&q.technology) && levels.contains(&q.level))
        .cloned()
        .collect()
}

/// Location of the selection output file.
pub fn output_path(assets_dir: &Path, filename: &str) -> PathBuf {
    assets_dir.join(format!("{}.json", filename))
}

/// Serialize a selection of questions.
pub fn to_json(questions: &[InterviewQuestion], pretty: bool) -> Result<String, PipelineError> {
    let json = if pretty {
        serde_json::to_string_pretty(questions)?
    } else {
        serde_json::to_string(questions)?
    };
    Ok(json)
}

/// Filter the catalog and write the selection, overwriting any existing file.
///
/// The assets directory is not created; a missing directory fails the write.
/// Returns the written path and the number of questions selected.
pub async fn create_interview_questions(
    catalog: &[InterviewQuestion],
    assets_dir: &Path,
    options: &SelectionOptions,
) -> Result<(PathBuf, usize), PipelineError> {
    let selected = select_questions(catalog, &options.technologies, &options.levels);
    debug!(
        "Selected {} of {} questions",
        selected.len(),
        catalog.len()
    );

    let data = to_json(&selected, options.pretty)?;
    let path = output_path(assets_dir, &options.filename);

    tokio::fs::write(&path, data)
        .await
        .map_err(|source| PipelineError::Write {
            path: path.clone(),
            source,
        })?;

    info!("Wrote {} questions to {}", selected.len(), path.display());
    Ok((path, selected.len()))
}
