//! Response aggregation.
//!
//! This module groups recorded responses by technology and folds each group
//! into a `GroupPerformance`.

use super::scoring::{convert_score, ScoreError};
use super::thresholds::{min_knowledge_count, min_practice_count};
use crate::error::PipelineError;
use crate::models::{
    AggregateGroup, AggregatedPerformance, GroupPerformance, InterviewQuestion, Score, Technology,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Fixed name of the response file inside a candidate directory.
pub const RESPONSES_FILENAME: &str = "responses.json";

/// Options for computing the performance of one candidate.
#[derive(Debug, Clone, Default)]
pub struct PerformanceOptions {
    /// Path segments below the assets directory, e.g. `["angular", "beginner", "ana"]`.
    pub path: Vec<String>,
}

/// Which score of a response a warning refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreField {
    Knowledge,
    Practice,
}

impl fmt::Display for ScoreField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreField::Knowledge => write!(f, "knowledgeScore"),
            ScoreField::Practice => write!(f, "practiceScore"),
        }
    }
}

/// A response whose score was missing or outside the known levels and
/// counted as zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreWarning {
    pub technology: Technology,
    pub question: String,
    pub field: ScoreField,
    /// The recorded value, `None` when the score is missing.
    pub raw: Option<serde_json::Value>,
}

impl fmt::Display for ScoreWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.raw {
            Some(raw) => write!(
                f,
                "{} {} of \"{}\" is not a known score: {}",
                self.technology, self.field, self.question, raw
            ),
            None => write!(
                f,
                "{} {} of \"{}\" is missing",
                self.technology, self.field, self.question
            ),
        }
    }
}

/// Result of aggregating a response set.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    pub performance: AggregatedPerformance,
    pub warnings: Vec<ScoreWarning>,
}

/// Group responses by technology, in technology order.
pub fn group_by_technology(
    responses: &[InterviewQuestion],
) -> BTreeMap<Technology, Vec<&InterviewQuestion>> {
    let mut grouped: BTreeMap<Technology, Vec<&InterviewQuestion>> = BTreeMap::new();

    for response in responses {
        grouped.entry(response.technology).or_default().push(response);
    }

    grouped
}

/// Aggregate responses into per-technology performance.
///
/// Only technologies present in `responses` get an entry.
pub fn aggregate_performance(responses: &[InterviewQuestion]) -> Aggregation {
    let mut aggregation = Aggregation::default();

    for (technology, group) in group_by_technology(responses) {
        let total_questions = group.len();
        let min_practice = min_practice_count(total_questions);
        let min_knowledge = min_knowledge_count(total_questions);

        let folded = group
            .iter()
            .fold(AggregateGroup::default(), |acc, response| AggregateGroup {
                current_knowledge: acc.current_knowledge
                    + score_or_zero(response, ScoreField::Knowledge, &mut aggregation.warnings),
                current_practice: acc.current_practice
                    + score_or_zero(response, ScoreField::Practice, &mut aggregation.warnings),
            });

        debug!(
            "{}: {} questions, knowledge {}/{}, practice {}/{}",
            technology,
            total_questions,
            folded.current_knowledge,
            min_knowledge,
            folded.current_practice,
            min_practice
        );

        aggregation.performance.insert(
            technology,
            GroupPerformance::new(folded, min_knowledge, min_practice, total_questions),
        );
    }

    aggregation
}

/// Numeric value of one score, zero (with a recorded warning) when missing or
/// unrecognized.
fn score_or_zero(
    response: &InterviewQuestion,
    field: ScoreField,
    warnings: &mut Vec<ScoreWarning>,
) -> f64 {
    let score: Option<&Score> = match field {
        ScoreField::Knowledge => response.knowledge_score.as_ref(),
        ScoreField::Practice => response.practice_score.as_ref(),
    };

    match convert_score(score) {
        Ok(value) => value,
        Err(err) => {
            let warning = ScoreWarning {
                technology: response.technology,
                question: response.question.clone(),
                field,
                raw: match err {
                    ScoreError::Unrecognized(raw) => Some(raw),
                    ScoreError::Missing => None,
                },
            };
            warn!("{}", warning);
            warnings.push(warning);
            0.0
        }
    }
}

/// Location of the response file for the given path segments.
pub fn responses_path(assets_dir: &Path, segments: &[String]) -> PathBuf {
    let mut path = assets_dir.to_path_buf();
    path.extend(segments);
    path.push(RESPONSES_FILENAME);
    path
}

/// Parse a response file's contents.
pub fn parse_responses(content: &str, path: &Path) -> Result<Vec<InterviewQuestion>, PipelineError> {
    serde_json::from_str(content).map_err(|source| PipelineError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the response file of one candidate and aggregate it.
pub async fn compute_performance(
    assets_dir: &Path,
    options: &PerformanceOptions,
) -> Result<Aggregation, PipelineError> {
    let path = responses_path(assets_dir, &options.path);
    info!("Reading responses from {}", path.display());

    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| PipelineError::Read {
            path: path.clone(),
            source,
        })?;

    let responses = parse_responses(&content, &path)?;
    debug!("Parsed {} responses", responses.len());

    Ok(aggregate_performance(&responses))
}

/// Technologies whose performance is below either threshold.
pub fn failing_technologies(performance: &AggregatedPerformance) -> Vec<Technology> {
    performance
        .iter()
        .filter(|(_, group)| !group.passed())
        .map(|(technology, _)| *technology)
        .collect()
}
