//! Data models for interview questions and performance summaries.
//!
//! This module contains the closed enumerations used to classify questions
//! and the records produced by the performance aggregator.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Difficulty classification of a question.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[value(rename_all = "verbatim")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Beginner => write!(f, "Beginner"),
            Level::Intermediate => write!(f, "Intermediate"),
            Level::Advanced => write!(f, "Advanced"),
        }
    }
}

/// Subject-matter tag a question or response is classified under.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[value(rename_all = "verbatim")]
pub enum Technology {
    JavaScript,
    #[allow(clippy::upper_case_acronyms)]
    DOM,
    TypeScript,
    Angular,
    Redux,
    NgRx,
    RxJS,
}

impl fmt::Display for Technology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Technology::JavaScript => "JavaScript",
            Technology::DOM => "DOM",
            Technology::TypeScript => "TypeScript",
            Technology::Angular => "Angular",
            Technology::Redux => "Redux",
            Technology::NgRx => "NgRx",
            Technology::RxJS => "RxJS",
        };
        f.write_str(name)
    }
}

/// Self-reported familiarity on a 4-point ordinal scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ScoreLevel {
    NotFamiliar,
    Elementary,
    Intermediate,
    Advanced,
}

impl fmt::Display for ScoreLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreLevel::NotFamiliar => write!(f, "NotFamiliar"),
            ScoreLevel::Elementary => write!(f, "Elementary"),
            ScoreLevel::Intermediate => write!(f, "Intermediate"),
            ScoreLevel::Advanced => write!(f, "Advanced"),
        }
    }
}

/// A recorded score as found in a response file.
///
/// Response files are hand-edited, so a score may carry a value outside the
/// `ScoreLevel` domain. Such values are kept verbatim instead of failing the
/// whole parse; the aggregator treats them as zero and reports a warning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Known(ScoreLevel),
    Unrecognized(serde_json::Value),
}

impl From<ScoreLevel> for Score {
    fn from(level: ScoreLevel) -> Self {
        Score::Known(level)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Known(level) => write!(f, "{}", level),
            Score::Unrecognized(raw) => write!(f, "{}", raw),
        }
    }
}

/// A single interview question, optionally carrying recorded scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewQuestion {
    /// The question text.
    pub question: String,
    pub level: Level,
    pub technology: Technology,
    /// How well the candidate knows the topic. Absent until scored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knowledge_score: Option<Score>,
    /// How much hands-on practice the candidate has with the topic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub practice_score: Option<Score>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

/// Running sum of numeric scores for one technology group.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateGroup {
    pub current_knowledge: f64,
    pub current_practice: f64,
}

/// Summed scores of one technology group together with its floor thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPerformance {
    pub current_knowledge: f64,
    pub current_practice: f64,
    pub min_knowledge: f64,
    pub min_practice: f64,
    pub total_questions: usize,
}

impl GroupPerformance {
    /// Combines a folded group with the thresholds derived from its size.
    pub fn new(
        group: AggregateGroup,
        min_knowledge: f64,
        min_practice: f64,
        total_questions: usize,
    ) -> Self {
        Self {
            current_knowledge: group.current_knowledge,
            current_practice: group.current_practice,
            min_knowledge,
            min_practice,
            total_questions,
        }
    }

    pub fn meets_knowledge(&self) -> bool {
        self.current_knowledge >= self.min_knowledge
    }

    pub fn meets_practice(&self) -> bool {
        self.current_practice >= self.min_practice
    }

    /// Whether both knowledge and practice reach their thresholds.
    pub fn passed(&self) -> bool {
        self.meets_knowledge() && self.meets_practice()
    }
}

/// Per-technology performance, one entry per technology seen in the input.
pub type AggregatedPerformance = BTreeMap<Technology, GroupPerformance>;

#[cfg(test)]
impl InterviewQuestion {
    pub fn new(question: impl Into<String>, level: Level, technology: Technology) -> Self {
        Self {
            question: question.into(),
            level,
            technology,
            knowledge_score: None,
            practice_score: None,
            note: None,
            hint: None,
        }
    }

    pub fn scored(mut self, knowledge: impl Into<Score>, practice: impl Into<Score>) -> Self {
        self.knowledge_score = Some(knowledge.into());
        self.practice_score = Some(practice.into());
        self
    }
}
