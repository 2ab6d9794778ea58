//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use crate::models::{Level, Technology};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Interviewer - question selection and performance summaries for interviews
///
/// Select interview questions by technology and level, then summarize a
/// candidate's recorded responses per technology.
///
/// Examples:
///   interviewer select --technologies Angular,RxJS --levels Beginner --filename angular-beginner-ana
///   interviewer perform --path angular,beginner,ana
///   interviewer perform --path angular,beginner,ana --format markdown --output ana.md
///   interviewer init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Base directory for question files and candidate responses
    ///
    /// Defaults to the config file value, or src/assets.
    #[arg(long, global = true, value_name = "DIR", env = "INTERVIEWER_ASSETS_DIR")]
    pub assets_dir: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .interviewer.toml in the current directory
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Run in quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Filter the question catalog and write the selection as JSON
    Select(SelectArgs),

    /// Summarize a candidate's recorded responses per technology
    Perform(PerformArgs),

    /// Generate a default .interviewer.toml configuration file
    InitConfig,
}

#[derive(clap::Args, Debug, Clone)]
pub struct SelectArgs {
    /// Technologies to include (comma-separated)
    ///
    /// Example: --technologies Angular,RxJS
    #[arg(long, required = true, value_name = "TECHS", value_delimiter = ',')]
    pub technologies: Vec<Technology>,

    /// Levels to include (comma-separated)
    ///
    /// Example: --levels Beginner,Intermediate
    #[arg(long, required = true, value_name = "LEVELS", value_delimiter = ',')]
    pub levels: Vec<Level>,

    /// Output file name inside the assets directory, without extension
    #[arg(long, value_name = "NAME")]
    pub filename: String,

    /// Question catalog to select from instead of the built-in one
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Pretty-print the written JSON
    #[arg(long)]
    pub pretty: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct PerformArgs {
    /// Path segments below the assets directory (comma-separated or repeated)
    ///
    /// Example: --path angular,beginner,ana reads angular/beginner/ana/responses.json.
    /// Without --path the responses.json directly in the assets directory is read.
    #[arg(long, value_name = "SEGMENTS", value_delimiter = ',')]
    pub path: Vec<String>,

    /// Output format (text, markdown, json)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Also write the rendered summary to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Exit with code 2 if any technology is below its thresholds
    #[arg(long)]
    pub fail_below: bool,

    /// Omit the pass/fail status from the summary
    #[arg(long)]
    pub no_status: bool,
}

/// Output format for the performance summary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text lines (default)
    #[default]
    Text,
    /// Markdown format
    Markdown,
    /// JSON format
    Json,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        match &self.command {
            Command::Select(select) => {
                if !is_path_segment(&select.filename) {
                    return Err(format!(
                        "Filename must be a single path segment: '{}'",
                        select.filename
                    ));
                }
            }
            Command::Perform(perform) => {
                if perform.path.iter().any(|segment| segment.trim().is_empty()) {
                    return Err("Path segments must not be empty".to_string());
                }
            }
            Command::InitConfig => {}
        }

        Ok(())
    }
}

/// Whether `name` is exactly one normal path component.
fn is_path_segment(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\'])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_select_args(filename: &str) -> Args {
        Args {
            assets_dir: None,
            config: None,
            verbose: false,
            quiet: false,
            command: Command::Select(SelectArgs {
                technologies: vec![Technology::Angular],
                levels: vec![Level::Beginner],
                filename: filename.to_string(),
                catalog: None,
                pretty: false,
            }),
        }
    }

    #[test]
    fn test_parse_select() {
        let args = Args::try_parse_from([
            "interviewer",
            "select",
            "--technologies",
            "Angular,RxJS",
            "--levels",
            "Beginner",
            "--filename",
            "angular-beginner-ana",
        ])
        .unwrap();

        match args.command {
            Command::Select(select) => {
                assert_eq!(select.technologies, vec![Technology::Angular, Technology::RxJS]);
                assert_eq!(select.levels, vec![Level::Beginner]);
                assert_eq!(select.filename, "angular-beginner-ana");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_perform_segments() {
        let args = Args::try_parse_from([
            "interviewer",
            "perform",
            "--path",
            "angular,beginner",
            "--path",
            "ana",
            "--format",
            "json",
        ])
        .unwrap();

        match args.command {
            Command::Perform(perform) => {
                assert_eq!(perform.path, vec!["angular", "beginner", "ana"]);
                assert_eq!(perform.format, Some(OutputFormat::Json));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_technology() {
        let result = Args::try_parse_from([
            "interviewer",
            "select",
            "--technologies",
            "Vue",
            "--levels",
            "Beginner",
            "--filename",
            "x",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_filename() {
        assert!(make_select_args("angular-beginner").validate().is_ok());
        assert!(make_select_args("nested/name").validate().is_err());
        assert!(make_select_args("..").validate().is_err());
        assert!(make_select_args("").validate().is_err());
    }

    #[test]
    fn test_validation_conflicting_options() {
        let mut args = make_select_args("out");
        args.verbose = true;
        args.quiet = true;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_parse_perform_without_path() {
        let args = Args::try_parse_from(["interviewer", "perform"]).unwrap();

        match args.command {
            Command::Perform(perform) => assert!(perform.path.is_empty()),
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(Args::try_parse_from(["interviewer", "perform"]).unwrap().validate().is_ok());
    }
}
