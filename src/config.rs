//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.interviewer.toml` files.

use crate::cli::{Args, Command, OutputFormat};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the current directory.
pub const CONFIG_FILENAME: &str = ".interviewer.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Question selection settings.
    #[serde(default)]
    pub selector: SelectorConfig,

    /// Performance report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Base directory for question files and candidate responses.
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,

    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            assets_dir: default_assets_dir(),
            verbose: false,
        }
    }
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("src/assets")
}

/// Question selection settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Pretty-print written question files.
    #[serde(default)]
    pub pretty: bool,

    /// Alternative catalog file used instead of the built-in questions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

/// Performance report settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Rendering format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Include pass/fail status per technology.
    #[serde(default = "default_true")]
    pub show_status: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            show_status: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(CONFIG_FILENAME);

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// Only values the user gave on the command line override the file.
    pub fn merge_with_args(&mut self, args: &Args) {
        if let Some(ref assets_dir) = args.assets_dir {
            self.general.assets_dir = assets_dir.clone();
        }

        if args.verbose {
            self.general.verbose = true;
        }

        match &args.command {
            Command::Select(select) => {
                if select.pretty {
                    self.selector.pretty = true;
                }
                if let Some(ref catalog) = select.catalog {
                    self.selector.catalog = Some(catalog.clone());
                }
            }
            Command::Perform(perform) => {
                if let Some(format) = perform.format {
                    self.report.format = format;
                }
                if perform.no_status {
                    self.report.show_status = false;
                }
            }
            Command::InitConfig => {}
        }
    }

    /// Log level after merging: `--quiet` wins, then `verbose` from either
    /// the command line or the config file.
    pub fn log_level(&self, args: &Args) -> tracing::Level {
        if args.quiet {
            tracing::Level::ERROR
        } else if self.general.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::PerformArgs;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.general.assets_dir, PathBuf::from("src/assets"));
        assert!(!config.selector.pretty);
        assert_eq!(config.report.format, OutputFormat::Text);
        assert!(config.report.show_status);
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[general]
assets_dir = "data"
verbose = true

[selector]
pretty = true
catalog = "catalog.json"

[report]
format = "markdown"
show_status = false
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.general.assets_dir, PathBuf::from("data"));
        assert!(config.general.verbose);
        assert!(config.selector.pretty);
        assert_eq!(config.selector.catalog, Some(PathBuf::from("catalog.json")));
        assert_eq!(config.report.format, OutputFormat::Markdown);
        assert!(!config.report.show_status);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[report]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.general.assets_dir, PathBuf::from("src/assets"));
        assert_eq!(config.report.format, OutputFormat::Json);
        assert!(config.report.show_status);
    }

    #[test]
    fn test_merge_with_args() {
        let mut config = Config::default();
        let args = Args {
            assets_dir: Some(PathBuf::from("fixtures")),
            config: None,
            verbose: true,
            quiet: false,
            command: Command::Perform(PerformArgs {
                path: vec!["angular".to_string()],
                format: Some(OutputFormat::Json),
                output: None,
                fail_below: false,
                no_status: true,
            }),
        };

        config.merge_with_args(&args);

        assert_eq!(config.general.assets_dir, PathBuf::from("fixtures"));
        assert!(config.general.verbose);
        assert_eq!(config.report.format, OutputFormat::Json);
        assert!(!config.report.show_status);
    }

    #[test]
    fn test_log_level() {
        let mut args = Args {
            assets_dir: None,
            config: None,
            verbose: false,
            quiet: false,
            command: Command::InitConfig,
        };

        let mut config = Config::default();
        config.merge_with_args(&args);
        assert_eq!(config.log_level(&args), tracing::Level::INFO);

        let mut config: Config = toml::from_str("[general]\nverbose = true\n").unwrap();
        config.merge_with_args(&args);
        assert_eq!(config.log_level(&args), tracing::Level::DEBUG);

        args.quiet = true;
        assert_eq!(config.log_level(&args), tracing::Level::ERROR);

        args.quiet = false;
        args.verbose = true;
        let mut config = Config::default();
        config.merge_with_args(&args);
        assert_eq!(config.log_level(&args), tracing::Level::DEBUG);
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[selector]"));
        assert!(toml_str.contains("[report]"));

        let reparsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(reparsed.general.assets_dir, PathBuf::from("src/assets"));
    }
}
