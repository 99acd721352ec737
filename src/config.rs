//! Configuration management for the resume screener

use crate::error::{Result, ScreenerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_ELIGIBILITY_THRESHOLD: f64 = 60.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub keywords: KeywordConfig,
    pub scoring: ScoringConfig,
    pub processing: ProcessingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordConfig {
    /// Directory holding one `<role>.txt` keyword file per job role
    pub roles_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Minimum matched-skill percentage for a candidate to be eligible
    pub eligibility_threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    pub parallel: bool,
    pub enable_caching: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
    pub reports_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keywords: KeywordConfig {
                roles_dir: PathBuf::from("job_descriptions"),
            },
            scoring: ScoringConfig {
                eligibility_threshold: DEFAULT_ELIGIBILITY_THRESHOLD,
            },
            processing: ProcessingConfig {
                parallel: true,
                enable_caching: true,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
                reports_dir: PathBuf::from("reports"),
            },
        }
    }
}

impl Config {
    /// Load from `config_path`, writing defaults there on first use
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ScreenerError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ScreenerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-screener")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        validate_threshold(self.scoring.eligibility_threshold)
    }

    /// Set a single value by dotted key, e.g. `scoring.eligibility_threshold`
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "keywords.roles_dir" => self.keywords.roles_dir = PathBuf::from(value),
            "scoring.eligibility_threshold" => {
                let threshold = parse_value::<f64>(key, value)?;
                validate_threshold(threshold)?;
                self.scoring.eligibility_threshold = threshold;
            }
            "processing.parallel" => self.processing.parallel = parse_value(key, value)?,
            "processing.enable_caching" => self.processing.enable_caching = parse_value(key, value)?,
            "output.format" => {
                self.output.format = parse_output_format(value).map_err(ScreenerError::Configuration)?
            }
            "output.detailed" => self.output.detailed = parse_value(key, value)?,
            "output.color_output" => self.output.color_output = parse_value(key, value)?,
            "output.reports_dir" => self.output.reports_dir = PathBuf::from(value),
            _ => {
                return Err(ScreenerError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }
        Ok(())
    }
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> std::result::Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

pub fn validate_threshold(threshold: f64) -> Result<()> {
    if !(0.0..=100.0).contains(&threshold) {
        return Err(ScreenerError::Configuration(format!(
            "Eligibility threshold must be between 0 and 100, got {}",
            threshold
        )));
    }
    Ok(())
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.parse::<T>().map_err(|_| {
        ScreenerError::Configuration(format!("Invalid value for {}: {}", key, value))
    })
}
