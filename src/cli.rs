//! CLI interface for the resume screener

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-screener")]
#[command(about = "Score resumes against job role keywords and rank candidates")]
#[command(long_about = "Match one or more resumes against a job role's required skills, report missing skills and eligibility, and rank the candidates")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score resumes against a job role and rank them
    Analyze {
        /// Job role identifier (keyword file name without .txt)
        #[arg(short, long)]
        role: String,

        /// Resume files (PDF, TXT, MD)
        #[arg(required = true)]
        resumes: Vec<PathBuf>,

        /// Directory of role keyword files
        #[arg(long)]
        roles_dir: Option<PathBuf>,

        /// Eligibility threshold in percent of matched skills
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file, or into a directory under a generated name
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Write a PDF feedback report per candidate
        #[arg(long)]
        feedback: bool,

        /// Directory for feedback reports (defaults to output.reports_dir)
        #[arg(long)]
        feedback_dir: Option<PathBuf>,

        /// Include resume text with highlighted skills
        #[arg(short, long)]
        detailed: bool,

        /// Score candidates one at a time
        #[arg(long)]
        sequential: bool,
    },

    /// Job role keyword commands
    Roles {
        #[command(subcommand)]
        action: RoleAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum RoleAction {
    /// List available job roles
    List {
        /// Directory of role keyword files
        #[arg(long)]
        roles_dir: Option<PathBuf>,
    },

    /// Show a role's keywords
    Show {
        /// Job role identifier
        role: String,

        /// Directory of role keyword files
        #[arg(long)]
        roles_dir: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "scoring.eligibility_threshold")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_file_extension() {
        let allowed = ["pdf", "txt", "md"];
        assert!(validate_file_extension(Path::new("cv.PDF"), &allowed).is_ok());
        assert!(validate_file_extension(Path::new("cv.docx"), &allowed).is_err());
        assert!(validate_file_extension(Path::new("cv"), &allowed).is_err());
    }

    #[test]
    fn test_parse_analyze_command() {
        let cli = Cli::parse_from([
            "resume-screener",
            "analyze",
            "--role",
            "data_scientist",
            "a.pdf",
            "b.txt",
            "--threshold",
            "70",
        ]);

        match cli.command {
            Commands::Analyze { role, resumes, threshold, sequential, .. } => {
                assert_eq!(role, "data_scientist");
                assert_eq!(resumes, vec![PathBuf::from("a.pdf"), PathBuf::from("b.txt")]);
                assert_eq!(threshold, Some(70.0));
                assert!(!sequential);
            }
            _ => panic!("expected analyze command"),
        }
    }

    #[test]
    fn test_analyze_requires_resumes() {
        assert!(Cli::try_parse_from(["resume-screener", "analyze", "--role", "qa"]).is_err());
    }
}
