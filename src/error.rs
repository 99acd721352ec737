//! Error handling for the resume screener

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Job role not found: {0}")]
    RoleNotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),

    #[error("Report generation error: {0}")]
    ReportGeneration(String),
}

pub type Result<T> = std::result::Result<T, ScreenerError>;

impl ScreenerError {
    /// Whether the caller can recover by picking another role or file
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ScreenerError::RoleNotFound(_)
                | ScreenerError::UnsupportedFormat(_)
                | ScreenerError::InvalidInput(_)
        )
    }
}

/// Convert askama rendering errors to our custom error type
impl From<askama::Error> for ScreenerError {
    fn from(err: askama::Error) -> Self {
        ScreenerError::OutputFormatting(err.to_string())
    }
}
