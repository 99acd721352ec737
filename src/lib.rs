//! Resume screener library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod keywords;
pub mod processing;
pub mod output;

pub use error::{Result, ScreenerError};
pub use config::Config;
pub use keywords::{DirectoryKeywordSource, InMemoryKeywordSource, KeywordSource};
pub use processing::analyzer::{AnalysisRun, CandidateResult, ResumeAnalyzer};
pub use processing::document::{KeywordSet, ResumeDocument};
