//! Job role keyword sources
//! Provides role keyword lookup from a directory of keyword files or from memory

pub mod source;

pub use source::{DirectoryKeywordSource, InMemoryKeywordSource, KeywordSource};
