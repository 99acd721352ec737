//! Document structures consumed by the matching engine

use crate::processing::normalizer::{TextNormalizer, Token};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A resume as seen by the engine: its name, raw text, and derived tokens
#[derive(Debug, Clone)]
pub struct ResumeDocument {
    pub name: String,
    pub text: String,
    pub tokens: Vec<Token>,
}

impl ResumeDocument {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let tokens = TextNormalizer::new().tokenize(&text);

        Self {
            name: name.into(),
            text,
            tokens,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Required-skill tokens for one job role.
///
/// Token order and duplicates are kept: repeated keywords weigh more in
/// similarity and eligibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordSet {
    pub role: String,
    tokens: Vec<Token>,
}

impl KeywordSet {
    /// Build from keyword text such as `"python sql docker"`
    pub fn from_text(role: impl Into<String>, text: &str) -> Self {
        Self {
            role: role.into(),
            tokens: TextNormalizer::new().tokenize(text),
        }
    }

    /// Build from keyword lines, collapsing them into one space-joined text
    pub fn from_lines<S: AsRef<str>>(role: impl Into<String>, lines: &[S]) -> Self {
        let text = lines
            .iter()
            .map(|line| line.as_ref())
            .collect::<Vec<_>>()
            .join(" ");
        Self::from_text(role, &text)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Keyword text as the scorer sees it
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }

    /// Distinct keywords in first-occurrence order
    pub fn unique_tokens(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.tokens
            .iter()
            .map(String::as_str)
            .filter(|token| seen.insert(*token))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
