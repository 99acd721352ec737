//! Eligibility classification from the matched-skill percentage

use crate::config::DEFAULT_ELIGIBILITY_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Eligibility {
    /// Share of keyword occurrences found in the resume, 0-100
    pub matched_percentage: f64,
    /// Keyword occurrences found, duplicates counted
    pub matched_count: usize,
    /// Total keyword occurrences
    pub keyword_count: usize,
    pub eligible: bool,
}

impl Eligibility {
    pub fn unmatched_count(&self) -> usize {
        self.keyword_count - self.matched_count
    }
}

/// Labels a candidate eligible when enough keyword occurrences appear in the resume.
///
/// Unlike gap analysis this counts every keyword occurrence, so a keyword listed
/// twice for a role weighs twice.
#[derive(Debug, Clone, Copy)]
pub struct EligibilityClassifier {
    threshold: f64,
}

impl Default for EligibilityClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_ELIGIBILITY_THRESHOLD)
    }
}

impl EligibilityClassifier {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn classify<R, K>(&self, resume_tokens: &[R], keyword_tokens: &[K]) -> Eligibility
    where
        R: AsRef<str>,
        K: AsRef<str>,
    {
        let keyword_count = keyword_tokens.len();
        if keyword_count == 0 {
            return Eligibility {
                matched_percentage: 0.0,
                matched_count: 0,
                keyword_count: 0,
                eligible: false,
            };
        }

        let resume_set: HashSet<&str> = resume_tokens.iter().map(|t| t.as_ref()).collect();
        let matched_count = keyword_tokens
            .iter()
            .filter(|keyword| {
                let keyword: &str = (*keyword).as_ref();
                resume_set.contains(keyword)
            })
            .count();

        // Multiply before dividing so 3 of 5 lands on exactly 60.0
        let matched_percentage = (matched_count * 100) as f64 / keyword_count as f64;

        Eligibility {
            matched_percentage,
            matched_count,
            keyword_count,
            eligible: matched_percentage >= self.threshold,
        }
    }
}
