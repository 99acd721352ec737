//! Skill-gap analysis: role keywords absent from a resume

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Set-based split of a role's distinct keywords into present and missing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GapAnalysis {
    /// Distinct keywords found in the resume, in keyword order
    pub matched: Vec<String>,
    /// Distinct keywords not found in the resume, in keyword order
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GapAnalyzer;

impl GapAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Keyword set minus resume token set.
    ///
    /// Membership is exact: `python` does not match `pythonic`. Duplicates on
    /// either side are collapsed.
    pub fn analyze<R, K>(&self, resume_tokens: &[R], keyword_tokens: &[K]) -> GapAnalysis
    where
        R: AsRef<str>,
        K: AsRef<str>,
    {
        let resume_set: HashSet<&str> = resume_tokens.iter().map(|t| t.as_ref()).collect();
        let mut seen = HashSet::new();
        let mut analysis = GapAnalysis::default();

        for keyword in keyword_tokens {
            let keyword: &str = keyword.as_ref();
            if !seen.insert(keyword) {
                continue;
            }
            if resume_set.contains(keyword) {
                analysis.matched.push(keyword.to_string());
            } else {
                analysis.missing.push(keyword.to_string());
            }
        }

        analysis
    }

    pub fn missing_skills<R, K>(&self, resume_tokens: &[R], keyword_tokens: &[K]) -> Vec<String>
    where
        R: AsRef<str>,
        K: AsRef<str>,
    {
        self.analyze(resume_tokens, keyword_tokens).missing
    }
}
