//! Analysis pipeline: scores, gaps and eligibility per resume, then ranking

use crate::config::Config;
use crate::error::Result;
use crate::keywords::KeywordSource;
use crate::processing::document::{KeywordSet, ResumeDocument};
use crate::processing::eligibility::EligibilityClassifier;
use crate::processing::gaps::GapAnalyzer;
use crate::processing::ranker::Ranker;
use crate::processing::similarity::SimilarityScorer;
use log::{debug, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Outcome for one resume in one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateResult {
    pub name: String,
    /// Position of the resume in the submitted batch
    pub submission_index: usize,
    /// Cosine similarity x 100, two decimals
    pub score: f64,
    pub matched_percentage: f64,
    pub matched_count: usize,
    pub keyword_count: usize,
    /// Distinct role keywords present in the resume
    pub matched_skills: Vec<String>,
    /// Distinct role keywords absent from the resume
    pub missing_skills: Vec<String>,
    pub eligible: bool,
    /// Resume or keyword text was empty; all values are the defined zeros
    pub degenerate_input: bool,
}

impl CandidateResult {
    pub fn unmatched_count(&self) -> usize {
        self.keyword_count - self.matched_count
    }
}

/// Ranked results for one role and one batch of resumes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRun {
    pub role: String,
    pub eligibility_threshold: f64,
    /// Best first
    pub candidates: Vec<CandidateResult>,
    pub processing_time_ms: u64,
}

impl AnalysisRun {
    pub fn best_candidate(&self) -> Option<&CandidateResult> {
        Ranker::new().best(&self.candidates)
    }

    pub fn eligible_count(&self) -> usize {
        self.candidates.iter().filter(|c| c.eligible).count()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Runs the matching engine over resumes for a role
pub struct ResumeAnalyzer {
    scorer: SimilarityScorer,
    gap_analyzer: GapAnalyzer,
    classifier: EligibilityClassifier,
    ranker: Ranker,
    parallel: bool,
}

impl Default for ResumeAnalyzer {
    fn default() -> Self {
        Self::new(EligibilityClassifier::default())
    }
}

impl ResumeAnalyzer {
    pub fn new(classifier: EligibilityClassifier) -> Self {
        Self {
            scorer: SimilarityScorer::new(),
            gap_analyzer: GapAnalyzer::new(),
            classifier,
            ranker: Ranker::new(),
            parallel: true,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(EligibilityClassifier::new(config.scoring.eligibility_threshold))
            .with_parallel(config.processing.parallel)
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.classifier.threshold()
    }

    /// Analyze one resume against a role's keywords
    pub fn analyze(&self, resume: &ResumeDocument, keywords: &KeywordSet) -> CandidateResult {
        self.analyze_at(0, resume, keywords)
    }

    fn analyze_at(&self, index: usize, resume: &ResumeDocument, keywords: &KeywordSet) -> CandidateResult {
        let degenerate_input = resume.is_empty() || keywords.is_empty();
        if degenerate_input {
            warn!(
                "Empty input for '{}' against role '{}'; scoring as no match",
                resume.name, keywords.role
            );
        }

        let score = self.scorer.score(&resume.tokens, keywords.tokens());
        let gaps = self.gap_analyzer.analyze(&resume.tokens, keywords.tokens());
        let eligibility = self.classifier.classify(&resume.tokens, keywords.tokens());

        debug!(
            "{}: score {:.2}, matched {:.1}%, {} missing",
            resume.name,
            score,
            eligibility.matched_percentage,
            gaps.missing.len()
        );

        CandidateResult {
            name: resume.name.clone(),
            submission_index: index,
            score,
            matched_percentage: eligibility.matched_percentage,
            matched_count: eligibility.matched_count,
            keyword_count: eligibility.keyword_count,
            matched_skills: gaps.matched,
            missing_skills: gaps.missing,
            eligible: eligibility.eligible,
            degenerate_input,
        }
    }

    /// Analyze a batch and rank it. Candidates are independent, so they are
    /// scored in parallel unless disabled; results keep submission order
    /// before ranking.
    pub fn analyze_batch(&self, keywords: &KeywordSet, resumes: &[ResumeDocument]) -> AnalysisRun {
        let start_time = Instant::now();
        info!(
            "Analyzing {} resume(s) against role '{}' ({} keywords)",
            resumes.len(),
            keywords.role,
            keywords.len()
        );

        let results: Vec<CandidateResult> = if self.parallel {
            resumes
                .par_iter()
                .enumerate()
                .map(|(index, resume)| self.analyze_at(index, resume, keywords))
                .collect()
        } else {
            resumes
                .iter()
                .enumerate()
                .map(|(index, resume)| self.analyze_at(index, resume, keywords))
                .collect()
        };

        let candidates = self.ranker.rank(&results);
        if let Some(best) = candidates.first() {
            info!("Best candidate: {} ({:.2}/100)", best.name, best.score);
        }

        AnalysisRun {
            role: keywords.role.clone(),
            eligibility_threshold: self.classifier.threshold(),
            candidates,
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        }
    }

    /// Load the role's keywords and analyze the batch.
    ///
    /// Fails with `RoleNotFound` before any resume is scored.
    pub fn analyze_role(
        &self,
        source: &dyn KeywordSource,
        role: &str,
        resumes: &[ResumeDocument],
    ) -> Result<AnalysisRun> {
        let keywords = source.load(role)?;
        Ok(self.analyze_batch(&keywords, resumes))
    }
}
