//! Report structures built from an analysis run

use crate::output::highlight::{highlight_segments, SkillMatchBreakdown, TextSegment};
use crate::processing::analyzer::{AnalysisRun, CandidateResult};
use crate::processing::document::ResumeDocument;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything the batch formatters render
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub role: String,
    pub eligibility_threshold: f64,
    pub generated_at: DateTime<Utc>,
    pub processing_time_ms: u64,
    pub screener_version: String,
    /// Ranked, best first
    pub candidates: Vec<CandidateEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateEntry {
    /// 1-based position in the ranking
    pub rank: usize,
    #[serde(flatten)]
    pub result: CandidateResult,
    pub skill_match: SkillMatchBreakdown,
    /// Resume text split around matched skills, present in detailed reports
    #[serde(skip)]
    pub highlighted_resume: Option<Vec<TextSegment>>,
}

impl BatchReport {
    /// Build a report; `resumes` must be the batch in submission order when
    /// highlights are requested
    pub fn new(run: &AnalysisRun, resumes: &[ResumeDocument], include_highlights: bool) -> Self {
        let candidates = run
            .candidates
            .iter()
            .enumerate()
            .map(|(position, result)| {
                let highlighted_resume = if include_highlights {
                    resumes
                        .get(result.submission_index)
                        .map(|resume| highlight_segments(&resume.text, &result.matched_skills))
                } else {
                    None
                };

                CandidateEntry {
                    rank: position + 1,
                    result: result.clone(),
                    skill_match: SkillMatchBreakdown::from_candidate(result),
                    highlighted_resume,
                }
            })
            .collect();

        Self {
            role: run.role.clone(),
            eligibility_threshold: run.eligibility_threshold,
            generated_at: Utc::now(),
            processing_time_ms: run.processing_time_ms,
            screener_version: env!("CARGO_PKG_VERSION").to_string(),
            candidates,
        }
    }

    pub fn best_candidate(&self) -> Option<&CandidateEntry> {
        self.candidates.first()
    }

    pub fn eligible_count(&self) -> usize {
        self.candidates.iter().filter(|c| c.result.eligible).count()
    }
}

/// Data for one candidate's feedback document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackReport {
    /// 1-based position in the batch ranking
    pub rank: usize,
    pub role: String,
    pub candidate: String,
    pub score: f64,
    pub missing_skills: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl FeedbackReport {
    pub fn from_candidate(role: &str, rank: usize, candidate: &CandidateResult) -> Self {
        Self {
            rank,
            role: role.to_string(),
            candidate: candidate.name.clone(),
            score: candidate.score,
            missing_skills: candidate.missing_skills.clone(),
            generated_at: Utc::now(),
        }
    }

    /// e.g. `resume_feedback_1_jane_doe_20250101_120000.pdf`; the rank keeps
    /// same-named resumes from different directories apart
    pub fn file_name(&self) -> String {
        let stem = Path::new(&self.candidate)
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_default();
        let stem: String = stem
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();

        format!(
            "resume_feedback_{}_{}_{}.pdf",
            self.rank,
            stem,
            self.generated_at.format("%Y%m%d_%H%M%S")
        )
    }
}
