//! Candidate ranking by match score

use crate::processing::analyzer::CandidateResult;

#[derive(Debug, Clone, Copy, Default)]
pub struct Ranker;

impl Ranker {
    pub fn new() -> Self {
        Self
    }

    /// Order candidates best first without touching the input slice.
    ///
    /// The sort is stable, so equal scores keep submission order.
    pub fn rank(&self, candidates: &[CandidateResult]) -> Vec<CandidateResult> {
        let mut ranked = candidates.to_vec();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }

    /// Highest-scoring candidate, first submitted on ties
    pub fn best<'a>(&self, candidates: &'a [CandidateResult]) -> Option<&'a CandidateResult> {
        candidates
            .iter()
            .reduce(|best, candidate| if candidate.score > best.score { candidate } else { best })
    }
}
