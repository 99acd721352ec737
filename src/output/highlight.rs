//! Resume highlighting and skill-match breakdown for presentation
//!
//! Both consume a `CandidateResult`; nothing here re-runs keyword matching.

use crate::processing::analyzer::CandidateResult;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A run of resume text, either a matched keyword or surrounding text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSegment {
    pub text: String,
    pub matched: bool,
}

/// Split resume text into segments, flagging words whose lowercase form is one
/// of the candidate's matched skills. Whitespace is preserved.
pub fn highlight_segments(text: &str, matched_skills: &[String]) -> Vec<TextSegment> {
    let matched: HashSet<&str> = matched_skills.iter().map(String::as_str).collect();
    let mut segments = Vec::new();
    let mut plain = String::new();

    for piece in text.split_inclusive(char::is_whitespace) {
        let word = piece.trim_end_matches(char::is_whitespace);
        if word.is_empty() || !matched.contains(word.to_lowercase().as_str()) {
            plain.push_str(piece);
            continue;
        }

        if !plain.is_empty() {
            segments.push(TextSegment {
                text: std::mem::take(&mut plain),
                matched: false,
            });
        }
        segments.push(TextSegment {
            text: word.to_string(),
            matched: true,
        });
        plain.push_str(&piece[word.len()..]);
    }

    if !plain.is_empty() {
        segments.push(TextSegment {
            text: plain,
            matched: false,
        });
    }

    segments
}

/// Join segments back into text, passing matched words through `mark`
pub fn render_segments<F>(segments: &[TextSegment], mut mark: F) -> String
where
    F: FnMut(&str) -> String,
{
    segments
        .iter()
        .map(|segment| {
            if segment.matched {
                mark(&segment.text)
            } else {
                segment.text.clone()
            }
        })
        .collect()
}

/// Markdown-style highlight: matched skills in bold
pub fn highlight_resume(text: &str, candidate: &CandidateResult) -> String {
    let segments = highlight_segments(text, &candidate.matched_skills);
    render_segments(&segments, |word| format!("**{}**", word))
}

/// Matched vs unmatched keyword occurrences, the data behind the skill chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillMatchBreakdown {
    pub matched: usize,
    pub unmatched: usize,
}

impl SkillMatchBreakdown {
    pub fn from_candidate(candidate: &CandidateResult) -> Self {
        Self {
            matched: candidate.matched_count,
            unmatched: candidate.unmatched_count(),
        }
    }

    pub fn total(&self) -> usize {
        self.matched + self.unmatched
    }

    /// Matched share of all keyword occurrences, 0-100
    pub fn matched_share(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            self.matched as f64 * 100.0 / self.total() as f64
        }
    }

    pub fn unmatched_share(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            100.0 - self.matched_share()
        }
    }

    /// Horizontal bars scaled so the larger count fills `width` cells
    pub fn bars(&self, width: usize) -> (String, String) {
        let largest = self.matched.max(self.unmatched).max(1);
        let scale = |count: usize| (count * width + largest / 2) / largest;

        ("█".repeat(scale(self.matched)), "█".repeat(scale(self.unmatched)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyzer::ResumeAnalyzer;
    use crate::processing::document::{KeywordSet, ResumeDocument};

    fn analyzed(text: &str, keywords: &str) -> CandidateResult {
        let keywords = KeywordSet::from_text("role", keywords);
        ResumeAnalyzer::default().analyze(&ResumeDocument::new("cv.txt", text), &keywords)
    }

    #[test]
    fn test_highlight_marks_matched_words_only() {
        let text = "Senior Python developer\nknows SQL, Docker and python";
        let candidate = analyzed(text, "python docker aws");

        let highlighted = highlight_resume(text, &candidate);

        assert_eq!(highlighted, "Senior **Python** developer\nknows SQL, **Docker** and **python**");
    }

    #[test]
    fn test_highlight_preserves_text_without_matches() {
        let text = "  Java   and Spring\n";
        let candidate = analyzed(text, "python");

        let segments = highlight_segments(text, &candidate.matched_skills);

        assert_eq!(segments.len(), 1);
        assert_eq!(render_segments(&segments, |w| w.to_uppercase()), text);
    }

    #[test]
    fn test_breakdown_counts_occurrences() {
        let candidate = analyzed("python", "python sql python");
        let breakdown = SkillMatchBreakdown::from_candidate(&candidate);

        assert_eq!(breakdown.matched, 2);
        assert_eq!(breakdown.unmatched, 1);
        assert!((breakdown.matched_share() - 66.67).abs() < 0.01);
        assert!((breakdown.unmatched_share() - 33.33).abs() < 0.01);
    }

    #[test]
    fn test_bars_scale_to_width() {
        let breakdown = SkillMatchBreakdown { matched: 4, unmatched: 2 };
        let (matched, unmatched) = breakdown.bars(20);

        assert_eq!(matched.chars().count(), 20);
        assert_eq!(unmatched.chars().count(), 10);
    }

    #[test]
    fn test_empty_breakdown() {
        let breakdown = SkillMatchBreakdown { matched: 0, unmatched: 0 };

        assert_eq!(breakdown.matched_share(), 0.0);
        assert_eq!(breakdown.bars(10), (String::new(), String::new()));
    }
}
