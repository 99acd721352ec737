//! Count-vector cosine similarity between a resume and role keywords

use std::collections::HashMap;

/// Scores lexical overlap on a 0-100 scale
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityScorer;

impl SimilarityScorer {
    pub fn new() -> Self {
        Self
    }

    /// Cosine similarity scaled to 0-100 and rounded to two decimals.
    ///
    /// Always computed resume-vs-keywords. Empty input on either side scores 0.
    pub fn score<R, K>(&self, resume_tokens: &[R], keyword_tokens: &[K]) -> f64
    where
        R: AsRef<str>,
        K: AsRef<str>,
    {
        round_to_hundredths(cosine_similarity(resume_tokens, keyword_tokens) * 100.0)
    }
}

/// Cosine of the angle between the raw term-count vectors of two token sequences.
///
/// The vocabulary is the union of both sequences. Counts, dot product and squared
/// norms are integers, so the result does not depend on iteration order.
pub fn cosine_similarity<A, B>(a: &[A], b: &[B]) -> f64
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let mut vectors: HashMap<&str, (u64, u64)> = HashMap::new();
    for token in a {
        vectors.entry(token.as_ref()).or_default().0 += 1;
    }
    for token in b {
        vectors.entry(token.as_ref()).or_default().1 += 1;
    }

    let (dot, norm_a, norm_b) = vectors
        .values()
        .fold((0u64, 0u64, 0u64), |(dot, na, nb), &(x, y)| {
            (dot + x * y, na + x * x, nb + y * y)
        });

    if norm_a == 0 || norm_b == 0 {
        return 0.0;
    }

    let similarity = dot as f64 / (norm_a as f64 * norm_b as f64).sqrt();
    similarity.clamp(0.0, 1.0)
}

pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::normalizer::TextNormalizer;

    fn tokens(text: &str) -> Vec<String> {
        TextNormalizer::new().tokenize(text)
    }

    #[test]
    fn test_identical_text_scores_100() {
        let scorer = SimilarityScorer::new();
        let text = tokens("python sql docker python aws");

        assert_eq!(scorer.score(&text, &text), 100.0);
    }

    #[test]
    fn test_proportional_vectors_score_100() {
        let scorer = SimilarityScorer::new();
        let resume = tokens("python sql python sql");
        let keywords = tokens("sql python");

        assert_eq!(scorer.score(&resume, &keywords), 100.0);
    }

    #[test]
    fn test_disjoint_text_scores_zero() {
        let scorer = SimilarityScorer::new();
        assert_eq!(scorer.score(&tokens("java spring"), &tokens("python django")), 0.0);
    }

    #[test]
    fn test_empty_input_scores_zero() {
        let scorer = SimilarityScorer::new();
        let empty: Vec<String> = Vec::new();

        assert_eq!(scorer.score(&empty, &tokens("python sql")), 0.0);
        assert_eq!(scorer.score(&tokens("python sql"), &empty), 0.0);
        assert_eq!(scorer.score(&empty, &empty), 0.0);
    }

    #[test]
    fn test_known_value_and_rounding() {
        // resume (1,1,0) vs keywords (1,0,1) over {python, java, sql}: 1/2
        let scorer = SimilarityScorer::new();
        assert_eq!(scorer.score(&tokens("python java"), &tokens("python sql")), 50.0);

        // (1,1) vs (1,0): 1/sqrt(2) = 0.70710678...
        assert_eq!(scorer.score(&tokens("python java"), &tokens("python")), 70.71);
    }

    #[test]
    fn test_case_and_order_insensitive() {
        let scorer = SimilarityScorer::new();
        let a = scorer.score(&tokens("Python SQL Docker"), &tokens("docker python"));
        let b = scorer.score(&tokens("docker sql PYTHON"), &tokens("python docker"));

        assert_eq!(a, b);
    }

    #[test]
    fn test_monotonic_in_shared_token_frequency() {
        let scorer = SimilarityScorer::new();
        let keywords = tokens("python sql");

        let mut previous = 0.0;
        for repeats in 1..6 {
            let resume_text = format!("{} java", "python ".repeat(repeats));
            let score = scorer.score(&tokens(&resume_text), &keywords);
            assert!(score >= previous, "score dropped at {} repeats", repeats);
            previous = score;
        }
    }

    #[test]
    fn test_deterministic() {
        let scorer = SimilarityScorer::new();
        let resume = tokens("rust python go kubernetes docker terraform aws sql python");
        let keywords = tokens("python aws sql docker linux");

        let first = scorer.score(&resume, &keywords);
        for _ in 0..10 {
            assert_eq!(scorer.score(&resume, &keywords), first);
        }
    }
}
