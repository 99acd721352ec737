//! Resume-to-role matching engine

pub mod document;
pub mod normalizer;
pub mod similarity;
pub mod gaps;
pub mod eligibility;
pub mod ranker;
pub mod analyzer;
