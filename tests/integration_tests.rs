//! Integration tests for the resume screener

use resume_screener::input::manager::InputManager;
use resume_screener::keywords::{DirectoryKeywordSource, KeywordSource};
use resume_screener::output::formatter::{JsonFormatter, OutputFormatter};
use resume_screener::output::report::BatchReport;
use resume_screener::processing::analyzer::ResumeAnalyzer;
use resume_screener::ScreenerError;
use std::path::Path;

const ROLES_DIR: &str = "tests/fixtures/job_descriptions";

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("docker"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("react"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_cache_can_be_disabled() {
    let mut manager = InputManager::new().with_cache(false);
    manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/unsupported.xyz")).await;
    assert!(matches!(result, Err(ScreenerError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/nonexistent.txt")).await;
    assert!(matches!(result, Err(ScreenerError::InvalidInput(_))));
}

#[tokio::test]
async fn test_load_resume_uses_file_name() {
    let mut manager = InputManager::new();
    let resume = manager
        .load_resume(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    assert_eq!(resume.name, "sample_resume.txt");
    assert!(resume.tokens.contains(&"python".to_string()));
}

#[test]
fn test_fixture_roles_are_listed() {
    let source = DirectoryKeywordSource::new(ROLES_DIR);
    assert_eq!(source.roles().unwrap(), vec!["backend_developer", "frontend_developer"]);
}

#[tokio::test]
async fn test_screen_batch_for_backend_role() {
    let mut manager = InputManager::new();
    let resumes = vec![
        manager.load_resume(Path::new("tests/fixtures/sample_resume.md")).await.unwrap(),
        manager.load_resume(Path::new("tests/fixtures/sample_resume.txt")).await.unwrap(),
    ];
    let source = DirectoryKeywordSource::new(ROLES_DIR);

    let run = ResumeAnalyzer::default()
        .analyze_role(&source, "backend_developer", &resumes)
        .unwrap();

    let best = run.best_candidate().unwrap();
    assert_eq!(best.name, "sample_resume.txt");
    assert_eq!(best.submission_index, 1);
    assert!(best.score > 0.0 && best.score < 100.0);
    assert_eq!(best.matched_percentage, 80.0);
    assert!(best.eligible);
    assert_eq!(best.missing_skills, vec!["kubernetes"]);

    let other = &run.candidates[1];
    assert_eq!(other.score, 0.0);
    assert!(!other.eligible);
    assert_eq!(other.missing_skills.len(), 5);
}

#[tokio::test]
async fn test_punctuation_stays_attached_to_tokens() {
    let mut manager = InputManager::new();
    let resumes = vec![manager
        .load_resume(Path::new("tests/fixtures/sample_resume.md"))
        .await
        .unwrap()];
    let source = DirectoryKeywordSource::new(ROLES_DIR);

    let run = ResumeAnalyzer::default()
        .analyze_role(&source, "frontend_developer", &resumes)
        .unwrap();

    // "typescript," in the skills line does not count as "typescript"
    let candidate = &run.candidates[0];
    assert_eq!(candidate.missing_skills, vec!["typescript", "javascript"]);
    assert_eq!(candidate.matched_percentage, 60.0);
    assert!(candidate.eligible);
}

#[test]
fn test_unknown_role_is_reported() {
    let source = DirectoryKeywordSource::new(ROLES_DIR);
    let result = ResumeAnalyzer::default().analyze_role(&source, "astronaut", &[]);

    match result {
        Err(err @ ScreenerError::RoleNotFound(_)) => assert!(err.is_recoverable()),
        other => panic!("expected RoleNotFound, got {:?}", other.map(|run| run.role)),
    }
}

#[tokio::test]
async fn test_json_report_round_trip() {
    let mut manager = InputManager::new();
    let resumes = vec![manager
        .load_resume(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap()];
    let source = DirectoryKeywordSource::new(ROLES_DIR);
    let run = ResumeAnalyzer::default()
        .analyze_role(&source, "backend_developer", &resumes)
        .unwrap();

    let report = BatchReport::new(&run, &resumes, false);
    let json = JsonFormatter::new(true).format_report(&report).unwrap();
    let parsed: BatchReport = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.role, "backend_developer");
    let candidate = &parsed.candidates[0].result;
    assert_eq!(candidate.name, run.candidates[0].name);
    assert_eq!(candidate.missing_skills, run.candidates[0].missing_skills);
    assert!((candidate.score - run.candidates[0].score).abs() < 1e-9);
    assert_eq!(parsed.candidates[0].skill_match.matched, 4);
}
