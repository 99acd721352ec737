//! Keyword source implementations

use crate::error::{Result, ScreenerError};
use crate::processing::document::KeywordSet;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Lookup of a job role's required-skill keywords
pub trait KeywordSource: Send + Sync {
    /// Load the keywords for a role, or fail with `RoleNotFound`
    fn load(&self, role: &str) -> Result<KeywordSet>;

    /// Available role identifiers, sorted
    fn roles(&self) -> Result<Vec<String>>;
}

/// Reads `<roles_dir>/<role>.txt`, one or more keywords per line
pub struct DirectoryKeywordSource {
    roles_dir: PathBuf,
}

impl DirectoryKeywordSource {
    const EXTENSION: &'static str = "txt";

    pub fn new(roles_dir: impl Into<PathBuf>) -> Self {
        Self {
            roles_dir: roles_dir.into(),
        }
    }

    pub fn roles_dir(&self) -> &Path {
        &self.roles_dir
    }

    fn role_path(&self, role: &str) -> Option<PathBuf> {
        let is_plain_name = !role.is_empty()
            && role != "."
            && role != ".."
            && !role.contains(['/', '\\']);

        is_plain_name.then(|| self.roles_dir.join(format!("{}.{}", role, Self::EXTENSION)))
    }
}

impl KeywordSource for DirectoryKeywordSource {
    fn load(&self, role: &str) -> Result<KeywordSet> {
        let path = self
            .role_path(role)
            .filter(|path| path.is_file())
            .ok_or_else(|| ScreenerError::RoleNotFound(role.to_string()))?;

        debug!("Loading keywords for role '{}' from {}", role, path.display());
        let content = std::fs::read_to_string(&path)?;
        let lines: Vec<&str> = content.lines().collect();
        let keywords = KeywordSet::from_lines(role, &lines);

        if keywords.is_empty() {
            warn!("Keyword file for role '{}' is empty: {}", role, path.display());
        } else {
            info!("Loaded {} keywords for role '{}'", keywords.len(), role);
        }

        Ok(keywords)
    }

    fn roles(&self) -> Result<Vec<String>> {
        if !self.roles_dir.is_dir() {
            return Err(ScreenerError::InvalidInput(format!(
                "Keyword directory does not exist: {}",
                self.roles_dir.display()
            )));
        }

        let mut roles = Vec::new();
        for entry in std::fs::read_dir(&self.roles_dir)? {
            let path = entry?.path();
            let is_keyword_file = path.is_file()
                && path.extension().and_then(|ext| ext.to_str()) == Some(Self::EXTENSION);

            if is_keyword_file {
                if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                    roles.push(stem.to_string());
                }
            }
        }

        roles.sort();
        Ok(roles)
    }
}

/// Role keywords held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeywordSource {
    roles: HashMap<String, Vec<String>>,
}

impl InMemoryKeywordSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_role<S: AsRef<str>>(mut self, role: &str, lines: &[S]) -> Self {
        self.insert(role, lines);
        self
    }

    pub fn insert<S: AsRef<str>>(&mut self, role: &str, lines: &[S]) {
        let lines = lines.iter().map(|line| line.as_ref().to_string()).collect();
        self.roles.insert(role.to_string(), lines);
    }
}

impl KeywordSource for InMemoryKeywordSource {
    fn load(&self, role: &str) -> Result<KeywordSet> {
        self.roles
            .get(role)
            .map(|lines| KeywordSet::from_lines(role, lines))
            .ok_or_else(|| ScreenerError::RoleNotFound(role.to_string()))
    }

    fn roles(&self) -> Result<Vec<String>> {
        let mut roles: Vec<String> = self.roles.keys().cloned().collect();
        roles.sort();
        Ok(roles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn roles_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("data_scientist.txt"), "Python\nSQL\nmachine learning\n").unwrap();
        std::fs::write(dir.path().join("web_developer.txt"), "javascript\nreact\ncss").unwrap();
        std::fs::write(dir.path().join("empty.txt"), "").unwrap();
        std::fs::write(dir.path().join("notes.md"), "not a role").unwrap();
        dir
    }

    #[test]
    fn test_directory_load_joins_lines() {
        let dir = roles_dir();
        let source = DirectoryKeywordSource::new(dir.path());

        let keywords = source.load("data_scientist").unwrap();

        assert_eq!(keywords.role, "data_scientist");
        assert_eq!(keywords.text(), "python sql machine learning");
    }

    #[test]
    fn test_directory_missing_role() {
        let dir = roles_dir();
        let source = DirectoryKeywordSource::new(dir.path());

        assert!(matches!(source.load("astronaut"), Err(ScreenerError::RoleNotFound(_))));
        assert!(matches!(source.load("notes"), Err(ScreenerError::RoleNotFound(_))));
    }

    #[test]
    fn test_directory_rejects_path_traversal() {
        let dir = roles_dir();
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        let source = DirectoryKeywordSource::new(&nested);

        assert!(matches!(source.load("../web_developer"), Err(ScreenerError::RoleNotFound(_))));
        assert!(matches!(source.load(".."), Err(ScreenerError::RoleNotFound(_))));
    }

    #[test]
    fn test_directory_empty_file_is_not_an_error() {
        let dir = roles_dir();
        let source = DirectoryKeywordSource::new(dir.path());

        assert!(source.load("empty").unwrap().is_empty());
    }

    #[test]
    fn test_directory_lists_roles() {
        let dir = roles_dir();
        let source = DirectoryKeywordSource::new(dir.path());

        assert_eq!(source.roles().unwrap(), vec!["data_scientist", "empty", "web_developer"]);
    }

    #[test]
    fn test_directory_missing_dir() {
        let source = DirectoryKeywordSource::new("/definitely/not/here");
        assert!(source.roles().is_err());
        assert!(matches!(source.load("any"), Err(ScreenerError::RoleNotFound(_))));
    }

    #[test]
    fn test_in_memory_source() {
        let source = InMemoryKeywordSource::new()
            .with_role("qa", &["selenium", "testing"])
            .with_role("devops", &["docker kubernetes"]);

        assert_eq!(source.load("devops").unwrap().tokens(), &["docker", "kubernetes"]);
        assert_eq!(source.roles().unwrap(), vec!["devops", "qa"]);
        assert!(matches!(source.load("pm"), Err(ScreenerError::RoleNotFound(_))));
    }
}
