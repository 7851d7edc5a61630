//! Loader for JSON catalog files.
//!
//! Accepts either a bare array of quizzes or `{ "quizzes": [...] }`.

use super::Catalog;
use crate::quiz::QuizDefinition;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Error type for catalog loading failures.
#[derive(Debug)]
pub struct CatalogLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for CatalogLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for CatalogLoadError {}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<QuizDefinition>),
    Wrapped { quizzes: Vec<QuizDefinition> },
}

/// Parse catalog JSON. `source` names the input in error messages.
pub fn parse_catalog(json: &str, source: &str) -> Result<Catalog, CatalogLoadError> {
    let file: CatalogFile = serde_json::from_str(json).map_err(|e| CatalogLoadError {
        file: source.to_string(),
        message: format!("Parse error: {}", e),
    })?;

    let quizzes = match file {
        CatalogFile::List(quizzes) | CatalogFile::Wrapped { quizzes } => quizzes,
    };
    Ok(Catalog::new(quizzes))
}

/// Load a catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| CatalogLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    let catalog = parse_catalog(&contents, &file_name)?;
    log::info!("loaded {} quiz(zes) from {}", catalog.len(), file_name);
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_QUIZ: &str = r#"{
        "gameId": "savings-jar",
        "title": "Savings Jar",
        "totalCoins": 30,
        "totalXp": 60,
        "stages": [{
            "id": 1,
            "prompt": "Where do coins go?",
            "options": [
                {"id": "jar", "text": "The jar", "outcome": "Saved!", "isCorrect": true},
                {"id": "shop", "text": "The shop", "outcome": "Spent.", "isCorrect": false}
            ]
        }]
    }"#;

    #[test]
    fn test_parse_bare_list() {
        let json = format!("[{}]", ONE_QUIZ);
        let catalog = parse_catalog(&json, "inline").unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("savings-jar").map(|q| q.total_xp), Some(60));
    }

    #[test]
    fn test_parse_wrapped() {
        let json = format!(r#"{{"quizzes": [{}]}}"#, ONE_QUIZ);
        let catalog = parse_catalog(&json, "inline").unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_parse_error_names_source() {
        let err = parse_catalog("{ nope", "broken.json").unwrap_err();
        assert_eq!(err.file, "broken.json");
        assert!(err.to_string().starts_with("Failed to load broken.json"));
    }

    #[test]
    fn test_builtin_catalog_roundtrips_through_json() {
        let catalog = Catalog::builtin();
        let json = serde_json::to_string(&catalog).unwrap();
        let loaded = parse_catalog(&json, "builtin").unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_catalog(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.message.starts_with("IO error"));
    }
}
