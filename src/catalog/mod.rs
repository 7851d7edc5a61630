//! Quiz catalog: every playable quiz, looked up by game id.
//!
//! Replaces one component per quiz with a single content table feeding the
//! shared runner. Content comes from the built-in table or a JSON file.

pub mod data;
pub mod loader;
pub mod validation;

pub use loader::{load_catalog, parse_catalog, CatalogLoadError};
pub use validation::{validate_catalog, validate_quiz, ValidationError, ValidationProblem};

use crate::quiz::QuizDefinition;
use serde::{Deserialize, Serialize};

/// Ordered collection of quiz definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub quizzes: Vec<QuizDefinition>,
}

impl Catalog {
    pub fn new(quizzes: Vec<QuizDefinition>) -> Self {
        Self { quizzes }
    }

    /// The quizzes shipped with the crate.
    pub fn builtin() -> Self {
        Self::new(data::builtin_quizzes())
    }

    /// Parse a catalog from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogLoadError> {
        parse_catalog(json, "<inline>")
    }

    /// Find a quiz by its game id.
    pub fn get(&self, game_id: &str) -> Option<&QuizDefinition> {
        self.quizzes.iter().find(|q| q.game_id == game_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuizDefinition> {
        self.quizzes.iter()
    }

    pub fn game_ids(&self) -> impl Iterator<Item = &str> {
        self.quizzes.iter().map(|q| q.game_id.as_str())
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::TYPICAL_STAGE_COUNT;

    #[test]
    fn test_builtin_catalog_not_empty() {
        let catalog = Catalog::builtin();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.len(), catalog.game_ids().count());
    }

    #[test]
    fn test_builtin_quizzes_have_five_stages_and_rewards() {
        for quiz in Catalog::builtin().iter() {
            assert_eq!(quiz.stage_count(), TYPICAL_STAGE_COUNT, "{}", quiz.game_id);
            assert!(!quiz.reward().is_empty(), "{}", quiz.game_id);
            assert!(!quiz.title.is_empty(), "{}", quiz.game_id);
        }
    }

    #[test]
    fn test_get_by_game_id() {
        let catalog = Catalog::builtin();
        let quiz = catalog.get("budget-basics").expect("budget-basics is built in");
        assert_eq!(quiz.title, "Budget Basics");
        assert!(catalog.get("no-such-quiz").is_none());
    }

    #[test]
    fn test_from_json_str_reports_source() {
        let err = Catalog::from_json_str("not json").unwrap_err();
        assert!(err.to_string().starts_with("Failed to load <inline>:"));
        assert!(Catalog::from_json_str("[]").unwrap().is_empty());
    }
}
