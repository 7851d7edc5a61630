//! Content checks for quiz definitions.
//!
//! The engine assumes well-formed content and does not re-check it at run
//! time; these checks run over the catalog in tests and in `scenario-quiz validate`.

use super::Catalog;
use crate::core::constants::MIN_OPTIONS_PER_STAGE;
use crate::quiz::{QuizDefinition, StageDefinition};
use std::collections::HashSet;

/// What is wrong with a piece of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationProblem {
    EmptyGameId,
    DuplicateGameId,
    NoStages,
    DuplicateStageId,
    EmptyPrompt,
    TooFewOptions { count: usize },
    NoCorrectOption,
    MultipleCorrectOptions { count: usize },
    DuplicateOptionId { option_id: String },
    EmptyOptionText { option_id: String },
}

impl std::fmt::Display for ValidationProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyGameId => write!(f, "game id is empty"),
            Self::DuplicateGameId => write!(f, "game id is used by another quiz"),
            Self::NoStages => write!(f, "quiz has no stages"),
            Self::DuplicateStageId => write!(f, "stage id is used by another stage"),
            Self::EmptyPrompt => write!(f, "prompt is empty"),
            Self::TooFewOptions { count } => write!(
                f,
                "needs at least {} options, found {}",
                MIN_OPTIONS_PER_STAGE, count
            ),
            Self::NoCorrectOption => write!(f, "no option is marked correct"),
            Self::MultipleCorrectOptions { count } => {
                write!(f, "exactly one correct option required, found {}", count)
            }
            Self::DuplicateOptionId { option_id } => {
                write!(f, "option id '{}' appears more than once", option_id)
            }
            Self::EmptyOptionText { option_id } => {
                write!(f, "option '{}' has no text", option_id)
            }
        }
    }
}

/// A validation error with the quiz and stage it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub game_id: String,
    pub stage_id: Option<u32>,
    pub problem: ValidationProblem,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.stage_id {
            Some(stage_id) => write!(
                f,
                "quiz '{}' stage {}: {}",
                self.game_id, stage_id, self.problem
            ),
            None => write!(f, "quiz '{}': {}", self.game_id, self.problem),
        }
    }
}

/// Validate every quiz in the catalog, including game id uniqueness.
/// Returns an empty list if the content is well formed.
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();

    for quiz in catalog.iter() {
        if !seen_ids.insert(quiz.game_id.as_str()) {
            errors.push(ValidationError {
                game_id: quiz.game_id.clone(),
                stage_id: None,
                problem: ValidationProblem::DuplicateGameId,
            });
        }
        errors.extend(validate_quiz(quiz));
    }

    errors
}

/// Validate a single quiz definition.
pub fn validate_quiz(quiz: &QuizDefinition) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let quiz_error = |problem| ValidationError {
        game_id: quiz.game_id.clone(),
        stage_id: None,
        problem,
    };

    if quiz.game_id.trim().is_empty() {
        errors.push(quiz_error(ValidationProblem::EmptyGameId));
    }
    if quiz.stages.is_empty() {
        errors.push(quiz_error(ValidationProblem::NoStages));
    }

    let mut seen_stage_ids = HashSet::new();
    for stage in &quiz.stages {
        if !seen_stage_ids.insert(stage.id) {
            errors.push(ValidationError {
                game_id: quiz.game_id.clone(),
                stage_id: Some(stage.id),
                problem: ValidationProblem::DuplicateStageId,
            });
        }
        errors.extend(
            validate_stage(stage)
                .into_iter()
                .map(|problem| ValidationError {
                    game_id: quiz.game_id.clone(),
                    stage_id: Some(stage.id),
                    problem,
                }),
        );
    }

    errors
}

fn validate_stage(stage: &StageDefinition) -> Vec<ValidationProblem> {
    let mut problems = Vec::new();

    if stage.prompt.trim().is_empty() {
        problems.push(ValidationProblem::EmptyPrompt);
    }
    if stage.options.len() < MIN_OPTIONS_PER_STAGE {
        problems.push(ValidationProblem::TooFewOptions {
            count: stage.options.len(),
        });
    }

    match stage.options.iter().filter(|o| o.is_correct).count() {
        0 => problems.push(ValidationProblem::NoCorrectOption),
        1 => {}
        count => problems.push(ValidationProblem::MultipleCorrectOptions { count }),
    }

    let mut seen = HashSet::new();
    for option in &stage.options {
        if !seen.insert(option.id.as_str()) {
            problems.push(ValidationProblem::DuplicateOptionId {
                option_id: option.id.clone(),
            });
        }
        if option.text.trim().is_empty() {
            problems.push(ValidationProblem::EmptyOptionText {
                option_id: option.id.clone(),
            });
        }
    }

    problems
}
