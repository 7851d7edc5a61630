//! Quiz content definitions and per-run state.

use super::reward::QuizReward;
use serde::{Deserialize, Serialize};

/// One answer choice within a stage (static content).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDefinition {
    /// Stable key, unique within its stage
    pub id: String,
    /// Label shown to the player
    pub text: String,
    /// Explanation shown after the option is chosen, right or wrong
    pub outcome: String,
    #[serde(rename = "isCorrect", alias = "is_correct")]
    pub is_correct: bool,
}

impl OptionDefinition {
    pub fn new(id: &str, text: &str, outcome: &str, is_correct: bool) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            outcome: outcome.to_string(),
            is_correct,
        }
    }
}

/// A single prompt with its answer choices (static content).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageDefinition {
    pub id: u32,
    pub prompt: String,
    pub options: Vec<OptionDefinition>,
}

impl StageDefinition {
    pub fn new(id: u32, prompt: &str, options: Vec<OptionDefinition>) -> Self {
        Self {
            id,
            prompt: prompt.to_string(),
            options,
        }
    }

    pub fn option(&self, option_id: &str) -> Option<&OptionDefinition> {
        self.options.iter().find(|o| o.id == option_id)
    }

    pub fn correct_option(&self) -> Option<&OptionDefinition> {
        self.options.iter().find(|o| o.is_correct)
    }
}

/// A complete scenario quiz: identifier, ordered stages and completion rewards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizDefinition {
    #[serde(rename = "gameId", alias = "game_id")]
    pub game_id: String,
    /// Display title; optional in catalog files
    #[serde(default)]
    pub title: String,
    pub stages: Vec<StageDefinition>,
    #[serde(rename = "totalCoins", alias = "total_coins", default)]
    pub total_coins: u32,
    #[serde(rename = "totalXp", alias = "total_xp", default)]
    pub total_xp: u32,
}

impl QuizDefinition {
    pub fn new(game_id: &str, title: &str, stages: Vec<StageDefinition>) -> Self {
        Self {
            game_id: game_id.to_string(),
            title: title.to_string(),
            stages,
            total_coins: 0,
            total_xp: 0,
        }
    }

    pub fn with_rewards(mut self, total_coins: u32, total_xp: u32) -> Self {
        self.total_coins = total_coins;
        self.total_xp = total_xp;
        self
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    pub fn stage(&self, index: usize) -> Option<&StageDefinition> {
        self.stages.get(index)
    }

    pub fn last_stage_index(&self) -> Option<usize> {
        self.stages.len().checked_sub(1)
    }

    pub fn reward(&self) -> QuizReward {
        QuizReward {
            coins: self.total_coins,
            xp: self.total_xp,
        }
    }
}

/// Where a run sits in its linear walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// Waiting for an answer on the stage at this index
    Answering(usize),
    /// Answer locked in, outcome visible
    Revealed(usize),
    /// Terminal; summary visible
    Complete,
}

/// Mutable state of one run (transient, never saved).
///
/// Fields are only changed through [`crate::quiz::logic`], which keeps
/// `score <= current_stage_index + 1` and never moves either counter backwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunState {
    pub(crate) current_stage_index: usize,
    pub(crate) selected_option: Option<String>,
    pub(crate) score: u32,
    pub(crate) is_complete: bool,
}

impl RunState {
    pub fn current_stage_index(&self) -> usize {
        self.current_stage_index
    }

    /// Option locked in for the current stage, if any.
    pub fn selected_option(&self) -> Option<&str> {
        self.selected_option.as_deref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn phase(&self) -> RunPhase {
        if self.is_complete {
            RunPhase::Complete
        } else if self.selected_option.is_some() {
            RunPhase::Revealed(self.current_stage_index)
        } else {
            RunPhase::Answering(self.current_stage_index)
        }
    }
}
