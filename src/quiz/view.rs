//! Presentation snapshots handed to the shell after every transition.

use super::reward::QuizReward;

/// An answer choice as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub id: String,
    pub text: String,
}

/// The option the player locked in, with its explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionView {
    pub option_id: String,
    pub outcome: String,
    pub correct: bool,
}

/// Everything the shell needs to draw the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageView {
    pub game_id: String,
    pub prompt: String,
    pub options: Vec<OptionView>,
    pub selection: Option<SelectionView>,
    pub score: u32,
    pub progress: String,
    pub is_complete: bool,
    /// Completion flag read from the store when the session started
    pub previously_completed: bool,
}

/// End-of-run summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    pub game_id: String,
    pub score: u32,
    pub total_stages: usize,
    /// Every stage correct; the shell celebrates on this
    pub perfect: bool,
    pub reward: QuizReward,
}

impl QuizSummary {
    /// "You scored 4 out of 5"
    pub fn score_line(&self) -> String {
        format!("You scored {} out of {}", self.score, self.total_stages)
    }
}
