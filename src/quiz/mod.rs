//! Quiz runner: drives a [`QuizDefinition`] through its stages to a summary.
//!
//! `logic` holds the pure transitions over [`RunState`]; `session` wraps them
//! with the reveal timer and completion bookkeeping a mounted screen needs.

pub mod events;
pub mod logic;
pub mod reward;
pub mod session;
pub mod timer;
pub mod types;
pub mod view;

pub use events::{feedback_points, QuizEvent};
pub use logic::{
    advance_stage, complete_after_reveal, initialize, is_perfect, progress_label, select_option,
};
pub use reward::QuizReward;
pub use session::{record_completion, QuizSession};
pub use timer::RevealTimer;
pub use types::{OptionDefinition, QuizDefinition, RunPhase, RunState, StageDefinition};
pub use view::{OptionView, QuizSummary, SelectionView, StageView};
