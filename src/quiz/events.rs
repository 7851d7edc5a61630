//! Events produced by quiz transitions.
//!
//! The engine never talks to the presentation layer or to the feedback
//! animations directly. Every transition returns the events it caused and the
//! caller maps them to UI changes, reward flashes and persistence.

/// A single event produced by a quiz transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    /// An option was locked in for the current stage.
    OptionLocked {
        stage_index: usize,
        option_id: String,
        correct: bool,
    },

    /// The locked option was correct. Consumed by the reward feedback signal.
    CorrectAnswer { points: u32 },

    /// The final stage was answered; the summary follows once the reveal
    /// delay elapses or the player advances manually.
    RevealScheduled,

    /// The run moved on to a fresh stage.
    StageAdvanced { stage_index: usize },

    /// The run reached its terminal summary. Emitted at most once per run.
    QuizCompleted {
        score: u32,
        total_stages: usize,
        perfect: bool,
    },
}

impl QuizEvent {
    pub fn is_completion(&self) -> bool {
        matches!(self, QuizEvent::QuizCompleted { .. })
    }
}

/// Total feedback points carried by a batch of events.
pub fn feedback_points(events: &[QuizEvent]) -> u32 {
    events
        .iter()
        .map(|e| match e {
            QuizEvent::CorrectAnswer { points } => *points,
            _ => 0,
        })
        .sum()
}
