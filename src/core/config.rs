//! Runtime configuration for a quiz run.

use super::constants::REVEAL_DELAY_MS;

/// Settings applied to every [`QuizSession`](crate::quiz::QuizSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Pause between answering the final stage and the summary replacing it.
    /// Zero completes the run on the next tick.
    pub reveal_delay_ms: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: REVEAL_DELAY_MS,
        }
    }
}

impl RunnerConfig {
    pub fn with_reveal_delay(reveal_delay_ms: u64) -> Self {
        Self { reveal_delay_ms }
    }
}
