//! Headless quiz simulator.
//!
//! Plays catalog quizzes through the same [`QuizSession`](crate::quiz::QuizSession)
//! a shell would use, answering with a scripted strategy. Useful for checking
//! content end to end: every quiz must reach its summary whatever the answers.

mod config;
mod report;
mod runner;

pub use config::{AdvanceMode, AnswerStrategy, SimConfig};
pub use report::{QuizReport, RunStats, SimReport};
pub use runner::{run_simulation, simulate_quiz};
