//! Scenario Quiz - scripted multiple-choice money-decision quizzes.
//!
//! One generic runner walks any [`quiz::QuizDefinition`] from the first stage
//! to its summary. Content lives in the [`catalog`], completion flags in a
//! [`completion::CompletionStore`] supplied by the caller.

pub mod catalog;
pub mod completion;
pub mod core;
pub mod quiz;
pub mod simulator;
pub mod utils;

pub use catalog::Catalog;
pub use completion::{CompletionMap, CompletionStore, FileCompletionStore};
pub use core::config::RunnerConfig;
pub use quiz::{QuizDefinition, QuizEvent, QuizSession, RunState};
