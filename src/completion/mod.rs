//! Completion map: which quizzes have been finished at least once.
//!
//! Completion is only ever displayed; it never prevents a quiz from being
//! replayed. The default on-disk location is `~/.scenario-quiz/completion.json`.

pub mod persistence;
pub mod types;

pub use persistence::{
    completion_save_path, load_completion_map, save_completion_map, FileCompletionStore,
};
pub use types::{CompletionMap, CompletionRecord, CompletionStore};
