//! Completion store interface and the in-memory completion map.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Keyed "previously completed" flags, injected into whoever runs quizzes.
pub trait CompletionStore {
    /// Whether `game_id` has been completed before.
    fn get(&self, game_id: &str) -> bool;

    /// Set or clear the completion flag for `game_id`.
    fn set(&mut self, game_id: &str, completed: bool);
}

/// Record of a completed quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// Unix timestamp of the first completion
    pub completed_at: i64,
}

/// In-memory completion map (saved to disk by [`super::FileCompletionStore`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionMap {
    #[serde(default)]
    pub completed: HashMap<String, CompletionRecord>,
}

impl CompletionMap {
    pub fn is_completed(&self, game_id: &str) -> bool {
        self.completed.contains_key(game_id)
    }

    /// Mark a quiz completed. Returns true if newly completed; an existing
    /// record keeps its original timestamp.
    pub fn mark_completed(&mut self, game_id: &str) -> bool {
        if self.is_completed(game_id) {
            return false;
        }
        self.completed.insert(
            game_id.to_string(),
            CompletionRecord {
                completed_at: chrono::Utc::now().timestamp(),
            },
        );
        true
    }

    /// Forget a completion. Returns true if one was recorded.
    pub fn clear(&mut self, game_id: &str) -> bool {
        self.completed.remove(game_id).is_some()
    }

    pub fn completed_at(&self, game_id: &str) -> Option<i64> {
        self.completed.get(game_id).map(|r| r.completed_at)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }
}

impl CompletionStore for CompletionMap {
    fn get(&self, game_id: &str) -> bool {
        self.is_completed(game_id)
    }

    fn set(&mut self, game_id: &str, completed: bool) {
        if completed {
            self.mark_completed(game_id);
        } else {
            self.clear(game_id);
        }
    }
}
