//! Completion rewards granted for a quiz.

use serde::{Deserialize, Serialize};

/// Coins and XP paid out when a quiz reaches its summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizReward {
    pub coins: u32,
    pub xp: u32,
}

impl QuizReward {
    pub fn is_empty(&self) -> bool {
        self.coins == 0 && self.xp == 0
    }

    /// Display text, coins before XP.
    pub fn description(&self) -> String {
        let mut parts = Vec::new();

        if self.coins == 1 {
            parts.push("+1 Coin".to_string());
        } else if self.coins > 1 {
            parts.push(format!("+{} Coins", self.coins));
        }

        if self.xp > 0 {
            parts.push(format!("+{} XP", self.xp));
        }

        if parts.is_empty() {
            "No reward".to_string()
        } else {
            parts.join(", ")
        }
    }
}
