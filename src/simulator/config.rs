//! Simulation configuration.

use crate::core::config::RunnerConfig;
use crate::core::constants::TICK_INTERVAL_MS;

/// How the simulated player picks answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerStrategy {
    /// Always the correct option
    AllCorrect,
    /// Always the first incorrect option
    AllWrong,
    /// Uniformly random option, seeded per run
    Random,
}

impl AnswerStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AllCorrect => "correct",
            Self::AllWrong => "wrong",
            Self::Random => "random",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "correct" => Some(Self::AllCorrect),
            "wrong" => Some(Self::AllWrong),
            "random" => Some(Self::Random),
            _ => None,
        }
    }
}

/// How the simulated player leaves the final stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceMode {
    /// Press "next" straight after answering
    Manual,
    /// Let the reveal delay complete the run
    WaitForReveal,
}

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Playthroughs per quiz
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    pub strategy: AnswerStrategy,

    pub advance_mode: AdvanceMode,

    /// Only simulate this quiz (None = whole catalog)
    pub game_id: Option<String>,

    pub runner: RunnerConfig,

    /// Simulated time per tick while waiting for the reveal. Zero is
    /// treated as 1ms.
    pub tick_interval_ms: u64,

    /// Write completions to the store
    pub record: bool,

    /// Output detail (0 = totals line, 1 = per-quiz report, 2 = also per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1,
            seed: None,
            strategy: AnswerStrategy::Random,
            advance_mode: AdvanceMode::WaitForReveal,
            game_id: None,
            runner: RunnerConfig::default(),
            tick_interval_ms: TICK_INTERVAL_MS,
            record: false,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Deterministic config for a single strategy over the whole catalog.
    pub fn scripted(strategy: AnswerStrategy, advance_mode: AdvanceMode) -> Self {
        Self {
            seed: Some(42),
            strategy,
            advance_mode,
            verbosity: 0,
            ..Default::default()
        }
    }

    /// Simulated time fed to each reveal tick; never zero.
    pub fn tick_step_ms(&self) -> u64 {
        self.tick_interval_ms.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_names_roundtrip() {
        for strategy in [
            AnswerStrategy::AllCorrect,
            AnswerStrategy::AllWrong,
            AnswerStrategy::Random,
        ] {
            assert_eq!(AnswerStrategy::from_name(strategy.name()), Some(strategy));
        }
        assert_eq!(AnswerStrategy::from_name("lucky"), None);
    }

    #[test]
    fn test_tick_step_never_zero() {
        let mut config = SimConfig::default();
        assert_eq!(config.tick_step_ms(), 100);
        config.tick_interval_ms = 0;
        assert_eq!(config.tick_step_ms(), 1);
    }

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.num_runs, 1);
        assert_eq!(config.tick_interval_ms, 100);
        assert_eq!(config.runner.reveal_delay_ms, 800);
        assert!(!config.record);
    }

    #[test]
    fn test_scripted_is_seeded_and_quiet() {
        let config = SimConfig::scripted(AnswerStrategy::AllWrong, AdvanceMode::Manual);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.verbosity, 0);
        assert_eq!(config.advance_mode, AdvanceMode::Manual);
    }
}
