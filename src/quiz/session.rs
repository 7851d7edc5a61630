//! One mounted quiz screen: run state, reveal timer and completion bookkeeping.

use super::events::QuizEvent;
use super::logic;
use super::timer::RevealTimer;
use super::types::{QuizDefinition, RunState};
use super::view::{OptionView, QuizSummary, SelectionView, StageView};
use crate::completion::CompletionStore;
use crate::core::config::RunnerConfig;

/// A single run of a quiz, created fresh on every mount.
///
/// Owns the pending reveal. Closing or dropping the session cancels it, so a
/// run abandoned on its final stage never completes behind the caller's back.
#[derive(Debug)]
pub struct QuizSession<'a> {
    definition: &'a QuizDefinition,
    config: RunnerConfig,
    state: RunState,
    reveal: RevealTimer,
    previously_completed: bool,
    recorded: bool,
}

impl<'a> QuizSession<'a> {
    /// Start a run, reading the prior completion flag for display.
    pub fn new<S>(definition: &'a QuizDefinition, config: RunnerConfig, store: &S) -> Self
    where
        S: CompletionStore + ?Sized,
    {
        let previously_completed = store.get(&definition.game_id);
        log::debug!(
            "starting quiz '{}' ({} stages, previously completed: {})",
            definition.game_id,
            definition.stage_count(),
            previously_completed
        );
        Self {
            definition,
            config,
            state: logic::initialize(definition),
            reveal: RevealTimer::new(),
            previously_completed,
            recorded: false,
        }
    }

    pub fn definition(&self) -> &'a QuizDefinition {
        self.definition
    }

    pub fn config(&self) -> RunnerConfig {
        self.config
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn previously_completed(&self) -> bool {
        self.previously_completed
    }

    pub fn reveal_pending(&self) -> bool {
        self.reveal.is_pending()
    }

    /// Lock in an answer; arms the reveal timer on the final stage.
    pub fn select_option(&mut self, option_id: &str) -> Vec<QuizEvent> {
        let events = logic::select_option(&mut self.state, self.definition, option_id);
        if events.contains(&QuizEvent::RevealScheduled) {
            self.reveal.arm(self.config.reveal_delay_ms);
            log::debug!(
                "quiz '{}' reveal armed ({}ms)",
                self.definition.game_id,
                self.config.reveal_delay_ms
            );
        }
        events
    }

    /// Advance past the answered stage. Finishing the run this way supersedes
    /// any pending reveal.
    pub fn advance(&mut self) -> Vec<QuizEvent> {
        let events = logic::advance_stage(&mut self.state, self.definition);
        if self.state.is_complete() && self.reveal.cancel() {
            log::debug!(
                "quiz '{}' reveal superseded by manual advance",
                self.definition.game_id
            );
        }
        events
    }

    /// Feed elapsed time to the reveal timer; completes the run when it fires.
    pub fn tick(&mut self, elapsed_ms: u64) -> Vec<QuizEvent> {
        if !self.reveal.advance(elapsed_ms) {
            return Vec::new();
        }
        log::debug!("quiz '{}' reveal fired", self.definition.game_id);
        logic::complete_after_reveal(&mut self.state, self.definition)
            .into_iter()
            .collect()
    }

    /// Cancel any pending reveal. Called on unmount; also runs on drop.
    pub fn close(&mut self) {
        if self.reveal.cancel() {
            log::debug!(
                "quiz '{}' closed with a pending reveal; discarded",
                self.definition.game_id
            );
        }
    }

    pub fn is_perfect(&self) -> bool {
        logic::is_perfect(&self.state, self.definition)
    }

    pub fn progress_label(&self) -> String {
        logic::progress_label(&self.state, self.definition)
    }

    /// Snapshot of the current screen.
    pub fn view(&self) -> StageView {
        let stage = self.definition.stage(self.state.current_stage_index());

        let (prompt, options) = match stage {
            Some(stage) => (
                stage.prompt.clone(),
                stage
                    .options
                    .iter()
                    .map(|o| OptionView {
                        id: o.id.clone(),
                        text: o.text.clone(),
                    })
                    .collect(),
            ),
            None => (String::new(), Vec::new()),
        };

        let selection = self
            .state
            .selected_option()
            .and_then(|id| stage.and_then(|s| s.option(id)))
            .map(|o| SelectionView {
                option_id: o.id.clone(),
                outcome: o.outcome.clone(),
                correct: o.is_correct,
            });

        StageView {
            game_id: self.definition.game_id.clone(),
            prompt,
            options,
            selection,
            score: self.state.score(),
            progress: self.progress_label(),
            is_complete: self.state.is_complete(),
            previously_completed: self.previously_completed,
        }
    }

    /// Summary of a completed run; `None` while the run is in progress.
    pub fn summary(&self) -> Option<QuizSummary> {
        if !self.state.is_complete() {
            return None;
        }
        Some(QuizSummary {
            game_id: self.definition.game_id.clone(),
            score: self.state.score(),
            total_stages: self.definition.stage_count(),
            perfect: self.is_perfect(),
            reward: self.definition.reward(),
        })
    }
}

impl Drop for QuizSession<'_> {
    fn drop(&mut self) {
        self.close();
    }
}

/// Persist `{game_id: true}` once the run is complete.
///
/// Returns the summary the first time it is called on a completed session and
/// `None` otherwise, so repeated calls never double-record or double-reward.
pub fn record_completion<S>(session: &mut QuizSession<'_>, store: &mut S) -> Option<QuizSummary>
where
    S: CompletionStore + ?Sized,
{
    if session.recorded {
        return None;
    }
    let summary = session.summary()?;
    store.set(&summary.game_id, true);
    session.recorded = true;
    log::info!(
        "quiz '{}' completed: {}/{} ({})",
        summary.game_id,
        summary.score,
        summary.total_stages,
        summary.reward.description()
    );
    Some(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::CompletionMap;
    use crate::quiz::types::{OptionDefinition, StageDefinition};

    fn make_quiz(stages: u32) -> QuizDefinition {
        let stages = (1..=stages)
            .map(|i| {
                StageDefinition::new(
                    i,
                    &format!("Stage {}?", i),
                    vec![
                        OptionDefinition::new("a", "Budget first", "Planning pays off.", true),
                        OptionDefinition::new("b", "Buy now", "Impulse buys add up.", false),
                    ],
                )
            })
            .collect();
        QuizDefinition::new("budget-basics", "Budget Basics", stages).with_rewards(50, 25)
    }

    #[test]
    fn test_new_reads_previous_completion() {
        let quiz = make_quiz(2);
        let mut store = CompletionMap::default();
        store.set("budget-basics", true);

        let session = QuizSession::new(&quiz, RunnerConfig::default(), &store);

        assert!(session.previously_completed());
        assert!(session.view().previously_completed);
        assert!(!session.is_complete());
    }

    #[test]
    fn test_final_answer_arms_reveal() {
        let quiz = make_quiz(1);
        let store = CompletionMap::default();
        let mut session = QuizSession::new(&quiz, RunnerConfig::default(), &store);

        session.select_option("a");

        assert!(session.reveal_pending());
        assert!(!session.is_complete());
    }

    #[test]
    fn test_tick_completes_after_delay() {
        let quiz = make_quiz(1);
        let store = CompletionMap::default();
        let mut session = QuizSession::new(&quiz, RunnerConfig::default(), &store);
        session.select_option("a");

        assert!(session.tick(700).is_empty());
        assert!(!session.is_complete());

        let events = session.tick(100);
        assert_eq!(events.len(), 1);
        assert!(events[0].is_completion());
        assert!(session.is_complete());
        assert!(!session.reveal_pending());
    }

    #[test]
    fn test_manual_advance_cancels_reveal() {
        let quiz = make_quiz(1);
        let store = CompletionMap::default();
        let mut session = QuizSession::new(&quiz, RunnerConfig::default(), &store);
        session.select_option("a");

        let events = session.advance();
        assert!(events.iter().any(QuizEvent::is_completion));
        assert!(!session.reveal_pending());

        assert!(session.tick(10_000).is_empty());
        assert!(session.is_complete());
    }

    #[test]
    fn test_close_discards_pending_reveal() {
        let quiz = make_quiz(1);
        let store = CompletionMap::default();
        let mut session = QuizSession::new(&quiz, RunnerConfig::default(), &store);
        session.select_option("b");

        session.close();

        assert!(!session.reveal_pending());
        assert!(session.tick(10_000).is_empty());
        assert!(!session.is_complete());
    }

    #[test]
    fn test_view_shows_selection_outcome() {
        let quiz = make_quiz(3);
        let store = CompletionMap::default();
        let mut session = QuizSession::new(&quiz, RunnerConfig::default(), &store);

        let view = session.view();
        assert_eq!(view.prompt, "Stage 1?");
        assert_eq!(view.options.len(), 2);
        assert!(view.selection.is_none());
        assert_eq!(view.progress, "1 / 3");

        session.select_option("b");
        let view = session.view();
        let selection = view.selection.expect("selection should be shown");
        assert_eq!(selection.option_id, "b");
        assert_eq!(selection.outcome, "Impulse buys add up.");
        assert!(!selection.correct);
    }

    #[test]
    fn test_summary_only_when_complete() {
        let quiz = make_quiz(1);
        let store = CompletionMap::default();
        let mut session = QuizSession::new(&quiz, RunnerConfig::default(), &store);
        assert!(session.summary().is_none());

        session.select_option("a");
        session.advance();

        let summary = session.summary().expect("complete run has a summary");
        assert_eq!(summary.score, 1);
        assert_eq!(summary.total_stages, 1);
        assert!(summary.perfect);
        assert_eq!(summary.reward.coins, 50);
        assert_eq!(summary.reward.xp, 25);
    }

    #[test]
    fn test_record_completion_writes_once() {
        let quiz = make_quiz(1);
        let mut store = CompletionMap::default();
        let mut session = QuizSession::new(&quiz, RunnerConfig::default(), &store);
        session.select_option("b");
        session.advance();

        let first = record_completion(&mut session, &mut store);
        assert!(first.is_some());
        assert!(store.get("budget-basics"));

        let second = record_completion(&mut session, &mut store);
        assert!(second.is_none());
    }

    #[test]
    fn test_record_completion_ignores_incomplete_run() {
        let quiz = make_quiz(2);
        let mut store = CompletionMap::default();
        let mut session = QuizSession::new(&quiz, RunnerConfig::default(), &store);
        session.select_option("a");

        assert!(record_completion(&mut session, &mut store).is_none());
        assert!(!store.get("budget-basics"));
    }

    #[test]
    fn test_replay_allowed_after_completion() {
        let quiz = make_quiz(1);
        let mut store = CompletionMap::default();
        store.set("budget-basics", true);

        let mut session = QuizSession::new(&quiz, RunnerConfig::default(), &store);
        session.select_option("a");
        session.advance();

        assert!(session.is_complete());
        assert!(session.previously_completed());
    }
}
