//! Quiz progression: option locking, stage advancement, completion.
//!
//! All transitions are guarded no-ops when they do not apply (answering twice,
//! advancing an unanswered stage, anything after completion), so the caller
//! can forward raw input events without filtering them first.

use super::events::QuizEvent;
use super::types::{QuizDefinition, RunState};
use crate::core::constants::POINTS_PER_CORRECT_ANSWER;

/// Start a fresh run at the first stage.
pub fn initialize(definition: &QuizDefinition) -> RunState {
    if definition.stages.is_empty() {
        log::warn!(
            "quiz '{}' has no stages; every transition will be ignored",
            definition.game_id
        );
    }
    RunState::default()
}

/// Lock in an answer for the current stage.
///
/// Scores the stage when the option is correct and reports
/// [`QuizEvent::RevealScheduled`] when the stage is the last one. Ignored when
/// an option is already locked, the run is complete, or `option_id` is not
/// part of the current stage.
pub fn select_option(
    state: &mut RunState,
    definition: &QuizDefinition,
    option_id: &str,
) -> Vec<QuizEvent> {
    if state.is_complete || state.selected_option.is_some() {
        return Vec::new();
    }

    let stage_index = state.current_stage_index;
    let Some(stage) = definition.stage(stage_index) else {
        return Vec::new();
    };
    let Some(option) = stage.option(option_id) else {
        log::warn!(
            "quiz '{}' stage {} has no option '{}'",
            definition.game_id,
            stage_index,
            option_id
        );
        return Vec::new();
    };

    state.selected_option = Some(option.id.clone());
    log::debug!(
        "quiz '{}' stage {} locked '{}' (correct: {})",
        definition.game_id,
        stage_index,
        option.id,
        option.is_correct
    );

    let mut events = vec![QuizEvent::OptionLocked {
        stage_index,
        option_id: option.id.clone(),
        correct: option.is_correct,
    }];

    if option.is_correct {
        state.score += 1;
        events.push(QuizEvent::CorrectAnswer {
            points: POINTS_PER_CORRECT_ANSWER,
        });
    }

    if definition.last_stage_index() == Some(stage_index) {
        events.push(QuizEvent::RevealScheduled);
    }

    events
}

/// Move past an answered stage, or finish the run from the last stage.
///
/// Ignored until the current stage has an answer. Finishing here makes a
/// later reveal-timer completion a no-op.
pub fn advance_stage(state: &mut RunState, definition: &QuizDefinition) -> Vec<QuizEvent> {
    if state.is_complete || state.selected_option.is_none() {
        return Vec::new();
    }

    if definition.last_stage_index() == Some(state.current_stage_index) {
        return vec![finish(state, definition)];
    }

    state.current_stage_index += 1;
    state.selected_option = None;
    log::debug!(
        "quiz '{}' advanced to stage {}",
        definition.game_id,
        state.current_stage_index
    );

    vec![QuizEvent::StageAdvanced {
        stage_index: state.current_stage_index,
    }]
}

/// Deferred completion fired when the reveal delay elapses.
///
/// Returns `None` if the run already completed (manual advance won the race)
/// or the final stage has not been answered.
pub fn complete_after_reveal(
    state: &mut RunState,
    definition: &QuizDefinition,
) -> Option<QuizEvent> {
    if state.is_complete
        || state.selected_option.is_none()
        || definition.last_stage_index() != Some(state.current_stage_index)
    {
        return None;
    }
    Some(finish(state, definition))
}

fn finish(state: &mut RunState, definition: &QuizDefinition) -> QuizEvent {
    state.is_complete = true;
    let total_stages = definition.stage_count();
    log::debug!(
        "quiz '{}' complete: {}/{}",
        definition.game_id,
        state.score,
        total_stages
    );
    QuizEvent::QuizCompleted {
        score: state.score,
        total_stages,
        perfect: is_perfect(state, definition),
    }
}

/// Completed with every stage answered correctly.
pub fn is_perfect(state: &RunState, definition: &QuizDefinition) -> bool {
    state.is_complete
        && definition.stage_count() > 0
        && state.score as usize == definition.stage_count()
}

/// "position / total", 1-based. Stays on the last stage once complete.
pub fn progress_label(state: &RunState, definition: &QuizDefinition) -> String {
    let total = definition.stage_count();
    let position = (state.current_stage_index + 1).min(total);
    format!("{} / {}", position, total)
}
