//! Simulation runner driving real quiz sessions.

use super::config::{AdvanceMode, AnswerStrategy, SimConfig};
use super::report::{RunStats, SimReport};
use crate::catalog::Catalog;
use crate::completion::CompletionStore;
use crate::quiz::{feedback_points, record_completion, QuizDefinition, QuizSession};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Run the configured simulation over the catalog and return a report.
pub fn run_simulation<S>(catalog: &Catalog, config: &SimConfig, store: &mut S) -> SimReport
where
    S: CompletionStore + ?Sized,
{
    let quizzes: Vec<&QuizDefinition> = match &config.game_id {
        Some(id) => catalog.get(id).into_iter().collect(),
        None => catalog.iter().collect(),
    };
    if quizzes.is_empty() {
        log::warn!("nothing to simulate (game filter: {:?})", config.game_id);
    }
    if config.tick_interval_ms == 0 {
        log::warn!("tick interval of 0ms would never reach the reveal; using 1ms");
    }

    let mut all_runs = Vec::with_capacity(quizzes.len() * config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        for quiz in &quizzes {
            let stats = simulate_quiz(quiz, config, store, &mut rng);
            if config.verbosity >= 2 {
                println!(
                    "Run {}/{} - {} {}/{}{}",
                    run_idx + 1,
                    config.num_runs,
                    stats.game_id,
                    stats.score,
                    stats.total_stages,
                    if stats.perfect { " (perfect)" } else { "" }
                );
            }
            all_runs.push(stats);
        }
    }

    SimReport::from_runs(config.strategy.name(), all_runs)
}

/// Play one quiz from mount to summary.
pub fn simulate_quiz<S, R>(
    quiz: &QuizDefinition,
    config: &SimConfig,
    store: &mut S,
    rng: &mut R,
) -> RunStats
where
    S: CompletionStore + ?Sized,
    R: Rng,
{
    let mut session = QuizSession::new(quiz, config.runner, &*store);
    let mut points = 0;
    let mut completed_by_reveal = false;
    let mut reveal_wait_ms = 0;

    for stage in &quiz.stages {
        let Some(option_id) = choose_option(stage, config.strategy, rng) else {
            break;
        };
        let events = session.select_option(&option_id);
        points += feedback_points(&events);

        if session.reveal_pending() && config.advance_mode == AdvanceMode::WaitForReveal {
            let step = config.tick_step_ms();
            let max_ticks = config.runner.reveal_delay_ms.div_ceil(step) + 1;
            let mut ticks = 0;
            while !session.is_complete() && session.reveal_pending() && ticks < max_ticks {
                session.tick(step);
                reveal_wait_ms += step;
                ticks += 1;
            }
            completed_by_reveal = session.is_complete();
        } else {
            session.advance();
        }
    }

    if config.record {
        record_completion(&mut session, store);
    }

    let state = session.state();
    RunStats {
        game_id: quiz.game_id.clone(),
        score: state.score(),
        total_stages: quiz.stage_count(),
        perfect: session.is_perfect(),
        feedback_points: points,
        completed_by_reveal,
        reveal_wait_ms,
        completed: session.is_complete(),
    }
}

fn choose_option<R: Rng>(
    stage: &crate::quiz::StageDefinition,
    strategy: AnswerStrategy,
    rng: &mut R,
) -> Option<String> {
    let option = match strategy {
        AnswerStrategy::AllCorrect => stage.correct_option(),
        AnswerStrategy::AllWrong => stage.options.iter().find(|o| !o.is_correct),
        AnswerStrategy::Random => {
            if stage.options.is_empty() {
                None
            } else {
                stage.options.get(rng.gen_range(0..stage.options.len()))
            }
        }
    };
    option.map(|o| o.id.clone())
}
