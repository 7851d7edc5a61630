//! Integration test: catalog content and scripted playthroughs
//!
//! Loads catalogs from JSON, validates them, and runs the simulator over the
//! built-in set with each answer strategy.

use scenario_quiz::catalog::{load_catalog, parse_catalog, validate_catalog, Catalog};
use scenario_quiz::completion::{CompletionMap, CompletionStore};
use scenario_quiz::core::constants::REVEAL_DELAY_MS;
use scenario_quiz::simulator::{run_simulation, AdvanceMode, AnswerStrategy, SimConfig};
use std::fs;

const CUSTOM_CATALOG: &str = r#"{
    "quizzes": [
        {
            "gameId": "allowance",
            "title": "Allowance",
            "totalCoins": 10,
            "totalXp": 5,
            "stages": [
                {
                    "id": 1,
                    "prompt": "You get $10. Now what?",
                    "options": [
                        { "id": "a", "text": "Save half", "outcome": "Balanced.", "isCorrect": true },
                        { "id": "b", "text": "Spend all", "outcome": "Empty wallet.", "isCorrect": false }
                    ]
                },
                {
                    "id": 2,
                    "prompt": "A friend asks for a loan.",
                    "options": [
                        { "id": "a", "text": "Lend it all", "outcome": "Risky.", "isCorrect": false },
                        { "id": "b", "text": "Lend what you can spare", "outcome": "Sensible.", "isCorrect": true }
                    ]
                }
            ]
        }
    ]
}"#;

#[test]
fn test_builtin_catalog_has_five_valid_quizzes() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.len(), 5);
    assert!(validate_catalog(&catalog).is_empty());
    for quiz in catalog.iter() {
        assert_eq!(quiz.stage_count(), 5, "{}", quiz.game_id);
    }
}

#[test]
fn test_custom_catalog_loads_from_file() {
    let path = std::env::temp_dir().join(format!(
        "scenario-quiz-catalog-{}.json",
        std::process::id()
    ));
    fs::write(&path, CUSTOM_CATALOG).unwrap();

    let catalog = load_catalog(&path).unwrap();
    let quiz = catalog.get("allowance").unwrap();
    assert_eq!(quiz.stage_count(), 2);
    assert_eq!(quiz.reward().coins, 10);
    assert!(validate_catalog(&catalog).is_empty());

    fs::remove_file(path).ok();
}

#[test]
fn test_missing_catalog_file_errors() {
    let path = std::env::temp_dir().join("scenario-quiz-no-such-catalog.json");
    let err = load_catalog(&path).unwrap_err();
    assert!(err.to_string().contains("IO error"));
}

#[test]
fn test_invalid_content_is_reported() {
    let json = CUSTOM_CATALOG.replace(r#""isCorrect": false"#, r#""isCorrect": true"#);
    let catalog = parse_catalog(&json, "inline").unwrap();

    let errors = validate_catalog(&catalog);
    assert_eq!(errors.len(), 2);
    assert!(errors[0].to_string().starts_with("quiz 'allowance' stage 1:"));
}

#[test]
fn test_simulate_all_correct_is_perfect_everywhere() {
    let catalog = Catalog::builtin();
    let config = SimConfig::scripted(AnswerStrategy::AllCorrect, AdvanceMode::Manual);
    let mut store = CompletionMap::default();

    let report = run_simulation(&catalog, &config, &mut store);

    assert!(report.all_completed());
    assert_eq!(report.quizzes.len(), 5);
    for quiz in &report.quizzes {
        assert_eq!(quiz.perfect_runs, quiz.runs);
    }
    assert_eq!(store.completed_count(), 0);
}

#[test]
fn test_simulate_all_wrong_waits_for_reveal() {
    let catalog = Catalog::builtin();
    let config = SimConfig::scripted(AnswerStrategy::AllWrong, AdvanceMode::WaitForReveal);
    let mut store = CompletionMap::default();

    let report = run_simulation(&catalog, &config, &mut store);

    assert!(report.all_completed());
    for run in &report.run_stats {
        assert_eq!(run.score, 0);
        assert_eq!(run.feedback_points, 0);
        assert!(run.completed_by_reveal);
        assert_eq!(run.reveal_wait_ms, REVEAL_DELAY_MS);
    }
}

#[test]
fn test_simulate_record_marks_catalog_complete() {
    let catalog = Catalog::builtin();
    let mut config = SimConfig::scripted(AnswerStrategy::Random, AdvanceMode::WaitForReveal);
    config.record = true;
    config.game_id = Some("credit-card-trap".to_string());
    let mut store = CompletionMap::default();

    let report = run_simulation(&catalog, &config, &mut store);

    assert_eq!(report.run_stats.len(), 1);
    assert!(store.get("credit-card-trap"));
    assert!(!store.get("budget-basics"));
}

#[test]
fn test_random_runs_score_within_bounds() {
    let catalog = Catalog::builtin();
    let mut config = SimConfig::scripted(AnswerStrategy::Random, AdvanceMode::Manual);
    config.num_runs = 50;
    config.seed = Some(7);
    let mut store = CompletionMap::default();

    let report = run_simulation(&catalog, &config, &mut store);

    assert_eq!(report.run_stats.len(), 250);
    for run in &report.run_stats {
        assert!(run.completed);
        assert!(run.score as usize <= run.total_stages);
        assert_eq!(run.feedback_points, run.score);
        assert_eq!(run.perfect, run.score as usize == run.total_stages);
    }
    let text = report.to_text();
    assert!(text.contains("budget-basics"));
}
