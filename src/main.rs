//! scenario-quiz command line: list, validate and simulate catalog quizzes.
//!
//! Usage:
//!   scenario-quiz <command> [OPTIONS]
//!
//! Commands:
//!   list              Show every quiz with its completion flag
//!   validate          Check catalog content; exits 1 on errors
//!   simulate          Autoplay quizzes and print a report
//!   reset <game-id>   Clear a completion flag
//!
//! Options:
//!   --catalog FILE       Load quizzes from a JSON file instead of the built-in set
//!   --store FILE         Completion file (default: ~/.scenario-quiz/completion.json)
//!   --strategy NAME      correct | wrong | random (default: random)
//!   --seed N             RNG seed for the random strategy
//!   --runs N             Playthroughs per quiz (default: 1)
//!   --game ID            Only simulate this quiz
//!   --reveal-delay MS    Reveal delay before the summary (default: 800)
//!   --manual             Advance manually instead of waiting for the reveal
//!   --record             Save simulated completions to the store
//!   --verbose            Per-run output
//!   --quiet              Only the final summary line

use scenario_quiz::catalog::{load_catalog, validate_catalog, Catalog};
use scenario_quiz::completion::{CompletionStore, FileCompletionStore};
use scenario_quiz::core::config::RunnerConfig;
use scenario_quiz::simulator::{run_simulation, AdvanceMode, AnswerStrategy, SimConfig};
use scenario_quiz::utils::build_info;
use std::io;
use std::path::PathBuf;
use std::process;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    List,
    Validate,
    Simulate,
    Reset(String),
    Version,
    Help,
}

struct CliArgs {
    command: Command,
    catalog_path: Option<PathBuf>,
    store_path: Option<PathBuf>,
    sim: SimConfig,
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut command = None;
    let mut catalog_path = None;
    let mut store_path = None;
    let mut sim = SimConfig::default();

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("{} requires a value", flag))
        };

        match arg.as_str() {
            "--version" | "-v" => command = Some(Command::Version),
            "--help" | "-h" => command = Some(Command::Help),
            "--catalog" => catalog_path = Some(PathBuf::from(value("--catalog")?)),
            "--store" => store_path = Some(PathBuf::from(value("--store")?)),
            "--strategy" => {
                let name = value("--strategy")?;
                sim.strategy = AnswerStrategy::from_name(&name)
                    .ok_or_else(|| format!("unknown strategy '{}'", name))?;
            }
            "--seed" => sim.seed = Some(parse_number("--seed", &value("--seed")?)?),
            "--runs" => sim.num_runs = parse_number("--runs", &value("--runs")?)?,
            "--game" => sim.game_id = Some(value("--game")?),
            "--reveal-delay" => {
                let ms = parse_number("--reveal-delay", &value("--reveal-delay")?)?;
                sim.runner = RunnerConfig::with_reveal_delay(ms);
            }
            "--manual" => sim.advance_mode = AdvanceMode::Manual,
            "--record" => sim.record = true,
            "--verbose" => sim.verbosity = 2,
            "--quiet" => sim.verbosity = 0,
            "list" if command.is_none() => command = Some(Command::List),
            "validate" if command.is_none() => command = Some(Command::Validate),
            "simulate" if command.is_none() => command = Some(Command::Simulate),
            "reset" if command.is_none() => {
                command = Some(Command::Reset(value("reset")?));
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(CliArgs {
        command: command.unwrap_or(Command::Help),
        catalog_path,
        store_path,
        sim,
    })
}

fn parse_number<T: std::str::FromStr>(flag: &str, raw: &str) -> Result<T, String> {
    raw.parse()
        .map_err(|_| format!("{} requires a number, got '{}'", flag, raw))
}

fn print_help() {
    println!("Scenario Quiz - money-decision quiz runner\n");
    println!("Usage: scenario-quiz <command> [OPTIONS]\n");
    println!("Commands:");
    println!("  list              Show every quiz with its completion flag");
    println!("  validate          Check catalog content");
    println!("  simulate          Autoplay quizzes and print a report");
    println!("  reset <game-id>   Clear a completion flag");
    println!("  --version         Show version information");
    println!("  --help            Show this help message\n");
    println!("Options:");
    println!("  --catalog FILE  --store FILE  --strategy correct|wrong|random");
    println!("  --seed N  --runs N  --game ID  --reveal-delay MS");
    println!("  --manual  --record  --verbose  --quiet");
}

fn open_catalog(path: Option<&PathBuf>) -> Catalog {
    match path {
        Some(path) => match load_catalog(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        },
        None => Catalog::builtin(),
    }
}

fn open_store(path: Option<&PathBuf>) -> io::Result<FileCompletionStore> {
    match path {
        Some(path) => Ok(FileCompletionStore::open(path)),
        None => FileCompletionStore::open_default(),
    }
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'scenario-quiz --help' for usage.");
            process::exit(1);
        }
    };

    match cli.command {
        Command::Help => print_help(),
        Command::Version => println!("{}", build_info::version_line()),
        Command::List => {
            let catalog = open_catalog(cli.catalog_path.as_ref());
            let store = open_store(cli.store_path.as_ref())?;
            for quiz in catalog.iter() {
                println!(
                    "{} {:<22} {:<26} {} stages  {}",
                    if store.get(&quiz.game_id) { "✓" } else { " " },
                    quiz.game_id,
                    quiz.title,
                    quiz.stage_count(),
                    quiz.reward().description()
                );
            }
        }
        Command::Validate => {
            let catalog = open_catalog(cli.catalog_path.as_ref());
            let errors = validate_catalog(&catalog);
            if errors.is_empty() {
                println!("{} quizzes OK", catalog.len());
            } else {
                for error in &errors {
                    eprintln!("{}", error);
                }
                eprintln!("{} problem(s) found", errors.len());
                process::exit(1);
            }
        }
        Command::Simulate => {
            let catalog = open_catalog(cli.catalog_path.as_ref());
            let mut store = open_store(cli.store_path.as_ref())?;
            let report = run_simulation(&catalog, &cli.sim, &mut store);
            if cli.sim.verbosity == 0 {
                println!("{}", report.summary_line());
            } else {
                print!("{}", report.to_text());
            }
            if !report.all_completed() {
                process::exit(1);
            }
        }
        Command::Reset(game_id) => {
            let mut store = open_store(cli.store_path.as_ref())?;
            if store.get(&game_id) {
                store.set(&game_id, false);
                println!("Cleared completion for '{}'", game_id);
            } else {
                println!("'{}' was not completed", game_id);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("scenario-quiz")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_no_args_shows_help() {
        let cli = parse_args(&args(&[])).unwrap();
        assert_eq!(cli.command, Command::Help);
    }

    #[test]
    fn test_simulate_flags() {
        let cli = parse_args(&args(&[
            "simulate",
            "--strategy",
            "correct",
            "--seed",
            "7",
            "--runs",
            "3",
            "--reveal-delay",
            "0",
            "--manual",
        ]))
        .unwrap();

        assert_eq!(cli.command, Command::Simulate);
        assert_eq!(cli.sim.strategy, AnswerStrategy::AllCorrect);
        assert_eq!(cli.sim.seed, Some(7));
        assert_eq!(cli.sim.num_runs, 3);
        assert_eq!(cli.sim.runner.reveal_delay_ms, 0);
        assert_eq!(cli.sim.advance_mode, AdvanceMode::Manual);
    }

    #[test]
    fn test_verbosity_flags() {
        assert_eq!(parse_args(&args(&["simulate"])).unwrap().sim.verbosity, 1);
        assert_eq!(
            parse_args(&args(&["simulate", "--quiet"])).unwrap().sim.verbosity,
            0
        );
        assert_eq!(
            parse_args(&args(&["simulate", "--verbose"])).unwrap().sim.verbosity,
            2
        );
    }

    #[test]
    fn test_reset_requires_game_id() {
        assert!(parse_args(&args(&["reset"])).is_err());
        let cli = parse_args(&args(&["reset", "budget-basics"])).unwrap();
        assert_eq!(cli.command, Command::Reset("budget-basics".to_string()));
    }

    #[test]
    fn test_bad_values_rejected() {
        assert!(parse_args(&args(&["simulate", "--runs", "lots"])).is_err());
        assert!(parse_args(&args(&["simulate", "--strategy", "lucky"])).is_err());
        assert!(parse_args(&args(&["simulate", "--seed"])).is_err());
        assert!(parse_args(&args(&["dance"])).is_err());
    }
}
