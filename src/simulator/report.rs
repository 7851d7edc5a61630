//! Simulation report generation.

/// Outcome of one simulated playthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub game_id: String,
    pub score: u32,
    pub total_stages: usize,
    pub perfect: bool,
    /// Points carried by correct-answer feedback events
    pub feedback_points: u32,
    /// Finished by the reveal timer rather than a manual advance
    pub completed_by_reveal: bool,
    /// Simulated time spent waiting on the reveal
    pub reveal_wait_ms: u64,
    pub completed: bool,
}

/// Aggregates for one quiz across all runs.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizReport {
    pub game_id: String,
    pub runs: u32,
    pub completed_runs: u32,
    pub avg_score: f64,
    pub total_stages: usize,
    pub perfect_runs: u32,
    pub zero_runs: u32,
}

/// Aggregated results from every simulated run.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub strategy: &'static str,
    pub quizzes: Vec<QuizReport>,
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a report from run stats, grouping by quiz in first-seen order.
    pub fn from_runs(strategy: &'static str, runs: Vec<RunStats>) -> Self {
        let mut order: Vec<&str> = Vec::new();
        for run in &runs {
            if !order.contains(&run.game_id.as_str()) {
                order.push(run.game_id.as_str());
            }
        }

        let quizzes = order
            .iter()
            .map(|game_id| {
                let quiz_runs: Vec<&RunStats> =
                    runs.iter().filter(|r| r.game_id == *game_id).collect();
                let count = quiz_runs.len() as u32;
                QuizReport {
                    game_id: game_id.to_string(),
                    runs: count,
                    completed_runs: quiz_runs.iter().filter(|r| r.completed).count() as u32,
                    avg_score: quiz_runs.iter().map(|r| r.score as f64).sum::<f64>()
                        / count.max(1) as f64,
                    total_stages: quiz_runs.first().map(|r| r.total_stages).unwrap_or(0),
                    perfect_runs: quiz_runs.iter().filter(|r| r.perfect).count() as u32,
                    zero_runs: quiz_runs.iter().filter(|r| r.score == 0).count() as u32,
                }
            })
            .collect();

        Self {
            strategy,
            quizzes,
            run_stats: runs,
        }
    }

    /// True if every run reached its summary.
    pub fn all_completed(&self) -> bool {
        self.run_stats.iter().all(|r| r.completed)
    }

    pub fn quiz(&self, game_id: &str) -> Option<&QuizReport> {
        self.quizzes.iter().find(|q| q.game_id == game_id)
    }

    /// One-line totals, e.g. "25 runs, 25 completed, 7 perfect".
    pub fn summary_line(&self) -> String {
        format!(
            "{} runs, {} completed, {} perfect",
            self.run_stats.len(),
            self.run_stats.iter().filter(|r| r.completed).count(),
            self.run_stats.iter().filter(|r| r.perfect).count()
        )
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    QUIZ SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Strategy: {}   Runs: {}   Completed: {}\n\n",
            self.strategy,
            self.run_stats.len(),
            self.run_stats.iter().filter(|r| r.completed).count()
        ));

        report.push_str("── QUIZZES ──────────────────────────────────────────────────────\n");
        for quiz in &self.quizzes {
            report.push_str(&format!(
                "  {:<22} avg {:>4.1}/{}  perfect {:>3}  zero {:>3}  done {}/{}\n",
                quiz.game_id,
                quiz.avg_score,
                quiz.total_stages,
                quiz.perfect_runs,
                quiz.zero_runs,
                quiz.completed_runs,
                quiz.runs
            ));
        }

        report
    }
}
