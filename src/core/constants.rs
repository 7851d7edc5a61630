// Timing
pub const REVEAL_DELAY_MS: u64 = 800;
pub const TICK_INTERVAL_MS: u64 = 100;

// Scoring
pub const POINTS_PER_CORRECT_ANSWER: u32 = 1;

// Content shape
pub const MIN_OPTIONS_PER_STAGE: usize = 2;
pub const TYPICAL_STAGE_COUNT: usize = 5;

// Persistence
pub const DATA_DIR_NAME: &str = ".scenario-quiz";
pub const COMPLETION_FILE_NAME: &str = "completion.json";
