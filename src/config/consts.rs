// src/config/consts.rs

// Input
pub const DEFAULT_INPUT: &str = "players.txt";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "nba_players";

// Console
pub const DEFAULT_SAMPLE_ROWS: usize = 5;
pub const RULE_WIDTH: usize = 120;

// Environment overrides (read by the CLI)
pub const ENV_INPUT: &str = "NBA_SCRAPE_INPUT";
pub const ENV_OUT: &str = "NBA_SCRAPE_OUT";
pub const ENV_LOG: &str = "NBA_SCRAPE_LOG";
