//! Application-wide constants

pub mod config {
    pub const APP_DIR: &str = "pwkeeper";
    pub const FILENAME: &str = "pwkeeper.toml";

    pub const ENV_LOG_LEVEL: &str = "PWKEEPER_LOG_LEVEL";
    pub const ENV_SEED_ROWS: &str = "PWKEEPER_SEED_ROWS";

    pub const DEFAULT_LOG_LEVEL: &str = "info";
    pub const DEFAULT_SEED_ROWS: usize = 50;
    pub const DEFAULT_LINK_TEXT: &str = "www.baidu.com";
    pub const DEFAULT_LINK_URL: &str = "http://www.baidu.com";

    pub const LOGIN_WINDOW_SIZE: (f32, f32) = (400.0, 300.0);
    pub const MANAGER_WINDOW_SIZE: (f32, f32) = (500.0, 300.0);
}

pub mod validation {
    pub const MAX_SEED_ROWS: usize = 10_000;
    pub const MIN_WINDOW_DIMENSION: f32 = 200.0;
    pub const MAX_WINDOW_DIMENSION: f32 = 4096.0;
    pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
}

pub const WINDOW_TITLE: &str = "Username/Password Manager";
