//! Read-only TOML configuration shared by both windows
//!
//! Loaded once at startup from `<config_dir>/pwkeeper/pwkeeper.toml`.
//! A missing file means defaults; env vars override whatever the file says.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{Level, error, info, warn};

use crate::constants::config::*;

/// Inner size of a window in logical points (0 = use default)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WindowSize {
    pub width: f32,
    pub height: f32,
}

impl WindowSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn as_array(self) -> [f32; 2] {
        [self.width, self.height]
    }
}

impl From<(f32, f32)> for WindowSize {
    fn from((width, height): (f32, f32)) -> Self {
        Self::new(width, height)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// One of error, warn, info, debug, trace
    pub log_level: String,

    /// Number of placeholder rows the main window starts with
    pub seed_rows: usize,

    /// Hyperlink shown at the top of the details dialog
    pub link_text: String,
    pub link_url: String,

    /// Ask before the Remove button deletes checked rows
    pub confirm_remove: bool,

    pub login_window: WindowSize,
    pub manager_window: WindowSize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            seed_rows: DEFAULT_SEED_ROWS,
            link_text: DEFAULT_LINK_TEXT.to_string(),
            link_url: DEFAULT_LINK_URL.to_string(),
            confirm_remove: false,
            login_window: LOGIN_WINDOW_SIZE.into(),
            manager_window: MANAGER_WINDOW_SIZE.into(),
        }
    }
}

impl AppConfig {
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(APP_DIR);
        path.push(FILENAME);
        path
    }

    /// Load from `path` (or the default location), apply env overrides and clamp
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);
        let mut config = Self::load_file(&path)?;
        config.apply_env_overrides(|key| env::var(key).ok());
        config.validate_and_clamp();
        Ok(config)
    }

    fn load_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "No config file found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        let config = Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Apply overrides looked up through `lookup` (normally `std::env::var`)
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level.trim().to_ascii_lowercase();
        }
        if let Some(raw) = lookup(ENV_SEED_ROWS) {
            match raw.trim().parse::<usize>() {
                Ok(rows) => self.seed_rows = rows,
                Err(e) => error!(var = ENV_SEED_ROWS, value = %raw, error = %e, "failed to parse env var"),
            }
        }
    }

    /// Clamp values to safe ranges, logging each correction
    pub fn validate_and_clamp(&mut self) {
        use crate::constants::validation::*;

        if self.seed_rows > MAX_SEED_ROWS {
            warn!(seed_rows = self.seed_rows, max = MAX_SEED_ROWS, "seed_rows exceeds maximum, clamping");
            self.seed_rows = MAX_SEED_ROWS;
        }

        self.log_level = self.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            warn!(log_level = %self.log_level, using = DEFAULT_LOG_LEVEL, "unknown log_level, using default");
            self.log_level = DEFAULT_LOG_LEVEL.to_string();
        }

        clamp_window("login_window", &mut self.login_window, LOGIN_WINDOW_SIZE.into());
        clamp_window("manager_window", &mut self.manager_window, MANAGER_WINDOW_SIZE.into());
    }

    pub fn tracing_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}

fn clamp_window(name: &str, size: &mut WindowSize, default: WindowSize) {
    size.width = clamp_dimension(name, "width", size.width, default.width);
    size.height = clamp_dimension(name, "height", size.height, default.height);
}

fn clamp_dimension(window: &str, axis: &str, value: f32, default: f32) -> f32 {
    use crate::constants::validation::*;

    // NaN fails both comparisons below, treat it as unset
    if value.is_nan() || value < MIN_WINDOW_DIMENSION {
        warn!(window, axis, value, using = default, "window dimension below minimum, using default");
        default
    } else if value > MAX_WINDOW_DIMENSION {
        warn!(window, axis, value, max = MAX_WINDOW_DIMENSION, "window dimension exceeds maximum, clamping");
        MAX_WINDOW_DIMENSION
    } else {
        value
    }
}
