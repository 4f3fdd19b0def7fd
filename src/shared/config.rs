//! Application configuration. Package input, output format, UI switches.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Environment prefix for every setting (e.g. WORKOUT_STATS_PACKAGES_PATH).
pub const ENV_PREFIX: &str = "WORKOUT_STATS";

/// How summaries are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One rendered line per workout.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" | "jsonl" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Package file (.json or semicolon CSV). Read from WORKOUT_STATS_PACKAGES_PATH.
    /// Unset: the built-in demonstration packages are used.
    #[serde(default)]
    pub packages_path: Option<String>,

    /// `text` or `json`. Read from WORKOUT_STATS_OUTPUT_FORMAT.
    #[serde(default)]
    pub output_format: Option<String>,

    /// Enter workouts through prompts instead of a package batch. Read from WORKOUT_STATS_INTERACTIVE.
    #[serde(default)]
    pub interactive: Option<bool>,

    /// Print the startup banner (default true). Read from WORKOUT_STATS_BANNER.
    #[serde(default)]
    pub banner: Option<bool>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true));
        if let Ok(path) = std::env::var(format!("{}_CONFIG", ENV_PREFIX)) {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the output format. Falls back to text if unset or invalid.
    pub fn output_format_or_default(&self) -> OutputFormat {
        self.output_format
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive.unwrap_or(false)
    }

    pub fn show_banner(&self) -> bool {
        self.banner.unwrap_or(true)
    }
}
