//! Configuration and constants for the dashboard data pipeline.
//!
//! The constants describe the reference dataset. A TOML file can override
//! the data path, the Games years, the tracked events and the row policy.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Olympic Games the athlete competed in
pub const DEFAULT_GAMES_YEARS: &[u16] = &[2000, 2004, 2008, 2012, 2016];

/// Case-sensitive substring that marks a team event
pub const RELAY_MARKER: &str = "Relay";

/// Events swum at several Games, charted as time series
pub const DEFAULT_TRACKED_EVENTS: &[&str] = &["Men 200 Butterfly", "Men 100 Butterfly"];

/// Default location of the medal table
pub const DEFAULT_DATA_PATH: &str = "data/mp_olympics_medals_data.csv";

// Column names (Year may be replaced by Date)
pub const YEAR_COLUMN: &str = "Year";
pub const DATE_COLUMN: &str = "Date";
pub const EVENT_COLUMN: &str = "Event";
pub const MEDAL_COLUMN: &str = "Medal";
pub const TIME_COLUMN: &str = "Time";
pub const NOTE_COLUMN: &str = "Note";

/// What the loader does with a row that fails validation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowPolicy {
    /// Drop the row, log a warning and keep loading
    #[default]
    Skip,
    /// Abort the load with `LoadError::MalformedRow`
    Fail,
}

/// Complete dashboard configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub games: GamesConfig,

    #[serde(default)]
    pub series: SeriesConfig,
}

/// Input table settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    /// Path to the medal CSV
    #[serde(default = "default_data_path")]
    pub path: PathBuf,

    /// Malformed row handling
    #[serde(default)]
    pub row_policy: RowPolicy,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
            row_policy: RowPolicy::default(),
        }
    }
}

/// Known Games years
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GamesConfig {
    #[serde(default = "default_years")]
    pub years: Vec<u16>,
}

impl Default for GamesConfig {
    fn default() -> Self {
        Self {
            years: default_years(),
        }
    }
}

/// Events charted as time series
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeriesConfig {
    #[serde(default = "default_events")]
    pub events: Vec<String>,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            events: default_events(),
        }
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

fn default_years() -> Vec<u16> {
    DEFAULT_GAMES_YEARS.to_vec()
}

fn default_events() -> Vec<String> {
    DEFAULT_TRACKED_EVENTS.iter().map(|e| e.to_string()).collect()
}

impl DashboardConfig {
    /// Check invariants that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.games.years.is_empty() {
            return Err(ConfigError::Invalid("games.years is empty".to_string()));
        }

        let mut years = self.games.years.clone();
        years.sort_unstable();
        if years.windows(2).any(|w| w[0] == w[1]) {
            return Err(ConfigError::Invalid(
                "games.years contains duplicates".to_string(),
            ));
        }

        if self.series.events.iter().any(|e| e.trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "series.events contains an empty name".to_string(),
            ));
        }

        Ok(())
    }

    /// Games years in chronological order
    pub fn sorted_years(&self) -> Vec<u16> {
        let mut years = self.games.years.clone();
        years.sort_unstable();
        years.dedup();
        years
    }
}

/// Load dashboard configuration from a TOML file
///
/// # Errors
/// * `ConfigError::Io` - If file cannot be read
/// * `ConfigError::Parse` - If TOML is invalid
/// * `ConfigError::Invalid` - If values break an invariant
///
/// # Example
/// ```ignore
/// let config = load_config("dashboard.toml")?;
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<DashboardConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: DashboardConfig = toml::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_dataset() {
        let config = DashboardConfig::default();
        assert_eq!(config.games.years, vec![2000, 2004, 2008, 2012, 2016]);
        assert_eq!(config.data.row_policy, RowPolicy::Skip);
        assert_eq!(config.series.events.len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: DashboardConfig = toml::from_str(
            r#"
            [data]
            row_policy = "fail"
            "#,
        )
        .unwrap();

        assert_eq!(config.data.row_policy, RowPolicy::Fail);
        assert_eq!(config.data.path, PathBuf::from(DEFAULT_DATA_PATH));
        assert_eq!(config.games.years, DEFAULT_GAMES_YEARS.to_vec());
    }

    #[test]
    fn test_duplicate_years_rejected() {
        let mut config = DashboardConfig::default();
        config.games.years = vec![2004, 2008, 2004];
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_sorted_years() {
        let mut config = DashboardConfig::default();
        config.games.years = vec![2016, 2000, 2008];
        assert_eq!(config.sorted_years(), vec![2000, 2008, 2016]);
    }
}
