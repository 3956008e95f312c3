//! Game configuration types.
//!
//! Hosts configure the engine at startup by providing:
//! - `Difficulty`: Which board size is being played
//! - `DifficultySettings`: Pair count and board columns per difficulty
//! - `GameConfig`: Combines difficulty table, delays, catalog policy and scoring
//!
//! Every field has a default, so a TOML file only needs the keys it changes:
//!
//! ```
//! use wwii_memory::core::{Difficulty, GameConfig};
//!
//! let config = GameConfig::from_toml_str(r#"
//!     default_difficulty = "hard"
//!     mismatch_delay_ms = 2000
//! "#).unwrap();
//!
//! assert_eq!(config.default_difficulty, Difficulty::Hard);
//! assert_eq!(config.match_delay_ms, 1000);
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::scoring::ScoreRules;

/// Identifier sent with every completion notification unless overridden.
pub const DEFAULT_BLOCK_ID: &str = "6853c6e77405ab9cb3e4cf03";

/// Board size selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 4 pairs by default.
    Easy,
    /// 6 pairs by default.
    #[default]
    Medium,
    /// 8 pairs by default (the whole built-in catalog).
    Hard,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Lowercase name, as used in config files and completion payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ConfigError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Settings for one difficulty level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultySettings {
    /// Number of pairs dealt (board holds twice as many cards).
    pub pairs: usize,
    /// Board columns used by renderers.
    pub columns: usize,
}

impl DifficultySettings {
    /// Create settings for a difficulty.
    #[must_use]
    pub const fn new(pairs: usize, columns: usize) -> Self {
        Self { pairs, columns }
    }
}

/// Per-difficulty settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyTable {
    pub easy: DifficultySettings,
    pub medium: DifficultySettings,
    pub hard: DifficultySettings,
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self {
            easy: DifficultySettings::new(4, 4),
            medium: DifficultySettings::new(6, 4),
            hard: DifficultySettings::new(8, 4),
        }
    }
}

impl DifficultyTable {
    /// Settings for a difficulty.
    #[must_use]
    pub fn get(&self, difficulty: Difficulty) -> DifficultySettings {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    /// Mutable settings for a difficulty.
    pub fn get_mut(&mut self, difficulty: Difficulty) -> &mut DifficultySettings {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }
}

/// What the deck builder does when a difficulty asks for more definitions
/// than the catalog holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogPolicy {
    /// Refuse to build: the catalog must cover every difficulty.
    #[default]
    Strict,
    /// Deal every definition available.
    Truncate,
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Difficulty of the first game.
    pub default_difficulty: Difficulty,

    /// Pair count and columns per difficulty.
    pub difficulties: DifficultyTable,

    /// Delay before a matching pair is marked matched.
    pub match_delay_ms: u64,

    /// Delay before a mismatched pair is turned back over.
    pub mismatch_delay_ms: u64,

    /// Interval between stopwatch ticks. Each tick adds one second.
    pub tick_interval_ms: u64,

    /// Behaviour when the catalog is shorter than a difficulty needs.
    pub catalog_policy: CatalogPolicy,

    /// Opaque identifier carried by completion notifications.
    pub block_id: String,

    /// Score constants.
    pub scoring: ScoreRules,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_difficulty: Difficulty::Medium,
            difficulties: DifficultyTable::default(),
            match_delay_ms: 1000,
            mismatch_delay_ms: 1500,
            tick_interval_ms: 1000,
            catalog_policy: CatalogPolicy::Strict,
            block_id: DEFAULT_BLOCK_ID.to_string(),
            scoring: ScoreRules::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for difficulty in Difficulty::ALL {
            let settings = self.difficulties.get(difficulty);
            if settings.pairs == 0 {
                return Err(ConfigError::Invalid {
                    field: "difficulties.pairs",
                    reason: format!("{difficulty} must deal at least one pair"),
                });
            }
            if settings.columns == 0 {
                return Err(ConfigError::Invalid {
                    field: "difficulties.columns",
                    reason: format!("{difficulty} must have at least one column"),
                });
            }
        }

        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "tick_interval_ms",
                reason: "must be greater than zero".to_string(),
            });
        }

        if self.scoring.min_score > self.scoring.max_score {
            return Err(ConfigError::Invalid {
                field: "scoring.min_score",
                reason: format!(
                    "{} exceeds max_score {}",
                    self.scoring.min_score, self.scoring.max_score
                ),
            });
        }

        Ok(())
    }

    /// Settings for a difficulty.
    #[must_use]
    pub fn settings(&self, difficulty: Difficulty) -> DifficultySettings {
        self.difficulties.get(difficulty)
    }

    /// Delay before a matching pair resolves.
    #[must_use]
    pub fn match_delay(&self) -> Duration {
        Duration::from_millis(self.match_delay_ms)
    }

    /// Delay before a mismatched pair resolves.
    #[must_use]
    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }

    /// Stopwatch tick interval.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Set the starting difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.default_difficulty = difficulty;
        self
    }

    /// Override settings for one difficulty.
    #[must_use]
    pub fn with_settings(mut self, difficulty: Difficulty, settings: DifficultySettings) -> Self {
        *self.difficulties.get_mut(difficulty) = settings;
        self
    }

    /// Set match and mismatch delays.
    #[must_use]
    pub fn with_delays(mut self, matched: Duration, mismatched: Duration) -> Self {
        self.match_delay_ms = duration_ms(matched);
        self.mismatch_delay_ms = duration_ms(mismatched);
        self
    }

    /// Set the stopwatch tick interval.
    #[must_use]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval_ms = duration_ms(interval);
        self
    }

    /// Set the catalog policy.
    #[must_use]
    pub fn with_catalog_policy(mut self, policy: CatalogPolicy) -> Self {
        self.catalog_policy = policy;
        self
    }

    /// Set the block identifier sent on completion.
    #[must_use]
    pub fn with_block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = block_id.into();
        self
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
