use std::path::Path;

use tracing::level_filters::LevelFilter;
use tracing::warn;

use crate::ai::{RandomAgent, SamplingStrategy};
use crate::error::{ConfigError, RulesError};
use crate::game::{GameKind, GameRules, Placement, Player};

/// Who sits in the second seat.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Opponent {
    Human,
    Computer,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    Enumerate,
    Reject,
}

/// Which game to play, on what board, against whom.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub kind: GameKind,
    /// Unset means the console asks at startup and the terminal UI seats two players
    pub opponent: Option<Opponent>,
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub run_length: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            kind: GameKind::ConnectFour,
            opponent: None,
            rows: None,
            cols: None,
            run_length: None,
        }
    }
}

/// How the computer opponent plays.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ComputerConfig {
    pub plays: Player,
    pub strategy: StrategyKind,
    pub max_attempts: usize,
    pub seed: Option<u64>,
}

impl Default for ComputerConfig {
    fn default() -> Self {
        ComputerConfig {
            plays: Player::O,
            strategy: StrategyKind::Enumerate,
            max_attempts: 64,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: "warn".to_string(),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub computer: ComputerConfig,
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Board rules for the configured game, with any size overrides applied.
    pub fn rules(&self) -> Result<GameRules, RulesError> {
        let base = GameRules::for_kind(self.game.kind);
        GameRules::new(
            self.game.rows.unwrap_or(base.rows()),
            self.game.cols.unwrap_or(base.cols()),
            self.game.run_length.unwrap_or(base.run_length()),
            base.placement(),
        )
    }

    pub fn sampling_strategy(&self) -> SamplingStrategy {
        match self.computer.strategy {
            StrategyKind::Enumerate => SamplingStrategy::Enumerate,
            StrategyKind::Reject => SamplingStrategy::Reject {
                max_attempts: self.computer.max_attempts,
            },
        }
    }

    /// The computer opponent, seeded when a seed is configured.
    pub fn computer_agent(&self) -> RandomAgent {
        match self.computer.seed {
            Some(seed) => RandomAgent::with_seed(self.sampling_strategy(), seed),
            None => RandomAgent::new(self.sampling_strategy()),
        }
    }

    pub fn log_level(&self) -> Result<LevelFilter, ConfigError> {
        self.log
            .level
            .parse()
            .map_err(|_| ConfigError::Validation(format!("unknown log.level '{}'", self.log.level)))
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rules = self.rules()?;

        // Placement moves are typed as one digit and one letter
        if rules.placement() == Placement::Free {
            if rules.rows() > 9 {
                return Err(ConfigError::Validation(
                    "game.rows must be <= 9 for tic-tac-toe".into(),
                ));
            }
            if rules.cols() > 26 {
                return Err(ConfigError::Validation(
                    "game.cols must be <= 26 for tic-tac-toe".into(),
                ));
            }
        }

        if self.computer.max_attempts == 0 {
            return Err(ConfigError::Validation(
                "computer.max_attempts must be >= 1".into(),
            ));
        }

        self.log_level()?;
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
