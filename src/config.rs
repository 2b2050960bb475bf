use config::{Config, ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub betting: BettingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BettingConfig {
    /// Minimum stake per slip in USD
    #[serde(default = "default_min_stake")]
    pub min_stake: Decimal,
    /// Maximum stake per slip in USD
    #[serde(default = "default_max_stake")]
    pub max_stake: Decimal,
    /// Maximum number of legs in a parlay
    #[serde(default = "default_max_legs")]
    pub max_legs: usize,
}

fn default_min_stake() -> Decimal {
    use rust_decimal_macros::dec;
    dec!(5.00)
}

fn default_max_stake() -> Decimal {
    use rust_decimal_macros::dec;
    dec!(10000)
}

fn default_max_legs() -> usize {
    10
}

impl Default for BettingConfig {
    fn default() -> Self {
        Self {
            min_stake: default_min_stake(),
            max_stake: default_max_stake(),
            max_legs: default_max_legs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable JSON formatted logs
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();

        let builder = Config::builder()
            // Start with default values
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            // Load default config file
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Load environment-specific config (e.g., config/production.toml)
            .add_source(
                File::from(config_dir.join(
                    std::env::var("PARLAY_ENV").unwrap_or_else(|_| "development".to_string()),
                ))
                .required(false),
            )
            // Override with environment variables (PARLAY_BETTING__MIN_STAKE, etc.)
            .add_source(
                Environment::with_prefix("PARLAY")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.betting.min_stake <= Decimal::ZERO {
            errors.push("min_stake must be positive".to_string());
        }

        if self.betting.max_stake < self.betting.min_stake {
            errors.push(format!(
                "max_stake {} is below min_stake {}",
                self.betting.max_stake, self.betting.min_stake
            ));
        }

        if self.betting.max_legs == 0 {
            errors.push("max_legs must be at least 1".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            betting: BettingConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
