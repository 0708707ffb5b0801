//! Config parsing — load wizard configs from JSON or YAML
//!
//! Deserialize, check size limits, then run [`validate`](crate::validate).
//! Limits are enforced before validation proper so a corrupted file is
//! rejected on size alone.

use thiserror::Error;

use crate::config::GameConfig;
use crate::validate::{self, ConfigError, MAX_REELS, MIN_REELS};

/// Parsing limits for untrusted input
#[derive(Debug, Clone)]
pub struct ConfigLimits {
    pub max_name_length: usize,
    pub max_symbols: usize,
    pub max_payout_value: u32,
    pub min_reels: u8,
    pub max_reels: u8,
}

impl Default for ConfigLimits {
    fn default() -> Self {
        Self {
            max_name_length: 256,
            max_symbols: 50,
            max_payout_value: 100_000,
            min_reels: MIN_REELS,
            max_reels: MAX_REELS,
        }
    }
}

/// An error produced while loading a config file
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed JSON: {0}")]
    Json(String),

    #[error("malformed YAML: {0}")]
    Yaml(String),

    #[error("limit exceeded: {0}")]
    Limit(String),

    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

/// Config parser
pub struct ConfigParser {
    /// Size limits applied before validation
    pub limits: ConfigLimits,
}

impl ConfigParser {
    /// Create a parser with default limits
    pub fn new() -> Self {
        Self {
            limits: ConfigLimits::default(),
        }
    }

    /// Create a parser with custom limits
    pub fn with_limits(limits: ConfigLimits) -> Self {
        Self { limits }
    }

    /// Parse a JSON config
    pub fn parse_json(&self, json: &str) -> Result<GameConfig, ParseError> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| ParseError::Json(e.to_string()))?;
        self.check(&config)?;
        Ok(config)
    }

    /// Parse a YAML config
    pub fn parse_yaml(&self, yaml: &str) -> Result<GameConfig, ParseError> {
        let config: GameConfig =
            serde_yml::from_str(yaml).map_err(|e| ParseError::Yaml(e.to_string()))?;
        self.check(&config)?;
        Ok(config)
    }

    /// Serialize a config as pretty JSON
    pub fn to_json_pretty(&self, config: &GameConfig) -> Result<String, ParseError> {
        serde_json::to_string_pretty(config).map_err(|e| ParseError::Json(e.to_string()))
    }

    /// Serialize a config as YAML
    pub fn to_yaml(&self, config: &GameConfig) -> Result<String, ParseError> {
        serde_yml::to_string(config).map_err(|e| ParseError::Yaml(e.to_string()))
    }

    fn check(&self, config: &GameConfig) -> Result<(), ParseError> {
        if config.name.len() > self.limits.max_name_length {
            return Err(ParseError::Limit(format!(
                "game name is {} chars, limit {}",
                config.name.len(),
                self.limits.max_name_length
            )));
        }

        if config.symbols.len() > self.limits.max_symbols {
            return Err(ParseError::Limit(format!(
                "{} symbols, limit {}",
                config.symbols.len(),
                self.limits.max_symbols
            )));
        }

        for symbol in &config.symbols {
            if symbol.name.len() > self.limits.max_name_length {
                return Err(ParseError::Limit(format!(
                    "symbol {:?} name is {} chars, limit {}",
                    symbol.id,
                    symbol.name.len(),
                    self.limits.max_name_length
                )));
            }
            if symbol.max_payout() > self.limits.max_payout_value {
                return Err(ParseError::Limit(format!(
                    "symbol {:?} pays up to {}, limit {}",
                    symbol.id,
                    symbol.max_payout(),
                    self.limits.max_payout_value
                )));
            }
        }

        validate::validate(config)?;
        Ok(())
    }
}

impl Default for ConfigParser {
    fn default() -> Self {
        Self::new()
    }
}
