//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the rewards
//! program configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::CardTier;

use super::types::{
    ProgramConfigFile, ProgramMetadata, ProgramRates, RewardsConfig, TierConfig, TiersConfigFile,
};

/// Loads and provides access to the rewards-program configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides methods to query program rates and card tiers.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/rewards/
/// ├── program.yaml  # Program metadata and rates
/// └── tiers.yaml    # Per-tier spend multiplier tables
/// ```
///
/// # Example
///
/// ```no_run
/// use rewards_engine::config::ConfigLoader;
/// use rewards_engine::models::CardTier;
///
/// let loader = ConfigLoader::load("./config/rewards").unwrap();
///
/// let tier = loader.get_tier(CardTier::Obsidian).unwrap();
/// println!("Tier: {}", tier.name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RewardsConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/rewards")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rewards_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/rewards")?;
    /// # Ok::<(), rewards_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load program.yaml
        let program_path = path.join("program.yaml");
        let program_file = Self::load_yaml::<ProgramConfigFile>(&program_path)?;

        // Load tiers.yaml
        let tiers_path = path.join("tiers.yaml");
        let tiers_file = Self::load_yaml::<TiersConfigFile>(&tiers_path)?;

        let config = RewardsConfig::new(program_file.program, program_file.rates, tiers_file.tiers);

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying rewards configuration.
    pub fn config(&self) -> &RewardsConfig {
        &self.config
    }

    /// Returns the program metadata.
    pub fn program(&self) -> &ProgramMetadata {
        self.config.program()
    }

    /// Returns the program-wide rates.
    pub fn rates(&self) -> &ProgramRates {
        self.config.rates()
    }

    /// Gets the configuration for a card tier.
    ///
    /// # Arguments
    ///
    /// * `tier` - The card tier to look up
    ///
    /// # Returns
    ///
    /// Returns the tier configuration if found, or `TierNotFound` if the
    /// loaded configuration does not define the tier.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rewards_engine::config::ConfigLoader;
    /// use rewards_engine::models::CardTier;
    ///
    /// let loader = ConfigLoader::load("./config/rewards")?;
    /// let tier = loader.get_tier(CardTier::Palladium)?;
    /// println!("Tier: {}", tier.name);
    /// # Ok::<(), rewards_engine::error::EngineError>(())
    /// ```
    pub fn get_tier(&self, tier: CardTier) -> EngineResult<&TierConfig> {
        self.config.get_tier(tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/rewards"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.program().name, "Housing Rewards Card");
    }

    #[test]
    fn test_program_rates_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let rates = loader.rates();
        assert_eq!(rates.housing_fee_rate, dec("0.03"));
        assert_eq!(rates.cash_earn_rate, dec("0.04"));
        assert_eq!(rates.unlock.cash, dec("3"));
        assert_eq!(rates.unlock.points, dec("100"));
        assert_eq!(rates.grocery_bonus_annual_cap, dec("25000"));
    }

    #[test]
    fn test_get_blue_tier() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let tier = loader.get_tier(CardTier::Blue).unwrap();
        assert_eq!(tier.name, "Blue");
        assert_eq!(tier.multipliers.dining, dec("1"));
        assert_eq!(tier.multipliers.grocery, dec("1"));
        assert_eq!(tier.multipliers.travel, dec("1"));
        assert_eq!(tier.multipliers.other, dec("1"));
        assert!(tier.bonus_multiplier.is_none());
    }

    #[test]
    fn test_get_obsidian_tier_has_bonus_multiplier() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let tier = loader.get_tier(CardTier::Obsidian).unwrap();
        assert_eq!(tier.name, "Obsidian");
        assert_eq!(tier.multipliers.travel, dec("2"));
        assert_eq!(tier.multipliers.dining, dec("1"));
        assert_eq!(tier.bonus_multiplier, Some(dec("3")));
    }

    #[test]
    fn test_get_palladium_tier() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let tier = loader.get_tier(CardTier::Palladium).unwrap();
        assert_eq!(tier.name, "Palladium");
        assert_eq!(tier.multipliers.dining, dec("2"));
        assert_eq!(tier.multipliers.grocery, dec("2"));
        assert_eq!(tier.multipliers.travel, dec("2"));
        assert_eq!(tier.multipliers.other, dec("2"));
        assert!(tier.bonus_multiplier.is_none());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("program.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }
}
