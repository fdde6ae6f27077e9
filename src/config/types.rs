//! Configuration types for the rewards program.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};
use crate::models::CardTier;

/// Metadata about the rewards program.
#[derive(Debug, Clone, Deserialize)]
pub struct ProgramMetadata {
    /// The human-readable name of the program.
    pub name: String,
    /// The version or effective date of the program terms.
    pub version: String,
}

/// The exchange rate for unlocking points with reward cash.
///
/// `cash` units of reward cash unlock `points` points (e.g. 3 cash
/// unlocks 100 points).
#[derive(Debug, Clone, Deserialize)]
pub struct UnlockRate {
    /// Reward cash consumed per exchange unit.
    pub cash: Decimal,
    /// Points unlocked per exchange unit.
    pub points: Decimal,
}

/// Program-wide rates applied by the calculators.
#[derive(Debug, Clone, Deserialize)]
pub struct ProgramRates {
    /// Fee rate charged on a housing payment under the max-points strategy.
    pub housing_fee_rate: Decimal,
    /// Reward cash earned per currency unit of eligible card spend.
    pub cash_earn_rate: Decimal,
    /// The unlock exchange rate for the no-fee strategy.
    pub unlock: UnlockRate,
    /// Annual cap on grocery spend eligible for the elevated multiplier.
    pub grocery_bonus_annual_cap: Decimal,
}

/// Program configuration file structure (`program.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ProgramConfigFile {
    /// Program metadata.
    pub program: ProgramMetadata,
    /// Program-wide rates.
    pub rates: ProgramRates,
}

/// Per-category spend multipliers for one card tier.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryMultipliers {
    /// Multiplier for dining spend.
    pub dining: Decimal,
    /// Multiplier for grocery spend.
    pub grocery: Decimal,
    /// Multiplier for travel spend.
    pub travel: Decimal,
    /// Multiplier for all other spend.
    pub other: Decimal,
}

/// Configuration for a single card tier.
#[derive(Debug, Clone, Deserialize)]
pub struct TierConfig {
    /// The human-readable name of the tier.
    pub name: String,
    /// Base multipliers applied per spend category.
    pub multipliers: CategoryMultipliers,
    /// Elevated multiplier for the selectable bonus category, when the
    /// tier supports one.
    #[serde(default)]
    pub bonus_multiplier: Option<Decimal>,
}

/// Tiers configuration file structure (`tiers.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct TiersConfigFile {
    /// Map of tier identifier to tier configuration.
    pub tiers: HashMap<String, TierConfig>,
}

/// The complete rewards-program configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct RewardsConfig {
    /// Program metadata.
    metadata: ProgramMetadata,
    /// Program-wide rates.
    rates: ProgramRates,
    /// Card tiers keyed by identifier.
    tiers: HashMap<String, TierConfig>,
}

impl RewardsConfig {
    /// Creates a new RewardsConfig from its component parts.
    pub fn new(
        metadata: ProgramMetadata,
        rates: ProgramRates,
        tiers: HashMap<String, TierConfig>,
    ) -> Self {
        Self {
            metadata,
            rates,
            tiers,
        }
    }

    /// Returns the program metadata.
    pub fn program(&self) -> &ProgramMetadata {
        &self.metadata
    }

    /// Returns the program-wide rates.
    pub fn rates(&self) -> &ProgramRates {
        &self.rates
    }

    /// Returns all card tiers.
    pub fn tiers(&self) -> &HashMap<String, TierConfig> {
        &self.tiers
    }

    /// Gets the configuration for a card tier.
    ///
    /// Returns `TierNotFound` if the loaded configuration does not define
    /// the tier.
    pub fn get_tier(&self, tier: CardTier) -> EngineResult<&TierConfig> {
        self.tiers
            .get(tier.as_str())
            .ok_or_else(|| EngineError::TierNotFound {
                tier: tier.as_str().to_string(),
            })
    }
}
