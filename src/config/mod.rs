//! Configuration loading and management for the rewards estimation engine.
//!
//! This module provides functionality to load the rewards-program
//! configuration from YAML files, including program rates (housing fee,
//! cash earn rate, unlock exchange rate, grocery bonus cap) and the
//! per-tier spend multiplier tables.
//!
//! # Example
//!
//! ```no_run
//! use rewards_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/rewards").unwrap();
//! println!("Loaded program: {}", config.program().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CategoryMultipliers, ProgramMetadata, ProgramRates, RewardsConfig, TierConfig, UnlockRate,
};
