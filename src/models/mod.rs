//! Core data models for the rewards estimation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod inputs;
mod results;

pub use inputs::{
    BonusCategory, CalculatorInputs, CardTier, HousingInput, HousingStrategy, SpendInputs,
    TimePeriod,
};
pub use results::{
    CalculatorResult, CardSpendResult, EstimateRecord, FeeTotals, HousingResult, PointsBreakdown,
    RewardCashFlow,
};
