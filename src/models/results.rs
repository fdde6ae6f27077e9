//! Calculation result models.
//!
//! This module contains the result types produced by the calculation
//! pipeline, from the per-payment [`HousingResult`] up to the aggregate
//! [`CalculatorResult`] and the [`EstimateRecord`] envelope returned by
//! the API.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CardTier, TimePeriod};

/// The outcome of one housing payment election.
///
/// Produced once per housing slot (rent, mortgage). All monetary fields are
/// non-negative; the two optional derived metrics are present only when
/// their denominators are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HousingResult {
    /// Points earned for this payment.
    pub points: u64,
    /// Fee paid out of pocket after any reward-cash offset.
    pub fee_out_of_pocket: Decimal,
    /// Reward cash applied against the fee.
    pub cash_applied_to_fee: Decimal,
    /// Reward cash redeemed to unlock points.
    pub cash_redeemed_for_unlock: Decimal,
    /// Effective cost per point, when any points were earned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_per_point: Option<Decimal>,
    /// Redeemed reward cash as a fraction of the payment amount, when the
    /// payment amount is positive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implied_percent_of_payment: Option<Decimal>,
}

impl HousingResult {
    /// The all-zero result, returned for an absent or zero-amount payment.
    pub fn zero() -> Self {
        Self {
            points: 0,
            fee_out_of_pocket: Decimal::ZERO,
            cash_applied_to_fee: Decimal::ZERO,
            cash_redeemed_for_unlock: Decimal::ZERO,
            cost_per_point: None,
            implied_percent_of_payment: None,
        }
    }
}

/// Per-category points earned from card spend.
///
/// `total` is always the exact sum of the four category fields; the total
/// is never floored or rounded independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSpendResult {
    /// Points earned on dining spend.
    pub dining: u64,
    /// Points earned on grocery spend.
    pub grocery: u64,
    /// Points earned on travel spend.
    pub travel: u64,
    /// Points earned on all other spend.
    pub other: u64,
    /// Sum of the four category fields.
    pub total: u64,
}

/// The points side of an aggregate result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsBreakdown {
    /// Points earned from the rent payment.
    pub rent: u64,
    /// Points earned from the mortgage payment.
    pub mortgage: u64,
    /// Points earned from card spend, by category.
    pub card_spend: CardSpendResult,
    /// Grand total: rent + mortgage + card spend.
    pub total: u64,
}

/// The reward-cash side of an aggregate result.
///
/// `net_change` may be negative when redemptions and fee offsets exceed
/// spend-based earnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardCashFlow {
    /// Reward cash earned from card spend.
    pub earned_from_spend: Decimal,
    /// Reward cash redeemed to unlock housing points.
    pub redeemed_for_unlocking: Decimal,
    /// Reward cash applied against housing fees.
    pub applied_to_fees: Decimal,
    /// earned - redeemed - applied.
    pub net_change: Decimal,
}

/// Out-of-pocket fees for an aggregate result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeTotals {
    /// Out-of-pocket fee on the rent payment.
    pub rent_out_of_pocket: Decimal,
    /// Out-of-pocket fee on the mortgage payment.
    pub mortgage_out_of_pocket: Decimal,
    /// Sum of the two slots.
    pub total_out_of_pocket: Decimal,
}

/// The complete aggregate result of one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorResult {
    /// Points earned, broken down by source.
    pub points: PointsBreakdown,
    /// Reward-cash flow.
    pub reward_cash: RewardCashFlow,
    /// Out-of-pocket fees.
    pub fees: FeeTotals,
}

/// The envelope returned by the `/calculate` endpoint.
///
/// Wraps a [`CalculatorResult`] with identifying metadata for the
/// calculation that produced it.
///
/// # Example
///
/// ```
/// use rewards_engine::models::{
///     CalculatorResult, CardSpendResult, CardTier, EstimateRecord, FeeTotals,
///     PointsBreakdown, RewardCashFlow, TimePeriod,
/// };
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let record = EstimateRecord {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     period: TimePeriod::Monthly,
///     card: CardTier::Blue,
///     totals: CalculatorResult {
///         points: PointsBreakdown {
///             rent: 0,
///             mortgage: 0,
///             card_spend: CardSpendResult { dining: 0, grocery: 0, travel: 0, other: 0, total: 0 },
///             total: 0,
///         },
///         reward_cash: RewardCashFlow {
///             earned_from_spend: Decimal::ZERO,
///             redeemed_for_unlocking: Decimal::ZERO,
///             applied_to_fees: Decimal::ZERO,
///             net_change: Decimal::ZERO,
///         },
///         fees: FeeTotals {
///             rent_out_of_pocket: Decimal::ZERO,
///             mortgage_out_of_pocket: Decimal::ZERO,
///             total_out_of_pocket: Decimal::ZERO,
///         },
///     },
///     duration_us: 0,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateRecord {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The display period the figures represent.
    pub period: TimePeriod,
    /// The card tier that was modeled.
    pub card: CardTier,
    /// The aggregate calculation result.
    pub totals: CalculatorResult,
    /// The calculation duration in microseconds.
    pub duration_us: u64,
}
