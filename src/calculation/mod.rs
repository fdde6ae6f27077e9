//! Calculation logic for the rewards estimation engine.
//!
//! This module contains the calculation functions for estimating rewards
//! outcomes: housing payment rewards under the two payment strategies,
//! card spend points against the per-tier multiplier tables (including the
//! capped grocery bonus tier), reward cash earned from spend, and the
//! aggregator that scales inputs for the selected period and merges the
//! sub-results into one total.

mod card_spend;
mod housing;
mod reward_cash;
mod totals;

pub use card_spend::calc_card_spend_points;
pub use housing::calc_housing;
pub use reward_cash::calc_cash_from_spend;
pub use totals::calc_totals;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Floors a monetary amount to whole points.
///
/// Points are always truncated toward zero per category, never rounded.
/// Inputs are non-negative by caller contract; a negative value floors
/// to zero points.
pub(crate) fn floor_points(amount: Decimal) -> u64 {
    amount.floor().to_u64().unwrap_or(0)
}
