//! Housing payment reward calculation.
//!
//! This module evaluates a single rent or mortgage payment under one of
//! the two mutually exclusive payment strategies:
//!
//! - **Max points**: 1 point per currency unit of the payment, with a
//!   percentage fee that allocated reward cash may partly or fully offset.
//! - **No-fee unlock**: no fee, but reward cash must be redeemed to unlock
//!   points at a fixed exchange rate, capped at 1 point per currency unit
//!   of the payment.

use rust_decimal::Decimal;

use crate::config::ProgramRates;
use crate::models::{HousingInput, HousingResult, HousingStrategy};

use super::floor_points;

/// Calculates points, fee and reward-cash flow for one housing payment.
///
/// The input is expected in already-scaled monthly-equivalent units;
/// scaling for the yearly period happens upstream in the aggregator, never
/// here. All numeric inputs are non-negative by caller contract.
///
/// An absent input or a zero payment amount yields the all-zero result
/// with no derived metrics.
///
/// # Arguments
///
/// * `input` - The housing payment election, if any
/// * `rates` - Program rates (fee rate and unlock exchange rate)
///
/// # Returns
///
/// A [`HousingResult`] with points earned, the out-of-pocket fee, the
/// reward cash consumed, and derived cost metrics where defined.
///
/// # Examples
///
/// ```
/// use rewards_engine::calculation::calc_housing;
/// use rewards_engine::config::ConfigLoader;
/// use rewards_engine::models::{HousingInput, HousingStrategy};
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/rewards").unwrap();
/// let input = HousingInput {
///     amount: Decimal::from(2000),
///     strategy: HousingStrategy::MaxPoints {
///         apply_cash_to_fee: false,
///         cash_allocated_to_fee: Decimal::ZERO,
///     },
/// };
///
/// let result = calc_housing(Some(&input), loader.rates());
/// assert_eq!(result.points, 2000);
/// assert_eq!(result.fee_out_of_pocket, Decimal::from(60));
/// ```
pub fn calc_housing(input: Option<&HousingInput>, rates: &ProgramRates) -> HousingResult {
    let input = match input {
        Some(input) if input.amount > Decimal::ZERO => input,
        _ => return HousingResult::zero(),
    };

    let amount = input.amount;

    match input.strategy {
        HousingStrategy::MaxPoints {
            apply_cash_to_fee,
            cash_allocated_to_fee,
        } => {
            let fee_due = rates.housing_fee_rate * amount;
            let cash_applied_to_fee = if apply_cash_to_fee {
                cash_allocated_to_fee.min(fee_due)
            } else {
                Decimal::ZERO
            };
            let fee_out_of_pocket = fee_due - cash_applied_to_fee;
            let points = floor_points(amount);

            let cost_per_point = if points > 0 {
                Some(fee_out_of_pocket / Decimal::from(points))
            } else {
                None
            };

            HousingResult {
                points,
                fee_out_of_pocket,
                cash_applied_to_fee,
                cash_redeemed_for_unlock: Decimal::ZERO,
                cost_per_point,
                implied_percent_of_payment: None,
            }
        }
        HousingStrategy::NoFeeUnlock {
            cash_redeemed_for_unlock,
        } => {
            // Exchange rate: `unlock.cash` reward cash unlocks `unlock.points`
            // points, capped at 1 point per currency unit of the payment.
            let unlocked_by_cash =
                floor_points(cash_redeemed_for_unlock / rates.unlock.cash * rates.unlock.points);
            let points_cap = floor_points(amount);
            let points = unlocked_by_cash.min(points_cap);

            let implied_percent_of_payment = Some(cash_redeemed_for_unlock / amount);
            let cost_per_point = if points > 0 {
                Some(cash_redeemed_for_unlock / Decimal::from(points))
            } else {
                None
            };

            HousingResult {
                points,
                fee_out_of_pocket: Decimal::ZERO,
                cash_applied_to_fee: Decimal::ZERO,
                cash_redeemed_for_unlock,
                cost_per_point,
                implied_percent_of_payment,
            }
        }
    }
}
