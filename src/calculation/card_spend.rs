//! Card spend points calculation.
//!
//! This module applies a card tier's per-category multiplier table to
//! categorized spend. Each category result is floored individually, then
//! summed; the sum itself is never floored or rounded.
//!
//! ## Grocery bonus cap
//!
//! When the tier's bonus multiplier is applied to grocery spend, only an
//! annually capped portion of that spend earns the elevated rate; the
//! remainder earns the base rate. The split depends on the period:
//!
//! - **Yearly**: split directly at the annual cap.
//! - **Monthly, with year-to-date supplied**: split this month's spend at
//!   whatever remains of the cap.
//! - **Monthly, without year-to-date**: approximate by spreading the cap
//!   evenly across 12 months. This is a documented heuristic, not an exact
//!   annual reconciliation; callers wanting exact behavior must supply the
//!   year-to-date figure.

use rust_decimal::Decimal;

use crate::config::{ProgramRates, TierConfig};
use crate::models::{BonusCategory, CardSpendResult, SpendInputs, TimePeriod};

use super::floor_points;

/// Calculates points earned from categorized card spend.
///
/// Applies the tier's multiplier per category and floors each category
/// independently. For tiers with a bonus multiplier, `bonus_category`
/// chooses which of dining or grocery receives it (defaulting to dining);
/// tiers without a bonus multiplier ignore the selection entirely.
///
/// # Arguments
///
/// * `spend` - Categorized spend, already scaled for the period
/// * `tier` - The card tier's multiplier configuration
/// * `bonus_category` - The elected bonus category, if any
/// * `grocery_year_to_date` - Annual grocery spend to date, for exact cap
///   modeling in monthly mode
/// * `period` - The period the spend figures represent
/// * `rates` - Program rates (grocery bonus annual cap)
///
/// # Returns
///
/// A [`CardSpendResult`] with per-category points and their exact sum.
///
/// # Examples
///
/// ```
/// use rewards_engine::calculation::calc_card_spend_points;
/// use rewards_engine::config::ConfigLoader;
/// use rewards_engine::models::{CardTier, SpendInputs, TimePeriod};
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/rewards").unwrap();
/// let spend = SpendInputs {
///     dining: Decimal::from(500),
///     grocery: Decimal::from(300),
///     travel: Decimal::from(200),
///     other: Decimal::from(100),
/// };
///
/// let tier = loader.get_tier(CardTier::Blue).unwrap();
/// let result = calc_card_spend_points(
///     &spend,
///     tier,
///     None,
///     None,
///     TimePeriod::Monthly,
///     loader.rates(),
/// );
/// assert_eq!(result.total, 1100);
/// ```
pub fn calc_card_spend_points(
    spend: &SpendInputs,
    tier: &TierConfig,
    bonus_category: Option<BonusCategory>,
    grocery_year_to_date: Option<Decimal>,
    period: TimePeriod,
    rates: &ProgramRates,
) -> CardSpendResult {
    let multipliers = &tier.multipliers;

    let travel = floor_points(multipliers.travel * spend.travel);
    let other = floor_points(multipliers.other * spend.other);

    let (dining, grocery) = match tier.bonus_multiplier {
        None => (
            floor_points(multipliers.dining * spend.dining),
            floor_points(multipliers.grocery * spend.grocery),
        ),
        Some(bonus_multiplier) => match bonus_category.unwrap_or(BonusCategory::Dining) {
            BonusCategory::Dining => (
                floor_points(bonus_multiplier * spend.dining),
                floor_points(multipliers.grocery * spend.grocery),
            ),
            BonusCategory::Grocery => (
                floor_points(multipliers.dining * spend.dining),
                tiered_grocery_points(
                    spend.grocery,
                    bonus_multiplier,
                    multipliers.grocery,
                    rates.grocery_bonus_annual_cap,
                    grocery_year_to_date,
                    period,
                ),
            ),
        },
    };

    CardSpendResult {
        dining,
        grocery,
        travel,
        other,
        total: dining + grocery + travel + other,
    }
}

/// Splits grocery spend between the bonus and base rates at the annual cap.
///
/// The eligible and remainder portions are floored separately, then
/// summed, so the tier split never benefits from rounding the total.
fn tiered_grocery_points(
    grocery: Decimal,
    bonus_multiplier: Decimal,
    base_multiplier: Decimal,
    annual_cap: Decimal,
    year_to_date: Option<Decimal>,
    period: TimePeriod,
) -> u64 {
    let (eligible, remainder) = match period {
        TimePeriod::Yearly => {
            // The figures already cover the full year; split at the cap.
            let eligible = grocery.min(annual_cap);
            (eligible, grocery - eligible)
        }
        TimePeriod::Monthly => match year_to_date {
            Some(year_to_date) => {
                let cap_remaining = (annual_cap - year_to_date).max(Decimal::ZERO);
                let eligible = grocery.min(cap_remaining);
                (eligible, grocery - eligible)
            }
            None => {
                // Even-spread heuristic: annualize this month and, if the
                // cap would be exceeded, split the month at cap/12.
                let twelve = Decimal::from(12);
                let annualized = grocery * twelve;
                if annualized <= annual_cap {
                    (grocery, Decimal::ZERO)
                } else {
                    // cap/12 is a repeating decimal; multiply before dividing
                    // so the bonus tier floors to the exact floor(3 * cap/12).
                    let monthly_cap = annual_cap / twelve;
                    return floor_points(bonus_multiplier * annual_cap / twelve)
                        + floor_points(base_multiplier * (grocery - monthly_cap));
                }
            }
        },
    };

    floor_points(bonus_multiplier * eligible) + floor_points(base_multiplier * remainder)
}
