//! Aggregate calculation combining housing, card spend and reward cash.

use crate::config::RewardsConfig;
use crate::error::EngineResult;
use crate::models::{
    CalculatorInputs, CalculatorResult, FeeTotals, PointsBreakdown, RewardCashFlow,
};

use super::{calc_card_spend_points, calc_cash_from_spend, calc_housing};

/// Runs the full calculation pipeline for one set of inputs.
///
/// Recurring monthly amounts (housing payments, their reward-cash figures,
/// and card spend) are scaled by the period factor before the per-area
/// calculators run; the grocery year-to-date figure is already annual and
/// passes through unscaled. The housing, card-spend and reward-cash results
/// are then merged into one [`CalculatorResult`].
///
/// # Arguments
///
/// * `inputs` - The complete calculator inputs
/// * `config` - The loaded rewards-program configuration
///
/// # Returns
///
/// The aggregate result, or `TierNotFound` if the configuration does not
/// define the requested card tier.
///
/// # Examples
///
/// ```
/// use rewards_engine::calculation::calc_totals;
/// use rewards_engine::config::ConfigLoader;
/// use rewards_engine::models::{
///     CalculatorInputs, CardTier, HousingInput, HousingStrategy, SpendInputs, TimePeriod,
/// };
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/rewards").unwrap();
/// let inputs = CalculatorInputs {
///     period: TimePeriod::Monthly,
///     card: CardTier::Blue,
///     rent: Some(HousingInput {
///         amount: Decimal::from(2000),
///         strategy: HousingStrategy::MaxPoints {
///             apply_cash_to_fee: false,
///             cash_allocated_to_fee: Decimal::ZERO,
///         },
///     }),
///     spend: SpendInputs {
///         dining: Decimal::from(500),
///         grocery: Decimal::from(300),
///         travel: Decimal::from(200),
///         other: Decimal::from(100),
///     },
///     ..Default::default()
/// };
///
/// let result = calc_totals(&inputs, loader.config()).unwrap();
/// assert_eq!(result.points.total, 3100);
/// assert_eq!(result.fees.total_out_of_pocket, Decimal::from(60));
/// ```
pub fn calc_totals(inputs: &CalculatorInputs, config: &RewardsConfig) -> EngineResult<CalculatorResult> {
    let tier = config.get_tier(inputs.card)?;
    let rates = config.rates();

    let factor = inputs.period.scale_factor();
    let rent = inputs.rent.map(|h| h.scaled(factor));
    let mortgage = inputs.mortgage.map(|h| h.scaled(factor));
    let spend = inputs.spend.scaled(factor);

    let rent_result = calc_housing(rent.as_ref(), rates);
    let mortgage_result = calc_housing(mortgage.as_ref(), rates);

    let card_spend = calc_card_spend_points(
        &spend,
        tier,
        inputs.bonus_category,
        inputs.grocery_year_to_date,
        inputs.period,
        rates,
    );

    let earned_from_spend = calc_cash_from_spend(&spend, rates);
    let redeemed_for_unlocking =
        rent_result.cash_redeemed_for_unlock + mortgage_result.cash_redeemed_for_unlock;
    let applied_to_fees = rent_result.cash_applied_to_fee + mortgage_result.cash_applied_to_fee;

    Ok(CalculatorResult {
        points: PointsBreakdown {
            rent: rent_result.points,
            mortgage: mortgage_result.points,
            card_spend,
            total: rent_result.points + mortgage_result.points + card_spend.total,
        },
        reward_cash: RewardCashFlow {
            earned_from_spend,
            redeemed_for_unlocking,
            applied_to_fees,
            net_change: earned_from_spend - redeemed_for_unlocking - applied_to_fees,
        },
        fees: FeeTotals {
            rent_out_of_pocket: rent_result.fee_out_of_pocket,
            mortgage_out_of_pocket: mortgage_result.fee_out_of_pocket,
            total_out_of_pocket: rent_result.fee_out_of_pocket
                + mortgage_result.fee_out_of_pocket,
        },
    })
}
