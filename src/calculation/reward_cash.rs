//! Reward cash earned from card spend.

use rust_decimal::Decimal;

use crate::config::ProgramRates;
use crate::models::SpendInputs;

/// Calculates reward cash earned from categorized card spend.
///
/// Reward cash accrues at the program's flat earn rate on total eligible
/// spend, regardless of category or card tier. Unlike points, reward cash
/// is a monetary amount and is never floored.
///
/// # Arguments
///
/// * `spend` - Categorized spend, already scaled for the period
/// * `rates` - Program rates (cash earn rate)
///
/// # Returns
///
/// The exact reward cash earned as a `Decimal`.
///
/// # Examples
///
/// ```
/// use rewards_engine::calculation::calc_cash_from_spend;
/// use rewards_engine::config::ConfigLoader;
/// use rewards_engine::models::SpendInputs;
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
/// // 4% of 1100
/// assert_eq!(calc_cash_from_spend(&spend, loader.rates()), Decimal::from(44));
/// ```
pub fn calc_cash_from_spend(spend: &SpendInputs, rates: &ProgramRates) -> Decimal {
    rates.cash_earn_rate * spend.total()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn load_rates() -> ProgramRates {
        ConfigLoader::load("./config/rewards")
            .unwrap()
            .rates()
            .clone()
    }

    /// RC-001: flat 4% on total spend
    #[test]
    fn test_cash_on_total_spend() {
        let rates = load_rates();
        let spend = SpendInputs {
            dining: dec("500"),
            grocery: dec("300"),
            travel: dec("200"),
            other: dec("100"),
        };
        assert_eq!(calc_cash_from_spend(&spend, &rates), dec("44"));
    }

    /// RC-002: zero spend earns zero cash
    #[test]
    fn test_zero_spend_earns_nothing() {
        let rates = load_rates();
        let spend = SpendInputs::default();
        assert_eq!(calc_cash_from_spend(&spend, &rates), Decimal::ZERO);
    }

    /// RC-003: fractional earnings are kept exact, never floored
    #[test]
    fn test_fractional_earnings_not_floored() {
        let rates = load_rates();
        let spend = SpendInputs {
            dining: dec("123.45"),
            grocery: Decimal::ZERO,
            travel: Decimal::ZERO,
            other: Decimal::ZERO,
        };
        // 4% of 123.45
        assert_eq!(calc_cash_from_spend(&spend, &rates), dec("4.9380"));
    }
}
