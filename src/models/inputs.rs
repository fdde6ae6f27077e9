//! Calculator input models.
//!
//! This module defines the card tier, time period, housing payment and
//! spend types that together form one complete set of calculator inputs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The card tier, which determines the spend-category multiplier table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardTier {
    /// Entry tier: 1x points on all spend categories.
    Blue,
    /// Mid tier: 2x travel plus a selectable 3x bonus category.
    Obsidian,
    /// Top tier: 2x points on all spend categories.
    Palladium,
}

impl CardTier {
    /// Returns the tier identifier used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            CardTier::Blue => "blue",
            CardTier::Obsidian => "obsidian",
            CardTier::Palladium => "palladium",
        }
    }
}

/// The bonus category selection for the Obsidian tier.
///
/// Chooses which of dining or grocery receives the elevated multiplier;
/// the other falls back to the base 1x rate. Other tiers ignore this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusCategory {
    /// Dining receives the elevated multiplier (uncapped).
    Dining,
    /// Grocery receives the elevated multiplier, subject to the annual cap.
    Grocery,
}

/// The display period for a calculation.
///
/// Yearly is a scaling mode, not a distinct rule set: all rules are defined
/// in monthly terms and recurring monthly amounts are multiplied by 12
/// before the same rules run. The grocery year-to-date figure is already
/// annual and is never scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimePeriod {
    /// Figures represent one month.
    Monthly,
    /// Figures represent one year (12x the monthly recurring amounts).
    Yearly,
}

impl TimePeriod {
    /// Returns the factor applied to recurring monthly amounts.
    pub fn scale_factor(&self) -> Decimal {
        match self {
            TimePeriod::Monthly => Decimal::ONE,
            TimePeriod::Yearly => Decimal::from(12),
        }
    }
}

/// Categorized card spend amounts.
///
/// All four amounts are non-negative; zero means no spend in that category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpendInputs {
    /// Monthly dining spend.
    pub dining: Decimal,
    /// Monthly grocery spend.
    pub grocery: Decimal,
    /// Monthly travel spend.
    pub travel: Decimal,
    /// Monthly spend in all other categories.
    pub other: Decimal,
}

impl SpendInputs {
    /// Returns the total spend across all four categories.
    pub fn total(&self) -> Decimal {
        self.dining + self.grocery + self.travel + self.other
    }

    /// Returns a copy with every category multiplied by `factor`.
    pub fn scaled(&self, factor: Decimal) -> Self {
        Self {
            dining: self.dining * factor,
            grocery: self.grocery * factor,
            travel: self.travel * factor,
            other: self.other * factor,
        }
    }
}

/// The payment strategy elected for a housing payment.
///
/// The two strategies are mutually exclusive, so they are modeled as a
/// tagged union: a reserve allocation toward the fee and a reserve
/// redemption for unlocking can never both be populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum HousingStrategy {
    /// Earn 1 point per currency unit of the payment, incurring a
    /// percentage fee which reward cash may partly or fully offset.
    MaxPoints {
        /// Whether the allocated reward cash is applied against the fee.
        #[serde(default = "default_apply_cash")]
        apply_cash_to_fee: bool,
        /// Reward cash allocated toward the fee (applied up to the fee due).
        #[serde(default)]
        cash_allocated_to_fee: Decimal,
    },
    /// Pay no fee; redeem reward cash to unlock points at a fixed exchange
    /// rate, capped at 1 point per currency unit of the payment.
    NoFeeUnlock {
        /// Reward cash redeemed to unlock points.
        #[serde(default)]
        cash_redeemed_for_unlock: Decimal,
    },
}

fn default_apply_cash() -> bool {
    true
}

/// An elected rent or mortgage payment.
///
/// An absent `HousingInput` (the `None` side of `Option<HousingInput>`)
/// means "not participating" and is distinct from a present input with a
/// zero amount, although both normalize to the same all-zero result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HousingInput {
    /// The monthly payment amount.
    pub amount: Decimal,
    /// The payment strategy for this payment.
    #[serde(flatten)]
    pub strategy: HousingStrategy,
}

impl HousingInput {
    /// Returns a copy with the amount and any recurring reward-cash figures
    /// multiplied by `factor`.
    pub fn scaled(&self, factor: Decimal) -> Self {
        let strategy = match self.strategy {
            HousingStrategy::MaxPoints {
                apply_cash_to_fee,
                cash_allocated_to_fee,
            } => HousingStrategy::MaxPoints {
                apply_cash_to_fee,
                cash_allocated_to_fee: cash_allocated_to_fee * factor,
            },
            HousingStrategy::NoFeeUnlock {
                cash_redeemed_for_unlock,
            } => HousingStrategy::NoFeeUnlock {
                cash_redeemed_for_unlock: cash_redeemed_for_unlock * factor,
            },
        };
        Self {
            amount: self.amount * factor,
            strategy,
        }
    }
}

/// One complete set of calculator inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorInputs {
    /// The display period the figures represent.
    pub period: TimePeriod,
    /// The card tier being modeled.
    pub card: CardTier,
    /// The elected rent payment, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rent: Option<HousingInput>,
    /// The elected mortgage payment, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mortgage: Option<HousingInput>,
    /// Categorized card spend.
    pub spend: SpendInputs,
    /// The Obsidian bonus category selection. Ignored by other tiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus_category: Option<BonusCategory>,
    /// Year-to-date grocery spend, used to model the grocery bonus cap
    /// exactly in monthly mode. Always an annual figure, never scaled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grocery_year_to_date: Option<Decimal>,
}

impl Default for CalculatorInputs {
    fn default() -> Self {
        Self {
            period: TimePeriod::Monthly,
            card: CardTier::Blue,
            rent: None,
            mortgage: None,
            spend: SpendInputs::default(),
            bonus_category: None,
            grocery_year_to_date: None,
        }
    }
}
