//! Request types for the rewards estimation engine API.
//!
//! This module defines the JSON request structures for the `/calculate` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    BonusCategory, CalculatorInputs, CardTier, HousingInput, HousingStrategy, SpendInputs,
    TimePeriod,
};

/// Request body for the `/calculate` endpoint.
///
/// Contains all information needed to estimate rewards outcomes for one
/// card tier, housing payment elections and categorized card spend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// The display period the figures represent.
    pub period: TimePeriod,
    /// The card tier being modeled.
    pub card: CardTier,
    /// The elected rent payment, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rent: Option<HousingPaymentRequest>,
    /// The elected mortgage payment, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mortgage: Option<HousingPaymentRequest>,
    /// Categorized monthly card spend.
    pub spend: SpendRequest,
    /// The bonus category selection, for tiers that support one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus_category: Option<BonusCategory>,
    /// Year-to-date grocery spend, for exact cap modeling in monthly mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grocery_year_to_date: Option<Decimal>,
}

/// Housing payment information in an estimate request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HousingPaymentRequest {
    /// The monthly payment amount.
    pub amount: Decimal,
    /// The payment strategy for this payment.
    #[serde(flatten)]
    pub strategy: HousingStrategy,
}

/// Categorized spend amounts in an estimate request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpendRequest {
    /// Monthly dining spend.
    #[serde(default)]
    pub dining: Decimal,
    /// Monthly grocery spend.
    #[serde(default)]
    pub grocery: Decimal,
    /// Monthly travel spend.
    #[serde(default)]
    pub travel: Decimal,
    /// Monthly spend in all other categories.
    #[serde(default)]
    pub other: Decimal,
}

impl EstimateRequest {
    /// Validates the request fields.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` if all monetary amounts are non-negative, or an
    /// `InvalidInput` error naming the first offending field.
    pub fn validate(&self) -> EngineResult<()> {
        validate_non_negative("spend.dining", self.spend.dining)?;
        validate_non_negative("spend.grocery", self.spend.grocery)?;
        validate_non_negative("spend.travel", self.spend.travel)?;
        validate_non_negative("spend.other", self.spend.other)?;

        if let Some(rent) = &self.rent {
            rent.validate("rent")?;
        }
        if let Some(mortgage) = &self.mortgage {
            mortgage.validate("mortgage")?;
        }

        if let Some(ytd) = self.grocery_year_to_date {
            validate_non_negative("grocery_year_to_date", ytd)?;
        }

        Ok(())
    }
}

impl HousingPaymentRequest {
    /// Validates the payment fields, prefixing errors with the slot name.
    fn validate(&self, slot: &str) -> EngineResult<()> {
        validate_non_negative(&format!("{}.amount", slot), self.amount)?;
        match self.strategy {
            HousingStrategy::MaxPoints {
                cash_allocated_to_fee,
                ..
            } => validate_non_negative(
                &format!("{}.cash_allocated_to_fee", slot),
                cash_allocated_to_fee,
            ),
            HousingStrategy::NoFeeUnlock {
                cash_redeemed_for_unlock,
            } => validate_non_negative(
                &format!("{}.cash_redeemed_for_unlock", slot),
                cash_redeemed_for_unlock,
            ),
        }
    }
}

fn validate_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: "must not be negative".to_string(),
        });
    }
    Ok(())
}

impl From<HousingPaymentRequest> for HousingInput {
    fn from(req: HousingPaymentRequest) -> Self {
        HousingInput {
            amount: req.amount,
            strategy: req.strategy,
        }
    }
}

impl From<SpendRequest> for SpendInputs {
    fn from(req: SpendRequest) -> Self {
        SpendInputs {
            dining: req.dining,
            grocery: req.grocery,
            travel: req.travel,
            other: req.other,
        }
    }
}

impl From<EstimateRequest> for CalculatorInputs {
    fn from(req: EstimateRequest) -> Self {
        CalculatorInputs {
            period: req.period,
            card: req.card,
            rent: req.rent.map(Into::into),
            mortgage: req.mortgage.map(Into::into),
            spend: req.spend.into(),
            bonus_category: req.bonus_category,
            grocery_year_to_date: req.grocery_year_to_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_minimal_request() {
        let json = r#"{
            "period": "monthly",
            "card": "blue",
            "spend": {"dining": "500", "grocery": "300", "travel": "200", "other": "100"}
        }"#;

        let request: EstimateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.period, TimePeriod::Monthly);
        assert_eq!(request.card, CardTier::Blue);
        assert!(request.rent.is_none());
        assert!(request.mortgage.is_none());
        assert_eq!(request.spend.dining, dec("500"));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_spend_fields_default_to_zero() {
        let json = r#"{
            "period": "monthly",
            "card": "blue",
            "spend": {"dining": "500"}
        }"#;

        let request: EstimateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.spend.grocery, Decimal::ZERO);
        assert_eq!(request.spend.travel, Decimal::ZERO);
        assert_eq!(request.spend.other, Decimal::ZERO);
    }

    #[test]
    fn test_deserialize_housing_strategies() {
        let json = r#"{
            "period": "monthly",
            "card": "palladium",
            "rent": {"amount": "2000", "strategy": "max_points", "cash_allocated_to_fee": "40"},
            "mortgage": {"amount": "1500", "strategy": "no_fee_unlock", "cash_redeemed_for_unlock": "30"},
            "spend": {}
        }"#;

        let request: EstimateRequest = serde_json::from_str(json).unwrap();
        let rent = request.rent.unwrap();
        assert_eq!(rent.amount, dec("2000"));
        assert_eq!(
            rent.strategy,
            HousingStrategy::MaxPoints {
                apply_cash_to_fee: true,
                cash_allocated_to_fee: dec("40"),
            }
        );
        let mortgage = request.mortgage.unwrap();
        assert_eq!(
            mortgage.strategy,
            HousingStrategy::NoFeeUnlock {
                cash_redeemed_for_unlock: dec("30"),
            }
        );
    }

    #[test]
    fn test_validate_rejects_negative_spend() {
        let json = r#"{
            "period": "monthly",
            "card": "blue",
            "spend": {"dining": "-1"}
        }"#;

        let request: EstimateRequest = serde_json::from_str(json).unwrap();
        match request.validate() {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "spend.dining"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_negative_housing_amount() {
        let json = r#"{
            "period": "monthly",
            "card": "blue",
            "rent": {"amount": "-2000", "strategy": "max_points"},
            "spend": {}
        }"#;

        let request: EstimateRequest = serde_json::from_str(json).unwrap();
        match request.validate() {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "rent.amount"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_request_converts_to_calculator_inputs() {
        let json = r#"{
            "period": "yearly",
            "card": "obsidian",
            "rent": {"amount": "2000", "strategy": "no_fee_unlock", "cash_redeemed_for_unlock": "30"},
            "spend": {"grocery": "3000"},
            "bonus_category": "grocery",
            "grocery_year_to_date": "24000"
        }"#;

        let request: EstimateRequest = serde_json::from_str(json).unwrap();
        let inputs: CalculatorInputs = request.into();

        assert_eq!(inputs.period, TimePeriod::Yearly);
        assert_eq!(inputs.card, CardTier::Obsidian);
        assert_eq!(inputs.rent.unwrap().amount, dec("2000"));
        assert_eq!(inputs.spend.grocery, dec("3000"));
        assert_eq!(inputs.bonus_category, Some(BonusCategory::Grocery));
        assert_eq!(inputs.grocery_year_to_date, Some(dec("24000")));
    }
}
