use serde::{Deserialize, Serialize};

use super::domain::{EconomicInputs, InvalidInputError, PropertyCharacteristics};
use super::suggestion::{PricingPolicy, RentSuggestionEngine};

/// Checks a proposed asking rent against the income-derived ceiling.
pub struct EthicalPricingValidator {
    engine: RentSuggestionEngine,
}

impl EthicalPricingValidator {
    pub fn new(policy: PricingPolicy) -> Self {
        Self {
            engine: RentSuggestionEngine::new(policy),
        }
    }

    /// Validate an asking rent for a listing.
    ///
    /// Everything short of unusable economics is reflected in the result
    /// fields rather than an error, so callers can render partial outcomes.
    pub fn validate(
        &self,
        proposed_rent: f64,
        characteristics: &PropertyCharacteristics,
        economics: &EconomicInputs,
    ) -> Result<ValidationResult, InvalidInputError> {
        let suggestions = self.engine.suggest(characteristics, economics)?;
        let policy = self.engine.policy();
        let max_rent = suggestions.standard_rent
            * policy.ceiling_multiplier
            * suggestions.feature_adjustment.multiplier;

        if proposed_rent <= 0.0 {
            if characteristics.accommodation_type.is_free_stay() {
                return Ok(ValidationResult {
                    is_within_ethical_range: true,
                    max_rent,
                    warnings: Vec::new(),
                });
            }

            return Ok(ValidationResult {
                is_within_ethical_range: false,
                max_rent,
                warnings: vec![PricingWarning::non_positive_rent(proposed_rent)],
            });
        }

        let mut warnings = Vec::new();
        if proposed_rent > max_rent {
            warnings.push(PricingWarning::over_ceiling(proposed_rent, max_rent));

            let speculative_threshold = max_rent * policy.speculative_multiplier;
            if proposed_rent > speculative_threshold {
                warnings.push(PricingWarning::speculative(
                    proposed_rent,
                    max_rent,
                    policy.speculative_multiplier,
                ));
            }
        }

        Ok(ValidationResult {
            is_within_ethical_range: proposed_rent <= max_rent,
            max_rent,
            warnings,
        })
    }
}

/// Outcome of validating one asking rent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_within_ethical_range: bool,
    pub max_rent: f64,
    pub warnings: Vec<PricingWarning>,
}

/// Advisory raised alongside a still-valid result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingWarning {
    pub kind: WarningKind,
    pub message: String,
}

/// Discriminates warning severities so callers never match on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    NonPositiveRent,
    OverCeiling,
    Speculative,
}

impl PricingWarning {
    fn non_positive_rent(proposed: f64) -> Self {
        Self {
            kind: WarningKind::NonPositiveRent,
            message: format!(
                "asking rent {proposed:.2} must be above zero for this accommodation type"
            ),
        }
    }

    fn over_ceiling(proposed: f64, max_rent: f64) -> Self {
        Self {
            kind: WarningKind::OverCeiling,
            message: format!(
                "asking rent {proposed:.2} exceeds the ethical ceiling of {max_rent:.2}"
            ),
        }
    }

    fn speculative(proposed: f64, max_rent: f64, multiplier: f64) -> Self {
        Self {
            kind: WarningKind::Speculative,
            message: format!(
                "asking rent {proposed:.2} is more than {multiplier:.1}x the ethical ceiling of {max_rent:.2} and appears speculative"
            ),
        }
    }
}
