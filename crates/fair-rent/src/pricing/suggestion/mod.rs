mod config;
mod rules;

pub use config::{AdjustmentWeights, PricingPolicy};

use serde::{Deserialize, Serialize};

use super::domain::{EconomicInputs, InvalidInputError, PropertyCharacteristics};

/// Stateless engine deriving suggested rent bands from local economics.
pub struct RentSuggestionEngine {
    policy: PricingPolicy,
}

impl RentSuggestionEngine {
    pub fn new(policy: PricingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// Compute the full suggestion set for a listing.
    ///
    /// Fails only when the economic inputs are unusable; every listing shape
    /// is otherwise priced, with unit features surfaced as a separate
    /// auditable adjustment.
    pub fn suggest(
        &self,
        characteristics: &PropertyCharacteristics,
        economics: &EconomicInputs,
    ) -> Result<PricingSuggestions, InvalidInputError> {
        economics.ensure_valid()?;
        let policy = &self.policy;

        let monthly = economics.monthly_median_income();
        let standard_rent = monthly * policy.standard_income_share;
        let affordable_rent = monthly * policy.affordable_income_share;
        let community_rent = monthly * policy.community_income_share;
        let income_based_rent = monthly * policy.income_based_share;

        let market_rate = economics.area_average_rent;
        let market_adjusted_rent =
            (market_rate * policy.market_discount).min(monthly * policy.market_income_cap_share);

        let sliding_scale_base =
            monthly * (policy.community_income_share - policy.sliding_scale_spread).max(0.0);
        let sliding_scale_max =
            monthly * (policy.community_income_share + policy.sliding_scale_spread);

        let (components, multiplier) =
            rules::feature_adjustments(characteristics, &policy.adjustments);

        Ok(PricingSuggestions {
            standard_rent,
            affordable_rent,
            community_rent,
            income_based_rent,
            market_rate,
            market_adjusted_rent,
            sliding_scale_base,
            sliding_scale_max,
            reduced_deposit: standard_rent,
            feature_adjustment: FeatureAdjustment {
                multiplier,
                components,
            },
            calculations: RentCalculations {
                monthly_median_income: monthly,
                rent_to_income_ratio: economics.area_average_rent / monthly,
                standard_rent_share: policy.standard_income_share,
                affordable_rent_share: policy.affordable_income_share,
                community_rent_share: policy.community_income_share,
            },
        })
    }
}

/// Suggested rent figures, recomputed fresh on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingSuggestions {
    pub standard_rent: f64,
    pub affordable_rent: f64,
    pub community_rent: f64,
    pub income_based_rent: f64,
    pub market_rate: f64,
    pub market_adjusted_rent: f64,
    pub sliding_scale_base: f64,
    pub sliding_scale_max: f64,
    pub reduced_deposit: f64,
    pub feature_adjustment: FeatureAdjustment,
    pub calculations: RentCalculations,
}

/// Multiplier the listing's features contribute, with its component trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureAdjustment {
    pub multiplier: f64,
    pub components: Vec<AdjustmentComponent>,
}

/// Discrete contribution to the feature adjustment, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentComponent {
    pub factor: AdjustmentFactor,
    pub increment: f64,
    pub notes: String,
}

/// Unit features permitted to influence the suggested rent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentFactor {
    Furnished,
    UtilitiesIncluded,
    Parking,
    Elevator,
    Balcony,
    Garden,
    PetFriendly,
    TransportAccess,
    SchoolAccess,
    ShoppingAccess,
    Amenities,
}

/// Figures actually used during derivation, kept for display and audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentCalculations {
    pub monthly_median_income: f64,
    pub rent_to_income_ratio: f64,
    pub standard_rent_share: f64,
    pub affordable_rent_share: f64,
    pub community_rent_share: f64,
}
