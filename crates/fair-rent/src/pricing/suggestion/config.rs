use serde::{Deserialize, Serialize};

/// Income shares and market dials the suggestion engine applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPolicy {
    pub standard_income_share: f64,
    pub affordable_income_share: f64,
    pub community_income_share: f64,
    pub income_based_share: f64,
    pub market_discount: f64,
    pub market_income_cap_share: f64,
    pub sliding_scale_spread: f64,
    pub ceiling_multiplier: f64,
    pub speculative_multiplier: f64,
    pub adjustments: AdjustmentWeights,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            standard_income_share: 0.40,
            affordable_income_share: 0.35,
            community_income_share: 0.30,
            income_based_share: 0.70,
            market_discount: 0.90,
            market_income_cap_share: 0.70,
            sliding_scale_spread: 0.10,
            ceiling_multiplier: 1.0,
            speculative_multiplier: 2.0,
            adjustments: AdjustmentWeights::default(),
        }
    }
}

/// Fractional rent increments contributed by unit features.
///
/// The platform never published a weighting table, so these are explicit
/// configuration constants rather than derived values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentWeights {
    pub furnished: f64,
    pub utilities_included: f64,
    pub per_parking_space: f64,
    pub counted_parking_spaces: u8,
    pub elevator_above_floor: i16,
    pub elevator: f64,
    pub balcony: f64,
    pub garden: f64,
    pub pet_friendly: f64,
    pub near_transport: f64,
    pub near_schools: f64,
    pub near_shopping: f64,
    pub per_amenity: f64,
    pub counted_amenities: usize,
    pub max_total: f64,
}

impl Default for AdjustmentWeights {
    fn default() -> Self {
        Self {
            furnished: 0.05,
            utilities_included: 0.06,
            per_parking_space: 0.03,
            counted_parking_spaces: 2,
            elevator_above_floor: 2,
            elevator: 0.02,
            balcony: 0.02,
            garden: 0.03,
            pet_friendly: 0.01,
            near_transport: 0.04,
            near_schools: 0.02,
            near_shopping: 0.02,
            per_amenity: 0.01,
            counted_amenities: 5,
            max_total: 0.25,
        }
    }
}
