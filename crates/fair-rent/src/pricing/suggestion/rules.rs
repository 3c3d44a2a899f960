use super::super::domain::PropertyCharacteristics;
use super::config::AdjustmentWeights;
use super::{AdjustmentComponent, AdjustmentFactor};

pub(crate) fn feature_adjustments(
    characteristics: &PropertyCharacteristics,
    weights: &AdjustmentWeights,
) -> (Vec<AdjustmentComponent>, f64) {
    let mut components = Vec::new();
    let mut total = 0.0;
    let features = &characteristics.features;

    if features.is_furnished {
        components.push(AdjustmentComponent {
            factor: AdjustmentFactor::Furnished,
            increment: weights.furnished,
            notes: "furnished unit".to_string(),
        });
        total += weights.furnished;
    }

    if features.utilities_included {
        components.push(AdjustmentComponent {
            factor: AdjustmentFactor::UtilitiesIncluded,
            increment: weights.utilities_included,
            notes: "utilities bundled into rent".to_string(),
        });
        total += weights.utilities_included;
    }

    if features.parking_spaces > 0 {
        let counted = features.parking_spaces.min(weights.counted_parking_spaces);
        let increment = weights.per_parking_space * counted as f64;
        components.push(AdjustmentComponent {
            factor: AdjustmentFactor::Parking,
            increment,
            notes: format!(
                "{} parking space(s), {counted} counted",
                features.parking_spaces
            ),
        });
        total += increment;
    }

    if features.has_elevator {
        let floor = features.floor.unwrap_or(0);
        if floor > weights.elevator_above_floor {
            components.push(AdjustmentComponent {
                factor: AdjustmentFactor::Elevator,
                increment: weights.elevator,
                notes: format!("elevator serving floor {floor}"),
            });
            total += weights.elevator;
        }
    }

    if features.has_balcony {
        components.push(AdjustmentComponent {
            factor: AdjustmentFactor::Balcony,
            increment: weights.balcony,
            notes: "private balcony".to_string(),
        });
        total += weights.balcony;
    }

    if features.has_garden {
        components.push(AdjustmentComponent {
            factor: AdjustmentFactor::Garden,
            increment: weights.garden,
            notes: "garden access".to_string(),
        });
        total += weights.garden;
    }

    if features.pet_friendly {
        components.push(AdjustmentComponent {
            factor: AdjustmentFactor::PetFriendly,
            increment: weights.pet_friendly,
            notes: "pets welcome".to_string(),
        });
        total += weights.pet_friendly;
    }

    if features.near_transport {
        components.push(AdjustmentComponent {
            factor: AdjustmentFactor::TransportAccess,
            increment: weights.near_transport,
            notes: "close to public transport".to_string(),
        });
        total += weights.near_transport;
    }

    if features.near_schools {
        components.push(AdjustmentComponent {
            factor: AdjustmentFactor::SchoolAccess,
            increment: weights.near_schools,
            notes: "close to schools".to_string(),
        });
        total += weights.near_schools;
    }

    if features.near_shopping {
        components.push(AdjustmentComponent {
            factor: AdjustmentFactor::ShoppingAccess,
            increment: weights.near_shopping,
            notes: "close to shopping".to_string(),
        });
        total += weights.near_shopping;
    }

    if !characteristics.amenities.is_empty() {
        let counted = characteristics.amenities.len().min(weights.counted_amenities);
        let increment = weights.per_amenity * counted as f64;
        components.push(AdjustmentComponent {
            factor: AdjustmentFactor::Amenities,
            increment,
            notes: format!(
                "{} amenities listed, {counted} counted",
                characteristics.amenities.len()
            ),
        });
        total += increment;
    }

    let capped = total.min(weights.max_total);
    (components, 1.0 + capped)
}
