use super::common::*;
use crate::pricing::{AdjustmentFactor, InvalidInputError};

#[test]
fn engine_matches_published_worked_example() {
    let suggestions = engine()
        .suggest(&characteristics(), &economics())
        .expect("valid inputs");

    assert_close(suggestions.calculations.monthly_median_income, 6_250.0);
    assert_close(suggestions.standard_rent, 2_500.0);
    assert_close(suggestions.affordable_rent, 2_187.5);
    assert_close(suggestions.community_rent, 1_875.0);
    assert_close(suggestions.income_based_rent, 4_375.0);
    assert_close(suggestions.market_rate, 2_000.0);
    assert_close(suggestions.market_adjusted_rent, 1_800.0);
}

#[test]
fn engine_orders_income_shares() {
    let suggestions = engine()
        .suggest(&characteristics(), &economics())
        .expect("valid inputs");

    assert!(suggestions.standard_rent > suggestions.affordable_rent);
    assert!(suggestions.affordable_rent > suggestions.community_rent);
    assert!(suggestions.community_rent > 0.0);
    assert!(suggestions.sliding_scale_base >= 0.0);
    assert!(suggestions.reduced_deposit >= 0.0);
}

#[test]
fn market_adjusted_rent_honors_both_bounds() {
    let cases = [
        (75_000.0, 2_000.0),
        (30_000.0, 5_000.0),
        (120_000.0, 900.0),
        (48_000.0, 1_400.0),
    ];

    for (income, rent) in cases {
        let economics = crate::pricing::EconomicInputs {
            local_median_income: income,
            area_average_rent: rent,
        };
        let suggestions = engine()
            .suggest(&characteristics(), &economics)
            .expect("valid inputs");

        let monthly = income / 12.0;
        assert!(suggestions.market_adjusted_rent <= rent * 0.9 + CLOSE_ENOUGH);
        assert!(suggestions.market_adjusted_rent <= monthly * 0.7 + CLOSE_ENOUGH);
    }
}

#[test]
fn engine_is_deterministic_for_identical_inputs() {
    let first = engine()
        .suggest(&featured_characteristics(), &economics())
        .expect("valid inputs");
    let second = engine()
        .suggest(&featured_characteristics(), &economics())
        .expect("valid inputs");

    assert_eq!(first, second);
}

#[test]
fn engine_derives_sliding_scale_band_and_deposit() {
    let suggestions = engine()
        .suggest(&characteristics(), &economics())
        .expect("valid inputs");

    assert_close(suggestions.sliding_scale_base, 1_250.0);
    assert_close(suggestions.sliding_scale_max, 2_500.0);
    assert_close(suggestions.reduced_deposit, suggestions.standard_rent);
    assert_close(suggestions.calculations.rent_to_income_ratio, 0.32);
}

#[test]
fn features_surface_as_audited_adjustment_components() {
    let suggestions = engine()
        .suggest(&featured_characteristics(), &economics())
        .expect("valid inputs");

    let adjustment = &suggestions.feature_adjustment;
    // furnished .05 + utilities .06 + parking .03 + elevator .02 + balcony .02
    // + transport .04 + two amenities .02
    assert_close(adjustment.multiplier, 1.24);
    assert_eq!(adjustment.components.len(), 7);
    assert!(adjustment
        .components
        .iter()
        .any(|component| component.factor == AdjustmentFactor::Furnished));
    assert!(adjustment
        .components
        .iter()
        .all(|component| component.increment > 0.0));
}

#[test]
fn adjustment_total_is_capped() {
    let mut characteristics = featured_characteristics();
    characteristics.features.parking_spaces = 4;
    characteristics.features.has_garden = true;
    characteristics.features.pet_friendly = true;
    characteristics.features.near_schools = true;
    characteristics.features.near_shopping = true;
    characteristics.amenities.extend([
        "gym".to_string(),
        "pool".to_string(),
        "sauna".to_string(),
        "rooftop".to_string(),
        "storage".to_string(),
        "bike room".to_string(),
    ]);

    let suggestions = engine()
        .suggest(&characteristics, &economics())
        .expect("valid inputs");

    assert_close(suggestions.feature_adjustment.multiplier, 1.25);
}

#[test]
fn baseline_figures_ignore_feature_adjustment() {
    let plain = engine()
        .suggest(&characteristics(), &economics())
        .expect("valid inputs");
    let featured = engine()
        .suggest(&featured_characteristics(), &economics())
        .expect("valid inputs");

    assert_close(featured.standard_rent, plain.standard_rent);
    assert_close(featured.market_adjusted_rent, plain.market_adjusted_rent);
    assert!(featured.feature_adjustment.multiplier > plain.feature_adjustment.multiplier);
}

#[test]
fn engine_rejects_non_positive_income() {
    let economics = crate::pricing::EconomicInputs {
        local_median_income: 0.0,
        area_average_rent: 2_000.0,
    };

    match engine().suggest(&characteristics(), &economics) {
        Err(InvalidInputError::MedianIncome { found }) => assert_close(found, 0.0),
        other => panic!("expected median income rejection, got {other:?}"),
    }
}

#[test]
fn engine_rejects_non_positive_market_rent() {
    let economics = crate::pricing::EconomicInputs {
        local_median_income: 75_000.0,
        area_average_rent: -25.0,
    };

    match engine().suggest(&characteristics(), &economics) {
        Err(InvalidInputError::AreaAverageRent { found }) => assert_close(found, -25.0),
        other => panic!("expected market rent rejection, got {other:?}"),
    }
}

#[test]
fn engine_rejects_non_finite_income() {
    let economics = crate::pricing::EconomicInputs {
        local_median_income: f64::NAN,
        area_average_rent: 2_000.0,
    };

    assert!(matches!(
        engine().suggest(&characteristics(), &economics),
        Err(InvalidInputError::MedianIncome { .. })
    ));
}
