use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::pricing::repository::{MarketDataRepository, MarketRecord, RepositoryError};
use crate::pricing::{
    AccommodationType, EconomicInputs, EthicalPricingValidator, GuidanceFormatter, Location,
    MarketKey, PricingPolicy, PricingService, PropertyCharacteristics, PropertyFeatures,
    RentSuggestionEngine,
};

pub(super) const CLOSE_ENOUGH: f64 = 1e-6;

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < CLOSE_ENOUGH,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn economics() -> EconomicInputs {
    EconomicInputs {
        local_median_income: 75_000.0,
        area_average_rent: 2_000.0,
    }
}

pub(super) fn characteristics() -> PropertyCharacteristics {
    PropertyCharacteristics {
        accommodation_type: AccommodationType::Apartment,
        bedrooms: 2,
        bathrooms: 1.0,
        square_footage: 850.0,
        amenities: BTreeSet::new(),
        location: Location::new("Des Moines", "IA"),
        features: PropertyFeatures::default(),
    }
}

pub(super) fn featured_characteristics() -> PropertyCharacteristics {
    let mut characteristics = characteristics();
    characteristics.features = PropertyFeatures {
        floor: Some(4),
        has_elevator: true,
        parking_spaces: 1,
        year_built: Some(2015),
        is_furnished: true,
        utilities_included: true,
        pet_friendly: false,
        has_balcony: true,
        has_garden: false,
        near_transport: true,
        near_schools: false,
        near_shopping: false,
    };
    characteristics
        .amenities
        .extend(["dishwasher".to_string(), "laundry".to_string()]);
    characteristics
}

pub(super) fn couchsurfing_characteristics() -> PropertyCharacteristics {
    let mut characteristics = characteristics();
    characteristics.accommodation_type = AccommodationType::Couchsurfing;
    characteristics
}

pub(super) fn policy() -> PricingPolicy {
    PricingPolicy::default()
}

pub(super) fn engine() -> RentSuggestionEngine {
    RentSuggestionEngine::new(policy())
}

pub(super) fn validator() -> EthicalPricingValidator {
    EthicalPricingValidator::new(policy())
}

pub(super) fn formatter() -> GuidanceFormatter {
    GuidanceFormatter::new(policy())
}

pub(super) fn market_csv() -> String {
    [
        "City,State,Median Household Income,Average Rent,As Of",
        "Des Moines,IA,\"$75,000\",\"$2,000\",2025-06-01",
        "Iowa City,IA,68400,1650,",
    ]
    .join("\n")
}

pub(super) fn build_service() -> (
    PricingService<MemoryMarketRepository>,
    Arc<MemoryMarketRepository>,
) {
    let repository = Arc::new(MemoryMarketRepository::default());
    let service = PricingService::new(repository.clone(), policy());
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryMarketRepository {
    records: Arc<Mutex<HashMap<MarketKey, MarketRecord>>>,
}

impl MarketDataRepository for MemoryMarketRepository {
    fn upsert(&self, record: MarketRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.key.clone(), record);
        Ok(())
    }

    fn fetch(&self, key: &MarketKey) -> Result<Option<MarketRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(key).cloned())
    }

    fn list(&self) -> Result<Vec<MarketRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

pub(super) struct UnavailableMarketRepository;

impl MarketDataRepository for UnavailableMarketRepository {
    fn upsert(&self, _record: MarketRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _key: &MarketKey) -> Result<Option<MarketRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<MarketRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
