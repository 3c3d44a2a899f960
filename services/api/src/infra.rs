use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use fair_rent::pricing::{
    AccommodationType, MarketDataRepository, MarketKey, MarketRecord, PricingPolicy,
    RepositoryError,
};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryMarketRepository {
    records: Arc<Mutex<HashMap<MarketKey, MarketRecord>>>,
}

impl MarketDataRepository for InMemoryMarketRepository {
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

pub(crate) fn default_pricing_policy() -> PricingPolicy {
    PricingPolicy::default()
}

pub(crate) fn parse_accommodation(raw: &str) -> Result<AccommodationType, String> {
    let needle = raw.trim().to_ascii_lowercase();
    AccommodationType::ALL
        .into_iter()
        .find(|accommodation| accommodation.label() == needle)
        .ok_or_else(|| format!("'{raw}' is not a known accommodation type"))
}
