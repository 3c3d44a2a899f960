use std::io::Read;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::domain::{EconomicInputs, InvalidInputError, PropertyCharacteristics};
use super::guidance::GuidanceFormatter;
use super::market::{self, MarketImportError, MarketKey};
use super::repository::{MarketDataRepository, MarketRecord, RepositoryError};
use super::suggestion::{PricingPolicy, PricingSuggestions, RentSuggestionEngine};
use super::validation::{EthicalPricingValidator, ValidationResult};

/// Service composing the suggestion engine, validator, formatter, and the
/// market snapshot store.
pub struct PricingService<R> {
    engine: RentSuggestionEngine,
    validator: EthicalPricingValidator,
    formatter: GuidanceFormatter,
    repository: Arc<R>,
}

impl<R> PricingService<R>
where
    R: MarketDataRepository + 'static,
{
    pub fn new(repository: Arc<R>, policy: PricingPolicy) -> Self {
        Self {
            engine: RentSuggestionEngine::new(policy.clone()),
            validator: EthicalPricingValidator::new(policy.clone()),
            formatter: GuidanceFormatter::new(policy),
            repository,
        }
    }

    /// Import a market CSV export, upserting one record per row.
    pub fn import_market_csv<Rd: Read>(
        &self,
        reader: Rd,
    ) -> Result<MarketImportSummary, PricingServiceError> {
        let snapshots = market::import_snapshots(reader)?;
        let mut markets = Vec::with_capacity(snapshots.len());

        for snapshot in snapshots {
            let record = MarketRecord::from_snapshot(snapshot);
            markets.push(record.key.clone());
            self.repository.upsert(record)?;
        }

        Ok(MarketImportSummary {
            imported: markets.len(),
            markets,
        })
    }

    /// Fetch the stored snapshot for a market, if any.
    pub fn market_for(&self, key: &MarketKey) -> Result<MarketRecord, PricingServiceError> {
        self.repository
            .fetch(key)?
            .ok_or_else(|| PricingServiceError::UnknownMarket {
                city: key.city().to_string(),
                state: key.state().to_string(),
            })
    }

    /// Price a listing draft: suggestions, optional validation of an asking
    /// rent, and guidance text. Economics come inline or from the store.
    pub fn quote(&self, request: QuoteRequest) -> Result<RentQuote, PricingServiceError> {
        let QuoteRequest {
            characteristics,
            proposed_rent,
            economics,
        } = request;

        let economics = match economics {
            Some(economics) => economics,
            None => {
                let key = MarketKey::new(&characteristics.location);
                self.market_for(&key)?.snapshot.economics
            }
        };

        let suggestions = self.engine.suggest(&characteristics, &economics)?;
        let validation = proposed_rent
            .map(|rent| self.validator.validate(rent, &characteristics, &economics))
            .transpose()?;
        let guidance = self.formatter.guidance(&characteristics, Some(&economics));

        Ok(RentQuote {
            economics,
            suggestions,
            validation,
            guidance,
        })
    }
}

/// Inbound quote payload: the listing, plus either inline economics or a
/// location the repository can resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub characteristics: PropertyCharacteristics,
    #[serde(default)]
    pub proposed_rent: Option<f64>,
    #[serde(default)]
    pub economics: Option<EconomicInputs>,
}

/// Full pricing answer for one listing draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentQuote {
    pub economics: EconomicInputs,
    pub suggestions: PricingSuggestions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationResult>,
    pub guidance: String,
}

/// Outcome of a market CSV import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketImportSummary {
    pub imported: usize,
    pub markets: Vec<MarketKey>,
}

/// Error raised by the pricing service.
#[derive(Debug, thiserror::Error)]
pub enum PricingServiceError {
    #[error(transparent)]
    Input(#[from] InvalidInputError),
    #[error(transparent)]
    Import(#[from] MarketImportError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("no market snapshot for {city}, {state}")]
    UnknownMarket { city: String, state: String },
}
