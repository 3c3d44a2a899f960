//! Rent pricing guidance for listing drafts: a suggestion engine deriving
//! rent bands from local economics, an ethical ceiling validator, a guidance
//! formatter, and the market snapshot plumbing that feeds them.

pub mod domain;
pub(crate) mod fields;
pub mod guidance;
pub mod market;
pub mod repository;
pub mod router;
pub mod service;
pub(crate) mod suggestion;
pub(crate) mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    AccommodationType, EconomicInputs, InvalidInputError, Location, PropertyCharacteristics,
    PropertyFeatures,
};
pub use fields::{fields_for, missing_fields, ListingField};
pub use guidance::{
    GuidanceFormatter, GuidanceLine, GuidanceOutcome, GuidanceSummary,
    MISSING_MARKET_DATA_PROMPT, MISSING_PROPERTY_DETAILS_PROMPT,
};
pub use market::{MarketImportError, MarketKey, MarketSnapshot};
pub use repository::{MarketDataRepository, MarketRecord, RepositoryError};
pub use router::pricing_router;
pub use service::{
    MarketImportSummary, PricingService, PricingServiceError, QuoteRequest, RentQuote,
};
pub use suggestion::{
    AdjustmentComponent, AdjustmentFactor, AdjustmentWeights, FeatureAdjustment, PricingPolicy,
    PricingSuggestions, RentCalculations, RentSuggestionEngine,
};
pub use validation::{EthicalPricingValidator, PricingWarning, ValidationResult, WarningKind};
