use std::io::Cursor;
use std::sync::Arc;

use super::common::*;
use crate::pricing::{
    MarketKey, PricingService, PricingServiceError, QuoteRequest, WarningKind,
};

#[test]
fn import_then_quote_by_location() {
    let (service, _repository) = build_service();

    let summary = service
        .import_market_csv(Cursor::new(market_csv()))
        .expect("import succeeds");
    assert_eq!(summary.imported, 2);
    assert!(summary
        .markets
        .contains(&MarketKey::from_parts("Des Moines", "IA")));

    let quote = service
        .quote(QuoteRequest {
            characteristics: characteristics(),
            proposed_rent: None,
            economics: None,
        })
        .expect("quote resolves from stored market");

    assert_close(quote.suggestions.standard_rent, 2_500.0);
    assert!(quote.validation.is_none());
    assert!(quote.guidance.contains("standard rent"));
}

#[test]
fn quote_validates_a_proposed_rent() {
    let (service, _repository) = build_service();
    service
        .import_market_csv(Cursor::new(market_csv()))
        .expect("import succeeds");

    let quote = service
        .quote(QuoteRequest {
            characteristics: characteristics(),
            proposed_rent: Some(7_500.0),
            economics: None,
        })
        .expect("quote succeeds");

    let validation = quote.validation.expect("validation attached");
    assert!(!validation.is_within_ethical_range);
    assert!(validation
        .warnings
        .iter()
        .any(|warning| warning.kind == WarningKind::Speculative));
}

#[test]
fn unknown_markets_are_a_distinct_error() {
    let (service, _repository) = build_service();

    match service.quote(QuoteRequest {
        characteristics: characteristics(),
        proposed_rent: None,
        economics: None,
    }) {
        Err(PricingServiceError::UnknownMarket { city, state }) => {
            assert_eq!(city, "des moines");
            assert_eq!(state, "ia");
        }
        other => panic!("expected unknown market, got {other:?}"),
    }
}

#[test]
fn inline_economics_bypass_the_repository() {
    let service = PricingService::new(Arc::new(UnavailableMarketRepository), policy());

    let quote = service
        .quote(QuoteRequest {
            characteristics: characteristics(),
            proposed_rent: Some(1_500.0),
            economics: Some(economics()),
        })
        .expect("inline economics never touch storage");

    assert!(quote.validation.expect("validated").is_within_ethical_range);
}

#[test]
fn repository_failures_surface_from_import() {
    let service = PricingService::new(Arc::new(UnavailableMarketRepository), policy());

    assert!(matches!(
        service.import_market_csv(Cursor::new(market_csv())),
        Err(PricingServiceError::Repository(_))
    ));
}

#[test]
fn import_upserts_rather_than_duplicating() {
    let (service, repository) = build_service();
    service
        .import_market_csv(Cursor::new(market_csv()))
        .expect("first import");
    service
        .import_market_csv(Cursor::new(market_csv()))
        .expect("second import");

    use crate::pricing::repository::MarketDataRepository;
    assert_eq!(repository.list().expect("list").len(), 2);
}
