use crate::infra::{default_pricing_policy, parse_accommodation, InMemoryMarketRepository};
use clap::Args;
use fair_rent::error::AppError;
use fair_rent::pricing::market::import_snapshots;
use fair_rent::pricing::{
    AccommodationType, EconomicInputs, Location, MarketKey, PricingService, PricingServiceError,
    PropertyCharacteristics, PropertyFeatures, QuoteRequest, RentQuote, RentSuggestionEngine,
    EthicalPricingValidator, GuidanceFormatter, ValidationResult,
};
use std::fs::File;
use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;

const SAMPLE_MARKET_CSV: &str = "\
City,State,Median Household Income,Average Rent,As Of
Des Moines,IA,75000,2000,2025-06-01
Iowa City,IA,68400,1650,2025-06-01
";

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional market CSV export to hydrate the demo market store
    #[arg(long)]
    pub(crate) market_csv: Option<PathBuf>,
    /// Asking rent used for the validation portion of the demo
    #[arg(long)]
    pub(crate) proposed_rent: Option<f64>,
}

#[derive(Args, Debug)]
pub(crate) struct PreviewArgs {
    /// City the listing sits in
    #[arg(long)]
    pub(crate) city: String,
    /// State or region the listing sits in
    #[arg(long)]
    pub(crate) state: String,
    /// Accommodation category (apartment, house, room, ...)
    #[arg(long, default_value = "apartment", value_parser = parse_accommodation)]
    pub(crate) accommodation: AccommodationType,
    /// Interior square footage
    #[arg(long, default_value_t = 0.0)]
    pub(crate) square_footage: f64,
    /// Bedroom count
    #[arg(long, default_value_t = 0)]
    pub(crate) bedrooms: u8,
    /// Bathroom count (0.5 for shared)
    #[arg(long, default_value_t = 0.0)]
    pub(crate) bathrooms: f32,
    /// Annual local median income (used with --average-rent instead of a CSV)
    #[arg(long)]
    pub(crate) median_income: Option<f64>,
    /// Monthly area average rent (used with --median-income instead of a CSV)
    #[arg(long)]
    pub(crate) average_rent: Option<f64>,
    /// Market CSV export to resolve economics from
    #[arg(long)]
    pub(crate) market_csv: Option<PathBuf>,
    /// Asking rent to validate against the ethical ceiling
    #[arg(long)]
    pub(crate) proposed_rent: Option<f64>,
}

pub(crate) fn run_pricing_preview(args: PreviewArgs) -> Result<(), AppError> {
    let PreviewArgs {
        city,
        state,
        accommodation,
        square_footage,
        bedrooms,
        bathrooms,
        median_income,
        average_rent,
        market_csv,
        proposed_rent,
    } = args;

    let characteristics = PropertyCharacteristics {
        accommodation_type: accommodation,
        bedrooms,
        bathrooms,
        square_footage,
        amenities: Default::default(),
        location: Location::new(city, state),
        features: PropertyFeatures::default(),
    };

    let economics = match (median_income, average_rent) {
        (Some(local_median_income), Some(area_average_rent)) => EconomicInputs {
            local_median_income,
            area_average_rent,
        },
        _ => {
            let Some(path) = market_csv else {
                println!(
                    "Provide --median-income and --average-rent, or --market-csv to resolve them."
                );
                return Ok(());
            };
            let file = File::open(path)?;
            let snapshots = import_snapshots(file).map_err(PricingServiceError::from)?;
            let key = MarketKey::new(&characteristics.location);
            match snapshots
                .into_iter()
                .find(|snapshot| MarketKey::new(&snapshot.location) == key)
            {
                Some(snapshot) => snapshot.economics,
                None => {
                    println!(
                        "No market row for {}, {} in the supplied CSV.",
                        characteristics.location.city, characteristics.location.state
                    );
                    return Ok(());
                }
            }
        }
    };

    let policy = default_pricing_policy();
    let engine = RentSuggestionEngine::new(policy.clone());
    let suggestions = engine
        .suggest(&characteristics, &economics)
        .map_err(PricingServiceError::from)?;

    println!(
        "Pricing preview: {} in {}, {}",
        characteristics.accommodation_type.label(),
        characteristics.location.city,
        characteristics.location.state
    );
    render_suggestions(&suggestions);

    if let Some(rent) = proposed_rent {
        let validator = EthicalPricingValidator::new(policy.clone());
        let validation = validator
            .validate(rent, &characteristics, &economics)
            .map_err(PricingServiceError::from)?;
        render_validation(rent, &validation);
    }

    let guidance = GuidanceFormatter::new(policy).guidance(&characteristics, Some(&economics));
    println!("\n{guidance}");

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        market_csv,
        proposed_rent,
    } = args;

    println!("FairRent pricing demo");

    let repository = Arc::new(InMemoryMarketRepository::default());
    let service = PricingService::new(repository, default_pricing_policy());

    let summary = match market_csv {
        Some(path) => service.import_market_csv(File::open(path)?)?,
        None => service.import_market_csv(Cursor::new(SAMPLE_MARKET_CSV))?,
    };
    println!(
        "- Imported {} market snapshot(s): {}",
        summary.imported,
        summary
            .markets
            .iter()
            .map(|key| key.city().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let characteristics = demo_characteristics();
    let asking_rent = proposed_rent.unwrap_or(2_400.0);
    let quote = service.quote(QuoteRequest {
        characteristics: characteristics.clone(),
        proposed_rent: Some(asking_rent),
        economics: None,
    })?;

    println!(
        "\nQuoting a {} in {}, {}",
        characteristics.accommodation_type.label(),
        characteristics.location.city,
        characteristics.location.state
    );
    render_quote(&quote, asking_rent);

    let speculative_rent = quote.suggestions.standard_rent * 3.0;
    let speculative = service.quote(QuoteRequest {
        characteristics: characteristics.clone(),
        proposed_rent: Some(speculative_rent),
        economics: None,
    })?;
    println!("\nThe same listing at ${speculative_rent:.2}:");
    if let Some(validation) = &speculative.validation {
        render_validation(speculative_rent, validation);
    }

    Ok(())
}

fn demo_characteristics() -> PropertyCharacteristics {
    PropertyCharacteristics {
        accommodation_type: AccommodationType::Apartment,
        bedrooms: 2,
        bathrooms: 1.0,
        square_footage: 850.0,
        amenities: ["dishwasher".to_string(), "laundry".to_string()]
            .into_iter()
            .collect(),
        location: Location::new("Des Moines", "IA"),
        features: PropertyFeatures {
            is_furnished: true,
            near_transport: true,
            ..PropertyFeatures::default()
        },
    }
}

fn render_quote(quote: &RentQuote, asking_rent: f64) {
    render_suggestions(&quote.suggestions);
    if let Some(validation) = &quote.validation {
        render_validation(asking_rent, validation);
    }
    println!("\n{}", quote.guidance);
}

fn render_suggestions(suggestions: &fair_rent::pricing::PricingSuggestions) {
    println!("  standard rent:        ${:.2}", suggestions.standard_rent);
    println!("  affordable rent:      ${:.2}", suggestions.affordable_rent);
    println!("  community rent:       ${:.2}", suggestions.community_rent);
    println!("  income-based rent:    ${:.2}", suggestions.income_based_rent);
    println!("  market rate:          ${:.2}", suggestions.market_rate);
    println!(
        "  market-adjusted rent: ${:.2}",
        suggestions.market_adjusted_rent
    );
    println!(
        "  sliding scale band:   ${:.2} to ${:.2}",
        suggestions.sliding_scale_base, suggestions.sliding_scale_max
    );
    println!("  reduced deposit:      ${:.2}", suggestions.reduced_deposit);

    let adjustment = &suggestions.feature_adjustment;
    if !adjustment.components.is_empty() {
        println!("  feature adjustment: x{:.2}", adjustment.multiplier);
        for component in &adjustment.components {
            println!(
                "    - {:?}: +{:.0}% ({})",
                component.factor,
                component.increment * 100.0,
                component.notes
            );
        }
    }
}

fn render_validation(asking_rent: f64, validation: &ValidationResult) {
    if validation.is_within_ethical_range {
        println!(
            "  Asking rent ${asking_rent:.2} is within the ethical ceiling of ${:.2}.",
            validation.max_rent
        );
    } else {
        println!(
            "  Asking rent ${asking_rent:.2} exceeds the ethical ceiling of ${:.2}:",
            validation.max_rent
        );
    }
    for warning in &validation.warnings {
        println!("    - [{:?}] {}", warning.kind, warning.message);
    }
}
