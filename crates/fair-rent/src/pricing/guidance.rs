//! Human-readable pricing guidance assembled from the suggestion engine.

use serde::Serialize;

use super::domain::{EconomicInputs, PropertyCharacteristics};
use super::fields::{self, ListingField};
use super::suggestion::{PricingPolicy, PricingSuggestions, RentSuggestionEngine};

/// Shown when the listing lacks the fields guidance is anchored on.
pub const MISSING_PROPERTY_DETAILS_PROMPT: &str =
    "Add the property's city and square footage to unlock pricing guidance.";

/// Shown when no usable market snapshot is available for the listing's area.
pub const MISSING_MARKET_DATA_PROMPT: &str =
    "Provide the local median income and area average rent to unlock pricing guidance.";

/// Builds guidance text for a listing draft. Total: it never fails, it
/// degrades to an instructional prompt instead.
pub struct GuidanceFormatter {
    engine: RentSuggestionEngine,
}

impl GuidanceFormatter {
    pub fn new(policy: PricingPolicy) -> Self {
        Self {
            engine: RentSuggestionEngine::new(policy),
        }
    }

    pub fn guidance(
        &self,
        characteristics: &PropertyCharacteristics,
        economics: Option<&EconomicInputs>,
    ) -> String {
        match self.summary(characteristics, economics) {
            GuidanceOutcome::NeedsPropertyDetails => MISSING_PROPERTY_DETAILS_PROMPT.to_string(),
            GuidanceOutcome::NeedsMarketData => MISSING_MARKET_DATA_PROMPT.to_string(),
            GuidanceOutcome::Ready(summary) => summary.render(),
        }
    }

    /// Structured form of the guidance so views can lay it out themselves.
    pub fn summary(
        &self,
        characteristics: &PropertyCharacteristics,
        economics: Option<&EconomicInputs>,
    ) -> GuidanceOutcome {
        if characteristics.location.city.trim().is_empty()
            || characteristics.square_footage <= 0.0
        {
            return GuidanceOutcome::NeedsPropertyDetails;
        }

        let Some(economics) = economics else {
            return GuidanceOutcome::NeedsMarketData;
        };

        let Ok(suggestions) = self.engine.suggest(characteristics, economics) else {
            return GuidanceOutcome::NeedsMarketData;
        };

        GuidanceOutcome::Ready(GuidanceSummary::build(characteristics, suggestions))
    }
}

/// Tri-state guidance result: either of the prompts, or a full summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "summary")]
pub enum GuidanceOutcome {
    NeedsPropertyDetails,
    NeedsMarketData,
    Ready(GuidanceSummary),
}

/// Labeled rent figures plus the fields still worth filling in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuidanceSummary {
    pub headline: String,
    pub lines: Vec<GuidanceLine>,
    pub sliding_scale: (f64, f64),
    pub reduced_deposit: f64,
    pub missing_fields: Vec<ListingField>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuidanceLine {
    pub label: &'static str,
    pub amount: f64,
}

impl GuidanceSummary {
    fn build(
        characteristics: &PropertyCharacteristics,
        suggestions: PricingSuggestions,
    ) -> Self {
        let headline = format!(
            "Pricing guidance: {} in {}",
            characteristics.accommodation_type.label(),
            characteristics.location.city.trim()
        );

        let lines = vec![
            GuidanceLine {
                label: "standard rent",
                amount: suggestions.standard_rent,
            },
            GuidanceLine {
                label: "affordable rent",
                amount: suggestions.affordable_rent,
            },
            GuidanceLine {
                label: "community rent",
                amount: suggestions.community_rent,
            },
            GuidanceLine {
                label: "income-based rent",
                amount: suggestions.income_based_rent,
            },
            GuidanceLine {
                label: "market rate",
                amount: suggestions.market_rate,
            },
            GuidanceLine {
                label: "market-adjusted rent",
                amount: suggestions.market_adjusted_rent,
            },
        ];

        Self {
            headline,
            lines,
            sliding_scale: (
                suggestions.sliding_scale_base,
                suggestions.sliding_scale_max,
            ),
            reduced_deposit: suggestions.reduced_deposit,
            missing_fields: fields::missing_fields(characteristics),
        }
    }

    fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.headline);
        for line in &self.lines {
            out.push_str(&format!("\n- {}: ${:.2}", line.label, line.amount));
        }
        out.push_str(&format!(
            "\n- sliding scale band: ${:.2} to ${:.2}",
            self.sliding_scale.0, self.sliding_scale.1
        ));
        out.push_str(&format!(
            "\n- reduced deposit: ${:.2} (one month of standard rent)",
            self.reduced_deposit
        ));

        if !self.missing_fields.is_empty() {
            let labels: Vec<&str> = self
                .missing_fields
                .iter()
                .map(|field| field.label())
                .collect();
            out.push_str(&format!(
                "\nConsider adding: {} for a sharper suggestion.",
                labels.join(", ")
            ));
        }

        out
    }
}
