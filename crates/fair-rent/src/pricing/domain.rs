use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Accommodation categories supported by the listing platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccommodationType {
    Apartment,
    House,
    Room,
    Studio,
    Coliving,
    Hostel,
    Guesthouse,
    Campsite,
    Couchsurfing,
    Roommates,
    Boat,
    Treehouse,
    Yurt,
    Other,
}

impl AccommodationType {
    pub const ALL: [AccommodationType; 14] = [
        AccommodationType::Apartment,
        AccommodationType::House,
        AccommodationType::Room,
        AccommodationType::Studio,
        AccommodationType::Coliving,
        AccommodationType::Hostel,
        AccommodationType::Guesthouse,
        AccommodationType::Campsite,
        AccommodationType::Couchsurfing,
        AccommodationType::Roommates,
        AccommodationType::Boat,
        AccommodationType::Treehouse,
        AccommodationType::Yurt,
        AccommodationType::Other,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            AccommodationType::Apartment => "apartment",
            AccommodationType::House => "house",
            AccommodationType::Room => "room",
            AccommodationType::Studio => "studio",
            AccommodationType::Coliving => "coliving",
            AccommodationType::Hostel => "hostel",
            AccommodationType::Guesthouse => "guesthouse",
            AccommodationType::Campsite => "campsite",
            AccommodationType::Couchsurfing => "couchsurfing",
            AccommodationType::Roommates => "roommates",
            AccommodationType::Boat => "boat",
            AccommodationType::Treehouse => "treehouse",
            AccommodationType::Yurt => "yurt",
            AccommodationType::Other => "other",
        }
    }

    /// Stays offered without rent; a zero asking rent is legitimate here.
    pub const fn is_free_stay(self) -> bool {
        matches!(self, AccommodationType::Couchsurfing)
    }
}

/// Free-text place reference populated by the host application's geocoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: String,
}

impl Location {
    pub fn new(city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
        }
    }
}

/// Optional unit modifiers that nudge the suggested rent upward.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyFeatures {
    #[serde(default)]
    pub floor: Option<i16>,
    #[serde(default)]
    pub has_elevator: bool,
    #[serde(default)]
    pub parking_spaces: u8,
    #[serde(default)]
    pub year_built: Option<u16>,
    #[serde(default)]
    pub is_furnished: bool,
    #[serde(default)]
    pub utilities_included: bool,
    #[serde(default)]
    pub pet_friendly: bool,
    #[serde(default)]
    pub has_balcony: bool,
    #[serde(default)]
    pub has_garden: bool,
    #[serde(default)]
    pub near_transport: bool,
    #[serde(default)]
    pub near_schools: bool,
    #[serde(default)]
    pub near_shopping: bool,
}

/// Immutable listing snapshot handed to the pricing functions.
///
/// A `square_footage` of zero means the host has not measured the unit yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyCharacteristics {
    pub accommodation_type: AccommodationType,
    #[serde(default)]
    pub bedrooms: u8,
    #[serde(default)]
    pub bathrooms: f32,
    #[serde(default)]
    pub square_footage: f64,
    #[serde(default)]
    pub amenities: BTreeSet<String>,
    pub location: Location,
    #[serde(default)]
    pub features: PropertyFeatures,
}

/// Local economic figures the suggestion engine derives rent bands from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EconomicInputs {
    /// Annual median household income for the listing's area.
    pub local_median_income: f64,
    /// Monthly average asking rent observed in the listing's area.
    pub area_average_rent: f64,
}

/// Raised when the economic figures cannot support a computation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidInputError {
    #[error("local median income must be a positive annual amount (found {found})")]
    MedianIncome { found: f64 },
    #[error("area average rent must be a positive monthly amount (found {found})")]
    AreaAverageRent { found: f64 },
}

impl EconomicInputs {
    /// Guard shared by every entry point so the functions are safe to call directly.
    pub fn ensure_valid(&self) -> Result<(), InvalidInputError> {
        if !self.local_median_income.is_finite() || self.local_median_income <= 0.0 {
            return Err(InvalidInputError::MedianIncome {
                found: self.local_median_income,
            });
        }
        if !self.area_average_rent.is_finite() || self.area_average_rent <= 0.0 {
            return Err(InvalidInputError::AreaAverageRent {
                found: self.area_average_rent,
            });
        }
        Ok(())
    }

    pub fn monthly_median_income(&self) -> f64 {
        self.local_median_income / 12.0
    }
}
