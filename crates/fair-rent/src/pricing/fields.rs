//! Data-driven mapping from accommodation type to the listing fields that
//! matter for it, so intake forms and guidance stay declarative.

use serde::{Deserialize, Serialize};

use super::domain::{AccommodationType, PropertyCharacteristics};

/// Listing detail slots the platform collects per accommodation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingField {
    Bedrooms,
    Bathrooms,
    SquareFootage,
    Amenities,
    Floor,
    ParkingSpaces,
    YearBuilt,
    Furnished,
    UtilitiesIncluded,
    PetPolicy,
    OutdoorSpace,
    Proximity,
}

impl ListingField {
    pub const fn label(self) -> &'static str {
        match self {
            ListingField::Bedrooms => "bedrooms",
            ListingField::Bathrooms => "bathrooms",
            ListingField::SquareFootage => "square footage",
            ListingField::Amenities => "amenities",
            ListingField::Floor => "floor",
            ListingField::ParkingSpaces => "parking spaces",
            ListingField::YearBuilt => "year built",
            ListingField::Furnished => "furnished state",
            ListingField::UtilitiesIncluded => "utilities included",
            ListingField::PetPolicy => "pet policy",
            ListingField::OutdoorSpace => "outdoor space",
            ListingField::Proximity => "proximity highlights",
        }
    }
}

const FULL_UNIT_FIELDS: &[ListingField] = &[
    ListingField::Bedrooms,
    ListingField::Bathrooms,
    ListingField::SquareFootage,
    ListingField::Amenities,
    ListingField::Floor,
    ListingField::ParkingSpaces,
    ListingField::YearBuilt,
    ListingField::Furnished,
    ListingField::UtilitiesIncluded,
    ListingField::PetPolicy,
    ListingField::OutdoorSpace,
    ListingField::Proximity,
];

const HOUSE_FIELDS: &[ListingField] = &[
    ListingField::Bedrooms,
    ListingField::Bathrooms,
    ListingField::SquareFootage,
    ListingField::Amenities,
    ListingField::ParkingSpaces,
    ListingField::YearBuilt,
    ListingField::Furnished,
    ListingField::UtilitiesIncluded,
    ListingField::PetPolicy,
    ListingField::OutdoorSpace,
    ListingField::Proximity,
];

const SHARED_SPACE_FIELDS: &[ListingField] = &[
    ListingField::Bathrooms,
    ListingField::SquareFootage,
    ListingField::Amenities,
    ListingField::Furnished,
    ListingField::UtilitiesIncluded,
    ListingField::PetPolicy,
    ListingField::Proximity,
];

const HOSPITALITY_FIELDS: &[ListingField] = &[
    ListingField::Bathrooms,
    ListingField::Amenities,
    ListingField::UtilitiesIncluded,
    ListingField::PetPolicy,
    ListingField::Proximity,
];

const OUTDOOR_STAY_FIELDS: &[ListingField] = &[
    ListingField::Amenities,
    ListingField::PetPolicy,
    ListingField::OutdoorSpace,
    ListingField::Proximity,
];

const FREE_STAY_FIELDS: &[ListingField] = &[
    ListingField::Amenities,
    ListingField::PetPolicy,
    ListingField::Proximity,
];

const UNCONVENTIONAL_FIELDS: &[ListingField] = &[
    ListingField::SquareFootage,
    ListingField::Amenities,
    ListingField::Furnished,
    ListingField::UtilitiesIncluded,
    ListingField::PetPolicy,
    ListingField::OutdoorSpace,
    ListingField::Proximity,
];

/// Lookup table keyed by accommodation type.
pub const fn fields_for(accommodation: AccommodationType) -> &'static [ListingField] {
    match accommodation {
        AccommodationType::Apartment | AccommodationType::Studio => FULL_UNIT_FIELDS,
        AccommodationType::House => HOUSE_FIELDS,
        AccommodationType::Room
        | AccommodationType::Coliving
        | AccommodationType::Roommates => SHARED_SPACE_FIELDS,
        AccommodationType::Hostel | AccommodationType::Guesthouse => HOSPITALITY_FIELDS,
        AccommodationType::Campsite => OUTDOOR_STAY_FIELDS,
        AccommodationType::Couchsurfing => FREE_STAY_FIELDS,
        AccommodationType::Boat
        | AccommodationType::Treehouse
        | AccommodationType::Yurt
        | AccommodationType::Other => UNCONVENTIONAL_FIELDS,
    }
}

fn is_provided(field: ListingField, characteristics: &PropertyCharacteristics) -> bool {
    let features = &characteristics.features;
    match field {
        ListingField::Bedrooms => characteristics.bedrooms > 0,
        ListingField::Bathrooms => characteristics.bathrooms > 0.0,
        ListingField::SquareFootage => characteristics.square_footage > 0.0,
        ListingField::Amenities => !characteristics.amenities.is_empty(),
        ListingField::Floor => features.floor.is_some(),
        ListingField::ParkingSpaces => features.parking_spaces > 0,
        ListingField::YearBuilt => features.year_built.is_some(),
        // Boolean slots default to false, which is itself a valid answer.
        ListingField::Furnished => true,
        ListingField::UtilitiesIncluded => true,
        ListingField::PetPolicy => true,
        ListingField::OutdoorSpace => features.has_balcony || features.has_garden,
        ListingField::Proximity => {
            features.near_transport || features.near_schools || features.near_shopping
        }
    }
}

/// Relevant fields for the listing's type that the host has not filled in yet.
pub fn missing_fields(characteristics: &PropertyCharacteristics) -> Vec<ListingField> {
    fields_for(characteristics.accommodation_type)
        .iter()
        .copied()
        .filter(|field| !is_provided(*field, characteristics))
        .collect()
}
