use crate::scoring::{Criterion, CriterionScore};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    House,
    Apartment,
    Townhouse,
    SemiDetached,
    #[default]
    Other,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PropertyType::House => "Enebolig",
            PropertyType::Apartment => "Leilighet",
            PropertyType::Townhouse => "Rekkehus",
            PropertyType::SemiDetached => "Tomannsbolig",
            PropertyType::Other => "Annet",
        };
        f.write_str(label)
    }
}

/// Overall condition, best to worst. The ordering matters to the age scorer,
/// which grants a bonus for the top two levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionRating {
    New,
    VeryGood,
    Good,
    #[default]
    Fair,
    Poor,
    NeedsMajorRenovation,
}

impl fmt::Display for ConditionRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConditionRating::New => "Nytt",
            ConditionRating::VeryGood => "Meget God",
            ConditionRating::Good => "God",
            ConditionRating::Fair => "Grei",
            ConditionRating::Poor => "Dårlig",
            ConditionRating::NeedsMajorRenovation => "Totalrenovering",
        };
        f.write_str(label)
    }
}

/// Macro location quality (district/municipality level). Micro-location is a
/// separate 0-10 rated criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationRating {
    Excellent,
    VeryGood,
    Good,
    #[default]
    Average,
    BelowAverage,
}

impl fmt::Display for LocationRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LocationRating::Excellent => "Utmerket",
            LocationRating::VeryGood => "Meget God",
            LocationRating::Good => "God",
            LocationRating::Average => "Gjennomsnittlig",
            LocationRating::BelowAverage => "Under Middels",
        };
        f.write_str(label)
    }
}

/// One candidate property.
///
/// Every numeric field defaults to 0 and every text field to empty, so a
/// partial record (e.g. a hand-written YAML file for `add`) parses; the
/// scoring engine treats zero/missing values as degenerate input and scores
/// them with sentinels rather than failing.
///
/// `total_score` and `scores` are derived, never authoritative: they are
/// recomputed from the raw fields and the current weights on every load and
/// after every mutation, and are safe to discard at any time.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Property {
    pub id: Uuid,
    pub address: String,
    /// Asking price in kr.
    pub price: f64,
    /// Usable area (BRA) in m².
    pub area: f64,
    pub property_type: PropertyType,
    pub condition: ConditionRating,
    pub location: LocationRating,
    pub parking_spots: u32,
    pub has_garage: bool,
    /// Garden size in m², 0 if none.
    pub garden_size: f64,
    pub has_rental_unit: bool,
    /// Free-text renovation notes. The condition scorer scans this for
    /// full-renovation trigger words.
    pub renovation_needs: String,
    pub other_attributes: String,
    /// Construction year; 0 means unknown.
    pub year_built: i32,
    pub bedrooms: u32,
    /// Bathroom count; halves denote a separate WC (1.5 = 1 bath + 1 WC).
    pub bathrooms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_comment: Option<String>,

    // Viewing ratings, 0-10 each.
    pub kitchen_quality: f64,
    pub living_room_quality: f64,
    pub storage_quality: f64,
    pub floor_plan_quality: f64,
    pub balcony_terrace_quality: f64,
    pub light_and_air_quality: f64,
    pub area_impression: f64,
    pub neighborhood_impression: f64,
    pub public_transport_access: f64,
    pub schools_proximity: f64,
    pub viewing_impression: f64,
    pub potential: f64,

    // Derived, recomputed on load.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<BTreeMap<Criterion, CriterionScore>>,
}

impl Default for Property {
    fn default() -> Self {
        Self {
            id: Uuid::nil(),
            address: String::new(),
            price: 0.0,
            area: 0.0,
            property_type: PropertyType::default(),
            condition: ConditionRating::default(),
            location: LocationRating::default(),
            parking_spots: 0,
            has_garage: false,
            garden_size: 0.0,
            has_rental_unit: false,
            renovation_needs: String::new(),
            other_attributes: String::new(),
            year_built: 0,
            bedrooms: 0,
            bathrooms: 0.0,
            listing_link: None,
            user_comment: None,
            kitchen_quality: 0.0,
            living_room_quality: 0.0,
            storage_quality: 0.0,
            floor_plan_quality: 0.0,
            balcony_terrace_quality: 0.0,
            light_and_air_quality: 0.0,
            area_impression: 0.0,
            neighborhood_impression: 0.0,
            public_transport_access: 0.0,
            schools_proximity: 0.0,
            viewing_impression: 0.0,
            potential: 0.0,
            total_score: None,
            scores: None,
        }
    }
}

impl Property {
    /// Price per m², or 0 when the area is missing.
    pub fn price_per_sqm(&self) -> f64 {
        if self.area > 0.0 {
            self.price / self.area
        } else {
            0.0
        }
    }

    /// Age in years relative to `current_year`; negative for future builds.
    pub fn age(&self, current_year: i32) -> i32 {
        current_year - self.year_built
    }
}
