use super::criteria::Criterion;
use super::thresholds::Thresholds;
use super::weights::Weights;
use crate::property::{ConditionRating, LocationRating, Property};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Score for one criterion: a 0-100 value plus a short human-readable
/// rendering of the raw input that produced it. The description is purely
/// explanatory and never feeds back into aggregation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CriterionScore {
    pub score: f64,
    pub description: String,
}

/// Result of evaluating one property: every criterion scored, plus the
/// weighted total rounded to an integer in [0, 100].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Evaluation {
    pub total_score: u32,
    pub scores: BTreeMap<Criterion, CriterionScore>,
}

/// Evaluate a property with the current year taken from the system clock.
pub fn evaluate(property: &Property, weights: &Weights, thresholds: &Thresholds) -> Evaluation {
    evaluate_at(property, weights, thresholds, chrono::Local::now().year())
}

/// Evaluate a property against a weight table and threshold set.
///
/// Pure function: same inputs give bit-identical output, and degenerate input
/// (zero area, unset year, non-finite numerics) degrades to sentinel scores
/// instead of failing. `current_year` drives the age criterion and is passed
/// explicitly so callers and tests control it.
pub fn evaluate_at(
    property: &Property,
    weights: &Weights,
    thresholds: &Thresholds,
    current_year: i32,
) -> Evaluation {
    let mut scores = BTreeMap::new();

    scores.insert(Criterion::PricePerSqm, score_price_per_sqm(property, thresholds));
    scores.insert(Criterion::AreaSize, score_area_size(property, thresholds));
    scores.insert(Criterion::Condition, score_condition(property));
    scores.insert(Criterion::Location, score_location(property));
    scores.insert(Criterion::Parking, score_parking(property));
    scores.insert(Criterion::Garden, score_garden(property, thresholds));
    scores.insert(Criterion::RentalUnit, score_rental_unit(property));
    scores.insert(Criterion::Age, score_age(property, thresholds, current_year));
    scores.insert(Criterion::Bedrooms, score_bedrooms(property));
    scores.insert(Criterion::Bathrooms, score_bathrooms(property));

    scores.insert(
        Criterion::KitchenQuality,
        score_rated(property.kitchen_quality, "Kjøkken"),
    );
    scores.insert(
        Criterion::LivingRoomQuality,
        score_rated(property.living_room_quality, "Stue"),
    );
    scores.insert(
        Criterion::StorageQuality,
        score_rated(property.storage_quality, "Oppbevaring"),
    );
    scores.insert(
        Criterion::FloorPlanQuality,
        score_rated(property.floor_plan_quality, "Planløsning"),
    );
    scores.insert(
        Criterion::BalconyTerraceQuality,
        score_rated(property.balcony_terrace_quality, "Balkong/Terrasse"),
    );
    scores.insert(
        Criterion::LightAndAirQuality,
        score_rated(property.light_and_air_quality, "Lys/Luft"),
    );
    scores.insert(
        Criterion::AreaImpression,
        score_rated(property.area_impression, "Område (Mikro)"),
    );
    scores.insert(
        Criterion::NeighborhoodImpression,
        score_rated(property.neighborhood_impression, "Nabolag"),
    );
    scores.insert(
        Criterion::PublicTransportAccess,
        score_rated(property.public_transport_access, "Off. transp."),
    );
    scores.insert(
        Criterion::SchoolsProximity,
        score_rated(property.schools_proximity, "Skoler/Bhg."),
    );
    scores.insert(
        Criterion::ViewingImpression,
        score_rated(property.viewing_impression, "Visn.inntrykk"),
    );
    scores.insert(Criterion::Potential, score_rated(property.potential, "Potensial"));

    // Weighted average over criteria with strictly positive weight. A weight
    // of 0 removes the criterion from numerator and denominator both, so it
    // cannot perturb the total.
    let mut weighted_sum = 0.0;
    let mut weight_sum = 0u64;
    for criterion in Criterion::ALL {
        let weight = weights.get(criterion);
        if weight > 0 {
            weighted_sum += scores[&criterion].score * weight as f64;
            weight_sum += weight as u64;
        }
    }

    let total_score = if weight_sum > 0 {
        (weighted_sum / weight_sum as f64).round().clamp(0.0, 100.0) as u32
    } else {
        0
    };

    Evaluation { total_score, scores }
}

/// Linear position of `value` in `[min, max]` scaled to 0-100 and clamped.
/// With `invert`, lower raw values score higher.
fn normalize(value: f64, min: f64, max: f64, invert: bool) -> f64 {
    let score = ((value - min) / (max - min)).clamp(0.0, 1.0) * 100.0;
    if invert {
        100.0 - score
    } else {
        score
    }
}

/// Non-finite user input (NaN, infinities from bad upstream data) is treated
/// as 0 so it takes the sentinel path instead of poisoning the total.
fn finite(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Group digits in threes with spaces, Norwegian style: 3000000 -> "3 000 000".
pub fn format_grouped(value: i64) -> String {
    // unsigned_abs: i64::MIN has no i64 absolute value, and casts from
    // saturating float conversions can produce it
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

fn score_price_per_sqm(property: &Property, thresholds: &Thresholds) -> CriterionScore {
    let area = finite(property.area);
    if area == 0.0 {
        return CriterionScore {
            score: 0.0,
            description: "Areal mangler".to_string(),
        };
    }
    let price_per_sqm = finite(property.price) / area;
    let score = normalize(
        price_per_sqm,
        thresholds.min_price_per_sqm,
        thresholds.max_price_per_sqm,
        true,
    );
    CriterionScore {
        score,
        description: format!("Pris/kvm: {} kr", format_grouped(price_per_sqm.round() as i64)),
    }
}

fn score_area_size(property: &Property, thresholds: &Thresholds) -> CriterionScore {
    let area = finite(property.area);
    let score = if area <= thresholds.optimal_area {
        (area / thresholds.optimal_area) * 100.0
    } else {
        // Oversized homes lose at most 20 points, flattening out at the cap.
        let over = (area - thresholds.optimal_area)
            / (thresholds.area_score_cap - thresholds.optimal_area);
        100.0 - (over * 20.0).min(20.0)
    };
    CriterionScore {
        score: score.clamp(0.0, 100.0),
        description: format!("Areal: {} m²", area),
    }
}

fn score_condition(property: &Property) -> CriterionScore {
    let mut score: f64 = match property.condition {
        ConditionRating::New => 100.0,
        ConditionRating::VeryGood => 90.0,
        ConditionRating::Good => 75.0,
        ConditionRating::Fair => 50.0,
        ConditionRating::Poor => 25.0,
        ConditionRating::NeedsMajorRenovation => 5.0,
    };
    // Free-text override: notes announcing a full renovation or demolition
    // cap the score regardless of the ordinal level. Deliberately a plain
    // substring match on the two Norwegian trigger words.
    let notes = property.renovation_needs.to_lowercase();
    if notes.contains("totalrenover") || notes.contains("rives") {
        score = score.min(5.0);
    }
    CriterionScore {
        score,
        description: format!("Tilstand: {}", property.condition),
    }
}

fn score_location(property: &Property) -> CriterionScore {
    let score = match property.location {
        LocationRating::Excellent => 100.0,
        LocationRating::VeryGood => 90.0,
        LocationRating::Good => 75.0,
        LocationRating::Average => 50.0,
        LocationRating::BelowAverage => 25.0,
    };
    CriterionScore {
        score,
        description: format!("Makro-Beliggenhet: {}", property.location),
    }
}

fn score_parking(property: &Property) -> CriterionScore {
    let mut score = 0.0;
    if property.has_garage {
        score += 60.0;
    }
    score += (property.parking_spots as f64 * 20.0).min(40.0);
    let score = score.min(100.0);

    let mut parts = Vec::new();
    if property.has_garage {
        parts.push("Garasje".to_string());
    }
    if property.parking_spots > 0 {
        parts.push(format!("{} P-plass(er)", property.parking_spots));
    }
    let description = if parts.is_empty() {
        "Ingen dedikert parkering".to_string()
    } else {
        parts.join(", ")
    };
    CriterionScore { score, description }
}

fn score_garden(property: &Property, thresholds: &Thresholds) -> CriterionScore {
    let garden_size = finite(property.garden_size);
    if garden_size == 0.0 {
        return CriterionScore {
            score: 0.0,
            description: "Ingen hage".to_string(),
        };
    }
    let score = ((garden_size / thresholds.max_garden_benefit) * 100.0).min(100.0);
    CriterionScore {
        score,
        description: format!("Hage: {} m²", garden_size),
    }
}

fn score_rental_unit(property: &Property) -> CriterionScore {
    if property.has_rental_unit {
        CriterionScore {
            score: 100.0,
            description: "Har utleiedel".to_string(),
        }
    } else {
        CriterionScore {
            score: 0.0,
            description: "Ingen utleiedel".to_string(),
        }
    }
}

fn score_age(property: &Property, thresholds: &Thresholds, current_year: i32) -> CriterionScore {
    if property.year_built == 0 {
        return CriterionScore {
            score: 0.0,
            description: "Byggeår ukjent".to_string(),
        };
    }
    let age = property.age(current_year) as f64;

    let score = if age <= thresholds.new_age_limit {
        100.0
    } else if age > thresholds.old_age_penalty_start {
        // Past the penalty start the score decays by 2/year, but a home kept
        // in top condition earns back a flat bonus.
        let condition_bonus = match property.condition {
            ConditionRating::New | ConditionRating::VeryGood => 40.0,
            _ => 0.0,
        };
        (50.0 - (age - thresholds.old_age_penalty_start) * 2.0).max(0.0) + condition_bonus
    } else {
        normalize(age, thresholds.new_age_limit, thresholds.old_age_penalty_start, true)
    };

    CriterionScore {
        score: score.clamp(0.0, 100.0),
        description: format!("Byggeår: {} (Alder: {} år)", property.year_built, age as i64),
    }
}

fn score_bedrooms(property: &Property) -> CriterionScore {
    let score = match property.bedrooms {
        n if n >= 4 => 100.0,
        3 => 90.0,
        2 => 70.0,
        1 => 40.0,
        _ => 10.0,
    };
    CriterionScore {
        score,
        description: format!("{} soverom", property.bedrooms),
    }
}

fn score_bathrooms(property: &Property) -> CriterionScore {
    let bathrooms = finite(property.bathrooms);
    // Halves are exactly representable, so exact comparison is safe here.
    let score = if bathrooms >= 2.0 {
        100.0
    } else if bathrooms == 1.5 {
        80.0
    } else if bathrooms == 1.0 {
        60.0
    } else {
        10.0
    };
    CriterionScore {
        score,
        description: format!("{} bad", bathrooms),
    }
}

fn score_rated(rating: f64, name: &str) -> CriterionScore {
    let rating = finite(rating);
    let score = rating.clamp(0.0, 10.0) * 10.0;
    CriterionScore {
        score,
        description: format!("{}: {}/10", name, rating),
    }
}
