use super::criteria::Criterion;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default importance per criterion. No fixed sum; values are relative
/// influence only, so adding a weight-0 criterion never shifts totals.
const DEFAULT_WEIGHTS: [u32; Criterion::COUNT] = [
    15, // price_per_sqm
    15, // area_size
    15, // condition
    10, // location
    6,  // parking
    5,  // garden
    3,  // rental_unit
    5,  // age
    8,  // bedrooms
    10, // bathrooms
    10, // kitchen_quality
    10, // living_room_quality
    5,  // storage_quality
    4,  // floor_plan_quality
    7,  // balcony_terrace_quality
    6,  // light_and_air_quality
    10, // area_impression
    10, // neighborhood_impression
    7,  // public_transport_access
    8,  // schools_proximity
    8,  // viewing_impression
    7,  // potential
];

/// User-adjustable weight table, one non-negative entry per criterion.
///
/// Backed by a fixed-size array indexed by `Criterion::ALL` position, so the
/// mapping is total by construction. Serialized as a criterion-id-keyed map;
/// keys missing from a stored map fall back to their defaults, which keeps
/// old weight files valid when criteria are added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WeightsMap", into = "WeightsMap")]
pub struct Weights([u32; Criterion::COUNT]);

type WeightsMap = BTreeMap<Criterion, u32>;

impl Weights {
    pub fn get(&self, criterion: Criterion) -> u32 {
        self.0[criterion.index()]
    }

    pub fn set(&mut self, criterion: Criterion, value: u32) {
        self.0[criterion.index()] = value;
    }

    /// A table with every weight zero. Useful as a starting point for
    /// focused comparisons (and in tests).
    pub fn zeroed() -> Self {
        Weights([0; Criterion::COUNT])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Criterion, u32)> + '_ {
        Criterion::ALL.iter().map(move |&c| (c, self.get(c)))
    }
}

impl Default for Weights {
    fn default() -> Self {
        Weights(DEFAULT_WEIGHTS)
    }
}

impl From<WeightsMap> for Weights {
    fn from(map: WeightsMap) -> Self {
        let mut weights = Weights::default();
        for (criterion, value) in map {
            weights.set(criterion, value);
        }
        weights
    }
}

impl From<Weights> for WeightsMap {
    fn from(weights: Weights) -> Self {
        weights.iter().collect()
    }
}
