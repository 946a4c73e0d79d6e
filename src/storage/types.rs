use crate::property::Property;
use crate::scoring::{evaluate, Thresholds, Weights};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const CATALOG_VERSION: u32 = 1;

/// Persisted property catalog.
///
/// The stored `total_score`/`scores` on each property are display copies
/// only; `rescore` overwrites them from the raw fields, and callers do so on
/// every load and after every weight change.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Catalog {
    pub version: u32,
    pub properties: Vec<Property>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            version: CATALOG_VERSION,
            properties: Vec::new(),
        }
    }

    pub fn add(&mut self, property: Property) {
        self.properties.insert(0, property);
    }

    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.properties.len();
        self.properties.retain(|p| p.id != id);
        self.properties.len() != before
    }

    /// Recompute derived scores for every property. Each evaluation is
    /// independent, so ordering does not matter.
    pub fn rescore(&mut self, weights: &Weights, thresholds: &Thresholds) {
        for property in &mut self.properties {
            let evaluation = evaluate(property, weights, thresholds);
            property.total_score = Some(evaluation.total_score);
            property.scores = Some(evaluation.scores);
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
