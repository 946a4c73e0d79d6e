use serde::{Deserialize, Serialize};

/// Fixed scoring thresholds.
///
/// These are process-wide constants: loaded once (optionally overridden from
/// the config file), validated at startup, never mutated at runtime. Every
/// field has a default, so a partial `scoring:` section only overrides what
/// it names.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   min_price_per_sqm: 20000
///   max_price_per_sqm: 150000
///   optimal_area: 120
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Thresholds {
    /// Price/m² at or below this scores 100 (kr).
    #[serde(default = "default_min_price_per_sqm")]
    pub min_price_per_sqm: f64,

    /// Price/m² at or above this scores 0 (kr).
    #[serde(default = "default_max_price_per_sqm")]
    pub max_price_per_sqm: f64,

    /// Area where the size score peaks (m²).
    #[serde(default = "default_optimal_area")]
    pub optimal_area: f64,

    /// Area beyond which extra size stops mattering (m²).
    #[serde(default = "default_area_score_cap")]
    pub area_score_cap: f64,

    /// Homes at most this many years old get full age marks.
    #[serde(default = "default_new_age_limit")]
    pub new_age_limit: f64,

    /// Age past which the penalty regime starts, unless condition is high.
    #[serde(default = "default_old_age_penalty_start")]
    pub old_age_penalty_start: f64,

    /// Garden size giving the full garden score (m²).
    #[serde(default = "default_max_garden_benefit")]
    pub max_garden_benefit: f64,
}

fn default_min_price_per_sqm() -> f64 {
    20_000.0
}

fn default_max_price_per_sqm() -> f64 {
    150_000.0
}

fn default_optimal_area() -> f64 {
    120.0
}

fn default_area_score_cap() -> f64 {
    250.0
}

fn default_new_age_limit() -> f64 {
    5.0
}

fn default_old_age_penalty_start() -> f64 {
    50.0
}

fn default_max_garden_benefit() -> f64 {
    500.0
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_price_per_sqm: default_min_price_per_sqm(),
            max_price_per_sqm: default_max_price_per_sqm(),
            optimal_area: default_optimal_area(),
            area_score_cap: default_area_score_cap(),
            new_age_limit: default_new_age_limit(),
            old_age_penalty_start: default_old_age_penalty_start(),
            max_garden_benefit: default_max_garden_benefit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let t = Thresholds::default();
        assert_eq!(t.min_price_per_sqm, 20_000.0);
        assert_eq!(t.max_price_per_sqm, 150_000.0);
        assert_eq!(t.optimal_area, 120.0);
        assert_eq!(t.area_score_cap, 250.0);
        assert_eq!(t.new_age_limit, 5.0);
        assert_eq!(t.old_age_penalty_start, 50.0);
        assert_eq!(t.max_garden_benefit, 500.0);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
min_price_per_sqm: 30000
optimal_area: 90
"#;
        let t: Thresholds = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(t.min_price_per_sqm, 30_000.0);
        assert_eq!(t.optimal_area, 90.0);
        assert_eq!(t.max_price_per_sqm, 150_000.0);
        assert_eq!(t.max_garden_benefit, 500.0);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let t: Thresholds = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(t, Thresholds::default());
    }

    #[test]
    fn test_serde_roundtrip() {
        let t = Thresholds::default();
        let yaml = serde_saphyr::to_string(&t).unwrap();
        let parsed: Thresholds = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(t, parsed);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "min_price_per_m2: 1";
        assert!(serde_saphyr::from_str::<Thresholds>(yaml).is_err());
    }
}
