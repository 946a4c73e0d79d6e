use super::thresholds::Thresholds;

/// Validate the threshold table at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_thresholds(thresholds: &Thresholds) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if !thresholds.min_price_per_sqm.is_finite() || thresholds.min_price_per_sqm < 0.0 {
        errors.push("scoring.min_price_per_sqm: must be a non-negative number".to_string());
    }
    if !thresholds.max_price_per_sqm.is_finite() || thresholds.max_price_per_sqm <= 0.0 {
        errors.push("scoring.max_price_per_sqm: must be a positive number".to_string());
    }
    if thresholds.min_price_per_sqm >= thresholds.max_price_per_sqm {
        errors.push(format!(
            "scoring.min_price_per_sqm ({}) must be below max_price_per_sqm ({})",
            thresholds.min_price_per_sqm, thresholds.max_price_per_sqm
        ));
    }

    if !thresholds.optimal_area.is_finite() || thresholds.optimal_area <= 0.0 {
        errors.push("scoring.optimal_area: must be a positive number".to_string());
    }
    if thresholds.optimal_area >= thresholds.area_score_cap {
        errors.push(format!(
            "scoring.optimal_area ({}) must be below area_score_cap ({})",
            thresholds.optimal_area, thresholds.area_score_cap
        ));
    }

    if !thresholds.new_age_limit.is_finite() || thresholds.new_age_limit < 0.0 {
        errors.push("scoring.new_age_limit: must be a non-negative number".to_string());
    }
    if thresholds.new_age_limit >= thresholds.old_age_penalty_start {
        errors.push(format!(
            "scoring.new_age_limit ({}) must be below old_age_penalty_start ({})",
            thresholds.new_age_limit, thresholds.old_age_penalty_start
        ));
    }

    if !thresholds.max_garden_benefit.is_finite() || thresholds.max_garden_benefit <= 0.0 {
        errors.push("scoring.max_garden_benefit: must be a positive number".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
