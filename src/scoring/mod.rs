pub mod criteria;
pub mod engine;
pub mod thresholds;
pub mod validation;
pub mod weights;

pub use criteria::{Criterion, CriterionDefinition, DEFINITIONS};
pub use engine::{evaluate, evaluate_at, format_grouped, CriterionScore, Evaluation};
pub use thresholds::Thresholds;
pub use validation::validate_thresholds;
pub use weights::Weights;
