pub mod types;

pub use types::{ConditionRating, LocationRating, Property, PropertyType};
