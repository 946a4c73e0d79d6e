use crate::scoring::Thresholds;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Optional overrides for the scoring threshold table.
    pub scoring: Option<Thresholds>,
}
