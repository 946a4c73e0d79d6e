mod formatter;

pub use formatter::{
    format_price, format_property_detail, format_scored_table, format_tsv, format_weights_table,
    should_use_colors, ScoredProperty,
};
