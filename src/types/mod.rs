pub mod coordinate;
pub mod date_range;
pub mod metric;
pub mod series;
