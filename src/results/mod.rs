//! Benchmark result tables: column schema, loading, and grouping by container.
mod group;
mod loader;
mod schema;
mod table;

#[cfg(test)]
mod tests;

pub use group::{Grouping, group_results};
pub use loader::load_results;
pub use schema::{CONTAINER_COLUMN, Metric, ResultSchema, SIZE_COLUMN};
pub use table::{MetricStats, ResultRow, ResultTable};

#[cfg(test)]
pub(crate) use loader::parse_results;
#[cfg(test)]
pub(crate) use schema::REQUIRED_COLUMNS;
