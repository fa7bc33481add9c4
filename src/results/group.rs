use std::collections::HashSet;

use super::ResultTable;

/// Distinct containers (first-seen order) and distinct sizes (ascending) of a table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grouping {
    pub containers: Vec<String>,
    pub sizes: Vec<f64>,
}

#[must_use]
pub fn group_results(table: &ResultTable) -> Grouping {
    let mut seen = HashSet::new();
    let mut containers = Vec::new();
    for row in table.rows() {
        if seen.insert(row.container.as_str()) {
            containers.push(row.container.clone());
        }
    }

    let mut sizes: Vec<f64> = table.rows().iter().map(|row| row.size).collect();
    sizes.sort_by(f64::total_cmp);
    sizes.dedup_by(|left, right| left.total_cmp(right).is_eq());

    Grouping { containers, sizes }
}
