use super::Metric;

/// Mean and 95% confidence half-width of one measurement, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MetricStats {
    pub mean: f64,
    pub ci95: f64,
}

impl MetricStats {
    #[must_use]
    pub const fn new(mean: f64, ci95: f64) -> Self {
        Self { mean, ci95 }
    }

    #[must_use]
    pub fn lower(self) -> f64 {
        self.mean - self.ci95
    }

    #[must_use]
    pub fn upper(self) -> f64 {
        self.mean + self.ci95
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub container: String,
    pub size: f64,
    stats: [MetricStats; 3],
}

impl ResultRow {
    #[must_use]
    pub const fn new(
        container: String,
        size: f64,
        create_destroy: MetricStats,
        iterate: MetricStats,
        access: MetricStats,
    ) -> Self {
        Self {
            container,
            size,
            stats: [create_destroy, iterate, access],
        }
    }

    #[must_use]
    pub fn stats(&self, metric: Metric) -> MetricStats {
        self.stats.get(metric.index()).copied().unwrap_or_default()
    }
}

/// Rows in file order. Never mutated after load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    rows: Vec<ResultRow>,
}

impl ResultTable {
    #[must_use]
    pub const fn new(rows: Vec<ResultRow>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows belonging to `container`, in file order.
    pub fn rows_for<'table>(
        &'table self,
        container: &'table str,
    ) -> impl Iterator<Item = &'table ResultRow> + 'table {
        self.rows
            .iter()
            .filter(move |row| row.container == container)
    }
}
