use std::path::Path;

use csv::StringRecord;

use crate::error::ResultsError;

pub const CONTAINER_COLUMN: &str = "Container";
pub const SIZE_COLUMN: &str = "Size";

/// Every column a results file must carry, in the order the benchmark harness writes them.
#[cfg(test)]
pub const REQUIRED_COLUMNS: [&str; 8] = [
    SIZE_COLUMN,
    CONTAINER_COLUMN,
    Metric::CreateDestroy.mean_column(),
    Metric::CreateDestroy.ci_column(),
    Metric::Iterate.mean_column(),
    Metric::Iterate.ci_column(),
    Metric::Access.mean_column(),
    Metric::Access.ci_column(),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    CreateDestroy,
    Iterate,
    Access,
}

impl Metric {
    /// Panel order of the rendered figure.
    pub const ALL: [Metric; 3] = [Metric::CreateDestroy, Metric::Iterate, Metric::Access];

    #[must_use]
    pub const fn mean_column(self) -> &'static str {
        match self {
            Metric::CreateDestroy => "CreateDestroyMean",
            Metric::Iterate => "IterateMean",
            Metric::Access => "AccessMean",
        }
    }

    #[must_use]
    pub const fn ci_column(self) -> &'static str {
        match self {
            Metric::CreateDestroy => "CreateDestroyCI95",
            Metric::Iterate => "IterateCI95",
            Metric::Access => "AccessCI95",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Metric::CreateDestroy => "Create+Destroy",
            Metric::Iterate => "Iterate",
            Metric::Access => "Access",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Metric::CreateDestroy => 0,
            Metric::Iterate => 1,
            Metric::Access => 2,
        }
    }
}

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultSchema {
    pub container: usize,
    pub size: usize,
    pub means: [usize; 3],
    pub cis: [usize; 3],
}

impl ResultSchema {
    /// Resolves column positions from a header row.
    ///
    /// # Errors
    ///
    /// Returns [`ResultsError::MissingColumns`] naming every required column absent from
    /// `headers`.
    pub fn resolve(headers: &StringRecord, path: &Path) -> Result<Self, ResultsError> {
        let mut missing = Vec::new();
        let mut find = |name: &str| -> usize {
            if let Some(position) = headers.iter().position(|header| header.trim() == name) {
                position
            } else {
                missing.push(name.to_owned());
                0
            }
        };

        let size = find(SIZE_COLUMN);
        let container = find(CONTAINER_COLUMN);
        let mut means = [0usize; 3];
        let mut cis = [0usize; 3];
        for (metric, (mean, ci)) in Metric::ALL
            .iter()
            .zip(means.iter_mut().zip(cis.iter_mut()))
        {
            *mean = find(metric.mean_column());
            *ci = find(metric.ci_column());
        }

        if !missing.is_empty() {
            return Err(ResultsError::MissingColumns {
                path: path.to_path_buf(),
                columns: missing,
            });
        }

        Ok(Self {
            container,
            size,
            means,
            cis,
        })
    }
}
