use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::args::{Delimiter, PlotArgs};
use crate::charts::{FigureStyle, Palette, build_figure, export_figure};
use crate::error::{AppResult, ChartError};
use crate::results::{group_results, load_results};

use super::summary::print_summary;

/// Everything one render needs, resolved from CLI and config.
#[derive(Debug, Clone)]
pub(crate) struct PlotSettings {
    pub(crate) input: PathBuf,
    pub(crate) output: PathBuf,
    pub(crate) delimiter: Delimiter,
    pub(crate) title: String,
    pub(crate) style: FigureStyle,
    pub(crate) palette: Palette,
    pub(crate) summary: bool,
}

impl PlotSettings {
    pub(crate) fn from_args(args: PlotArgs) -> Self {
        let pinned: BTreeMap<String, _> = args.colors.into_iter().collect();
        Self {
            input: PathBuf::from(args.input),
            output: PathBuf::from(args.output),
            delimiter: args.delimiter,
            title: args.title,
            style: FigureStyle {
                dpi: args.dpi.get(),
                width_in: args.width,
                height_in: args.height,
            },
            palette: Palette::new(args.palette, pinned),
            summary: args.summary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlotReport {
    pub(crate) rows: usize,
    pub(crate) containers: usize,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

/// Load, group, draw, and write one chart.
///
/// # Errors
///
/// Returns an error when the results file cannot be read or parsed, or when the
/// chart cannot be rendered or written.
pub(crate) fn run_pipeline(settings: &PlotSettings) -> AppResult<PlotReport> {
    let table = load_results(&settings.input, settings.delimiter.byte())?;
    info!(
        "Loaded {} rows from {}",
        table.len(),
        settings.input.display()
    );
    if settings.summary {
        print_summary(&table);
    }

    if table.is_empty() {
        info!("No result rows; writing an empty chart.");
    }

    let grouping = group_results(&table);
    let colors = settings.palette.assign(&grouping.containers);
    debug!(
        "Assigned colors to {} containers from a cycle of {}",
        grouping.containers.len(),
        settings.palette.cycle_len()
    );

    let figure = build_figure(&table, &grouping, &colors, &settings.title);
    ensure_parent_dir(&settings.output)?;
    let (width, height) = export_figure(&figure, &settings.style, &settings.output)?;

    Ok(PlotReport {
        rows: table.len(),
        containers: grouping.containers.len(),
        width,
        height,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<(), ChartError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|err| ChartError::CreateDir {
            path: parent.to_path_buf(),
            source: err,
        })?;
    }
    Ok(())
}
