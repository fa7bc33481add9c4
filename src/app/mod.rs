mod pipeline;
mod summary;


pub(crate) use pipeline::{PlotSettings, run_pipeline};

#[cfg(test)]
pub(crate) use summary::summary_lines;
