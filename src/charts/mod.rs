//! Figure model, plotters rendering, and image export.
mod export;
mod figure;
mod palette;
mod render;
mod scale;


pub use export::export_figure;
pub use figure::build_figure;
pub use palette::{Palette, parse_color};
pub use render::FigureStyle;

#[cfg(test)]
pub(crate) use export::Canvas;
#[cfg(test)]
pub(crate) use figure::Figure;
#[cfg(test)]
pub(crate) use palette::TAB10;
#[cfg(test)]
pub(crate) use scale::{AxisRange, MAX_LOG_SPAN, dash_segments, format_tick, log_ticks};
