use std::path::Path;

use plotters::prelude::*;
use tracing::debug;

use crate::error::ChartError;

use super::figure::Figure;
use super::render::{FigureStyle, draw_figure};

const BYTES_PER_PIXEL: usize = 3;
const BACKGROUND: u8 = 0xff;

/// Pixel rectangle, inclusive of `left`/`top`, exclusive of `right`/`bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Bounds {
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }
}

/// Owned RGB raster the figure is drawn into. Dropping it releases the figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Allocates a white canvas.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::CanvasSize`] when the buffer size overflows `usize`.
    pub fn new(width: u32, height: u32) -> Result<Self, ChartError> {
        let len = buffer_len(width, height).ok_or(ChartError::CanvasSize {
            width: f64::from(width),
            height: f64::from(height),
        })?;
        Ok(Self {
            width,
            height,
            pixels: vec![BACKGROUND; len],
        })
    }

    /// Wraps an existing RGB buffer of `width * height * 3` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::CanvasSize`] when the buffer length does not match.
    #[cfg(test)]
    pub fn from_rgb(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, ChartError> {
        if buffer_len(width, height) != Some(pixels.len()) {
            return Err(ChartError::CanvasSize {
                width: f64::from(width),
                height: f64::from(height),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    #[must_use]
    pub const fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[cfg(test)]
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Draws `figure` into the buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Render`] when drawing fails.
    pub fn render(&mut self, figure: &Figure, style: &FigureStyle) -> Result<(), ChartError> {
        let root = BitMapBackend::with_buffer(&mut self.pixels, (self.width, self.height))
            .into_drawing_area();
        draw_figure(&root, figure, style)?;
        root.present()?;
        Ok(())
    }

    /// Smallest rectangle holding every non-white pixel, or `None` for a blank canvas.
    #[must_use]
    pub fn content_bounds(&self) -> Option<Bounds> {
        let row_len = usize::try_from(self.width)
            .ok()?
            .checked_mul(BYTES_PER_PIXEL)?;
        if row_len == 0 {
            return None;
        }

        let mut bounds: Option<Bounds> = None;
        for (y, row) in (0u32..).zip(self.pixels.chunks_exact(row_len)) {
            for (x, pixel) in (0u32..).zip(row.chunks_exact(BYTES_PER_PIXEL)) {
                if pixel.iter().all(|&channel| channel == BACKGROUND) {
                    continue;
                }
                let (right, bottom) = (x.saturating_add(1), y.saturating_add(1));
                bounds = Some(match bounds {
                    Some(found) => Bounds {
                        left: found.left.min(x),
                        top: found.top.min(y),
                        right: found.right.max(right),
                        bottom: found.bottom.max(bottom),
                    },
                    None => Bounds {
                        left: x,
                        top: y,
                        right,
                        bottom,
                    },
                });
            }
        }
        bounds
    }

    /// Copy cropped to the content plus `pad` pixels on each side, clipped to the canvas.
    /// A blank canvas is returned unchanged.
    #[must_use]
    pub fn trimmed(&self, pad: u32) -> Canvas {
        let Some(content) = self.content_bounds() else {
            return self.clone();
        };
        let crop = Bounds {
            left: content.left.saturating_sub(pad),
            top: content.top.saturating_sub(pad),
            right: content.right.saturating_add(pad).min(self.width),
            bottom: content.bottom.saturating_add(pad).min(self.height),
        };
        self.crop(crop)
    }

    fn crop(&self, crop: Bounds) -> Canvas {
        let to_index = |value: u32| usize::try_from(value).unwrap_or(usize::MAX);
        let row_len = to_index(self.width).saturating_mul(BYTES_PER_PIXEL);
        let start = to_index(crop.left).saturating_mul(BYTES_PER_PIXEL);
        let end = to_index(crop.right).saturating_mul(BYTES_PER_PIXEL);

        let mut pixels =
            Vec::with_capacity(buffer_len(crop.width(), crop.height()).unwrap_or_default());
        for row in self
            .pixels
            .chunks_exact(row_len.max(1))
            .skip(to_index(crop.top))
            .take(to_index(crop.height()))
        {
            if let Some(slice) = row.get(start..end) {
                pixels.extend_from_slice(slice);
            }
        }
        Canvas {
            width: crop.width(),
            height: crop.height(),
            pixels,
        }
    }

    /// Encodes the canvas to `path`; the format follows the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Write`] when the image cannot be encoded or written.
    pub fn write_image(&self, path: &Path) -> Result<(), ChartError> {
        let write_error = |message: String| ChartError::Write {
            path: path.to_path_buf(),
            message,
        };
        let mut backend = BitMapBackend::new(path, (self.width, self.height));
        backend
            .blit_bitmap((0, 0), (self.width, self.height), &self.pixels)
            .map_err(|err| write_error(err.to_string()))?;
        backend
            .present()
            .map_err(|err| write_error(err.to_string()))?;
        debug!(
            "Wrote {}x{} image to {}",
            self.width,
            self.height,
            path.display()
        );
        Ok(())
    }
}

fn buffer_len(width: u32, height: u32) -> Option<usize> {
    usize::try_from(width)
        .ok()?
        .checked_mul(usize::try_from(height).ok()?)?
        .checked_mul(BYTES_PER_PIXEL)
}

/// Renders `figure`, trims surrounding whitespace, and writes the image to `path`.
/// The canvas lives only for this call, so it is released whether or not the
/// write succeeds.
///
/// # Errors
///
/// Returns a [`ChartError`] when the canvas size is invalid, drawing fails, or the
/// image cannot be written.
pub fn export_figure(
    figure: &Figure,
    style: &FigureStyle,
    path: &Path,
) -> Result<(u32, u32), ChartError> {
    let (width, height) = style.pixel_size()?;
    let mut canvas = Canvas::new(width, height)?;
    canvas.render(figure, style)?;
    let trimmed = canvas.trimmed(style.trim_pad());
    trimmed.write_image(path)?;
    Ok(trimmed.size())
}
