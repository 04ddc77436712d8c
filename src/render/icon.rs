//! Robot face icon renderer.
//!
//! Draws the fixed composition: a square outline, two round eyes and a
//! five-bar barcode mouth on a navy background.

use std::path::Path;

use crate::error::{IconError, Result};
use crate::types::{FaceLayout, Theme};

use super::{write_png, Canvas};

/// Renders robot face icons at any square size.
#[derive(Debug, Clone, Copy, Default)]
pub struct IconRenderer {
    theme: Theme,
}

impl IconRenderer {
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Render the icon to a `size` x `size` canvas.
    pub fn render(&self, size: u32) -> Result<Canvas> {
        if size == 0 {
            return Err(IconError::InvalidSize { size });
        }

        let layout = FaceLayout::for_size(size);
        let mut canvas = Canvas::new(size, size, self.theme.background);

        canvas.stroke_rect(layout.outline, layout.stroke, self.theme.outline);

        for eye in layout.eyes {
            canvas.fill_ellipse(eye, self.theme.eyes);
        }

        for bar in layout.bars {
            canvas.fill_rect(bar, self.theme.outline);
        }

        Ok(canvas)
    }

    /// Render the icon and write it as a PNG to `path`.
    pub fn write(&self, size: u32, path: &Path) -> Result<()> {
        let canvas = self.render(size)?;
        write_png(canvas.image(), path)
    }
}
