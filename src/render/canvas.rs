//! Raster drawing surface.
//!
//! A thin wrapper over an `RgbImage` with the handful of primitives the
//! icon needs. All shapes take inclusive pixel boxes and are clipped to the
//! canvas, so callers never have to bounds-check.

use image::{ImageBuffer, RgbImage};

use crate::types::{Colour, Rect};

/// An opaque RGB drawing surface.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Create a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Colour) -> Self {
        Self {
            image: ImageBuffer::from_pixel(width, height, background.to_pixel()),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        self.image.get_pixel_checked(x, y).map(|p| Colour::from(*p))
    }

    /// Fill a box.
    pub fn fill_rect(&mut self, rect: Rect, colour: Colour) {
        let Some(rect) = self.clip(rect) else {
            return;
        };
        let pixel = colour.to_pixel();
        for y in rect.top..=rect.bottom {
            for x in rect.left..=rect.right {
                self.image.put_pixel(x as u32, y as u32, pixel);
            }
        }
    }

    /// Stroke the border of a box. The stroke grows inward from the box edge.
    pub fn stroke_rect(&mut self, rect: Rect, width: i64, colour: Colour) {
        for i in 0..width {
            let ring = rect.inset(i);
            if ring.is_empty() {
                break;
            }
            self.fill_rect(Rect::new(ring.left, ring.top, ring.right, ring.top), colour);
            self.fill_rect(
                Rect::new(ring.left, ring.bottom, ring.right, ring.bottom),
                colour,
            );
            self.fill_rect(Rect::new(ring.left, ring.top, ring.left, ring.bottom), colour);
            self.fill_rect(
                Rect::new(ring.right, ring.top, ring.right, ring.bottom),
                colour,
            );
        }
    }

    /// Fill the ellipse inscribed in a box.
    ///
    /// A pixel is covered when its centre lies inside the ellipse. The test
    /// runs on doubled integer coordinates, so boxes mirrored about an axis
    /// produce exactly mirrored pixels.
    pub fn fill_ellipse(&mut self, bounds: Rect, colour: Colour) {
        if bounds.is_empty() {
            return;
        }
        let Some(clipped) = self.clip(bounds) else {
            return;
        };

        // Doubled diameters and doubled centre.
        let w = bounds.width();
        let h = bounds.height();
        let cx2 = bounds.left + bounds.right + 1;
        let cy2 = bounds.top + bounds.bottom + 1;
        let limit = (w * h) * (w * h);

        let pixel = colour.to_pixel();
        for y in clipped.top..=clipped.bottom {
            let dy = 2 * y + 1 - cy2;
            for x in clipped.left..=clipped.right {
                let dx = 2 * x + 1 - cx2;
                if dx * dx * h * h + dy * dy * w * w <= limit {
                    self.image.put_pixel(x as u32, y as u32, pixel);
                }
            }
        }
    }

    /// Borrow the underlying image.
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Intersect a box with the canvas bounds.
    fn clip(&self, rect: Rect) -> Option<Rect> {
        let clipped = Rect::new(
            rect.left.max(0),
            rect.top.max(0),
            rect.right.min(i64::from(self.width()) - 1),
            rect.bottom.min(i64::from(self.height()) - 1),
        );
        (!clipped.is_empty()).then_some(clipped)
    }
}
