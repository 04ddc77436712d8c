//! Face geometry.
//!
//! Every measurement is derived from the icon size by integer division, so
//! the same size always yields the same pixels.

/// Number of bars in the barcode mouth.
pub const BAR_COUNT: usize = 5;

/// An axis-aligned pixel box. Both edges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl Rect {
    /// Create a box from its inclusive edges.
    pub const fn new(left: i64, top: i64, right: i64, bottom: i64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Width in pixels (0 when the box is inverted).
    pub fn width(&self) -> i64 {
        (self.right - self.left + 1).max(0)
    }

    /// Height in pixels (0 when the box is inverted).
    pub fn height(&self) -> i64 {
        (self.bottom - self.top + 1).max(0)
    }

    /// True when the box covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Shrink by `n` pixels on every side.
    pub fn inset(&self, n: i64) -> Self {
        Self::new(self.left + n, self.top + n, self.right - n, self.bottom - n)
    }

    /// Twice the horizontal centre, kept integral.
    pub fn center_x2(&self) -> i64 {
        self.left + self.right + 1
    }
}

/// Geometry of the robot face for one icon size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceLayout {
    /// Canvas width and height.
    pub size: u32,

    pub center: i64,
    pub radius: i64,

    /// Outline stroke width, also the width of each mouth bar.
    pub stroke: i64,

    pub eye_radius: i64,

    /// Square face outline.
    pub outline: Rect,

    /// Bounding boxes of the left and right eyes.
    pub eyes: [Rect; 2],

    /// Mouth bars, left to right.
    pub bars: [Rect; BAR_COUNT],
}

impl FaceLayout {
    /// Compute the layout for a square icon of `size` pixels.
    pub fn for_size(size: u32) -> Self {
        let s = i64::from(size);
        let center = s / 2;
        let radius = s / 3;
        let stroke = s / 20;
        let eye_radius = s / 10;

        let outline = Rect::new(
            center - radius,
            center - radius,
            center + radius,
            center + radius,
        );

        let eye = |cx: i64| {
            Rect::new(
                cx - eye_radius,
                center - eye_radius,
                cx + eye_radius,
                center + eye_radius,
            )
        };
        let eyes = [eye(center - radius / 2), eye(center + radius / 2)];

        let start_x = center - radius + stroke;
        let top = center + radius / 2;
        let bottom = center + radius - stroke;
        let bars = std::array::from_fn(|i| {
            let x = start_x + i as i64 * stroke * 2;
            Rect::new(x, top, x + stroke, bottom)
        });

        Self {
            size,
            center,
            radius,
            stroke,
            eye_radius,
            outline,
            eyes,
            bars,
        }
    }
}
