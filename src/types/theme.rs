//! The fixed icon colour scheme.

use super::Colour;

/// Colours used by the robot face icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Canvas fill (dark navy).
    pub background: Colour,

    /// Face outline and mouth bars (medium blue).
    pub outline: Colour,

    /// Eye fill (light blue).
    pub eyes: Colour,
}

impl Theme {
    /// The only theme roboicon draws with.
    pub const ROBOT: Self = Self {
        background: Colour::rgb(0x0f, 0x17, 0x2a),
        outline: Colour::rgb(0x3b, 0x82, 0xf6),
        eyes: Colour::rgb(0x60, 0xa5, 0xfa),
    };
}

impl Default for Theme {
    fn default() -> Self {
        Self::ROBOT
    }
}
