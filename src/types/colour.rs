//! Opaque RGB colour type.

use std::fmt;

use image::Rgb;
use serde::{Serialize, Serializer};

/// An opaque RGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Convert to an `image` pixel.
    pub fn to_pixel(self) -> Rgb<u8> {
        Rgb([self.r, self.g, self.b])
    }

}

impl From<Rgb<u8>> for Colour {
    fn from(pixel: Rgb<u8>) -> Self {
        let [r, g, b] = pixel.0;
        Self::rgb(r, g, b)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// Web manifests carry colours as CSS hex strings.
impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lowercase_hex() {
        assert_eq!(Colour::rgb(0x0f, 0x17, 0x2a).to_string(), "#0f172a");
        assert_eq!(Colour::rgb(255, 0, 0).to_string(), "#ff0000");
    }

    #[test]
    fn test_pixel_conversion() {
        let c = Colour::rgb(0x3b, 0x82, 0xf6);
        assert_eq!(c.to_pixel(), Rgb([0x3b, 0x82, 0xf6]));
        assert_eq!(Colour::from(c.to_pixel()), c);
    }

    #[test]
    fn test_serialize_as_hex_string() {
        let json = serde_json::to_string(&Colour::rgb(0x60, 0xa5, 0xfa)).unwrap();
        assert_eq!(json, "\"#60a5fa\"");
    }
}
