//! Core domain types for roboicon.
//!
//! - `Colour` - opaque RGB colour values
//! - `Theme` - the icon colour scheme
//! - `FaceLayout` - face geometry derived from the icon size

mod colour;
mod layout;
mod theme;

pub use colour::Colour;
pub use layout::{FaceLayout, Rect, BAR_COUNT};
pub use theme::Theme;
