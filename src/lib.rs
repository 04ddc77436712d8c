//! roboicon - Robot face app icon generator
//!
//! Draws the robot face icon at 192px and 512px and writes both as PNG
//! files, along with an optional web manifest fragment that references them.

pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod manifest;
pub mod output;
pub mod render;
pub mod types;

pub use config::Config;
pub use error::{IconError, Result};
pub use generate::{generate_icons, icon_filename, DEFAULT_OUTPUT_DIR, ICON_SIZES};
pub use manifest::{icon_entries, IconEntry, ManifestFragment};
pub use render::{encode_png, write_png, Canvas, IconRenderer};
pub use types::{Colour, FaceLayout, Rect, Theme, BAR_COUNT};
