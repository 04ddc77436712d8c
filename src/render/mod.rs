//! Rendering module for roboicon.
//!
//! This module handles drawing the icon onto a canvas and encoding it
//! as PNG.

mod canvas;
mod icon;
mod png;

pub use canvas::Canvas;
pub use icon::IconRenderer;
pub use png::{encode_png, write_png};
