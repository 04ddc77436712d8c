//! Web app manifest fragment for the generated icons.
//!
//! The icons are served from the web root and referenced by the app's
//! manifest. This module produces the matching `icons` entries along with
//! the theme colours so the manifest stays in sync with what was drawn.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{IconError, Result};
use crate::generate::{icon_filename, ICON_SIZES};
use crate::types::{Colour, Theme};

/// Default URL prefix icons are served under.
pub const DEFAULT_BASE: &str = "/";

/// File name of the manifest fragment written next to the icons.
pub const MANIFEST_FILENAME: &str = "icons.json";

/// One entry of a web manifest `icons` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconEntry {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

impl IconEntry {
    fn png(base: &str, size: u32, purpose: Option<&str>) -> Self {
        Self {
            src: join_url(base, &icon_filename(size)),
            sizes: format!("{size}x{size}"),
            mime: "image/png".to_string(),
            purpose: purpose.map(str::to_string),
        }
    }
}

/// Manifest fields derived from the icon set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestFragment {
    pub theme_color: Colour,
    pub background_color: Colour,
    pub icons: Vec<IconEntry>,
}

impl ManifestFragment {
    pub fn new(theme: &Theme, base: &str) -> Self {
        Self {
            theme_color: theme.background,
            background_color: theme.background,
            icons: icon_entries(base),
        }
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| IconError::Encode {
            path: MANIFEST_FILENAME.into(),
            message: e.to_string(),
        })
    }

    /// Write the fragment as JSON to `path`.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| IconError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write manifest: {}", e),
        })
    }
}

/// Icon entries for every generated size.
///
/// The largest icon is listed a second time as `maskable`.
pub fn icon_entries(base: &str) -> Vec<IconEntry> {
    let mut entries: Vec<IconEntry> = ICON_SIZES
        .iter()
        .map(|&size| IconEntry::png(base, size, None))
        .collect();

    if let Some(&largest) = ICON_SIZES.iter().max() {
        entries.push(IconEntry::png(base, largest, Some("maskable")));
    }

    entries
}

fn join_url(base: &str, file: &str) -> String {
    if base.is_empty() {
        return file.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), file)
}
