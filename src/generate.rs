//! Icon set generation.
//!
//! Renders every icon size into one output directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IconError, Result};
use crate::output::{display_path, Printer};
use crate::render::IconRenderer;

/// Directory the icons are written to when nothing overrides it.
pub const DEFAULT_OUTPUT_DIR: &str = "/home/ubuntu/barcode-genesis/client/public";

/// Icon sizes produced, in generation order.
pub const ICON_SIZES: [u32; 2] = [192, 512];

/// File name for the icon of a given size.
pub fn icon_filename(size: u32) -> String {
    format!("icon-{}.png", size)
}

/// Render all icon sizes into `dir`, creating it if needed.
///
/// Stops at the first failure. Returns the written paths in size order.
pub fn generate_icons(
    renderer: &IconRenderer,
    dir: &Path,
    printer: &Printer,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|e| IconError::Io {
        path: dir.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let mut written = Vec::with_capacity(ICON_SIZES.len());
    for size in ICON_SIZES {
        let path = dir.join(icon_filename(size));
        renderer.write(size, &path)?;
        printer.status("Created", &display_path(&path));
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_icon_filename() {
        assert_eq!(icon_filename(192), "icon-192.png");
        assert_eq!(icon_filename(512), "icon-512.png");
    }

    #[test]
    fn test_generate_writes_both_icons() {
        let dir = tempdir().unwrap();
        let written =
            generate_icons(&IconRenderer::default(), dir.path(), &Printer::buffered()).unwrap();

        assert_eq!(
            written,
            vec![dir.path().join("icon-192.png"), dir.path().join("icon-512.png")]
        );
        for (path, size) in written.iter().zip(ICON_SIZES) {
            let img = image::open(path).unwrap();
            assert_eq!((img.width(), img.height()), (size, size));
        }
    }

    #[test]
    fn test_generate_reports_each_created_file() {
        let dir = tempdir().unwrap();
        let printer = Printer::buffered();

        generate_icons(&IconRenderer::default(), dir.path(), &printer).unwrap();

        let lines: Vec<String> = printer.lines().iter().map(|l| l.trim().to_string()).collect();
        assert_eq!(
            lines,
            vec![
                format!("Created {}", display_path(&dir.path().join("icon-192.png"))),
                format!("Created {}", display_path(&dir.path().join("icon-512.png"))),
            ]
        );
    }

    #[test]
    fn test_generate_creates_directory_chain() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("client").join("public").join("icons");
        assert!(!nested.exists());

        generate_icons(&IconRenderer::default(), &nested, &Printer::buffered()).unwrap();

        assert!(nested.join("icon-192.png").is_file());
        assert!(nested.join("icon-512.png").is_file());
    }

    #[test]
    fn test_generate_overwrites_deterministically() {
        let dir = tempdir().unwrap();
        let renderer = IconRenderer::default();
        let printer = Printer::buffered();

        fs::write(dir.path().join("icon-192.png"), b"old").unwrap();
        generate_icons(&renderer, dir.path(), &printer).unwrap();
        let first = fs::read(dir.path().join("icon-192.png")).unwrap();
        generate_icons(&renderer, dir.path(), &printer).unwrap();
        let second = fs::read(dir.path().join("icon-192.png")).unwrap();

        assert_ne!(first, b"old".to_vec());
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_fails_when_output_is_a_file() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("public");
        fs::write(&blocker, b"").unwrap();

        let err = generate_icons(&IconRenderer::default(), &blocker, &Printer::buffered())
            .unwrap_err();
        assert!(matches!(err, IconError::Io { .. }));
    }
}
