//! Generate command implementation.
//!
//! Renders the icon set into the output directory.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Config;
use crate::error::{IconError, Result};
use crate::generate::generate_icons;
use crate::manifest::{ManifestFragment, MANIFEST_FILENAME};
use crate::output::{display_path, plural, Printer};
use crate::render::IconRenderer;

/// Render the icon set
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Output directory (overrides roboicon.yaml)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Also write icons.json with web manifest entries
    #[arg(long)]
    pub manifest: bool,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|e| IconError::Io {
        path: PathBuf::from("."),
        message: format!("Failed to read working directory: {}", e),
    })?;
    run_in(args, &cwd, printer)
}

/// Run the command as if started from `cwd`.
pub fn run_in(args: GenerateArgs, cwd: &Path, printer: &Printer) -> Result<()> {
    let (config, source) = Config::discover(cwd)?;
    if let Some(source) = &source {
        printer.info("Using", &display_path(source));
    }

    let output = resolve_output(args.output, &config, cwd);
    let renderer = IconRenderer::default();

    let written = generate_icons(&renderer, &output, printer)?;

    if args.manifest {
        let path = output.join(MANIFEST_FILENAME);
        ManifestFragment::new(renderer.theme(), &config.base).write(&path)?;
        printer.status("Created", &display_path(&path));
    }

    printer.status(
        "Finished",
        &format!(
            "{} in {}",
            plural(written.len(), "icon", "icons"),
            display_path(&output)
        ),
    );

    Ok(())
}

/// Pick the output directory: flag, then config, then the built-in default.
/// Relative paths are taken from `cwd`.
fn resolve_output(flag: Option<PathBuf>, config: &Config, cwd: &Path) -> PathBuf {
    let output = flag.unwrap_or_else(|| config.output.clone());
    cwd.join(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG_FILENAME;
    use crate::generate::DEFAULT_OUTPUT_DIR;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_output_default() {
        let cwd = Path::new("/work");
        assert_eq!(
            resolve_output(None, &Config::default(), cwd),
            PathBuf::from(DEFAULT_OUTPUT_DIR)
        );
    }

    #[test]
    fn test_resolve_output_config_beats_default() {
        let config = Config::parse("output: public\n").unwrap();
        assert_eq!(
            resolve_output(None, &config, Path::new("/work")),
            PathBuf::from("/work/public")
        );
    }

    #[test]
    fn test_resolve_output_flag_beats_config() {
        let config = Config::parse("output: public\n").unwrap();
        assert_eq!(
            resolve_output(Some(PathBuf::from("dist")), &config, Path::new("/work")),
            PathBuf::from("/work/dist")
        );
    }

    #[test]
    fn test_run_uses_config_output() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "output: public\n").unwrap();

        run_in(GenerateArgs::default(), dir.path(), &Printer::buffered()).unwrap();

        assert!(dir.path().join("public/icon-192.png").is_file());
        assert!(dir.path().join("public/icon-512.png").is_file());
    }

    #[test]
    fn test_run_flag_overrides_config() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "output: public\n").unwrap();
        let args = GenerateArgs {
            output: Some(PathBuf::from("dist")),
            manifest: false,
        };

        run_in(args, dir.path(), &Printer::buffered()).unwrap();

        assert!(dir.path().join("dist/icon-192.png").is_file());
        assert!(!dir.path().join("public").exists());
    }

    #[test]
    fn test_run_writes_manifest() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "base: /app\n").unwrap();
        let args = GenerateArgs {
            output: Some(PathBuf::from("out")),
            manifest: true,
        };
        let printer = Printer::buffered();

        run_in(args, dir.path(), &printer).unwrap();

        let manifest = dir.path().join("out").join(MANIFEST_FILENAME);
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&manifest).unwrap()).unwrap();
        assert_eq!(json["icons"][0]["src"], "/app/icon-192.png");

        let lines = printer.lines();
        assert!(lines[0].trim_start().starts_with("Using"));
        assert!(lines
            .iter()
            .any(|l| l.trim() == format!("Created {}", display_path(&manifest))));
        assert!(lines.last().unwrap().trim_start().starts_with("Finished 2 icons"));
    }

    #[test]
    fn test_run_without_manifest_flag() {
        let dir = tempdir().unwrap();
        let args = GenerateArgs {
            output: Some(PathBuf::from("out")),
            manifest: false,
        };

        run_in(args, dir.path(), &Printer::buffered()).unwrap();

        assert!(!dir.path().join("out").join(MANIFEST_FILENAME).exists());
    }
}
