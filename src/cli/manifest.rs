use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Config;
use crate::error::{IconError, Result};
use crate::manifest::ManifestFragment;
use crate::types::Theme;

/// Print web manifest icon entries as JSON
#[derive(Args, Debug, Default)]
pub struct ManifestArgs {
    /// URL prefix the icons are served under (overrides roboicon.yaml)
    #[arg(long)]
    pub base: Option<String>,
}

pub fn run(args: ManifestArgs) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|e| IconError::Io {
        path: ".".into(),
        message: format!("Failed to read working directory: {}", e),
    })?;
    // JSON goes to stdout so it can be piped into other tools.
    run_in(args, &cwd, &mut std::io::stdout().lock())
}

/// Run the command as if started from `cwd`, writing JSON to `out`.
pub fn run_in(args: ManifestArgs, cwd: &Path, out: &mut impl Write) -> Result<()> {
    let (config, _) = Config::discover(cwd)?;
    let base = args.base.unwrap_or(config.base);

    let json = ManifestFragment::new(&Theme::ROBOT, &base).to_json()?;
    writeln!(out, "{}", json).map_err(|e| IconError::Io {
        path: PathBuf::from("<stdout>"),
        message: e.to_string(),
    })
}
