use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for roboicon operations
#[derive(Error, Diagnostic, Debug)]
pub enum IconError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(roboicon::io))]
    Io { path: PathBuf, message: String },

    #[error("Failed to encode {path}: {message}")]
    #[diagnostic(code(roboicon::encode))]
    Encode { path: PathBuf, message: String },

    #[error("Config error: {message}")]
    #[diagnostic(code(roboicon::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid icon size: {size}")]
    #[diagnostic(code(roboicon::size), help("Icon size must be at least 1 pixel"))]
    InvalidSize { size: u32 },
}

pub type Result<T> = std::result::Result<T, IconError>;
