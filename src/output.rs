//! Terminal output formatting for the roboicon CLI.
//!
//! Provides Cargo-style status output with right-aligned coloured verbs.
//! All status output goes to stderr; stdout is reserved for machine-readable output.

use std::cell::RefCell;
use std::io::{self, IsTerminal, Write};

/// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Where status lines end up.
enum Sink {
    Stderr,
    Buffer(RefCell<Vec<String>>),
}

/// Terminal-aware status printer.
///
/// Prints Cargo-style status lines to stderr with optional ANSI colours.
/// Colour is enabled when stderr is a terminal.
pub struct Printer {
    color: bool,
    sink: Sink,
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
            sink: Sink::Stderr,
        }
    }

    /// A printer that records uncoloured lines instead of printing them.
    pub fn buffered() -> Self {
        Self {
            color: false,
            sink: Sink::Buffer(RefCell::new(Vec::new())),
        }
    }

    /// Lines recorded by a buffered printer, in order.
    pub fn lines(&self) -> Vec<String> {
        match &self.sink {
            Sink::Stderr => Vec::new(),
            Sink::Buffer(lines) => lines.borrow().clone(),
        }
    }

    /// Print a status line with a green bold verb.
    /// e.g. "     Created public/icon-192.png"
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Print an informational line with a cyan bold verb.
    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(CYAN, verb, message);
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        if let Sink::Buffer(lines) = &self.sink {
            lines.borrow_mut().push(format!("{verb:>VERB_WIDTH$} {message}"));
            return;
        }
        let mut stderr = io::stderr().lock();
        if self.color {
            let _ = writeln!(
                stderr,
                "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}"
            );
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// Pluralize a count: `plural(1, "icon", "icons")` → "1 icon".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &std::path::Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_singular() {
        assert_eq!(plural(1, "icon", "icons"), "1 icon");
    }

    #[test]
    fn test_plural_many() {
        assert_eq!(plural(2, "icon", "icons"), "2 icons");
    }

    #[test]
    fn test_display_path_absolute() {
        use std::path::Path;
        // An absolute path outside cwd should stay absolute
        let p = Path::new("/nonexistent/path/to/icon.png");
        assert_eq!(display_path(p), "/nonexistent/path/to/icon.png");
    }

    #[test]
    fn test_buffered_records_lines() {
        let printer = Printer::buffered();
        printer.status("Created", "icon-192.png");
        printer.info("Using", "roboicon.yaml");
        assert_eq!(
            printer.lines(),
            vec![
                "     Created icon-192.png".to_string(),
                "       Using roboicon.yaml".to_string(),
            ]
        );
    }

    #[test]
    fn test_stderr_printer_records_nothing() {
        let printer = Printer::new();
        printer.status("Created", "icon-192.png");
        assert!(printer.lines().is_empty());
    }

    #[test]
    fn test_display_path_cwd() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(display_path(&cwd), ".");
    }
}
