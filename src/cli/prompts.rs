//! Centralized warning and confirmation messages for CLI output.

use super::quiet;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print a warning to stderr (yellow) - suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error to stderr (red) - NOT suppressed (errors are always shown).
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Warn that draws come from the non-cryptographic fallback generator.
pub fn insecure_source(name: &str) {
    warn(&format!(
        "Warning: secure entropy unavailable, using {name} (not cryptographically strong)"
    ));
}

/// Warn that the batch came up short of the requested count.
pub fn short_batch(collected: usize, requested: usize) {
    if collected == 0 {
        warn("Warning: no passwords generated (empty pool or unsatisfiable constraints)");
    } else {
        warn(&format!(
            "Warning: generated {collected} of {requested} password(s) before the attempt budget ran out"
        ));
    }
}

/// Print clipboard copied confirmation - suppressed in quiet mode.
pub fn clipboard_copied() {
    if !quiet::enabled() {
        println!("*** -COPIED TO CLIPBOARD- ***");
    }
}

/// Print password export summary - suppressed in quiet mode.
pub fn passwords_written(count: usize, path: &str) {
    if !quiet::enabled() {
        println!("{count} password(s) \u{2192} {path}");
    }
}
