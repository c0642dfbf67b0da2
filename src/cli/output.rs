//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR and non-tty stdout):
//! - Green: created files, success
//! - Red: errors
//! - Yellow: skipped files, warnings
//! - Cyan: paths, hints
//! - Bold: headers, important values

use console::style;
use std::fmt::Display;

const RULE_WIDTH: usize = 56;

/// Check if color output is enabled.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ created .gitignore`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ keystore not found: ~/.gnupg/secring.gpg`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message (yellow).
///
/// Example: `⚠ skipped build.gradle.kts: already exists`
pub fn warn(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("⚠").yellow(), msg);
    } else {
        println!("⚠ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ run: travis login`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a bold section header.
pub fn header(title: &str) {
    if colors_enabled() {
        println!("{}", style(title).bold());
    } else {
        println!("{}", title);
    }
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  project:  my-lib`
pub fn kv(label: &str, value: impl Display) {
    if colors_enabled() {
        println!("  {}  {}", style(label).dim(), style(value).bold());
    } else {
        println!("  {}  {}", label, value);
    }
}

/// Print a horizontal rule separator.
pub fn rule() {
    if colors_enabled() {
        println!("{}", style("─".repeat(RULE_WIDTH)).dim());
    } else {
        println!("{}", "─".repeat(RULE_WIDTH));
    }
}

/// Format a path string in cyan.
///
/// Returns a colored string that can be used inline.
pub fn path(p: impl Display) -> String {
    if colors_enabled() {
        style(p).cyan().to_string()
    } else {
        p.to_string()
    }
}

/// Print a section header with a separator line.
///
/// Example:
/// ```text
/// Scaffold
/// ────────────────────────────────────────────────────────
/// ```
pub fn section(title: &str) {
    println!();
    header(title);
    rule();
}
