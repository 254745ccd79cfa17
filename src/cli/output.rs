//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: secret markers
//! - Cyan: keys, hints
//! - Dimmed: secondary info

use console::style;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ created stack new-dev`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ --src is required`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message (cyan).
///
/// Example: `→ run: stackport --help`
pub fn hint(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        println!("→ {}", msg);
    }
}

/// Print a progress step for a key about to be written.
///
/// Example: `→ aws:region`
pub fn step(key: &str) {
    if colors_enabled() {
        println!("{} {}", style("→").dim(), style(key).cyan());
    } else {
        println!("→ {}", key);
    }
}

/// Print a list item with bullet, optionally tagged as secret.
///
/// Example: `  • app:dbPassword (secret)`
pub fn list_item(item: &str, secret: bool) {
    match (secret, colors_enabled()) {
        (true, true) => println!("  • {} {}", style(item).cyan(), style("(secret)").yellow()),
        (true, false) => println!("  • {} (secret)", item),
        (false, true) => println!("  • {}", style(item).cyan()),
        (false, false) => println!("  • {}", item),
    }
}

/// Print a dimmed/secondary message.
///
/// Example: `no config values to migrate`
pub fn dimmed(msg: &str) {
    if colors_enabled() {
        println!("{}", style(msg).dim());
    } else {
        println!("{}", msg);
    }
}
