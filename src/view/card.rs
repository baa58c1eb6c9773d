//! Plain-text verse card export.
//!
//! Renders the shared verses into a small framed text card and writes it
//! to a timestamped file in the working directory. The caller supplies
//! the composed verse lines and a reference string; the card owns its
//! layout.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

const RULE_WIDTH: usize = 42;

/// Render the card text: a rule, the indented verse lines, the
/// attribution, and a closing rule.
pub fn card_body(text: &str, reference: &str) -> String {
    let rule = "─".repeat(RULE_WIDTH);
    let mut out = String::new();
    out.push_str(&rule);
    out.push_str("\n\n");
    for line in text.lines() {
        if line.is_empty() {
            out.push('\n');
        } else {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out.push('\n');
    out.push_str("  — ");
    out.push_str(reference);
    out.push_str("\n\n");
    out.push_str(&rule);
    out.push('\n');
    out
}

/// Write the card into `dir`, returning the path of the new file.
pub fn export_card_to(dir: &Path, text: &str, reference: &str) -> io::Result<PathBuf> {
    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    let path = dir.join(format!("versiculo-{stamp}.txt"));
    fs::write(&path, card_body(text, reference))?;
    Ok(path)
}

/// Write the card into the current working directory.
pub fn export_card(text: &str, reference: &str) -> io::Result<PathBuf> {
    export_card_to(&std::env::current_dir()?, text, reference)
}
