use similar::{ChangeTag, TextDiff};

use crate::ui::theme;

/// Unified diff of `old` -> `new`, limited to `context` lines around changes.
pub fn render_unified_diff(path: &str, old: &str, new: &str, context: usize, color: bool) -> String {
    let diff = TextDiff::from_lines(old, new);

    let mut out = String::new();
    out.push_str(&theme::paint(&format!("--- a/{}", path), theme::colors::INFO, color));
    out.push('\n');
    out.push_str(&theme::paint(&format!("+++ b/{}", path), theme::colors::INFO, color));
    out.push('\n');

    for group in diff.grouped_ops(context) {
        for op in group {
            for change in diff.iter_changes(&op) {
                let (sign, fg) = match change.tag() {
                    ChangeTag::Delete => ("-", theme::colors::ERROR),
                    ChangeTag::Insert => ("+", theme::colors::SUCCESS),
                    ChangeTag::Equal => (" ", theme::colors::DIM),
                };
                let value = change.value().trim_end_matches('\n');
                out.push_str(&theme::paint(&format!("{sign}{value}"), fg, color));
                out.push('\n');
            }
        }
    }

    out
}
