pub mod check;
pub mod embed;
pub mod list;

use progmem::walker::{SkipReason, SkippedFile};

use crate::ui::theme::{self, Icon};

/// Human-readable percentage of `part` relative to `whole`.
pub fn ratio(part: usize, whole: usize) -> String {
    if whole == 0 {
        return "-".to_string();
    }
    format!("{:.1}%", part as f64 * 100.0 / whole as f64)
}

pub fn render_skipped(skipped: &SkippedFile, color: bool, unicode: bool) -> String {
    let reason = match skipped.reason {
        SkipReason::AlreadyCompressed => "already compressed",
        SkipReason::Excluded => "excluded",
        SkipReason::Generated => "generated output",
    };
    format!(
        "  {} {} {}\n",
        Icon::Skip.styled(color, unicode),
        skipped.relative_path,
        theme::dim(&format!("skipped ({reason})"), color)
    )
}
