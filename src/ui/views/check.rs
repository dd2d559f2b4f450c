use progmem::pipeline::CheckReport;

use crate::ui::diff::render_unified_diff;
use crate::ui::theme::Icon;

/// Lines of context shown around each change
const DIFF_CONTEXT: usize = 2;

pub fn render_check(report: &CheckReport, verbose: u8, color: bool, unicode: bool) -> String {
    let path = report.output_path.display().to_string();

    match &report.actual {
        _ if report.is_up_to_date() => {
            format!("{} {} is up to date\n", Icon::Success.styled(color, unicode), path)
        }
        None => format!(
            "{} {} does not exist; run `progmem embed`\n",
            Icon::Error.styled(color, unicode),
            path
        ),
        Some(actual) => {
            let mut out = format!(
                "{} {} is out of date; run `progmem embed`\n",
                Icon::Error.styled(color, unicode),
                path
            );
            if verbose > 0 {
                out.push_str(&render_unified_diff(
                    &path,
                    actual,
                    &report.expected,
                    DIFF_CONTEXT,
                    color,
                ));
            }
            out
        }
    }
}
