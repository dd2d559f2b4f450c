use std::path::Path;

use anyhow::Result;

use progmem::pipeline::{self, EmbedOptions};
use progmem::presentation::{EncodeArgs, SourceArgs};

use crate::commands::resolve_config;
use crate::ui::context::UiContext;
use crate::ui::json::{self, events};
use crate::ui::views::check::render_check;

/// Returns `false` when the generated header is missing or stale.
pub fn cmd_check(
    ui: &UiContext,
    config_path: Option<&Path>,
    source: &SourceArgs,
    encode: &EncodeArgs,
) -> Result<bool> {
    if ui.json {
        json::emit(&events::StartEvent::new("check"))?;
    }

    let config = resolve_config(ui, config_path, source, Some(encode))?;
    let options = EmbedOptions::from_config(&config)?;
    let report = pipeline::check(&options)?;
    let up_to_date = report.is_up_to_date();

    if ui.json {
        let status = match (&report.actual, up_to_date) {
            (_, true) => "up_to_date",
            (None, false) => "missing",
            (Some(_), false) => "stale",
        };
        let event = if up_to_date {
            events::CompleteEvent::success("check")
        } else {
            events::CompleteEvent::failure("check")
        };
        json::emit(
            &event
                .with_output(&report.output_path)
                .with_status(status)
                .with_hash(progmem::writer::content_hash(report.expected.as_bytes())),
        )?;
    } else {
        print!("{}", render_check(&report, ui.verbose, ui.color, ui.unicode));
    }

    Ok(up_to_date)
}
