use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use progmem::pipeline::{self, EmbedOptions, WriteStatus};
use progmem::presentation::{EncodeArgs, SourceArgs};

use crate::commands::resolve_config;
use crate::ui::context::UiContext;
use crate::ui::json::{self, events};
use crate::ui::theme;
use crate::ui::views::embed::render_embed_report;

pub fn cmd_embed(
    ui: &UiContext,
    config_path: Option<&Path>,
    source: &SourceArgs,
    encode: &EncodeArgs,
) -> Result<()> {
    let started = Instant::now();
    if ui.json {
        json::emit(&events::StartEvent::new("embed"))?;
    }

    let config = resolve_config(ui, config_path, source, Some(encode))?;
    let options = EmbedOptions::from_config(&config)?;

    if !ui.json && ui.verbose > 0 {
        println!("Input:  {}", options.input_dir.display());
        println!("Output: {}", options.output_path.display());
        println!(
            "{}",
            theme::dim(
                &format!(
                    "level {}, {} bytes per row, raw: [{}]",
                    options.encode.compressor.level(),
                    options.emit.row_width(),
                    options.encode.raw_extensions.join(", ")
                ),
                ui.color
            )
        );
    }

    let report = pipeline::embed(&options)?;
    let elapsed = started.elapsed();

    if ui.json {
        for asset in &report.assets {
            json::emit(&events::AssetEvent::new(asset))?;
        }
        for skipped in &report.skipped {
            json::emit(&events::SkippedEvent::new(skipped))?;
        }
        let status = match report.status {
            WriteStatus::Written => "written",
            WriteStatus::Unchanged => "unchanged",
        };
        json::emit(
            &events::CompleteEvent::success("embed")
                .with_output(&report.output_path)
                .with_status(status)
                .with_totals(report.assets.len(), report.raw_total(), report.compressed_total())
                .with_hash(report.hash.clone())
                .with_duration(elapsed.as_millis() as u64),
        )?;
    } else {
        print!(
            "{}",
            render_embed_report(&report, ui.verbose, elapsed, ui.color, ui.unicode)
        );
    }

    Ok(())
}
