use std::path::Path;

use anyhow::Result;

use progmem::naming;
use progmem::pipeline;
use progmem::presentation::SourceArgs;
use progmem::walker::{walk_source_tree, WalkOptions};
use progmem::EncodeOptions;

use crate::commands::resolve_config;
use crate::ui::context::UiContext;
use crate::ui::json::{self, events};
use crate::ui::views::list::render_list;

pub fn cmd_list(ui: &UiContext, config_path: Option<&Path>, source: &SourceArgs) -> Result<()> {
    if ui.json {
        json::emit(&events::StartEvent::new("list"))?;
    }

    let config = resolve_config(ui, config_path, source, None)?;
    let walk = walk_source_tree(
        &config.input.dir,
        &WalkOptions {
            exclude: config.input.exclude.clone(),
            generated: pipeline::generated_files(&config.output_path()),
        },
    )?;

    if ui.json {
        let encode = EncodeOptions {
            raw_extensions: config.normalized_raw_extensions(),
            ..EncodeOptions::default()
        };
        for file in walk.tree.files() {
            let encoding = encode.encoding_for(file);
            json::emit(&events::FileEvent {
                event: "file",
                path: &file.relative_path,
                size: file.bytes.len(),
                symbol: naming::array_symbol(&file.relative_path, encoding),
                encoding,
            })?;
        }
        for skipped in &walk.skipped {
            json::emit(&events::SkippedEvent::new(skipped))?;
        }
        json::emit(
            &events::CompleteEvent::success("list").with_totals(
                walk.tree.len(),
                walk.tree.total_bytes(),
                0,
            ),
        )?;
    } else {
        print!("{}", render_list(&walk, ui.verbose, ui.color, ui.unicode));
    }

    Ok(())
}
