use anyhow::Result;
use serde::Serialize;

use progmem::naming;
use progmem::Encoding;

use crate::ui::context::UiContext;
use crate::ui::json;

#[derive(Debug, Serialize)]
struct SymbolEvent<'a> {
    event: &'static str,
    path: &'a str,
    identifier: String,
    array: String,
    length: String,
    naming_version: u32,
}

pub fn cmd_symbol(ui: &UiContext, paths: &[String], raw: bool) -> Result<()> {
    let encoding = if raw { Encoding::Stored } else { Encoding::Gzip };

    for path in paths {
        let array = naming::array_symbol(path, encoding);
        let length = naming::length_symbol(path, encoding);

        if ui.json {
            json::emit(&SymbolEvent {
                event: "symbol",
                path,
                identifier: naming::identifier_for(path),
                array,
                length,
                naming_version: naming::NAMING_VERSION,
            })?;
        } else {
            println!("{}\t{}\t{}", path, array, length);
        }
    }

    Ok(())
}
