//! Generated source rendering
//!
//! Produces one C/C++ header for the Arduino toolchain. Formatting is
//! fixed: same records in, same bytes out.

use crate::error::{EmbedError, EmbedResult};
use crate::models::{AssetRecord, Encoding, GeneratedSource};
use crate::naming::NAMING_VERSION;

/// Bytes per array row
pub const DEFAULT_ROW_WIDTH: usize = 16;

/// Rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitOptions {
    row_width: usize,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            row_width: DEFAULT_ROW_WIDTH,
        }
    }
}

impl EmitOptions {
    pub fn new(row_width: usize) -> EmbedResult<Self> {
        if row_width == 0 {
            return Err(EmbedError::InvalidOption {
                option: "encoding.row_width",
                value: row_width.to_string(),
                reason: "row width must be at least 1",
            });
        }
        Ok(Self { row_width })
    }

    pub fn row_width(&self) -> usize {
        self.row_width
    }
}

/// Fixed header emitted before any asset
pub fn preamble() -> String {
    format!(
        "// Generated by progmem. Do not edit.\n\
         #pragma once\n\
         #include <Arduino.h>\n\
         \n\
         #define PROGMEM_NAMING_VERSION {NAMING_VERSION}\n\
         \n"
    )
}

/// Render all records, in the order given, into one header.
pub fn render(records: &[AssetRecord], options: &EmitOptions) -> GeneratedSource {
    let mut out = preamble();
    for record in records {
        render_asset(&mut out, record, options.row_width);
    }
    GeneratedSource::new(out, records.len())
}

/// Path as it may appear inside a `//` comment.
///
/// Control characters are written as escapes so a file name containing a
/// newline cannot end the comment early.
fn comment_text(path: &str) -> String {
    path.chars()
        .map(|c| {
            if c.is_control() {
                c.escape_default().collect()
            } else {
                c.to_string()
            }
        })
        .collect()
}

fn render_asset(out: &mut String, record: &AssetRecord, row_width: usize) {
    let path = comment_text(&record.relative_path);
    let comment = match record.encoding {
        Encoding::Gzip => format!(
            "// {} ({} -> {} bytes)\n",
            path,
            record.raw_len(),
            record.compressed_len()
        ),
        Encoding::Stored => format!(
            "// {} ({} bytes, stored)\n",
            path,
            record.raw_len()
        ),
    };
    out.push_str(&comment);
    out.push_str(&format!(
        "const uint8_t {}[] PROGMEM = {{\n",
        record.array_symbol()
    ));

    if record.compressed_bytes.is_empty() {
        // C has no zero-length arrays; the length constant stays 0
        out.push_str("  0x00,\n");
    }
    for row in record.compressed_bytes.chunks(row_width) {
        let line = row
            .iter()
            .map(|b| format!("0x{b:02x}"))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str("  ");
        out.push_str(&line);
        out.push_str(",\n");
    }

    out.push_str("};\n");
    out.push_str(&format!(
        "const size_t {} = {};\n\n",
        record.length_symbol(),
        record.compressed_len()
    ));
}
