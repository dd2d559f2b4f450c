use std::time::Duration;

use progmem::pipeline::{AssetSummary, EmbedReport, WriteStatus};
use progmem::Encoding;

use crate::ui::theme::{self, Icon};
use crate::ui::views::{ratio, render_skipped};

pub fn render_asset_line(asset: &AssetSummary, color: bool, unicode: bool) -> String {
    let sizes = match asset.encoding {
        Encoding::Gzip => format!(
            "{} -> {} bytes ({})",
            asset.raw_len,
            asset.compressed_len,
            ratio(asset.compressed_len, asset.raw_len)
        ),
        Encoding::Stored => format!("{} bytes, stored", asset.raw_len),
    };
    format!(
        "  {} {} {} {}\n",
        Icon::Success.styled(color, unicode),
        asset.path,
        sizes,
        theme::dim(&asset.symbol, color)
    )
}

pub fn render_embed_report(
    report: &EmbedReport,
    verbose: u8,
    elapsed: Duration,
    color: bool,
    unicode: bool,
) -> String {
    let mut out = String::new();

    if verbose > 0 {
        for asset in &report.assets {
            out.push_str(&render_asset_line(asset, color, unicode));
        }
        for skipped in &report.skipped {
            out.push_str(&render_skipped(skipped, color, unicode));
        }
    }

    let noun = if report.assets.len() == 1 { "asset" } else { "assets" };
    let headline = match report.status {
        WriteStatus::Written => format!(
            "Embedded {} {} ({} -> {} bytes) into {}",
            report.assets.len(),
            noun,
            report.raw_total(),
            report.compressed_total(),
            report.output_path.display()
        ),
        WriteStatus::Unchanged => format!(
            "{} {} up to date in {}",
            report.assets.len(),
            noun,
            report.output_path.display()
        ),
    };
    out.push_str(&format!("{} {}\n", Icon::Success.styled(color, unicode), headline));

    if verbose > 1 {
        out.push_str(&theme::dim(
            &format!("  {} ({} bytes, {} ms)\n", report.hash, report.bytes, elapsed.as_millis()),
            color,
        ));
    }

    out
}
