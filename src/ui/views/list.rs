use progmem::naming;
use progmem::walker::Walk;

use crate::ui::theme;
use crate::ui::views::render_skipped;

pub fn render_list(walk: &Walk, verbose: u8, color: bool, unicode: bool) -> String {
    let mut out = String::new();
    let width = walk
        .tree
        .files()
        .iter()
        .map(|f| f.relative_path.chars().count())
        .max()
        .unwrap_or(0);

    for file in walk.tree.files() {
        out.push_str(&format!(
            "  {:<width$}  {:>8} bytes  {}\n",
            file.relative_path,
            file.bytes.len(),
            theme::dim(&naming::identifier_for(&file.relative_path), color),
            width = width
        ));
    }
    if verbose > 0 {
        for skipped in &walk.skipped {
            out.push_str(&render_skipped(skipped, color, unicode));
        }
    }

    let noun = if walk.tree.len() == 1 { "file" } else { "files" };
    out.push_str(&format!(
        "{} {}, {} bytes in {}\n",
        walk.tree.len(),
        noun,
        walk.tree.total_bytes(),
        walk.tree.root().display()
    ));
    out
}
