use progmem::EmbedError;

use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::context::UiContext;
use crate::ui::json::events::ErrorEvent;
use crate::ui::theme::{self, Icon};

/// Short remediation hint for each failure kind.
fn fix_hint(err: &EmbedError) -> Option<String> {
    match err {
        EmbedError::MissingInputDirectory { .. } => Some(
            "Run the frontend build first, or point --input at its output directory.".to_string(),
        ),
        EmbedError::IdentifierCollision { identifier, .. } => Some(format!(
            "Rename one of the files; both map to the identifier '{}'.",
            identifier
        )),
        EmbedError::Compression { .. } => {
            Some("Re-run the build; compression only fails when memory runs out.".to_string())
        }
        EmbedError::OutputWrite { .. } => Some(
            "Check that the output directory is writable and no other run holds its lock."
                .to_string(),
        ),
        EmbedError::InputRead { .. } => {
            Some("Check permissions on the files under the input directory.".to_string())
        }
        EmbedError::InvalidConfig { .. } => Some("Fix the config file and try again.".to_string()),
        EmbedError::InvalidOption { .. } => None,
    }
}

pub fn format_embed_error(err: &EmbedError, color: bool, unicode: bool) -> String {
    let icon = Icon::Error.styled(color, unicode);
    let title = theme::paint("ERROR", theme::colors::ERROR, color);

    let mut out = match err.path() {
        Some(path) => format!("{icon} {title} {path}\n"),
        None => format!("{icon} {title}\n"),
    };
    out.push_str(&format!("  {}\n", err));
    if let Some(fix) = fix_hint(err) {
        out.push_str(&format!("  {}\n", theme::dim(&format!("FIX: {fix}"), color)));
    }
    out
}

pub fn format_error(err: &anyhow::Error, color: bool, unicode: bool) -> String {
    if let Some(embed) = err.downcast_ref::<EmbedError>() {
        return format_embed_error(embed, color, unicode);
    }

    format!("{} {:#}\n", Icon::Error.styled(color, unicode), err)
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    let path = err.downcast_ref::<EmbedError>().and_then(EmbedError::path);

    if ui.json {
        let _ = crate::ui::json::emit(&ErrorEvent::new(format!("{:#}", err), path));
        return;
    }

    if ui.caps.is_github_actions {
        println!(
            "{}",
            github_actions_annotation(AnnotationLevel::Error, &err.to_string(), path.as_deref(), None)
        );
    }

    eprint!("{}", format_error(err, ui.color, ui.unicode));
}
