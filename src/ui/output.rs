use std::path::Path;

use progmem::config::ConfigWarning;

use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::context::UiContext;
use crate::ui::json::events::WarningEvent;
use crate::ui::theme::Icon;

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning], ui: &UiContext) {
    for w in warnings {
        let message = match &w.suggestion {
            Some(suggestion) => format!("Unknown config key '{}'. Did you mean '{}'?", w.key, suggestion),
            None => format!("Unknown config key '{}'", w.key),
        };

        if ui.json {
            let _ = crate::ui::json::emit(&WarningEvent::new(message).at(path, w.line));
            continue;
        }

        if ui.caps.is_github_actions {
            let file = path.display().to_string();
            println!(
                "{}",
                github_actions_annotation(AnnotationLevel::Warning, &message, Some(&file), w.line)
            );
        }

        let location = match w.line {
            Some(line) => format!("{}:{}", path.display(), line),
            None => path.display().to_string(),
        };
        eprintln!("{} {} ({})", Icon::Warning.styled(ui.color, ui.unicode), message, location);
    }
}
