use crossterm::style::{Color, Stylize};

/// Semantic colors used by every view.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Skip,
}

impl Icon {
    pub fn render(self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Icon::Success, true) => "✓",
            (Icon::Error, true) => "✗",
            (Icon::Warning, true) => "⚠",
            (Icon::Skip, true) => "○",
            (Icon::Success, false) => "[OK]",
            (Icon::Error, false) => "[ERROR]",
            (Icon::Warning, false) => "[WARN]",
            (Icon::Skip, false) => "[SKIP]",
        }
    }

    fn color(self) -> Color {
        match self {
            Icon::Success => colors::SUCCESS,
            Icon::Error => colors::ERROR,
            Icon::Warning => colors::WARNING,
            Icon::Skip => colors::DIM,
        }
    }

    pub fn styled(self, color: bool, unicode: bool) -> String {
        paint(self.render(unicode), self.color(), color)
    }
}

pub fn paint(text: &str, fg: Color, color: bool) -> String {
    if color {
        format!("{}", text.with(fg))
    } else {
        text.to_string()
    }
}

pub fn dim(text: &str, color: bool) -> String {
    paint(text, colors::DIM, color)
}
