use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    Success,
    Error,
    Warning,
    Info,
    Dim,
}

impl SemanticColor {
    fn color(self) -> crossterm::style::Color {
        match self {
            Self::Success => theme::colors::SUCCESS,
            Self::Error => theme::colors::ERROR,
            Self::Warning => theme::colors::WARNING,
            Self::Info => theme::colors::INFO,
            Self::Dim => theme::colors::DIM,
        }
    }
}

/// Color `text`, or return it unchanged when color is off
pub fn paint(text: &str, color: SemanticColor, supports_color: bool) -> String {
    if supports_color {
        format!("{}", text.with(color.color()))
    } else {
        text.to_string()
    }
}

/// Bold colored `text` (headers, titles)
pub fn paint_bold(text: &str, color: SemanticColor, supports_color: bool) -> String {
    if supports_color {
        format!("{}", text.with(color.color()).bold())
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_without_color_returns_plain_text() {
        assert_eq!(paint("ok", SemanticColor::Success, false), "ok");
        assert_eq!(paint_bold("title", SemanticColor::Info, false), "title");
    }

    #[test]
    fn paint_with_color_includes_ansi_escape() {
        assert!(paint("no", SemanticColor::Error, true).contains("\u{1b}["));
    }
}
