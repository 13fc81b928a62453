use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Arrow,
    Sent,
    Deleted,
    Watch,
    Sync,
}

impl Icon {
    /// Unicode glyph and ASCII fallback for this icon.
    fn glyphs(self) -> (&'static str, &'static str) {
        use theme::{icons, icons_ascii};
        match self {
            Icon::Success => (icons::SUCCESS, icons_ascii::SUCCESS),
            Icon::Error => (icons::ERROR, icons_ascii::ERROR),
            Icon::Warning => (icons::WARNING, icons_ascii::WARNING),
            Icon::Progress => (icons::PROGRESS, icons_ascii::PROGRESS),
            Icon::Arrow => (icons::ARROW, icons_ascii::ARROW),
            Icon::Sent => (icons::SENT, icons_ascii::SENT),
            Icon::Deleted => (icons::DELETED, icons_ascii::DELETED),
            Icon::Watch => (icons::WATCH, icons_ascii::WATCH),
            Icon::Sync => (icons::SYNC, icons_ascii::SYNC),
        }
    }

    pub fn render(&self, supports_unicode: bool) -> &'static str {
        let (unicode, ascii) = self.glyphs();
        if supports_unicode {
            unicode
        } else {
            ascii
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let glyph = self.render(supports_unicode);
        if !supports_color {
            return glyph.to_string();
        }
        let color = match self {
            Icon::Success | Icon::Sent => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Progress | Icon::Deleted => theme::colors::WARNING,
            Icon::Arrow => theme::colors::DIM,
            Icon::Watch | Icon::Sync => theme::colors::INFO,
        };
        glyph.with(color).to_string()
    }
}
