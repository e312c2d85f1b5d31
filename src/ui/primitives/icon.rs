use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Pointer,
    Duration,
    Consecutive,
    Conflict,
    Audit,
    Explain,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Pointer) => theme::icons::POINTER,
            (true, Icon::Duration) => theme::icons::DURATION,
            (true, Icon::Consecutive) => theme::icons::CONSECUTIVE,
            (true, Icon::Conflict) => theme::icons::CONFLICT,
            (true, Icon::Audit) => theme::icons::AUDIT,
            (true, Icon::Explain) => theme::icons::EXPLAIN,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Pointer) => theme::icons_ascii::POINTER,
            (false, Icon::Duration) => theme::icons_ascii::DURATION,
            (false, Icon::Consecutive) => theme::icons_ascii::CONSECUTIVE,
            (false, Icon::Conflict) => theme::icons_ascii::CONFLICT,
            (false, Icon::Audit) => theme::icons_ascii::AUDIT,
            (false, Icon::Explain) => theme::icons_ascii::EXPLAIN,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error | Icon::Pointer | Icon::Conflict => theme::colors::ERROR,
            Icon::Warning | Icon::Duration | Icon::Consecutive => theme::colors::WARNING,
            Icon::Arrow => theme::colors::DIM,
            Icon::Audit | Icon::Explain => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
