use std::borrow::Cow;

use crossterm::style::Stylize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::primitives::border::BorderChar;
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxStyle {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Narrowest text column a width limit may force
const MIN_TEXT_WIDTH: usize = 16;

#[derive(Debug, Default, Clone)]
pub struct Box {
    title: Option<String>,
    content: Vec<String>,
    style: BoxStyle,
    max_width: Option<usize>,
}

impl Box {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: BoxStyle) -> Self {
        self.style = style;
        self
    }

    /// Wrap text so the box, borders included, fits in `columns`.
    pub fn max_width(mut self, columns: usize) -> Self {
        self.max_width = Some(columns);
        self
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        for part in line.lines() {
            self.content.push(part.to_string());
        }
    }

    pub fn add_empty(&mut self) {
        self.content.push(String::new());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let limit = self
            .max_width
            .map(|columns| columns.saturating_sub(4).max(MIN_TEXT_WIDTH));
        let lines: Vec<Cow<'_, str>> = self
            .title
            .iter()
            .chain(&self.content)
            .flat_map(|line| match limit {
                Some(limit) => wrap(line, limit),
                None => vec![Cow::Borrowed(line.as_str())],
            })
            .collect();

        // One space of padding on each side.
        let inner_width = lines
            .iter()
            .map(|l| visible_width(l))
            .max()
            .unwrap_or(0)
            .saturating_add(2)
            .max(2);

        let border = |s: &str| color_border(s, supports_color, self.style);
        let h = BorderChar::Horizontal.render(supports_unicode);
        let v = BorderChar::Vertical.render(supports_unicode);

        let mut out = String::new();
        out.push_str(&border(&format!(
            "{}{}{}",
            BorderChar::TopLeft.render(supports_unicode),
            h.repeat(inner_width),
            BorderChar::TopRight.render(supports_unicode)
        )));
        out.push('\n');

        for line in &lines {
            let pad = inner_width - 1 - visible_width(line);
            out.push_str(&border(v));
            out.push(' ');
            out.push_str(line);
            out.push_str(&" ".repeat(pad));
            out.push_str(&border(v));
            out.push('\n');
        }

        out.push_str(&border(&format!(
            "{}{}{}",
            BorderChar::BottomLeft.render(supports_unicode),
            h.repeat(inner_width),
            BorderChar::BottomRight.render(supports_unicode)
        )));
        out.push('\n');
        out
    }
}

/// Greedy wrap on spaces by display width; longer words (paths) are split.
/// Styled lines are left whole.
fn wrap(line: &str, limit: usize) -> Vec<Cow<'_, str>> {
    if line.contains('\u{1b}') || line.width() <= limit {
        return vec![Cow::Borrowed(line)];
    }

    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_width = 0;
    for word in line.split(' ') {
        if row_width > 0 && row_width + 1 + word.width() > limit {
            rows.push(Cow::Owned(std::mem::take(&mut row)));
            row_width = 0;
        }
        if row_width > 0 {
            row.push(' ');
            row_width += 1;
        }
        for c in word.chars() {
            let width = c.width().unwrap_or(0);
            if row_width > 0 && row_width + width > limit {
                rows.push(Cow::Owned(std::mem::take(&mut row)));
                row_width = 0;
            }
            row.push(c);
            row_width += width;
        }
    }
    rows.push(Cow::Owned(row));
    rows
}

fn color_border(s: &str, supports_color: bool, style: BoxStyle) -> String {
    if !supports_color {
        return s.to_string();
    }

    let color = match style {
        BoxStyle::Info => theme::colors::INFO,
        BoxStyle::Success => theme::colors::SUCCESS,
        BoxStyle::Warning => theme::colors::WARNING,
        BoxStyle::Error => theme::colors::ERROR,
    };
    format!("{}", s.with(color))
}

/// Display columns, ignoring ANSI escapes; Hangul counts as two.
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // ESC [ ... <final>
            if matches!(chars.peek(), Some('[') | Some(']')) {
                let _ = chars.next();
            }
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    Cow::Owned(out)
}
