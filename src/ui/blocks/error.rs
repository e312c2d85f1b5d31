//! Error box for unreadable inputs: the file, the parser's line, the
//! numbered source around it and a fix.

use std::path::PathBuf;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// One numbered line of the offending input
#[derive(Debug, Clone, PartialEq, Eq)]
struct SourceLine {
    number: usize,
    text: String,
    is_error: bool,
}

#[derive(Debug, Clone)]
pub struct ErrorBlock {
    file: PathBuf,
    line: Option<usize>,
    message: String,
    source: Vec<SourceLine>,
    fix: Option<String>,
    max_width: Option<usize>,
}

impl ErrorBlock {
    pub fn new(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line: None,
            message: message.into(),
            source: Vec::new(),
            fix: None,
            max_width: None,
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn max_width(mut self, columns: usize) -> Self {
        self.max_width = Some(columns);
        self
    }

    /// Attach `radius` lines either side of the error line. An unreadable
    /// file leaves the block without source.
    pub fn with_source_context(mut self, radius: usize) -> Self {
        let Some(line) = self.line else { return self };
        if let Ok(content) = std::fs::read_to_string(&self.file) {
            self.source = source_window(&content, line, radius);
        }
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut b = Box::with_title("ERROR").style(BoxStyle::Error);
        if let Some(columns) = self.max_width {
            b = b.max_width(columns);
        }

        b.add_line(self.file.display().to_string());
        if let Some(line) = self.line {
            b.add_line(format!("Line {}", line));
        }
        b.add_empty();
        b.add_line(self.message.clone());

        if !self.source.is_empty() {
            b.add_empty();
            for source in &self.source {
                let marker = if source.is_error {
                    Icon::Pointer.render(supports_unicode)
                } else {
                    " "
                };
                let text = if source.is_error {
                    ColoredText::error(source.text.as_str()).render(supports_color)
                } else {
                    source.text.clone()
                };
                b.add_line(format!("{marker} {:>4} | {}", source.number, text));
            }
        }

        if let Some(fix) = &self.fix {
            b.add_empty();
            b.add_line(format!("FIX: {}", fix));
        }

        b.render(supports_color, supports_unicode)
    }
}

/// Lines `line - radius ..= line + radius` of `content`, clipped to the file.
fn source_window(content: &str, line: usize, radius: usize) -> Vec<SourceLine> {
    let total = content.lines().count();
    if line == 0 || line > total {
        return Vec::new();
    }

    let first = line.saturating_sub(radius).max(1);
    let last = (line + radius).min(total);
    content
        .lines()
        .enumerate()
        .map(|(idx, text)| (idx + 1, text))
        .filter(|(number, _)| (first..=last).contains(number))
        .map(|(number, text)| SourceLine {
            number,
            text: text.to_string(),
            is_error: number == line,
        })
        .collect()
}
