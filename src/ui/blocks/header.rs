//! Heading block: command title, then one `Label: value` line per input.

use kidari::CheckPolicy;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{plural, ColoredText};

#[derive(Debug, Clone)]
pub struct CommandHeader {
    icon: Icon,
    title: String,
    fields: Vec<(&'static str, String)>,
}

impl CommandHeader {
    pub fn audit() -> Self {
        Self::titled(Icon::Audit, "Kidari Audit")
    }

    pub fn explain() -> Self {
        Self::titled(Icon::Explain, format!("Kidari v{}", env!("CARGO_PKG_VERSION")))
    }

    fn titled(icon: Icon, title: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, label: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((label, value.into()));
        self
    }

    /// `N approved from M files`; omitted when no file of that kind was given.
    pub fn sources(self, label: &'static str, approved: usize, files: usize) -> Self {
        if files == 0 {
            return self;
        }
        self.field(
            label,
            format!(
                "{} approved from {} {}",
                approved,
                files,
                plural(files, "file", "files")
            ),
        )
    }

    pub fn policy(self, policy: CheckPolicy) -> Self {
        self.field(
            "Policy",
            format!(
                "session >= {} min, back-to-back pair >= {} min",
                policy.min_session_minutes, policy.min_consecutive_minutes
            ),
        )
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = ColoredText::info(self.title.as_str())
            .bold()
            .render(supports_color);
        let mut out = format!(
            "{} {}\n",
            self.icon.colored(supports_color, supports_unicode),
            title
        );
        for (label, value) in &self.fields {
            out.push_str(&format!("{}: {}\n", label, value));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sources_skip_missing_kinds_and_pluralize() {
        let rendered = CommandHeader::audit()
            .field("Lessons", "april.json")
            .sources("Duty", 3, 2)
            .sources("Trips", 0, 0)
            .policy(CheckPolicy::new(45, 90))
            .render(false, false);

        insta::assert_snapshot!(rendered, @r"
        [AUDIT] Kidari Audit
        Lessons: april.json
        Duty: 3 approved from 2 files
        Policy: session >= 45 min, back-to-back pair >= 90 min
        ");
    }

    #[test]
    fn explain_title_carries_version() {
        let rendered = CommandHeader::explain().render(false, false);
        assert_eq!(
            rendered,
            format!("[EXPLAIN] Kidari v{}\n", env!("CARGO_PKG_VERSION"))
        );
    }
}
