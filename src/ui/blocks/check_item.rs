use crate::ui::primitives::icon::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Issue,
}

/// One checked entry: a lesson row or a single violation.
#[derive(Debug, Clone)]
pub struct CheckItem {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub recommendation: Option<String>,
    /// Shown only in verbose mode
    pub details: Vec<String>,
}

impl CheckItem {
    pub fn render(&self, verbose: bool, supports_color: bool, supports_unicode: bool) -> String {
        let icon = match self.status {
            CheckStatus::Pass => Icon::Success,
            CheckStatus::Issue => Icon::Error,
        }
        .colored(supports_color, supports_unicode);
        let arrow = Icon::Arrow.colored(supports_color, supports_unicode);

        let mut out = String::new();
        out.push_str(&format!("  {} {} - {}\n", icon, self.name, self.message));

        if let Some(rec) = &self.recommendation {
            out.push_str(&format!("    {} {}\n", arrow, rec));
        }

        if verbose {
            for detail in &self.details {
                out.push_str(&format!("    {} {}\n", arrow, detail));
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> CheckItem {
        CheckItem {
            name: "4. 18. (금) 13:40~14:10".to_string(),
            status: CheckStatus::Issue,
            message: "30 min".to_string(),
            recommendation: Some("10 min short".to_string()),
            details: vec!["Lesson too short: 30 min (under 40 min)".to_string()],
        }
    }

    #[test]
    fn render_includes_recommendation_line() {
        let rendered = item().render(false, false, false);
        assert_eq!(
            rendered,
            "  [FAIL] 4. 18. (금) 13:40~14:10 - 30 min\n    [>] 10 min short\n"
        );
    }

    #[test]
    fn details_only_in_verbose_mode() {
        let rendered = item().render(true, false, false);
        assert!(rendered.contains("[>] Lesson too short: 30 min (under 40 min)"));
    }
}
