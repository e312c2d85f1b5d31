//! Terminal capability detection
//!
//! Decides once per run whether output may use color and Unicode glyphs,
//! how wide boxes may grow, and which CI system (if any) is reading.

use is_terminal::IsTerminal;

/// Columns assumed when the terminal size is unknown (pipes, CI logs)
const FALLBACK_WIDTH: u16 = 80;

/// CI systems recognised by their marker variable, most specific first
const CI_MARKERS: &[(&str, CiProvider)] = &[
    ("GITHUB_ACTIONS", CiProvider::GitHubActions),
    ("GITLAB_CI", CiProvider::Other),
    ("JENKINS_HOME", CiProvider::Other),
    ("BUILDKITE", CiProvider::Other),
    ("CIRCLECI", CiProvider::Other),
    ("TEAMCITY_VERSION", CiProvider::Other),
    ("CI", CiProvider::Other),
];

/// Locale variables in POSIX precedence order
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CiProvider {
    /// Understands `::warning` / `::error` workflow commands
    GitHubActions,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub ci: Option<CiProvider>,
    pub width: u16,
}

impl TerminalCapabilities {
    pub fn is_ci(&self) -> bool {
        self.ci.is_some()
    }

    pub fn is_github_actions(&self) -> bool {
        self.ci == Some(CiProvider::GitHubActions)
    }
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_with(
        |key| std::env::var(key).ok(),
        std::io::stdout().is_terminal(),
        crossterm::terminal::size().ok().map(|(columns, _)| columns),
    )
}

fn detect_with(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
    columns: Option<u16>,
) -> TerminalCapabilities {
    let dumb = get_env("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb"));
    let ci = CI_MARKERS
        .iter()
        .find(|&&(var, _)| get_env(var).is_some())
        .map(|&(_, provider)| provider);

    TerminalCapabilities {
        is_tty,
        supports_color: is_tty && !dumb && get_env("NO_COLOR").is_none(),
        supports_unicode: !dumb && locale_allows_unicode(&get_env),
        ci,
        width: columns.filter(|c| *c > 0).unwrap_or(FALLBACK_WIDTH),
    }
}

/// Lesson dates carry Hangul, so only an explicit C/POSIX locale opts out.
fn locale_allows_unicode(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    let locale = LOCALE_VARS
        .iter()
        .find_map(|var| get_env(var).filter(|value| !value.is_empty()));

    match locale {
        Some(locale) => !(locale.eq_ignore_ascii_case("c") || locale.eq_ignore_ascii_case("posix")),
        None => true,
    }
}
