//! `KIDARI_*` override validation
//!
//! An override never aborts a run. A value that cannot be used is reported
//! on stderr and the value already in effect (config file, else built-in
//! default) stays.

use std::fmt::Display;
use std::io::Write;

/// Largest minute threshold accepted from the environment (one day)
pub const MAX_ENV_MINUTES: u32 = 24 * 60;

/// Units people append to a minute count, longest first
const MINUTE_UNITS: &[&str] = &["minutes", "minute", "mins", "min", "m", "분"];

/// What an override accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvExpectation<'a> {
    /// Whole minutes in `1..=MAX_ENV_MINUTES`
    Minutes,
    /// One keyword from a fixed list, case-insensitive
    Keyword(&'a [&'a str]),
}

/// Reads one `KIDARI_*` variable
#[derive(Debug, Clone, Copy)]
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    expects: EnvExpectation<'a>,
}

impl<'a> EnvVarValidator<'a> {
    pub fn minutes(var_name: &'a str) -> Self {
        Self {
            var_name,
            expects: EnvExpectation::Minutes,
        }
    }

    pub fn keyword(var_name: &'a str, keywords: &'a [&'a str]) -> Self {
        Self {
            var_name,
            expects: EnvExpectation::Keyword(keywords),
        }
    }

    pub fn expects(&self) -> EnvExpectation<'a> {
        self.expects
    }

    /// Minute threshold from `value`, or `current` after a warning.
    pub fn minutes_or<W: Write>(&self, value: &str, current: u32, writer: &mut W) -> u32 {
        match parse_minutes(value) {
            Some(minutes) => minutes,
            None => {
                self.warn(value, &current, writer);
                current
            }
        }
    }

    /// Keyword mapped through `parser`, or `current` after a warning.
    pub fn keyword_or<T, W>(
        &self,
        value: &str,
        parser: impl Fn(&str) -> Option<T>,
        current: T,
        writer: &mut W,
    ) -> T
    where
        T: Display,
        W: Write,
    {
        match parser(value) {
            Some(parsed) => parsed,
            None => {
                self.warn(value, &current, writer);
                current
            }
        }
    }

    fn warn<W: Write>(&self, value: &str, current: &dyn Display, writer: &mut W) {
        let hint = self
            .hint(value)
            .map(|hint| format!(". Did you mean '{}'?", hint))
            .unwrap_or_default();
        let _ = writeln!(
            writer,
            "Warning: Ignoring {}='{}'{} (keeping {})",
            self.var_name, value, hint, current
        );
        let _ = writeln!(writer, "Expected: {}", self.describe());
    }

    fn describe(&self) -> String {
        match self.expects {
            EnvExpectation::Minutes => format!("whole minutes from 1 to {}", MAX_ENV_MINUTES),
            EnvExpectation::Keyword(keywords) => keywords.join(", "),
        }
    }

    fn hint(&self, value: &str) -> Option<String> {
        match self.expects {
            EnvExpectation::Minutes => strip_minute_unit(value)
                .filter(|bare| parse_minutes(bare).is_some())
                .map(str::to_string),
            EnvExpectation::Keyword(keywords) => closest_match(&value.to_lowercase(), keywords)
                .filter(|(_, dist)| (1..=2).contains(dist))
                .map(|(keyword, _)| keyword.to_string()),
        }
    }
}

/// Whole minutes in `1..=MAX_ENV_MINUTES`, surrounding spaces allowed
pub fn parse_minutes(value: &str) -> Option<u32> {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|minutes| (1..=MAX_ENV_MINUTES).contains(minutes))
}

/// `45min` -> `45`; `None` when no unit is attached
fn strip_minute_unit(value: &str) -> Option<&str> {
    let value = value.trim();
    MINUTE_UNITS
        .iter()
        .find_map(|unit| value.strip_suffix(unit))
        .map(str::trim_end)
}

/// Nearest candidate and its edit distance
pub fn closest_match<'k>(input: &str, candidates: &[&'k str]) -> Option<(&'k str, usize)> {
    candidates
        .iter()
        .map(|candidate| (*candidate, levenshtein(input, candidate)))
        .min_by_key(|(_, dist)| *dist)
}

/// Edit distance over `char`s, one row at a time
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = (above + 1)
                .min(row[j] + 1)
                .min(diagonal + usize::from(ca != cb));
            diagonal = above;
        }
    }

    row[b.len()]
}
