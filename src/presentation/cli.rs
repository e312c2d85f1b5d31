//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose) are inherited by all subcommands
//! - Threshold flags override env and config file values

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Kidari - supplementary lesson log compliance checker
#[derive(Parser, Debug)]
#[command(name = "kidari")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'kidari explain' to see the rules that are checked.")]
pub struct Cli {
    /// Output format for CI (NDJSON events)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a lesson log against session rules and approved schedules
    Audit {
        /// Lesson log (extraction JSON or raw chat reply)
        #[arg(short, long)]
        lessons: PathBuf,

        /// Work-status export (repeatable)
        #[arg(long = "duty", value_name = "FILE")]
        duty: Vec<PathBuf>,

        /// Business-trip export (repeatable)
        #[arg(long = "trip", value_name = "FILE")]
        trip: Vec<PathBuf>,

        /// Minimum minutes for a single session
        #[arg(long, value_name = "MIN", value_parser = clap::value_parser!(u32).range(1..))]
        min_session: Option<u32>,

        /// Minimum combined minutes for a back-to-back pair
        #[arg(long, value_name = "MIN", value_parser = clap::value_parser!(u32).range(1..))]
        min_consecutive: Option<u32>,

        /// Write a Markdown report to this file
        #[arg(long, value_name = "FILE")]
        export: Option<PathBuf>,

        /// Exit 0 even when violations are found
        #[arg(long)]
        allow_violations: bool,
    },

    /// Explain the rules Kidari checks (for humans/AI assistants)
    Explain {
        /// Short version (just the essentials)
        #[arg(long)]
        brief: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["kidari"]).is_err());
    }

    #[test]
    fn test_cli_parse_audit_minimal() {
        let cli = Cli::try_parse_from(["kidari", "audit", "--lessons", "april.json"]).unwrap();
        if let Commands::Audit {
            lessons,
            duty,
            trip,
            min_session,
            min_consecutive,
            export,
            allow_violations,
        } = cli.command
        {
            assert_eq!(lessons, PathBuf::from("april.json"));
            assert!(duty.is_empty());
            assert!(trip.is_empty());
            assert_eq!(min_session, None);
            assert_eq!(min_consecutive, None);
            assert_eq!(export, None);
            assert!(!allow_violations);
        } else {
            panic!("Expected Audit command");
        }
    }

    #[test]
    fn test_cli_parse_audit_repeated_exports() {
        let cli = Cli::try_parse_from([
            "kidari",
            "audit",
            "-l",
            "april.json",
            "--duty",
            "duty-1.json",
            "--duty",
            "duty-2.tsv",
            "--trip",
            "trips.json",
            "--min-session",
            "45",
            "--min-consecutive",
            "90",
            "--export",
            "report.md",
            "--allow-violations",
        ])
        .unwrap();

        if let Commands::Audit {
            duty,
            trip,
            min_session,
            min_consecutive,
            export,
            allow_violations,
            ..
        } = cli.command
        {
            assert_eq!(
                duty,
                vec![PathBuf::from("duty-1.json"), PathBuf::from("duty-2.tsv")]
            );
            assert_eq!(trip, vec![PathBuf::from("trips.json")]);
            assert_eq!(min_session, Some(45));
            assert_eq!(min_consecutive, Some(90));
            assert_eq!(export, Some(PathBuf::from("report.md")));
            assert!(allow_violations);
        } else {
            panic!("Expected Audit command");
        }
    }

    #[test]
    fn test_cli_audit_requires_lessons() {
        assert!(Cli::try_parse_from(["kidari", "audit"]).is_err());
    }

    #[test]
    fn test_cli_rejects_zero_threshold() {
        let result = Cli::try_parse_from([
            "kidari",
            "audit",
            "--lessons",
            "a.json",
            "--min-session",
            "0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_explain_brief() {
        let cli = Cli::try_parse_from(["kidari", "explain", "--brief"]).unwrap();
        if let Commands::Explain { brief } = cli.command {
            assert!(brief);
        } else {
            panic!("Expected Explain command");
        }
    }

    #[test]
    fn test_cli_json_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["kidari", "explain", "--json"]).unwrap();
        assert!(cli.json);
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["kidari", "-vv", "explain"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_color_flag() {
        let cli = Cli::try_parse_from(["kidari", "--color", "never", "explain"]).unwrap();
        assert_eq!(cli.color, Some(ColorWhen::Never));
    }
}
