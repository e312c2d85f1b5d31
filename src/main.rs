//! Kidari CLI - supplementary lesson log compliance checker
//!
//! Usage: kidari [--json] [-v...] [--color auto|always|never] <COMMAND>
//!
//! Commands:
//!   audit    Check a lesson log against session rules and approved schedules
//!   explain  Show the rules that are checked

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use kidari::application::AuditOptions;
use kidari::presentation::{Cli, Commands};
use kidari::Config;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json = cli.json;
    let command = match &cli.command {
        Commands::Audit { .. } => "audit",
        Commands::Explain { .. } => "explain",
    };

    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json, command);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise `-v` picks the level.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let project_root = std::env::current_dir()?;
    let (config, warnings) = Config::discover(Some(&project_root))?;
    ui::output::print_config_warnings(&warnings);

    let ui = ui::context::UiContext::new(cli.json, cli.verbose, cli.color, &config);

    match cli.command {
        Commands::Audit {
            lessons,
            duty,
            trip,
            min_session,
            min_consecutive,
            export,
            allow_violations,
        } => {
            let mut policy = config.policy;
            if let Some(minutes) = min_session {
                policy.min_session_minutes = minutes;
            }
            if let Some(minutes) = min_consecutive {
                policy.min_consecutive_minutes = minutes;
            }

            let options = AuditOptions {
                lessons,
                duty_files: duty,
                trip_files: trip,
                policy,
            };
            commands::cmd_audit(
                commands::AuditRequest {
                    options,
                    export,
                    allow_violations,
                },
                &ui,
            )
        }
        Commands::Explain { brief } => commands::cmd_explain(brief, config.policy, &ui),
    }
}
