use kidari::CheckPolicy;

use crate::ui::blocks::header::CommandHeader;

pub fn render_explain(
    policy: CheckPolicy,
    brief: bool,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = CommandHeader::explain()
        .field("Purpose", "check supplementary lesson logs before submission")
        .render(supports_color, supports_unicode);
    out.push('\n');

    out.push_str("RULES:\n");
    out.push_str(&format!(
        "  1. A lesson shorter than {} min is too short.\n",
        policy.min_session_minutes
    ));
    out.push_str(&format!(
        "  2. Two lessons on the same day where the second starts exactly at the\n     \
         first's end time (written identically) must total at least {} min.\n",
        policy.min_consecutive_minutes
    ));
    out.push_str(
        "  3. A lesson must not overlap an approved duty or business-trip schedule.\n     \
         Touching end points (14:20 end, 14:20 start) do not overlap.\n",
    );

    if brief {
        out.push_str("\nKEY COMMANDS:\n");
        out.push_str("  kidari audit --lessons <file> [--duty <file>]... [--trip <file>]...\n");
        out.push_str("  kidari explain\n");
        return out;
    }

    out.push_str("\nINPUTS:\n");
    out.push_str("  --lessons   {\"lessons\": [...]}, a bare array, or a raw chat reply containing one\n");
    out.push_str("              fields: date, startTime, endTime, duration, fullDate (optional)\n");
    out.push_str("  --duty      work-status export rows (JSON array or TSV), approved (완결) only\n");
    out.push_str("  --trip      business-trip export rows (JSON array or TSV), approved (완결) only\n");
    out.push_str("\nNOTES:\n");
    out.push_str("  Lessons without a readable fullDate are checked for rule 1 only.\n");
    out.push_str("  Every lesson appears in the report, in input order.\n");

    out.push_str("\nKEY COMMANDS:\n");
    out.push_str("  kidari audit --lessons <file> [--duty <file>]... [--trip <file>]...\n");
    out.push_str("  kidari audit ... --export report.md\n");
    out.push_str("  kidari explain [--brief]\n");

    if verbose > 0 {
        out.push_str("\nCONFIGURATION:\n");
        out.push_str("  ./kidari.toml, then <config dir>/kidari/config.toml\n");
        out.push_str("    [policy] min_session_minutes, min_consecutive_minutes\n");
        out.push_str("    [output] color = auto|always|never, unicode = true|false\n");
        out.push_str("  Environment: KIDARI_MIN_SESSION_MINUTES, KIDARI_MIN_CONSECUTIVE_MINUTES, KIDARI_COLOR\n");
        out.push_str("\nEXAMPLES:\n");
        out.push_str("  # Check April against both exports\n");
        out.push_str("  kidari audit -l april.json --duty duty.tsv --trip trips.json\n\n");
        out.push_str("  # CI-friendly run with a stricter session length\n");
        out.push_str("  kidari --json audit -l april.json --min-session 45\n");
    }

    out
}

/// Payload of the `complete` event for `explain --json`
pub fn explain_json(policy: CheckPolicy) -> serde_json::Value {
    serde_json::json!({
        "name": "kidari",
        "version": env!("CARGO_PKG_VERSION"),
        "purpose": "Compliance checker for supplementary lesson logs",
        "rules": {
            "duration": format!("lesson shorter than {} min", policy.min_session_minutes),
            "consecutive": format!(
                "same-day back-to-back pair (prev endTime == startTime) shorter than {} min combined",
                policy.min_consecutive_minutes
            ),
            "conflict": "overlap with an approved duty or business-trip schedule; touching end points do not overlap"
        },
        "policy": policy,
        "inputs": {
            "lessons": ["date", "startTime", "endTime", "duration", "fullDate?"],
            "duty": "work-status export rows, approved only",
            "trip": "business-trip export rows, approved only"
        },
        "commands": {
            "kidari audit": "Check a lesson log (non-zero exit on violations)",
            "kidari explain": "Show these rules"
        }
    })
}
