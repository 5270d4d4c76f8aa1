//! PluginCI CLI - Workflow trigger step
//!
//! Prints the decision to stdout in the requested format.
//! Exits 0 when the workflow should run, 1 when it should not, 2 on error.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, Level};

use pluginci_core::{init_tracing, EventKind, OutputFormat, TriggerReport, TriggerResolver};

/// How much of the commit message to echo in verbose logs
const MESSAGE_PREVIEW_CHARS: usize = 50;

#[derive(Parser)]
#[command(name = "pluginci-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Parse CI workflow trigger conditions")]
struct Cli {
    /// CI event name (push, pull_request, schedule, ...)
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    event_name: String,

    /// Commit message to scan for build tags
    #[arg(long, env = "CI_COMMIT_MESSAGE", default_value = "")]
    commit_message: String,

    /// Read the commit message from a file (takes precedence over --commit-message)
    #[arg(long)]
    commit_message_file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::default())]
    output_format: OutputFormat,

    /// Log the event, message and reason to stderr (overrides RUST_LOG)
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    log_json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    init_tracing(cli.log_json, level, cli.verbose);

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<u8> {
    let message = match &cli.commit_message_file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read commit message from {}", path.display()))?,
        None => cli.commit_message.clone(),
    };

    let event = EventKind::parse(&cli.event_name);
    let decision = TriggerResolver::new().resolve(event, &message);
    let report = TriggerReport::new(&cli.event_name, &message, &decision)?;

    info!(event = %report.event_name, "event");
    info!(commit = %preview(&report.commit_message), "commit");
    info!(reason = %report.trigger_reason, "reason");

    let output = report
        .render(cli.output_format)
        .context("Failed to render report")?;
    println!("{}", output);

    Ok(report.exit_code())
}

fn preview(message: &str) -> String {
    let head: String = message.chars().take(MESSAGE_PREVIEW_CHARS).collect();
    format!("{}...", head)
}
