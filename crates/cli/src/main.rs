mod cli;
mod logging;

use clap::Parser;
use tracing::{error, warn};

use crate::cli::{Cli, Commands};
use quotefix_io::{ConfigLayer, RunReport, fix_command};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Cli::parse();
    let cmd = args.cmd.unwrap_or_default();

    if let Err(e) = logging::init(cmd.args().log_dir.as_deref()) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    match run(cmd).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

async fn run(cmd: Commands) -> Result<i32, Box<dyn std::error::Error + Send + Sync>> {
    let (check, dry_run) = match &cmd {
        Commands::Fix { dry_run, .. } => (false, *dry_run),
        Commands::Check { .. } => (true, true),
    };
    let args = cmd.args();

    let cwd = std::env::current_dir()?;
    let file_layer = ConfigLayer::load(args.config.as_deref(), &cwd).await?;
    let config = args.layer(dry_run).merge(file_layer).resolve()?;

    let report = fix_command(&config).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(exit_code(check, &report))
}

/// `check` fails when a file needs escaping or could not be verified
fn exit_code(check: bool, report: &RunReport) -> i32 {
    if !check {
        return 0;
    }
    if report.has_changes() {
        warn!("{} file(s) need quote escaping", report.fixed.len());
    }
    if report.has_failures() {
        warn!("{} file(s) could not be checked", report.failed.len());
    }
    i32::from(report.has_changes() || report.has_failures())
}
