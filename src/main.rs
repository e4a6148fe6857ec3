use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use release_prep::checks::Checks;
use release_prep::cli::orchestration::{run_prepare_workflow, PrepareWorkflowArgs};
use release_prep::{config, ui};

#[derive(clap::Parser)]
#[command(
    name = "release-prep",
    version,
    about = "Promote the Unreleased changelog section and bump manifest versions for a release"
)]
struct Args {
    #[arg(id = "release_version", value_name = "VERSION", help = "Version being released (e.g. 1.2.0 or v1.2.0)")]
    version: String,

    #[arg(help = "Changelogs (.md, .adoc) and manifests (.json) to update [default: configured files]")]
    files: Vec<PathBuf>,

    #[arg(short, long, help = "Release date as YYYY-MM-DD [default: today]")]
    date: Option<String>,

    #[arg(long, value_name = "CHECKS", help = "Comma-separated checks to run (sequential)")]
    checks: Option<Checks>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Preview what would happen without writing files")]
    dry_run: bool,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::max())
            .init();
    } else {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let workflow_args = PrepareWorkflowArgs {
        version: args.version,
        date: args.date,
        files: args.files,
        checks: args.checks.unwrap_or_default(),
        dry_run: args.dry_run,
    };

    if workflow_args.dry_run {
        ui::display_status("Dry run: no files will be written");
    }

    let result = match run_prepare_workflow(&workflow_args, &config) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    ui::display_workflow_result(&result, workflow_args.dry_run);

    if !result.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
