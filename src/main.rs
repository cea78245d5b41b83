use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use release_stamp::cli::{run_stamp_workflow, run_verify_workflow, StampWorkflowArgs};
use release_stamp::{config, ui};

#[derive(clap::Parser)]
#[command(
    name = "release-stamp",
    about = "Write a version file derived from git branches and tags"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Path to the git repository")]
    repo: Option<PathBuf>,

    #[arg(long, help = "Major version component")]
    major: Option<u64>,

    #[arg(long, help = "Minor version component")]
    minor: Option<u64>,

    #[arg(long, help = "Micro version component")]
    micro: Option<u64>,

    #[arg(long, help = "Override the release flag derived from the repository")]
    released: Option<bool>,

    #[arg(short, long, help = "Destination of the generated version file")]
    output: Option<PathBuf>,

    #[arg(long, help = "Prefix of version tags")]
    tag_prefix: Option<String>,

    #[arg(long, help = "Print the version file without writing it")]
    dry_run: bool,

    #[arg(long, help = "Check an existing version file against the repository")]
    verify: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    // RUST_LOG controls diagnostics; stderr keeps stdout clean for the preview
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    if args.version {
        println!("release-stamp {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let workflow_args = StampWorkflowArgs {
        repo_path: args.repo,
        major: args.major,
        minor: args.minor,
        micro: args.micro,
        released: args.released,
        output: args.output,
        tag_prefix: args.tag_prefix,
        dry_run: args.dry_run,
    };

    if args.verify {
        let report = match run_verify_workflow(&workflow_args, &config) {
            Ok(report) => report,
            Err(e) => {
                ui::display_error(&format!("{:#}", e));
                std::process::exit(1);
            }
        };

        ui::display_report(&report);
        if !report.is_clean() {
            std::process::exit(1);
        }
        return Ok(());
    }

    let result = match run_stamp_workflow(&workflow_args, &config) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    for warning in &result.warnings {
        ui::display_boundary_warning(warning);
    }

    ui::display_artifact(&result.artifact);

    if result.written {
        ui::display_success(&format!(
            "Wrote {} to {}",
            result.artifact.full_version,
            result.destination.display()
        ));
    } else {
        ui::display_rendered(&result.artifact.render());
        ui::display_status(&format!(
            "Dry run: {} not written",
            result.destination.display()
        ));
    }

    Ok(())
}
