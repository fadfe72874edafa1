//! rbridge CLI - configure the R runtime environment and report.
//!
//! Runs the discovery-and-configuration sequence against the real
//! process environment (or a private copy of it with `--dry-run`) and
//! prints the resolved paths, or the remediation hint on failure.

use anyhow::Result;
use clap::Parser;
use rbridge::{ConfigReport, Configurator, MemoryEnv};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "rbridge")]
#[command(about = "Locate an installed R runtime and configure the process environment")]
struct Args {
    /// Resolve paths without mutating the process environment
    #[arg(long)]
    dry_run: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging (stderr, so --json output stays parseable)
    let log_level = if args.debug { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let report = if args.dry_run {
        Configurator::new(MemoryEnv::from_process()).configure()?
    } else {
        rbridge::configure()?
    };

    if args.json {
        // Intentional stdout: scripted callers parse this
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, args.dry_run);
    }

    Ok(())
}

fn print_report(report: &ConfigReport, dry_run: bool) {
    if dry_run {
        println!("dry run: process environment not modified");
    }
    println!("platform:      {}", report.platform);
    println!(
        "R home:        {} ({})",
        report.home.display(),
        if report.home_discovered {
            "discovered"
        } else {
            "from R_HOME"
        }
    );
    println!("rJava package: {}", report.adapter_dir.display());
    println!("JRI libraries: {}", report.native_dir.display());
    println!(
        "{}: {}",
        report.library_path_var,
        if report.library_path_appended {
            "extended"
        } else {
            "already configured"
        }
    );
    if let Some(bin_dir) = &report.os_path_extended {
        println!("Path:          extended with {}", bin_dir.display());
    }
}
