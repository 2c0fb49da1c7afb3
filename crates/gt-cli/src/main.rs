//! # gt CLI entry point
//!
//! Parses command-line arguments, loads the content catalog when the
//! subcommand needs it, and dispatches to the subcommand handlers.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use gt_content::Catalog;
use tracing_subscriber::EnvFilter;

use gt_cli::areas::{run_resolve_area, ResolveAreaArgs};
use gt_cli::audit::{run_audit, AuditArgs};
use gt_cli::generate::{run_generate_states, GenerateStatesArgs};
use gt_cli::list::{run_list, ListArgs};
use gt_cli::load_catalog;
use gt_cli::ping::{run_ping, PingArgs};
use gt_cli::show::{run_show, ShowArgs};

/// Grow Trucking site tooling.
///
/// Inspects the content catalog (partners, truck types, careers, services,
/// case studies, states and freight lanes), audits generated pages, and
/// checks the dispatch backend.
#[derive(Parser, Debug)]
#[command(name = "gt", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Load content YAML from this directory instead of the embedded copy.
    #[arg(long, global = true)]
    content_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the entries of a catalog collection.
    List(ListArgs),

    /// Print one catalog entry as JSON or YAML.
    Show(ShowArgs),

    /// Check state and lane pages against their section outline.
    Audit(AuditArgs),

    /// Write one JSON file per generated state.
    GenerateStates(GenerateStatesArgs),

    /// Print where an /areas-we-serve/... path redirects.
    ResolveArea(ResolveAreaArgs),

    /// Call the dispatch backend's connectivity endpoint.
    Ping(PingArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let content_dir = cli.content_dir.as_deref();
    let result = match &cli.command {
        Commands::List(args) => with_catalog(content_dir, |c| run_list(args, c)),
        Commands::Show(args) => with_catalog(content_dir, |c| run_show(args, c)),
        Commands::Audit(args) => with_catalog(content_dir, |c| run_audit(args, c)),
        Commands::GenerateStates(args) => {
            with_catalog(content_dir, |c| run_generate_states(args, c))
        }
        Commands::ResolveArea(args) => with_catalog(content_dir, |c| run_resolve_area(args, c)),
        Commands::Ping(args) => run_ping(args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn with_catalog(
    content_dir: Option<&Path>,
    run: impl FnOnce(&Catalog) -> anyhow::Result<u8>,
) -> anyhow::Result<u8> {
    let catalog = load_catalog(content_dir)?;
    tracing::debug!(fingerprint = catalog.fingerprint(), "content catalog ready");
    run(&catalog)
}
