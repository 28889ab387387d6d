//! Region CLI - inspect and exercise storefront region catalogs.
//!
//! Commands:
//! - `region validate` - Check a catalog file
//! - `region list` - List configured markets
//! - `region resolve` - Resolve a host the way the storefront does

mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ListArgs, ResolveArgs};

/// Region CLI - Inspect storefront market configuration
#[derive(Parser)]
#[command(name = "region")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Catalog file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the region catalog
    Validate,

    /// List configured markets
    List(ListArgs),

    /// Resolve a host (and optional overrides) to a market
    Resolve(ResolveArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = output::Output::new(cli.verbose, cli.json);

    let result = context::Context::load(cli.config.as_deref(), output.clone()).and_then(|ctx| {
        match cli.command {
            Commands::Validate => commands::validate::run(&ctx),
            Commands::List(args) => commands::list::run(args, &ctx),
            Commands::Resolve(args) => commands::resolve::run(args, &ctx),
        }
    });

    if let Err(e) = result {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
