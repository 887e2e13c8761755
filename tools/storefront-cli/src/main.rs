//! Storefront CLI - terminal front end for the dropmart catalog engine.
//!
//! Commands:
//! - `storefront list` - filter and sort the product catalog
//! - `storefront cart` - select products and show the running cart estimate
//!
//! The CLI plays the presentation layer's role: it owns the filter
//! configuration and the selection set, loads the product collection once,
//! and renders whatever the engine derives.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CartArgs, ListArgs};

/// Storefront CLI - browse the dropmart catalog from the terminal
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a product collection JSON file (bundled catalog by default)
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter and sort the product catalog
    List(ListArgs),

    /// Select products and show the running cart estimate
    Cart(CartArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "storefront=debug"
    } else {
        "storefront=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let out = output::Output::new(cli.verbose);
    let products = commands::load_catalog(cli.catalog.as_deref())?;

    let result = match cli.command {
        Commands::List(args) => commands::list(args, &products, &out),
        Commands::Cart(args) => commands::cart(args, &products, &out),
    };

    if let Err(e) = result {
        out.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
