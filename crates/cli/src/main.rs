mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use product_catalog_core::{CATALOG_PATH_ENV, Catalog};
use product_catalog_http::ProductListQuery;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "product-catalog")]
#[command(about = "Demo product catalog API for RAG experiments", long_about = None)]
struct Cli {
    /// JSON file with the products to serve (defaults to the built-in demo catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(short, long, default_value = "8000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Query the catalog and print the list response
    List {
        #[arg(short, long)]
        q: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        min_price: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        max_price: Option<String>,
        #[arg(long)]
        sort_by: Option<String>,
        #[arg(long)]
        order: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        skip: Option<String>,
        #[arg(short, long, allow_hyphen_values = true)]
        limit: Option<String>,
    },
    /// Print a single product
    Get {
        #[arg(allow_hyphen_values = true)]
        id: i64,
    },
}

fn catalog_path(flag: Option<PathBuf>) -> Option<PathBuf> {
    flag.or_else(|| {
        std::env::var(CATALOG_PATH_ENV).ok().filter(|p| !p.is_empty()).map(PathBuf::from)
    })
}

fn load_catalog(flag: Option<PathBuf>) -> Result<Catalog> {
    match catalog_path(flag) {
        Some(path) => {
            let catalog = Catalog::load(&path)
                .with_context(|| format!("Failed to load catalog: {}", path.display()))?;
            tracing::info!("Loaded {} products from {}", catalog.len(), path.display());
            Ok(catalog)
        },
        None => {
            tracing::info!("No catalog file configured, serving demo catalog");
            Ok(Catalog::demo())
        },
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = load_catalog(cli.catalog)?;

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(catalog, port, host).await?,
        Commands::List { q, min_price, max_price, sort_by, order, skip, limit } => {
            let query =
                ProductListQuery { q, min_price, max_price, sort_by, order, skip, limit };
            commands::query::run_list(&catalog, query)?;
        },
        Commands::Get { id } => commands::query::run_get(&catalog, id)?,
    }

    Ok(())
}
