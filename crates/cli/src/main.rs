//! ShopSense CLI - offline recommendations and data checks.
//!
//! # Usage
//!
//! ```bash
//! # Recommendations for user1 as of 8am, from the seed data
//! shopsense recommend --user user1 --hour 8
//!
//! # Report behavior entries that point at unknown products
//! shopsense audit --catalog data/products.json
//! ```
//!
//! # Commands
//!
//! - `recommend` - Print the recommendation bundle for a user as JSON
//! - `audit` - List dangling product references in the seed data

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "shopsense")]
#[command(author, version, about = "ShopSense CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print recommendations for a user from the seed data
    Recommend {
        /// User to recommend for
        #[arg(short, long)]
        user: String,

        /// Hour of day (0-23) for time-based picks; defaults to the local clock
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
        hour: Option<u32>,

        #[command(flatten)]
        data: DataArgs,
    },
    /// Report behavior entries referencing products missing from the catalog
    Audit {
        #[command(flatten)]
        data: DataArgs,
    },
}

/// Locations of the catalog and seed behavior files.
#[derive(Args)]
struct DataArgs {
    /// Product catalog JSON
    #[arg(long, env = "SHOPSENSE_CATALOG_PATH", default_value = "data/products.json")]
    catalog: PathBuf,

    /// Seed behavior JSON
    #[arg(
        long,
        env = "SHOPSENSE_BEHAVIOR_PATH",
        default_value = "data/user_behavior.json"
    )]
    behavior: PathBuf,
}

#[tokio::main]
async fn main() {
    // Pick up SHOPSENSE_* paths from .env before clap reads the environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shopsense_storefront=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Recommend { user, hour, data } => {
            commands::recommend::run(&data.catalog, &data.behavior, &user, hour).await?;
        }
        Commands::Audit { data } => {
            commands::audit::run(&data.catalog, &data.behavior).await?;
        }
    }
    Ok(())
}
