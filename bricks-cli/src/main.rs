//! `bricks` - survey platform seeding CLI
//!
//! Starts and stops a local survey platform instance, generates realistic
//! mock data, and seeds it through the platform's REST API with graceful
//! degradation when endpoints are unavailable.

mod commands;
mod docker;
mod generator;
mod logger;
mod store;

use clap::{Parser, Subcommand};
use store::DataStore;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "bricks", version, about = "Survey platform seeding CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the platform locally using Docker
    #[command(alias = "start")]
    Up,
    /// Stop and clean up the local platform instance
    #[command(alias = "stop")]
    Down,
    /// Generate realistic survey, user, and response data
    Generate,
    /// Seed generated data through the platform APIs
    Seed,
    /// Check whether the platform is running
    Status,
    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logger::init();

    let cli = Cli::parse();
    let store = DataStore::new(".");

    match cli.command {
        Commands::Up => commands::lifecycle::up().await,
        Commands::Down => commands::lifecycle::down().await,
        Commands::Generate => commands::generate::run(&store).await,
        Commands::Seed => commands::seed::run(&store).await,
        Commands::Status => commands::lifecycle::status().await,
        Commands::Version => {
            println!("bricks v{VERSION}");
            Ok(())
        }
    }
}
