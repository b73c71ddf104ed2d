use clap::Parser;
use dotenvy::dotenv;
use split_buddy::cli::{self, Cli};
use split_buddy::errors::Result;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Parse the command line first; verbosity feeds the log filter
    let cli = Cli::parse();

    // 2. Initialize tracing (as early as possible)
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("split_buddy=debug,info"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // 3. Load .env file; env vars can also be set externally
    dotenv().ok();
    debug!("Attempted to load .env file.");

    // 4. Dispatch to the subcommand handlers
    cli::run(cli).await
}
