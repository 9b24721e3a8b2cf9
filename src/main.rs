// TraceToFix - AI-assisted log analysis backend
// Main entry point

use anyhow::Result;
use clap::{Parser, Subcommand};

use tracetofix::config::load_config;
use tracetofix::logs;
use tracetofix::server::AppServer;

#[derive(Parser)]
#[command(name = "tracetofix")]
#[command(about = "Aggregates diagnostic logs and asks Gemini for a diagnosis", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP backend (default)
    Serve,
    /// Seed the log directory with sample log files
    SampleLogs,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up GEMINI_API_KEY etc. from a local .env when present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    // Load configuration
    let config = load_config()?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let server = AppServer::new(config)?;
            server.serve().await
        }
        Commands::SampleLogs => logs::write_samples(&config.log_dir),
    }
}
