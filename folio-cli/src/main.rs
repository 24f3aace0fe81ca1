//! Folio - Personal Portfolio Site Host
//!
//! Runs the compiled web UI behind an `/api` reverse proxy to the deployed
//! backend, and carries the one-shot probes used against that deployment.

use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use folio::config::{FileConfig, ServeConfig};
use folio::probe::{self, AuthCommands, ProbeClient};
use folio::server;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Portfolio site host and deployment probes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Port for the web UI
    #[arg(short, long, env = "FOLIO_PORT", global = true)]
    port: Option<u16>,

    /// Backend origin that /api requests and probes are sent to
    #[arg(short, long, env = "FOLIO_UPSTREAM", global = true)]
    upstream: Option<String>,

    /// Don't open the browser automatically
    #[arg(long, global = true)]
    no_browser: bool,

    /// Enable verbose logging
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the UI with the /api proxy (default)
    Serve,

    /// Seed demo projects into the deployed backend
    Seed,

    /// Check the login and token flow
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },

    /// Audit project records for usable image fields
    VerifyImages {
        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Print the admin summary counts
    Summary {
        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Check backend liveness
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ServeConfig::resolve(
        FileConfig::discover()?,
        cli.port,
        cli.upstream.clone(),
        cli.no_browser,
    );
    let probe_client = ProbeClient::new(&config.upstream);

    match cli.command {
        Some(Commands::Serve) | None => {
            serve(&config).await?;
        }
        Some(Commands::Seed) => probe::seed(&probe_client).await?,
        Some(Commands::Auth { command }) => command.execute(&probe_client).await?,
        Some(Commands::VerifyImages { format }) => {
            probe::verify_images(&probe_client, &format).await?
        }
        Some(Commands::Summary { format }) => probe::summary(&probe_client, &format).await?,
        Some(Commands::Health) => probe::health(&probe_client).await?,
    }

    Ok(())
}

async fn serve(config: &ServeConfig) -> anyhow::Result<()> {
    info!("Starting Folio...");

    let ui_url = format!("http://127.0.0.1:{}", config.port);
    let server_handle = server::start_server(config).await?;

    info!("Serving UI at {}", ui_url);
    info!("Proxying /api to {}", config.upstream);

    // Open browser
    if config.open {
        if let Err(e) = open::that(&ui_url) {
            tracing::warn!("Failed to open browser: {}", e);
            info!("Please open {} in your browser", ui_url);
        }
    }

    info!("Press Ctrl+C to stop");

    // Wait for shutdown signal
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutting down...");
        }
        result = server_handle => {
            match result {
                Ok(Err(e)) => tracing::error!("Server error: {}", e),
                Err(e) => tracing::error!("Server task failed: {}", e),
                Ok(Ok(())) => {}
            }
        }
    }

    info!("Folio stopped.");
    Ok(())
}
