//! Overnight worktime server
//!
//! Loads the band configuration and serves the calculation API.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use overnight_worktime::api::{AppState, create_router};
use overnight_worktime::calculation::Rounding;
use overnight_worktime::config::{BandConfig, ConfigLoader};

#[derive(Parser, Debug)]
#[command(name = "overnight-worktime")]
#[command(about = "Serve late-night and early-morning worktime calculations over HTTP")]
struct Args {
    /// YAML file with band hours and rounding; defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides the configured rounding: raw, nearest, ceiling or floor
    #[arg(long)]
    rounding: Option<Rounding>,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("overnight_worktime=info")),
        )
        .init();

    if let Err(e) = run(Args::parse()).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let loader = match &args.config {
        Some(path) => ConfigLoader::load(path)?,
        None => {
            info!("No configuration file given, using default band hours");
            ConfigLoader::with_defaults()
        }
    };

    let loader = match args.rounding {
        Some(rounding) => ConfigLoader::from_config(BandConfig {
            rounding,
            ..*loader.config()
        })?,
        None => loader,
    };

    let router = create_router(AppState::new(loader));
    let listener = TcpListener::bind(args.bind).await?;
    info!(address = %args.bind, "Listening");

    axum::serve(listener, router).await?;
    Ok(())
}
