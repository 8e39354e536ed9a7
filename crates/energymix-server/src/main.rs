// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of EnergyMix.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use energymix_server::config::ServerConfig;
use energymix_server::routes;
use energymix_server::state::AppState;

#[derive(Debug, Parser)]
#[command(name = "energymix-server", version, about = "Generation mix and clean-window API")]
struct Args {
    /// Path to a TOML configuration file; built-in defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listening port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new("energymix_server=info,energymix_carbon=info")
            }),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            info!(path = %path.display(), "Loading configuration");
            ServerConfig::from_file(path)?
        }
        None => {
            info!("No configuration file given, using defaults");
            ServerConfig::default()
        }
    };
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let client = config.upstream.build_client()?;
    info!(base_url = client.base_url(), "Carbon Intensity client ready");

    let state = AppState::new(Arc::new(client));
    let app = routes::router(state, routes::cors_layer(&config.cors)?);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("EnergyMix server listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
