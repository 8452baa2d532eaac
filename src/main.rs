use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wg_exporter::clock::{Clock, SystemClock};
use wg_exporter::parse::parse_status;
use wg_exporter::server::{collect, run_server};
use wg_exporter::source::{CommandSource, StatusSource};

#[derive(Parser, Debug)]
#[command(name = "wg-exporter")]
#[command(version, about = "Prometheus exporter for WireGuard peer status")]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:9586")]
    listen_addr: SocketAddr,

    /// Path the metrics are served under
    #[arg(long, default_value = "/metrics")]
    metrics_path: String,

    /// Status command to run for each scrape
    #[arg(long, default_value = "wg show")]
    wg_command: String,

    /// Collect once, print to stdout, and exit
    #[arg(long)]
    once: bool,

    /// With --once, print the records as JSON instead of exposition text
    #[arg(long, requires = "once")]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let source = Arc::new(CommandSource::new(&args.wg_command));
    let clock = Arc::new(SystemClock);

    if args.once {
        return run_once(source.as_ref(), clock.as_ref(), args.json).await;
    }

    let server = tokio::spawn(run_server(
        args.listen_addr,
        args.metrics_path,
        source,
        clock,
    ));

    tokio::select! {
        result = server => result??,
        _ = tokio::signal::ctrl_c() => info!("shutting down"),
    }

    Ok(())
}

async fn run_once(source: &dyn StatusSource, clock: &dyn Clock, json: bool) -> Result<()> {
    if json {
        let raw = source
            .fetch()
            .await
            .ok_or_else(|| anyhow!("no status output available from {}", source.description()))?;
        let records = parse_status(&raw, clock.now())?;
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        println!("{}", collect(source, clock).await?);
    }
    Ok(())
}
