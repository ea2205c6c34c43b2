use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rosterdb::dispatch::Dispatcher;
use rosterdb::store::Store;
use rosterdb::web;

/// In-memory school records server.
#[derive(Debug, Parser)]
#[command(name = "rosterdb", version, about)]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "0.0.0.0:8080")]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let dispatcher = Dispatcher::new(Arc::new(Store::new()));
    info!(listen = %args.listen, "starting rosterdb");
    web::serve(args.listen, dispatcher).await?;
    Ok(())
}
