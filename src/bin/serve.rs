//! CLI: serve the pipeline parse endpoint.
//!
//! Usage: `serve [--host 127.0.0.1] [--port 8000]`
//!
//! Set RUST_LOG=nodeflow=debug,tower_http=debug for per-request logging.

use std::net::{IpAddr, SocketAddr};
use std::process;

use clap::Parser;
use nodeflow::server;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Serve the pipeline parse endpoint for the node-flow editor.
#[derive(Parser, Debug)]
#[command(name = "serve")]
struct Args {
  /// Address to bind.
  #[arg(long, default_value = "127.0.0.1")]
  host: IpAddr,

  /// Port to bind. The editor frontend expects 8000 by default.
  #[arg(long, default_value_t = 8000)]
  port: u16,
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let args = Args::parse();
  let addr = SocketAddr::new(args.host, args.port);

  if let Err(e) = server::serve(addr).await {
    error!(error = %e, "server exited with error");
    eprintln!("Error: {}", e);
    process::exit(1);
  }
}
