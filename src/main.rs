//! Calculadora — HTTP accumulator service entry point.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Load config
//!   3. Init logger at configured level
//!   4. Spawn Ctrl-C → shutdown signal watcher
//!   5. Bind listener and serve until shutdown

use tokio_util::sync::CancellationToken;
use tracing::info;

use calculadora::{config, error::AppError, logger, server};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    // Load .env if present — ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    let config = config::load()?;
    logger::init(&config.log_level)?;

    info!(
        bind = %config.bind,
        log_level = %config.log_level,
        "config loaded"
    );

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("ctrl-c received, shutting down");
            signal_token.cancel();
        }
    });

    server::run(&config.bind, shutdown).await
}
