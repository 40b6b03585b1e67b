use tracing::{error, info};

use tokio_diag::{logging, Config, PageComposer, Server};

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Subscriber is not installed yet, so config errors go to stderr
    let config = Config::from_env().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        e
    })?;

    logging::init(&config.logging);

    info!("Starting tokio_diag {}...", tokio_diag::VERSION);
    config.log_summary();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.server.worker_threads())
        .enable_all()
        .build()?;

    runtime.block_on(async_main(config))
}

async fn async_main(config: Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let server = Server::bind(config.server, PageComposer::from_process())?;

    // Handle shutdown gracefully
    tokio::select! {
        result = server.run() => {
            if let Err(e) = result {
                error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutting down...");
        }
    }

    server.trigger_shutdown();
    let drain_timeout = server.drain_timeout();
    if server.wait_for_drain(drain_timeout).await {
        info!("All connections drained");
    }

    Ok(())
}

/// Resolves on Ctrl+C or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
