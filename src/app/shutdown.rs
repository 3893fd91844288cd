//! Graceful shutdown handling.

use tokio_util::sync::CancellationToken;

/// Waits for Ctrl-C (or an external cancel) and then cancels `token`.
///
/// In-flight requests are allowed to finish once the token fires; the server
/// only stops accepting new connections.
pub async fn shutdown_signal(token: CancellationToken) {
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                log::warn!("Failed to listen for shutdown signal: {}", e);
            } else {
                log::info!("Shutdown signal received, draining in-flight requests");
            }
        }
        _ = token.cancelled() => {}
    }
    token.cancel();
}
