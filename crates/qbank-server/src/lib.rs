//! # qbank-server
//!
//! HTTP surface of the question bank catalog.
//!
//! [`AppState`] carries every long-lived component (catalog, user state, image
//! proxy, configuration) into the handlers; [`build_router`] wires the routes
//! and middleware; [`serve`] runs the router on a bound listener until the
//! shutdown future resolves.

pub mod error;
pub mod http;
mod state;

pub use error::ApiError;
pub use http::build_router;
pub use state::AppState;

use tokio::net::TcpListener;
use tracing::info;

/// Serve `state` on `listener` until `shutdown` completes.
///
/// # Errors
///
/// Returns the I/O error that stopped the accept loop.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let router = build_router(state);
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "qbank listening");
    }
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}
