use axum::{Router, routing::post};

use crate::{balances, settlements, splits, statistics};

/// The service is stateless: every request carries its own expense set, so
/// the router needs no shared state.
pub(crate) fn router() -> Router {
    Router::new()
        .route("/balances", post(balances::compute))
        .route("/settlement", post(settlements::plan))
        .route("/split", post(splits::equal))
        .route("/summary", post(balances::summary))
        .route("/projection", post(statistics::projection))
        .route("/categories", post(statistics::categories))
}

pub async fn run() {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:3000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(listener: tokio::net::TcpListener) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router()).await
}

pub fn spawn_with_listener(
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
