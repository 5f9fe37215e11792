use anyhow::{Context, Result};
use axum::{routing::get, Router};
use tracing::info;

const ALIVE_BODY: &str = "Bot is alive";

async fn alive() -> &'static str {
    ALIVE_BODY
}

fn router() -> Router {
    Router::new().route("/", get(alive))
}

/// Serve the liveness endpoint for the lifetime of the process. The
/// hosting platform polls `GET /` to confirm the port is open.
pub async fn serve(port: u16) -> Result<()> {
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind liveness endpoint to {addr}"))?;

    info!("Liveness endpoint listening on {addr}");

    axum::serve(listener, router())
        .await
        .context("Liveness endpoint server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_alive_body() {
        assert_eq!(alive().await, "Bot is alive");
    }

    #[tokio::test]
    async fn test_serves_root_over_http() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router()).await.unwrap();
        });

        let response = reqwest::get(format!("http://{addr}/")).await.unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(response.text().await.unwrap(), "Bot is alive");
    }
}
