use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    demandcast_observability::init();

    let port = match std::env::var("PORT") {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("PORT is not a valid port number; using default 5000");
            5000
        }),
        Err(_) => 5000,
    };

    let app = demandcast_api::app::build_app();

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("failed to bind 0.0.0.0:{port}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server exited")?;
    Ok(())
}
