use anyhow::Context;
use dotenvy::dotenv;
use stayvista::logging::init_tracing;
use stayvista::metrics::{init_metrics, metrics_app};
use stayvista::router::init_router;
use stayvista::state::init_app_state;
use stayvista_config::ServerConfig;

#[tokio::main]
async fn main() {
    dotenv().ok();

    if let Err(err) = run().await {
        tracing::error!(error = ?err, "Server failed to start");
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    init_tracing()?;

    let server_config = ServerConfig::from_env()?;
    let state = init_app_state(&server_config).await?;
    let app = init_router(state);

    if let Some(handle) = init_metrics()? {
        let metrics_addr = format!("0.0.0.0:{}", server_config.metrics_port);
        let metrics_listener = tokio::net::TcpListener::bind(&metrics_addr)
            .await
            .with_context(|| format!("failed to bind metrics listener on {metrics_addr}"))?;
        tracing::info!(addr = %metrics_addr, "Metrics available at /metrics");
        tokio::spawn(async move {
            if let Err(err) = axum::serve(metrics_listener, metrics_app(handle)).await {
                tracing::error!(error = %err, "Metrics listener stopped");
            }
        });
    }

    let addr = format!("0.0.0.0:{}", server_config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(port = server_config.port, "StayVista is sitting on port {}", server_config.port);
    tracing::info!("Swagger UI available at http://localhost:{}/swagger-ui", server_config.port);
    tracing::info!("Scalar UI available at http://localhost:{}/scalar", server_config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    tracing::info!("Shutdown signal received");
}
