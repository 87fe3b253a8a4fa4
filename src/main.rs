use anyhow::Context;
use tower_http::cors::CorsLayer;

use chat_api::config::Config;
use chat_api::routes::create_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env();

    // The client is served from a different origin, so all origins are allowed.
    let app = create_router().layer(CorsLayer::very_permissive());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("chat API listening on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
