use server::{get_app, settings::load_settings, startup::build_state};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    info!("Initializing banking support chatbot");

    let settings = load_settings()?;
    let state = Arc::new(build_state(&settings, settings.api_key()).await?);
    let app = get_app(state);

    info!("Routes configured, binding to {}:{}", settings.host, settings.port);
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", settings.host, settings.port)).await?;
    info!("Server started successfully, listening for requests");

    axum::serve(listener, app).await?;

    Ok(())
}
