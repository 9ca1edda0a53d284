use anyhow::Context;

use turnstile_api::{app, config::ApiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    turnstile_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    let app = app::build_app(&config).context("failed to set up token signing")?;

    app::routes::log_routes();

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("failed to bind 0.0.0.0:{}", config.port))?;

    tracing::info!("webserver running at http://{}/", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
