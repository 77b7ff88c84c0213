use anyhow::Context;
use cryptogram::config::Settings;
use cryptogram::http::routes::AppState;
use cryptogram::{http, telemetry, Catalog};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::try_init().context("installing tracing subscriber")?;

    let settings = Settings::from_env();
    let state = AppState::default();
    tracing::info!(
        quotes = Catalog::global().len(),
        keys = Catalog::global().key_count(),
        "catalog loaded"
    );

    let app = http::app(state, &settings);

    let listener = tokio::net::TcpListener::bind(settings.addr)
        .await
        .with_context(|| format!("binding {}", settings.addr))?;
    tracing::info!(addr = %settings.addr, "serving puzzles");
    axum::serve(listener, app).await?;
    Ok(())
}
