use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use messenger_admin::{config::Config, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("messenger_admin=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env();
    if !config.page_token_configured() {
        tracing::warn!("FB_PAGE_ACCESS_TOKEN is not set, the Graph API will reject outbound sends");
    }
    if !config.verify_token_configured() {
        tracing::warn!("FB_VERIFY_TOKEN is not set");
    }

    let bind_addr = config.bind_addr.clone();
    let state = Arc::new(AppState::new(config)?);

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("messenger admin running at http://{bind_addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
