use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use portfolio_api::config::Config;
use portfolio_api::llm_client::{self, LlmClient};
use portfolio_api::routes::build_router;
use portfolio_api::state::AppState;
use portfolio_api::store::{seed, ContentStore, MemContentStore, PgContentStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "portfolio_api={},tower_http=info",
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Construct the content store and run the one-time seed
    let store: Arc<dyn ContentStore> = match &config.database_url {
        Some(url) => {
            let store = PgContentStore::connect(url).await?;
            info!("PostgreSQL content store initialized");
            Arc::new(store)
        }
        None => {
            warn!("DATABASE_URL not set; using the in-memory content store");
            Arc::new(MemContentStore::new())
        }
    };
    seed::seed_if_empty(store.as_ref()).await?;

    // Initialize the LLM client; a missing key surfaces at chat time
    if config.openai_api_key.is_none() {
        warn!("OPENAI_API_KEY not set; chat requests will fail until it is provided");
    }
    let llm = LlmClient::new(
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
    );
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let state = AppState { store, llm };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
