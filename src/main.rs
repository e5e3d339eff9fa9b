// src/main.rs

use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

use timecall::characters::CharacterRoster;
use timecall::config::TimecallConfig;
use timecall::llm::create_shared_client;
use timecall::web::{AppState, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = TimecallConfig::from_env();

    info!("Starting timecall");
    info!("Model: {}", config.gemini_model);
    if config.gemini_api_key.is_empty() {
        warn!("GEMINI_API_KEY is not set - /api/ask will answer with configuration errors");
    }

    let roster = CharacterRoster::builtin();
    info!("Character roster loaded: {} figures", roster.len());

    let http = create_shared_client();
    let bind_address = config.bind_address();

    let state = AppState::new(config, roster, http);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
