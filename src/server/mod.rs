pub mod handlers;
pub mod types;

use crate::{
    Result,
    config::{Config, CorsConfig},
    flashcards::FlashcardGenerator,
    llm::OpenAiClient,
};
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::post,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

pub use handlers::AppState;

pub async fn run(config: Config) -> Result<()> {
    let llm_client = OpenAiClient::new(config.llm.clone());
    info!("Using completion model: {}", llm_client.model());

    let app_state = AppState {
        generator: Arc::new(FlashcardGenerator::new(Arc::new(llm_client))),
    };

    let app = router(app_state, &config.server.cors);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .route("/generate", post(handlers::generate_flashcards))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors))
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let allow_origin = if config.allows_any_origin() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::POST, Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
