use super::types::{ErrorResponse, GenerateRequest, GenerateResponse};
use crate::flashcards::FlashcardGenerator;
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<FlashcardGenerator>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

pub async fn generate_flashcards(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected request body: {}", rejection.body_text());
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Invalid request body: {}", rejection.body_text()),
        )
    })?;

    let Some(topic) = request.topic() else {
        return Err(error_response(StatusCode::BAD_REQUEST, "Topic is required"));
    };

    info!("Received flashcard request for topic: {}", topic);

    match state.generator.generate(topic).await {
        Ok(flashcards) => {
            info!(
                "Generated {} flashcards for topic: {}",
                flashcards.len(),
                topic
            );
            Ok(Json(GenerateResponse { flashcards }))
        }
        Err(e) => {
            error!("Failed to generate flashcards for topic {}: {}", topic, e);
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to generate flashcards: {}", e),
            ))
        }
    }
}
