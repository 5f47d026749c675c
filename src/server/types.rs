use crate::flashcards::Flashcard;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub topic: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub flashcards: Vec<Flashcard>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl GenerateRequest {
    /// The topic as sent, unless it is missing or blank.
    pub fn topic(&self) -> Option<&str> {
        self.topic
            .as_deref()
            .filter(|topic| !topic.trim().is_empty())
    }
}
