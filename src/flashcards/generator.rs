use super::{parser::parse_flashcards, prompt::build_messages, types::Flashcard};
use crate::{
    Error, Result,
    llm::{ChatCompletionRequest, LlmClient},
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Turns a topic into flashcards with a single completion call.
#[derive(Clone)]
pub struct FlashcardGenerator {
    llm_client: Arc<dyn LlmClient>,
}

impl FlashcardGenerator {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self { llm_client }
    }

    pub async fn generate(&self, topic: &str) -> Result<Vec<Flashcard>> {
        let request = ChatCompletionRequest::new(build_messages(topic));

        let response = self.llm_client.create_chat_completion(request).await?;
        let choice = response
            .choices
            .first()
            .ok_or_else(|| Error::llm("Completion returned no choices"))?;

        if let Some(usage) = &response.usage {
            debug!(
                "Completion {} from {} used {} prompt + {} completion = {} tokens",
                response.id,
                response.model,
                usage.prompt_tokens,
                usage.completion_tokens,
                usage.total_tokens
            );
        }

        if choice.finish_reason.as_deref() == Some("length") {
            warn!(
                "Completion {} hit the token limit; trailing cards may be dropped",
                response.id
            );
        }

        Ok(parse_flashcards(choice.message.content.trim()))
    }
}
