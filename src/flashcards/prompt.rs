use crate::llm::ChatMessage;

pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that generates educational flashcards.";

/// Number of cards requested from the model.
pub const FLASHCARD_COUNT: usize = 5;

pub const CARD_SEPARATOR: &str = "---";

pub fn user_prompt(topic: &str) -> String {
    format!(
        "Generate {FLASHCARD_COUNT} flashcards about '{topic}'. Each flashcard should be structured as:\n\
         Question: <question>\n\
         Answer: <answer>\n\
         Separate each flashcard with '{CARD_SEPARATOR}'."
    )
}

pub fn build_messages(topic: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(user_prompt(topic)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_user_prompt_template() {
        assert_eq!(
            user_prompt("Rust ownership"),
            "Generate 5 flashcards about 'Rust ownership'. Each flashcard should be structured as:\n\
             Question: <question>\nAnswer: <answer>\nSeparate each flashcard with '---'."
        );
    }

    #[test]
    fn test_build_messages_roles() {
        let messages = build_messages("photosynthesis");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], ChatMessage::system(SYSTEM_PROMPT));
        assert_eq!(messages[1].role, "user");
        assert!(messages[1].content.contains("'photosynthesis'"));
    }
}
