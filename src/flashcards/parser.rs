use super::{prompt::CARD_SEPARATOR, types::Flashcard};

/// Splits raw completion text into flashcards.
///
/// Each `---` separated segment must trim down to exactly two non-empty
/// lines, question first. Anything else is dropped without error.
pub fn parse_flashcards(text: &str) -> Vec<Flashcard> {
    text.split(CARD_SEPARATOR)
        .filter_map(parse_segment)
        .collect()
}

fn parse_segment(segment: &str) -> Option<Flashcard> {
    let lines: Vec<&str> = segment.trim().lines().collect();
    match lines.as_slice() {
        [question, answer] if !question.trim().is_empty() && !answer.trim().is_empty() => {
            Some(Flashcard::new(*question, *answer))
        }
        _ => None,
    }
}
