mod generator;
mod parser;
pub mod prompt;
mod types;

pub use generator::FlashcardGenerator;
pub use parser::parse_flashcards;
pub use types::Flashcard;
