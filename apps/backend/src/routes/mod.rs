pub mod export;
pub mod flashcards;
