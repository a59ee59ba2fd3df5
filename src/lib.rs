pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod import;
pub mod models;

pub use controller::FlashcardSession;
pub use models::{Deck, Flashcard, Phase, SessionState};
