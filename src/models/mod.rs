pub mod deck;
pub mod flashcard;
pub mod session;

pub use deck::{Deck, default_cards};
pub use flashcard::Flashcard;
pub use session::{Phase, SessionState};
