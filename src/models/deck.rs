//! Deck is the shuffled set of flashcards used for one run of the app
use super::Flashcard;
use rand::Rng;
use rand::seq::SliceRandom;

/// Cards used whenever the vocab file can't provide any.
const DEFAULT_CARDS: [(&str, &str); 4] = [
    ("ephemeral", "Lasting for a very short time."),
    ("loquacious", "Tending to talk a great deal; talkative."),
    ("succinct", "Briefly and clearly expressed."),
    ("ubiquitous", "Present, appearing, or found everywhere."),
];

/// Built-in fallback cards, in their fixed order.
pub fn default_cards() -> Vec<Flashcard> {
    DEFAULT_CARDS
        .iter()
        .map(|(term, definition)| Flashcard {
            term: term.to_string(),
            definition: definition.to_string(),
        })
        .collect()
}

#[derive(Clone, Debug, Default)]
pub struct Deck {
    flashcards: Vec<Flashcard>,
}

impl Deck {
    /// Keeps the cards in the order given.
    pub fn in_order(flashcards: Vec<Flashcard>) -> Self {
        Self { flashcards }
    }

    /// Shuffles the cards once; the order is fixed for the rest of the run.
    pub fn shuffled<R: Rng + ?Sized>(mut flashcards: Vec<Flashcard>, rng: &mut R) -> Self {
        flashcards.shuffle(rng);
        Self { flashcards }
    }

    pub fn len(&self) -> usize {
        self.flashcards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flashcards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Flashcard> {
        self.flashcards.get(index)
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.flashcards
    }
}
