//! Session controller: owns the deck and the session state, applies user
//! actions and pushes the result to a `CardDisplay`.

use crate::display::{CardDisplay, Notice};
use crate::import::LoadOutcome;
use crate::models::{Deck, Phase, SessionState};
use rand::Rng;

pub const SHOW_DEFINITION: &str = "Show Definition";
pub const NEXT_CARD: &str = "Next Card";

pub struct FlashcardSession {
    deck: Deck,
    state: SessionState,
    vocab_name: String,
    pending_notice: Option<Notice>,
}

impl FlashcardSession {
    /// Builds the session from a load result. With `shuffle` off the file
    /// order is kept.
    pub fn new<R: Rng + ?Sized>(
        outcome: LoadOutcome,
        vocab_name: impl Into<String>,
        shuffle: bool,
        rng: &mut R,
    ) -> Self {
        let deck = if shuffle {
            Deck::shuffled(outcome.cards, rng)
        } else {
            Deck::in_order(outcome.cards)
        };
        Self::with_deck(deck, vocab_name, outcome.notice)
    }

    pub fn with_deck(deck: Deck, vocab_name: impl Into<String>, notice: Option<Notice>) -> Self {
        let state = SessionState::start(deck.len());
        log::debug!("Session started with {} cards", deck.len());
        Self {
            deck,
            state,
            vocab_name: vocab_name.into(),
            pending_notice: notice,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// First paint. Raises the load notice, if any; it is only ever shown once.
    pub fn start(&mut self, display: &mut impl CardDisplay) {
        if let Some(notice) = self.pending_notice.take() {
            display.show_dialog(notice.kind, &notice.title, &notice.message);
        }

        if self.deck.is_empty() {
            display.show_term("No cards loaded");
            display.show_definition(&format!(
                "Place {} beside this app.\nFormat: term,definition",
                self.vocab_name
            ));
            display.set_primary_button(SHOW_DEFINITION, false);
            display.set_buttons_enabled(false);
            display.show_status(&self.state.status_line());
            return;
        }
        self.render(display);
    }

    /// The reveal/next button.
    pub fn press_primary(&mut self, display: &mut impl CardDisplay) {
        self.state = self.state.toggle(self.deck.len());
        log::trace!("Primary button -> {:?}", self.state.phase());
        self.render(display);
    }

    /// Moves straight to the next card without counting a completion.
    pub fn advance(&mut self, display: &mut impl CardDisplay) {
        self.state = self.state.advance(self.deck.len());
        self.render(display);
    }

    /// "I Got It" / "I Missed It".
    pub fn mark(&mut self, is_correct: bool, display: &mut impl CardDisplay) {
        self.state = self.state.mark(is_correct);
        log::trace!("Marked correct={} -> {:?}", is_correct, self.state);
        self.render(display);
    }

    fn render(&self, display: &mut impl CardDisplay) {
        let card = self.state.current_index.and_then(|i| self.deck.get(i));

        match (self.state.phase(), card) {
            (Phase::Front, Some(card)) => {
                display.show_term(&card.term);
                display.show_definition("");
                display.set_primary_button(SHOW_DEFINITION, true);
                display.set_buttons_enabled(false);
            }
            (Phase::Revealed { .. }, Some(card)) => {
                display.show_term(&card.term);
                display.show_definition(&card.definition);
                display.set_primary_button(NEXT_CARD, true);
                display.set_buttons_enabled(self.state.answer_buttons_enabled);
            }
            _ => {
                display.show_term("No cards available");
                display.show_definition("");
                display.set_primary_button(SHOW_DEFINITION, false);
                display.set_buttons_enabled(false);
            }
        }
        display.show_status(&self.state.status_line());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::DialogKind;
    use crate::import::{CardSource, parse_cards};
    use crate::models::default_cards;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[derive(Default)]
    struct RecordingDisplay {
        term: String,
        definition: String,
        buttons_enabled: bool,
        primary_label: String,
        primary_enabled: bool,
        status: String,
        dialogs: Vec<(DialogKind, String, String)>,
    }

    impl CardDisplay for RecordingDisplay {
        fn show_term(&mut self, text: &str) {
            self.term = text.to_string();
        }
        fn show_definition(&mut self, text: &str) {
            self.definition = text.to_string();
        }
        fn set_buttons_enabled(&mut self, enabled: bool) {
            self.buttons_enabled = enabled;
        }
        fn set_primary_button(&mut self, label: &str, enabled: bool) {
            self.primary_label = label.to_string();
            self.primary_enabled = enabled;
        }
        fn show_status(&mut self, text: &str) {
            self.status = text.to_string();
        }
        fn show_dialog(&mut self, kind: DialogKind, title: &str, message: &str) {
            self.dialogs.push((kind, title.to_string(), message.to_string()));
        }
    }

    fn two_card_session() -> FlashcardSession {
        let cards = parse_cards(
            "ephemeral,Lasting for a very short time.\nloquacious,Tending to talk a great deal.\n",
        )
        .unwrap();
        FlashcardSession::with_deck(Deck::in_order(cards), "vocab.csv", None)
    }

    #[test]
    fn test_start_shows_first_term() {
        let mut session = two_card_session();
        let mut display = RecordingDisplay::default();
        session.start(&mut display);

        assert_eq!(display.term, "ephemeral");
        assert_eq!(display.definition, "");
        assert_eq!(display.primary_label, SHOW_DEFINITION);
        assert!(display.primary_enabled);
        assert!(!display.buttons_enabled);
        assert_eq!(
            display.status,
            "Completed: 0   •   Correct: 0   •   Accuracy: 0.0%"
        );
        assert!(display.dialogs.is_empty());
    }

    #[test]
    fn test_reveal_mark_missed_and_move_on() {
        let mut session = two_card_session();
        let mut display = RecordingDisplay::default();
        session.start(&mut display);

        session.press_primary(&mut display);
        assert_eq!(display.definition, "Lasting for a very short time.");
        assert_eq!(display.primary_label, NEXT_CARD);
        assert!(display.buttons_enabled);

        session.mark(false, &mut display);
        assert!(!display.buttons_enabled);
        assert_eq!(display.definition, "Lasting for a very short time.");

        session.press_primary(&mut display);
        let state = session.state();
        assert_eq!(state.completed, 1);
        assert_eq!(state.correct, 0);
        assert_eq!(state.accuracy(), 0.0);
        assert_eq!(state.current_index, Some(1));
        assert_eq!(display.term, "loquacious");
        assert_eq!(
            display.status,
            "Completed: 1   •   Correct: 0   •   Accuracy: 0.0%"
        );
    }

    #[test]
    fn test_mark_before_reveal_is_ignored() {
        let mut session = two_card_session();
        let mut display = RecordingDisplay::default();
        session.start(&mut display);

        session.mark(true, &mut display);
        assert_eq!(session.state().correct, 0);
        assert_eq!(display.primary_label, SHOW_DEFINITION);
    }

    #[test]
    fn test_notice_raised_once() {
        let outcome = LoadOutcome {
            cards: default_cards(),
            source: CardSource::Default,
            notice: Some(Notice {
                kind: DialogKind::Warning,
                title: "Vocab file not readable".to_string(),
                message: "Couldn't read vocab.csv (permission issue).\nUsing default cards."
                    .to_string(),
            }),
        };
        let mut rng = StdRng::seed_from_u64(42);
        let mut session = FlashcardSession::new(outcome, "vocab.csv", true, &mut rng);
        let mut display = RecordingDisplay::default();

        session.start(&mut display);
        session.start(&mut display);
        assert_eq!(display.dialogs.len(), 1);
        assert_eq!(display.dialogs[0].0, DialogKind::Warning);
        assert_eq!(session.deck().len(), 4);
    }

    #[test]
    fn test_empty_deck_shows_guidance() {
        let mut session = FlashcardSession::with_deck(Deck::default(), "words.csv", None);
        let mut display = RecordingDisplay::default();
        session.start(&mut display);

        assert_eq!(display.term, "No cards loaded");
        assert_eq!(
            display.definition,
            "Place words.csv beside this app.\nFormat: term,definition"
        );
        assert!(!display.primary_enabled);

        session.press_primary(&mut display);
        session.advance(&mut display);
        assert_eq!(display.term, "No cards available");
        assert_eq!(session.state().phase(), Phase::Empty);
    }

    #[test]
    fn test_advance_skips_without_completing() {
        let mut session = two_card_session();
        let mut display = RecordingDisplay::default();
        session.start(&mut display);

        session.press_primary(&mut display);
        session.advance(&mut display);
        assert_eq!(session.state().completed, 0);
        assert_eq!(display.term, "loquacious");
        assert_eq!(display.primary_label, SHOW_DEFINITION);

        session.advance(&mut display);
        assert_eq!(display.term, "ephemeral");
    }
}
