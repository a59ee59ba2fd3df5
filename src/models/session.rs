//! Session state for a run through the deck.
//!
//! `SessionState` is a plain value; every transition takes the state and
//! returns the next one, so the flow can be checked without any window:
//! - `Front`: term shown, definition hidden, answer buttons disabled
//! - `Revealed`: term and definition shown, answer buttons enabled until marked
//! - `Empty`: no cards at all
//!
//! Marking is not limited to once per reveal. Disabling the answer buttons
//! after the first mark is left to the display, so repeated marks all count.

/// Where the session currently is, derived from `SessionState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Empty,
    Front,
    Revealed { marked: bool },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub current_index: Option<usize>,
    pub showing_definition: bool,
    pub answer_buttons_enabled: bool,
    pub completed: u32,
    pub correct: u32,
}

impl SessionState {
    /// Initial state for a deck of `deck_len` cards, already on the first card.
    pub fn start(deck_len: usize) -> Self {
        Self::default().advance(deck_len)
    }

    pub fn phase(&self) -> Phase {
        match self.current_index {
            None => Phase::Empty,
            Some(_) if self.showing_definition => Phase::Revealed {
                marked: !self.answer_buttons_enabled,
            },
            Some(_) => Phase::Front,
        }
    }

    /// Moves to the next card, wrapping after the last one.
    pub fn advance(self, deck_len: usize) -> Self {
        if deck_len == 0 {
            return Self {
                current_index: None,
                showing_definition: false,
                answer_buttons_enabled: false,
                ..self
            };
        }

        let next = match self.current_index {
            Some(index) => (index + 1) % deck_len,
            None => 0,
        };

        Self {
            current_index: Some(next),
            showing_definition: false,
            answer_buttons_enabled: false,
            ..self
        }
    }

    /// Shows the definition of the current card. Only meaningful on the front.
    pub fn reveal(self) -> Self {
        if self.phase() != Phase::Front {
            return self;
        }
        Self {
            showing_definition: true,
            answer_buttons_enabled: true,
            ..self
        }
    }

    /// Counts the revealed card as completed and moves on.
    pub fn confirm_advance(self, deck_len: usize) -> Self {
        if !matches!(self.phase(), Phase::Revealed { .. }) {
            return self;
        }
        Self {
            completed: self.completed + 1,
            ..self
        }
        .advance(deck_len)
    }

    /// Records the user's self-assessment for the revealed card.
    pub fn mark(self, is_correct: bool) -> Self {
        if !matches!(self.phase(), Phase::Revealed { .. }) {
            return self;
        }
        Self {
            correct: if is_correct { self.correct + 1 } else { self.correct },
            answer_buttons_enabled: false,
            ..self
        }
    }

    /// The single reveal/next button: reveal on the front, confirm once revealed.
    pub fn toggle(self, deck_len: usize) -> Self {
        match self.phase() {
            Phase::Front => self.reveal(),
            Phase::Revealed { .. } => self.confirm_advance(deck_len),
            Phase::Empty => self,
        }
    }

    /// Percentage of completed cards marked correct, 0 before any completion.
    pub fn accuracy(&self) -> f64 {
        if self.completed == 0 {
            return 0.0;
        }
        self.correct as f64 / self.completed as f64 * 100.0
    }

    pub fn status_line(&self) -> String {
        format!(
            "Completed: {}   •   Correct: {}   •   Accuracy: {:.1}%",
            self.completed,
            self.correct,
            self.accuracy()
        )
    }
}
