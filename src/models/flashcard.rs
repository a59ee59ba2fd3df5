//! Flashcard is a pair <term, definition>. Only text is used in terms and definitions
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Flashcard {
    pub term: String,
    pub definition: String,
}

impl Flashcard {
    /// Builds a card from raw fields, trimming both.
    /// Returns `None` when either side is blank.
    pub fn from_fields(term: &str, definition: &str) -> Option<Self> {
        let term = term.trim();
        let definition = definition.trim();
        if term.is_empty() || definition.is_empty() {
            return None;
        }
        Some(Self {
            term: term.to_string(),
            definition: definition.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flashcard_trims_fields() {
        let card =
            Flashcard::from_fields("  ephemeral ", "\tLasting for a very short time. ").unwrap();

        assert_eq!(card.term, "ephemeral");
        assert_eq!(card.definition, "Lasting for a very short time.");
    }

    #[test]
    fn test_flashcard_rejects_blank_fields() {
        assert!(Flashcard::from_fields("   ", "something").is_none());
        assert!(Flashcard::from_fields("term", "").is_none());
        assert!(Flashcard::from_fields("", "").is_none());
    }

    #[test]
    fn test_flashcard_clone() {
        let card1 = Flashcard::from_fields("hello", "cześć").unwrap();

        let card2 = card1.clone();
        assert_eq!(card1, card2);
    }
}
