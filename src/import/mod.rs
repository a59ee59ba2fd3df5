pub mod csv;

pub use self::csv::{CardSource, LoadOutcome, load_or_default, notice_for, parse_cards, read_cards};
