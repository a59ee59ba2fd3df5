//! CSV import for vocab files.
//! Reads `term,definition` rows into flashcards and falls back to the
//! built-in cards whenever the file can't be used.

use crate::display::{DialogKind, Notice};
use crate::error::LoadError;
use crate::models::{Flashcard, default_cards};
use ::csv::ReaderBuilder;
use std::fs;
use std::path::Path;

const HEADER_TERMS: [&str; 2] = ["term", "word"];
const HEADER_DEFINITIONS: [&str; 2] = ["definition", "meaning"];

/// Where the cards of a `LoadOutcome` came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardSource {
    File,
    Default,
}

#[derive(Clone, Debug)]
pub struct LoadOutcome {
    pub cards: Vec<Flashcard>,
    pub source: CardSource,
    pub notice: Option<Notice>,
}

/// Reads every valid row of the vocab file, in file order.
///
/// An empty result is reported as `FileMalformed` so callers never get a
/// deck without cards from a file.
pub fn read_cards(path: &Path) -> Result<Vec<Flashcard>, LoadError> {
    let bytes = fs::read(path).map_err(|e| LoadError::from_io(path.to_path_buf(), e))?;
    let text = String::from_utf8(bytes).map_err(|e| LoadError::malformed(path.to_path_buf(), e))?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

    let cards = parse_cards(text).map_err(|e| LoadError::malformed(path.to_path_buf(), e))?;
    if cards.is_empty() {
        return Err(LoadError::malformed(
            path.to_path_buf(),
            "No valid term/definition rows found.",
        ));
    }
    Ok(cards)
}

/// Parses CSV text into flashcards, skipping short rows, blank fields and a
/// header on the first line.
pub fn parse_cards(text: &str) -> Result<Vec<Flashcard>, ::csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    // A leading blank line is a row of its own, so the first record is no longer row 0
    let starts_blank = text.starts_with(['\r', '\n']);

    let mut cards = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() < 2 {
            continue;
        }
        let term = record[0].trim();
        let definition = record[1].trim();

        let first_row = index == 0 && !starts_blank;
        if first_row && is_header(term, definition) {
            continue;
        }

        if let Some(card) = Flashcard::from_fields(term, definition) {
            cards.push(card);
        }
    }
    Ok(cards)
}

fn is_header(term: &str, definition: &str) -> bool {
    let term = term.to_lowercase();
    let definition = definition.to_lowercase();
    HEADER_TERMS.contains(&term.as_str()) && HEADER_DEFINITIONS.contains(&definition.as_str())
}

/// Loads the vocab file, substituting the default cards on any failure.
///
/// A missing file is the normal first-run case and stays silent. Unreadable
/// or malformed files produce one notice for the user.
pub fn load_or_default(path: &Path) -> LoadOutcome {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    match read_cards(path) {
        Ok(cards) => {
            log::info!("Loaded {} cards from {}", cards.len(), path.display());
            LoadOutcome {
                cards,
                source: CardSource::File,
                notice: None,
            }
        }
        Err(e) => {
            match e {
                LoadError::FileAbsent { .. } => {
                    log::debug!("{} not found, using default cards", path.display())
                }
                _ => log::warn!("Couldn't load {}: {}, using default cards", path.display(), e),
            }
            LoadOutcome {
                cards: default_cards(),
                source: CardSource::Default,
                notice: notice_for(&e, &file_name),
            }
        }
    }
}

/// The message shown for a failed load. A missing file gets none.
pub fn notice_for(error: &LoadError, file_name: &str) -> Option<Notice> {
    match error {
        LoadError::FileAbsent { .. } => None,
        LoadError::FileUnreadable { .. } => Some(Notice {
            kind: DialogKind::Warning,
            title: "Vocab file not readable".to_string(),
            message: format!(
                "Couldn't read {} (permission issue).\nUsing default cards.",
                file_name
            ),
        }),
        LoadError::FileMalformed { reason, .. } => Some(Notice {
            kind: DialogKind::Error,
            title: "Error loading vocab".to_string(),
            message: format!(
                "Couldn't load {}.\n\nReason: {}\n\nUsing default cards.",
                file_name, reason
            ),
        }),
    }
}
