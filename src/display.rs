//! The display port the session controller drives.
//!
//! Anything that can show a term, a definition, a couple of buttons and a
//! message dialog can host a session; the controller never sees the toolkit.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogKind {
    Warning,
    Error,
}

/// A one-off message for the user, raised while loading the vocab file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
}

pub trait CardDisplay {
    fn show_term(&mut self, text: &str);

    fn show_definition(&mut self, text: &str);

    /// Enables or disables the "I Got It" / "I Missed It" buttons.
    fn set_buttons_enabled(&mut self, enabled: bool);

    /// Label and state of the reveal/next button.
    fn set_primary_button(&mut self, label: &str, enabled: bool);

    fn show_status(&mut self, text: &str);

    fn show_dialog(&mut self, kind: DialogKind, title: &str, message: &str);
}
