//! Single-line text buffer driven by key presses.

/// Editable text driven by key presses.
///
/// Typed newlines and other control characters are dropped so key presses
/// never add rows. Seeded text is kept verbatim, since it usually comes from
/// the server and is sent back unchanged when the user edits nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
}

impl TextInput {
    /// Creates an input seeded with `text`, exactly as given.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_owned(),
        }
    }

    /// Returns the current text.
    #[must_use]
    pub const fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Returns whether the text is empty or whitespace only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Appends one character, ignoring control characters.
    pub fn push_char(&mut self, character: char) {
        if character.is_control() {
            return;
        }
        self.text.push(character);
    }

    /// Removes the last character, if present.
    pub fn backspace(&mut self) {
        let _ = self.text.pop();
    }

    /// Clears the text.
    pub fn clear(&mut self) {
        self.text.clear();
    }
}
