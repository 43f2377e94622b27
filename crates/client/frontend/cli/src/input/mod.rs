//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Move focus to the next interactive element.
    FocusNext,
    /// Move focus to the previous interactive element.
    FocusPrev,
    /// Press the focused chip, or advance the focused select.
    Activate,
    /// Choose the next option of the focused select.
    Next,
    /// Choose the previous option of the focused select.
    Previous,
    /// Reload data for the current dataset and filters.
    Refresh,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into dashboard commands.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Tab | KeyCode::Down => KeyAction::FocusNext,
            KeyCode::BackTab | KeyCode::Up => KeyAction::FocusPrev,
            KeyCode::Enter => KeyAction::Activate,
            KeyCode::Right => KeyAction::Next,
            KeyCode::Left => KeyAction::Previous,
            KeyCode::F(5) => KeyAction::Refresh,
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        match raw.to_ascii_lowercase() {
            'q' => KeyAction::Quit,
            'j' => KeyAction::FocusNext,
            'k' => KeyAction::FocusPrev,
            'l' => KeyAction::Next,
            'h' => KeyAction::Previous,
            ' ' => KeyAction::Activate,
            'r' => KeyAction::Refresh,
            _ => KeyAction::None,
        }
    }
}
