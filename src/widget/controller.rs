//! The widget controller: display, history and evaluator behind one API.
//!
//! Every user gesture (keypad click, key press, edit, paste, history
//! interaction) goes through `CalculatorWidget`. Errors never escape an
//! operation; failed evaluations render the `Error` indicator instead.

use crate::core::display::DisplayBox;
use crate::core::evaluator::{format_number, Evaluator};
use crate::core::history::{HistoryEntry, HistoryLog, NextRecall};
use crate::core::{CalcError, ERROR_INDICATOR};
use crate::widget::keypad::{Keypad, KeypadAction};

/// Yes/no confirmation before destructive actions.
///
/// The browser build answers with `window.confirm`; tests script it.
pub trait ConfirmGate {
    /// Asks the user; returns true to proceed
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Whether a key press was handled by the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Handled; the host should suppress default handling
    Consumed,
    /// Not a widget key; default handling applies
    Ignored,
}

/// The calculator widget state machine
#[derive(Debug, Default)]
pub struct CalculatorWidget {
    display: DisplayBox,
    history: HistoryLog,
    evaluator: Evaluator,
    pending_recall: Option<String>,
}

impl CalculatorWidget {
    /// Creates a fresh widget
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The display box
    #[must_use]
    pub fn display(&self) -> &DisplayBox {
        &self.display
    }

    /// Current display text
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.display.text()
    }

    /// The history log
    #[must_use]
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Whether a deleted entry or snapshot can be recovered
    #[must_use]
    pub fn can_recover(&self) -> bool {
        self.history.can_recover()
    }

    /// Inserts a token at the display selection.
    ///
    /// Returns false when the operator-adjacency guard refuses it.
    pub fn insert(&mut self, token: &str) -> bool {
        self.display.insert_token(token)
    }

    /// Evaluates the display text.
    ///
    /// On success the display shows the formatted result and the
    /// post-transform expression is recorded in history. On any failure the
    /// display shows the error indicator and history is untouched.
    pub fn evaluate(&mut self) {
        match self.evaluator.evaluate_display(self.display.text()) {
            Ok((expression, value)) => {
                let result = format_number(value);
                self.history.push(HistoryEntry::new(expression, &result));
                self.display.set_text_end(result);
            }
            Err(_) => self.display.set_text_end(ERROR_INDICATOR),
        }
    }

    /// Squares the displayed number. Never writes history.
    pub fn square(&mut self) {
        match self.parse_display_number() {
            Ok(n) => {
                let squared = n * n;
                if squared.is_finite() {
                    self.display.set_text_end(format_number(squared));
                } else {
                    self.display.set_text_end(ERROR_INDICATOR);
                }
            }
            Err(_) => self.display.set_text_end(ERROR_INDICATOR),
        }
    }

    fn parse_display_number(&self) -> Result<f64, CalcError> {
        let text = self.display.text().trim();
        text.parse::<f64>()
            .map_err(|_| CalcError::InvalidNumber(text.to_string()))
    }

    /// Deletes at the display selection
    pub fn backspace(&mut self) {
        self.display.backspace();
    }

    /// Empties the display
    pub fn clear_display(&mut self) {
        self.display.clear();
    }

    /// Applies a direct edit to the display, stripping disallowed chars
    pub fn edited(&mut self, candidate: &str) {
        self.display.apply_edit(candidate);
    }

    /// Pastes clipboard text, all-or-nothing.
    ///
    /// Returns false when the text contains a disallowed char; the display
    /// is then left unchanged.
    pub fn paste(&mut self, text: &str) -> bool {
        self.display.paste(text)
    }

    /// Handles a keyboard key (browser `event.key` convention)
    pub fn handle_key(&mut self, key: &str) -> KeyOutcome {
        match Keypad::key_to_action(key) {
            Some(action) => {
                self.apply_action(action);
                KeyOutcome::Consumed
            }
            None => KeyOutcome::Ignored,
        }
    }

    /// Applies a keypad action
    pub fn apply_action(&mut self, action: KeypadAction) {
        if let Some(token) = action.token() {
            self.insert(&token);
            return;
        }
        match action {
            KeypadAction::Equals => self.evaluate(),
            KeypadAction::Square => self.square(),
            KeypadAction::Clear => self.clear_display(),
            KeypadAction::Backspace => self.backspace(),
            KeypadAction::CursorLeft => self.display.move_left(),
            KeypadAction::CursorRight => self.display.move_right(),
            KeypadAction::HistoryPrev => self.history_prev(),
            KeypadAction::HistoryNext => self.history_next(),
            _ => {}
        }
    }

    /// Removes the history entry at `index` (0 = most recent).
    ///
    /// The removed entry becomes recoverable. Returns false for a bad index.
    pub fn remove_entry(&mut self, index: usize) -> bool {
        let Some(entry) = self.history.get(index).cloned() else {
            return false;
        };
        self.history.remove(&entry)
    }

    /// Clears the whole history behind the confirmation gate.
    ///
    /// A declined confirmation is a full no-op. A confirmed clear snapshots
    /// the log for recovery and empties the display too.
    pub fn clear_history(&mut self, gate: &mut dyn ConfirmGate) -> bool {
        if !gate.confirm("Clear all history?") {
            return false;
        }
        self.history.clear();
        self.display.clear();
        true
    }

    /// Restores the last deletion, replacing the current history wholesale
    pub fn recover_history(&mut self) -> bool {
        self.history.recover()
    }

    /// Recalls an older entry into the display
    pub fn history_prev(&mut self) {
        if let Some(expression) = self.history.select_prev() {
            let expression = expression.to_string();
            self.display.set_text_end(expression);
        }
    }

    /// Recalls a newer entry into the display, blanking past the newest
    pub fn history_next(&mut self) {
        match self.history.select_next() {
            NextRecall::Expression(expression) => self.display.set_text_end(expression),
            NextRecall::Blank => self.display.clear(),
            NextRecall::None => {}
        }
    }

    /// Queues a clicked history entry's expression for deferred recall.
    ///
    /// The display is cleared immediately; the expression lands via
    /// `flush_deferred`, after the current handler returns.
    pub fn select_entry(&mut self, index: usize) -> bool {
        let Some(entry) = self.history.get(index) else {
            return false;
        };
        let expression = entry.expression.clone();
        self.display.clear();
        self.pending_recall = Some(expression);
        true
    }

    /// Runs the queued recall task, if any.
    ///
    /// Returns true when a recall was applied.
    pub fn flush_deferred(&mut self) -> bool {
        match self.pending_recall.take() {
            Some(expression) => {
                self.display.set_text_end(expression);
                true
            }
            None => false,
        }
    }

    /// Whether a recall is queued
    #[must_use]
    pub fn has_pending_recall(&self) -> bool {
        self.pending_recall.is_some()
    }
}
