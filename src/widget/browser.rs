//! Browser bindings over wasm-bindgen.
//!
//! The host page wires real DOM events to these methods: keydown to
//! `handle_key`, input to `edited`, paste to `paste`, button clicks to
//! `handle_button`, history rows to `select_entry` plus a zero-delay
//! timeout calling `flush_deferred`.

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::widget::controller::{CalculatorWidget, ConfirmGate, KeyOutcome};
use crate::widget::keypad::Keypad;

/// Confirmation via `window.confirm`
#[derive(Debug, Default)]
struct WindowGate;

impl ConfirmGate for WindowGate {
    fn confirm(&mut self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
}

/// The widget as the browser sees it
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserWidget {
    widget: CalculatorWidget,
    keypad: Keypad,
}

#[wasm_bindgen]
impl BrowserWidget {
    /// Creates the widget
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            widget: CalculatorWidget::new(),
            keypad: Keypad::new(),
        }
    }

    /// Current display text
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn display(&self) -> String {
        self.widget.display_text().to_string()
    }

    /// Applies a direct edit of the input's value
    pub fn edited(&mut self, value: &str) {
        self.widget.edited(value);
    }

    /// Handles a keydown; returns true when the host must preventDefault
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.widget.handle_key(key) == KeyOutcome::Consumed
    }

    /// Handles a keypad button click by element id
    pub fn handle_button(&mut self, button_id: &str) {
        if let Some(action) = self.keypad.handle_click(button_id) {
            self.widget.apply_action(action);
        }
    }

    /// Pastes clipboard text; returns false when rejected
    pub fn paste(&mut self, text: &str) -> bool {
        self.widget.paste(text)
    }

    /// Evaluates the display expression
    pub fn evaluate(&mut self) {
        self.widget.evaluate();
    }

    /// Squares the displayed number
    pub fn square(&mut self) {
        self.widget.square();
    }

    /// Removes the history entry at `index`; returns false for a bad index
    pub fn remove_entry(&mut self, index: usize) -> bool {
        self.widget.remove_entry(index)
    }

    /// Clears history behind a `window.confirm` prompt
    pub fn clear_history(&mut self) -> bool {
        self.widget.clear_history(&mut WindowGate)
    }

    /// Restores the last deletion
    pub fn recover_history(&mut self) -> bool {
        self.widget.recover_history()
    }

    /// Whether the recover button should be enabled
    #[must_use]
    pub fn can_recover(&self) -> bool {
        self.widget.can_recover()
    }

    /// Recalls an older history entry into the display
    pub fn history_prev(&mut self) {
        self.widget.history_prev();
    }

    /// Recalls a newer history entry into the display
    pub fn history_next(&mut self) {
        self.widget.history_next();
    }

    /// Queues a clicked history entry for deferred recall
    pub fn select_entry(&mut self, index: usize) -> bool {
        self.widget.select_entry(index)
    }

    /// Applies the queued recall; call from a zero-delay timeout
    pub fn flush_deferred(&mut self) -> bool {
        self.widget.flush_deferred()
    }

    /// Number of history entries
    #[must_use]
    pub fn history_count(&self) -> usize {
        self.widget.history().len()
    }

    /// Rendered text of the history entry at `index`
    #[must_use]
    pub fn history_entry(&self, index: usize) -> Option<String> {
        self.widget.history().get(index).map(|e| e.display())
    }

    /// History entries as JSON
    #[must_use]
    pub fn history_json(&self) -> String {
        self.widget
            .history()
            .to_json()
            .unwrap_or_else(|_| "[]".to_string())
    }
}

impl Default for BrowserWidget {
    fn default() -> Self {
        Self::new()
    }
}

/// Module entry point for the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"calculator widget initialized".into());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_flow() {
        let mut w = BrowserWidget::new();
        assert!(w.handle_key("7"));
        assert!(w.handle_key("*"));
        assert!(w.handle_key("6"));
        assert!(w.handle_key("Enter"));
        assert_eq!(w.display(), "42");
        assert_eq!(w.history_count(), 1);
    }

    #[test]
    fn test_button_flow() {
        let mut w = BrowserWidget::new();
        w.handle_button("btn-5");
        w.handle_button("btn-plus");
        w.handle_button("btn-3");
        w.evaluate();
        assert_eq!(w.display(), "8");
        assert_eq!(w.history_entry(0), Some("5+3 = 8".to_string()));
    }

    #[test]
    fn test_unhandled_key_passes_through() {
        let mut w = BrowserWidget::new();
        assert!(!w.handle_key("Tab"));
    }
}
