//! Event-level test driver.
//!
//! Wraps the widget, the mock DOM and a scripted confirmation gate so tests
//! exercise full user flows: key presses, clicks, pastes, history rows.

use std::collections::VecDeque;

use crate::widget::controller::{CalculatorWidget, ConfirmGate, KeyOutcome};
use crate::widget::dom::{DomElement, DomEvent, MockDom, CLEAR_HISTORY_ID, DISPLAY_ID, HISTORY_ID, RECOVER_ID};
use crate::widget::keypad::Keypad;

/// Scripted confirmation answers for tests.
///
/// Queued answers are consumed in order; once the queue is empty every
/// prompt is confirmed. Prompts are recorded for assertions.
#[derive(Debug, Default)]
pub struct ScriptedGate {
    answers: VecDeque<bool>,
    prompts: Vec<String>,
}

impl ScriptedGate {
    /// Creates a gate that confirms everything
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the answer for the next prompt
    pub fn push_answer(&mut self, answer: bool) {
        self.answers.push_back(answer);
    }

    /// Prompts seen so far
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl ConfirmGate for ScriptedGate {
    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().unwrap_or(true)
    }
}

/// Drives the widget through DOM events and mirrors state back into the DOM
#[derive(Debug)]
pub struct WidgetDriver {
    widget: CalculatorWidget,
    dom: MockDom,
    keypad: Keypad,
    gate: ScriptedGate,
}

impl Default for WidgetDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetDriver {
    /// Creates a driver over a fresh widget and DOM
    #[must_use]
    pub fn new() -> Self {
        let mut dom = MockDom::calculator_widget();
        let keypad = Keypad::new();
        for elem in keypad.create_elements() {
            dom.register(elem);
        }
        let mut driver = Self {
            widget: CalculatorWidget::new(),
            dom,
            keypad,
            gate: ScriptedGate::new(),
        };
        driver.sync_dom();
        driver
    }

    /// The widget under test
    #[must_use]
    pub fn widget(&self) -> &CalculatorWidget {
        &self.widget
    }

    /// The mock DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// The confirmation gate, for scripting answers
    pub fn gate_mut(&mut self) -> &mut ScriptedGate {
        &mut self.gate
    }

    /// Current display text
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.widget.display_text()
    }

    /// Presses one keyboard key
    pub fn press_key(&mut self, key: &str) -> KeyOutcome {
        self.dom.dispatch(DomEvent::key_press(key));
        let outcome = self.widget.handle_key(key);
        self.sync_dom();
        outcome
    }

    /// Types a string one key at a time; unrecognized keys are dropped
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press_key(&ch.to_string());
        }
    }

    /// Simulates a direct edit of the display input
    pub fn set_input(&mut self, value: &str) {
        self.dom.dispatch(DomEvent::input(DISPLAY_ID, value));
        self.widget.edited(value);
        self.sync_dom();
    }

    /// Pastes into the display input
    pub fn paste(&mut self, text: &str) -> bool {
        self.dom.dispatch(DomEvent::paste(DISPLAY_ID, text));
        let accepted = self.widget.paste(text);
        self.sync_dom();
        accepted
    }

    /// Clicks an element: keypad buttons, history rows and their remove
    /// buttons, the recover and clear-history buttons.
    pub fn click(&mut self, element_id: &str) {
        self.dom.dispatch(DomEvent::click(element_id));
        if let Some(action) = self.keypad.handle_click(element_id) {
            self.widget.apply_action(action);
        } else if element_id == RECOVER_ID {
            // A disabled button does not fire.
            if self.widget.can_recover() {
                self.widget.recover_history();
            }
        } else if element_id == CLEAR_HISTORY_ID {
            self.widget.clear_history(&mut self.gate);
        } else if let Some(index) = parse_row_index(element_id, "history-remove-") {
            self.widget.remove_entry(index);
        } else if let Some(index) = parse_row_index(element_id, "history-") {
            self.widget.select_entry(index);
        }
        self.sync_dom();
    }

    /// Runs the queued deferred recall, as the event loop would
    pub fn flush_deferred(&mut self) -> bool {
        let flushed = self.widget.flush_deferred();
        self.sync_dom();
        flushed
    }

    /// Mirrors widget state into the DOM: display value, history rows,
    /// recover-button disablement, clear-history tooltip.
    pub fn sync_dom(&mut self) {
        let display_text = self.widget.display_text().to_string();
        if let Some(display) = self.dom.get_mut(DISPLAY_ID) {
            display.set_attr("value", &display_text);
        }

        let rows: Vec<DomElement> = self
            .widget
            .history()
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let remove = DomElement::new("button")
                    .with_id(&format!("history-remove-{i}"))
                    .with_text("x")
                    .with_class("remove-btn");
                DomElement::new("li")
                    .with_id(&format!("history-{i}"))
                    .with_text(&entry.display())
                    .with_child(remove)
            })
            .collect();
        self.dom.set_children(HISTORY_ID, rows);

        let can_recover = self.widget.can_recover();
        if let Some(recover) = self.dom.get_mut(RECOVER_ID) {
            recover.set_disabled(!can_recover);
        }

        let has_history = !self.widget.history().is_empty();
        if let Some(clear) = self.dom.get_mut(CLEAR_HISTORY_ID) {
            if has_history {
                clear.set_attr("data-tooltip", "Clears all recorded calculations");
            } else {
                clear.remove_attr("data-tooltip");
            }
        }
    }
}

fn parse_row_index(element_id: &str, prefix: &str) -> Option<usize> {
    element_id.strip_prefix(prefix)?.parse().ok()
}
