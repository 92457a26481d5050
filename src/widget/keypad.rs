//! Keypad layout, button definitions and keyboard mapping.

use crate::core::Operation;
use crate::widget::dom::DomElement;

/// Actions keypad buttons and keyboard keys map to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadAction {
    /// Insert a digit (0-9)
    Digit(u8),
    /// Insert the decimal point
    Decimal,
    /// Insert an arithmetic operator
    Operator(Operation),
    /// Insert the ` mod ` shorthand
    Mod,
    /// Open parenthesis
    OpenParen,
    /// Close parenthesis
    CloseParen,
    /// Evaluate the expression
    Equals,
    /// Square the displayed number
    Square,
    /// Clear the display
    Clear,
    /// Delete before the cursor
    Backspace,
    /// Move the cursor left
    CursorLeft,
    /// Move the cursor right
    CursorRight,
    /// Recall an older history entry
    HistoryPrev,
    /// Recall a newer history entry
    HistoryNext,
}

impl KeypadAction {
    /// The token this action inserts into the display, if any.
    ///
    /// `Mod` inserts ` mod ` with surrounding spaces so the shorthand stays
    /// a separate word next to digits.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10).map(String::from),
            Self::Decimal => Some(".".to_string()),
            Self::Operator(op) => Some(op.symbol().to_string()),
            Self::Mod => Some(" mod ".to_string()),
            Self::OpenParen => Some("(".to_string()),
            Self::CloseParen => Some(")".to_string()),
            _ => None,
        }
    }

    /// The button label
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Mod => "mod".to_string(),
            Self::OpenParen => "(".to_string(),
            Self::CloseParen => ")".to_string(),
            Self::Equals => "=".to_string(),
            Self::Square => "x\u{b2}".to_string(),
            Self::Clear => "C".to_string(),
            Self::Backspace => "\u{232b}".to_string(),
            Self::CursorLeft => "\u{2190}".to_string(),
            Self::CursorRight => "\u{2192}".to_string(),
            Self::HistoryPrev => "prev".to_string(),
            Self::HistoryNext => "next".to_string(),
        }
    }

    fn id_suffix(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => "decimal".to_string(),
            Self::Operator(op) => op_name(*op).to_string(),
            Self::Mod => "mod".to_string(),
            Self::OpenParen => "open-paren".to_string(),
            Self::CloseParen => "close-paren".to_string(),
            Self::Equals => "equals".to_string(),
            Self::Square => "square".to_string(),
            Self::Clear => "clear".to_string(),
            Self::Backspace => "backspace".to_string(),
            Self::CursorLeft => "cursor-left".to_string(),
            Self::CursorRight => "cursor-right".to_string(),
            Self::HistoryPrev => "history-prev".to_string(),
            Self::HistoryNext => "history-next".to_string(),
        }
    }
}

fn op_name(op: Operation) -> &'static str {
    match op {
        Operation::Add => "plus",
        Operation::Subtract => "minus",
        Operation::Multiply => "times",
        Operation::Divide => "divide",
        Operation::Modulo => "percent",
    }
}

/// A keypad button with its grid position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The action this button performs
    pub action: KeypadAction,
    /// DOM element id (`btn-*`)
    pub id: String,
    /// Grid row
    pub row: usize,
    /// Grid column
    pub col: usize,
}

impl KeypadButton {
    /// Creates a button definition at a grid position
    #[must_use]
    pub fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        Self {
            id: format!("btn-{}", action.id_suffix()),
            action,
            row,
            col,
        }
    }
}

/// The widget keypad.
///
/// Layout:
/// ```text
/// [ 7 ] [ 8 ] [ 9 ] [ / ]
/// [ 4 ] [ 5 ] [ 6 ] [ * ]
/// [ 1 ] [ 2 ] [ 3 ] [ - ]
/// [ 0 ] [ . ] [ % ] [ + ]
/// [ ( ] [ ) ] [mod] [ = ]
/// [ C ] [ ⌫ ] [ ← ] [ → ]
/// [ x²] [prev] [next]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard widget keypad
    #[must_use]
    pub fn new() -> Self {
        use KeypadAction as A;
        use Operation as Op;
        let buttons = vec![
            KeypadButton::new(A::Digit(7), 0, 0),
            KeypadButton::new(A::Digit(8), 0, 1),
            KeypadButton::new(A::Digit(9), 0, 2),
            KeypadButton::new(A::Operator(Op::Divide), 0, 3),
            KeypadButton::new(A::Digit(4), 1, 0),
            KeypadButton::new(A::Digit(5), 1, 1),
            KeypadButton::new(A::Digit(6), 1, 2),
            KeypadButton::new(A::Operator(Op::Multiply), 1, 3),
            KeypadButton::new(A::Digit(1), 2, 0),
            KeypadButton::new(A::Digit(2), 2, 1),
            KeypadButton::new(A::Digit(3), 2, 2),
            KeypadButton::new(A::Operator(Op::Subtract), 2, 3),
            KeypadButton::new(A::Digit(0), 3, 0),
            KeypadButton::new(A::Decimal, 3, 1),
            KeypadButton::new(A::Operator(Op::Modulo), 3, 2),
            KeypadButton::new(A::Operator(Op::Add), 3, 3),
            KeypadButton::new(A::OpenParen, 4, 0),
            KeypadButton::new(A::CloseParen, 4, 1),
            KeypadButton::new(A::Mod, 4, 2),
            KeypadButton::new(A::Equals, 4, 3),
            KeypadButton::new(A::Clear, 5, 0),
            KeypadButton::new(A::Backspace, 5, 1),
            KeypadButton::new(A::CursorLeft, 5, 2),
            KeypadButton::new(A::CursorRight, 5, 3),
            KeypadButton::new(A::Square, 6, 0),
            KeypadButton::new(A::HistoryPrev, 6, 1),
            KeypadButton::new(A::HistoryNext, 6, 2),
        ];
        Self { buttons }
    }

    /// Number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// All buttons
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Button at a grid position (the last row is ragged)
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Button by element id
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Maps a click on a button element to its action
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<KeypadAction> {
        self.find_by_id(element_id).map(|b| b.action)
    }

    /// Creates DOM elements for the buttons
    #[must_use]
    pub fn create_elements(&self) -> Vec<DomElement> {
        self.buttons
            .iter()
            .map(|btn| {
                DomElement::new("button")
                    .with_id(&btn.id)
                    .with_text(&btn.action.label())
                    .with_class("keypad-btn")
                    .with_attr("data-row", &btn.row.to_string())
                    .with_attr("data-col", &btn.col.to_string())
            })
            .collect()
    }

    /// Maps a keyboard key (browser `event.key`) to an action.
    ///
    /// Keys outside this map are left to the host's default handling.
    #[must_use]
    pub fn key_to_action(key: &str) -> Option<KeypadAction> {
        let mut chars = key.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            if let Some(d) = ch.to_digit(10) {
                #[allow(clippy::cast_possible_truncation)]
                return Some(KeypadAction::Digit(d as u8));
            }
            if let Some(op) = Operation::from_char(ch) {
                return Some(KeypadAction::Operator(op));
            }
            match ch {
                '.' => return Some(KeypadAction::Decimal),
                '(' => return Some(KeypadAction::OpenParen),
                ')' => return Some(KeypadAction::CloseParen),
                '=' => return Some(KeypadAction::Equals),
                _ => {}
            }
        }
        match key {
            "Enter" => Some(KeypadAction::Equals),
            "Backspace" => Some(KeypadAction::Backspace),
            "Delete" => Some(KeypadAction::Clear),
            "ArrowLeft" => Some(KeypadAction::CursorLeft),
            "ArrowRight" => Some(KeypadAction::CursorRight),
            "ArrowUp" => Some(KeypadAction::HistoryPrev),
            "ArrowDown" => Some(KeypadAction::HistoryNext),
            _ => None,
        }
    }
}
