//! Browser calculator widget with history undo.
//!
//! A text input serves as both expression editor and result display, backed
//! by a clickable keypad and a history panel whose deletions can be
//! recovered. The core (sanitizer, parser, evaluator, history, display) is
//! pure Rust; the widget layer adds a mock DOM so every flow is testable
//! natively, with real browser bindings behind the `wasm` feature.
//!
//! # Example
//!
//! ```rust
//! use webcalc::prelude::*;
//!
//! let mut widget = CalculatorWidget::new();
//! widget.edited("200*15%");
//! widget.evaluate();
//! assert_eq!(widget.display_text(), "30");
//! assert_eq!(widget.history().get(0).unwrap().display(), "200*(15/100) = 30");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod widget;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::display::DisplayBox;
    pub use crate::core::evaluator::{format_number, Evaluator};
    pub use crate::core::history::{HistoryEntry, HistoryLog, NextRecall};
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{CalcError, CalcResult, Operation, ERROR_INDICATOR};
    pub use crate::widget::{
        CalculatorWidget, ConfirmGate, DomElement, DomEvent, KeyOutcome, Keypad, KeypadAction,
        MockDom, ScriptedGate, WidgetDriver,
    };
}
