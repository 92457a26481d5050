//! Widget layer: controller, keypad, rendering surface and test driver.
//!
//! The mock DOM is always available so the full widget can be tested
//! without a browser; the real bindings live behind the `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod controller;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::BrowserWidget;
pub use controller::{CalculatorWidget, ConfirmGate, KeyOutcome};
pub use dom::{DomElement, DomEvent, MockDom, CLEAR_HISTORY_ID, DISPLAY_ID, HISTORY_ID, RECOVER_ID};
pub use driver::{ScriptedGate, WidgetDriver};
pub use keypad::{Keypad, KeypadAction, KeypadButton};
