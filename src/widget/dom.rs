//! Mock DOM for testing the widget without a browser.
//!
//! Mirrors just enough of the real DOM (elements by id, attributes, classes,
//! children, dispatched events) for the driver to observe widget state.

use std::collections::HashMap;

/// A DOM element as the tests see it
#[derive(Debug, Clone, PartialEq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Tag name
    pub tag: String,
    /// Text content
    pub text: String,
    /// Attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates an element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets the ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Adds a child
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Sets the text content
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Sets an attribute
    pub fn set_attr(&mut self, key: &str, value: &str) {
        self.attributes.insert(key.to_string(), value.to_string());
    }

    /// Removes an attribute
    pub fn remove_attr(&mut self, key: &str) {
        self.attributes.remove(key);
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Presence-style `disabled` attribute, as buttons carry it
    pub fn set_disabled(&mut self, disabled: bool) {
        if disabled {
            self.set_attr("disabled", "");
        } else {
            self.remove_attr("disabled");
        }
    }

    /// Whether the element carries the `disabled` attribute
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.attributes.contains_key("disabled")
    }

    /// Whether the element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Events the widget reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click on an element
    Click {
        /// ID of the clicked element
        element_id: String,
    },
    /// Direct edit of an input's value
    Input {
        /// ID of the input element
        element_id: String,
        /// The candidate value after the edit
        value: String,
    },
    /// Key press while the input has focus
    KeyPress {
        /// The key name (browser `event.key` convention)
        key: String,
    },
    /// Paste into an input
    Paste {
        /// ID of the target input
        element_id: String,
        /// Clipboard text
        text: String,
    },
    /// Focus gained
    Focus {
        /// ID of the focused element
        element_id: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates an input event
    #[must_use]
    pub fn input(element_id: &str, value: &str) -> Self {
        Self::Input {
            element_id: element_id.to_string(),
            value: value.to_string(),
        }
    }

    /// Creates a key press event
    #[must_use]
    pub fn key_press(key: &str) -> Self {
        Self::KeyPress {
            key: key.to_string(),
        }
    }

    /// Creates a paste event
    #[must_use]
    pub fn paste(element_id: &str, text: &str) -> Self {
        Self::Paste {
            element_id: element_id.to_string(),
            text: text.to_string(),
        }
    }

    /// Creates a focus event
    #[must_use]
    pub fn focus(element_id: &str) -> Self {
        Self::Focus {
            element_id: element_id.to_string(),
        }
    }
}

/// Element ID of the display input
pub const DISPLAY_ID: &str = "calc-display";
/// Element ID of the history list
pub const HISTORY_ID: &str = "calc-history";
/// Element ID of the recover-history button
pub const RECOVER_ID: &str = "btn-recover-history";
/// Element ID of the clear-history button
pub const CLEAR_HISTORY_ID: &str = "btn-clear-history";

/// Mock DOM: elements by id plus a dispatched-event log
#[derive(Debug, Default)]
pub struct MockDom {
    elements: HashMap<String, DomElement>,
    event_log: Vec<DomEvent>,
    focused: Option<String>,
}

impl MockDom {
    /// Creates an empty DOM
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the calculator widget structure: display input, history list,
    /// recover button (disabled until something is deleted) and clear button.
    #[must_use]
    pub fn calculator_widget() -> Self {
        let mut dom = Self::new();

        let display = DomElement::new("input")
            .with_id(DISPLAY_ID)
            .with_attr("type", "text")
            .with_class("calc-display");

        let history = DomElement::new("ul")
            .with_id(HISTORY_ID)
            .with_class("history-list");

        let mut recover = DomElement::new("button")
            .with_id(RECOVER_ID)
            .with_text("Recover History");
        recover.set_disabled(true);

        let clear_history = DomElement::new("button")
            .with_id(CLEAR_HISTORY_ID)
            .with_text("Clear History");

        dom.register(display);
        dom.register(history);
        dom.register(recover);
        dom.register(clear_history);
        dom
    }

    /// Registers an element for id lookup (ignored without an id)
    pub fn register(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Element by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Mutable element by id
    pub fn get_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Records an event and applies its direct DOM effect
    pub fn dispatch(&mut self, event: DomEvent) {
        match &event {
            DomEvent::Focus { element_id } => {
                self.focused = Some(element_id.clone());
            }
            DomEvent::Input { element_id, value } => {
                if let Some(elem) = self.elements.get_mut(element_id) {
                    elem.set_attr("value", value);
                }
            }
            _ => {}
        }
        self.event_log.push(event);
    }

    /// Dispatched events, oldest first
    #[must_use]
    pub fn events(&self) -> &[DomEvent] {
        &self.event_log
    }

    /// Currently focused element id
    #[must_use]
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Replaces an element's children, updating the id registry
    pub fn set_children(&mut self, parent_id: &str, children: Vec<DomElement>) {
        let old_ids: Vec<String> = self
            .elements
            .get(parent_id)
            .map(|p| {
                p.children
                    .iter()
                    .filter(|c| !c.id.is_empty())
                    .map(|c| c.id.clone())
                    .collect()
            })
            .unwrap_or_default();
        for id in old_ids {
            self.elements.remove(&id);
        }
        for child in &children {
            if !child.id.is_empty() {
                self.elements.insert(child.id.clone(), child.clone());
            }
        }
        if let Some(parent) = self.elements.get_mut(parent_id) {
            parent.children = children;
        }
    }
}
