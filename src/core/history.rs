//! Calculation history with navigation and undo.
//!
//! Entries are kept newest-first. A navigation cursor walks the log from the
//! most recent entry toward older ones; a recovery buffer holds the last
//! deletion (single entry or a whole-log snapshot) until it is restored.

use serde::{Deserialize, Serialize};

/// A single recorded calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The expression as evaluated (post rewrite)
    pub expression: String,
    /// The formatted result
    pub result: String,
}

impl HistoryEntry {
    /// Creates a new history entry
    #[must_use]
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
        }
    }

    /// Renders the entry for the history panel
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} = {}", self.expression, self.result)
    }
}

/// Outcome of stepping the cursor toward newer entries
#[derive(Debug, Clone, PartialEq)]
pub enum NextRecall {
    /// Cursor moved; recall this expression
    Expression(String),
    /// Stepped past the newest entry; clear the display
    Blank,
    /// No selection to move
    None,
}

/// History log: newest-first entries, navigation cursor, recovery buffer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
    #[serde(skip)]
    cursor: Option<usize>,
    #[serde(skip)]
    recovery: Vec<HistoryEntry>,
}

impl HistoryLog {
    /// Creates an empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no entries are recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index` (0 = most recent)
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// All entries, newest first
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Iterator over entries, newest first
    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    /// Current cursor position, `None` when nothing is selected
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Records a calculation at the front and selects it
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.cursor = Some(0);
    }

    /// Removes the first entry equal to `entry`, keeping it recoverable.
    ///
    /// Returns false when no match exists. The removed entry is appended to
    /// the recovery buffer.
    pub fn remove(&mut self, entry: &HistoryEntry) -> bool {
        let Some(pos) = self.entries.iter().position(|e| e == entry) else {
            return false;
        };
        let removed = self.entries.remove(pos);
        self.recovery.push(removed);
        // Keep the cursor on a valid entry after the removal.
        self.cursor = match self.cursor {
            None => None,
            Some(_) if self.entries.is_empty() => None,
            Some(c) if c > pos => Some(c - 1),
            Some(c) => Some(c.min(self.entries.len() - 1)),
        };
        true
    }

    /// Empties the log, snapshotting it for recovery.
    ///
    /// Replaces any prior recovery buffer with the snapshot. No-op when the
    /// log is already empty.
    pub fn clear(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.recovery = std::mem::take(&mut self.entries);
        self.cursor = None;
    }

    /// True when a deletion is waiting to be recovered
    #[must_use]
    pub fn can_recover(&self) -> bool {
        !self.recovery.is_empty()
    }

    /// Restores the recovery buffer, replacing the current log wholesale.
    ///
    /// Returns false when nothing is recoverable. The buffer is emptied.
    pub fn recover(&mut self) -> bool {
        if self.recovery.is_empty() {
            return false;
        }
        self.entries = std::mem::take(&mut self.recovery);
        self.cursor = Some(0);
        true
    }

    /// Steps the cursor toward older entries.
    ///
    /// Returns the expression at the new position, or `None` when already on
    /// the oldest entry (or the log is empty).
    pub fn select_prev(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let next = match self.cursor {
            None => 0,
            Some(c) if c + 1 < self.entries.len() => c + 1,
            Some(_) => return None,
        };
        self.cursor = Some(next);
        Some(&self.entries[next].expression)
    }

    /// Steps the cursor toward newer entries.
    ///
    /// Stepping past the newest entry deselects and asks the caller to blank
    /// the display, so a following `select_prev` starts over at the front.
    pub fn select_next(&mut self) -> NextRecall {
        match self.cursor {
            Some(0) => {
                self.cursor = None;
                NextRecall::Blank
            }
            Some(c) => {
                self.cursor = Some(c - 1);
                NextRecall::Expression(self.entries[c - 1].expression.clone())
            }
            None => NextRecall::None,
        }
    }

    /// Serializes the entries to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// Rebuilds a log from JSON entries (cursor and recovery start fresh)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<HistoryEntry> = serde_json::from_str(json)?;
        Ok(Self {
            entries,
            cursor: None,
            recovery: Vec::new(),
        })
    }

    /// Renders the whole log as display lines, newest first
    #[must_use]
    pub fn export_formatted(&self) -> String {
        self.entries
            .iter()
            .map(HistoryEntry::display)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
