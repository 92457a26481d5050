//! Input sanitizer: restricts editable text to the calculator's character set.
//!
//! Two modes, matching the two edit paths of the surface:
//! direct edits are repaired in place (disallowed characters stripped,
//! order preserved); pastes are all-or-nothing.

/// Characters the display accepts: digits, operators, dot, parens, space.
pub const ALLOWED_CHARS: &str = "0123456789+-*/%.() ";

/// Returns true if the character is in the allowed set
#[must_use]
pub fn is_allowed(ch: char) -> bool {
    ALLOWED_CHARS.contains(ch)
}

/// Returns true if the whole string passes the whitelist
#[must_use]
pub fn is_clean(text: &str) -> bool {
    text.chars().all(is_allowed)
}

/// Removes disallowed characters, preserving the order of the rest.
///
/// Applied after a direct edit leaves the display in an invalid state.
#[must_use]
pub fn strip(text: &str) -> String {
    text.chars().filter(|&c| is_allowed(c)).collect()
}

/// Paste gate: a paste is accepted only if the clipboard text as a whole
/// passes the whitelist; otherwise it is rejected with no partial insertion.
#[must_use]
pub fn accepts_paste(text: &str) -> bool {
    is_clean(text)
}
