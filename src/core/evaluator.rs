//! Expression evaluation pipeline.
//!
//! The display string goes through two textual rewrites before parsing:
//! `<integer>%` becomes `(<integer>/100)` and the word `mod` becomes the
//! `%` modulo operator. The rewritten expression is what gets parsed,
//! evaluated and recorded in history.

use std::sync::OnceLock;

use regex::Regex;

use crate::core::parser::{AstNode, Parser};
use crate::core::CalcResult;

fn percent_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)%").expect("valid percent regex"))
}

fn mod_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\bmod\b").expect("valid mod regex"))
}

/// Evaluator for display expressions
#[derive(Debug, Default)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Applies the display-level rewrites: percentage then modulo shorthand.
    #[must_use]
    pub fn prepare(input: &str) -> String {
        let trimmed = input.trim();
        let pct = percent_re().replace_all(trimmed, "($1/100)");
        mod_re().replace_all(&pct, "%").into_owned()
    }

    /// Evaluates an AST node
    pub fn evaluate(&self, node: &AstNode) -> CalcResult<f64> {
        match node {
            AstNode::Number(n) => Ok(*n),
            AstNode::Negate(inner) => Ok(-self.evaluate(inner)?),
            AstNode::BinaryOp { left, op, right } => {
                let left_val = self.evaluate(left)?;
                let right_val = self.evaluate(right)?;
                op.apply(left_val, right_val)
            }
        }
    }

    /// Evaluates an already-rewritten expression string
    pub fn evaluate_str(&self, input: &str) -> CalcResult<f64> {
        let ast = Parser::parse_str(input)?;
        self.evaluate(&ast)
    }

    /// Runs the full display pipeline: rewrite, parse, evaluate.
    ///
    /// Returns the post-transform expression together with the numeric
    /// result; the post-transform expression is what history records.
    pub fn evaluate_display(&self, input: &str) -> CalcResult<(String, f64)> {
        let expression = Self::prepare(input);
        let value = self.evaluate_str(&expression)?;
        Ok((expression, value))
    }
}

/// Formats a result for display, matching the default string representation
/// of a number: no fraction part when the value is integral, otherwise a
/// trimmed decimal expansion.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Negative zero prints as plain "0".
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let formatted = format!("{value:.10}");
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
