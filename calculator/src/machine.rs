//! Expression input state machine.
//!
//! All state lives in the display text passed in: [`apply`] maps `(current text, symbol)` to the next
//! text and never fails. Rejected presses come back as [`NextAction::Unchanged`].

use tracing::debug;

use crate::evaluator::{evaluate, format_result};
use crate::symbol::{Operator, Symbol};

/// Canonical empty display.
pub const EMPTY_DISPLAY: &str = "0";

/// Display text after a failed evaluation.
pub const ERROR_DISPLAY: &str = "Error";

/// What the transport should do with the displayed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextAction {
    /// Nothing to redraw.
    Unchanged,
    /// Show this text with the calculator keyboard re-attached.
    Replace(String),
}

impl NextAction {
    /// The new display text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            NextAction::Unchanged => None,
            NextAction::Replace(text) => Some(text),
        }
    }
}

/// Applies one button press to the current display text.
pub fn apply(current: &str, symbol: Symbol) -> NextAction {
    let current = if current.is_empty() {
        EMPTY_DISPLAY
    } else {
        current
    };

    let candidate = match symbol {
        Symbol::Clear => clear(current),
        Symbol::Backspace => backspace(current),
        Symbol::Evaluate => evaluate_display(current),
        Symbol::Dot => append_dot(current),
        Symbol::Digit(_) | Symbol::Operator(_) => append_input(current, symbol),
    };

    let action = match candidate {
        Some(text) if text != current => NextAction::Replace(text),
        _ => NextAction::Unchanged,
    };
    debug!(current = %current, symbol = %symbol, action = ?action, "Applied symbol");
    action
}

fn clear(current: &str) -> Option<String> {
    if current == EMPTY_DISPLAY {
        return None;
    }
    Some(EMPTY_DISPLAY.to_string())
}

fn backspace(current: &str) -> Option<String> {
    if current == EMPTY_DISPLAY {
        return None;
    }
    let mut text = current.to_string();
    text.pop();
    if text.is_empty() {
        text.push_str(EMPTY_DISPLAY);
    }
    Some(text)
}

fn evaluate_display(current: &str) -> Option<String> {
    if current == EMPTY_DISPLAY {
        return None;
    }
    match evaluate(current) {
        Ok(value) => Some(format_result(value)),
        Err(e) => {
            debug!(expression = %current, error = %e, "Evaluation failed");
            Some(ERROR_DISPLAY.to_string())
        }
    }
}

fn append_dot(current: &str) -> Option<String> {
    if ends_with_operator(current) {
        return None;
    }
    if active_segment(current).contains('.') {
        return None;
    }
    Some(format!("{}.", current))
}

fn append_input(current: &str, symbol: Symbol) -> Option<String> {
    let c = symbol.input_char()?;
    let is_op = Operator::is_operator(c);

    if current == EMPTY_DISPLAY {
        if c == '0' || (is_op && c != '-') {
            return None;
        }
        return Some(c.to_string());
    }

    if is_op && ends_with_operator(current) {
        return None;
    }
    let mut text = current.to_string();
    text.push(c);
    Some(text)
}

fn ends_with_operator(text: &str) -> bool {
    text.chars().last().is_some_and(Operator::is_operator)
}

/// Suffix after the last operator, or the whole text.
fn active_segment(text: &str) -> &str {
    text.rsplit(Operator::is_operator).next().unwrap_or(text)
}

/// Checks the display invariants: non-empty, no adjacent operators, only a leading `-` may start the
/// text, and at most one `.` per segment. The literal [`ERROR_DISPLAY`] is accepted as well.
pub fn is_valid_display(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    if text == ERROR_DISPLAY {
        return true;
    }

    let mut previous_is_op = false;
    for (i, c) in text.chars().enumerate() {
        let is_op = Operator::is_operator(c);
        if is_op && i == 0 && c != '-' {
            return false;
        }
        if is_op && previous_is_op {
            return false;
        }
        previous_is_op = is_op;
    }

    text.split(Operator::is_operator)
        .all(|segment| segment.matches('.').count() <= 1)
}
