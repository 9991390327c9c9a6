//! # calculator
//!
//! The calculator core: a pure state machine that takes the currently displayed expression and one
//! pressed [`Symbol`] and returns the next display text ([`NextAction`]). Evaluation is delegated to
//! `evalexpr`; the fixed button layout lives in [`keyboard`].
//!
//! ```
//! use calculator::{apply, NextAction, Symbol};
//!
//! let next = apply("1+2", Symbol::Evaluate);
//! assert_eq!(next, NextAction::Replace("3".to_string()));
//! ```

pub mod evaluator;
pub mod keyboard;
mod machine;
mod symbol;

pub use evaluator::{evaluate, format_result, EvalError};
pub use machine::{apply, is_valid_display, NextAction, EMPTY_DISPLAY, ERROR_DISPLAY};
pub use symbol::{Digit, Operator, ParseSymbolError, Symbol};
