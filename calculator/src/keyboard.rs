//! Fixed calculator keyboard layout.

use crate::symbol::{Digit, Operator, Symbol};

const fn digit(value: u8) -> Symbol {
    match Digit::new(value) {
        Some(d) => Symbol::Digit(d),
        None => panic!("digit out of range"),
    }
}

const ROW_EDIT: &[Symbol] = &[Symbol::Clear, Symbol::Backspace];
const ROW_123: &[Symbol] = &[
    digit(1),
    digit(2),
    digit(3),
    Symbol::Operator(Operator::Divide),
];
const ROW_456: &[Symbol] = &[
    digit(4),
    digit(5),
    digit(6),
    Symbol::Operator(Operator::Multiply),
];
const ROW_789: &[Symbol] = &[
    digit(7),
    digit(8),
    digit(9),
    Symbol::Operator(Operator::Minus),
];
const ROW_ZERO: &[Symbol] = &[
    digit(0),
    Symbol::Dot,
    Symbol::Operator(Operator::Plus),
];
const ROW_EVALUATE: &[Symbol] = &[Symbol::Evaluate];

/// Six rows: `[C, ⌫]`, `[1,2,3,/]`, `[4,5,6,*]`, `[7,8,9,-]`, `[0,.,+]`, `[=]`.
pub fn layout() -> [&'static [Symbol]; 6] {
    [ROW_EDIT, ROW_123, ROW_456, ROW_789, ROW_ZERO, ROW_EVALUATE]
}
