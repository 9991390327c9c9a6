//! Button symbols. The callback data of every calculator button parses into exactly one [`Symbol`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The four arithmetic operators on the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Plus,
        Operator::Minus,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn as_char(self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Plus),
            '-' => Some(Operator::Minus),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    /// True for `+ - * /`.
    pub fn is_operator(c: char) -> bool {
        Self::from_char(c).is_some()
    }
}

/// A decimal digit, always in `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// `None` for values above 9.
    pub const fn new(value: u8) -> Option<Digit> {
        if value <= 9 {
            Some(Digit(value))
        } else {
            None
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

/// One calculator button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Digit(Digit),
    Operator(Operator),
    Dot,
    /// `C`
    Clear,
    /// `⌫`
    Backspace,
    /// `=`
    Evaluate,
}

const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

impl Symbol {
    /// Every symbol on the keyboard, digits first.
    pub fn all() -> Vec<Symbol> {
        let mut symbols: Vec<Symbol> = (0..=9).map(|d| Symbol::Digit(Digit(d))).collect();
        symbols.extend(Operator::ALL.into_iter().map(Symbol::Operator));
        symbols.extend([Symbol::Dot, Symbol::Clear, Symbol::Backspace, Symbol::Evaluate]);
        symbols
    }

    /// The digit button for `value`, `None` above 9.
    pub fn digit(value: u8) -> Option<Symbol> {
        Digit::new(value).map(Symbol::Digit)
    }

    /// Button label and callback data; inverse of [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::Digit(d) => DIGITS[usize::from(d.0)],
            Symbol::Operator(Operator::Plus) => "+",
            Symbol::Operator(Operator::Minus) => "-",
            Symbol::Operator(Operator::Multiply) => "*",
            Symbol::Operator(Operator::Divide) => "/",
            Symbol::Dot => ".",
            Symbol::Clear => "C",
            Symbol::Backspace => "⌫",
            Symbol::Evaluate => "=",
        }
    }

    /// The character appended to the display for digit, operator and dot symbols.
    pub fn input_char(&self) -> Option<char> {
        match self {
            Symbol::Digit(d) => Some(d.as_char()),
            Symbol::Operator(op) => Some(op.as_char()),
            Symbol::Dot => Some('.'),
            Symbol::Clear | Symbol::Backspace | Symbol::Evaluate => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown calculator symbol: {0:?}")]
pub struct ParseSymbolError(pub String);

impl FromStr for Symbol {
    type Err = ParseSymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbol = match s {
            "C" => Symbol::Clear,
            "⌫" => Symbol::Backspace,
            "=" => Symbol::Evaluate,
            "." => Symbol::Dot,
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Symbol::Digit(Digit(c as u8 - b'0')),
                    (Some(c), None) => match Operator::from_char(c) {
                        Some(op) => Symbol::Operator(op),
                        None => return Err(ParseSymbolError(s.to_string())),
                    },
                    _ => return Err(ParseSymbolError(s.to_string())),
                }
            }
        };
        Ok(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_symbol_parses_from_its_label() {
        for symbol in Symbol::all() {
            assert_eq!(symbol.as_str().parse::<Symbol>(), Ok(symbol));
        }
    }

    #[test]
    fn test_all_has_eighteen_buttons() {
        assert_eq!(Symbol::all().len(), 18);
    }

    #[test]
    fn test_parse_rejects_unknown_data() {
        assert!("".parse::<Symbol>().is_err());
        assert!("12".parse::<Symbol>().is_err());
        assert!("c".parse::<Symbol>().is_err());
        assert!("^".parse::<Symbol>().is_err());
        assert_eq!(
            "x".parse::<Symbol>(),
            Err(ParseSymbolError("x".to_string()))
        );
    }

    #[test]
    fn test_digit_rejects_values_above_nine() {
        assert_eq!(Digit::new(9).map(Digit::value), Some(9));
        assert_eq!(Digit::new(10), None);
        assert_eq!(Symbol::digit(12), None);
        assert_eq!(Symbol::digit(0).unwrap().as_str(), "0");
        assert_eq!(Symbol::digit(9).unwrap().as_str(), "9");
    }

    #[test]
    fn test_input_char() {
        assert_eq!(Symbol::digit(7).unwrap().input_char(), Some('7'));
        assert_eq!(Symbol::Operator(Operator::Divide).input_char(), Some('/'));
        assert_eq!(Symbol::Dot.input_char(), Some('.'));
        assert_eq!(Symbol::Clear.input_char(), None);
    }
}
