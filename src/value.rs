use std::fmt;

use crate::errors::*;

/// Expression calculation result: either value or error
pub type CalcResult = Result<f64, CalcError>;

/// The four binary operators the keypad offers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Returns the operator for a keypad character, `None` for anything else
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Binding strength: multiplication and division bind tighter than
    /// addition and subtraction. All operators are left associative
    pub fn priority(self) -> i32 {
        match self {
            Operator::Mul | Operator::Div => 2,
            Operator::Add | Operator::Sub => 1,
        }
    }

    /// Applies the operator to two operands. Division by zero is not
    /// checked: it produces an infinity or NaN
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Sub => left - right,
            Operator::Mul => left * right,
            Operator::Div => left / right,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Converts an operand literal to a number
pub fn from_str_float(s: &str) -> CalcResult {
    s.parse::<f64>().map_err(|_| CalcError::StrToFloat(s.to_string()))
}

/// Formats a result for the display: the shortest string that round-trips,
/// without a trailing `.0`. Non-finite values are spelled out the way a
/// browser prints them (`Infinity`, `-Infinity`, `NaN`)
pub fn format_f64(g: f64) -> String {
    if g.is_nan() {
        return "NaN".to_string();
    }
    if g.is_infinite() {
        return if g > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // covers negative zero too
    if g == 0.0 {
        return "0".to_string();
    }

    let mut buf = dtoa::Buffer::new();
    let s = buf.format_finite(g);
    s.strip_suffix(".0").unwrap_or(s).to_string()
}
