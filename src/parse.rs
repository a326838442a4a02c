use log::debug;
use pest::Parser;

use crate::errors::*;
use crate::stack::{Stack, Token};
use crate::tree;
use crate::value::*;

#[derive(Parser)]
#[grammar = "calc.pest"]
pub struct CalcParser;

/// Converts an infix expression to postfix order.
///
/// The expression must not contain whitespace. Digits form operands,
/// operators are reordered by priority, any other character ends the current
/// operand and is dropped. No validation is made: `1+` or `+1` are converted
/// as is and rejected later by the tree builder.
pub fn to_postfix(expr: &str) -> Result<Vec<Token>, CalcError> {
    let pairs = match CalcParser::parse(Rule::expr, expr) {
        Ok(p) => p,
        Err(e) => return Err(CalcError::ParseFailed(e.to_string())),
    };

    let mut stk = Stack::new();
    for pair in pairs.flatten() {
        let val = pair.as_str();
        match pair.as_rule() {
            Rule::number => stk.push_digits(val),
            Rule::operator => match val.chars().next().and_then(Operator::from_char) {
                Some(op) => stk.push_op(op),
                None => stk.break_literal(),
            },
            Rule::stray => stk.break_literal(),
            _ => {} // expr, EOI
        }
    }

    let output = stk.finish();
    debug!(
        "postfix of '{}': [{}]",
        expr,
        output.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(",")
    );
    Ok(output)
}

/// Removes all whitespace from an expression
pub fn strip_whitespace(expr: &str) -> String {
    expr.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Evaluates an expression: strips whitespace, converts it to postfix,
/// builds the expression tree and reduces it
pub fn eval(expr: &str) -> CalcResult {
    let cleaned = strip_whitespace(expr);
    let postfix = to_postfix(&cleaned)?;
    let root = tree::build(&postfix)?;
    root.eval()
}
