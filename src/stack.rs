use std::fmt;

use crate::value::Operator;

/// An element of the postfix sequence
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// Operand literal: ASCII digits only
    Num(String),
    Op(Operator),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Num(s) => write!(f, "{}", s),
            Token::Op(op) => write!(f, "{}", op),
        }
    }
}

/// Shunting-yard converter from infix to postfix order.
///
/// Operands go straight to the output, operators wait in the queue until an
/// operator with lower or equal priority shows up or the expression ends.
pub(crate) struct Stack {
    queue: Vec<Operator>,
    output: Vec<Token>,
    literal: String,
}

impl Stack {
    // move the digits collected so far to output as a single operand
    fn flush_literal(&mut self) {
        if !self.literal.is_empty() {
            let lit = std::mem::take(&mut self.literal);
            self.output.push(Token::Num(lit));
        }
    }

    // move operators from the queue to output while the top operator in the
    // queue has equal or greater priority
    fn pop_while_priority(&mut self, priority: i32) {
        while let Some(op) = self.queue.pop() {
            if op.priority() >= priority {
                self.output.push(Token::Op(op));
            } else {
                self.queue.push(op);
                return;
            }
        }
    }

    // move all operators from queue to output
    // Must be called only after the expression ends.
    fn pop_all(&mut self) {
        while let Some(op) = self.queue.pop() {
            self.output.push(Token::Op(op));
        }
    }

    // ------------ PUBLIC -----------------

    pub(crate) fn new() -> Self {
        Stack {
            queue: Vec::new(),
            output: Vec::new(),
            literal: String::new(),
        }
    }

    /// Appends digits to the operand being collected
    pub(crate) fn push_digits(&mut self, digits: &str) {
        self.literal.push_str(digits);
    }

    pub(crate) fn push_op(&mut self, op: Operator) {
        self.flush_literal();
        self.pop_while_priority(op.priority());
        self.queue.push(op);
    }

    /// Ends the current operand without pushing anything else. Used for
    /// characters that are neither digits nor operators
    pub(crate) fn break_literal(&mut self) {
        self.flush_literal();
    }

    pub(crate) fn finish(mut self) -> Vec<Token> {
        self.flush_literal();
        self.pop_all();
        self.output
    }
}
