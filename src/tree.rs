//! Binary expression tree built from a postfix sequence.

use std::fmt;

use log::warn;

use crate::errors::*;
use crate::stack::Token;
use crate::value::*;

/// A node of the expression tree. Operator nodes own both children, so a
/// node with a single child cannot exist
#[derive(Clone, Debug, PartialEq)]
pub enum ExprNode {
    /// Operand literal, parsed when the tree is evaluated
    Leaf(String),
    Apply {
        op: Operator,
        left: Box<ExprNode>,
        right: Box<ExprNode>,
    },
}

impl ExprNode {
    pub fn is_leaf(&self) -> bool {
        matches!(self, ExprNode::Leaf(..))
    }

    /// Reduces the tree to a single number, left subtree first
    pub fn eval(&self) -> CalcResult {
        match self {
            ExprNode::Leaf(lit) => from_str_float(lit),
            ExprNode::Apply { op, left, right } => {
                let l = left.eval()?;
                let r = right.eval()?;
                Ok(op.apply(l, r))
            }
        }
    }
}

// prints fully parenthesized infix form, e.g. `(1 + (2 * 3))`
impl fmt::Display for ExprNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExprNode::Leaf(lit) => write!(f, "{}", lit),
            ExprNode::Apply { op, left, right } => write!(f, "({} {} {})", left, op, right),
        }
    }
}

/// Builds the expression tree from tokens in postfix order.
///
/// Operands become leaves. An operator takes the two most recent nodes: the
/// earlier one becomes its left child, the later one its right child.
pub fn build(postfix: &[Token]) -> Result<ExprNode, CalcError> {
    let mut nodes: Vec<ExprNode> = Vec::new();

    for token in postfix {
        match token {
            Token::Num(lit) => nodes.push(ExprNode::Leaf(lit.clone())),
            Token::Op(op) => {
                let (right, left) = match (nodes.pop(), nodes.pop()) {
                    (Some(r), Some(l)) => (r, l),
                    _ => {
                        warn!("Not enough operands for operator '{}'", op);
                        return Err(CalcError::InsufficientOperands(*op));
                    }
                };
                nodes.push(ExprNode::Apply {
                    op: *op,
                    left: Box::new(left),
                    right: Box::new(right),
                });
            }
        }
    }

    if nodes.len() != 1 {
        warn!("Invalid expression: {} nodes left", nodes.len());
        return Err(CalcError::MalformedExpression(nodes.len()));
    }

    // exactly one node left
    nodes.pop().ok_or(CalcError::MalformedExpression(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(s: &str) -> Token {
        Token::Num(s.to_string())
    }

    #[test]
    fn test_build_order() {
        // 1 + 2 * 3
        let tree = build(&[num("1"), num("2"), num("3"), Token::Op(Operator::Mul), Token::Op(Operator::Add)]);
        let tree = tree.expect("valid postfix");
        assert_eq!(tree.to_string(), "(1 + (2 * 3))");
        assert_eq!(tree.eval(), Ok(7.0));
    }

    #[test]
    fn test_left_is_earlier() {
        // 8 3 - : left is 8, right is 3
        let tree = build(&[num("8"), num("3"), Token::Op(Operator::Sub)]).expect("valid postfix");
        match &tree {
            ExprNode::Apply { op, left, right } => {
                assert_eq!(*op, Operator::Sub);
                assert_eq!(**left, ExprNode::Leaf("8".to_string()));
                assert_eq!(**right, ExprNode::Leaf("3".to_string()));
            }
            ExprNode::Leaf(..) => panic!("operator node expected"),
        }
        assert_eq!(tree.eval(), Ok(5.0));
    }

    #[test]
    fn test_single_leaf() {
        let tree = build(&[num("42")]).expect("valid postfix");
        assert!(tree.is_leaf());
        assert_eq!(tree.eval(), Ok(42.0));
    }

    #[test]
    fn test_insufficient_operands() {
        assert_eq!(
            build(&[num("1"), Token::Op(Operator::Add)]),
            Err(CalcError::InsufficientOperands(Operator::Add))
        );
        assert_eq!(
            build(&[Token::Op(Operator::Div)]),
            Err(CalcError::InsufficientOperands(Operator::Div))
        );
    }

    #[test]
    fn test_malformed() {
        assert_eq!(build(&[]), Err(CalcError::MalformedExpression(0)));
        assert_eq!(build(&[num("2"), num("5")]), Err(CalcError::MalformedExpression(2)));
    }

    #[test]
    fn test_division_by_zero() {
        let tree = build(&[num("1"), num("0"), Token::Op(Operator::Div)]).expect("valid postfix");
        assert_eq!(tree.eval(), Ok(f64::INFINITY));
        let tree = build(&[num("0"), num("0"), Token::Op(Operator::Div)]).expect("valid postfix");
        assert!(tree.eval().map(f64::is_nan).unwrap_or(false));
    }

    #[test]
    fn test_bad_leaf() {
        let tree = ExprNode::Leaf("abc".to_string());
        assert_eq!(tree.eval(), Err(CalcError::StrToFloat("abc".to_string())));
    }
}
