//! # Keypad calculator
//!
//! The calculator evaluates a flat infix expression typed on a keypad:
//! non-negative integer literals joined by `+`, `-`, `*` and `/`. There are
//! no brackets and no unary minus.
//!
//! Evaluation goes through three steps:
//! * the expression is converted to postfix order with the shunting-yard
//!   algorithm: `1+2*3` -> `1 2 3 * +`
//! * the postfix sequence is turned into a binary expression tree
//! * the tree is reduced to a single float number
//!
//! Operators (starting from highest priority):
//! * `*`, `/` - multiplication, division
//! * `+`, `-` - addition, subtraction
//!
//! Operators with equal priority are evaluated from left to right: `8-3-2`
//! is `3`. Division by zero is not an error, it results in `Infinity` or
//! `NaN`.
//!
//! A [`session::Session`] keeps the text typed so far and the history of
//! successful evaluations. A failed evaluation, e.g. `1+`, replaces the
//! text with `ERROR`. [`keypad::Keypad`] maps key presses to a session and
//! draws the result on a [`keypad::Screen`].
//!
//! ```
//! use keycalc::session::Session;
//!
//! let mut s = Session::new();
//! for c in "12+3*2".chars() {
//!     s.append_char(c);
//! }
//! s.evaluate();
//! assert_eq!(s.buffer(), "18");
//! assert_eq!(s.view_history().to_string(), "History:\n12+3*2 = 18");
//! ```

#[macro_use]
extern crate pest_derive;

pub mod errors;
pub mod keypad;
pub mod parse;
pub mod session;
pub mod stack;
pub mod tree;
pub mod value;
