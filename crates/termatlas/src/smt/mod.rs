//! Integer constraint expressions for termination obligations
//!
//! Termination processors phrase arithmetic obligations as
//! `IntegerExpression` trees; the external solver backend translates them
//! into its native syntax via `Display` or structural traversal.

pub mod integer_expression;


pub use integer_expression::{ExprError, IntegerExpression};
