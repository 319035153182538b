//! Integer constraint expressions
//!
//! An `IntegerExpression` is an n-ary arithmetic tree built from constants
//! and symbolic unknowns. Sums and products are kept flat: the binary
//! constructors splice same-operator children in place, so an `Addition`
//! never has an `Addition` child. The solver-dispatch layer walks these
//! trees through `num_children`/`query_child` or renders them with
//! `Display`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Errors from expression traversal and evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// A `query_child` index outside `1..=num_children()`
    ChildIndexOutOfRange { index: usize, arity: usize },
    /// `evaluate` reached a symbolic variable
    UnresolvedVariable(u32),
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprError::ChildIndexOutOfRange { index, arity } => {
                write!(f, "child index {} out of range 1..={}", index, arity)
            }
            ExprError::UnresolvedVariable(i) => {
                write!(f, "cannot evaluate expression containing i{}", i)
            }
        }
    }
}

impl std::error::Error for ExprError {}

/// An integer arithmetic expression: constants, symbolic unknowns, and flat
/// n-ary sums and products.
///
/// Equality is structural and order-sensitive: children are compared
/// pairwise in order, never as a multiset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntegerExpression {
    /// An integer constant
    Value(i64),
    /// A symbolic integer unknown, identified by a non-negative index
    Var(u32),
    /// An n-ary sum
    Addition(Vec<IntegerExpression>),
    /// An n-ary product
    Multiplication(Vec<IntegerExpression>),
}

impl IntegerExpression {
    /// The sum of two expressions. An operand that is itself an `Addition`
    /// contributes its children in place, keeping the result flat.
    pub fn add(left: IntegerExpression, right: IntegerExpression) -> IntegerExpression {
        let mut children = Vec::new();
        for operand in [left, right] {
            match operand {
                IntegerExpression::Addition(inner) => children.extend(inner),
                other => children.push(other),
            }
        }
        IntegerExpression::Addition(children)
    }

    /// The sum of an explicit child sequence, used verbatim (the caller
    /// guarantees the children are already flat).
    pub fn add_all(children: Vec<IntegerExpression>) -> IntegerExpression {
        IntegerExpression::Addition(children)
    }

    /// The product of two expressions. An operand that is itself a
    /// `Multiplication` contributes its children in place.
    pub fn mul(left: IntegerExpression, right: IntegerExpression) -> IntegerExpression {
        let mut children = Vec::new();
        for operand in [left, right] {
            match operand {
                IntegerExpression::Multiplication(inner) => children.extend(inner),
                other => children.push(other),
            }
        }
        IntegerExpression::Multiplication(children)
    }

    /// The product of an explicit child sequence, used verbatim.
    pub fn mul_all(children: Vec<IntegerExpression>) -> IntegerExpression {
        IntegerExpression::Multiplication(children)
    }

    /// Number of children: 0 for leaves.
    pub fn num_children(&self) -> usize {
        match self {
            IntegerExpression::Value(_) | IntegerExpression::Var(_) => 0,
            IntegerExpression::Addition(children)
            | IntegerExpression::Multiplication(children) => children.len(),
        }
    }

    /// The `index`-th child, 1-based.
    pub fn query_child(&self, index: usize) -> Result<&IntegerExpression, ExprError> {
        let arity = self.num_children();
        if index < 1 || index > arity {
            return Err(ExprError::ChildIndexOutOfRange { index, arity });
        }
        match self {
            IntegerExpression::Addition(children)
            | IntegerExpression::Multiplication(children) => Ok(&children[index - 1]),
            _ => Err(ExprError::ChildIndexOutOfRange { index, arity }),
        }
    }

    /// Check whether the expression contains no symbolic variables.
    pub fn is_ground(&self) -> bool {
        match self {
            IntegerExpression::Value(_) => true,
            IntegerExpression::Var(_) => false,
            IntegerExpression::Addition(children)
            | IntegerExpression::Multiplication(children) => {
                children.iter().all(IntegerExpression::is_ground)
            }
        }
    }

    /// Reduce a ground expression to its value: sums fold from 0, products
    /// from 1. Fails on the first symbolic variable encountered.
    pub fn evaluate(&self) -> Result<i64, ExprError> {
        match self {
            IntegerExpression::Value(n) => Ok(*n),
            IntegerExpression::Var(i) => Err(ExprError::UnresolvedVariable(*i)),
            IntegerExpression::Addition(children) => children
                .iter()
                .try_fold(0i64, |acc, child| Ok(acc + child.evaluate()?)),
            IntegerExpression::Multiplication(children) => children
                .iter()
                .try_fold(1i64, |acc, child| Ok(acc * child.evaluate()?)),
        }
    }

    /// The indices of all symbolic variables in this expression, so the
    /// dispatch layer can declare unknowns before rendering.
    pub fn symbolic_variables(&self) -> BTreeSet<u32> {
        let mut out = BTreeSet::new();
        self.collect_variables(&mut out);
        out
    }

    fn collect_variables(&self, out: &mut BTreeSet<u32>) {
        match self {
            IntegerExpression::Value(_) => {}
            IntegerExpression::Var(i) => {
                out.insert(*i);
            }
            IntegerExpression::Addition(children)
            | IntegerExpression::Multiplication(children) => {
                for child in children {
                    child.collect_variables(out);
                }
            }
        }
    }
}

impl fmt::Display for IntegerExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegerExpression::Value(n) => {
                if *n < 0 {
                    write!(f, "(- {})", n.unsigned_abs())
                } else {
                    write!(f, "{}", n)
                }
            }
            IntegerExpression::Var(i) => write!(f, "i{}", i),
            IntegerExpression::Addition(children) => {
                write!(f, "(+")?;
                for child in children {
                    write!(f, " {}", child)?;
                }
                write!(f, ")")
            }
            IntegerExpression::Multiplication(children) => {
                write!(f, "(*")?;
                for child in children {
                    write!(f, " {}", child)?;
                }
                write!(f, ")")
            }
        }
    }
}
