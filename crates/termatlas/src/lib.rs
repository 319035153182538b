//! termatlas: the analytical core of a termination analyzer for term
//! rewriting systems
//!
//! This library provides the data structures a termination-proof search is
//! built on:
//! - an immutable position/variable algebra for addressing and renaming
//!   subterms and binders
//! - dependency-pair problems paired with a dependency graph that is kept
//!   in lockstep under simplification
//! - an integer constraint-expression algebra for phrasing termination
//!   obligations handed to an external solver

pub mod digraph;
pub mod smt;
pub mod termination;
pub mod terms;
pub mod trs;
pub mod types;

// Re-export commonly used types from terms
pub use terms::{
    FunctionSymbol, HeadPosition, MetaVariable, PatternMismatch, Position, Step, Term,
    TermDisplay, Variable, VariableDisplay, VariableKind, VariableList, VariablePool,
};

// Re-export the constraint-expression algebra
pub use smt::{ExprError, IntegerExpression};

// Re-export the graph and problem types
pub use digraph::{Digraph, GraphError};
pub use termination::{DependencyPair, Problem, ProblemError};

// Re-export the rewrite-system boundary
pub use trs::{Rule, SymbolData, Trs};

pub use types::Type;
