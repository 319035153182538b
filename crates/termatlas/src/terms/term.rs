//! Terms over the sharp-marked signature
//!
//! Only the operations this core needs are carried: collecting function
//! symbols and variables, addressing subterms by position, and rendering.
//! Rewriting itself happens in the rule-engine collaborator.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::position::{PatternMismatch, Position, Step};
use super::symbol::FunctionSymbol;
use super::var_list::VariableList;
use super::variable::{MetaVariable, Variable, VariablePool};

/// A term: variable, function application, abstraction, or meta-variable
/// application. A constant is a nullary application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    /// A variable occurrence
    Var(Variable),
    /// A function symbol applied to arguments
    FnApp(FunctionSymbol, Vec<Term>),
    /// An abstraction binding a variable in its body
    Lambda(Variable, Box<Term>),
    /// A meta-variable applied to arguments
    MetaApp(MetaVariable, Vec<Term>),
}

impl Term {
    /// A constant: a function symbol with no arguments.
    pub fn constant(symbol: FunctionSymbol) -> Term {
        Term::FnApp(symbol, Vec::new())
    }

    fn describe(&self) -> &'static str {
        match self {
            Term::Var(_) => "a variable",
            Term::FnApp(_, _) => "a function application",
            Term::Lambda(_, _) => "an abstraction",
            Term::MetaApp(_, _) => "a meta-variable application",
        }
    }

    /// Collect every function symbol occurring anywhere in this term.
    pub fn function_symbols(&self, symbols: &mut BTreeSet<FunctionSymbol>) {
        match self {
            Term::Var(_) => {}
            Term::FnApp(symbol, args) => {
                symbols.insert(symbol.clone());
                for arg in args {
                    arg.function_symbols(symbols);
                }
            }
            Term::Lambda(_, body) => body.function_symbols(symbols),
            Term::MetaApp(_, args) => {
                for arg in args {
                    arg.function_symbols(symbols);
                }
            }
        }
    }

    /// All variables occurring in this term, free or bound, as an
    /// identity-keyed set.
    pub fn variables(&self) -> VariableList {
        let mut vars = Vec::new();
        self.collect_variables(&mut vars);
        vars.into_iter().collect()
    }

    fn collect_variables(&self, out: &mut Vec<Variable>) {
        match self {
            Term::Var(var) => out.push(*var),
            Term::FnApp(_, args) | Term::MetaApp(_, args) => {
                for arg in args {
                    arg.collect_variables(out);
                }
            }
            Term::Lambda(var, body) => {
                out.push(*var);
                body.collect_variables(out);
            }
        }
    }

    /// The subterm addressed by `position`. Fails with a pattern-mismatch
    /// error when the position does not address a subterm of this term.
    pub fn subterm(&self, position: &Position) -> Result<&Term, PatternMismatch> {
        let (step, tail) = match position {
            Position::Empty => return Ok(self),
            Position::Cons(step, tail) => (step, tail),
        };
        match (step, self) {
            (Step::Argument(i), Term::FnApp(_, args)) => {
                match args.get((*i as usize).wrapping_sub(1)) {
                    Some(arg) => arg.subterm(tail),
                    None => Err(PatternMismatch {
                        queried: "an argument position",
                        found: "an application with too few arguments",
                    }),
                }
            }
            (Step::Lambda, Term::Lambda(_, body)) => body.subterm(tail),
            (Step::Meta(i), Term::MetaApp(_, args)) => {
                match args.get((*i as usize).wrapping_sub(1)) {
                    Some(arg) => arg.subterm(tail),
                    None => Err(PatternMismatch {
                        queried: "a meta-application position",
                        found: "a meta-application with too few arguments",
                    }),
                }
            }
            (step, term) => Err(PatternMismatch {
                queried: step.kind(),
                found: term.describe(),
            }),
        }
    }

    /// Format this term with variable names resolved through a pool.
    pub fn display<'a>(&'a self, pool: &'a VariablePool) -> TermDisplay<'a> {
        TermDisplay { term: self, pool }
    }
}

/// Display wrapper for `Term` that resolves variable names through a pool.
pub struct TermDisplay<'a> {
    term: &'a Term,
    pool: &'a VariablePool,
}

impl<'a> fmt::Display for TermDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.term {
            Term::Var(var) => write!(f, "{}", self.pool.name(*var)),
            Term::FnApp(symbol, args) => {
                write!(f, "{}", symbol)?;
                if !args.is_empty() {
                    write!(f, "(")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", arg.display(self.pool))?;
                    }
                    write!(f, ")")?;
                }
                Ok(())
            }
            Term::Lambda(var, body) => {
                write!(f, "λ{}.{}", self.pool.name(*var), body.display(self.pool))
            }
            Term::MetaApp(meta, args) => {
                write!(f, "{}[", self.pool.meta_name(*meta))?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg.display(self.pool))?;
                }
                write!(f, "]")
            }
        }
    }
}
