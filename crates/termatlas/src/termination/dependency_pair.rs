//! Dependency pairs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::terms::{Term, VariablePool};

/// A dependency pair: two terms over the sharp-marked signature standing
/// for a possible call-to-call rewrite step. Opaque to the problem
/// aggregate beyond its two sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyPair {
    lhs: Term,
    rhs: Term,
}

impl DependencyPair {
    /// Create a dependency pair.
    pub fn new(lhs: Term, rhs: Term) -> DependencyPair {
        DependencyPair { lhs, rhs }
    }

    /// The left term.
    pub fn lhs(&self) -> &Term {
        &self.lhs
    }

    /// The right term.
    pub fn rhs(&self) -> &Term {
        &self.rhs
    }

    /// Format this pair with variable names resolved through a pool.
    pub fn display<'a>(&'a self, pool: &'a VariablePool) -> DependencyPairDisplay<'a> {
        DependencyPairDisplay { dp: self, pool }
    }
}

/// Display wrapper for `DependencyPair`.
pub struct DependencyPairDisplay<'a> {
    dp: &'a DependencyPair,
    pool: &'a VariablePool,
}

impl<'a> fmt::Display for DependencyPairDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ⇒ {}",
            self.dp.lhs.display(self.pool),
            self.dp.rhs.display(self.pool)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terms::FunctionSymbol;
    use crate::types::Type;

    #[test]
    fn test_accessors_and_display() {
        let mut pool = VariablePool::new();
        let o = Type::sort("o");
        let dp_sort = Type::sort("dp");
        let f_sharp = FunctionSymbol::new("f#", Type::arrow(o.clone(), dp_sort));
        let x = pool.fresh_free("x", o);

        let lhs = Term::FnApp(f_sharp.clone(), vec![Term::Var(x)]);
        let rhs = Term::FnApp(f_sharp, vec![Term::Var(x)]);
        let dp = DependencyPair::new(lhs.clone(), rhs.clone());
        assert_eq!(dp.lhs(), &lhs);
        assert_eq!(dp.rhs(), &rhs);
        assert_eq!(dp.display(&pool).to_string(), "f#(x) ⇒ f#(x)");
    }
}
