//! The rewrite-system boundary
//!
//! The TRS itself (rule storage, signature typing, reachability analysis)
//! is a collaborator. This module carries the minimal concrete types the
//! DP problem needs: a read-only `Trs` handle, rewrite rules, and the
//! `SymbolData` lookup store that rule-building collaborators populate.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::terms::{FunctionSymbol, MetaVariable, Term, Variable, VariablePool};

/// Mutable lookup store for the symbols met while building a rewrite
/// system. Function symbols persist for the lifetime of the store;
/// variables and meta-variables belong to the current rule environment and
/// are dropped by `clear_environment`. Within each namespace, the last
/// addition for a name wins.
#[derive(Debug, Clone, Default)]
pub struct SymbolData {
    functions: HashMap<String, FunctionSymbol>,
    variables: HashMap<String, Variable>,
    metas: HashMap<String, MetaVariable>,
}

impl SymbolData {
    /// Create an empty store.
    pub fn new() -> SymbolData {
        SymbolData::default()
    }

    /// Register a function symbol under its name.
    pub fn add_function_symbol(&mut self, symbol: FunctionSymbol) {
        self.functions.insert(symbol.name().to_string(), symbol);
    }

    /// Register a variable under its pool name.
    pub fn add_variable(&mut self, pool: &VariablePool, var: Variable) {
        self.variables.insert(pool.name(var).to_string(), var);
    }

    /// Register a meta-variable under its pool name.
    pub fn add_meta_variable(&mut self, pool: &VariablePool, var: MetaVariable) {
        self.metas.insert(pool.meta_name(var).to_string(), var);
    }

    /// Look up a function symbol by name.
    pub fn lookup_function_symbol(&self, name: &str) -> Option<&FunctionSymbol> {
        self.functions.get(name)
    }

    /// Look up a variable by name.
    pub fn lookup_variable(&self, name: &str) -> Option<Variable> {
        self.variables.get(name).copied()
    }

    /// Look up a meta-variable by name.
    pub fn lookup_meta_variable(&self, name: &str) -> Option<MetaVariable> {
        self.metas.get(name).copied()
    }

    /// Number of registered function symbols.
    pub fn function_symbol_count(&self) -> usize {
        self.functions.len()
    }

    /// Number of registered variables.
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Number of registered meta-variables.
    pub fn meta_variable_count(&self) -> usize {
        self.metas.len()
    }

    /// Drop the current environment: variables and meta-variables are
    /// cleared, function symbols stay.
    pub fn clear_environment(&mut self) {
        self.variables.clear();
        self.metas.clear();
    }
}

/// A rewrite rule `lhs → rhs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    lhs: Term,
    rhs: Term,
}

impl Rule {
    /// Create a rule.
    pub fn new(lhs: Term, rhs: Term) -> Rule {
        Rule { lhs, rhs }
    }

    /// The left-hand side.
    pub fn lhs(&self) -> &Term {
        &self.lhs
    }

    /// The right-hand side.
    pub fn rhs(&self) -> &Term {
        &self.rhs
    }

    /// Format this rule with variable names resolved through a pool.
    pub fn display<'a>(&'a self, pool: &'a VariablePool) -> RuleDisplay<'a> {
        RuleDisplay { rule: self, pool }
    }
}

/// Display wrapper for `Rule`.
pub struct RuleDisplay<'a> {
    rule: &'a Rule,
    pool: &'a VariablePool,
}

impl<'a> fmt::Display for RuleDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} → {}",
            self.rule.lhs.display(self.pool),
            self.rule.rhs.display(self.pool)
        )
    }
}

/// A term rewriting system: an alphabet of function symbols and a rule
/// list. Read-only from the analysis core's perspective.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trs {
    alphabet: BTreeMap<String, FunctionSymbol>,
    rules: Vec<Rule>,
}

impl Trs {
    /// Create a rewrite system from its alphabet and rules.
    pub fn new<I: IntoIterator<Item = FunctionSymbol>>(symbols: I, rules: Vec<Rule>) -> Trs {
        Trs {
            alphabet: symbols
                .into_iter()
                .map(|s| (s.name().to_string(), s))
                .collect(),
            rules,
        }
    }

    /// Look up an alphabet symbol by name.
    pub fn lookup_symbol(&self, name: &str) -> Option<&FunctionSymbol> {
        self.alphabet.get(name)
    }

    /// Iterate over the alphabet in name order.
    pub fn symbols(&self) -> impl Iterator<Item = &FunctionSymbol> {
        self.alphabet.values()
    }

    /// The rules of the system.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Type;

    #[test]
    fn test_symbol_data_basics() {
        let mut pool = VariablePool::new();
        let mut data = SymbolData::new();
        let bing = FunctionSymbol::new("bing", Type::sort("a"));
        let bong = pool.fresh_free("bong", Type::sort("b"));
        let bang = pool.fresh_meta("bang", Type::arrow(Type::sort("a"), Type::sort("b")), 1);

        data.add_function_symbol(bing.clone());
        assert_eq!(data.lookup_function_symbol("bing"), Some(&bing));
        assert_eq!(data.lookup_function_symbol("a"), None);
        data.add_variable(&pool, bong);
        assert_eq!(data.lookup_variable("bong"), Some(bong));
        assert_eq!(data.lookup_variable("bing"), None);
        data.add_meta_variable(&pool, bang);
        assert_eq!(data.lookup_meta_variable("bang"), Some(bang));
        assert_eq!(data.lookup_meta_variable("bong"), None);
        assert_eq!(data.lookup_meta_variable("bing"), None);
        assert_eq!(data.lookup_variable("bang"), None);

        data.clear_environment();
        assert_eq!(data.lookup_variable("bong"), None);
        assert_eq!(data.lookup_meta_variable("bang"), None);
        assert_eq!(data.lookup_function_symbol("bing"), Some(&bing));
    }

    #[test]
    fn test_symbol_data_counts() {
        let mut pool = VariablePool::new();
        let mut data = SymbolData::new();
        let bing = FunctionSymbol::new("bing", Type::sort("a"));
        let bongv = pool.fresh_free("bong", Type::sort("b"));
        let bongf = FunctionSymbol::new("bong", Type::sort("a"));
        let bang = pool.fresh_meta("bang", Type::arrow(Type::sort("a"), Type::sort("b")), 1);

        data.add_function_symbol(bing.clone());
        data.add_function_symbol(bongf);
        data.add_function_symbol(bing);
        assert_eq!(data.function_symbol_count(), 2);
        assert_eq!(data.variable_count(), 0);
        assert_eq!(data.meta_variable_count(), 0);
        data.add_variable(&pool, bongv);
        assert_eq!(data.function_symbol_count(), 2);
        assert_eq!(data.variable_count(), 1);
        assert_eq!(data.meta_variable_count(), 0);
        data.add_meta_variable(&pool, bang);
        assert_eq!(data.function_symbol_count(), 2);
        assert_eq!(data.variable_count(), 1);
        assert_eq!(data.meta_variable_count(), 1);
    }

    #[test]
    fn test_symbol_data_equal_named_symbols() {
        let mut pool = VariablePool::new();
        let mut data = SymbolData::new();
        let bing1 = FunctionSymbol::new("bing", Type::sort("a"));
        let bing2 = pool.fresh_free("bing", Type::sort("b"));
        let bing3 = pool.fresh_meta("bing", Type::arrow(Type::sort("a"), Type::sort("b")), 1);

        data.add_function_symbol(bing1.clone());
        data.add_variable(&pool, bing2);
        data.add_meta_variable(&pool, bing3);
        assert_eq!(data.lookup_function_symbol("bing"), Some(&bing1));
        assert_eq!(data.lookup_variable("bing"), Some(bing2));
        assert_eq!(data.lookup_meta_variable("bing"), Some(bing3));
    }

    #[test]
    fn test_symbol_data_lookup_non_existing() {
        let mut data = SymbolData::new();
        data.add_function_symbol(FunctionSymbol::new("bing", Type::sort("a")));
        assert_eq!(data.lookup_function_symbol("bong"), None);
        assert_eq!(data.lookup_variable("bing"), None);
        assert_eq!(data.lookup_meta_variable("bing"), None);
        assert_eq!(data.lookup_function_symbol("12"), None);
        assert_eq!(data.lookup_function_symbol("false"), None);
    }

    #[test]
    fn test_trs_alphabet_and_rules() {
        let mut pool = VariablePool::new();
        let o = Type::sort("o");
        let f = FunctionSymbol::new("f", Type::arrow(o.clone(), o.clone()));
        let a = FunctionSymbol::new("a", o.clone());
        let x = pool.fresh_free("x", o);
        let rule = Rule::new(
            Term::FnApp(f.clone(), vec![Term::Var(x)]),
            Term::Var(x),
        );
        let trs = Trs::new([f.clone(), a.clone()], vec![rule.clone()]);

        assert_eq!(trs.lookup_symbol("f"), Some(&f));
        assert_eq!(trs.lookup_symbol("g"), None);
        assert_eq!(trs.rule_count(), 1);
        assert_eq!(trs.rules()[0], rule);
        let names: Vec<&str> = trs.symbols().map(|s| s.name()).collect();
        assert_eq!(names, vec!["a", "f"]);
        assert_eq!(rule.display(&pool).to_string(), "f(x) → x");
    }
}
