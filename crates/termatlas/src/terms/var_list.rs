//! Immutable, identity-keyed variable sets
//!
//! A `VariableList` is a persistent set of variables: every "mutating"
//! operation returns a new list and previous versions stay valid. The
//! backing storage is shared through an `Arc`, so the subset short-circuit
//! in `combine` can hand back an existing list without copying.

use indexmap::IndexSet;
use std::collections::HashMap;
use std::sync::Arc;

use super::variable::{Variable, VariablePool};

/// A persistent set of variables keyed by identity.
#[derive(Debug, Clone, Default)]
pub struct VariableList {
    vars: Arc<IndexSet<Variable>>,
}

impl VariableList {
    /// The empty list.
    pub fn new() -> VariableList {
        VariableList::default()
    }

    /// A list containing a single variable.
    pub fn singleton(var: Variable) -> VariableList {
        let mut set = IndexSet::new();
        set.insert(var);
        VariableList {
            vars: Arc::new(set),
        }
    }

    /// Identity membership test.
    pub fn contains(&self, var: Variable) -> bool {
        self.vars.contains(&var)
    }

    /// Number of distinct identities in the list.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Check whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate over the members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Variable> + '_ {
        self.vars.iter().copied()
    }

    /// A new list that also contains `var`. Adding an existing member
    /// returns an equivalent list sharing this list's storage.
    pub fn add(&self, var: Variable) -> VariableList {
        if self.contains(var) {
            return self.clone();
        }
        let mut set = (*self.vars).clone();
        set.insert(var);
        VariableList {
            vars: Arc::new(set),
        }
    }

    /// A new list without `var`. Removing a non-member returns an
    /// equivalent list sharing this list's storage.
    pub fn remove(&self, var: Variable) -> VariableList {
        if !self.contains(var) {
            return self.clone();
        }
        let mut set = (*self.vars).clone();
        set.shift_remove(&var);
        VariableList {
            vars: Arc::new(set),
        }
    }

    /// Set union. When one operand's members are a subset of the other's,
    /// the superset operand's storage is reused instead of allocating; the
    /// caller may only rely on content equality.
    pub fn combine(&self, other: &VariableList) -> VariableList {
        if other.vars.is_subset(&self.vars) {
            return self.clone();
        }
        if self.vars.is_subset(&other.vars) {
            return other.clone();
        }
        let mut set = (*self.vars).clone();
        for var in other.iter() {
            set.insert(var);
        }
        VariableList {
            vars: Arc::new(set),
        }
    }

    /// The intersection with `other`, sorted by the pool's natural variable
    /// order.
    pub fn overlap(&self, other: &VariableList, pool: &VariablePool) -> Vec<Variable> {
        let mut common: Vec<Variable> = self.iter().filter(|v| other.contains(*v)).collect();
        common.sort_by(|a, b| pool.compare(*a, *b));
        common
    }

    /// A display name for every member such that distinct members never
    /// share a name. The only user of a base name keeps it bare; when a
    /// base name is shared, members get `name__k` with `k` assigned from 1
    /// in natural order (so ordinary variables of a name are numbered
    /// before its binders).
    pub fn unique_naming(&self, pool: &VariablePool) -> HashMap<Variable, String> {
        let mut sorted: Vec<Variable> = self.iter().collect();
        sorted.sort_by(|a, b| pool.compare(*a, *b));

        let mut uses: HashMap<&str, usize> = HashMap::new();
        for &var in &sorted {
            *uses.entry(pool.name(var)).or_insert(0) += 1;
        }

        let mut next: HashMap<&str, usize> = HashMap::new();
        let mut naming = HashMap::new();
        for &var in &sorted {
            let name = pool.name(var);
            if uses[name] == 1 {
                naming.insert(var, name.to_string());
            } else {
                let counter = next.entry(name).or_insert(0);
                *counter += 1;
                naming.insert(var, format!("{}__{}", name, counter));
            }
        }
        naming
    }

    #[cfg(test)]
    fn shares_storage_with(&self, other: &VariableList) -> bool {
        Arc::ptr_eq(&self.vars, &other.vars)
    }
}

impl FromIterator<Variable> for VariableList {
    fn from_iter<I: IntoIterator<Item = Variable>>(iter: I) -> VariableList {
        VariableList {
            vars: Arc::new(iter.into_iter().collect()),
        }
    }
}

impl PartialEq for VariableList {
    fn eq(&self, other: &VariableList) -> bool {
        self.vars == other.vars
    }
}

impl Eq for VariableList {}
