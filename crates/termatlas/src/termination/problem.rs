//! DP problems: the unit of work of the termination-proof search
//!
//! A `Problem` bundles an ordered list of dependency pairs, an optional
//! dependency graph whose vertices are 1:1 with that list, and the source
//! rewrite system. Simplification happens through `remove_dp`, which keeps
//! the list and the graph in lockstep; bulk transformations (splitting
//! along graph components) go through the `subproblem` constructor rather
//! than in-place surgery.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::digraph::{Digraph, GraphError};
use crate::terms::{FunctionSymbol, VariablePool};
use crate::trs::Trs;
use crate::types::Type;

use super::dependency_pair::DependencyPair;

/// Errors from problem construction and simplification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProblemError {
    /// DP count and graph vertex count differ at construction
    GraphSizeMismatch { dps: usize, vertices: usize },
    /// An index outside `0..len`
    IndexOutOfRange { index: usize, size: usize },
    /// A subproblem index subset that is not strictly increasing
    UnsortedIndexSubset,
    /// A graph operation failed; only possible when list and graph have
    /// been desynchronized
    Graph(GraphError),
}

impl fmt::Display for ProblemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemError::GraphSizeMismatch { dps, vertices } => write!(
                f,
                "problem has {} dependency pairs but its graph has {} vertices",
                dps, vertices
            ),
            ProblemError::IndexOutOfRange { index, size } => {
                write!(f, "index {} out of range for {} dependency pairs", index, size)
            }
            ProblemError::UnsortedIndexSubset => {
                write!(f, "subproblem indices must be strictly increasing")
            }
            ProblemError::Graph(e) => write!(f, "graph out of sync: {}", e),
        }
    }
}

impl std::error::Error for ProblemError {}

impl From<GraphError> for ProblemError {
    fn from(e: GraphError) -> ProblemError {
        ProblemError::Graph(e)
    }
}

/// A termination sub-goal: dependency pairs, an optional dependency graph
/// kept in lockstep with them, and the source rewrite system.
///
/// The problem is owned by one proof-search branch at a time; branching
/// searches clone it.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    dps: Vec<DependencyPair>,
    graph: Option<Digraph>,
    trs: Arc<Trs>,
}

impl Problem {
    /// Create a problem without a dependency graph.
    pub fn new(dps: Vec<DependencyPair>, trs: Arc<Trs>) -> Problem {
        Problem {
            dps,
            graph: None,
            trs,
        }
    }

    /// Create a problem with a dependency graph. The graph must have
    /// exactly one vertex per dependency pair.
    pub fn with_graph(
        dps: Vec<DependencyPair>,
        trs: Arc<Trs>,
        graph: Digraph,
    ) -> Result<Problem, ProblemError> {
        if dps.len() != graph.vertex_count() {
            return Err(ProblemError::GraphSizeMismatch {
                dps: dps.len(),
                vertices: graph.vertex_count(),
            });
        }
        Ok(Problem {
            dps,
            graph: Some(graph),
            trs,
        })
    }

    /// The dependency pairs, in order. Read-only: `remove_dp` and
    /// `subproblem` are the only ways to change the list, so the graph can
    /// never fall out of sync.
    pub fn dps(&self) -> &[DependencyPair] {
        &self.dps
    }

    /// Number of dependency pairs.
    pub fn len(&self) -> usize {
        self.dps.len()
    }

    /// Check whether no dependency pairs remain (the sub-goal is solved).
    pub fn is_empty(&self) -> bool {
        self.dps.is_empty()
    }

    /// The dependency graph, when one is attached.
    pub fn graph(&self) -> Option<&Digraph> {
        self.graph.as_ref()
    }

    /// The source rewrite system.
    pub fn trs(&self) -> &Trs {
        &self.trs
    }

    /// A shared handle to the source rewrite system.
    pub fn trs_handle(&self) -> Arc<Trs> {
        Arc::clone(&self.trs)
    }

    /// Remove and return the dependency pair at `index`. When a graph is
    /// attached, the corresponding vertex is removed as well, so
    /// `graph.vertex_count()` and `dps().len()` stay equal.
    pub fn remove_dp(&mut self, index: usize) -> Result<DependencyPair, ProblemError> {
        if index >= self.dps.len() {
            return Err(ProblemError::IndexOutOfRange {
                index,
                size: self.dps.len(),
            });
        }
        let removed = self.dps.remove(index);
        if let Some(graph) = &mut self.graph {
            graph.remove_vertex(index)?;
        }
        Ok(removed)
    }

    /// A new problem over the dependency pairs at the given strictly
    /// increasing indices, sharing this problem's rewrite system. When a
    /// graph is attached, the subproblem carries the induced subgraph, so
    /// the lockstep invariant holds in the result as well.
    pub fn subproblem(&self, indices: &[usize]) -> Result<Problem, ProblemError> {
        let mut previous: Option<usize> = None;
        for &index in indices {
            if index >= self.dps.len() {
                return Err(ProblemError::IndexOutOfRange {
                    index,
                    size: self.dps.len(),
                });
            }
            if let Some(prev) = previous {
                if index <= prev {
                    return Err(ProblemError::UnsortedIndexSubset);
                }
            }
            previous = Some(index);
        }
        let dps = indices.iter().map(|&i| self.dps[i].clone()).collect();
        let graph = match &self.graph {
            Some(g) => Some(g.induced_subgraph(indices)?),
            None => None,
        };
        Ok(Problem {
            dps,
            graph,
            trs: Arc::clone(&self.trs),
        })
    }

    /// Every function symbol occurring in any dependency pair whose output
    /// sort is the given marker sort. The marker is injected per analysis
    /// run; this core holds no reserved sort name of its own.
    pub fn sharp_heads(&self, dp_sort: &Type) -> BTreeSet<FunctionSymbol> {
        let mut all = BTreeSet::new();
        for dp in &self.dps {
            dp.lhs().function_symbols(&mut all);
            dp.rhs().function_symbols(&mut all);
        }
        all.into_iter()
            .filter(|symbol| symbol.output_sort() == dp_sort)
            .collect()
    }

    /// Format this problem with variable names resolved through a pool.
    pub fn display<'a>(&'a self, pool: &'a VariablePool) -> ProblemDisplay<'a> {
        ProblemDisplay {
            problem: self,
            pool,
        }
    }
}

/// Display wrapper listing a problem's dependency pairs.
pub struct ProblemDisplay<'a> {
    problem: &'a Problem,
    pool: &'a VariablePool,
}

impl<'a> fmt::Display for ProblemDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, dp) in self.problem.dps.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", dp.display(self.pool))?;
        }
        write!(f, "]")
    }
}
