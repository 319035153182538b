//! Directed graphs over contiguous vertex indices
//!
//! The vertices of a `Digraph` are always the indices `0..vertex_count()`.
//! Removing a vertex renumbers the ones above it down by one, preserving
//! relative order, so the graph can stay in lockstep with a parallel list
//! (the DP problem relies on exactly this contract).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Errors from graph operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex index outside `0..vertex_count()`
    VertexOutOfRange { vertex: usize, count: usize },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::VertexOutOfRange { vertex, count } => {
                write!(f, "vertex {} out of range for graph with {} vertices", vertex, count)
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// A directed graph whose vertices are the contiguous indices
/// `0..vertex_count()`. Successor sets are ordered, so traversal is
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Digraph {
    /// `successors[v]` holds the targets of the edges leaving `v`
    successors: Vec<BTreeSet<usize>>,
}

impl Digraph {
    /// A graph with `vertex_count` isolated vertices.
    pub fn new(vertex_count: usize) -> Digraph {
        Digraph {
            successors: vec![BTreeSet::new(); vertex_count],
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.successors.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(BTreeSet::len).sum()
    }

    fn check(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex >= self.successors.len() {
            return Err(GraphError::VertexOutOfRange {
                vertex,
                count: self.successors.len(),
            });
        }
        Ok(())
    }

    /// Append a fresh isolated vertex and return its index.
    pub fn add_vertex(&mut self) -> usize {
        self.successors.push(BTreeSet::new());
        self.successors.len() - 1
    }

    /// Add the edge `from → to`. Self-loops are allowed.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<(), GraphError> {
        self.check(from)?;
        self.check(to)?;
        self.successors[from].insert(to);
        Ok(())
    }

    /// Remove the edge `from → to` if present.
    pub fn remove_edge(&mut self, from: usize, to: usize) -> Result<(), GraphError> {
        self.check(from)?;
        self.check(to)?;
        self.successors[from].remove(&to);
        Ok(())
    }

    /// Check whether the edge `from → to` exists.
    pub fn has_edge(&self, from: usize, to: usize) -> Result<bool, GraphError> {
        self.check(from)?;
        self.check(to)?;
        Ok(self.successors[from].contains(&to))
    }

    /// The targets of the edges leaving `vertex`, in ascending order.
    pub fn successors(&self, vertex: usize) -> Result<impl Iterator<Item = usize> + '_, GraphError> {
        self.check(vertex)?;
        Ok(self.successors[vertex].iter().copied())
    }

    /// The sources of the edges entering `vertex`, in ascending order.
    pub fn predecessors(&self, vertex: usize) -> Result<Vec<usize>, GraphError> {
        self.check(vertex)?;
        Ok(self
            .successors
            .iter()
            .enumerate()
            .filter(|(_, targets)| targets.contains(&vertex))
            .map(|(source, _)| source)
            .collect())
    }

    /// Remove `vertex` together with all incident edges. Every vertex `j`
    /// with `j > vertex` becomes `j - 1`; vertices below keep their index.
    pub fn remove_vertex(&mut self, vertex: usize) -> Result<(), GraphError> {
        self.check(vertex)?;
        self.successors.remove(vertex);
        for targets in &mut self.successors {
            let renumbered: BTreeSet<usize> = targets
                .iter()
                .copied()
                .filter(|&t| t != vertex)
                .map(|t| if t > vertex { t - 1 } else { t })
                .collect();
            *targets = renumbered;
        }
        Ok(())
    }

    /// The subgraph induced by `vertices`, renumbered to `0..vertices.len()`
    /// in the given order. Each index must be in range.
    pub fn induced_subgraph(&self, vertices: &[usize]) -> Result<Digraph, GraphError> {
        for &v in vertices {
            self.check(v)?;
        }
        let renumber: std::collections::HashMap<usize, usize> = vertices
            .iter()
            .enumerate()
            .map(|(new, &old)| (old, new))
            .collect();
        let successors = vertices
            .iter()
            .map(|&old| {
                self.successors[old]
                    .iter()
                    .filter_map(|t| renumber.get(t).copied())
                    .collect()
            })
            .collect();
        Ok(Digraph { successors })
    }
}

impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (source, targets) in self.successors.iter().enumerate() {
            write!(f, "{} ->", source)?;
            for target in targets {
                write!(f, " {}", target)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
