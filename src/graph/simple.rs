use super::{Graph, GraphInfo};
use crate::{
    error::{Error, Result},
    reduce::union_distinct,
    types::{Edge, Vertex},
};
use derive_more::AsRef;
use rayon::prelude::*;
use std::collections::HashSet;

/// A graph whose edge set is symmetric and loop-free.
///
/// Each undirected edge `{a, b}` is stored as the two directed edges
/// `(a, b)` and `(b, a)`. The only way to obtain one is [`simplify`].
#[derive(Debug, Clone, PartialEq, Eq, AsRef)]
pub struct SimpleGraph<V: Vertex> {
    graph: Graph<V>,
}

/// Returns the simple undirected closure of `graph`.
///
/// The edge set is united with its reverse, deduplicated, and stripped of
/// self-edges. The vertex set is kept as is, so vertices that only had
/// self-edges become isolated.
pub fn simplify<V: Vertex>(graph: &Graph<V>) -> SimpleGraph<V> {
    let reversed = graph
        .edges
        .par_iter()
        .map(|(src, dst)| (dst.clone(), src.clone()));
    let closure = union_distinct(graph.edges.par_iter().cloned(), reversed);
    let edges: HashSet<Edge<V>> = closure
        .into_par_iter()
        .filter(|(src, dst)| src != dst)
        .collect();
    SimpleGraph {
        graph: Graph {
            vertices: graph.vertices.clone(),
            edges,
        },
    }
}

impl<V: Vertex> SimpleGraph<V> {
    pub fn vertices(&self) -> &HashSet<V> {
        self.graph.vertices()
    }

    /// Both directions of every undirected edge.
    pub fn edges(&self) -> &HashSet<Edge<V>> {
        self.graph.edges()
    }

    pub fn num_vertices(&self) -> usize {
        self.graph.num_vertices()
    }

    pub fn num_directed_edges(&self) -> usize {
        self.graph.num_edges()
    }

    /// Returns the number of undirected edges.
    ///
    /// Fails with [`Error::OddEdgeCount`] if the directed edge count is odd,
    /// which can only happen if the edge set lost its symmetry.
    pub fn num_undirected_edges(&self) -> Result<usize> {
        let n = self.num_directed_edges();
        if n % 2 == 0 {
            Ok(n / 2)
        } else {
            Err(Error::OddEdgeCount(n))
        }
    }

    /// Vertex count and undirected edge count.
    pub fn info(&self) -> Result<GraphInfo> {
        Ok(GraphInfo::new(
            self.num_vertices(),
            self.num_undirected_edges()?,
        ))
    }
}
