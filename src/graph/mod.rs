//! Raw and simple graphs.

pub use degree::{degree_histogram, degrees, DegreeHistogram};
pub use simple::{simplify, SimpleGraph};

use crate::{
    reduce::union_distinct,
    types::{Edge, Vertex},
};
use derive_more::Display;
use rayon::prelude::*;
use std::collections::HashSet;

mod degree;
mod simple;

/// A graph `(V, E)` whose edge set may be asymmetric and may contain
/// self-edges.
///
/// Every edge endpoint is a member of `V`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<V: Vertex> {
    vertices: HashSet<V>,
    edges: HashSet<Edge<V>>,
}

impl<V: Vertex> Graph<V> {
    /// Creates a graph from an explicit vertex set and edge set.
    ///
    /// Edge endpoints missing from `vertices` are added to the vertex set.
    pub fn new<I, E>(vertices: I, edges: E) -> Self
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = Edge<V>>,
    {
        let edges: HashSet<Edge<V>> = edges.into_iter().collect();
        let mut graph = Self::from_edges(edges);
        graph.vertices.extend(vertices);
        graph
    }

    /// Creates a graph whose vertex set is the set of edge endpoints.
    pub fn from_edges(edges: HashSet<Edge<V>>) -> Self {
        let vertices = union_distinct(
            edges.par_iter().map(|(src, _)| src.clone()),
            edges.par_iter().map(|(_, dst)| dst.clone()),
        );
        Self { vertices, edges }
    }

    pub fn vertices(&self) -> &HashSet<V> {
        &self.vertices
    }

    pub fn edges(&self) -> &HashSet<Edge<V>> {
        &self.edges
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn info(&self) -> GraphInfo {
        GraphInfo::new(self.num_vertices(), self.num_edges())
    }

    pub fn view(&self) -> GraphView<V> {
        GraphView::new(
            self.vertices.iter().cloned().collect(),
            self.edges.iter().cloned().collect(),
        )
    }

    /// Returns `true` if `(b, a)` is an edge for every edge `(a, b)`.
    pub fn is_symmetric(&self) -> bool {
        self.edges
            .par_iter()
            .all(|(src, dst)| self.edges.contains(&(dst.clone(), src.clone())))
    }

    pub fn has_self_edges(&self) -> bool {
        self.edges.par_iter().any(|(src, dst)| src == dst)
    }

    /// Returns `true` if the edge set is symmetric and loop-free.
    pub fn is_simple(&self) -> bool {
        !self.has_self_edges() && self.is_symmetric()
    }
}

/// Vertex and edge counts of a graph.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display(fmt = "{} vertices, {} edges", num_vertices, num_edges)]
pub struct GraphInfo {
    num_vertices: usize,
    num_edges: usize,
}

impl GraphInfo {
    pub fn new(num_vertices: usize, num_edges: usize) -> Self {
        Self {
            num_vertices,
            num_edges,
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }
}

/// A sorted, comparable snapshot of a graph.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct GraphView<V> {
    vertices: Vec<V>,
    edges: Vec<Edge<V>>,
}

impl<V: Ord> GraphView<V> {
    pub fn new(mut vertices: Vec<V>, mut edges: Vec<Edge<V>>) -> Self {
        vertices.sort_unstable();
        edges.sort_unstable();
        Self { vertices, edges }
    }
}
