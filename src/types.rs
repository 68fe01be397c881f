//! Various types related to degree distributions.

use std::{fmt::Debug, hash::Hash};

/// The vertex id type of generated graphs.
pub type VId = u32;

/// The degree of a vertex.
pub type Degree = usize;

/// A directed edge `(src, dst)`.
pub type Edge<V> = (V, V);

/// An opaque vertex identifier.
///
/// Identity is defined purely by value. `Ord` is only used to give
/// reproducible orderings in views and reports.
pub trait Vertex: Clone + Debug + Eq + Hash + Ord + Send + Sync {}

impl<T> Vertex for T where T: Clone + Debug + Eq + Hash + Ord + Send + Sync {}
