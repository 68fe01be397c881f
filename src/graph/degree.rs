use super::SimpleGraph;
use crate::{
    fit::SampleShape,
    reduce::{count_by_key, merge_counts},
    types::{Degree, Vertex},
};
use rayon::prelude::*;
use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    iter::FromIterator,
};

/// Number of vertices per degree.
///
/// Only degrees held by at least one vertex are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DegreeHistogram {
    counts: BTreeMap<Degree, usize>,
}

impl DegreeHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of vertices with `degree`.
    pub fn get(&self, degree: Degree) -> usize {
        self.counts.get(&degree).copied().unwrap_or(0)
    }

    /// Iterates `(degree, count)` in ascending degree order.
    pub fn iter(&self) -> impl Iterator<Item = (Degree, usize)> + '_ {
        self.counts.iter().map(|(&d, &c)| (d, c))
    }

    /// Number of distinct degrees.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn num_vertices(&self) -> usize {
        self.counts.values().sum()
    }

    /// Sum of all degrees, which equals the number of directed edges of a
    /// simple graph.
    pub fn degree_sum(&self) -> usize {
        self.iter().map(|(d, c)| d * c).sum()
    }

    /// Flattens the histogram into the sample handed to a power-law fit.
    pub fn sample(&self, shape: SampleShape) -> Vec<f64> {
        match shape {
            SampleShape::Degrees => self
                .iter()
                .flat_map(|(d, c)| std::iter::repeat(d as f64).take(c))
                .collect(),
            SampleShape::Counts => self.iter().map(|(_, c)| c as f64).collect(),
        }
    }
}

impl FromIterator<(Degree, usize)> for DegreeHistogram {
    fn from_iter<I: IntoIterator<Item = (Degree, usize)>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        for (degree, count) in iter {
            if count > 0 {
                *counts.entry(degree).or_insert(0) += count;
            }
        }
        Self { counts }
    }
}

impl fmt::Display for DegreeHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "+------------+------------+")?;
        writeln!(f, "|     degree |      count |")?;
        writeln!(f, "+------------+------------+")?;
        for (degree, count) in self.iter() {
            writeln!(f, "|{:>11} |{:>11} |", degree, count)?;
        }
        write!(f, "+------------+------------+")
    }
}

/// Returns the degree of every vertex.
///
/// Degrees are counted on edge sources, then merged into a zero count for
/// every vertex of `V` so that isolated vertices get degree 0.
pub fn degrees<V: Vertex>(graph: &SimpleGraph<V>) -> HashMap<V, Degree> {
    let out_degrees = count_by_key(graph.edges().par_iter(), |(src, _)| src.clone());
    let zeros = graph.vertices().par_iter().map(|v| (v.clone(), 0)).collect();
    merge_counts(zeros, out_degrees)
}

/// Returns the degree histogram of `graph`.
pub fn degree_histogram<V: Vertex>(graph: &SimpleGraph<V>) -> DegreeHistogram {
    count_by_key(degrees(graph).into_par_iter(), |&(_, degree)| degree)
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{simplify, Graph};

    fn histogram(pairs: &[(Degree, usize)]) -> DegreeHistogram {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_loops_and_isolated_vertex() {
        let graph = simplify(&Graph::new(
            vec![1, 2, 3],
            vec![(1, 2), (2, 1), (3, 3), (1, 1)],
        ));
        let hist = degree_histogram(&graph);
        assert_eq!(hist, histogram(&[(0, 1), (1, 2)]));
        assert_eq!(hist.num_vertices(), 3);
        assert_eq!(hist.degree_sum(), graph.num_directed_edges());
    }

    #[test]
    fn test_star() {
        let graph = simplify(&Graph::new(vec![], vec![(1, 2), (1, 3), (1, 4)]));
        let degrees = degrees(&graph);
        assert_eq!(degrees[&1], 3);
        assert_eq!(degrees[&4], 1);
        assert_eq!(degree_histogram(&graph), histogram(&[(1, 3), (3, 1)]));
    }

    #[test]
    fn test_empty() {
        let graph = simplify(&Graph::<String>::new(vec![], vec![]));
        let hist = degree_histogram(&graph);
        assert!(hist.is_empty());
        assert_eq!(hist.num_vertices(), 0);
        assert_eq!(hist.len(), 0);
    }

    #[test]
    fn test_only_isolated_vertices() {
        let graph = simplify(&Graph::new(vec![7, 8], vec![(9, 9)]));
        assert_eq!(degree_histogram(&graph), histogram(&[(0, 3)]));
    }

    #[test]
    fn test_from_iter_merges_and_drops_empty_bins() {
        let hist = histogram(&[(2, 1), (5, 0), (2, 3), (1, 1)]);
        assert_eq!(hist.iter().collect::<Vec<_>>(), vec![(1, 1), (2, 4)]);
        assert_eq!(hist.get(5), 0);
        assert_eq!(hist.len(), 2);
    }

    #[test]
    fn test_sample() {
        let hist = histogram(&[(0, 1), (1, 2), (3, 1)]);
        assert_eq!(
            hist.sample(SampleShape::Degrees),
            vec![0.0, 1.0, 1.0, 3.0]
        );
        assert_eq!(hist.sample(SampleShape::Counts), vec![1.0, 2.0, 1.0]);
    }

    #[test]
    fn test_display() {
        let text = histogram(&[(1, 2)]).to_string();
        assert!(text.contains("|          1 |          2 |"));
    }
}
