//! Seeded random graphs.

use crate::{
    error::{Error, Result},
    graph::Graph,
    types::{Edge, VId},
};
use derive_more::Display;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::HashSet;

/// A random graph family with its parameters and seed.
#[derive(Debug, Display, Clone, Copy, PartialEq)]
pub enum Generator {
    /// Every pair is an edge with probability `p`.
    #[display(fmt = "G(n={}, p={}, seed={})", n, p, seed)]
    Gnp { n: VId, p: f64, seed: u64 },
    /// `m` distinct pairs chosen uniformly.
    #[display(fmt = "G(n={}, m={}, seed={})", n, m, seed)]
    Gnm { n: VId, m: usize, seed: u64 },
}

/// The named graphs processed by a generation run.
pub const STANDARD_SET: [(&str, Generator); 4] = [
    (
        "gnp1",
        Generator::Gnp {
            n: 100,
            p: 0.05,
            seed: 1234,
        },
    ),
    (
        "gnp2",
        Generator::Gnp {
            n: 2000,
            p: 0.01,
            seed: 5130303,
        },
    ),
    (
        "gnm1",
        Generator::Gnm {
            n: 100,
            m: 1000,
            seed: 27695,
        },
    ),
    (
        "gnm2",
        Generator::Gnm {
            n: 1000,
            m: 100000,
            seed: 9999,
        },
    ),
];

impl Generator {
    /// Looks a generator up in [`STANDARD_SET`].
    pub fn by_name(name: &str) -> Result<Self> {
        STANDARD_SET
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, generator)| generator)
            .ok_or_else(|| Error::UnknownGraph(name.to_owned()))
    }

    pub fn generate(&self) -> Graph<VId> {
        match *self {
            Generator::Gnp { n, p, seed } => gnp(n, p, seed),
            Generator::Gnm { n, m, seed } => gnm(n, m, seed),
        }
    }
}

/// Returns a G(n, p) graph on vertices `0..n`.
///
/// Each unordered pair `{u, v}` is stored once as `(u, v)` with `u < v`.
pub fn gnp(n: VId, p: f64, seed: u64) -> Graph<VId> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::new();
    for u in 0..n {
        for v in u + 1..n {
            if rng.gen::<f64>() < p {
                edges.push((u, v));
            }
        }
    }
    Graph::new(0..n, edges)
}

/// Returns a G(n, m) graph on vertices `0..n`.
///
/// Asking for at least `n(n-1)/2` edges yields the complete graph.
pub fn gnm(n: VId, m: usize, seed: u64) -> Graph<VId> {
    let max_edges = n as usize * (n as usize).saturating_sub(1) / 2;
    if m >= max_edges {
        return complete(n);
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges: HashSet<Edge<VId>> = HashSet::with_capacity(m);
    while edges.len() < m {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            edges.insert((u.min(v), u.max(v)));
        }
    }
    Graph::new(0..n, edges)
}

fn complete(n: VId) -> Graph<VId> {
    Graph::new(
        0..n,
        (0..n).flat_map(|u| (u + 1..n).map(move |v| (u, v))),
    )
}
