//! Reduce-by-key primitives over rayon parallel iterators.
//!
//! Every worker folds its own partition into a private accumulator map and
//! the maps are merged pairwise, so the result does not depend on how many
//! workers ran or how the input was split.

use rayon::prelude::*;
use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
};

/// Groups `items` by `key` and folds each group into an accumulator.
///
/// `merge` must be associative and commutative.
pub fn reduce_by_key<I, K, A, FK, FI, FF, FM>(
    items: I,
    key: FK,
    init: FI,
    fold: FF,
    merge: FM,
) -> HashMap<K, A>
where
    I: ParallelIterator,
    K: Eq + Hash + Send,
    A: Send,
    FK: Fn(&I::Item) -> K + Sync + Send,
    FI: Fn() -> A + Sync + Send,
    FF: Fn(A, I::Item) -> A + Sync + Send,
    FM: Fn(A, A) -> A + Sync + Send,
{
    items
        .fold(HashMap::new, |mut partial, item| {
            let k = key(&item);
            let acc = partial.remove(&k).unwrap_or_else(&init);
            partial.insert(k, fold(acc, item));
            partial
        })
        .reduce(HashMap::new, |a, b| merge_by_key(a, b, &merge))
}

/// Counts `items` per `key`.
pub fn count_by_key<I, K, FK>(items: I, key: FK) -> HashMap<K, usize>
where
    I: ParallelIterator,
    K: Eq + Hash + Send,
    FK: Fn(&I::Item) -> K + Sync + Send,
{
    reduce_by_key(items, key, || 0, |n, _| n + 1, |a, b| a + b)
}

/// Sums two partial count maps.
pub fn merge_counts<K: Eq + Hash>(a: HashMap<K, usize>, b: HashMap<K, usize>) -> HashMap<K, usize> {
    merge_by_key(a, b, |x, y| x + y)
}

/// Collects the distinct items.
pub fn distinct<I>(items: I) -> HashSet<I::Item>
where
    I: ParallelIterator,
    I::Item: Eq + Hash + Send,
{
    items.collect()
}

/// Set union of two collections, duplicates removed.
pub fn union_distinct<A, B, T>(a: A, b: B) -> HashSet<T>
where
    A: ParallelIterator<Item = T>,
    B: IntoParallelIterator<Item = T>,
    T: Eq + Hash + Send,
{
    a.chain(b).collect()
}

fn merge_by_key<K, A, FM>(a: HashMap<K, A>, b: HashMap<K, A>, merge: FM) -> HashMap<K, A>
where
    K: Eq + Hash,
    FM: Fn(A, A) -> A,
{
    let (mut big, small) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    for (k, v) in small {
        let merged = match big.remove(&k) {
            Some(w) => merge(w, v),
            None => v,
        };
        big.insert(k, merged);
    }
    big
}
