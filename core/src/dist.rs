//! Partitioned-collection substrate for the pipeline's data-parallel phases.
//!
//! Stands in for a distributed execution engine: a collection split into
//! partitions processed with rayon, a hash-shuffled associative reduction,
//! a bounded top-N selection, and read-only broadcast values. The global
//! key-sum table produced by `reduce_by_key` stays partitioned; nothing
//! here materializes the full key set in one map.

use rayon::prelude::*;
use std::cmp::Reverse;
use std::collections::hash_map::DefaultHasher;
use std::collections::{BinaryHeap, HashMap};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// An owned collection split into partitions, processed in parallel.
/// Partition order (and order within partitions) is preserved by `map` and
/// `collect`, so outputs stay positionally aligned with inputs.
#[derive(Debug, Clone)]
pub struct PartitionedCollection<T> {
    partitions: Vec<Vec<T>>,
}

impl<T: Send + Sync> PartitionedCollection<T> {
    /// Split `items` into at most `partitions` contiguous chunks.
    pub fn from_vec(items: Vec<T>, partitions: usize) -> Self {
        let p = partitions.max(1);
        let chunk = ((items.len() + p - 1) / p).max(1);
        let mut parts: Vec<Vec<T>> = Vec::with_capacity(p);
        let mut iter = items.into_iter();
        loop {
            let part: Vec<T> = iter.by_ref().take(chunk).collect();
            if part.is_empty() {
                break;
            }
            parts.push(part);
        }
        if parts.is_empty() {
            parts.push(Vec::new());
        }
        Self { partitions: parts }
    }

    pub fn from_partitions(partitions: Vec<Vec<T>>) -> Self {
        Self { partitions }
    }

    pub fn num_partitions(&self) -> usize {
        self.partitions.len()
    }

    /// Number of elements across all partitions, as a wide integer.
    pub fn count(&self) -> u64 {
        self.partitions.par_iter().map(|part| part.len() as u64).sum()
    }

    pub fn map<U, F>(&self, f: F) -> PartitionedCollection<U>
    where
        U: Send,
        F: Fn(&T) -> U + Send + Sync,
    {
        let partitions = self
            .partitions
            .par_iter()
            .map(|part| part.iter().map(&f).collect())
            .collect();
        PartitionedCollection { partitions }
    }

    pub fn filter<F>(&self, pred: F) -> PartitionedCollection<T>
    where
        T: Clone,
        F: Fn(&T) -> bool + Send + Sync,
    {
        let partitions = self
            .partitions
            .par_iter()
            .map(|part| part.iter().filter(|item| pred(item)).cloned().collect())
            .collect();
        PartitionedCollection { partitions }
    }

    /// Emit `(key, value)` pairs per element and sum values by key.
    ///
    /// Pairs are routed to output partitions by key hash (the shuffle), then
    /// each output partition sums its share in parallel. The result keeps the
    /// key space partitioned end to end.
    pub fn reduce_by_key<K, F>(&self, extract: F) -> PartitionedCollection<(K, u64)>
    where
        K: Hash + Eq + Send + Sync,
        F: Fn(&T) -> Vec<(K, u64)> + Send + Sync,
    {
        let out_parts = self.partitions.len();
        let routed: Vec<Vec<Vec<(K, u64)>>> = self
            .partitions
            .par_iter()
            .map(|part| {
                let mut buckets: Vec<Vec<(K, u64)>> = (0..out_parts).map(|_| Vec::new()).collect();
                for item in part {
                    for (key, value) in extract(item) {
                        let slot = hash_slot(&key, out_parts);
                        buckets[slot].push((key, value));
                    }
                }
                buckets
            })
            .collect();

        let mut slots: Vec<Vec<(K, u64)>> = (0..out_parts).map(|_| Vec::new()).collect();
        for buckets in routed {
            for (slot, pairs) in buckets.into_iter().enumerate() {
                slots[slot].extend(pairs);
            }
        }

        let partitions = slots
            .into_par_iter()
            .map(|pairs| {
                let mut sums: HashMap<K, u64> = HashMap::new();
                for (key, value) in pairs {
                    *sums.entry(key).or_insert(0) += value;
                }
                sums.into_iter().collect()
            })
            .collect();
        PartitionedCollection { partitions }
    }

    /// Flatten back to a single vector, preserving element order.
    pub fn collect(self) -> Vec<T> {
        self.partitions.into_iter().flatten().collect()
    }
}

impl<K> PartitionedCollection<(K, u64)>
where
    K: Ord + Clone + Send + Sync,
{
    /// Bounded top-N by value: a capped min-heap per partition, then a merge
    /// of the at most `partitions * n` survivors. Never sorts the full
    /// collection. Final order is descending by value; equal-value order is
    /// implementation-defined.
    pub fn top_n_by_value(&self, n: usize) -> Vec<(K, u64)> {
        if n == 0 {
            return Vec::new();
        }
        let mut survivors: Vec<(K, u64)> = self
            .partitions
            .par_iter()
            .map(|part| {
                let mut heap: BinaryHeap<Reverse<(u64, K)>> = BinaryHeap::with_capacity(n + 1);
                for (key, value) in part {
                    heap.push(Reverse((*value, key.clone())));
                    if heap.len() > n {
                        heap.pop();
                    }
                }
                heap.into_iter()
                    .map(|Reverse((value, key))| (key, value))
                    .collect::<Vec<_>>()
            })
            .reduce(Vec::new, |mut left, mut right| {
                left.append(&mut right);
                left
            });
        survivors.sort_unstable_by(|a, b| b.1.cmp(&a.1));
        survivors.truncate(n);
        survivors
    }
}

/// One immutable snapshot shared read-only with every parallel worker.
#[derive(Debug)]
pub struct Broadcast<T>(Arc<T>);

impl<T> Broadcast<T> {
    pub fn new(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl<T> Clone for Broadcast<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> std::ops::Deref for Broadcast<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

fn hash_slot<K: Hash>(key: &K, slots: usize) -> usize {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    (hasher.finish() % slots as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vec_splits_and_counts() {
        let coll = PartitionedCollection::from_vec((0..10).collect(), 3);
        assert!(coll.num_partitions() <= 3);
        assert_eq!(coll.count(), 10);
    }

    #[test]
    fn empty_input_still_has_a_partition() {
        let coll: PartitionedCollection<u32> = PartitionedCollection::from_vec(Vec::new(), 4);
        assert_eq!(coll.num_partitions(), 1);
        assert_eq!(coll.count(), 0);
    }

    #[test]
    fn map_and_collect_preserve_order() {
        let coll = PartitionedCollection::from_vec((0..100).collect::<Vec<i64>>(), 7);
        let doubled = coll.map(|x| x * 2).collect();
        assert_eq!(doubled, (0..100).map(|x| x * 2).collect::<Vec<i64>>());
    }

    #[test]
    fn filter_drops_elements() {
        let coll = PartitionedCollection::from_vec((0..10).collect::<Vec<u32>>(), 3);
        let evens = coll.filter(|x| x % 2 == 0).collect();
        assert_eq!(evens, vec![0, 2, 4, 6, 8]);
    }

    #[test]
    fn reduce_by_key_sums_across_partitions() {
        let items = vec!["a", "b", "a", "c", "a", "b"];
        let coll = PartitionedCollection::from_vec(items, 3);
        let sums = coll.reduce_by_key(|s| vec![(s.to_string(), 1)]);
        let mut result = sums.collect();
        result.sort();
        assert_eq!(
            result,
            vec![
                ("a".to_string(), 3),
                ("b".to_string(), 2),
                ("c".to_string(), 1)
            ]
        );
    }

    #[test]
    fn top_n_is_bounded_and_descending() {
        let pairs: Vec<(String, u64)> =
            (0..50).map(|i| (format!("t{i:02}"), i as u64)).collect();
        let coll = PartitionedCollection::from_vec(pairs, 4);
        let top = coll.top_n_by_value(5);
        assert_eq!(top.len(), 5);
        let values: Vec<u64> = top.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![49, 48, 47, 46, 45]);
    }

    #[test]
    fn top_n_with_ties_keeps_boundary_invariant() {
        // four keys at value 5, two below; any 3-of-4 selection is valid
        let pairs: Vec<(String, u64)> = vec![
            ("a".into(), 5),
            ("b".into(), 5),
            ("c".into(), 5),
            ("d".into(), 5),
            ("e".into(), 2),
            ("f".into(), 1),
        ];
        let coll = PartitionedCollection::from_vec(pairs, 2);
        let top = coll.top_n_by_value(3);
        assert_eq!(top.len(), 3);
        assert!(top.iter().all(|(_, v)| *v == 5));
    }

    #[test]
    fn broadcast_shares_one_value() {
        let b = Broadcast::new(vec![1, 2, 3]);
        let clones: Vec<Broadcast<Vec<i32>>> = (0..4).map(|_| b.clone()).collect();
        for c in &clones {
            assert_eq!(**c, vec![1, 2, 3]);
        }
    }
}
