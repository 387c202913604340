use crate::item::Item;
use fnv::FnvHashMap;
use itertools::Itertools;
use std::cmp;
use std::collections::BTreeMap;

/// A frequent pattern: a canonically sorted set of items with the number
/// of transactions that contain all of them.
#[derive(Clone, Hash, PartialEq, Eq, Debug)]
pub struct ItemSet {
    pub items: Vec<Item>,
    pub count: u32,
}

impl ItemSet {
    pub fn new(items: Vec<Item>, count: u32) -> ItemSet {
        ItemSet {
            items: items.into_iter().sorted().collect(),
            count,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// Order by size first so sorted pattern lists group small itemsets before
// their supersets.
impl Ord for ItemSet {
    fn cmp(&self, other: &ItemSet) -> cmp::Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.items.cmp(&other.items))
            .then_with(|| self.count.cmp(&other.count))
    }
}

impl PartialOrd for ItemSet {
    fn partial_cmp(&self, other: &ItemSet) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// The mined pattern table: frequent itemsets grouped by size, plus a
/// count lookup keyed by the canonical (sorted) item vector. The lookup
/// is what lets rule generation score antecedents and consequents without
/// re-scanning the transaction set.
pub struct FrequentItemsets {
    num_transactions: usize,
    by_size: BTreeMap<usize, Vec<ItemSet>>,
    counts: FnvHashMap<Vec<Item>, u32>,
}

impl FrequentItemsets {
    pub fn new(num_transactions: usize) -> FrequentItemsets {
        FrequentItemsets {
            num_transactions,
            by_size: BTreeMap::new(),
            counts: FnvHashMap::default(),
        }
    }

    /// Records a pattern. A pattern already present (same canonical item
    /// vector) is ignored; both engines emit each itemset exactly once.
    pub fn add(&mut self, itemset: ItemSet) {
        if itemset.is_empty() {
            return;
        }
        if self
            .counts
            .insert(itemset.items.clone(), itemset.count)
            .is_none()
        {
            self.by_size.entry(itemset.len()).or_default().push(itemset);
        }
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    /// Count of a pattern by canonical item vector, if it was mined.
    pub fn count_of(&self, items: &[Item]) -> Option<u32> {
        self.counts.get(items).copied()
    }

    pub fn support_of(&self, items: &[Item]) -> Option<f64> {
        if self.num_transactions == 0 {
            return None;
        }
        self.count_of(items)
            .map(|c| (c as f64) / (self.num_transactions as f64))
    }

    pub fn support(&self, itemset: &ItemSet) -> f64 {
        if self.num_transactions == 0 {
            return 0.0;
        }
        (itemset.count as f64) / (self.num_transactions as f64)
    }

    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.by_size.keys().copied()
    }

    pub fn of_size(&self, size: usize) -> &[ItemSet] {
        self.by_size.get(&size).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// All patterns, smallest sizes first, discovery order within a size.
    pub fn iter(&self) -> impl Iterator<Item = &ItemSet> {
        self.by_size.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
