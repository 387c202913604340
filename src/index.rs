use crate::item::Item;

/// Inverted index over the transaction set: one sorted list of transaction
/// ids per item. Support of an arbitrary itemset is a k-way intersection
/// walk over the tid lists, without re-scanning transactions.
pub struct Index {
    index: Vec<Vec<usize>>,
    transaction_count: usize,
}

impl Index {
    pub fn new() -> Index {
        Index {
            index: Vec::new(),
            transaction_count: 0,
        }
    }

    pub fn insert(&mut self, transaction: &[Item]) {
        let tid = self.transaction_count;
        self.transaction_count += 1;
        for item in transaction {
            let item_index = item.as_index();
            if self.index.len() <= item_index {
                self.index.resize(item_index + 1, vec![]);
            }
            // Tids only ever grow, so each list stays sorted.
            self.index[item_index].push(tid);
        }
    }

    pub fn num_transactions(&self) -> usize {
        self.transaction_count
    }

    /// Number of transactions containing every item of the itemset. The
    /// empty itemset is contained in every transaction.
    pub fn count(&self, itemset: &[Item]) -> u32 {
        if itemset.is_empty() {
            return self.transaction_count as u32;
        }

        if itemset.len() == 1 {
            return match self.index.get(itemset[0].as_index()) {
                Some(tids) => tids.len() as u32,
                None => 0,
            };
        }

        let mut tid_lists: Vec<&Vec<usize>> = Vec::with_capacity(itemset.len());
        for item in itemset {
            match self.index.get(item.as_index()) {
                Some(tids) if !tids.is_empty() => tid_lists.push(tids),
                _ => return 0,
            }
        }

        // Walk the first list; advance a cursor per other list to check
        // membership. Cursors never move backwards.
        let mut cursors: Vec<usize> = vec![0; tid_lists.len()];
        let mut count = 0;
        for &tid in tid_lists[0] {
            let mut in_all = true;
            for i in 1..tid_lists.len() {
                while cursors[i] < tid_lists[i].len() && tid_lists[i][cursors[i]] < tid {
                    cursors[i] += 1;
                }
                if cursors[i] == tid_lists[i].len() || tid_lists[i][cursors[i]] != tid {
                    in_all = false;
                    break;
                }
            }
            if in_all {
                count += 1;
            }
        }
        count
    }

    /// Occurrence fraction in [0,1]. Zero when the transaction set is
    /// empty; one for the empty itemset otherwise.
    pub fn support(&self, itemset: &[Item]) -> f64 {
        if self.transaction_count == 0 {
            return 0.0;
        }
        (self.count(itemset) as f64) / (self.transaction_count as f64)
    }
}

impl Default for Index {
    fn default() -> Self {
        Index::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Index;
    use crate::item::Item;
    use crate::itemizer::Itemizer;

    #[test]
    fn test_support() {
        let mut index = Index::new();
        let transactions = vec![
            vec!["a", "b", "c", "d", "e", "f"],
            vec!["g", "h", "i", "j", "k", "l"],
            vec!["z", "x"],
            vec!["z", "x"],
            vec!["z", "x", "y"],
            vec!["z", "x", "y", "i"],
        ];
        let mut itemizer = Itemizer::new();
        for line in &transactions {
            let transaction = line.iter().map(|s| itemizer.id_of(s)).collect::<Vec<Item>>();
            index.insert(&transaction);
        }

        assert_eq!(index.support(&[itemizer.id_of("a")]), 1.0 / 6.0);
        assert_eq!(index.support(&[itemizer.id_of("h")]), 1.0 / 6.0);
        assert_eq!(index.support(&[itemizer.id_of("i")]), 2.0 / 6.0);
        assert_eq!(index.support(&[itemizer.id_of("z")]), 4.0 / 6.0);
        assert_eq!(index.support(&[itemizer.id_of("x")]), 4.0 / 6.0);
        assert_eq!(index.support(&[itemizer.id_of("y")]), 2.0 / 6.0);
        assert_eq!(
            index.support(&[itemizer.id_of("x"), itemizer.id_of("z")]),
            4.0 / 6.0
        );
        assert_eq!(
            index.support(&[
                itemizer.id_of("x"),
                itemizer.id_of("y"),
                itemizer.id_of("z"),
            ]),
            2.0 / 6.0
        );
        // Disjoint items never co-occur.
        assert_eq!(
            index.support(&[itemizer.id_of("a"), itemizer.id_of("g")]),
            0.0
        );
    }

    #[test]
    fn test_degenerate_cases() {
        let empty = Index::new();
        // Empty transaction set: support is defined as zero, no division.
        assert_eq!(empty.support(&[Item::with_id(1)]), 0.0);
        assert_eq!(empty.support(&[]), 0.0);

        let mut index = Index::new();
        index.insert(&[Item::with_id(1)]);
        index.insert(&[Item::with_id(2)]);
        // The empty itemset is a subset of every transaction.
        assert_eq!(index.support(&[]), 1.0);
        // An item the index has never seen.
        assert_eq!(index.support(&[Item::with_id(7)]), 0.0);
    }
}
