use crate::item::Item;

/// Dense per-item counter, indexed by item id. Index 0 (the null item)
/// is never counted.
pub struct ItemCounter {
    counter: Vec<u32>,
}

impl ItemCounter {
    pub fn new() -> ItemCounter {
        ItemCounter { counter: vec![] }
    }

    pub fn add(&mut self, item: &Item, count: u32) {
        let index = item.as_index();
        if self.counter.len() <= index {
            self.counter.resize(index + 1, 0);
        }
        self.counter[index] += count;
    }

    pub fn get(&self, item: &Item) -> u32 {
        let index = item.as_index();
        if index >= self.counter.len() {
            0
        } else {
            self.counter[index]
        }
    }

    /// All items with a non-zero count, in ascending id order.
    pub fn items(&self) -> Vec<Item> {
        (1..self.counter.len())
            .filter(|&i| self.counter[i] > 0)
            .map(|i| Item::with_id(i as u32))
            .collect()
    }

    pub fn items_with_count_at_least(&self, min_count: u32) -> Vec<Item> {
        let mut v: Vec<Item> = vec![];
        for i in 1..self.counter.len() {
            if self.counter[i] >= min_count {
                v.push(Item::with_id(i as u32));
            }
        }
        v
    }

    /// Sorts by descending count, ties broken by ascending item id so the
    /// ordering is fixed for a given input.
    pub fn sort_descending(&self, v: &mut Vec<Item>) {
        v.sort_by(|a, b| {
            let count_a = self.get(a);
            let count_b = self.get(b);
            if count_a == count_b {
                return a.cmp(b);
            }
            count_b.cmp(&count_a)
        });
    }

    /// Sorts by ascending count, same tie-break as sort_descending.
    pub fn sort_ascending(&self, v: &mut Vec<Item>) {
        v.sort_by(|a, b| {
            let count_a = self.get(a);
            let count_b = self.get(b);
            if count_a == count_b {
                return a.cmp(b);
            }
            count_a.cmp(&count_b)
        });
    }
}

impl Default for ItemCounter {
    fn default() -> Self {
        ItemCounter::new()
    }
}

#[cfg(test)]
mod tests {
    use super::ItemCounter;
    use crate::item::Item;

    fn to_item_vec(nums: &[u32]) -> Vec<Item> {
        nums.iter().map(|&i| Item::with_id(i)).collect()
    }

    #[test]
    fn test_counts_and_thresholds() {
        let mut counter = ItemCounter::new();
        counter.add(&Item::with_id(1), 3);
        counter.add(&Item::with_id(2), 1);
        counter.add(&Item::with_id(2), 1);
        counter.add(&Item::with_id(5), 4);

        assert_eq!(counter.get(&Item::with_id(1)), 3);
        assert_eq!(counter.get(&Item::with_id(2)), 2);
        assert_eq!(counter.get(&Item::with_id(3)), 0);
        assert_eq!(counter.get(&Item::with_id(99)), 0);

        assert_eq!(counter.items(), to_item_vec(&[1, 2, 5]));
        assert_eq!(counter.items_with_count_at_least(3), to_item_vec(&[1, 5]));
    }

    #[test]
    fn test_sort_orders() {
        let mut counter = ItemCounter::new();
        counter.add(&Item::with_id(1), 2);
        counter.add(&Item::with_id(2), 4);
        counter.add(&Item::with_id(3), 2);
        counter.add(&Item::with_id(4), 1);

        let mut v = to_item_vec(&[4, 3, 2, 1]);
        counter.sort_descending(&mut v);
        assert_eq!(v, to_item_vec(&[2, 1, 3, 4]));

        counter.sort_ascending(&mut v);
        assert_eq!(v, to_item_vec(&[4, 1, 3, 2]));
    }
}
