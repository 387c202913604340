// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::item::Item;
use crate::item_counter::ItemCounter;
use crate::itemset::ItemSet;
use rayon::prelude::*;

#[derive(Debug)]
struct FPNode {
    item: Item,
    count: u32,
    children: Vec<usize>,
    parent: usize,
}

impl FPNode {
    fn new(item: Item, parent: usize) -> FPNode {
        FPNode {
            item,
            count: 0,
            children: Vec::with_capacity(1),
            parent,
        }
    }

    fn is_root(&self) -> bool {
        self.item.is_null()
    }
}

/// Prefix tree over frequency-ordered transactions. Nodes live in an arena
/// and refer to each other by index; parent links and the per-item node
/// chains are plain indices, never owning references, so upward path
/// reconstruction and chain traversal need no back-pointer gymnastics.
///
/// `item_chains[item]` threads together every node carrying that item in
/// insertion order. It is the only way occurrences of an item are found;
/// the tree is never re-scanned.
pub struct FPTree {
    nodes: Vec<FPNode>,
    item_count: ItemCounter,
    item_chains: Vec<Vec<usize>>,
}

impl FPTree {
    pub fn new() -> FPTree {
        FPTree {
            // The root carries the null item and count 0.
            nodes: vec![FPNode::new(Item::null(), 0)],
            item_count: ItemCounter::new(),
            item_chains: Vec::new(),
        }
    }

    fn add_node(&mut self, parent: usize, item: Item) -> usize {
        let id = self.nodes.len();
        self.nodes.push(FPNode::new(item, parent));
        self.nodes[parent].children.push(id);
        self.append_to_chain(item, id);
        id
    }

    fn append_to_chain(&mut self, item: Item, id: usize) {
        let index = item.as_index();
        if index >= self.item_chains.len() {
            self.item_chains.resize(index + 1, vec![]);
        }
        self.item_chains[index].push(id);
    }

    fn child_of(&self, id: usize, item: Item) -> Option<usize> {
        self.nodes[id]
            .children
            .iter()
            .copied()
            .find(|&child| self.nodes[child].item == item)
    }

    fn insert_child(&mut self, id: usize, item: Item, count: u32) -> usize {
        let child_id = match self.child_of(id, item) {
            Some(child_id) => child_id,
            None => self.add_node(id, item),
        };
        self.nodes[child_id].count += count;
        child_id
    }

    /// Inserts one frequency-ordered transaction (or conditional path),
    /// weighted by `count`. Shared prefixes share nodes.
    pub fn insert(&mut self, transaction: &[Item], count: u32) {
        let mut id = 0;
        for &item in transaction {
            self.item_count.add(&item, count);
            id = self.insert_child(id, item, count);
        }
    }

    pub fn item_count(&self) -> &ItemCounter {
        &self.item_count
    }

    /// The conditional pattern base for `item`: one root-exclusive prefix
    /// path per occurrence on the item's node chain, weighted by that
    /// occurrence's count.
    fn conditional_pattern_base(&self, item: Item) -> Vec<(Vec<Item>, u32)> {
        let chain = match self.item_chains.get(item.as_index()) {
            Some(chain) => chain,
            None => return vec![],
        };
        let mut base = Vec::with_capacity(chain.len());
        for &node_id in chain {
            let path = self.path_from_root_to_excluding(node_id);
            if !path.is_empty() {
                base.push((path, self.nodes[node_id].count));
            }
        }
        base
    }

    /// Builds the conditional tree for `item`: aggregate item counts over
    /// the pattern base, drop items below `min_count`, then re-insert each
    /// filtered path with the normal insertion rule. The result has no
    /// items at all when nothing in the base is frequent.
    pub fn construct_conditional_tree(&self, item: Item, min_count: u32) -> FPTree {
        let base = self.conditional_pattern_base(item);

        let mut path_item_count = ItemCounter::new();
        for (path, count) in &base {
            for path_item in path {
                path_item_count.add(path_item, *count);
            }
        }

        let mut conditional_tree = FPTree::new();
        for (path, count) in base {
            let filtered: Vec<Item> = path
                .into_iter()
                .filter(|i| path_item_count.get(i) >= min_count)
                .collect();
            if !filtered.is_empty() {
                conditional_tree.insert(&filtered, count);
            }
        }
        conditional_tree
    }

    fn path_from_root_to_excluding(&self, node_id: usize) -> Vec<Item> {
        let mut path = vec![];
        let mut id = self.nodes[node_id].parent;
        loop {
            let node = &self.nodes[id];
            if node.is_root() {
                break;
            }
            path.push(node.item);
            id = node.parent;
        }
        path.reverse();
        path
    }
}

impl Default for FPTree {
    fn default() -> Self {
        FPTree::new()
    }
}

/// Recursive FP-Growth. Each item above the support threshold contributes
/// the pattern `suffix ∪ item` at its local count, then recurses into its
/// conditional tree with the extended suffix. Conditional trees strictly
/// shrink, so the recursion always terminates.
///
/// Items are processed rarest-first; once an item's conditional base has
/// been extracted it is never revisited at this level. The branches are
/// independent after extraction, so they run in parallel, and the results
/// are merged rather than accumulated through shared state.
pub fn fp_growth(fptree: &FPTree, min_count: u32, suffix: &[Item]) -> Vec<ItemSet> {
    let mut items: Vec<Item> = fptree.item_count().items_with_count_at_least(min_count);
    fptree.item_count().sort_ascending(&mut items);

    items
        .par_iter()
        .flat_map(|&item| -> Vec<ItemSet> {
            let count = fptree.item_count().get(&item);
            let mut itemset: Vec<Item> = Vec::from(suffix);
            itemset.push(item);

            let conditional_tree = fptree.construct_conditional_tree(item, min_count);
            let mut result = fp_growth(&conditional_tree, min_count, &itemset);

            result.push(ItemSet::new(itemset, count));
            result
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{fp_growth, FPTree};
    use crate::item::Item;
    use crate::itemset::ItemSet;

    fn to_item_vec(nums: &[u32]) -> Vec<Item> {
        nums.iter().map(|&i| Item::with_id(i)).collect()
    }

    // Transactions must be inserted in descending global frequency order,
    // as the builder in lib.rs does.
    fn build_tree(transactions: &[&[u32]]) -> FPTree {
        let mut tree = FPTree::new();
        for t in transactions {
            tree.insert(&to_item_vec(t), 1);
        }
        tree
    }

    #[test]
    fn test_insert_shares_prefixes() {
        // a=3, b=2, c=2 over {a,b,c} {a,b} {a,c}.
        let tree = build_tree(&[&[1, 2, 3], &[1, 2], &[1, 3]]);
        assert_eq!(tree.item_count().get(&Item::with_id(1)), 3);
        assert_eq!(tree.item_count().get(&Item::with_id(2)), 2);
        assert_eq!(tree.item_count().get(&Item::with_id(3)), 2);
        // Root, one shared 'a' node, one 'b', and two 'c' nodes: the 'a'
        // prefix is shared by all three transactions.
        assert_eq!(tree.nodes.len(), 5);
        assert_eq!(tree.item_chains[1].len(), 1);
        assert_eq!(tree.item_chains[3].len(), 2);
    }

    #[test]
    fn test_conditional_tree_filters_infrequent_path_items() {
        let tree = build_tree(&[&[1, 2, 3], &[1, 2], &[1, 3]]);
        // Paths for item 3: [1,2] (count 1) and [1] (count 1). Aggregated,
        // item 1 has count 2 and item 2 count 1, so at min_count=2 the
        // conditional tree holds only item 1.
        let conditional = tree.construct_conditional_tree(Item::with_id(3), 2);
        assert_eq!(conditional.item_count().get(&Item::with_id(1)), 2);
        assert_eq!(conditional.item_count().get(&Item::with_id(2)), 0);
    }

    #[test]
    fn test_fp_growth_small() {
        let tree = build_tree(&[&[1, 2, 3], &[1, 2], &[1, 3]]);
        let mut patterns = fp_growth(&tree, 2, &[]);
        patterns.sort();

        let mut expected = vec![
            ItemSet::new(to_item_vec(&[1]), 3),
            ItemSet::new(to_item_vec(&[2]), 2),
            ItemSet::new(to_item_vec(&[3]), 2),
            ItemSet::new(to_item_vec(&[1, 2]), 2),
            ItemSet::new(to_item_vec(&[1, 3]), 2),
        ];
        expected.sort();
        assert_eq!(patterns, expected);
    }

    #[test]
    fn test_fp_growth_empty_tree() {
        let tree = FPTree::new();
        assert!(fp_growth(&tree, 1, &[]).is_empty());
    }
}
