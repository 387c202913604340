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

use crate::index::Index;
use crate::item::Item;
use crate::item_counter::ItemCounter;
use crate::itemset::ItemSet;
use crate::vec_sets::union;
use fnv::FnvHashSet;

/// Level-wise Apriori. Slower than FP-Growth on dense data (candidate
/// generation is combinatorial) but simple enough to serve as the
/// reference the FP-Growth output is checked against.
///
/// Level k+1 candidates come only from joining frequent k-itemsets: an
/// itemset with an infrequent subset cannot itself be frequent, so the
/// join never misses a frequent itemset.
pub fn apriori(index: &Index, item_count: &ItemCounter, min_count: u32) -> Vec<ItemSet> {
    let mut result: Vec<ItemSet> = vec![];

    // Seed with every distinct item observed, as 1-itemsets.
    let mut candidates: Vec<Vec<Item>> = item_count.items().into_iter().map(|i| vec![i]).collect();

    while !candidates.is_empty() {
        let mut frequent: Vec<Vec<Item>> = vec![];
        for candidate in candidates {
            let count = index.count(&candidate);
            if count >= min_count {
                result.push(ItemSet::new(candidate.clone(), count));
                frequent.push(candidate);
            }
        }
        if frequent.is_empty() {
            break;
        }

        // Join pairs of frequent k-itemsets whose union has exactly k+1
        // items. Candidates are kept canonical (sorted) so set-equal
        // unions reached via different join orders dedupe by key.
        let next_size = frequent[0].len() + 1;
        let mut seen: FnvHashSet<Vec<Item>> = FnvHashSet::default();
        let mut next: Vec<Vec<Item>> = vec![];
        for i in 0..frequent.len() {
            for j in (i + 1)..frequent.len() {
                let joined = union(&frequent[i], &frequent[j]);
                if joined.len() == next_size && seen.insert(joined.clone()) {
                    next.push(joined);
                }
            }
        }
        candidates = next;
    }

    result
}
