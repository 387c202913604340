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
use crate::itemizer::Itemizer;
use crate::itemset::FrequentItemsets;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::hash::{Hash, Hasher};

#[derive(Clone, Debug)]
pub struct Rule {
    pub antecedent: Vec<Item>,
    pub consequent: Vec<Item>,
    pub confidence: f64,
    pub lift: f64,
    pub support: f64,
}

impl Eq for Rule {}

// Identity is the (antecedent, consequent) split; the metrics are derived
// from it. Both sides are kept sorted so equality tests are consistent.
impl PartialEq for Rule {
    fn eq(&self, other: &Rule) -> bool {
        self.antecedent == other.antecedent && self.consequent == other.consequent
    }
}

impl Hash for Rule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.antecedent.hash(state);
        self.consequent.hash(state);
    }
}

impl Rule {
    // Creates a Rule from (antecedent, consequent) if it clears the
    // min_confidence threshold. `union_count` is the mined count of
    // antecedent ∪ consequent. Side counts come from the pattern table,
    // falling back to a fresh index count when a side was not mined.
    fn make(
        antecedent: Vec<Item>,
        consequent: Vec<Item>,
        union_count: u32,
        patterns: &FrequentItemsets,
        index: &Index,
        min_confidence: f64,
    ) -> Option<Rule> {
        if antecedent.is_empty() || consequent.is_empty() {
            return None;
        }
        let num_transactions = patterns.num_transactions();
        if num_transactions == 0 {
            return None;
        }

        let antecedent_count = match patterns.count_of(&antecedent) {
            Some(count) => count,
            None => index.count(&antecedent),
        };
        if antecedent_count == 0 {
            return None;
        }

        let confidence = (union_count as f64) / (antecedent_count as f64);
        if confidence < min_confidence {
            return None;
        }

        let consequent_count = match patterns.count_of(&consequent) {
            Some(count) => count,
            None => index.count(&consequent),
        };
        let consequent_support = (consequent_count as f64) / (num_transactions as f64);
        // Cannot occur for itemset-derived consequents, but a zero here
        // must yield lift 0, not NaN/Infinity.
        let lift = if consequent_support == 0.0 {
            0.0
        } else {
            confidence / consequent_support
        };

        Some(Rule {
            antecedent,
            consequent,
            confidence,
            lift,
            support: (union_count as f64) / (num_transactions as f64),
        })
    }

    pub fn to_string(&self, itemizer: &Itemizer) -> String {
        [
            Item::item_vec_to_string(&self.antecedent, itemizer),
            " => ".to_owned(),
            Item::item_vec_to_string(&self.consequent, itemizer),
        ]
        .join("")
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn lift(&self) -> f64 {
        self.lift
    }

    pub fn support(&self) -> f64 {
        self.support
    }
}

/// Enumerates every antecedent/consequent split (2^n − 2 for an n-itemset)
/// of every frequent itemset of size ≥ 2, keeps the splits at or above
/// min_confidence, and returns them sorted by descending confidence. The
/// sort is stable, so ties keep discovery order.
pub fn generate_rules(
    patterns: &FrequentItemsets,
    index: &Index,
    min_confidence: f64,
) -> Vec<Rule> {
    let mut rules: Vec<Rule> = vec![];
    for itemset in patterns.iter().filter(|i| i.len() >= 2) {
        let n = itemset.len();
        let full_mask: u64 = (1u64 << n) - 1;
        for mask in 1..full_mask {
            let mut antecedent: Vec<Item> = Vec::with_capacity(n);
            let mut consequent: Vec<Item> = Vec::with_capacity(n);
            // itemset.items is sorted, so both sides come out sorted.
            for (bit, &item) in itemset.items.iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    antecedent.push(item);
                } else {
                    consequent.push(item);
                }
            }
            if let Some(rule) = Rule::make(
                antecedent,
                consequent,
                itemset.count,
                patterns,
                index,
                min_confidence,
            ) {
                rules.push(rule);
            }
        }
    }
    rules.sort_by_key(|r| Reverse(OrderedFloat(r.confidence)));
    rules
}
