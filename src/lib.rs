//! Frequent itemset mining and association rule generation.
//!
//! Two engines mine the same problem and must agree exactly: a level-wise
//! candidate-generation engine (Apriori) and a prefix-tree engine with
//! recursive conditional-tree mining (FP-Growth). Both emit frequent
//! itemsets with absolute counts; a shared rule generator then enumerates
//! antecedent/consequent splits and scores them by confidence and lift.
//!
//! The engine is a pure function of its inputs: one call builds everything
//! it needs, returns a [`MiningResult`], and holds no state afterwards.

mod apriori;
mod fptree;
mod index;
mod item;
mod item_counter;
mod itemizer;
mod itemset;
mod rule;
mod transaction_reader;
mod vec_sets;

pub use crate::apriori::apriori;
pub use crate::fptree::{fp_growth, FPTree};
pub use crate::index::Index;
pub use crate::item::Item;
pub use crate::item_counter::ItemCounter;
pub use crate::itemizer::Itemizer;
pub use crate::itemset::{FrequentItemsets, ItemSet};
pub use crate::rule::{generate_rules, Rule};
pub use crate::transaction_reader::{tokenize_line, TransactionReader};

use crate::vec_sets::dedupe_sorted;
use std::str::FromStr;
use thiserror::Error;

/// Which mining engine to run. Both produce identical itemsets and rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Apriori,
    FpGrowth,
}

impl FromStr for Algorithm {
    type Err = String;
    fn from_str(s: &str) -> Result<Algorithm, String> {
        match s.to_ascii_lowercase().as_str() {
            "apriori" => Ok(Algorithm::Apriori),
            "fpgrowth" | "fp-growth" => Ok(Algorithm::FpGrowth),
            other => Err(format!(
                "unknown algorithm '{}', expected 'apriori' or 'fpgrowth'",
                other
            )),
        }
    }
}

/// Raised before any mining work begins; there are no partial results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("minimum support must be in (0, 1], got {0}")]
    MinSupportOutOfRange(f64),
    #[error("minimum confidence must be in (0, 1], got {0}")]
    MinConfidenceOutOfRange(f64),
}

/// The output of one mining invocation: the size-grouped pattern table and
/// the confidence-sorted rules, plus the label interner needed to render
/// either back to strings.
pub struct MiningResult {
    itemizer: Itemizer,
    itemsets: FrequentItemsets,
    rules: Vec<Rule>,
}

impl MiningResult {
    pub fn itemsets(&self) -> &FrequentItemsets {
        &self.itemsets
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn itemizer(&self) -> &Itemizer {
        &self.itemizer
    }

    pub fn num_transactions(&self) -> usize {
        self.itemsets.num_transactions()
    }

    /// Support of an itemset given by label, if it was mined as frequent.
    pub fn support_of<S: AsRef<str>>(&self, items: &[S]) -> Option<f64> {
        let mut ids = Vec::with_capacity(items.len());
        for s in items {
            ids.push(self.itemizer.get(s.as_ref())?);
        }
        ids.sort();
        self.itemsets.support_of(&ids)
    }

    /// Looks up an emitted rule by the labels of its two sides.
    pub fn find_rule<S: AsRef<str>>(&self, antecedent: &[S], consequent: &[S]) -> Option<&Rule> {
        let mut a = Vec::with_capacity(antecedent.len());
        for s in antecedent {
            a.push(self.itemizer.get(s.as_ref())?);
        }
        a.sort();
        let mut c = Vec::with_capacity(consequent.len());
        for s in consequent {
            c.push(self.itemizer.get(s.as_ref())?);
        }
        c.sort();
        self.rules
            .iter()
            .find(|r| r.antecedent == a && r.consequent == c)
    }
}

/// Mines frequent itemsets and association rules from `transactions`.
///
/// Each transaction is a list of item labels; duplicates within one
/// transaction are ignored. `min_support` and `min_confidence` must lie in
/// (0, 1]. An empty transaction set yields an empty result. Output is
/// deterministic for a given input, including rule order.
pub fn mine<S: AsRef<str>>(
    transactions: &[Vec<S>],
    min_support: f64,
    min_confidence: f64,
    algorithm: Algorithm,
) -> Result<MiningResult, ValidationError> {
    if !(min_support > 0.0 && min_support <= 1.0) {
        return Err(ValidationError::MinSupportOutOfRange(min_support));
    }
    if !(min_confidence > 0.0 && min_confidence <= 1.0) {
        return Err(ValidationError::MinConfidenceOutOfRange(min_confidence));
    }

    let mut itemizer = Itemizer::new();
    if transactions.is_empty() {
        return Ok(MiningResult {
            itemizer,
            itemsets: FrequentItemsets::new(0),
            rules: vec![],
        });
    }

    // One pass to itemize, dedupe, index, and count global frequencies.
    let mut index = Index::new();
    let mut item_count = ItemCounter::new();
    let mut itemized: Vec<Vec<Item>> = Vec::with_capacity(transactions.len());
    for raw in transactions {
        let mut transaction: Vec<Item> =
            raw.iter().map(|s| itemizer.id_of(s.as_ref())).collect();
        transaction.sort();
        dedupe_sorted(&mut transaction);
        index.insert(&transaction);
        for item in &transaction {
            item_count.add(item, 1);
        }
        itemized.push(transaction);
    }

    // Frequent means count >= ceil(min_support * n); using the absolute
    // count in both engines keeps their outputs comparable exactly.
    let num_transactions = transactions.len();
    let min_count = (min_support * num_transactions as f64).ceil() as u32;

    let mined: Vec<ItemSet> = match algorithm {
        Algorithm::Apriori => apriori(&index, &item_count, min_count),
        Algorithm::FpGrowth => {
            let mut fptree = FPTree::new();
            for mut transaction in itemized {
                // Items below the support threshold never appear in any
                // frequent itemset; dropping them up front keeps the tree
                // small. Descending frequency order maximizes prefix
                // sharing and is what conditional mining relies on.
                transaction.retain(|item| item_count.get(item) >= min_count);
                item_count.sort_descending(&mut transaction);
                fptree.insert(&transaction, 1);
            }
            fp_growth(&fptree, min_count, &[])
        }
    };

    let mut itemsets = FrequentItemsets::new(num_transactions);
    for itemset in mined {
        itemsets.add(itemset);
    }
    let rules = generate_rules(&itemsets, &index, min_confidence);

    Ok(MiningResult {
        itemizer,
        itemsets,
        rules,
    })
}
