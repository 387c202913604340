use crate::itemizer::Itemizer;

/// An interned item label. Id 0 is the null item, used only as the
/// FP-Tree root's sentinel.
#[derive(Copy, Clone, Hash, PartialOrd, PartialEq, Eq, Ord, Debug)]
pub struct Item {
    id: u32,
}

impl Item {
    pub fn null() -> Item {
        Item { id: 0 }
    }
    pub fn with_id(id: u32) -> Item {
        Item { id }
    }
    pub fn as_index(&self) -> usize {
        self.id as usize
    }
    pub fn is_null(&self) -> bool {
        self.id == 0
    }
    pub fn item_vec_to_string(items: &[Item], itemizer: &Itemizer) -> String {
        let mut a: Vec<&str> = items.iter().map(|&id| itemizer.str_of(id)).collect();
        ensure_sorted(&mut a);
        a.join(" ")
    }
}

// If all items in the itemset convert to an integer, order by that integer,
// otherwise order lexicographically.
fn ensure_sorted(a: &mut Vec<&str>) {
    let all_items_convert_to_ints = a.iter().all(|x| x.parse::<u32>().is_ok());
    if all_items_convert_to_ints {
        a.sort_by_key(|x| x.parse::<u32>().unwrap_or(0));
    } else {
        a.sort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_sorted() {
        let mut numeric = vec!["10", "2", "1"];
        ensure_sorted(&mut numeric);
        assert_eq!(numeric, vec!["1", "2", "10"]);

        let mut lexical = vec!["Milk", "Bread", "10"];
        ensure_sorted(&mut lexical);
        assert_eq!(lexical, vec!["10", "Bread", "Milk"]);
    }
}
