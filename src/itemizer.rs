use crate::item::Item;
use fnv::FnvHashMap;

/// Maps item label strings to dense integer ids and back. Ids start at 1;
/// 0 is reserved for the null item.
pub struct Itemizer {
    next_item_id: u32,
    item_str_to_id: FnvHashMap<String, Item>,
    item_id_to_str: Vec<String>,
}

impl Itemizer {
    pub fn new() -> Itemizer {
        Itemizer {
            next_item_id: 1,
            item_str_to_id: FnvHashMap::default(),
            item_id_to_str: vec![],
        }
    }

    pub fn id_of(&mut self, item: &str) -> Item {
        if let Some(id) = self.item_str_to_id.get(item) {
            return *id;
        }
        let id = self.next_item_id;
        self.next_item_id += 1;
        self.item_str_to_id
            .insert(String::from(item), Item::with_id(id));
        self.item_id_to_str.push(String::from(item));
        debug_assert_eq!(self.item_id_to_str.len(), id as usize);
        Item::with_id(id)
    }

    /// Immutable lookup; None if the label was never interned.
    pub fn get(&self, item: &str) -> Option<Item> {
        self.item_str_to_id.get(item).copied()
    }

    pub fn str_of(&self, id: Item) -> &str {
        &self.item_id_to_str[id.as_index() - 1]
    }

    pub fn num_items(&self) -> usize {
        self.item_id_to_str.len()
    }
}

impl Default for Itemizer {
    fn default() -> Self {
        Itemizer::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Itemizer;

    #[test]
    fn test_round_trip() {
        let mut itemizer = Itemizer::new();
        let bread = itemizer.id_of("Bread");
        let milk = itemizer.id_of("Milk");
        assert_ne!(bread, milk);
        // Interning the same label twice yields the same id.
        assert_eq!(itemizer.id_of("Bread"), bread);
        assert_eq!(itemizer.str_of(bread), "Bread");
        assert_eq!(itemizer.str_of(milk), "Milk");
        assert_eq!(itemizer.get("Milk"), Some(milk));
        assert_eq!(itemizer.get("Butter"), None);
        assert_eq!(itemizer.num_items(), 2);
    }
}
