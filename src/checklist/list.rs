use super::ChecklistItem;

/// Seed list shown on the very first start, before the store holds any rows.
pub const DEFAULT_ITEMS: [&str; 7] = [
    "Protein Shake",
    "Creatine",
    "Vitamin D",
    "Cuddles",
    "Pizza",
    "Chocolate",
    "Bananas",
];

/// Ordered in-memory mirror of the `list` table.
#[derive(Debug, Clone, Default)]
pub struct Checklist {
    pub items: Vec<ChecklistItem>,
}

impl Checklist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<ChecklistItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ChecklistItem> {
        self.items.get(index)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.items.iter().any(|item| item.label == label)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.label.as_str()).collect()
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }

    /// Appends an item and returns its index.
    pub fn push(&mut self, item: ChecklistItem) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }

    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let item = self.items.get_mut(index)?;
        item.toggle();
        Some(item.checked)
    }

    /// Removes the item at `index`, shifting later items left.
    pub fn remove(&mut self, index: usize) -> Option<ChecklistItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }
}
