use super::{Store, StoreResult};
use crate::checklist::{Checklist, ChecklistItem};
use tracing::info;

/// Loads the stored checklist, seeding `defaults` only when the table is empty.
pub fn load_or_seed(store: &Store, defaults: &[String], today: &str) -> StoreResult<Checklist> {
    let items = store.list_items()?;
    if !items.is_empty() {
        return Ok(Checklist::with_items(items));
    }

    info!(count = defaults.len(), "empty database, seeding default items");
    let mut list = Checklist::new();
    for label in defaults {
        if list.contains(label) || label.trim().is_empty() {
            continue;
        }
        store.insert(label, today, false)?;
        list.push(ChecklistItem::new(label.as_str(), false, today));
    }
    Ok(list)
}
