pub mod item;
pub mod list;

pub use item::{ChecklistItem, DATE_FORMAT, format_date, today};
pub use list::{Checklist, DEFAULT_ITEMS};
