use chrono::{Local, NaiveDate};

/// Date format stored in the `date` column, e.g. `19-10-2026`.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn today() -> String {
    format_date(Local::now().date_naive())
}

/// One row of the checklist. The label is the identity of the item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub label: String,
    pub checked: bool,
    pub date: String,
}

impl ChecklistItem {
    pub fn new(label: impl Into<String>, checked: bool, date: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            checked,
            date: date.into(),
        }
    }

    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }

    pub fn check_marker(&self) -> char {
        if self.checked { 'x' } else { ' ' }
    }
}
