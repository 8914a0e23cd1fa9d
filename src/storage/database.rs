use crate::checklist::ChecklistItem;
use rusqlite::{params, Connection, ErrorCode};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors surfaced by individual store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("\"{0}\" is already on the list")]
    Duplicate(String),

    #[error("\"{0}\" is not in the database")]
    NotFound(String),

    #[error("item label cannot be empty")]
    EmptyLabel,

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Thin wrapper around the single `list` table.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> StoreResult<Self> {
        debug!(path = %path.display(), "opening checklist database");
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Creates the `list` table when missing. Existing files are left as-is;
    /// later columns must be added with `ALTER TABLE ... ADD COLUMN`.
    pub fn ensure_schema(&self) -> StoreResult<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS list (
                id INTEGER PRIMARY KEY,
                item VARCHAR NOT NULL UNIQUE,
                checked BOOL NOT NULL,
                date TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    pub fn insert(&self, label: &str, date: &str, checked: bool) -> StoreResult<()> {
        if label.trim().is_empty() {
            return Err(StoreError::EmptyLabel);
        }

        self.conn
            .execute(
                "INSERT INTO list (item, date, checked) VALUES (?1, ?2, ?3)",
                params![label, date, checked],
            )
            .map_err(|e| match e {
                rusqlite::Error::SqliteFailure(ref err, _)
                    if err.code == ErrorCode::ConstraintViolation =>
                {
                    StoreError::Duplicate(label.to_string())
                }
                e => StoreError::Sqlite(e),
            })?;

        debug!(label, checked, "inserted item");
        Ok(())
    }

    /// Removes every row with this label and returns how many went away.
    pub fn delete_by_label(&self, label: &str) -> StoreResult<usize> {
        let count = self
            .conn
            .execute("DELETE FROM list WHERE item = ?1", params![label])?;
        debug!(label, count, "deleted item");
        Ok(count)
    }

    pub fn toggle_checked(&self, label: &str) -> StoreResult<()> {
        let count = self.conn.execute(
            "UPDATE list SET checked = NOT checked WHERE item = ?1",
            params![label],
        )?;
        if count == 0 {
            return Err(StoreError::NotFound(label.to_string()));
        }
        Ok(())
    }

    /// All labels in insertion order.
    pub fn list_labels(&self) -> StoreResult<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT item FROM list ORDER BY id ASC")?;
        let labels = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut result = Vec::new();
        for label in labels {
            result.push(label?);
        }
        Ok(result)
    }

    pub fn list_items(&self) -> StoreResult<Vec<ChecklistItem>> {
        let mut stmt = self
            .conn
            .prepare("SELECT item, checked, date FROM list ORDER BY id ASC")?;
        let items = stmt.query_map([], |row| {
            Ok(ChecklistItem {
                label: row.get(0)?,
                checked: row.get(1)?,
                date: row.get(2)?,
            })
        })?;

        let mut result = Vec::new();
        for item in items {
            result.push(item?);
        }
        Ok(result)
    }

    pub fn is_checked(&self, label: &str) -> StoreResult<bool> {
        self.conn
            .query_row(
                "SELECT checked FROM list WHERE item = ?1",
                params![label],
                |row| row.get(0),
            )
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => StoreError::NotFound(label.to_string()),
                e => StoreError::Sqlite(e),
            })
    }
}
