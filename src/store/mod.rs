mod schema;

#[cfg(test)]
mod memory;

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use crate::models::Expense;

use schema::LEDGER_SLOT;

#[cfg(test)]
pub(crate) use memory::MemoryStore;

/// Persistence boundary for the ledger: read everything once, write everything
/// after each change.
pub(crate) trait LedgerStore {
    /// Returns the persisted collection, or an empty one when the slot is
    /// missing or unreadable. The two cases are not distinguished.
    fn load(&self) -> Vec<Expense>;

    /// Overwrites the persisted collection in full.
    fn persist(&mut self, expenses: &[Expense]) -> Result<()>;
}

fn encode(expenses: &[Expense]) -> Result<String> {
    serde_json::to_string(expenses).context("Failed to serialize expenses")
}

/// Decode slot content, treating anything unparseable as "no data".
fn decode(raw: Option<&str>) -> Vec<Expense> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str(raw) {
        Ok(expenses) => expenses,
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring unreadable ledger slot");
            Vec::new()
        }
    }
}

/// SQLite-backed key/value store. The ledger occupies a single row.
pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .context("Failed to set database pragmas")?;
        conn.execute_batch(schema::SCHEMA)
            .context("Failed to create database schema")?;
        tracing::debug!(path = %path.display(), "Opened database");
        Ok(Self { conn })
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::SCHEMA)?;
        Ok(Self { conn })
    }

    pub(crate) fn read_slot(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?)
    }

    pub(crate) fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
            params![key, value, chrono::Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}

impl LedgerStore for Database {
    fn load(&self) -> Vec<Expense> {
        match self.read_slot(LEDGER_SLOT) {
            Ok(raw) => decode(raw.as_deref()),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read ledger slot");
                Vec::new()
            }
        }
    }

    fn persist(&mut self, expenses: &[Expense]) -> Result<()> {
        let json = encode(expenses)?;
        self.write_slot(LEDGER_SLOT, &json)
            .context("Failed to write ledger slot")
    }
}

#[cfg(test)]
mod tests;
