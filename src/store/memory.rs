use anyhow::Result;

use super::{decode, encode, LedgerStore};
use crate::models::Expense;

/// In-memory stand-in for the database. Keeps the serialized text so tests
/// go through the same encode/decode path as the real slot.
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    pub(crate) slot: Option<String>,
    pub(crate) writes: usize,
    pub(crate) fail_writes: bool,
}

impl MemoryStore {
    pub(crate) fn with_slot(raw: &str) -> Self {
        Self {
            slot: Some(raw.to_string()),
            ..Self::default()
        }
    }
}

impl LedgerStore for MemoryStore {
    fn load(&self) -> Vec<Expense> {
        decode(self.slot.as_deref())
    }

    fn persist(&mut self, expenses: &[Expense]) -> Result<()> {
        if self.fail_writes {
            anyhow::bail!("storage quota exceeded");
        }
        self.slot = Some(encode(expenses)?);
        self.writes += 1;
        Ok(())
    }
}
