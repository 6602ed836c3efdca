mod summary;

pub(crate) use summary::Summary;

use crate::models::{Expense, NewExpense};
use crate::store::LedgerStore;

/// Owns the ordered expense collection (newest first) and keeps the store in
/// sync: every insert or delete rewrites the whole slot.
pub(crate) struct Ledger<S: LedgerStore> {
    store: S,
    expenses: Vec<Expense>,
    last_issued: i64,
}

impl<S: LedgerStore> Ledger<S> {
    pub(crate) fn open(store: S) -> Self {
        let expenses = store.load();
        tracing::info!(count = expenses.len(), "Loaded ledger");
        Self {
            store,
            expenses,
            last_issued: 0,
        }
    }

    pub(crate) fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Assign an id, prepend the record and persist. The new record is
    /// always the first element of the returned slice.
    pub(crate) fn insert(&mut self, expense: NewExpense) -> &[Expense] {
        let id = self.next_id(chrono::Utc::now().timestamp_millis());
        tracing::debug!(%id, amount = %expense.amount, category = %expense.category, "Inserting expense");
        self.expenses.insert(0, expense.with_id(id));
        self.persist();
        &self.expenses
    }

    /// Remove the record with `id`. Unknown ids are a no-op but still persist,
    /// matching the write-after-every-change lifecycle.
    pub(crate) fn delete(&mut self, id: &str) -> &[Expense] {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        if self.expenses.len() == before {
            tracing::debug!(%id, "Delete ignored, no such expense");
        } else {
            tracing::debug!(%id, "Deleted expense");
        }
        self.persist();
        &self.expenses
    }

    /// Creation timestamp in milliseconds, bumped past any id already issued
    /// or present so ids stay unique when the clock stalls or goes backwards.
    fn next_id(&mut self, now_millis: i64) -> String {
        let mut candidate = now_millis.max(self.last_issued + 1);
        while self.expenses.iter().any(|e| e.id == candidate.to_string()) {
            candidate += 1;
        }
        self.last_issued = candidate;
        candidate.to_string()
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.persist(&self.expenses) {
            tracing::warn!(error = %format!("{e:#}"), "Failed to persist ledger");
        }
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }
}
