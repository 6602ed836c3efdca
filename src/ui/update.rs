use super::app::App;
use super::util::format_amount;
use crate::ledger::Ledger;
use crate::models::ExpenseDraft;
use crate::store::LedgerStore;

/// Everything the user can do that changes the ledger.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Action {
    Submit(ExpenseDraft),
    Delete(String),
}

/// Apply one action to the ledger and bring the view state up to date.
pub(crate) fn update<S: LedgerStore>(app: &mut App, ledger: &mut Ledger<S>, action: Action) {
    match action {
        Action::Submit(draft) => match draft.validate() {
            Ok(expense) => {
                let msg = format!(
                    "Added: {} ({})",
                    expense.description,
                    format_amount(expense.amount)
                );
                ledger.insert(expense);
                app.reset_draft();
                app.expense_index = 0;
                app.expense_scroll = 0;
                app.set_status(msg);
            }
            Err(e) => {
                tracing::debug!(error = %e, "Rejected draft");
                app.set_status(e.to_string());
            }
        },
        Action::Delete(id) => {
            let description = app
                .expenses
                .iter()
                .find(|e| e.id == id)
                .map(|e| e.description.clone());
            ledger.delete(&id);
            match description {
                Some(desc) => app.set_status(format!("Deleted: {desc}")),
                None => app.set_status("Nothing to delete"),
            }
        }
    }
    app.refresh(ledger);
}
