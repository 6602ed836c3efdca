mod category;
mod draft;
mod expense;

pub(crate) use category::Category;
pub(crate) use draft::{DraftError, ExpenseDraft};
pub(crate) use expense::{Expense, NewExpense};
