use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Category;

/// One recorded expense. Field names and shapes match the persisted slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Expense {
    pub(crate) id: String,
    pub(crate) date: NaiveDate,
    pub(crate) category: Category,
    pub(crate) description: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub(crate) amount: Decimal,
    pub(crate) vendor: String,
    pub(crate) project: String,
}

/// A validated expense that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NewExpense {
    pub(crate) date: NaiveDate,
    pub(crate) category: Category,
    pub(crate) description: String,
    pub(crate) amount: Decimal,
    pub(crate) vendor: String,
    pub(crate) project: String,
}

impl NewExpense {
    pub(crate) fn with_id(self, id: String) -> Expense {
        Expense {
            id,
            date: self.date,
            category: self.category,
            description: self.description,
            amount: self.amount,
            vendor: self.vendor,
            project: self.project,
        }
    }
}
