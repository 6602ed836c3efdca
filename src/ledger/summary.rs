use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::{Category, Expense};

/// Aggregates derived from the full collection. Never cached; build a fresh
/// one whenever the numbers are shown.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct Summary {
    pub(crate) total: Decimal,
    pub(crate) count: usize,
    /// Only categories with at least one record appear.
    pub(crate) by_category: BTreeMap<Category, Decimal>,
}

impl Summary {
    pub(crate) fn of(expenses: &[Expense]) -> Self {
        let mut by_category = BTreeMap::new();
        let mut total = Decimal::ZERO;
        for expense in expenses {
            total = saturating_add(total, expense.amount);
            let sum = by_category.entry(expense.category).or_insert(Decimal::ZERO);
            *sum = saturating_add(*sum, expense.amount);
        }
        Self {
            total,
            count: expenses.len(),
            by_category,
        }
    }

    /// Share of the total for one category, as a whole percentage.
    pub(crate) fn percent_of_total(&self, amount: Decimal) -> u16 {
        use rust_decimal::prelude::ToPrimitive;

        if self.total.is_zero() {
            return 0;
        }
        // Divide first when scaling by 100 would overflow.
        amount
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|scaled| scaled.checked_div(self.total))
            .or_else(|| {
                amount
                    .checked_div(self.total)
                    .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            })
            .and_then(|percent| percent.round().to_u16())
            .unwrap_or(0)
    }
}

/// Amounts come from the slot as well as the form, so sums clamp at
/// `Decimal::MAX` instead of overflowing.
fn saturating_add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or(Decimal::MAX)
}
