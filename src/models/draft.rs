use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

use super::{Category, NewExpense};

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Largest accepted amount. Sums and percentages of any realistic ledger stay
/// well inside `Decimal` range, and readers that parse the slot as f64 still
/// see every cent.
// 99_999_999_999_999 at scale 2, built via the const constructor.
pub(crate) const MAX_AMOUNT: Decimal = Decimal::from_parts(276_447_231, 23_283, 0, false, 2);

/// Why a draft could not be submitted. Each variant names the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum DraftError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("Date must be YYYY-MM-DD, got '{0}'")]
    InvalidDate(String),
    #[error("Amount must be a number, got '{0}'")]
    InvalidAmount(String),
    #[error("Amount cannot be negative")]
    NegativeAmount,
    #[error("Amount can have at most two decimal places")]
    TooPrecise,
    #[error("Amount cannot exceed {0}")]
    TooLarge(Decimal),
}

/// The in-progress form. Date and amount stay as raw text until submission
/// so partial input (e.g. "12." or "2024-0") is never rejected mid-typing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExpenseDraft {
    pub(crate) date: String,
    pub(crate) category: Category,
    pub(crate) description: String,
    pub(crate) amount: String,
    pub(crate) vendor: String,
    pub(crate) project: String,
}

impl ExpenseDraft {
    pub(crate) fn new(today: NaiveDate) -> Self {
        Self {
            date: today.format(DATE_INPUT_FORMAT).to_string(),
            category: Category::default(),
            description: String::new(),
            amount: String::new(),
            vendor: String::new(),
            project: String::new(),
        }
    }

    pub(crate) fn today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    /// Check the draft in form order and produce a record ready for insertion.
    pub(crate) fn validate(&self) -> Result<NewExpense, DraftError> {
        let date_str = required(&self.date, "Date")?;
        let date = NaiveDate::parse_from_str(date_str, DATE_INPUT_FORMAT)
            .map_err(|_| DraftError::InvalidDate(date_str.to_string()))?;

        let amount = parse_amount(required(&self.amount, "Amount")?)?;
        let vendor = required(&self.vendor, "Vendor")?;
        let project = required(&self.project, "Project")?;
        let description = required(&self.description, "Description")?;

        Ok(NewExpense {
            date,
            category: self.category,
            description: description.to_string(),
            amount,
            vendor: vendor.to_string(),
            project: project.to_string(),
        })
    }
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, DraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(DraftError::Missing(field))
    } else {
        Ok(trimmed)
    }
}

/// Parse a non-negative amount with at most cent precision.
fn parse_amount(input: &str) -> Result<Decimal, DraftError> {
    let amount = Decimal::from_str(input.trim())
        .map_err(|_| DraftError::InvalidAmount(input.trim().to_string()))?;
    if amount.is_zero() {
        // "-0" parses with a negative sign
        return Ok(Decimal::ZERO);
    }
    if amount.is_sign_negative() {
        return Err(DraftError::NegativeAmount);
    }
    if amount.normalize().scale() > 2 {
        return Err(DraftError::TooPrecise);
    }
    if amount > MAX_AMOUNT {
        return Err(DraftError::TooLarge(MAX_AMOUNT));
    }
    Ok(amount)
}
