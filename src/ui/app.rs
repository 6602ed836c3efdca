use crate::ledger::Ledger;
use crate::models::{Expense, ExpenseDraft};
use crate::store::LedgerStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Form,
    Command,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Form => write!(f, "FORM"),
            Self::Command => write!(f, "COMMAND"),
        }
    }
}

/// Entry form fields, in on-screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Date,
    Category,
    Amount,
    Vendor,
    Project,
    Description,
}

impl FormField {
    pub(crate) fn all() -> &'static [FormField] {
        &[
            Self::Date,
            Self::Category,
            Self::Amount,
            Self::Vendor,
            Self::Project,
            Self::Description,
        ]
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Category => "Category",
            Self::Amount => "Amount ($)",
            Self::Vendor => "Vendor",
            Self::Project => "Project",
            Self::Description => "Description",
        }
    }

    pub(crate) fn placeholder(&self) -> &'static str {
        match self {
            Self::Date => "YYYY-MM-DD",
            Self::Category => "",
            Self::Amount => "0.00",
            Self::Vendor => "Vendor name",
            Self::Project => "Project name",
            Self::Description => "Expense description",
        }
    }

    pub(crate) fn next(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| f == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub(crate) fn prev(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| f == self).unwrap_or(0);
        if idx == 0 {
            all[all.len() - 1]
        } else {
            all[idx - 1]
        }
    }

    /// Whether a typed character belongs in this field.
    pub(crate) fn accepts(&self, c: char) -> bool {
        match self {
            Self::Date => c.is_ascii_digit() || c == '-',
            Self::Category => false,
            Self::Amount => c.is_ascii_digit() || c == '.' || c == '-',
            Self::Vendor | Self::Project | Self::Description => !c.is_control(),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    // Entry form
    pub(crate) draft: ExpenseDraft,
    pub(crate) form_field: FormField,

    // Read-only projection of the ledger
    pub(crate) expenses: Vec<Expense>,
    pub(crate) expense_index: usize,
    pub(crate) expense_scroll: usize,

    pub(crate) date_format: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(date_format: &str) -> Self {
        Self {
            running: true,
            input_mode: InputMode::Form,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            draft: ExpenseDraft::today(),
            form_field: FormField::Date,

            expenses: Vec::new(),
            expense_index: 0,
            expense_scroll: 0,

            date_format: date_format.to_string(),

            visible_rows: 10,
        }
    }

    /// Re-read the ledger's collection and keep the cursor in range.
    pub(crate) fn refresh<S: LedgerStore>(&mut self, ledger: &Ledger<S>) {
        self.expenses = ledger.expenses().to_vec();
        if self.expense_index >= self.expenses.len() {
            self.expense_index = self.expenses.len().saturating_sub(1);
        }
        if self.expense_scroll > self.expense_index {
            self.expense_scroll = self.expense_index;
        }
    }

    pub(crate) fn selected_expense(&self) -> Option<&Expense> {
        self.expenses.get(self.expense_index)
    }

    /// Current text of a form field, `None` for the category selector.
    pub(crate) fn field_text(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Date => Some(self.draft.date.as_str()),
            FormField::Category => None,
            FormField::Amount => Some(self.draft.amount.as_str()),
            FormField::Vendor => Some(self.draft.vendor.as_str()),
            FormField::Project => Some(self.draft.project.as_str()),
            FormField::Description => Some(self.draft.description.as_str()),
        }
    }

    pub(crate) fn field_text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Date => Some(&mut self.draft.date),
            FormField::Category => None,
            FormField::Amount => Some(&mut self.draft.amount),
            FormField::Vendor => Some(&mut self.draft.vendor),
            FormField::Project => Some(&mut self.draft.project),
            FormField::Description => Some(&mut self.draft.description),
        }
    }

    pub(crate) fn reset_draft(&mut self) {
        self.draft = ExpenseDraft::today();
        self.form_field = FormField::Date;
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
