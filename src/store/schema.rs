pub(crate) const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS slots (
    key         TEXT PRIMARY KEY,
    value       TEXT NOT NULL,
    updated_at  TEXT NOT NULL
);
"#;

/// Name of the slot that holds the whole ledger as a JSON array.
pub(crate) const LEDGER_SLOT: &str = "construction-expenses";
