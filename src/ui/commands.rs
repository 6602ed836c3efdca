use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, InputMode};
use super::update::Action;
use crate::models::Category;

/// A `:` command. Commands only touch view state; anything that changes the
/// ledger is handed back as an [`Action`] for the caller to dispatch.
pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> Option<Action>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit SiteCost", cmd_quit, r);
    register_command!("quit", "Quit SiteCost", cmd_quit, r);
    register_command!("a", "Focus the entry form", cmd_add, r);
    register_command!("add", "Focus the entry form", cmd_add, r);
    register_command!("d", "Delete selected expense", cmd_delete, r);
    register_command!("delete", "Delete selected expense", cmd_delete, r);
    register_command!("clear", "Reset the entry form", cmd_clear, r);
    register_command!("submit", "Add the expense in the form", cmd_submit, r);
    register_command!("category", "Set the form category (:category labor)", cmd_category, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!("help", "Show available commands", cmd_help, r);

    r
});

/// Run a command line (without the leading `:`).
pub(crate) fn handle_command(input: &str, app: &mut App) -> Option<Action> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if cmd_name.is_empty() {
        return None;
    }

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app)
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
        None
    }
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> Option<Action> {
    app.running = false;
    None
}

fn cmd_add(_args: &str, app: &mut App) -> Option<Action> {
    app.input_mode = InputMode::Form;
    None
}

fn cmd_delete(_args: &str, app: &mut App) -> Option<Action> {
    match app.selected_expense() {
        Some(expense) => Some(Action::Delete(expense.id.clone())),
        None => {
            app.set_status("No expense selected");
            None
        }
    }
}

fn cmd_clear(_args: &str, app: &mut App) -> Option<Action> {
    app.reset_draft();
    app.set_status("Form cleared");
    None
}

fn cmd_submit(_args: &str, app: &mut App) -> Option<Action> {
    Some(Action::Submit(app.draft.clone()))
}

fn cmd_category(args: &str, app: &mut App) -> Option<Action> {
    match Category::parse(args) {
        Some(category) => {
            app.draft.category = category;
            app.set_status(format!("Category: {}", category.label()));
        }
        None if args.is_empty() => app.set_status("Usage: :category <name>"),
        None => app.set_status(format!("Unknown category: {args}")),
    }
    None
}

fn cmd_help(_args: &str, app: &mut App) -> Option<Action> {
    app.show_help = true;
    None
}
