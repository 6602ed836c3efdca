use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::config::Config;
use crate::ledger::{Ledger, Summary};
use crate::models::Category;
use crate::store::LedgerStore;
use crate::ui::app::{App, FormField, InputMode};
use crate::ui::commands;
use crate::ui::render;
use crate::ui::update::{update, Action};
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui<S: LedgerStore>(ledger: &mut Ledger<S>, config: &Config) -> Result<()> {
    let mut app = App::new(&config.date_format);
    app.refresh(ledger);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, ledger);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!("terminal loop failed: {e:#}");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app<S: LedgerStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    ledger: &mut Ledger<S>,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            let summary = Summary::of(&app.expenses);
            app.visible_rows = render::table_rows(f.area(), &summary).max(1);
            render::render(f, app, &summary);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(key, app, ledger);
            }
        }
    }
    Ok(())
}

/// Route one key press and dispatch whatever action it produces.
fn handle_key<S: LedgerStore>(key: KeyEvent, app: &mut App, ledger: &mut Ledger<S>) {
    if app.show_help {
        app.show_help = false;
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
    {
        app.running = false;
        return;
    }

    let action = match app.input_mode {
        InputMode::Normal => handle_normal_input(key, app),
        InputMode::Form => handle_form_input(key, app),
        InputMode::Command => handle_command_input(key, app),
    };

    if let Some(action) = action {
        update(app, ledger, action);
    }
}

fn handle_normal_input(key: KeyEvent, app: &mut App) -> Option<Action> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                handle_move_down(app);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                handle_move_up(app);
            }
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('g') | KeyCode::Home => {
            scroll_to_top(&mut app.expense_index, &mut app.expense_scroll);
        }
        KeyCode::Char('G') | KeyCode::End => {
            scroll_to_bottom(
                &mut app.expense_index,
                &mut app.expense_scroll,
                app.expenses.len(),
                app.visible_rows,
            );
        }
        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Char('n') | KeyCode::Tab => {
            app.input_mode = InputMode::Form;
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
            return match app.selected_expense() {
                Some(expense) => Some(Action::Delete(expense.id.clone())),
                None => {
                    app.set_status("No expense selected");
                    None
                }
            };
        }
        KeyCode::Esc => app.status_message.clear(),
        _ => {}
    }
    None
}

fn handle_form_input(key: KeyEvent, app: &mut App) -> Option<Action> {
    match key.code {
        KeyCode::Esc => app.input_mode = InputMode::Normal,
        KeyCode::Enter => return Some(Action::Submit(app.draft.clone())),
        KeyCode::Tab | KeyCode::Down => app.form_field = app.form_field.next(),
        KeyCode::BackTab | KeyCode::Up => app.form_field = app.form_field.prev(),
        _ if app.form_field == FormField::Category => handle_category_input(key, app),
        _ => handle_text_input(key, app),
    }
    None
}

fn handle_category_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Left | KeyCode::Char('-') => app.draft.category = app.draft.category.step(-1),
        KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('+') => {
            app.draft.category = app.draft.category.step(1);
        }
        KeyCode::Char(c) => {
            let c = c.to_ascii_lowercase();
            if let Some(category) = Category::all()
                .iter()
                .find(|cat| cat.as_str().starts_with(c))
            {
                app.draft.category = *category;
            }
        }
        _ => {}
    }
}

fn handle_text_input(key: KeyEvent, app: &mut App) {
    let field = app.form_field;
    let Some(text) = app.field_text_mut(field) else {
        return;
    };
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => text.clear(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) && field.accepts(c) => {
            text.push(c);
        }
        KeyCode::Backspace => {
            text.pop();
        }
        _ => {}
    }
}

fn handle_command_input(key: KeyEvent, app: &mut App) -> Option<Action> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            return commands::handle_command(&input, app);
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Char(c) => app.command_input.push(c),
        _ => {}
    }
    None
}

fn handle_move_down(app: &mut App) {
    scroll_down(
        &mut app.expense_index,
        &mut app.expense_scroll,
        app.expenses.len(),
        app.visible_rows,
    );
}

fn handle_move_up(app: &mut App) {
    scroll_up(&mut app.expense_index, &mut app.expense_scroll);
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::models::ExpenseDraft;
    use crate::store::MemoryStore;

    fn setup() -> (App, Ledger<MemoryStore>) {
        let ledger = Ledger::open(MemoryStore::default());
        let mut app = App::new("%m/%d/%Y");
        app.refresh(&ledger);
        (app, ledger)
    }

    fn press(app: &mut App, ledger: &mut Ledger<MemoryStore>, code: KeyCode) {
        handle_key(KeyEvent::new(code, KeyModifiers::NONE), app, ledger);
    }

    fn ctrl(app: &mut App, ledger: &mut Ledger<MemoryStore>, c: char) {
        handle_key(
            KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL),
            app,
            ledger,
        );
    }

    fn type_str(app: &mut App, ledger: &mut Ledger<MemoryStore>, s: &str) {
        for c in s.chars() {
            press(app, ledger, KeyCode::Char(c));
        }
    }

    /// Fill the form from the Date field onward and press Enter.
    fn enter_expense(
        app: &mut App,
        ledger: &mut Ledger<MemoryStore>,
        amount: &str,
        description: &str,
    ) {
        app.input_mode = InputMode::Form;
        app.form_field = FormField::Date;
        ctrl(app, ledger, 'u');
        type_str(app, ledger, "2024-01-15");
        press(app, ledger, KeyCode::Tab);
        press(app, ledger, KeyCode::Tab);
        type_str(app, ledger, amount);
        press(app, ledger, KeyCode::Tab);
        type_str(app, ledger, "ABC Supply");
        press(app, ledger, KeyCode::Tab);
        type_str(app, ledger, "Riverside Deck");
        press(app, ledger, KeyCode::Tab);
        type_str(app, ledger, description);
        press(app, ledger, KeyCode::Enter);
    }

    #[test]
    fn test_typing_fills_form_and_enter_adds() {
        let (mut app, mut ledger) = setup();
        enter_expense(&mut app, &mut ledger, "1200.50", "Lumber");

        assert_eq!(ledger.expenses().len(), 1);
        let expense = &ledger.expenses()[0];
        assert_eq!(expense.description, "Lumber");
        assert_eq!(expense.vendor, "ABC Supply");
        assert_eq!(expense.category, Category::Materials);
        assert_eq!(app.draft, ExpenseDraft::today());
        assert_eq!(app.input_mode, InputMode::Form);
    }

    #[test]
    fn test_rejected_characters_are_dropped() {
        let (mut app, mut ledger) = setup();
        app.form_field = FormField::Amount;
        type_str(&mut app, &mut ledger, "1a2.5$0");
        assert_eq!(app.draft.amount, "12.50");

        press(&mut app, &mut ledger, KeyCode::Backspace);
        assert_eq!(app.draft.amount, "12.5");
    }

    #[test]
    fn test_question_mark_is_text_in_form() {
        let (mut app, mut ledger) = setup();
        app.form_field = FormField::Description;
        type_str(&mut app, &mut ledger, "Why?");
        assert_eq!(app.draft.description, "Why?");
        assert!(!app.show_help);
    }

    #[test]
    fn test_invalid_form_is_not_added() {
        let (mut app, mut ledger) = setup();
        enter_expense(&mut app, &mut ledger, "", "Lumber");
        assert!(ledger.expenses().is_empty());
        assert_eq!(app.status_message, "Amount is required");
        assert_eq!(app.draft.description, "Lumber");
    }

    #[test]
    fn test_category_selector() {
        let (mut app, mut ledger) = setup();
        app.form_field = FormField::Category;

        press(&mut app, &mut ledger, KeyCode::Right);
        assert_eq!(app.draft.category, Category::Labor);
        press(&mut app, &mut ledger, KeyCode::Left);
        press(&mut app, &mut ledger, KeyCode::Left);
        assert_eq!(app.draft.category, Category::Other);
        press(&mut app, &mut ledger, KeyCode::Char('p'));
        assert_eq!(app.draft.category, Category::Permits);
        press(&mut app, &mut ledger, KeyCode::Char('z'));
        assert_eq!(app.draft.category, Category::Permits);
    }

    #[test]
    fn test_delete_from_list() {
        let (mut app, mut ledger) = setup();
        enter_expense(&mut app, &mut ledger, "1200.50", "Lumber");
        enter_expense(&mut app, &mut ledger, "800", "Framing");

        press(&mut app, &mut ledger, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
        press(&mut app, &mut ledger, KeyCode::Char('j'));
        press(&mut app, &mut ledger, KeyCode::Char('d'));

        assert_eq!(ledger.expenses().len(), 1);
        assert_eq!(ledger.expenses()[0].description, "Framing");
        assert_eq!(app.status_message, "Deleted: Lumber");
    }

    #[test]
    fn test_delete_with_empty_list() {
        let (mut app, mut ledger) = setup();
        app.input_mode = InputMode::Normal;
        press(&mut app, &mut ledger, KeyCode::Delete);
        assert_eq!(app.status_message, "No expense selected");
        assert_eq!(ledger.store().writes, 0);
    }

    #[test]
    fn test_list_navigation() {
        let (mut app, mut ledger) = setup();
        for description in ["One", "Two", "Three"] {
            enter_expense(&mut app, &mut ledger, "1", description);
        }
        app.input_mode = InputMode::Normal;

        press(&mut app, &mut ledger, KeyCode::Char('G'));
        assert_eq!(app.expense_index, 2);
        press(&mut app, &mut ledger, KeyCode::Char('j'));
        assert_eq!(app.expense_index, 2);
        press(&mut app, &mut ledger, KeyCode::Up);
        assert_eq!(app.expense_index, 1);
        press(&mut app, &mut ledger, KeyCode::Char('g'));
        assert_eq!(app.expense_index, 0);
    }

    #[test]
    fn test_command_mode() {
        let (mut app, mut ledger) = setup();
        app.input_mode = InputMode::Normal;
        press(&mut app, &mut ledger, KeyCode::Char(':'));
        assert_eq!(app.input_mode, InputMode::Command);
        type_str(&mut app, &mut ledger, "quit");
        press(&mut app, &mut ledger, KeyCode::Enter);
        assert!(!app.running);
    }

    #[test]
    fn test_command_submit_dispatches() {
        let (mut app, mut ledger) = setup();
        app.draft = ExpenseDraft {
            date: "2024-01-15".into(),
            category: Category::Equipment,
            description: "Excavator rental".into(),
            amount: "450".into(),
            vendor: "Big Iron".into(),
            project: "Riverside Deck".into(),
        };
        app.input_mode = InputMode::Normal;
        press(&mut app, &mut ledger, KeyCode::Char(':'));
        type_str(&mut app, &mut ledger, "submit");
        press(&mut app, &mut ledger, KeyCode::Enter);

        assert_eq!(ledger.expenses().len(), 1);
        assert_eq!(ledger.expenses()[0].category, Category::Equipment);
    }

    #[test]
    fn test_help_dismissed_by_any_key() {
        let (mut app, mut ledger) = setup();
        app.input_mode = InputMode::Normal;
        press(&mut app, &mut ledger, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, &mut ledger, KeyCode::Char('d'));
        assert!(!app.show_help);
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn test_ctrl_q_quits_from_form() {
        let (mut app, mut ledger) = setup();
        ctrl(&mut app, &mut ledger, 'q');
        assert!(!app.running);
    }
}
