use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::{App, InputMode};
use crate::ui::theme;
use crate::ui::util::{format_amount, format_date, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let browsing = app.input_mode != InputMode::Form;
    let border_color = if browsing {
        theme::ACCENT
    } else {
        theme::OVERLAY
    };

    if app.expenses.is_empty() {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(" Expenses (0) ", theme::title_style()));
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled(
                "No expenses recorded yet. Add your first expense above!",
                theme::dim_style(),
            )),
        ];
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Date", "Project", "Category", "Description", "Vendor", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .expenses
        .iter()
        .enumerate()
        .skip(app.expense_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, expense)| {
            let style = if browsing && i == app.expense_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(format_date(expense.date, &app.date_format)),
                Cell::from(truncate(&expense.project, 18)),
                Cell::from(Span::styled(
                    format!(" {} ", expense.category),
                    theme::badge_style(expense.category),
                )),
                Cell::from(truncate(&expense.description, 40)),
                Cell::from(truncate(&expense.vendor, 20)),
                Cell::from(Span::styled(
                    format!("{:>12}", format_amount(expense.amount)),
                    theme::amount_style(),
                )),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(18),
        Constraint::Length(16),
        Constraint::Min(16),
        Constraint::Length(20),
        Constraint::Length(12),
    ];

    let title = Line::from(vec![
        Span::styled(
            format!(" Expenses ({}) ", app.expenses.len()),
            theme::title_style(),
        ),
        Span::styled(
            if browsing { "d delete " } else { "" },
            Style::default().fg(theme::RED),
        ),
    ]);

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title),
    );

    f.render_widget(table, area);
}
