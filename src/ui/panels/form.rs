use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::app::{App, FormField, InputMode};
use crate::ui::theme;

const LABEL_WIDTH: usize = 13;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let editing = app.input_mode == InputMode::Form;
    let value_width = (area.width as usize).saturating_sub(LABEL_WIDTH + 3);

    let mut lines = vec![Line::from("")];
    let mut cursor = None;

    for (row, field) in FormField::all().iter().enumerate() {
        let focused = editing && *field == app.form_field;
        let label_style = if focused {
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            theme::dim_style()
        };
        let marker = if focused { "›" } else { " " };
        let label = Span::styled(
            format!("{marker}{:<width$}", field.label(), width = LABEL_WIDTH - 1),
            label_style,
        );

        let value = match app.field_text(*field) {
            Some(text) if text.is_empty() => {
                Span::styled(field.placeholder().to_string(), theme::dim_style())
            }
            Some(text) => {
                let shown = tail(text, value_width.saturating_sub(1));
                Span::styled(shown, theme::normal_style())
            }
            None => {
                let category = app.draft.category;
                let text = if focused {
                    format!("◀ {} ▶", category.label())
                } else {
                    format!(" {} ", category.label())
                };
                Span::styled(text, theme::badge_style(category))
            }
        };

        if focused {
            if let Some(text) = app.field_text(*field) {
                let col = LABEL_WIDTH + text.chars().count().min(value_width.saturating_sub(1));
                // +1 for the border, +1 for the leading blank line
                cursor = Some((
                    area.x + 1 + col as u16,
                    area.y + 2 + (row as u16) * 2,
                ));
            }
        }

        lines.push(Line::from(vec![label, value]));
        lines.push(Line::from(""));
    }

    let button_style = if editing {
        Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        theme::dim_style()
    };
    lines.push(Line::from(Span::styled(" Add Expense (Enter) ", button_style)).centered());
    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            if editing {
                "Tab next · ←/→ category · Esc list"
            } else {
                "a or i to edit the form"
            },
            theme::dim_style(),
        ))
        .centered(),
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if editing {
            theme::ACCENT
        } else {
            theme::OVERLAY
        }))
        .title(Span::styled(" Add New Expense ", theme::title_style()));

    f.render_widget(Paragraph::new(lines).block(block), area);

    if let Some(pos) = cursor {
        if pos.1 < area.y + area.height.saturating_sub(1) {
            f.set_cursor_position(pos);
        }
    }
}

/// Keep the end of long input visible, since that is where typing happens.
fn tail(text: &str, max: usize) -> String {
    let count = text.chars().count();
    if count <= max {
        text.to_string()
    } else {
        text.chars().skip(count - max).collect()
    }
}
