use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::{App, InputMode};
use super::commands;
use super::panels;
use super::theme;
use crate::ledger::Summary;

struct Panes {
    header: Rect,
    form: Rect,
    cards: Rect,
    breakdown: Rect,
    table: Rect,
    status: Rect,
    command: Rect,
}

fn split(area: Rect, summary: &Summary) -> Panes {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Min(10),   // Body
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Command bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(46), Constraint::Min(40)])
        .split(rows[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(panels::summary::breakdown_height(summary)),
            Constraint::Min(4),
        ])
        .split(columns[1]);

    Panes {
        header: rows[0],
        form: columns[0],
        cards: right[0],
        breakdown: right[1],
        table: right[2],
        status: rows[2],
        command: rows[3],
    }
}

/// Number of expense rows that fit in the table for a terminal of this size.
pub(crate) fn table_rows(area: Rect, summary: &Summary) -> usize {
    let panes = split(area, summary);
    panes.table.height.saturating_sub(3) as usize
}

/// Draw one frame. `summary` must be built from `app.expenses` for this frame.
pub(crate) fn render(f: &mut Frame, app: &App, summary: &Summary) {
    let panes = split(f.area(), summary);

    render_header(f, panes.header);
    panels::form::render(f, panes.form, app);
    panels::summary::render_cards(f, panes.cards, summary);
    panels::summary::render_breakdown(f, panes.breakdown, summary);
    panels::expenses::render(f, panes.table, app);
    render_status_bar(f, panes.status, app);
    render_command_bar(f, panes.command, app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Construction Expense Manager",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Track and manage all your construction project expenses",
            theme::dim_style(),
        )),
    ])
    .centered()
    .style(Style::default().bg(theme::HEADER_BG));
    f.render_widget(header, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_bg = match app.input_mode {
        InputMode::Normal => theme::ACCENT,
        InputMode::Form => theme::GREEN,
        InputMode::Command => theme::YELLOW,
    };
    let mode_style = Style::default()
        .fg(theme::HEADER_BG)
        .bg(mode_bg)
        .add_modifier(Modifier::BOLD);

    let info = format!(" {} expenses", app.expenses.len());

    let right = match app.input_mode {
        InputMode::Form => " Enter add | Tab next | Esc list ",
        InputMode::Normal => " a add | d delete | : cmd | ? help ",
        InputMode::Command => " Enter run | Esc cancel ",
    };

    let available = area.width as usize;
    let used = mode_label.len() + info.len() + right.len();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, mode_style),
        Span::styled(&info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let (content, cursor_offset) = match app.input_mode {
        InputMode::Command => (
            Line::from(vec![
                Span::styled(":", Style::default().fg(theme::ACCENT)),
                Span::styled(&app.command_input, theme::command_bar_style()),
            ]),
            Some(1 + app.command_input.chars().count() as u16),
        ),
        InputMode::Normal | InputMode::Form => (
            if app.status_message.is_empty() {
                Line::from(Span::styled(
                    " Press : for commands, ? for help",
                    theme::dim_style(),
                ))
            } else {
                Line::from(Span::styled(
                    format!(" {}", app.status_message),
                    theme::command_bar_style(),
                ))
            },
            None,
        ),
    };

    let bar = Paragraph::new(content).style(Style::default().bg(theme::COMMAND_BG));
    f.render_widget(bar, area);

    if let Some(offset) = cursor_offset {
        f.set_cursor_position((area.x + offset, area.y));
    }
}

fn section(title: &str) -> Line<'_> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(theme::YELLOW)
            .add_modifier(Modifier::BOLD),
    ))
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let mut help_text = vec![
        Line::from(Span::styled(
            " SiteCost Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section(" Form"),
        Line::from(Span::styled(
            "  Tab/Down        Next field            Shift-Tab/Up  Previous field",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  ←/→ or Space    Change category       Ctrl-u        Clear field",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  Enter           Add expense           Esc           Go to list",
            theme::normal_style(),
        )),
        Line::from(""),
        section(" List"),
        Line::from(Span::styled(
            "  j/k or Up/Down  Move cursor           g/G           Top/Bottom",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  d or Delete     Delete expense        a/i           Edit form",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  Ctrl-d/u        Page Down/Up          Ctrl-q        Quit",
            theme::normal_style(),
        )),
        Line::from(""),
        section(" Commands"),
    ];

    // Build command list dynamically from COMMANDS registry
    let mut seen = std::collections::HashSet::new();
    let mut cmd_lines: Vec<(&str, &str)> = Vec::new();
    for (&name, cmd) in commands::COMMANDS.iter() {
        if name.len() <= 2 {
            continue;
        }
        if seen.insert(cmd.description) {
            cmd_lines.push((name, cmd.description));
        }
    }
    cmd_lines.sort_by_key(|(name, _)| *name);
    for (name, desc) in &cmd_lines {
        help_text.push(Line::from(Span::styled(
            format!("  :{name:<14} {desc}"),
            theme::normal_style(),
        )));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        " Press any key to close ",
        Style::default().fg(theme::TEXT_DIM),
    )));

    // Center the popup, clamped to terminal height
    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 72.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(help, popup_area);
}
