use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ledger::Summary;
use crate::ui::theme;
use crate::ui::util::{format_amount, percent_bar};

/// Height the category breakdown needs for `summary`, borders included.
pub(crate) fn breakdown_height(summary: &Summary) -> u16 {
    summary.by_category.len().max(1) as u16 + 2
}

pub(crate) fn render_cards(f: &mut Frame, area: Rect, summary: &Summary) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_card(
        f,
        cards[0],
        "Total Expenses",
        format_amount(summary.total),
        theme::ACCENT,
    );
    render_card(
        f,
        cards[1],
        "Total Entries",
        summary.count.to_string(),
        theme::BLUE,
    );
}

fn render_card(f: &mut Frame, area: Rect, title: &str, value: String, color: ratatui::style::Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {title} "), theme::title_style()));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

pub(crate) fn render_breakdown(f: &mut Frame, area: Rect, summary: &Summary) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(" By Category ", theme::title_style()));

    if summary.by_category.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "Nothing spent yet",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    // label(16) + amount(14) + percent(6) + borders
    let bar_width = (area.width as usize).saturating_sub(16 + 14 + 6 + 4).min(30);

    let lines: Vec<Line> = summary
        .by_category
        .iter()
        .map(|(category, amount)| {
            let percent = summary.percent_of_total(*amount);
            Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    format!(" {:<14}", category.label()),
                    theme::badge_style(*category),
                ),
                Span::styled(
                    format!("{:>14}", format_amount(*amount)),
                    theme::normal_style(),
                ),
                Span::styled(format!("{percent:>5}% "), theme::dim_style()),
                Span::styled(
                    percent_bar(percent, bar_width),
                    Style::default().fg(theme::category_color(*category)),
                ),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}
