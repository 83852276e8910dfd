//! Open positions with their profit change if price reached the line.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Cell, Paragraph, Row, Table};

use equityline_core::{MarketHost, format_amount, position_delta};

use crate::app::AppState;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let symbol = app.market.symbol();
    let positions = app.market.positions();
    if positions.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled("No open positions", Style::default().fg(theme.muted))),
            area,
        );
        return;
    }

    let line_price = app.indicator.price();
    let header = Row::new(["#", "Symbol", "Side", "Volume", "Net profit", "At line"])
        .style(Style::default().fg(theme.text_secondary).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = positions
        .iter()
        .map(|p| {
            // Other symbols do not move with this chart's line.
            let at_line = if p.symbol == symbol.name && line_price > 0.0 {
                let delta = position_delta(p, &symbol, line_price);
                Cell::from(format_amount(delta)).style(Style::default().fg(theme.pnl_color(delta)))
            } else {
                Cell::from("-").style(Style::default().fg(theme.muted))
            };
            Row::new(vec![
                Cell::from(p.id.0.to_string()),
                Cell::from(p.symbol.clone()),
                Cell::from(p.direction.label())
                    .style(Style::default().fg(theme.direction_color(p.direction))),
                Cell::from(format!("{:.0}", p.volume)),
                Cell::from(format_amount(p.net_profit))
                    .style(Style::default().fg(theme.pnl_color(p.net_profit))),
                at_line,
            ])
            .style(Style::default().fg(theme.text_primary))
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Length(8),
        Constraint::Length(5),
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Min(12),
    ];
    f.render_widget(Table::new(rows, widths).header(header), area);
}
