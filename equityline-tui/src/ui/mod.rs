//! Top-level UI layout: chart over positions, with a status bar.

pub mod positions_panel;
pub mod price_chart;
pub mod status_bar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::AppState;

const HELP_LINES: &[(&str, &str)] = &[
    ("Up / Down", "move projection line 1 pip"),
    ("Shift+Up / Down", "move projection line 10 pips"),
    ("Shift+E", "show / hide line and label"),
    ("Left / Right", "scroll history"),
    ("+ / -", "zoom in / out"),
    ("End", "follow latest bar"),
    ("?", "this help"),
    ("q / Esc", "quit"),
];

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    f.render_widget(Block::default().style(Style::default().bg(app.theme.background)), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(8), Constraint::Length(1)])
        .split(f.area());

    let chart_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.accent))
        .title(format!(" {} ", app.market_title()))
        .title_style(Style::default().fg(app.theme.accent).add_modifier(Modifier::BOLD));
    let chart_area = chart_block.inner(chunks[0]);
    f.render_widget(chart_block, chunks[0]);
    price_chart::render(f, chart_area, app);

    let positions_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.muted))
        .title(" Positions ")
        .title_style(Style::default().fg(app.theme.text_secondary));
    let positions_area = positions_block.inner(chunks[1]);
    f.render_widget(positions_block, chunks[1]);
    positions_panel::render(f, positions_area, app);

    status_bar::render(f, chunks[2], app);

    if app.show_help {
        render_help(f, centered_rect(50, 60, chunks[0]), app);
    }
}

fn render_help(f: &mut Frame, area: Rect, app: &AppState) {
    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled(format!(" {key:<17}"), Style::default().fg(app.theme.accent)),
                Span::styled(*what, Style::default().fg(app.theme.text_primary)),
            ])
        })
        .collect();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.accent))
        .title(" Keys ");
    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_stays_inside() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(50, 60, outer);
        assert!(inner.x >= outer.x && inner.right() <= outer.right());
        assert!(inner.y >= outer.y && inner.bottom() <= outer.bottom());
        assert_eq!(inner.width, 50);
        assert_eq!(inner.height, 24);
    }
}
