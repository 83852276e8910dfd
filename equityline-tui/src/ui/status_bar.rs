//! Bottom status bar with account equity and the last status message.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use equityline_core::{MarketHost, format_amount};

use crate::app::{AppState, StatusLevel};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let symbol = app.market.symbol();
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        format!(" Equity {} ", format_amount(app.market.equity())),
        Style::default().fg(theme.text_primary),
    ));
    if app.indicator.price() > 0.0 {
        spans.push(Span::styled(
            format!("| Line {:.*} ", symbol.digits as usize, app.indicator.price()),
            Style::default().fg(theme.text_secondary),
        ));
    }
    if !app.indicator.is_visible() {
        spans.push(Span::styled("| hidden ", Style::default().fg(theme.warning)));
    }
    if !app.view.follow_latest {
        spans.push(Span::styled("| scrolled ", Style::default().fg(theme.muted)));
    }

    spans.push(Span::styled("| ?:Help q:Quit", Style::default().fg(theme.muted)));

    if let Some((msg, level)) = &app.status_message {
        let color = match level {
            StatusLevel::Info => theme.accent,
            StatusLevel::Warning => theme.warning,
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(color)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
