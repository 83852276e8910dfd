//! Price chart: visible closes, the projection line and the equity label.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Paragraph};

use equityline_core::{LineSpec, LineStyle, MarketHost};

use crate::app::AppState;
use crate::theme::rgb;

/// Rows taken by the x-axis line and its labels.
const X_AXIS_ROWS: u16 = 2;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let bars = app.visible_bars();
    if bars.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "Waiting for price data...",
            Style::default().fg(app.theme.muted),
        )));
        f.render_widget(msg, area);
        return;
    }

    let symbol = app.market.symbol();
    let digits = symbol.digits as usize;
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let line = app.surface.line().filter(|l| !l.hidden);
    let bounds = y_bounds(&closes, line.map(|l| l.price), symbol.pip_size);
    let x_max = (closes.len().saturating_sub(1) as f64).max(1.0);

    let y_labels = [
        format!("{:.*}", digits, bounds[0]),
        format!("{:.*}", digits, (bounds[0] + bounds[1]) / 2.0),
        format!("{:.*}", digits, bounds[1]),
    ];
    let y_label_width = y_labels.iter().map(|l| l.len()).max().unwrap_or(0) as u16;
    let plot = plot_area(area, y_label_width);

    let price_points: Vec<(f64, f64)> =
        closes.iter().enumerate().map(|(i, &c)| (i as f64, c)).collect();
    let line_points = line
        .map(|l| line_points(l.style, l.price, x_max, plot.width))
        .unwrap_or_default();

    let mut datasets = vec![Dataset::default()
        .marker(symbols::Marker::Braille)
        .style(Style::default().fg(app.theme.accent))
        .graph_type(GraphType::Line)
        .data(&price_points)];
    if let Some(l) = line {
        datasets.push(line_dataset(l, &line_points));
    }

    let first_time = bars[0].time.format("%H:%M").to_string();
    let last_time = bars[bars.len() - 1].time.format("%H:%M").to_string();
    let muted = Style::default().fg(app.theme.muted);

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .style(muted)
                .bounds([0.0, x_max])
                .labels(vec![Span::styled(first_time, muted), Span::styled(last_time, muted)]),
        )
        .y_axis(
            Axis::default()
                .style(muted)
                .bounds(bounds)
                .labels(y_labels.into_iter().map(|l| Span::styled(l, muted)).collect::<Vec<_>>()),
        );
    f.render_widget(chart, area);

    if let (Some(line), Some(label)) = (line, app.surface.label().filter(|l| !l.hidden)) {
        let row = price_row(plot, bounds, line.price).saturating_sub(1).max(plot.y);
        let width = (label.text.chars().count() as u16).min(plot.width);
        let label_area = Rect::new(plot.x, row, width, 1);
        let text = Paragraph::new(Span::styled(
            label.text.as_str(),
            Style::default().fg(rgb(label.color)).add_modifier(Modifier::BOLD),
        ));
        f.render_widget(text, label_area);
    }
}

fn line_dataset<'a>(line: &LineSpec, points: &'a [(f64, f64)]) -> Dataset<'a> {
    let mut style = Style::default().fg(rgb(line.color));
    if line.width >= 2 {
        style = style.add_modifier(Modifier::BOLD);
    }
    let (marker, graph_type) = match line.style {
        LineStyle::Solid if line.width >= 2 => (symbols::Marker::HalfBlock, GraphType::Line),
        LineStyle::Solid => (symbols::Marker::Braille, GraphType::Line),
        _ => (symbols::Marker::Dot, GraphType::Scatter),
    };
    Dataset::default()
        .marker(marker)
        .style(style)
        .graph_type(graph_type)
        .data(points)
}

/// Vertical bounds covering every close and the projection line, padded so
/// neither sits on the border.
pub fn y_bounds(closes: &[f64], line_price: Option<f64>, pip_size: f64) -> [f64; 2] {
    let (mut lo, mut hi) = closes
        .iter()
        .copied()
        .chain(line_price)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if !lo.is_finite() || !hi.is_finite() {
        return [0.0, 1.0];
    }
    let padding = ((hi - lo) * 0.05).max(pip_size * 5.0);
    lo -= padding;
    hi += padding;
    [lo, hi]
}

/// Whether terminal column `col` is drawn for the given dash pattern.
pub fn dash_on(style: LineStyle, col: u16) -> bool {
    match style {
        LineStyle::Solid => true,
        LineStyle::Dots => col % 2 == 0,
        LineStyle::DotsRare => col % 4 == 0,
        LineStyle::DotsVeryRare => col % 8 == 0,
        LineStyle::Lines => col % 6 < 4,
        LineStyle::LinesDots => col % 8 < 4 || col % 8 == 6,
    }
}

/// Points of a horizontal line at `price` spanning `[0, x_max]`, one per lit
/// column for dashed styles.
pub fn line_points(style: LineStyle, price: f64, x_max: f64, columns: u16) -> Vec<(f64, f64)> {
    if style == LineStyle::Solid || columns < 2 {
        return vec![(0.0, price), (x_max, price)];
    }
    let step = x_max / f64::from(columns - 1);
    (0..columns)
        .filter(|&col| dash_on(style, col))
        .map(|col| (f64::from(col) * step, price))
        .collect()
}

/// Approximate graph area inside the chart widget: y labels and axis on the
/// left, x labels and axis at the bottom.
pub fn plot_area(area: Rect, y_label_width: u16) -> Rect {
    let left = (y_label_width + 1).min(area.width);
    Rect::new(
        area.x + left,
        area.y,
        area.width - left,
        area.height.saturating_sub(X_AXIS_ROWS),
    )
}

/// Terminal row of `price` within `plot`, clamped to the plot.
pub fn price_row(plot: Rect, bounds: [f64; 2], price: f64) -> u16 {
    if plot.height == 0 {
        return plot.y;
    }
    let span = bounds[1] - bounds[0];
    let frac = if span > 0.0 { ((bounds[1] - price) / span).clamp(0.0, 1.0) } else { 0.5 };
    plot.y + (frac * f64::from(plot.height - 1)).round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_include_line_price() {
        let closes = [1.0850, 1.0860, 1.0855];
        let [lo, hi] = y_bounds(&closes, Some(1.0950), 0.0001);
        assert!(lo < 1.0850);
        assert!(hi > 1.0950);
    }

    #[test]
    fn bounds_pad_flat_series() {
        let [lo, hi] = y_bounds(&[1.2, 1.2], None, 0.0001);
        assert!((hi - lo - 0.0010).abs() < 1e-12);
    }

    #[test]
    fn bounds_of_nothing_are_unit() {
        assert_eq!(y_bounds(&[], None, 0.0001), [0.0, 1.0]);
    }

    #[test]
    fn dash_patterns_thin_out() {
        let lit = |style| (0..64).filter(|&c| dash_on(style, c)).count();
        assert_eq!(lit(LineStyle::Solid), 64);
        assert_eq!(lit(LineStyle::Dots), 32);
        assert_eq!(lit(LineStyle::DotsRare), 16);
        assert_eq!(lit(LineStyle::DotsVeryRare), 8);
        assert!(lit(LineStyle::Lines) > lit(LineStyle::LinesDots));
    }

    #[test]
    fn solid_line_is_two_points() {
        let pts = line_points(LineStyle::Solid, 1.1, 99.0, 80);
        assert_eq!(pts, vec![(0.0, 1.1), (99.0, 1.1)]);
    }

    #[test]
    fn dotted_line_spans_the_axis() {
        let pts = line_points(LineStyle::Dots, 1.1, 100.0, 11);
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0].0, 0.0);
        assert!((pts[5].0 - 100.0).abs() < 1e-9);
        assert!(pts.iter().all(|&(_, y)| y == 1.1));
    }

    #[test]
    fn rows_map_top_to_bottom() {
        let plot = plot_area(Rect::new(0, 0, 60, 22), 7);
        assert_eq!(plot, Rect::new(8, 0, 52, 20));
        assert_eq!(price_row(plot, [1.0, 2.0], 2.0), 0);
        assert_eq!(price_row(plot, [1.0, 2.0], 1.0), 19);
        assert_eq!(price_row(plot, [1.0, 2.0], 5.0), 0);
    }
}
