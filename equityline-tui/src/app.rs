//! Application state: single-owner, main-thread only.
//!
//! Every user action and feed step becomes a `ChartEvent` handed to the
//! indicator; the chart only ever draws what the surface holds.

use equityline_core::{ChartEvent, EquityLineIndicator, EventOutcome, IndicatorConfig, MarketHost};

use crate::sim::{PriceBar, SimulatedMarket};
use crate::surface::TerminalSurface;
use crate::theme::Theme;

pub const MIN_VISIBLE_BARS: usize = 20;
pub const MAX_VISIBLE_BARS: usize = 480;
const DEFAULT_VISIBLE_BARS: usize = 120;

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Horizontal window over the bar history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartView {
    pub first_visible: usize,
    pub visible_bars: usize,
    /// Keep the newest bar at the right edge as the feed advances.
    pub follow_latest: bool,
}

impl ChartView {
    fn new(total_bars: usize) -> Self {
        let mut view = Self { first_visible: 0, visible_bars: DEFAULT_VISIBLE_BARS, follow_latest: true };
        view.clamp(total_bars);
        view
    }

    fn clamp(&mut self, total_bars: usize) {
        self.visible_bars = self.visible_bars.clamp(MIN_VISIBLE_BARS, MAX_VISIBLE_BARS);
        let max_first = total_bars.saturating_sub(self.visible_bars);
        if self.follow_latest || self.first_visible > max_first {
            self.first_visible = max_first;
        }
        if self.first_visible == max_first {
            self.follow_latest = true;
        }
    }
}

pub struct AppState {
    pub running: bool,
    pub market: SimulatedMarket,
    pub surface: TerminalSurface,
    pub indicator: EquityLineIndicator,
    pub view: ChartView,
    pub theme: Theme,
    pub show_help: bool,
    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    /// Build the app and attach the indicator to the chart.
    pub fn new(config: IndicatorConfig, market: SimulatedMarket) -> Self {
        let view = ChartView::new(market.bars().len());
        let mut app = Self {
            running: true,
            market,
            surface: TerminalSurface::new(),
            indicator: EquityLineIndicator::new(config),
            view,
            theme: Theme::default(),
            show_help: false,
            status_message: None,
        };
        app.surface.set_first_visible_bar(app.view.first_visible);
        app.dispatch(ChartEvent::Started);
        app
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn dispatch(&mut self, event: ChartEvent) -> EventOutcome {
        let outcome = self.indicator.handle(event, &self.market, &mut self.surface);
        if let EventOutcome::VisibilityChanged { visible } = outcome {
            self.set_status(if visible { "Projection line shown" } else { "Projection line hidden" });
        }
        outcome
    }

    /// Chart title: symbol and current quote.
    pub fn market_title(&self) -> String {
        let symbol = self.market.symbol();
        let digits = symbol.digits as usize;
        format!(
            "{}  Bid {:.*}  Ask {:.*}",
            symbol.name, digits, symbol.bid, digits, symbol.ask
        )
    }

    pub fn visible_bars(&self) -> &[PriceBar] {
        let bars = self.market.bars();
        let start = self.view.first_visible.min(bars.len());
        let end = (start + self.view.visible_bars).min(bars.len());
        &bars[start..end]
    }

    /// One feed step: new bar, then the bar-update recompute.
    pub fn advance_feed(&mut self) {
        let step = self.market.advance();
        if !self.view.follow_latest {
            // Keep a scrolled window on the same bars after old history is dropped.
            self.view.first_visible = self.view.first_visible.saturating_sub(step.dropped);
        }
        self.view.clamp(self.market.bars().len());
        self.surface.set_first_visible_bar(self.view.first_visible);
        self.dispatch(ChartEvent::BarUpdated { index: step.index });
    }

    pub fn timer_tick(&mut self) {
        self.dispatch(ChartEvent::TimerTick);
    }

    /// Move the projection line by `pips` and report the edit.
    pub fn drag_line(&mut self, pips: f64) {
        let pip_size = self.market.symbol().pip_size;
        if self.surface.drag_line(pips * pip_size) {
            self.dispatch(ChartEvent::ObjectsUpdated);
        } else {
            self.set_warning("No projection line on the chart");
        }
    }

    /// Scroll the window by `bars` (negative = back in time).
    pub fn scroll(&mut self, bars: isize) {
        let first = self.view.first_visible as isize + bars;
        self.view.first_visible = first.max(0) as usize;
        self.view.follow_latest = false;
        self.view.clamp(self.market.bars().len());
        self.surface.set_first_visible_bar(self.view.first_visible);
        self.dispatch(ChartEvent::ScrollChanged);
    }

    /// Halve or double the number of visible bars, keeping the right edge fixed.
    pub fn zoom(&mut self, zoom_in: bool) {
        let right_edge = self.view.first_visible + self.view.visible_bars;
        self.view.visible_bars = if zoom_in {
            self.view.visible_bars / 2
        } else {
            self.view.visible_bars * 2
        };
        self.view.visible_bars = self.view.visible_bars.clamp(MIN_VISIBLE_BARS, MAX_VISIBLE_BARS);
        self.view.first_visible = right_edge.saturating_sub(self.view.visible_bars);
        self.view.clamp(self.market.bars().len());
        self.surface.set_first_visible_bar(self.view.first_visible);
        self.dispatch(ChartEvent::ZoomChanged);
    }

    pub fn follow_latest(&mut self) {
        self.view.follow_latest = true;
        self.view.clamp(self.market.bars().len());
        self.surface.set_first_visible_bar(self.view.first_visible);
        self.dispatch(ChartEvent::ScrollChanged);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use equityline_core::{KeyStroke, LabelTone};

    fn app() -> AppState {
        AppState::new(IndicatorConfig::default(), SimulatedMarket::eurusd(42))
    }

    #[test]
    fn starts_with_line_and_label() {
        let app = app();
        let line = app.surface.line().expect("line drawn on start");
        let bid = app.market.symbol().bid;
        assert!((line.price - (bid + 0.0050)).abs() < 1e-9);
        assert!(app.surface.label().is_some());
        assert!(app.indicator.projection().is_some());
    }

    #[test]
    fn drag_up_raises_projected_equity_for_net_long_book() {
        let mut app = app();
        let before = app.indicator.projection().unwrap().projected_equity;
        app.drag_line(10.0);
        let after = app.indicator.projection().unwrap().projected_equity;
        // Net long 120k units at 10 per pip per 100k: +120 for ten pips.
        assert!((after - before - 120.0).abs() < 1e-6, "moved by {}", after - before);
        assert_eq!(app.indicator.label_tone(), Some(LabelTone::Positive));
    }

    #[test]
    fn scroll_reanchors_label() {
        let mut app = app();
        app.scroll(-30);
        assert!(!app.view.follow_latest);
        assert_eq!(app.surface.label().unwrap().bar_index, app.view.first_visible);
        app.follow_latest();
        assert!(app.view.follow_latest);
        assert_eq!(app.view.first_visible + app.view.visible_bars, app.market.bars().len());
    }

    #[test]
    fn zoom_is_bounded() {
        let mut app = app();
        for _ in 0..10 {
            app.zoom(true);
        }
        assert_eq!(app.view.visible_bars, MIN_VISIBLE_BARS);
        for _ in 0..10 {
            app.zoom(false);
        }
        assert_eq!(app.view.visible_bars, MAX_VISIBLE_BARS);
        assert_eq!(app.visible_bars().len(), app.market.bars().len().min(MAX_VISIBLE_BARS));
    }

    #[test]
    fn feed_advance_follows_latest() {
        let mut app = app();
        let total = app.market.bars().len();
        app.advance_feed();
        assert_eq!(app.market.bars().len(), total + 1);
        assert_eq!(app.view.first_visible + app.view.visible_bars, total + 1);
    }

    #[test]
    fn title_shows_quote() {
        let app = app();
        assert!(app.market_title().starts_with("EURUSD  Bid 1.0"));
    }

    #[test]
    fn scrolled_view_survives_history_trim() {
        let mut app = app();
        while app.market.bars().len() < crate::sim::MAX_HISTORY_BARS {
            app.advance_feed();
        }
        app.scroll(-200);
        let anchored = app.visible_bars()[0].time;

        let mut trimmed = false;
        for _ in 0..1_000 {
            let before = app.market.bars().len();
            app.advance_feed();
            trimmed |= app.market.bars().len() < before;
        }
        assert!(trimmed, "history was never trimmed");
        assert!(!app.view.follow_latest);
        assert_eq!(app.visible_bars()[0].time, anchored);
    }

    #[test]
    fn toggle_sets_status() {
        let mut app = app();
        app.dispatch(ChartEvent::KeyDown(KeyStroke::shift('E')));
        assert!(app.surface.line().unwrap().hidden);
        assert_eq!(
            app.status_message,
            Some(("Projection line hidden".to_string(), StatusLevel::Info))
        );
    }
}
