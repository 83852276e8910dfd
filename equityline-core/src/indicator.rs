//! The indicator's context object: everything that survives between events.
//!
//! Hosts create one [`EquityLineIndicator`] per chart, send [`ChartEvent::Started`]
//! once, then forward events serially. Every handler runs to completion
//! synchronously; values are always recomputed from a fresh host snapshot.

use crate::config::IndicatorConfig;
use crate::events::{ChartEvent, EventOutcome};
use crate::host::{
    ChartSurface, HorizontalAlignment, LABEL_OBJECT_NAME, LINE_OBJECT_NAME, LabelSpec, LineSpec,
    MarketHost, VerticalAlignment,
};
use crate::label::{LabelTone, label_text};
use crate::price::PriceTracker;
use crate::projection::EquityProjection;
use crate::visibility::{KeyStroke, Shortcut, Visibility};

const LABEL_FONT_SIZE: u32 = 12;
const LINE_COMMENT: &str = "Drag to change projection price";

/// Last computed values together with the asset they are denominated in.
#[derive(Debug, Clone, PartialEq)]
struct Computed {
    projection: EquityProjection,
    asset: String,
}

#[derive(Debug, Clone)]
pub struct EquityLineIndicator {
    config: IndicatorConfig,
    price: PriceTracker,
    visibility: Visibility,
    toggle_shortcut: Shortcut,
    computed: Option<Computed>,
}

impl EquityLineIndicator {
    pub fn new(config: IndicatorConfig) -> Self {
        Self {
            config,
            price: PriceTracker::new(),
            visibility: Visibility::default(),
            toggle_shortcut: Shortcut::TOGGLE_VISIBILITY,
            computed: None,
        }
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// Current hypothetical price; non-positive until started.
    pub fn price(&self) -> f64 {
        self.price.price()
    }

    pub fn projection(&self) -> Option<&EquityProjection> {
        self.computed.as_ref().map(|c| &c.projection)
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    /// Text the label currently shows, if values have been computed.
    pub fn label_text(&self) -> Option<String> {
        self.computed.as_ref().map(|c| label_text(&c.projection, &c.asset))
    }

    pub fn label_tone(&self) -> Option<LabelTone> {
        self.projection().map(LabelTone::for_projection)
    }

    /// Route one host event to its handler.
    pub fn handle(
        &mut self,
        event: ChartEvent,
        host: &dyn MarketHost,
        surface: &mut dyn ChartSurface,
    ) -> EventOutcome {
        log::trace!("handling {:?}", event.kind());
        match event {
            ChartEvent::Started => self.on_start(host, surface),
            ChartEvent::BarUpdated { .. } | ChartEvent::TimerTick => self.recompute(host, surface),
            ChartEvent::ObjectsUpdated => self.on_objects_updated(host, surface),
            ChartEvent::KeyDown(stroke) => self.on_key_down(stroke, surface),
            ChartEvent::ScrollChanged | ChartEvent::ZoomChanged => {
                if self.redraw_label(surface) {
                    EventOutcome::Redrawn
                } else {
                    EventOutcome::Ignored
                }
            }
        }
    }

    fn on_start(&mut self, host: &dyn MarketHost, surface: &mut dyn ChartSurface) -> EventOutcome {
        let symbol = host.symbol();
        match surface.line_price(LINE_OBJECT_NAME) {
            Some(existing) => {
                let price = self.price.initialize(
                    Some(existing),
                    symbol.bid,
                    self.config.initial_offset_pips,
                    symbol.pip_size,
                    symbol.digits,
                );
                log::info!("adopted existing projection line at {existing} as {price}");
            }
            None => {
                let price = self.price.initialize(
                    None,
                    symbol.bid,
                    self.config.initial_offset_pips,
                    symbol.pip_size,
                    symbol.digits,
                );
                log::info!(
                    "projection line placed at {price} ({} pips from bid {})",
                    self.config.initial_offset_pips,
                    symbol.bid
                );
                self.draw_line(surface);
            }
        }
        self.recompute(host, surface)
    }

    fn on_objects_updated(
        &mut self,
        host: &dyn MarketHost,
        surface: &mut dyn ChartSurface,
    ) -> EventOutcome {
        let Some(line_price) = surface.line_price(LINE_OBJECT_NAME) else {
            return EventOutcome::Ignored;
        };
        let symbol = host.symbol();
        match self.price.update_from_external_move(line_price, symbol.tick_size, symbol.digits) {
            Some(price) => {
                log::debug!("projection line moved to {price}");
                self.recompute(host, surface)
            }
            None => EventOutcome::Ignored,
        }
    }

    fn on_key_down(&mut self, stroke: KeyStroke, surface: &mut dyn ChartSurface) -> EventOutcome {
        if !self.toggle_shortcut.matches(&stroke) {
            return EventOutcome::Ignored;
        }
        let visible = self.visibility.toggle();
        surface.set_hidden(LINE_OBJECT_NAME, !visible);
        surface.set_hidden(LABEL_OBJECT_NAME, !visible);
        log::info!("projection line {}", if visible { "shown" } else { "hidden" });
        EventOutcome::VisibilityChanged { visible }
    }

    /// Recompute from a fresh snapshot and redraw the label.
    fn recompute(&mut self, host: &dyn MarketHost, surface: &mut dyn ChartSurface) -> EventOutcome {
        if !self.price.is_established() {
            return EventOutcome::Ignored;
        }
        let snapshot = host.snapshot();
        let projection = snapshot.project(self.price.price());
        log::debug!(
            "projected equity {:.2} (delta {:.2}) at {}",
            projection.projected_equity,
            projection.projected_delta,
            self.price.price()
        );
        self.computed = Some(Computed { projection, asset: snapshot.account.asset });
        self.redraw_label(surface);
        EventOutcome::Recomputed(projection)
    }

    fn draw_line(&self, surface: &mut dyn ChartSurface) {
        if !self.price.is_established() {
            return;
        }
        surface.remove_object(LINE_OBJECT_NAME);
        surface.draw_line(&LineSpec {
            name: LINE_OBJECT_NAME,
            price: self.price.price(),
            color: self.config.line_color,
            width: self.config.line_width,
            style: self.config.line_style,
            interactive: true,
            hidden: self.visibility.is_hidden(),
            comment: LINE_COMMENT,
        });
    }

    /// Returns false when there is nothing to draw.
    fn redraw_label(&self, surface: &mut dyn ChartSurface) -> bool {
        if !self.price.is_established() || !self.config.show_label {
            return false;
        }
        let Some(computed) = &self.computed else {
            return false;
        };

        if surface.line_price(LINE_OBJECT_NAME).is_none() {
            log::debug!("projection line missing, recreating");
            self.draw_line(surface);
        }

        let bar_index = surface.first_visible_bar();
        surface.remove_object(LABEL_OBJECT_NAME);
        surface.draw_label(&LabelSpec {
            name: LABEL_OBJECT_NAME,
            text: label_text(&computed.projection, &computed.asset),
            bar_index,
            price: self.price.price(),
            color: LabelTone::for_projection(&computed.projection).color(&self.config),
            font_size: LABEL_FONT_SIZE,
            horizontal: HorizontalAlignment::Right,
            vertical: VerticalAlignment::Top,
            interactive: false,
            hidden: self.visibility.is_hidden(),
        });
        true
    }
}
