//! Equity Line Core: projected account equity at a draggable chart price.
//!
//! This crate contains everything except drawing and input:
//! - Domain types (account, symbol quote, open positions, market snapshot)
//! - Pure projected-equity calculation with spread-aware short positions
//! - Hypothetical price tracking with tick-level jitter suppression
//! - Label text/colour selection and the Shift+E visibility toggle
//! - Host seams (`MarketHost`, `ChartSurface`) and the event-dispatching indicator

pub mod color;
pub mod config;
pub mod domain;
pub mod events;
pub mod host;
pub mod indicator;
pub mod label;
pub mod price;
pub mod projection;
pub mod refresh;
pub mod visibility;

pub use color::{ColorParseError, Rgb};
pub use config::{ConfigError, IndicatorConfig, LineStyle};
pub use domain::{
    AccountSnapshot, MarketSnapshot, OpenPosition, PositionId, ScenarioError, SymbolInfo,
    TradeDirection,
};
pub use events::{ChartEvent, EventKind, EventOutcome};
pub use host::{ChartSurface, LABEL_OBJECT_NAME, LINE_OBJECT_NAME, LabelSpec, LineSpec, MarketHost};
pub use indicator::EquityLineIndicator;
pub use label::{LabelTone, format_amount, label_text};
pub use price::PriceTracker;
pub use projection::{EquityChange, EquityProjection, position_delta, project_equity};
pub use refresh::RefreshTimer;
pub use visibility::{KeyStroke, Modifiers, Shortcut, Visibility};
