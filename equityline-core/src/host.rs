//! Seams to the host platform: where market data comes from and where chart
//! objects go.
//!
//! The indicator never owns chart objects; it describes them with
//! [`LineSpec`] and [`LabelSpec`] and asks the surface to (re)draw them by name.

use crate::color::Rgb;
use crate::config::LineStyle;
use crate::domain::{AccountSnapshot, MarketSnapshot, OpenPosition, SymbolInfo};

pub const LINE_OBJECT_NAME: &str = "EquityProjectionLine";
pub const LABEL_OBJECT_NAME: &str = "EquityProjectionLabel";

/// Read-only market and account state.
pub trait MarketHost {
    fn account(&self) -> AccountSnapshot;

    /// The instrument displayed on the chart.
    fn symbol(&self) -> SymbolInfo;

    /// All open positions of the account. The indicator filters by symbol.
    fn positions(&self) -> Vec<OpenPosition>;

    fn snapshot(&self) -> MarketSnapshot {
        MarketSnapshot { account: self.account(), symbol: self.symbol(), positions: self.positions() }
    }
}

/// Chart object store of the rendering layer.
pub trait ChartSurface {
    /// Current price of the named horizontal line, `None` if no such line exists.
    fn line_price(&self, name: &str) -> Option<f64>;

    /// Create the line, replacing any object with the same name.
    fn draw_line(&mut self, line: &LineSpec);

    /// Create the label, replacing any object with the same name.
    fn draw_label(&mut self, label: &LabelSpec);

    fn remove_object(&mut self, name: &str);

    /// Hide or show an existing object. Unknown names are ignored.
    fn set_hidden(&mut self, name: &str, hidden: bool);

    /// Bar index at the left edge of the visible chart area.
    fn first_visible_bar(&self) -> usize;
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineSpec {
    pub name: &'static str,
    pub price: f64,
    pub color: Rgb,
    pub width: u32,
    pub style: LineStyle,
    pub interactive: bool,
    pub hidden: bool,
    pub comment: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlignment {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlignment {
    Top,
    Center,
    Bottom,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelSpec {
    pub name: &'static str,
    pub text: String,
    pub bar_index: usize,
    pub price: f64,
    pub color: Rgb,
    pub font_size: u32,
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
    pub interactive: bool,
    pub hidden: bool,
}
