//! Projected equity at a hypothetical price.
//!
//! Pure functions of their inputs: no host access, no stored state. Long
//! positions are marked against the bid. Short positions close at the ask, so
//! the current spread is carried to the hypothetical price before
//! differencing against the current ask.

use serde::{Deserialize, Serialize};

use crate::domain::{MarketSnapshot, OpenPosition, SymbolInfo, TradeDirection};

/// Derived values for one hypothetical price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquityProjection {
    /// Equity the projection started from.
    pub current_equity: f64,
    /// `current_equity + projected_delta`.
    pub projected_equity: f64,
    /// Sum of per-position P&L changes between now and the hypothetical price.
    pub projected_delta: f64,
    /// `projected_delta` plus the positions' current net profit.
    pub total_floating_profit: f64,
}

impl EquityProjection {
    /// Projection with no positions: equity unchanged, nothing floating.
    pub fn flat(current_equity: f64) -> Self {
        Self {
            current_equity,
            projected_equity: current_equity,
            projected_delta: 0.0,
            total_floating_profit: 0.0,
        }
    }

    pub fn change(&self) -> EquityChange {
        EquityChange::between(self.current_equity, self.projected_equity)
    }
}

/// Direction of the projected equity relative to current equity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquityChange {
    Increase,
    Decrease,
    Unchanged,
}

impl EquityChange {
    pub fn between(current: f64, projected: f64) -> Self {
        if projected > current {
            EquityChange::Increase
        } else if projected < current {
            EquityChange::Decrease
        } else {
            EquityChange::Unchanged
        }
    }
}

/// P&L change of one position if the market moved from the current quote to
/// `hypothetical_price`.
pub fn position_delta(position: &OpenPosition, symbol: &SymbolInfo, hypothetical_price: f64) -> f64 {
    let point_value = position.point_value(symbol.pip_value);

    let price_diff = match position.direction {
        TradeDirection::Buy => hypothetical_price - symbol.bid,
        TradeDirection::Sell => {
            let projected_ask = hypothetical_price + symbol.spread();
            symbol.ask - projected_ask
        }
    };

    (price_diff / symbol.pip_size) * point_value
}

/// Project equity for `positions` at `hypothetical_price`.
///
/// The caller is responsible for passing only positions in `symbol`.
pub fn project_equity<'a, I>(
    current_equity: f64,
    symbol: &SymbolInfo,
    positions: I,
    hypothetical_price: f64,
) -> EquityProjection
where
    I: IntoIterator<Item = &'a OpenPosition>,
{
    let mut total_delta = 0.0;
    let mut current_floating = 0.0;

    for position in positions {
        total_delta += position_delta(position, symbol, hypothetical_price);
        current_floating += position.net_profit;
    }

    EquityProjection {
        current_equity,
        projected_equity: current_equity + total_delta,
        projected_delta: total_delta,
        total_floating_profit: total_delta + current_floating,
    }
}

impl MarketSnapshot {
    /// Project the snapshot's equity using only positions in the displayed symbol.
    pub fn project(&self, hypothetical_price: f64) -> EquityProjection {
        project_equity(
            self.account.equity,
            &self.symbol,
            self.active_positions(),
            hypothetical_price,
        )
    }
}
