use serde::{Deserialize, Serialize};

/// Quote and contract metadata for the instrument displayed on the chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SymbolInfo {
    pub name: String,
    pub bid: f64,
    pub ask: f64,
    /// Price distance of one pip (e.g. 0.0001 for EURUSD).
    pub pip_size: f64,
    /// Account-currency value of a one-pip move for one unit of volume.
    pub pip_value: f64,
    /// Smallest price increment the host quotes.
    pub tick_size: f64,
    /// Decimal places of the quoted price.
    pub digits: u32,
}

impl SymbolInfo {
    pub fn spread(&self) -> f64 {
        self.ask - self.bid
    }

    pub fn mid(&self) -> f64 {
        (self.bid + self.ask) / 2.0
    }

    /// Round a price to the instrument's quoted precision.
    pub fn round_price(&self, price: f64) -> f64 {
        round_to_digits(price, self.digits)
    }

    /// Signed distance from `from` to `to` expressed in pips.
    pub fn pips_between(&self, from: f64, to: f64) -> f64 {
        (to - from) / self.pip_size
    }

    /// Price `pips` away from `price`, rounded to the quoted precision.
    pub fn offset_by_pips(&self, price: f64, pips: f64) -> f64 {
        self.round_price(price + pips * self.pip_size)
    }
}

/// Round `value` to `digits` decimal places.
pub fn round_to_digits(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}
