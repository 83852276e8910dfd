use serde::{Deserialize, Serialize};

/// Host-assigned position identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionId(pub u64);

/// Trade direction of an open position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeDirection {
    Buy,
    Sell,
}

impl TradeDirection {
    pub fn is_long(self) -> bool {
        self == TradeDirection::Buy
    }

    pub fn label(self) -> &'static str {
        match self {
            TradeDirection::Buy => "Buy",
            TradeDirection::Sell => "Sell",
        }
    }
}

/// An open position owned by the trading account. Read-only to the indicator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpenPosition {
    pub id: PositionId,
    pub symbol: String,
    pub direction: TradeDirection,
    /// Volume in units (not lots).
    pub volume: f64,
    /// Current floating profit, net of commissions and swaps.
    pub net_profit: f64,
}

impl OpenPosition {
    pub fn new(
        id: u64,
        symbol: impl Into<String>,
        direction: TradeDirection,
        volume: f64,
        net_profit: f64,
    ) -> Self {
        Self { id: PositionId(id), symbol: symbol.into(), direction, volume, net_profit }
    }

    pub fn is_long(&self) -> bool {
        self.direction.is_long()
    }

    pub fn is_short(&self) -> bool {
        !self.direction.is_long()
    }

    /// Monetary value of a one-pip move for this position's volume.
    pub fn point_value(&self, pip_value: f64) -> f64 {
        pip_value * self.volume
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_flags() {
        let long = OpenPosition::new(1, "EURUSD", TradeDirection::Buy, 10_000.0, 0.0);
        let short = OpenPosition::new(2, "EURUSD", TradeDirection::Sell, 10_000.0, 0.0);
        assert!(long.is_long() && !long.is_short());
        assert!(short.is_short() && !short.is_long());
    }

    #[test]
    fn point_value_scales_with_volume() {
        let pos = OpenPosition::new(1, "EURUSD", TradeDirection::Buy, 100_000.0, 0.0);
        assert!((pos.point_value(0.0001) - 10.0).abs() < 1e-9);
    }
}
