use serde::{Deserialize, Serialize};

/// Account state as reported by the host at the moment of a recompute.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountSnapshot {
    pub equity: f64,
    /// Deposit asset label shown next to amounts (e.g. "USD").
    pub asset: String,
}

impl AccountSnapshot {
    pub fn new(equity: f64, asset: impl Into<String>) -> Self {
        Self { equity, asset: asset.into() }
    }
}
