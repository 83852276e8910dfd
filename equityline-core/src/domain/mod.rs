//! Domain types for Equity Line

pub mod account;
pub mod position;
pub mod snapshot;
pub mod symbol;

pub use account::AccountSnapshot;
pub use position::{OpenPosition, PositionId, TradeDirection};
pub use snapshot::{MarketSnapshot, ScenarioError};
pub use symbol::SymbolInfo;
