//! Simulated market feed standing in for the trading platform.
//!
//! Produces a seeded random walk for one instrument with a fixed spread, and
//! keeps a small book of positions whose net profit follows the quote. One
//! position is in another symbol so the per-symbol filter is visible.

use chrono::{Duration, NaiveDateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use equityline_core::domain::symbol::round_to_digits;
use equityline_core::{AccountSnapshot, MarketHost, OpenPosition, SymbolInfo, TradeDirection};

/// One closed or forming bar of mid prices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBar {
    pub time: NaiveDateTime,
    pub close: f64,
}

/// A position with the entry price needed to mark it to market.
#[derive(Debug, Clone)]
struct BookEntry {
    position: OpenPosition,
    entry_price: f64,
    /// Floating profit of positions in other symbols is frozen.
    frozen_profit: Option<f64>,
}

pub struct SimulatedMarket {
    rng: StdRng,
    symbol: SymbolInfo,
    balance: f64,
    asset: String,
    book: Vec<BookEntry>,
    bars: Vec<PriceBar>,
    /// Scale of a single step, in pips.
    volatility_pips: f64,
}

const HISTORY_BARS: usize = 240;
/// Bars kept once the history is trimmed.
pub const MAX_HISTORY_BARS: usize = 2_000;
/// Growth allowed past the cap before trimming, so trims are batched.
const TRIM_BATCH: usize = 500;

/// Result of one feed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedStep {
    /// Index of the new bar.
    pub index: usize,
    /// Oldest bars dropped by this step; earlier indices shift down by this much.
    pub dropped: usize,
}

impl SimulatedMarket {
    pub fn eurusd(seed: u64) -> Self {
        let symbol = SymbolInfo {
            name: "EURUSD".into(),
            bid: 1.08500,
            ask: 1.08512,
            pip_size: 0.0001,
            pip_value: 0.0001,
            tick_size: 0.00001,
            digits: 5,
        };
        let book = vec![
            BookEntry {
                position: OpenPosition::new(1, "EURUSD", TradeDirection::Buy, 100_000.0, 0.0),
                entry_price: 1.08320,
                frozen_profit: None,
            },
            BookEntry {
                position: OpenPosition::new(2, "EURUSD", TradeDirection::Buy, 50_000.0, 0.0),
                entry_price: 1.08610,
                frozen_profit: None,
            },
            BookEntry {
                position: OpenPosition::new(3, "EURUSD", TradeDirection::Sell, 30_000.0, 0.0),
                entry_price: 1.08705,
                frozen_profit: None,
            },
            BookEntry {
                position: OpenPosition::new(4, "GBPUSD", TradeDirection::Sell, 20_000.0, 0.0),
                entry_price: 1.27010,
                frozen_profit: Some(-41.60),
            },
        ];

        let mut market = Self {
            rng: StdRng::seed_from_u64(seed),
            symbol,
            balance: 25_000.0,
            asset: "USD".into(),
            book,
            bars: Vec::with_capacity(HISTORY_BARS * 2),
            volatility_pips: 1.8,
        };

        let start = Utc::now().naive_utc() - Duration::minutes(HISTORY_BARS as i64);
        market.bars.push(PriceBar { time: start, close: market.symbol.mid() });
        for _ in 1..HISTORY_BARS {
            market.advance();
        }
        market
    }

    /// Move the quote one step and append a bar, trimming old history.
    pub fn advance(&mut self) -> FeedStep {
        // Sum of uniforms: cheap, roughly normal, bounded.
        let shock: f64 = (0..4).map(|_| self.rng.gen_range(-1.0_f64..1.0)).sum::<f64>() / 2.0;
        let step = shock * self.volatility_pips * self.symbol.pip_size;
        let spread = self.symbol.spread();

        let bid = round_to_digits(self.symbol.bid + step, self.symbol.digits);
        self.symbol.bid = bid;
        self.symbol.ask = round_to_digits(bid + spread, self.symbol.digits);
        self.mark_to_market();

        let time = self
            .bars
            .last()
            .map(|b| b.time + Duration::minutes(1))
            .unwrap_or_else(|| Utc::now().naive_utc());
        self.bars.push(PriceBar { time, close: self.symbol.mid() });

        let mut dropped = 0;
        if self.bars.len() > MAX_HISTORY_BARS + TRIM_BATCH {
            dropped = self.bars.len() - MAX_HISTORY_BARS;
            self.bars.drain(..dropped);
            log::debug!("trimmed {dropped} bars of price history");
        }
        FeedStep { index: self.bars.len() - 1, dropped }
    }

    fn mark_to_market(&mut self) {
        let sym = &self.symbol;
        for entry in &mut self.book {
            entry.position.net_profit = match entry.frozen_profit {
                Some(p) => p,
                None => {
                    let exit = match entry.position.direction {
                        TradeDirection::Buy => sym.bid - entry.entry_price,
                        TradeDirection::Sell => entry.entry_price - sym.ask,
                    };
                    let pips = exit / sym.pip_size;
                    (pips * entry.position.point_value(sym.pip_value) * 100.0).round() / 100.0
                }
            };
        }
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn equity(&self) -> f64 {
        self.balance + self.book.iter().map(|e| e.position.net_profit).sum::<f64>()
    }
}

impl MarketHost for SimulatedMarket {
    fn account(&self) -> AccountSnapshot {
        AccountSnapshot::new(self.equity(), self.asset.clone())
    }

    fn symbol(&self) -> SymbolInfo {
        self.symbol.clone()
    }

    fn positions(&self) -> Vec<OpenPosition> {
        self.book.iter().map(|e| e.position.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_feeds_are_reproducible() {
        let a = SimulatedMarket::eurusd(7);
        let b = SimulatedMarket::eurusd(7);
        let closes_a: Vec<f64> = a.bars().iter().map(|b| b.close).collect();
        let closes_b: Vec<f64> = b.bars().iter().map(|b| b.close).collect();
        assert_eq!(closes_a, closes_b);
        assert_eq!(a.bars().len(), HISTORY_BARS);
    }

    #[test]
    fn spread_is_preserved_across_steps() {
        let mut market = SimulatedMarket::eurusd(1);
        for _ in 0..50 {
            market.advance();
            let spread = market.symbol().spread();
            assert!((spread - 0.00012).abs() < 1e-9, "spread drifted to {spread}");
        }
    }

    #[test]
    fn equity_tracks_floating_profit() {
        let market = SimulatedMarket::eurusd(3);
        let floating: f64 = market.positions().iter().map(|p| p.net_profit).sum();
        assert!((market.account().equity - (25_000.0 + floating)).abs() < 1e-9);
    }

    #[test]
    fn foreign_symbol_profit_is_frozen() {
        let mut market = SimulatedMarket::eurusd(5);
        market.advance();
        let gbp = market.positions().into_iter().find(|p| p.symbol == "GBPUSD").unwrap();
        assert_eq!(gbp.net_profit, -41.60);
    }

    #[test]
    fn history_is_capped() {
        let mut market = SimulatedMarket::eurusd(2);
        let mut dropped = 0;
        for _ in 0..(MAX_HISTORY_BARS + TRIM_BATCH) {
            let step = market.advance();
            assert_eq!(step.index, market.bars().len() - 1);
            dropped += step.dropped;
        }
        assert!(market.bars().len() <= MAX_HISTORY_BARS + TRIM_BATCH);
        assert_eq!(dropped, HISTORY_BARS + MAX_HISTORY_BARS + TRIM_BATCH - market.bars().len());
        assert!(dropped > 0);
    }

    #[test]
    fn bars_advance_one_minute_apart() {
        let mut market = SimulatedMarket::eurusd(9);
        let idx = market.advance().index;
        let bars = market.bars();
        assert_eq!(idx, bars.len() - 1);
        assert_eq!(bars[idx].time - bars[idx - 1].time, Duration::minutes(1));
    }
}
