//! The hypothetical price the projection line sits at.

use crate::domain::symbol::round_to_digits;

/// Slack, in ticks, allowed on the echo comparison.
const TICK_EPSILON: f64 = 1e-9;

/// Owns the single user-adjustable projection price.
///
/// A non-positive price means the line has not been established yet.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceTracker {
    price: f64,
}

impl PriceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn is_established(&self) -> bool {
        self.price > 0.0
    }

    /// Set the starting price.
    ///
    /// An already-rendered line wins; otherwise the price starts `offset_pips`
    /// away from the bid. Either way the result is rounded to `digits`.
    pub fn initialize(
        &mut self,
        existing_rendered_price: Option<f64>,
        current_bid: f64,
        offset_pips: f64,
        pip_size: f64,
        digits: u32,
    ) -> f64 {
        self.price = match existing_rendered_price {
            Some(rendered) => round_to_digits(rendered, digits),
            None => round_to_digits(current_bid + offset_pips * pip_size, digits),
        };
        self.price
    }

    /// Adopt a price reported by the rendering layer after a drag.
    ///
    /// Moves of one tick or less are the renderer echoing the stored value and
    /// return `None`. The distance is measured in ticks so float noise cannot
    /// push an exact one-tick move over the limit.
    pub fn update_from_external_move(
        &mut self,
        new_raw_price: f64,
        tick_size: f64,
        digits: u32,
    ) -> Option<f64> {
        let ticks = ((new_raw_price - self.price) / tick_size).abs();
        if ticks <= 1.0 + TICK_EPSILON {
            log::trace!("ignoring line echo at {new_raw_price} (stored {})", self.price);
            return None;
        }
        self.price = round_to_digits(new_raw_price, digits);
        Some(self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unestablished() {
        let tracker = PriceTracker::new();
        assert!(!tracker.is_established());
        assert_eq!(tracker.price(), 0.0);
    }

    #[test]
    fn initialize_from_offset() {
        let mut tracker = PriceTracker::new();
        let price = tracker.initialize(None, 1.10003, 50.0, 0.0001, 5);
        assert_eq!(price, 1.10503);
        assert!(tracker.is_established());
    }

    #[test]
    fn initialize_adopts_rendered_line() {
        let mut tracker = PriceTracker::new();
        let price = tracker.initialize(Some(1.2345), 1.1000, 50.0, 0.0001, 5);
        assert_eq!(price, 1.2345);
    }

    #[test]
    fn adopted_line_is_rounded_to_digits() {
        let mut tracker = PriceTracker::new();
        let price = tracker.initialize(Some(1.1050004), 1.1, 50.0, 0.0001, 5);
        assert_eq!(price, 1.105);
        assert_eq!(tracker.price(), 1.105);
    }

    #[test]
    fn negative_offset_places_line_below_bid() {
        let mut tracker = PriceTracker::new();
        let price = tracker.initialize(None, 1.1000, -20.0, 0.0001, 5);
        assert_eq!(price, 1.098);
    }

    #[test]
    fn echo_within_one_tick_is_ignored() {
        let mut tracker = PriceTracker::new();
        tracker.initialize(Some(1.10000), 1.1, 0.0, 0.0001, 5);
        assert_eq!(tracker.update_from_external_move(1.100005, 0.00001, 5), None);
        assert_eq!(tracker.update_from_external_move(1.099995, 0.00001, 5), None);
        assert_eq!(tracker.price(), 1.1);
    }

    #[test]
    fn exactly_one_tick_is_an_echo() {
        let mut tracker = PriceTracker::new();
        tracker.initialize(Some(1.105), 1.1, 0.0, 0.0001, 5);
        assert_eq!(tracker.update_from_external_move(1.10501, 0.00001, 5), None);
        assert_eq!(tracker.update_from_external_move(1.10499, 0.00001, 5), None);
        assert_eq!(tracker.price(), 1.105);
    }

    #[test]
    fn two_ticks_is_a_move() {
        let mut tracker = PriceTracker::new();
        tracker.initialize(Some(1.105), 1.1, 0.0, 0.0001, 5);
        assert_eq!(tracker.update_from_external_move(1.10502, 0.00001, 5), Some(1.10502));
        assert_eq!(tracker.update_from_external_move(1.105, 0.00001, 5), Some(1.105));
    }

    #[test]
    fn real_move_is_rounded_and_stored() {
        let mut tracker = PriceTracker::new();
        tracker.initialize(Some(1.10000), 1.1, 0.0, 0.0001, 5);
        let moved = tracker.update_from_external_move(1.1012349, 0.00001, 5);
        assert_eq!(moved, Some(1.10123));
        assert_eq!(tracker.price(), 1.10123);
    }
}
