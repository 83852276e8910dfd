//! Colour tokens for the Equity Line terminal chart
//!
//! Chrome uses a fixed dark palette; the projection line and the equity label
//! use the colours from the indicator configuration.
//!
//! # Color Palette
//! - **Background**: Deep charcoal (base layer)
//! - **Accent**: Electric cyan (borders, price series)
//! - **Positive**: Neon green (gains, long positions)
//! - **Negative**: Hot pink (losses, short positions)
//! - **Warning**: Neon orange (status warnings)
//! - **Muted**: Steel blue (axes, hints)

use equityline_core::{Rgb, TradeDirection};
use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    pub fn parrot_neon() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            warning: Color::Rgb(255, 140, 0),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    /// Get color for PnL value (positive = green, negative = pink)
    pub fn pnl_color(&self, value: f64) -> Color {
        if value >= 0.0 {
            self.positive
        } else {
            self.negative
        }
    }

    pub fn direction_color(&self, direction: TradeDirection) -> Color {
        match direction {
            TradeDirection::Buy => self.positive,
            TradeDirection::Sell => self.negative,
        }
    }
}

/// Configured indicator colour as a terminal colour.
pub fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.background, Color::Rgb(18, 18, 20));
        assert_eq!(theme.accent, Color::Rgb(0, 255, 255));
    }

    #[test]
    fn test_pnl_color() {
        let theme = Theme::default();
        assert_eq!(theme.pnl_color(100.0), theme.positive);
        assert_eq!(theme.pnl_color(-50.0), theme.negative);
        assert_eq!(theme.pnl_color(0.0), theme.positive);
    }

    #[test]
    fn test_direction_color() {
        let theme = Theme::default();
        assert_eq!(theme.direction_color(TradeDirection::Buy), theme.positive);
        assert_eq!(theme.direction_color(TradeDirection::Sell), theme.negative);
    }

    #[test]
    fn test_rgb_conversion() {
        assert_eq!(rgb(Rgb::DODGER_BLUE), Color::Rgb(30, 144, 255));
    }
}
