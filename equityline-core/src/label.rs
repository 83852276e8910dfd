//! Text and colour of the equity label drawn next to the projection line.

use crate::color::Rgb;
use crate::config::IndicatorConfig;
use crate::projection::{EquityChange, EquityProjection};

/// Which configured colour the label uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelTone {
    Positive,
    Negative,
    /// Projected equity equals current equity; drawn in the line colour.
    Base,
}

impl LabelTone {
    pub fn for_projection(projection: &EquityProjection) -> Self {
        match projection.change() {
            EquityChange::Increase => LabelTone::Positive,
            EquityChange::Decrease => LabelTone::Negative,
            EquityChange::Unchanged => LabelTone::Base,
        }
    }

    pub fn color(self, config: &IndicatorConfig) -> Rgb {
        match self {
            LabelTone::Positive => config.label_positive_color,
            LabelTone::Negative => config.label_negative_color,
            LabelTone::Base => config.line_color,
        }
    }
}

/// `Equity: 10,500.00 USD (Floating profit: 500.00 USD)`
pub fn label_text(projection: &EquityProjection, asset: &str) -> String {
    format!(
        "Equity: {} {asset} (Floating profit: {} {asset})",
        format_amount(projection.projected_equity),
        format_amount(projection.total_floating_profit),
    )
}

/// Two decimals with `,` thousands separators.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // -0.004 prints as 0.00, not -0.00
    let negative = value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    format!("{}{grouped}.{frac}", if negative { "-" } else { "" })
}
