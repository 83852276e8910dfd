//! Host-neutral colour values for the line and label.
//!
//! Parsed from a colour name (`DodgerBlue`, case-insensitive) or `#RRGGBB`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Error, PartialEq)]
pub enum ColorParseError {
    #[error("Unknown colour name: {0}")]
    UnknownName(String),

    #[error("Invalid hex colour {0} (expected #RRGGBB)")]
    InvalidHex(String),
}

const NAMED: &[(&str, Rgb)] = &[
    ("Black", Rgb::new(0, 0, 0)),
    ("White", Rgb::new(255, 255, 255)),
    ("Red", Rgb::new(255, 0, 0)),
    ("Green", Rgb::new(0, 128, 0)),
    ("Lime", Rgb::new(0, 255, 0)),
    ("Blue", Rgb::new(0, 0, 255)),
    ("DodgerBlue", Rgb::new(30, 144, 255)),
    ("Yellow", Rgb::new(255, 255, 0)),
    ("Orange", Rgb::new(255, 165, 0)),
    ("Gray", Rgb::new(128, 128, 128)),
    ("Silver", Rgb::new(192, 192, 192)),
    ("Crimson", Rgb::new(220, 20, 60)),
    ("Magenta", Rgb::new(255, 0, 255)),
    ("Cyan", Rgb::new(0, 255, 255)),
];

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const DODGER_BLUE: Rgb = Rgb::new(30, 144, 255);
    pub const GREEN: Rgb = Rgb::new(0, 128, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);

    /// Name from the built-in table, if this colour has one.
    pub fn name(&self) -> Option<&'static str> {
        NAMED.iter().find(|(_, c)| c == self).map(|(n, _)| *n)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(ColorParseError::InvalidHex(s.to_string()));
            }
            let channel = |i: usize| {
                u8::from_str_radix(&hex[i..i + 2], 16)
                    .map_err(|_| ColorParseError::InvalidHex(s.to_string()))
            };
            return Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?));
        }
        NAMED
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|(_, c)| *c)
            .ok_or_else(|| ColorParseError::UnknownName(s.to_string()))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b),
        }
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("DodgerBlue".parse::<Rgb>().unwrap(), Rgb::DODGER_BLUE);
        assert_eq!("dodgerblue".parse::<Rgb>().unwrap(), Rgb::DODGER_BLUE);
        assert_eq!("Green".parse::<Rgb>().unwrap(), Rgb::GREEN);
    }

    #[test]
    fn parses_hex() {
        assert_eq!("#1E90FF".parse::<Rgb>().unwrap(), Rgb::DODGER_BLUE);
        assert_eq!("#0a0B0c".parse::<Rgb>().unwrap(), Rgb::new(10, 11, 12));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!("Chartreuse".parse::<Rgb>(), Err(ColorParseError::UnknownName(_))));
        assert!(matches!("#12345".parse::<Rgb>(), Err(ColorParseError::InvalidHex(_))));
        assert!(matches!("#GG0000".parse::<Rgb>(), Err(ColorParseError::InvalidHex(_))));
    }

    #[test]
    fn display_prefers_names() {
        assert_eq!(Rgb::RED.to_string(), "Red");
        assert_eq!(Rgb::new(1, 2, 3).to_string(), "#010203");
    }
}
