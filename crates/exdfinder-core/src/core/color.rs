use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

static NAMED_COLORS: Map<&'static str, [u8; 3]> = phf_map! {
    "black" => [0x00, 0x00, 0x00],
    "white" => [0xff, 0xff, 0xff],
    "silver" => [0xc0, 0xc0, 0xc0],
    "gray" => [0x80, 0x80, 0x80], "grey" => [0x80, 0x80, 0x80],
    "lightgray" => [0xd3, 0xd3, 0xd3], "lightgrey" => [0xd3, 0xd3, 0xd3],
    "darkgray" => [0xa9, 0xa9, 0xa9], "darkgrey" => [0xa9, 0xa9, 0xa9],
    "red" => [0xff, 0x00, 0x00],
    "green" => [0x00, 0x80, 0x00],
    "lime" => [0x00, 0xff, 0x00],
    "forestgreen" => [0x22, 0x8b, 0x22],
    "blue" => [0x00, 0x00, 0xff],
    "navy" => [0x00, 0x00, 0x80],
    "cornflowerblue" => [0x64, 0x95, 0xed],
    "yellow" => [0xff, 0xff, 0x00],
    "gold" => [0xff, 0xd7, 0x00],
    "orange" => [0xff, 0xa5, 0x00],
    "cyan" => [0x00, 0xff, 0xff],
    "teal" => [0x00, 0x80, 0x80],
    "magenta" => [0xff, 0x00, 0xff],
    "purple" => [0x80, 0x00, 0x80],
    "pink" => [0xff, 0xc0, 0xcb],
    "hotpink" => [0xff, 0x69, 0xb4],
    "salmon" => [0xfa, 0x80, 0x72],
    "tan" => [0xd2, 0xb4, 0x8c],
    "maroon" => [0x80, 0x00, 0x00],
    "olive" => [0x80, 0x80, 0x00],
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid color '{0}': expected a name (e.g. 'silver') or '#RRGGBB'")]
    Invalid(String),
}

/// An 8-bit RGB color as understood by the viewer's `color` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const SILVER: Color = Color::new(0xc0, 0xc0, 0xc0);
    pub const BLUE: Color = Color::new(0x00, 0x00, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a hex string (e.g., "#FF0000" or "ff0000")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Look up a named color (case-insensitive, spaces ignored).
    pub fn from_name(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        NAMED_COLORS.get(key.as_str()).map(|&[r, g, b]| Self::new(r, g, b))
    }

    /// Lower-case `#rrggbb` form.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::from_name(s)
            .or_else(|| Self::from_hex(s))
            .ok_or_else(|| ColorError::Invalid(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!("#FF8000".parse::<Color>(), Ok(Color::new(255, 128, 0)));
        assert_eq!("00ff7f".parse::<Color>(), Ok(Color::new(0, 255, 127)));
    }

    #[test]
    fn parses_named_colors_case_insensitively() {
        assert_eq!("Silver".parse::<Color>(), Ok(Color::SILVER));
        assert_eq!("blue".parse::<Color>(), Ok(Color::BLUE));
        assert_eq!("Cornflower Blue".parse::<Color>(), Ok(Color::new(0x64, 0x95, 0xed)));
        assert_eq!("grey".parse::<Color>(), "gray".parse::<Color>());
    }

    #[test]
    fn formats_as_lowercase_hex() {
        assert_eq!(Color::SILVER.to_string(), "#c0c0c0");
        assert_eq!(Color::new(0xAB, 0x01, 0xFF).to_hex(), "#ab01ff");
    }

    #[test]
    fn rejects_invalid_values() {
        for bad in ["", "#12345", "#1234567", "#GGGGGG", "not-a-color", "#ééé"] {
            assert_eq!(bad.parse::<Color>(), Err(ColorError::Invalid(bad.to_string())));
        }
    }
}
