use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PageError, PageResult};

/// Opaque sRGB color, serialized as a CSS `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn from_hex(input: &str) -> PageResult<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.len() != 6 || !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(PageError::InvalidData(format!(
                "color `{input}` must be a `#rrggbb` hex string"
            )));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| PageError::InvalidData(format!("color `{input}`: {e}")))
        };

        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    #[must_use]
    pub fn to_css_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// CSS `rgba(..)` string used for translucent band fills.
    #[must_use]
    pub fn to_css_rgba(self, alpha: f64) -> String {
        let alpha = if alpha.is_finite() {
            alpha.clamp(0.0, 1.0)
        } else {
            1.0
        };
        format!(
            "rgba({}, {}, {}, {alpha})",
            self.red, self.green, self.blue
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_hex())
    }
}

impl FromStr for Color {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = PageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_css_hex()
    }
}

/// Ordered color cycle used to tint scenarios by index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> PageResult<Self> {
        if colors.is_empty() {
            return Err(PageError::InvalidData(
                "palette must contain at least one color".to_owned(),
            ));
        }
        Ok(Self { colors })
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Color for the scenario at `index`, wrapping once the palette is exhausted.
    #[must_use]
    pub fn color_at(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = PageError;

    fn try_from(value: Vec<Color>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Palette> for Vec<Color> {
    fn from(value: Palette) -> Self {
        value.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![
                Color::rgb(0x3b, 0x82, 0xf6),
                Color::rgb(0x8b, 0x5c, 0xf6),
                Color::rgb(0x10, 0xb9, 0x81),
                Color::rgb(0xf5, 0x9e, 0x0b),
                Color::rgb(0xef, 0x44, 0x44),
                Color::rgb(0x06, 0xb6, 0xd4),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing_accepts_optional_hash() {
        assert_eq!(
            Color::from_hex("#3b82f6").expect("hash"),
            Color::from_hex("3B82F6").expect("no hash")
        );
        assert_eq!(Color::rgb(0x3b, 0x82, 0xf6).to_css_hex(), "#3b82f6");
    }

    #[test]
    fn hex_parsing_rejects_malformed_input() {
        assert!(Color::from_hex("#3b82f").is_err());
        assert!(Color::from_hex("#zz82f6").is_err());
        assert!(Color::from_hex("").is_err());
    }

    #[test]
    fn palette_cycles_past_its_length() {
        let palette = Palette::default();
        let len = palette.colors().len();
        assert_eq!(palette.color_at(len), palette.color_at(0));
        assert_eq!(palette.color_at(len + 3), palette.color_at(3));
    }

    #[test]
    fn empty_palette_is_rejected() {
        assert!(Palette::new(Vec::new()).is_err());
    }

    #[test]
    fn empty_palette_json_is_rejected() {
        assert!(serde_json::from_str::<Palette>("[]").is_err());
    }

    #[test]
    fn color_serializes_as_css_string() {
        let json = serde_json::to_string(&Color::rgb(16, 185, 129)).expect("serialize");
        assert_eq!(json, "\"#10b981\"");
        let back: Color = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, Color::rgb(16, 185, 129));
    }
}
