//! # Color
//!
//! sRGB colors with an opacity channel.
//!
//! Components are stored as floating point values in the `0.0..=1.0` range.
//! Colors can be parsed from hexadecimal strings (`#RRGGBB`, `#RRGGBBAA`,
//! optionally prefixed with `0x` instead of `#`) and serialize back to the same
//! notation, which is what theme files use.

use core::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// A color in the sRGB color space with an opacity channel.
///
/// # Layout Behavior
///
/// Used as a view, a color fills whatever space its parent gives it. Use
/// [`ViewExt::frame`](crate::ViewExt::frame) to constrain it, or use it as a
/// background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0.0 to 1.0)
    pub red: f32,
    /// Green component (0.0 to 1.0)
    pub green: f32,
    /// Blue component (0.0 to 1.0)
    pub blue: f32,
    /// Opacity (0.0 = transparent, 1.0 = opaque)
    pub opacity: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    /// Fully transparent black.
    pub const CLEAR: Self = Self::from_rgba_u8(0, 0, 0, 0.0);
    /// Black color.
    pub const BLACK: Self = Self::from_rgb_u8(0, 0, 0);
    /// White color.
    pub const WHITE: Self = Self::from_rgb_u8(255, 255, 255);
    /// Neutral system gray.
    pub const GRAY: Self = Self::from_rgb_u8(142, 142, 147);
    /// System red.
    pub const RED: Self = Self::from_rgb_u8(255, 59, 48);
    /// System green.
    pub const GREEN: Self = Self::from_rgb_u8(52, 199, 89);
    /// System blue.
    pub const BLUE: Self = Self::from_rgb_u8(0, 122, 255);
    /// System purple.
    pub const PURPLE: Self = Self::from_rgb_u8(175, 82, 222);
    /// Tint used for interactive glyphs such as row icons.
    pub const ACCENT: Self = Self::BLUE;

    /// Creates a color from floating point components.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, opacity: f32) -> Self {
        Self {
            red,
            green,
            blue,
            opacity,
        }
    }

    /// Creates an opaque color from 8-bit components.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self::from_rgba_u8(red, green, blue, 1.0)
    }

    /// Creates a color from 8-bit components and a floating point opacity.
    #[must_use]
    pub const fn from_rgba_u8(red: u8, green: u8, blue: u8, opacity: f32) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            opacity,
        }
    }

    /// Creates an opaque color from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn from_u32(rgb: u32) -> Self {
        Self::from_rgb_u8(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    /// Parses a hexadecimal color string.
    ///
    /// Accepts six digits (opaque) or eight digits (last pair is opacity),
    /// with an optional `#` or `0x` prefix.
    ///
    /// # Errors
    ///
    /// Returns [`HexColorError`] if the digit count is wrong or a character is
    /// not a hexadecimal digit.
    pub fn try_from_hex(hex: &str) -> Result<Self, HexColorError> {
        let bytes = hex.as_bytes();
        let offset = hex_prefix_len(bytes);
        let digits = bytes.len() - offset;
        if digits != 6 && digits != 8 {
            return Err(HexColorError::InvalidLength);
        }

        let red = hex_byte(bytes, offset)?;
        let green = hex_byte(bytes, offset + 2)?;
        let blue = hex_byte(bytes, offset + 4)?;
        let opacity = if digits == 8 {
            f32::from(hex_byte(bytes, offset + 6)?) / 255.0
        } else {
            1.0
        };

        Ok(Self::from_rgba_u8(red, green, blue, opacity))
    }

    /// Returns a copy of this color with the given opacity, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn with_opacity(self, opacity: f32) -> Self {
        Self {
            opacity: opacity.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Whether the color is fully opaque.
    #[must_use]
    pub fn is_opaque(&self) -> bool {
        self.opacity >= 1.0
    }

    /// Whether the color is fully transparent.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.opacity <= 0.0
    }

    /// Formats the color as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = [self.red, self.green, self.blue, self.opacity].map(unit_to_u8);
        if self.is_opaque() {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn hex_prefix_len(bytes: &[u8]) -> usize {
    match bytes {
        [b'#', ..] => 1,
        [b'0', b'x' | b'X', ..] => 2,
        _ => 0,
    }
}

const fn hex_digit(byte: u8, index: usize) -> Result<u8, HexColorError> {
    match byte {
        b'0'..=b'9' => Ok(byte - b'0'),
        b'a'..=b'f' => Ok(byte - b'a' + 10),
        b'A'..=b'F' => Ok(byte - b'A' + 10),
        _ => Err(HexColorError::InvalidDigit(index)),
    }
}

fn hex_byte(bytes: &[u8], index: usize) -> Result<u8, HexColorError> {
    let hi = hex_digit(bytes[index], index)?;
    let lo = hex_digit(bytes[index + 1], index + 1)?;
    Ok((hi << 4) | lo)
}

/// Errors that can occur when parsing hexadecimal color strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HexColorError {
    /// The string does not hold 6 or 8 hexadecimal digits.
    #[error("expected 6 or 8 hexadecimal digits")]
    InvalidLength,
    /// A non-hexadecimal character was found at the given byte index.
    #[error("invalid hexadecimal digit at byte index {0}")]
    InvalidDigit(usize),
}

impl FromStr for Color {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::from_rgb_u8(red, green, blue)
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::from_rgb_u8(red, green, blue)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        hex.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        let color: Color = "#FF0000".parse().unwrap();
        assert_eq!(color, Color::from_rgb_u8(255, 0, 0));
        assert!(color.is_opaque());

        let prefixed = Color::try_from_hex("0x00ff00").unwrap();
        assert_eq!(prefixed, Color::from_rgb_u8(0, 255, 0));

        let bare = Color::try_from_hex("0000FF").unwrap();
        assert_eq!(bare, Color::from_rgb_u8(0, 0, 255));
    }

    #[test]
    fn parses_opacity_pair() {
        let color = Color::try_from_hex("#00000000").unwrap();
        assert!(color.is_clear());
        assert_eq!(color, Color::CLEAR);
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(Color::try_from_hex("#FFF"), Err(HexColorError::InvalidLength));
        assert_eq!(Color::try_from_hex(""), Err(HexColorError::InvalidLength));
        assert_eq!(
            Color::try_from_hex("#12G456"),
            Err(HexColorError::InvalidDigit(3))
        );
    }

    #[test]
    fn hex_output_drops_opaque_alpha() {
        assert_eq!(Color::RED.to_hex(), "#FF3B30");
        assert_eq!(Color::BLACK.with_opacity(0.0).to_hex(), "#00000000");
        assert_eq!(Color::from_u32(0x12_34_56).to_string(), "#123456");
    }

    #[test]
    fn opacity_is_clamped() {
        assert_eq!(Color::GRAY.with_opacity(4.0).opacity, 1.0);
        assert_eq!(Color::GRAY.with_opacity(-1.0).opacity, 0.0);
    }

    #[test]
    fn serde_uses_hex_strings() {
        let json = serde_json::to_string(&Color::WHITE).unwrap();
        assert_eq!(json, "\"#FFFFFF\"");

        let parsed: Color = serde_json::from_str("\"#FFFFFF\"").unwrap();
        assert_eq!(parsed, Color::WHITE);

        let err = serde_json::from_str::<Color>("\"white\"").unwrap_err();
        assert!(err.to_string().contains("hexadecimal"));
    }
}
