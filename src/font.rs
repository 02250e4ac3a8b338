use serde::{Deserialize, Serialize};

/// A system font with a point size and weight.
///
/// Fonts are plain values. Install one for a subtree with
/// [`ViewExt::font`](crate::ViewExt::font); text and images rendered below
/// pick it up from the [`Environment`](crate::Environment).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Font size in points.
    pub size: f32,
    /// Font weight.
    #[serde(default)]
    pub weight: FontWeight,
}

impl Default for Font {
    fn default() -> Self {
        Self::BODY
    }
}

impl Font {
    /// Body text, 17pt regular.
    pub const BODY: Self = Self::system(17.0, FontWeight::Normal);
    /// Caption text, 12pt regular.
    pub const CAPTION: Self = Self::system(12.0, FontWeight::Normal);

    /// Creates a system font with the given size and weight.
    #[must_use]
    pub const fn system(size: f32, weight: FontWeight) -> Self {
        Self { size, weight }
    }

    /// Sets the font size in points.
    #[must_use]
    pub const fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub const fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the font to bold weight.
    /// Equal to calling `font.weight(FontWeight::Bold)`.
    #[must_use]
    pub const fn bold(self) -> Self {
        self.weight(FontWeight::Bold)
    }
}

/// Font weight enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    /// Thin weight (100).
    Thin,
    /// Ultra-light weight (200).
    UltraLight,
    /// Light weight (300).
    Light,
    /// Normal weight (400).
    #[default]
    Normal,
    /// Medium weight (500).
    Medium,
    /// Semi-bold weight (600).
    SemiBold,
    /// Bold weight (700).
    Bold,
    /// Ultra-bold weight (800).
    UltraBold,
    /// Black weight (900).
    Black,
}

impl FontWeight {
    /// Numeric weight on the CSS/OpenType 100..=900 scale.
    #[must_use]
    pub const fn value(self) -> u16 {
        match self {
            Self::Thin => 100,
            Self::UltraLight => 200,
            Self::Light => 300,
            Self::Normal => 400,
            Self::Medium => 500,
            Self::SemiBold => 600,
            Self::Bold => 700,
            Self::UltraBold => 800,
            Self::Black => 900,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_replaces_single_field() {
        let font = Font::system(21.0, FontWeight::Normal).bold();
        assert_eq!(font.size, 21.0);
        assert_eq!(font.weight, FontWeight::Bold);
        assert_eq!(font.weight.value(), 700);
    }

    #[test]
    fn weight_defaults_when_missing() {
        let font: Font = serde_json::from_str(r#"{ "size": 14 }"#).unwrap();
        assert_eq!(font, Font::system(14.0, FontWeight::Normal));

        let font: Font = serde_json::from_str(r#"{ "size": 14, "weight": "semi_bold" }"#).unwrap();
        assert_eq!(font.weight, FontWeight::SemiBold);
    }
}
