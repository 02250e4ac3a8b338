//! Style options for grouped sections and their rows.
//!
//! Both preference types are plain values with public fields and consuming
//! setters:
//!
//! ```
//! use grouped_section::{Color, RowPreference, Visibility};
//!
//! let row = RowPreference::default()
//!     .row_separator_tint(Color::RED)
//!     .row_separator_visibility(Visibility::Visible);
//! assert_eq!(row.row_separator_tint, Some(Color::RED));
//! ```
//!
//! Numeric values are not validated. Negative radii, widths or spacings are
//! passed to the render tree unchanged and reported with a `tracing` warning.

use serde::{Deserialize, Serialize};

use crate::{Color, EdgeInsets, Font, FontWeight};

/// Whether row separators are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Drawn between rows.
    #[default]
    Automatic,
    /// Drawn between rows.
    Visible,
    /// Never drawn.
    Hidden,
}

impl Visibility {
    /// Whether anything should be drawn.
    #[must_use]
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

/// Per-row style options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowPreference {
    /// Font for row icons.
    pub icon_font: Font,
    /// Font for row titles and icons inside section labels.
    pub title_font: Font,
    /// Separator color. `None` uses translucent gray.
    pub row_separator_tint: Option<Color>,
    /// Whether separators are drawn.
    pub row_separator_visibility: Visibility,
    /// Insets around each separator line.
    pub row_separator_insets: EdgeInsets,
    /// Fill behind the whole section. `None` is clear.
    pub row_background_color: Option<Color>,
    /// Padding around each row's content.
    pub row_insets: EdgeInsets,
}

impl Default for RowPreference {
    fn default() -> Self {
        Self {
            icon_font: Font::system(21.0, FontWeight::Normal),
            title_font: Font::system(17.0, FontWeight::Normal),
            row_separator_tint: None,
            row_separator_visibility: Visibility::Automatic,
            row_separator_insets: EdgeInsets::new(0.0, 0.0, 62.0, 0.0),
            row_background_color: None,
            row_insets: EdgeInsets::new(12.0, 12.0, 20.0, 20.0),
        }
    }
}

impl RowPreference {
    /// Replaces the icon font.
    #[must_use]
    pub const fn icon_font(mut self, font: Font) -> Self {
        self.icon_font = font;
        self
    }

    /// Replaces the title font.
    #[must_use]
    pub const fn title_font(mut self, font: Font) -> Self {
        self.title_font = font;
        self
    }

    /// Replaces the separator tint.
    #[must_use]
    pub fn row_separator_tint(mut self, tint: impl Into<Option<Color>>) -> Self {
        self.row_separator_tint = tint.into();
        self
    }

    /// Replaces the separator visibility.
    #[must_use]
    pub const fn row_separator_visibility(mut self, visibility: Visibility) -> Self {
        self.row_separator_visibility = visibility;
        self
    }

    /// Replaces the separator insets.
    #[must_use]
    pub const fn row_separator_insets(mut self, insets: EdgeInsets) -> Self {
        self.row_separator_insets = insets;
        self
    }

    /// Replaces the section background color.
    #[must_use]
    pub fn row_background_color(mut self, color: impl Into<Option<Color>>) -> Self {
        self.row_background_color = color.into();
        self
    }

    /// Replaces the row insets.
    #[must_use]
    pub const fn row_insets(mut self, insets: EdgeInsets) -> Self {
        self.row_insets = insets;
        self
    }
}

/// Per-section style options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionPreference {
    /// Padding outside the rounded container.
    pub section_insets: EdgeInsets,
    /// Corner radius of the container.
    pub section_radius: f32,
    /// Width of the border stroke.
    pub section_border_width: f32,
    /// Border color. `None` draws no border.
    pub section_border_color: Option<Color>,
    /// Space between consecutive sections in a [`SectionList`](crate::SectionList).
    pub section_spacing: f32,
}

impl Default for SectionPreference {
    fn default() -> Self {
        Self {
            section_insets: EdgeInsets::new(0.0, 0.0, 19.0, 19.0),
            section_radius: 10.0,
            section_border_width: 1.0,
            section_border_color: None,
            section_spacing: 35.0,
        }
    }
}

impl SectionPreference {
    /// Replaces the outer insets.
    #[must_use]
    pub const fn section_insets(mut self, insets: EdgeInsets) -> Self {
        self.section_insets = insets;
        self
    }

    /// Replaces the corner radius.
    #[must_use]
    pub const fn section_radius(mut self, radius: f32) -> Self {
        self.section_radius = radius;
        self
    }

    /// Replaces the border width.
    #[must_use]
    pub const fn section_border_width(mut self, width: f32) -> Self {
        self.section_border_width = width;
        self
    }

    /// Replaces the border color.
    #[must_use]
    pub fn section_border_color(mut self, color: impl Into<Option<Color>>) -> Self {
        self.section_border_color = color.into();
        self
    }

    /// Replaces the spacing between sections.
    #[must_use]
    pub const fn section_spacing(mut self, spacing: f32) -> Self {
        self.section_spacing = spacing;
        self
    }

    /// Logs a warning for every negative numeric option.
    pub(crate) fn warn_negative(&self) {
        let values = [
            ("section_radius", self.section_radius),
            ("section_border_width", self.section_border_width),
            ("section_spacing", self.section_spacing),
        ];
        for (name, value) in values {
            if value < 0.0 {
                tracing::warn!(option = name, value, "negative section option used as is");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_settings_list() {
        let row = RowPreference::default();
        assert_eq!(row.icon_font.size, 21.0);
        assert_eq!(row.title_font.size, 17.0);
        assert_eq!(row.row_separator_visibility, Visibility::Automatic);
        assert_eq!(row.row_separator_insets, EdgeInsets::new(0.0, 0.0, 62.0, 0.0));
        assert_eq!(row.row_insets, EdgeInsets::new(12.0, 12.0, 20.0, 20.0));
        assert!(row.row_separator_tint.is_none());
        assert!(row.row_background_color.is_none());

        let section = SectionPreference::default();
        assert_eq!(section.section_radius, 10.0);
        assert_eq!(section.section_border_width, 1.0);
        assert_eq!(section.section_spacing, 35.0);
        assert_eq!(section.section_insets.leading(), 19.0);
        assert_eq!(section.section_insets.trailing(), 19.0);
        assert!(section.section_border_color.is_none());
    }

    #[test]
    fn setters_return_modified_copies() {
        let base = SectionPreference::default();
        let rounder = base.clone().section_radius(16.0).section_border_color(Color::BLUE);
        assert_eq!(base.section_radius, 10.0);
        assert_eq!(rounder.section_radius, 16.0);
        assert_eq!(rounder.section_border_color, Some(Color::BLUE));

        let cleared = rounder.section_border_color(None);
        assert!(cleared.section_border_color.is_none());
    }

    #[test]
    fn visibility_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Visibility::Hidden).unwrap(),
            "\"hidden\""
        );
        let parsed: Visibility = serde_json::from_str("\"visible\"").unwrap();
        assert_eq!(parsed, Visibility::Visible);
        assert!(!Visibility::Automatic.is_hidden());
    }
}
