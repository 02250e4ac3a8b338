//! Loading section styles from JSON.
//!
//! A theme file may set any subset of options; everything it leaves out keeps
//! its default:
//!
//! ```json
//! {
//!     "section": { "section_radius": 12, "section_border_color": "#C7C7CC" },
//!     "row": { "row_separator_visibility": "hidden", "title_font": { "size": 15 } }
//! }
//! ```

use std::{fs::File, io::Read, path::Path};

use serde::{Deserialize, Serialize};

use crate::{GroupedSection, RowPreference, SectionPreference, View};

/// Errors raised while loading a [`SectionTheme`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not a valid theme.
    #[error("invalid theme document: {0}")]
    Json(#[from] serde_json::Error),
    /// The theme file could not be read.
    #[error("failed to read theme: {0}")]
    Io(#[from] std::io::Error),
}

/// Both preference objects of a grouped section, as one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionTheme {
    /// Section options.
    pub section: SectionPreference,
    /// Row options.
    pub row: RowPreference,
}

impl SectionTheme {
    /// Parses a theme from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the string is not a valid theme.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let theme = serde_json::from_str(json)?;
        tracing::debug!(?theme, "loaded section theme");
        Ok(theme)
    }

    /// Parses a theme from a reader.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the input is not a valid theme.
    pub fn from_reader(reader: impl Read) -> Result<Self, ConfigError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads a theme file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be opened and
    /// [`ConfigError::Json`] if its contents are not a valid theme.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading section theme");
        Self::from_reader(File::open(path)?)
    }

    /// Serializes this theme as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Applies both preference objects to `section`.
    #[must_use]
    pub fn apply<C: View, H: View, F: View>(
        &self,
        section: GroupedSection<C, H, F>,
    ) -> GroupedSection<C, H, F> {
        section
            .with_section_preference(self.section.clone())
            .with_row_preference(self.row.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Font, FontWeight, Visibility, text};

    #[test]
    fn partial_document_keeps_defaults() {
        let theme = SectionTheme::from_json_str(
            r##"{
                "section": { "section_radius": 12, "section_border_color": "#C7C7CC" },
                "row": { "row_separator_visibility": "hidden", "title_font": { "size": 15 } }
            }"##,
        )
        .unwrap();

        assert_eq!(theme.section.section_radius, 12.0);
        assert_eq!(
            theme.section.section_border_color,
            Some(Color::from_rgb_u8(0xC7, 0xC7, 0xCC))
        );
        assert_eq!(theme.section.section_spacing, 35.0);
        assert_eq!(theme.row.row_separator_visibility, Visibility::Hidden);
        assert_eq!(theme.row.title_font, Font::system(15.0, FontWeight::Normal));
        assert_eq!(theme.row.row_insets, RowPreference::default().row_insets);
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(SectionTheme::from_json_str("{}").unwrap(), SectionTheme::default());
        assert_eq!(
            SectionTheme::from_reader("{}".as_bytes()).unwrap(),
            SectionTheme::default()
        );
    }

    #[test]
    fn serialized_theme_reads_back() {
        let theme = SectionTheme {
            section: SectionPreference::default().section_border_color(Color::RED),
            row: RowPreference::default()
                .row_separator_tint(Color::from_rgba_u8(0, 122, 255, 51.0 / 255.0)),
        };
        let json = theme.to_json_string().unwrap();
        assert!(json.contains("\"#FF3B30\""));
        assert_eq!(SectionTheme::from_json_str(&json).unwrap(), theme);
    }

    #[test]
    fn bad_documents_are_reported() {
        let err = SectionTheme::from_json_str(r##"{ "row": { "row_separator_tint": "#12" } }"##)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));

        let err = SectionTheme::from_path("/nonexistent/theme.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn apply_replaces_both_preferences() {
        let theme = SectionTheme {
            section: SectionPreference::default().section_radius(4.0),
            row: RowPreference::default().row_separator_visibility(Visibility::Hidden),
        };
        let section = theme.apply(crate::GroupedSection::new(|| (text("a"), text("b"))));
        assert_eq!(section.section_preference().section_radius, 4.0);
        assert!(section.row_preference().row_separator_visibility.is_hidden());
    }
}
