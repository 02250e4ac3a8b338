//! Geometry values shared by the layout modifiers.
//!
//! All values use **logical pixels** (points). Converting to physical pixels is
//! left to whoever draws the render tree, using the
//! [`DisplayScale`](crate::DisplayScale) found in the environment.

use serde::{Deserialize, Serialize};

/// Insets applied to the four edges of a rectangle.
///
/// Leading and trailing follow the reading direction (left and right in a
/// left-to-right layout).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeInsets {
    top: f32,
    bottom: f32,
    leading: f32,
    trailing: f32,
}

impl Default for EdgeInsets {
    fn default() -> Self {
        Self::ZERO
    }
}

impl EdgeInsets {
    /// No inset on any edge.
    pub const ZERO: Self = Self::all(0.0);

    /// Creates an [`EdgeInsets`] value with explicit edges.
    #[must_use]
    pub const fn new(top: f32, bottom: f32, leading: f32, trailing: f32) -> Self {
        Self {
            top,
            bottom,
            leading,
            trailing,
        }
    }

    /// Returns equal insets on every edge.
    #[must_use]
    pub const fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Returns symmetric vertical and horizontal insets.
    #[must_use]
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(vertical, vertical, horizontal, horizontal)
    }

    /// Top inset.
    #[must_use]
    pub const fn top(&self) -> f32 {
        self.top
    }

    /// Bottom inset.
    #[must_use]
    pub const fn bottom(&self) -> f32 {
        self.bottom
    }

    /// Leading inset.
    #[must_use]
    pub const fn leading(&self) -> f32 {
        self.leading
    }

    /// Trailing inset.
    #[must_use]
    pub const fn trailing(&self) -> f32 {
        self.trailing
    }

    /// Horizontal space consumed by the insets.
    #[must_use]
    pub const fn horizontal(&self) -> f32 {
        self.leading + self.trailing
    }

    /// Vertical space consumed by the insets.
    #[must_use]
    pub const fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Horizontal placement of a child inside a wider container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlignment {
    /// Align to the leading edge.
    Leading,
    /// Center horizontally.
    #[default]
    Center,
    /// Align to the trailing edge.
    Trailing,
}

/// Vertical placement of a child inside a taller container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlignment {
    /// Align to the top edge.
    Top,
    /// Center vertically.
    #[default]
    Center,
    /// Align to the bottom edge.
    Bottom,
}

/// Size constraints applied by [`ViewExt::frame`](crate::ViewExt::frame).
///
/// `None` leaves the dimension to the child. A `max_width` of
/// [`f32::INFINITY`] makes the frame take all the width its parent offers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    /// Fixed width.
    pub width: Option<f32>,
    /// Fixed height.
    pub height: Option<f32>,
    /// Upper bound on the width.
    pub max_width: Option<f32>,
    /// Placement of the child when the frame is wider than it.
    pub alignment: HorizontalAlignment,
}

impl Frame {
    /// An unconstrained, centered frame.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            width: None,
            height: None,
            max_width: None,
            alignment: HorizontalAlignment::Center,
        }
    }

    /// A frame that spans the full offered width.
    #[must_use]
    pub const fn fill_width(alignment: HorizontalAlignment) -> Self {
        Self::new().max_width(f32::INFINITY).alignment(alignment)
    }

    /// Sets a fixed width.
    #[must_use]
    pub const fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets a fixed height.
    #[must_use]
    pub const fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Sets the maximum width.
    #[must_use]
    pub const fn max_width(mut self, max_width: f32) -> Self {
        self.max_width = Some(max_width);
        self
    }

    /// Sets the horizontal alignment of the child.
    #[must_use]
    pub const fn alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Whether this frame expands to the full offered width.
    #[must_use]
    pub fn fills_width(&self) -> bool {
        self.max_width.is_some_and(f32::is_infinite)
    }
}

/// Shapes used for clipping, hit testing and strokes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// The view's bounding rectangle.
    Rectangle,
    /// A rectangle with circular corners of the given radius.
    RoundedRectangle {
        /// Corner radius in points.
        corner_radius: f32,
    },
}

impl Shape {
    /// Shorthand for [`Shape::RoundedRectangle`].
    #[must_use]
    pub const fn rounded(corner_radius: f32) -> Self {
        Self::RoundedRectangle { corner_radius }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_insets() {
        let insets = EdgeInsets::symmetric(12.0, 20.0);
        assert_eq!(insets.top(), 12.0);
        assert_eq!(insets.bottom(), 12.0);
        assert_eq!(insets.leading(), 20.0);
        assert_eq!(insets.trailing(), 20.0);
        assert_eq!(insets.horizontal(), 40.0);
        assert_eq!(insets.vertical(), 24.0);
    }

    #[test]
    fn partial_insets_fill_with_zero() {
        let insets: EdgeInsets = serde_json::from_str(r#"{ "leading": 62 }"#).unwrap();
        assert_eq!(insets, EdgeInsets::new(0.0, 0.0, 62.0, 0.0));
    }

    #[test]
    fn fill_width_frame() {
        let frame = Frame::fill_width(HorizontalAlignment::Leading);
        assert!(frame.fills_width());
        assert_eq!(frame.alignment, HorizontalAlignment::Leading);
        assert!(!Frame::new().width(45.0).fills_width());
    }
}
