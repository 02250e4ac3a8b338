//! Styles for configurable components.
//!
//! A style turns a component's configuration into the view that draws it. It
//! is installed for a subtree with [`ViewExt::label_style`] or
//! [`ViewExt::button_style`], which store a [`Hook`](crate::Hook) in the
//! environment.
//!
//! The two section styles here give labels and buttons inside a
//! [`GroupedSection`](crate::GroupedSection) their settings-row look.

use crate::{
    AnyView, ButtonConfig, Color, Environment, Frame, HStack, HorizontalAlignment, ImageScale,
    LabelConfig, RowPreference, Shape, VerticalAlignment, ViewExt,
};

/// Decides how a [`Label`](crate::Label) is drawn.
pub trait LabelStyle: 'static {
    /// Builds the view for one label.
    fn make_body(&self, config: LabelConfig, env: &Environment) -> AnyView;
}

/// Decides how a [`Button`](crate::Button) is drawn.
pub trait ButtonStyle: 'static {
    /// Builds the view for one button's label.
    ///
    /// The button itself stays responsible for running its action.
    fn make_body(&self, config: ButtonConfig, env: &Environment) -> AnyView;
}

/// Width of the icon gutter in a section label.
pub const ICON_GUTTER: f32 = 45.0;

/// Label style used inside grouped sections.
///
/// The icon sits in a fixed-width leading gutter so titles line up across
/// rows, and both parts use the row's title font.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionLabelStyle {
    row: RowPreference,
}

impl SectionLabelStyle {
    /// Creates the style for rows configured by `row`.
    #[must_use]
    pub const fn new(row: RowPreference) -> Self {
        Self { row }
    }
}

impl LabelStyle for SectionLabelStyle {
    fn make_body(&self, config: LabelConfig, _env: &Environment) -> AnyView {
        let font = self.row.title_font;
        let icon = config
            .icon
            .font(font)
            .foreground(Color::ACCENT)
            .image_scale(ImageScale::Large)
            .frame(
                Frame::new()
                    .width(ICON_GUTTER)
                    .alignment(HorizontalAlignment::Leading),
            );
        let title = config
            .title
            .font(font)
            .frame(Frame::new().alignment(HorizontalAlignment::Center));

        HStack::new(VerticalAlignment::Center, 0.0, (icon, title)).anyview()
    }
}

/// Button style used inside grouped sections.
///
/// The whole row is the hit target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionButtonStyle;

impl ButtonStyle for SectionButtonStyle {
    fn make_body(&self, config: ButtonConfig, _env: &Environment) -> AnyView {
        config
            .label
            .foreground(Color::PURPLE)
            .frame(Frame::fill_width(HorizontalAlignment::Leading))
            .content_shape(Shape::Rectangle)
            .background(Color::GRAY)
            .anyview()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Font, FontWeight, Node, View, button, label};

    #[test]
    fn section_label_puts_icon_in_gutter() {
        let row = RowPreference::default().title_font(Font::system(15.0, FontWeight::Normal));
        let node = label("Wi-Fi", "wifi")
            .label_style(SectionLabelStyle::new(row))
            .render(&Environment::new());

        let Node::HStack {
            spacing, children, ..
        } = node
        else {
            panic!("expected hstack");
        };
        assert_eq!(spacing, 0.0);

        let Node::Frame { frame, child } = &children[0] else {
            panic!("expected framed icon");
        };
        assert_eq!(frame.width, Some(ICON_GUTTER));
        assert_eq!(frame.alignment, HorizontalAlignment::Leading);
        let Node::Image(image) = child.as_ref() else {
            panic!("expected image");
        };
        assert_eq!(image.font, Font::system(15.0, FontWeight::Normal));
        assert_eq!(image.foreground, Some(Color::ACCENT));
        assert_eq!(image.scale, ImageScale::Large);

        assert_eq!(children[1].texts(), vec!["Wi-Fi"]);
    }

    #[test]
    fn section_button_fills_the_row() {
        let node = button("Sign Out", || {})
            .button_style(SectionButtonStyle)
            .render(&Environment::new());

        let Node::Tappable { child, .. } = node else {
            panic!("expected tappable");
        };
        let Node::Background { color, child } = *child else {
            panic!("expected background");
        };
        assert_eq!(color, Color::GRAY);
        assert!(matches!(
            *child,
            Node::ContentShape {
                shape: Shape::Rectangle,
                ..
            }
        ));
        assert_eq!(
            child.count(|node| matches!(node, Node::Frame { frame, .. } if frame.fills_width())),
            1
        );
        assert_eq!(
            child.count(
                |node| matches!(node, Node::Text(text) if text.foreground == Some(Color::PURPLE))
            ),
            1
        );
    }
}
