//! Leaf components: text, images, colors, labels and buttons.
//!
//! Text and images resolve their font and foreground color from the
//! [`Environment`] at render time. [`Label`] and [`Button`] are configurable:
//! a [`Hook`] for their configuration, when present in the environment,
//! decides how they are drawn (see [`crate::style`]).

use alloc::string::String;

use crate::{
    AnyView, Color, Environment, Font, ForegroundColor, Hook, Node, Shape, VerticalAlignment,
    View,
    node::{Action, ImageNode, TextNode},
    stack::HStack,
};

fn resolved_font(env: &Environment) -> Font {
    env.get::<Font>().copied().unwrap_or_default()
}

fn resolved_foreground(env: &Environment) -> Option<Color> {
    env.get::<ForegroundColor>().map(|foreground| foreground.0)
}

/// A run of static text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    content: String,
}

impl Text {
    /// Creates text with the given content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// The text content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl View for Text {
    fn render(self, env: &Environment) -> Node {
        Node::Text(TextNode {
            content: self.content,
            font: resolved_font(env),
            foreground: resolved_foreground(env),
        })
    }
}

/// Creates a [`Text`] view.
pub fn text(content: impl Into<String>) -> Text {
    Text::new(content)
}

/// Relative size of symbol images against the surrounding font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageScale {
    /// Smaller than the font.
    Small,
    /// Matches the font.
    #[default]
    Medium,
    /// Larger than the font.
    Large,
}

/// A named symbol image, sized against the current font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    name: String,
}

impl Image {
    /// Creates an image for the named system symbol.
    pub fn system(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl View for Image {
    fn render(self, env: &Environment) -> Node {
        Node::Image(ImageNode {
            name: self.name,
            font: resolved_font(env),
            foreground: resolved_foreground(env),
            scale: env.get::<ImageScale>().copied().unwrap_or_default(),
        })
    }
}

impl View for Color {
    fn render(self, _env: &Environment) -> Node {
        Node::Fill(self)
    }
}

/// The outline of a shape, drawn with a solid color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    shape: Shape,
    color: Color,
    line_width: f32,
}

impl Stroke {
    /// Strokes `shape` with `color` at `line_width` points.
    #[must_use]
    pub const fn new(shape: Shape, color: Color, line_width: f32) -> Self {
        Self {
            shape,
            color,
            line_width,
        }
    }
}

impl View for Stroke {
    fn render(self, _env: &Environment) -> Node {
        Node::Stroke {
            shape: self.shape,
            color: self.color,
            line_width: self.line_width,
        }
    }
}

/// Configuration for the [`Label`] component.
#[derive(Debug)]
#[non_exhaustive]
pub struct LabelConfig {
    /// The leading icon.
    pub icon: AnyView,
    /// The title.
    pub title: AnyView,
}

/// An icon paired with a title.
///
/// Without a style hook, the icon and title sit side by side with a small gap.
#[derive(Debug)]
pub struct Label(LabelConfig);

impl Label {
    /// Creates a label from arbitrary title and icon views.
    pub fn new(title: impl View, icon: impl View) -> Self {
        Self(LabelConfig {
            icon: AnyView::new(icon),
            title: AnyView::new(title),
        })
    }
}

impl View for Label {
    fn render(self, env: &Environment) -> Node {
        match env.get::<Hook<LabelConfig>>() {
            Some(hook) => hook.apply(env, self.0).render(env),
            None => HStack::new(VerticalAlignment::Center, 8.0, (self.0.icon, self.0.title))
                .render(env),
        }
    }
}

/// Creates a [`Label`] from a title string and a system symbol name.
pub fn label(title: impl Into<String>, icon: impl Into<String>) -> Label {
    Label::new(text(title), Image::system(icon))
}

/// Configuration for the [`Button`] component.
#[derive(Debug)]
#[non_exhaustive]
pub struct ButtonConfig {
    /// The content of the button.
    pub label: AnyView,
    /// The action run when the button is tapped.
    pub action: Action,
}

/// A tappable control.
///
/// The button owns the action; a style hook only decides what the label looks
/// like, and the result is wrapped in a [`Node::Tappable`].
#[derive(Debug)]
pub struct Button(ButtonConfig);

impl Button {
    /// Creates a button with the given label and action.
    pub fn new(label: impl View, action: impl Fn() + 'static) -> Self {
        Self(ButtonConfig {
            label: AnyView::new(label),
            action: Action::new(action),
        })
    }
}

impl View for Button {
    fn render(self, env: &Environment) -> Node {
        let action = self.0.action.clone();
        let body = match env.get::<Hook<ButtonConfig>>() {
            Some(hook) => hook.apply(env, self.0),
            None => self.0.label,
        };
        Node::Tappable {
            action,
            child: Box::new(body.render(env)),
        }
    }
}

/// Creates a [`Button`] with a text label.
pub fn button(title: impl Into<String>, action: impl Fn() + 'static) -> Button {
    Button::new(text(title), action)
}
