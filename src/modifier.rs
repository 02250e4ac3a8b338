//! View modifiers and the [`ViewExt`] extension trait.
//!
//! Modifiers wrap a view and either adjust the environment its content renders
//! in ([`With`]) or decorate the rendered node (padding, frames, backgrounds,
//! clipping, overlays).

use alloc::{boxed::Box, vec::Vec};

use crate::{
    AnyView, ButtonConfig, ButtonStyle, CellBackgroundKey, Child, ChildId, Color, EdgeInsets,
    Environment, Font, ForegroundColor, Frame, Hook, ImageScale, LabelConfig, LabelStyle, Node,
    Preference, PreferenceKey, Shape, View,
};

/// Renders its content with an extra value in the environment.
///
/// When used inside a list container, the value is applied to each child the
/// content flattens into.
#[derive(Debug, Clone)]
pub struct With<V, T> {
    content: V,
    value: T,
}

impl<V, T> With<V, T> {
    /// Associates `value` with `content`.
    pub const fn new(content: V, value: T) -> Self {
        Self { content, value }
    }
}

impl<V: View, T: Clone + 'static> View for With<V, T> {
    fn render(self, env: &Environment) -> Node {
        let env = env.clone().with(self.value);
        self.content.render(&env)
    }

    fn collect_children(self, id: ChildId, children: &mut Vec<Child>) {
        let mut inner = Vec::new();
        self.content.collect_children(id, &mut inner);
        for child in inner {
            let (id, view) = child.into_parts();
            let view = With::new(view, self.value.clone());
            children.push(Child::new(id, AnyView::new(view)));
        }
    }
}

macro_rules! decorator {
    ($(#[$meta:meta])* $name:ident { $field:ident: $ty:ty } => $variant:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name<V> {
            content: V,
            $field: $ty,
        }

        impl<V> $name<V> {
            /// Wraps `content`.
            pub const fn new(content: V, $field: $ty) -> Self {
                Self { content, $field }
            }
        }

        impl<V: View> View for $name<V> {
            fn render(self, env: &Environment) -> Node {
                Node::$variant {
                    $field: self.$field,
                    child: Box::new(self.content.render(env)),
                }
            }

            fn collect_children(self, id: ChildId, children: &mut Vec<Child>) {
                let mut inner = Vec::new();
                self.content.collect_children(id, &mut inner);
                for child in inner {
                    let (id, view) = child.into_parts();
                    children.push(Child::new(id, AnyView::new($name::new(view, self.$field))));
                }
            }
        }
    };
}

decorator!(
    /// Insets its content by fixed edge distances.
    Padding { insets: EdgeInsets } => Padding
);
decorator!(
    /// Constrains the size of its content.
    FrameView { frame: Frame } => Frame
);
decorator!(
    /// Draws a solid color behind its content.
    Background { color: Color } => Background
);
decorator!(
    /// Clips its content to a shape.
    Clip { shape: Shape } => Clip
);
decorator!(
    /// Sets the hit-testing shape of its content.
    ContentShape { shape: Shape } => ContentShape
);

/// Draws a view over its content, sized to the content.
#[derive(Debug, Clone)]
pub struct Overlay<V, O> {
    content: V,
    overlay: O,
}

impl<V, O> Overlay<V, O> {
    /// Places `overlay` over `content`.
    pub const fn new(content: V, overlay: O) -> Self {
        Self { content, overlay }
    }
}

impl<V: View, O: View> View for Overlay<V, O> {
    fn render(self, env: &Environment) -> Node {
        let child = self.content.render(env);
        let overlay = self.overlay.render(env);
        if overlay.is_empty() {
            child
        } else {
            Node::Overlay {
                child: Box::new(child),
                overlay: Box::new(overlay),
            }
        }
    }
}

/// Extension trait adding the common modifiers to every view.
pub trait ViewExt: View + Sized {
    /// Associates a value with this view in the environment.
    fn with<T: Clone + 'static>(self, value: T) -> With<Self, T> {
        With::new(self, value)
    }

    /// Sets the font of text and images in this view.
    fn font(self, font: Font) -> With<Self, Font> {
        self.with(font)
    }

    /// Sets the foreground color of text and images in this view.
    fn foreground(self, color: Color) -> With<Self, ForegroundColor> {
        self.with(ForegroundColor(color))
    }

    /// Sets the relative scale of symbol images in this view.
    fn image_scale(self, scale: ImageScale) -> With<Self, ImageScale> {
        self.with(scale)
    }

    /// Styles every [`Label`](crate::Label) in this view.
    fn label_style(self, style: impl LabelStyle) -> With<Self, Hook<LabelConfig>> {
        self.with(Hook::new(move |env, config| style.make_body(config, env)))
    }

    /// Styles every [`Button`](crate::Button) in this view.
    fn button_style(self, style: impl ButtonStyle) -> With<Self, Hook<ButtonConfig>> {
        self.with(Hook::new(move |env, config| style.make_body(config, env)))
    }

    /// Insets this view.
    fn padding(self, insets: EdgeInsets) -> Padding<Self> {
        Padding::new(self, insets)
    }

    /// Constrains the size of this view.
    fn frame(self, frame: Frame) -> FrameView<Self> {
        FrameView::new(self, frame)
    }

    /// Draws a solid color behind this view.
    ///
    /// # Example
    ///
    /// ```
    /// use grouped_section::{Color, ViewExt, text};
    ///
    /// let _ = text("Hello").background(Color::RED);
    /// ```
    fn background(self, color: Color) -> Background<Self> {
        Background::new(self, color)
    }

    /// Clips this view to `shape`.
    fn clip(self, shape: Shape) -> Clip<Self> {
        Clip::new(self, shape)
    }

    /// Makes `shape` the hit-testing area of this view.
    fn content_shape(self, shape: Shape) -> ContentShape<Self> {
        ContentShape::new(self, shape)
    }

    /// Draws `overlay` over this view.
    fn overlay<O: View>(self, overlay: O) -> Overlay<Self, O> {
        Overlay::new(self, overlay)
    }

    /// Reports `value` under key `K` to ancestors.
    fn preference<K: PreferenceKey>(self, value: K::Value) -> Preference<Self, K> {
        Preference::new(self, value)
    }

    /// Reports the background color this row would like.
    ///
    /// `None` reports [`Color::CLEAR`]. When several views in the same subtree
    /// report a color, the last one declared wins.
    fn section_cell_background(self, color: Option<Color>) -> Preference<Self, CellBackgroundKey> {
        self.preference::<CellBackgroundKey>(color.unwrap_or(Color::CLEAR))
    }

    /// Converts this view into an [`AnyView`].
    fn anyview(self) -> AnyView {
        AnyView::new(self)
    }
}

impl<V: View> ViewExt for V {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{children_of, text};

    #[test]
    fn with_distributes_over_children() {
        let env = Environment::new();
        let children = children_of((text("a"), text("b")).foreground(Color::RED));
        assert_eq!(children.len(), 2);

        for child in children {
            let (_, view) = child.into_parts();
            match view.render(&env) {
                Node::Text(text) => assert_eq!(text.foreground, Some(Color::RED)),
                other => panic!("unexpected node {other:?}"),
            }
        }
    }

    #[test]
    fn decorators_distribute_over_children() {
        let children = children_of((text("a"), text("b"), text("c")).padding(EdgeInsets::all(2.0)));
        assert_eq!(children.len(), 3);
        assert_eq!(children[1].id(), &ChildId::root().index(1));

        let (_, view) = children.into_iter().next().map(Child::into_parts).unwrap();
        assert!(matches!(
            view.render(&Environment::new()),
            Node::Padding { insets, .. } if insets == EdgeInsets::all(2.0)
        ));
    }

    #[test]
    fn decorators_wrap_the_rendered_child() {
        let node = text("a")
            .padding(EdgeInsets::all(4.0))
            .background(Color::GRAY)
            .render(&Environment::new());

        let Node::Background { color, child } = node else {
            panic!("expected background");
        };
        assert_eq!(color, Color::GRAY);
        assert!(matches!(*child, Node::Padding { insets, .. } if insets == EdgeInsets::all(4.0)));
    }

    #[test]
    fn empty_overlay_is_dropped() {
        let node = text("a")
            .overlay(None::<Color>)
            .render(&Environment::new());
        assert!(matches!(node, Node::Text(_)));

        let node = text("a").overlay(Color::RED).render(&Environment::new());
        assert!(matches!(node, Node::Overlay { .. }));
    }
}
