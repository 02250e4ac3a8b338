//! Vertical and horizontal stacks.
//!
//! Both stacks flatten their content with [`children_of`], so tuples,
//! conditionals and vectors of views all contribute one stacked child per
//! element.

use crate::{Environment, HorizontalAlignment, Node, VerticalAlignment, View, children_of};

fn render_children(contents: impl View, env: &Environment) -> Vec<Node> {
    children_of(contents)
        .into_iter()
        .map(|child| child.into_parts().1.render(env))
        .collect()
}

/// A view that arranges its children in a vertical line.
///
/// ```ignore
/// VStack::new(HorizontalAlignment::Leading, 8.0, (
///     text("First"),
///     text("Second"),
/// ))
/// ```
#[derive(Debug, Clone)]
pub struct VStack<C> {
    alignment: HorizontalAlignment,
    spacing: f32,
    contents: C,
}

impl<C: View> VStack<C> {
    /// Creates a vertical stack with the provided alignment, spacing, and
    /// children.
    pub const fn new(alignment: HorizontalAlignment, spacing: f32, contents: C) -> Self {
        Self {
            alignment,
            spacing,
            contents,
        }
    }

    /// Sets the horizontal alignment for children in the stack.
    #[must_use]
    pub const fn alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Sets the spacing between children in the stack.
    #[must_use]
    pub const fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }
}

impl<C: View> View for VStack<C> {
    fn render(self, env: &Environment) -> Node {
        Node::VStack {
            alignment: self.alignment,
            spacing: self.spacing,
            children: render_children(self.contents, env),
        }
    }
}

/// Convenience constructor that centres children and uses the default spacing.
pub const fn vstack<C: View>(contents: C) -> VStack<C> {
    VStack::new(HorizontalAlignment::Center, 10.0, contents)
}

/// A view that arranges its children in a horizontal line.
#[derive(Debug, Clone)]
pub struct HStack<C> {
    alignment: VerticalAlignment,
    spacing: f32,
    contents: C,
}

impl<C: View> HStack<C> {
    /// Creates a horizontal stack with the provided alignment, spacing, and
    /// children.
    pub const fn new(alignment: VerticalAlignment, spacing: f32, contents: C) -> Self {
        Self {
            alignment,
            spacing,
            contents,
        }
    }

    /// Sets the vertical alignment for children in the stack.
    #[must_use]
    pub const fn alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Sets the spacing between children in the stack.
    #[must_use]
    pub const fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }
}

impl<C: View> View for HStack<C> {
    fn render(self, env: &Environment) -> Node {
        Node::HStack {
            alignment: self.alignment,
            spacing: self.spacing,
            children: render_children(self.contents, env),
        }
    }
}

/// Convenience constructor that centres children and uses the default spacing.
pub const fn hstack<C: View>(contents: C) -> HStack<C> {
    HStack::new(VerticalAlignment::Center, 10.0, contents)
}
