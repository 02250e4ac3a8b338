//! The render tree.
//!
//! Rendering a view produces a [`Node`]. The tree is fully resolved: fonts and
//! colors inherited from the environment are baked into the leaves, so a
//! backend can draw it without consulting the environment again.
//!
//! Besides drawing primitives, the tree keeps a few markers for the grouped
//! section ([`Node::Row`], [`Node::Separator`], [`Node::Slot`]) so callers can
//! inspect the structure of a rendered section with [`Node::outline`].

use alloc::{boxed::Box, rc::Rc, string::String, vec::Vec};
use core::fmt::{self, Debug};

use crate::{
    ChildId, Color, EdgeInsets, Font, Frame, HorizontalAlignment, ImageScale, PreferenceKey,
    PreferenceTag, Shape, VerticalAlignment,
};

/// A resolved element of the render tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Nothing.
    Empty,
    /// A run of text.
    Text(TextNode),
    /// A named symbol image.
    Image(ImageNode),
    /// A solid color filling its bounds.
    Fill(Color),
    /// The outline of a shape.
    Stroke {
        /// Shape being outlined.
        shape: Shape,
        /// Stroke color.
        color: Color,
        /// Stroke width in points.
        line_width: f32,
    },
    /// Siblings without a layout of their own.
    Group(Vec<Node>),
    /// Children arranged top to bottom.
    VStack {
        /// Horizontal placement of narrower children.
        alignment: HorizontalAlignment,
        /// Space between consecutive children.
        spacing: f32,
        /// Stacked children.
        children: Vec<Node>,
    },
    /// Children arranged leading to trailing.
    HStack {
        /// Vertical placement of shorter children.
        alignment: VerticalAlignment,
        /// Space between consecutive children.
        spacing: f32,
        /// Stacked children.
        children: Vec<Node>,
    },
    /// A child inset by fixed edge distances.
    Padding {
        /// Edge distances.
        insets: EdgeInsets,
        /// Inset child.
        child: Box<Node>,
    },
    /// A child constrained by a [`Frame`].
    Frame {
        /// Size constraints.
        frame: Frame,
        /// Constrained child.
        child: Box<Node>,
    },
    /// A child drawn over a solid color.
    Background {
        /// Fill behind the child.
        color: Color,
        /// Foreground content.
        child: Box<Node>,
    },
    /// A child clipped to a shape.
    Clip {
        /// Clip shape.
        shape: Shape,
        /// Clipped child.
        child: Box<Node>,
    },
    /// A child with content drawn on top, sized to the child.
    Overlay {
        /// Base content.
        child: Box<Node>,
        /// Content drawn over the base.
        overlay: Box<Node>,
    },
    /// A child whose hit-testing area is the given shape.
    ContentShape {
        /// Hit-testing shape.
        shape: Shape,
        /// Child.
        child: Box<Node>,
    },
    /// A child that triggers an action when tapped.
    Tappable {
        /// Action to invoke.
        action: Action,
        /// Tappable content.
        child: Box<Node>,
    },
    /// The header or footer of a grouped section.
    Slot {
        /// Which slot this is.
        slot: Slot,
        /// Slot content.
        child: Box<Node>,
    },
    /// One row of a grouped section.
    Row {
        /// Identity of the child the row was built from.
        id: ChildId,
        /// Row content, including row insets.
        child: Box<Node>,
    },
    /// A divider between two rows.
    Separator(SeparatorNode),
    /// A child tagged with a preference value.
    Preference {
        /// The tagged value.
        tag: PreferenceTag,
        /// Tagged child.
        child: Box<Node>,
    },
}

/// Resolved text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextNode {
    /// The string to draw.
    pub content: String,
    /// Font inherited from the environment.
    pub font: Font,
    /// Foreground color inherited from the environment, if any.
    pub foreground: Option<Color>,
}

/// Resolved symbol image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageNode {
    /// Symbol name.
    pub name: String,
    /// Font the symbol is sized against.
    pub font: Font,
    /// Foreground color inherited from the environment, if any.
    pub foreground: Option<Color>,
    /// Relative symbol scale.
    pub scale: ImageScale,
}

/// A resolved row divider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeparatorNode {
    /// Line color.
    pub color: Color,
    /// Line thickness in points.
    pub thickness: f32,
    /// Insets around the line.
    pub insets: EdgeInsets,
}

/// Header or footer position in a grouped section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Above the rows.
    Header,
    /// Below the rows.
    Footer,
}

/// Coarse shape of a rendered section, in drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outline {
    /// A header slot.
    Header,
    /// A row.
    Row,
    /// A separator.
    Separator,
    /// A footer slot.
    Footer,
}

/// A shared callback attached to a tappable node.
#[derive(Clone)]
pub struct Action(Rc<dyn Fn()>);

impl Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action")
    }
}

impl PartialEq for Action {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Action {
    /// Wraps a callback.
    pub fn new(action: impl Fn() + 'static) -> Self {
        Self(Rc::new(action))
    }

    /// Invokes the callback.
    pub fn call(&self) {
        (self.0)();
    }
}

impl Node {
    /// Builds a group, dropping empty nodes.
    ///
    /// A group with no remaining children collapses to [`Node::Empty`].
    pub fn group(nodes: impl IntoIterator<Item = Self>) -> Self {
        let nodes: Vec<Self> = nodes.into_iter().filter(|node| !node.is_empty()).collect();
        if nodes.is_empty() {
            Self::Empty
        } else {
            Self::Group(nodes)
        }
    }

    /// Whether this is [`Node::Empty`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Direct children in drawing order.
    #[must_use]
    pub fn children(&self) -> Vec<&Self> {
        match self {
            Self::Empty
            | Self::Text(_)
            | Self::Image(_)
            | Self::Fill(_)
            | Self::Stroke { .. }
            | Self::Separator(_) => Vec::new(),
            Self::Group(children)
            | Self::VStack { children, .. }
            | Self::HStack { children, .. } => children.iter().collect(),
            Self::Overlay { child, overlay } => vec![child.as_ref(), overlay.as_ref()],
            Self::Padding { child, .. }
            | Self::Frame { child, .. }
            | Self::Background { child, .. }
            | Self::Clip { child, .. }
            | Self::ContentShape { child, .. }
            | Self::Tappable { child, .. }
            | Self::Slot { child, .. }
            | Self::Row { child, .. }
            | Self::Preference { child, .. } => vec![child.as_ref()],
        }
    }

    /// Visits this node and its descendants in pre-order.
    pub fn visit<'a>(&'a self, visitor: &mut impl FnMut(&'a Self)) {
        visitor(self);
        for child in self.children() {
            child.visit(visitor);
        }
    }

    /// Counts the nodes in this subtree matching `predicate`.
    #[must_use]
    pub fn count(&self, predicate: impl Fn(&Self) -> bool) -> usize {
        let mut count = 0;
        self.visit(&mut |node| {
            if predicate(node) {
                count += 1;
            }
        });
        count
    }

    /// The header, row, separator and footer markers of the outermost
    /// section in this subtree, in drawing order.
    ///
    /// Row and slot contents are not searched, so a section nested inside a
    /// row does not contribute to the outline.
    #[must_use]
    pub fn outline(&self) -> Vec<Outline> {
        let mut outline = Vec::new();
        self.collect_outline(&mut outline);
        outline
    }

    fn collect_outline(&self, outline: &mut Vec<Outline>) {
        match self {
            Self::Slot {
                slot: Slot::Header, ..
            } => outline.push(Outline::Header),
            Self::Slot {
                slot: Slot::Footer, ..
            } => outline.push(Outline::Footer),
            Self::Row { .. } => outline.push(Outline::Row),
            Self::Separator(_) => outline.push(Outline::Separator),
            _ => {
                for child in self.children() {
                    child.collect_outline(outline);
                }
            }
        }
    }

    /// Row nodes of the outermost section, in drawing order.
    #[must_use]
    pub fn rows(&self) -> Vec<&Self> {
        let mut rows = Vec::new();
        self.collect_marked(&mut rows, &|node| matches!(node, Self::Row { .. }));
        rows
    }

    /// Separators of the outermost section, in drawing order.
    #[must_use]
    pub fn separators(&self) -> Vec<&SeparatorNode> {
        let mut nodes = Vec::new();
        self.collect_marked(&mut nodes, &|node| matches!(node, Self::Separator(_)));
        nodes
            .into_iter()
            .filter_map(|node| match node {
                Self::Separator(separator) => Some(separator),
                _ => None,
            })
            .collect()
    }

    /// Header or footer contents of the outermost section.
    #[must_use]
    pub fn slots(&self, slot: Slot) -> Vec<&Self> {
        let mut nodes = Vec::new();
        self.collect_marked(
            &mut nodes,
            &|node| matches!(node, Self::Slot { slot: found, .. } if *found == slot),
        );
        nodes
            .into_iter()
            .filter_map(|node| match node {
                Self::Slot { child, .. } => Some(child.as_ref()),
                _ => None,
            })
            .collect()
    }

    fn collect_marked<'a>(&'a self, out: &mut Vec<&'a Self>, wanted: &impl Fn(&Self) -> bool) {
        if wanted(self) {
            out.push(self);
            return;
        }
        if matches!(self, Self::Row { .. } | Self::Slot { .. }) {
            return;
        }
        for child in self.children() {
            child.collect_marked(out, wanted);
        }
    }

    /// Text content of this subtree, in drawing order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        let mut texts = Vec::new();
        self.visit(&mut |node| {
            if let Self::Text(text) = node {
                texts.push(text.content.as_str());
            }
        });
        texts
    }

    /// Folds every `K` tag in this subtree with `K`'s reducer.
    ///
    /// Tags are folded in drawing order, and a tag is folded after the tags
    /// inside the view it decorates. With a last-wins reducer the outermost,
    /// latest declared tag therefore wins.
    #[must_use]
    pub fn preference<K: PreferenceKey>(&self) -> K::Value {
        let mut value = K::default_value();
        self.fold_preference::<K>(&mut value, &mut false);
        value
    }

    /// Like [`Node::preference`], but `None` when nothing in the subtree
    /// declares a `K` tag.
    #[must_use]
    pub fn declared_preference<K: PreferenceKey>(&self) -> Option<K::Value> {
        let mut value = K::default_value();
        let mut declared = false;
        self.fold_preference::<K>(&mut value, &mut declared);
        declared.then_some(value)
    }

    fn fold_preference<K: PreferenceKey>(&self, value: &mut K::Value, declared: &mut bool) {
        for child in self.children() {
            child.fold_preference::<K>(value, declared);
        }
        if let Self::Preference { tag, .. } = self {
            if let Some(next) = tag.value::<K>() {
                K::reduce(value, next.clone());
                *declared = true;
            }
        }
    }

    /// Invokes the action of the first tappable node in this subtree.
    ///
    /// Returns `false` when there is nothing to tap.
    pub fn tap(&self) -> bool {
        let mut action = None;
        self.visit(&mut |node| {
            if action.is_some() {
                return;
            }
            if let Self::Tappable { action: found, .. } = node {
                action = Some(found.clone());
            }
        });
        match action {
            Some(action) => {
                action.call();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(content: &str) -> Node {
        Node::Text(TextNode {
            content: content.into(),
            font: Font::BODY,
            foreground: None,
        })
    }

    #[test]
    fn group_drops_empty_nodes() {
        assert_eq!(Node::group([Node::Empty, Node::Empty]), Node::Empty);
        assert_eq!(
            Node::group([Node::Empty, text("a")]),
            Node::Group(vec![text("a")])
        );
    }

    #[test]
    fn outline_stops_at_rows() {
        let nested = Node::Row {
            id: ChildId::root().index(0),
            child: Box::new(Node::Group(vec![
                Node::Row {
                    id: ChildId::root(),
                    child: Box::new(text("inner")),
                },
                Node::Separator(SeparatorNode {
                    color: Color::GRAY,
                    thickness: 1.0,
                    insets: EdgeInsets::ZERO,
                }),
            ])),
        };
        let tree = Node::Padding {
            insets: EdgeInsets::all(4.0),
            child: Box::new(Node::Group(vec![nested])),
        };

        assert_eq!(tree.outline(), vec![Outline::Row]);
        assert_eq!(tree.rows().len(), 1);
        assert!(tree.separators().is_empty());
        assert_eq!(tree.count(|node| matches!(node, Node::Row { .. })), 2);
        assert_eq!(tree.texts(), vec!["inner"]);
    }

    #[test]
    fn tap_runs_first_action() {
        use core::cell::Cell;

        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let tree = Node::Group(vec![
            text("static"),
            Node::Tappable {
                action: Action::new(move || counter.set(counter.get() + 1)),
                child: Box::new(text("tap me")),
            },
        ]);

        assert!(tree.tap());
        assert_eq!(hits.get(), 1);
        assert!(!text("static").tap());
    }
}
