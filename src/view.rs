//! The [`View`] trait and the machinery for flattening view lists.
//!
//! A view is a description of UI. Rendering consumes it and produces a
//! [`Node`]. Containers that lay out a variable number of children (stacks,
//! section rows) first flatten their content into a list of [`Child`] values
//! with [`children_of`]. Tuples, `Option`, [`Either`], `Vec` and [`ForEach`]
//! flatten into their elements; every other view is a single child.
//!
//! Each child carries a [`ChildId`] derived from its position in the view
//! structure rather than from its index in the flattened list, so a child that
//! appears or disappears through a conditional does not change the identity of
//! its siblings.

use alloc::{boxed::Box, vec::Vec};
use core::{
    fmt::{self, Debug},
    hash::{Hash, Hasher},
};
use std::hash::DefaultHasher;

use crate::{Environment, Node};

/// A piece of user interface that can be rendered.
pub trait View: 'static {
    /// `true` only for placeholder types that stand for "no view at all".
    ///
    /// Containers check this at the type level and leave out the slot such a
    /// view would occupy.
    const EMPTY: bool = false;

    /// Renders this view into a render tree node.
    fn render(self, env: &Environment) -> Node;

    /// Appends the children this view contributes to a list container.
    ///
    /// The default treats the view as a single child identified by `id`.
    fn collect_children(self, id: ChildId, children: &mut Vec<Child>)
    where
        Self: Sized,
    {
        children.push(Child::new(id, AnyView::new(self)));
    }
}

/// Flattens `content` into the children a list container lays out.
pub fn children_of(content: impl View) -> Vec<Child> {
    let mut children = Vec::new();
    content.collect_children(ChildId::root(), &mut children);
    children
}

trait ErasedView {
    fn render_boxed(self: Box<Self>, env: &Environment) -> Node;
    fn collect_boxed(self: Box<Self>, id: ChildId, children: &mut Vec<Child>);
}

impl<V: View> ErasedView for V {
    fn render_boxed(self: Box<Self>, env: &Environment) -> Node {
        (*self).render(env)
    }

    fn collect_boxed(self: Box<Self>, id: ChildId, children: &mut Vec<Child>) {
        (*self).collect_children(id, children);
    }
}

/// A type-erased view.
///
/// Erasing a view keeps its behavior: an erased tuple still flattens into its
/// elements.
pub struct AnyView(Box<dyn ErasedView>);

impl Debug for AnyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AnyView")
    }
}

impl Default for AnyView {
    fn default() -> Self {
        Self::new(Empty)
    }
}

impl AnyView {
    /// Erases the type of `view`.
    pub fn new(view: impl View) -> Self {
        Self(Box::new(view))
    }
}

impl View for AnyView {
    fn render(self, env: &Environment) -> Node {
        self.0.render_boxed(env)
    }

    fn collect_children(self, id: ChildId, children: &mut Vec<Child>) {
        self.0.collect_boxed(id, children);
    }
}

/// The placeholder view: renders nothing and contributes no children.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

impl View for Empty {
    const EMPTY: bool = true;

    fn render(self, _env: &Environment) -> Node {
        Node::Empty
    }

    fn collect_children(self, _id: ChildId, _children: &mut Vec<Child>) {}
}

impl View for () {
    const EMPTY: bool = true;

    fn render(self, _env: &Environment) -> Node {
        Node::Empty
    }

    fn collect_children(self, _id: ChildId, _children: &mut Vec<Child>) {}
}

/// One step in a [`ChildId`] path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Segment {
    /// Position inside a tuple or vector.
    Index(usize),
    /// Branch taken by a conditional.
    Branch(u8),
    /// Hash of a user-supplied key.
    Key(u64),
}

/// Structural identity of a child within a list container.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ChildId(Vec<Segment>);

impl ChildId {
    /// The identity of the content root.
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// The path segments from the content root.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    fn push(&self, segment: Segment) -> Self {
        let mut path = self.0.clone();
        path.push(segment);
        Self(path)
    }

    /// Identity of the element at `index` below this one.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        self.push(Segment::Index(index))
    }

    /// Identity of the conditional branch `branch` below this one.
    #[must_use]
    pub fn branch(&self, branch: u8) -> Self {
        self.push(Segment::Branch(branch))
    }

    /// Identity of the keyed element below this one.
    #[must_use]
    pub fn key(&self, key: &impl Hash) -> Self {
        self.push(Segment::Key(key_hash(key)))
    }
}

fn key_hash(key: &impl Hash) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

/// A flattened child of a list container.
#[derive(Debug)]
pub struct Child {
    id: ChildId,
    view: AnyView,
}

impl Child {
    /// Pairs a view with its identity.
    #[must_use]
    pub const fn new(id: ChildId, view: AnyView) -> Self {
        Self { id, view }
    }

    /// The child's identity.
    #[must_use]
    pub const fn id(&self) -> &ChildId {
        &self.id
    }

    /// Splits the child into its identity and view.
    #[must_use]
    pub fn into_parts(self) -> (ChildId, AnyView) {
        (self.id, self.view)
    }
}

macro_rules! tuples {
    ($macro:ident) => {
        $macro!(T0);
        $macro!(T0, T1);
        $macro!(T0, T1, T2);
        $macro!(T0, T1, T2, T3);
        $macro!(T0, T1, T2, T3, T4);
        $macro!(T0, T1, T2, T3, T4, T5);
        $macro!(T0, T1, T2, T3, T4, T5, T6);
        $macro!(T0, T1, T2, T3, T4, T5, T6, T7);
        $macro!(T0, T1, T2, T3, T4, T5, T6, T7, T8);
        $macro!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9);
        $macro!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
        $macro!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);
    };
}

macro_rules! tuple_view {
    ($($ty:ident),*) => {
        #[allow(non_snake_case, unused_assignments)]
        impl<$($ty: View),*> View for ($($ty,)*) {
            fn render(self, env: &Environment) -> Node {
                let ($($ty,)*) = self;
                Node::group([$($ty.render(env)),*])
            }

            fn collect_children(self, id: ChildId, children: &mut Vec<Child>) {
                let ($($ty,)*) = self;
                let mut index = 0;
                $(
                    $ty.collect_children(id.index(index), children);
                    index += 1;
                )*
            }
        }
    };
}

tuples!(tuple_view);

impl<V: View> View for Option<V> {
    fn render(self, env: &Environment) -> Node {
        self.map_or(Node::Empty, |view| view.render(env))
    }

    fn collect_children(self, id: ChildId, children: &mut Vec<Child>) {
        if let Some(view) = self {
            view.collect_children(id.branch(0), children);
        }
    }
}

/// A view chosen from one of two branches, as produced by an `if`/`else`.
#[derive(Debug, Clone)]
pub enum Either<A, B> {
    /// The first branch.
    Left(A),
    /// The second branch.
    Right(B),
}

impl<A: View, B: View> View for Either<A, B> {
    fn render(self, env: &Environment) -> Node {
        match self {
            Self::Left(view) => view.render(env),
            Self::Right(view) => view.render(env),
        }
    }

    fn collect_children(self, id: ChildId, children: &mut Vec<Child>) {
        match self {
            Self::Left(view) => view.collect_children(id.branch(0), children),
            Self::Right(view) => view.collect_children(id.branch(1), children),
        }
    }
}

impl<V: View> View for Vec<V> {
    fn render(self, env: &Environment) -> Node {
        Node::group(self.into_iter().map(|view| view.render(env)))
    }

    fn collect_children(self, id: ChildId, children: &mut Vec<Child>) {
        for (index, view) in self.into_iter().enumerate() {
            view.collect_children(id.index(index), children);
        }
    }
}

/// Views generated from data, each identified by a key.
///
/// Unlike a `Vec` of views, whose children are identified by position, a
/// `ForEach` keeps a child's identity when items are inserted or removed
/// before it.
///
/// ```ignore
/// ForEach::new(settings, |item| item.id, |item| text(item.title))
/// ```
pub struct ForEach<V> {
    items: Vec<(u64, V)>,
}

impl<V> Debug for ForEach<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForEach")
            .field("len", &self.items.len())
            .finish()
    }
}

impl<V: View> ForEach<V> {
    /// Builds one view per item, keyed by `key`.
    pub fn new<T, K: Hash>(
        data: impl IntoIterator<Item = T>,
        key: impl Fn(&T) -> K,
        content: impl Fn(T) -> V,
    ) -> Self {
        let items = data
            .into_iter()
            .map(|item| (key_hash(&key(&item)), content(item)))
            .collect();
        Self { items }
    }
}

impl<V: View> View for ForEach<V> {
    fn render(self, env: &Environment) -> Node {
        Node::group(self.items.into_iter().map(|(_, view)| view.render(env)))
    }

    fn collect_children(self, id: ChildId, children: &mut Vec<Child>) {
        for (key, view) in self.items {
            view.collect_children(id.push(Segment::Key(key)), children);
        }
    }
}
