//! Values reported upward from a subtree.
//!
//! A view tags itself with [`ViewExt::preference`](crate::ViewExt::preference)
//! and an ancestor reads the folded result from the rendered tree with
//! [`Node::preference`](crate::Node::preference).

use alloc::{rc::Rc, vec::Vec};
use core::{
    any::{Any, TypeId, type_name},
    fmt::{self, Debug},
    marker::PhantomData,
};

use crate::{AnyView, Child, ChildId, Color, Environment, Node, View};

/// A named channel for values reported by descendants.
pub trait PreferenceKey: 'static {
    /// The reported value.
    type Value: Clone + Debug + PartialEq + 'static;

    /// The value seen when nothing in the subtree reports one.
    fn default_value() -> Self::Value;

    /// Combines the accumulated `value` with the `next` reported one.
    fn reduce(value: &mut Self::Value, next: Self::Value);
}

/// Background color a row would like behind it.
///
/// Last declared value wins; defaults to [`Color::CLEAR`].
#[derive(Debug, Clone, Copy)]
pub struct CellBackgroundKey;

impl PreferenceKey for CellBackgroundKey {
    type Value = Color;

    fn default_value() -> Color {
        Color::CLEAR
    }

    fn reduce(value: &mut Color, next: Color) {
        *value = next;
    }
}

trait TagValue: Debug {
    fn as_any(&self) -> &dyn Any;
    fn eq_value(&self, other: &dyn TagValue) -> bool;
}

impl<T: Debug + PartialEq + 'static> TagValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_value(&self, other: &dyn TagValue) -> bool {
        other.as_any().downcast_ref::<T>() == Some(self)
    }
}

/// A preference value stored in the render tree.
#[derive(Clone)]
pub struct PreferenceTag {
    key: TypeId,
    key_name: &'static str,
    value: Rc<dyn TagValue>,
}

impl Debug for PreferenceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferenceTag")
            .field("key", &self.key_name)
            .field("value", &self.value)
            .finish()
    }
}

impl PartialEq for PreferenceTag {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.value.eq_value(other.value.as_ref())
    }
}

impl PreferenceTag {
    /// Tags `value` under key `K`.
    #[must_use]
    pub fn new<K: PreferenceKey>(value: K::Value) -> Self {
        Self {
            key: TypeId::of::<K>(),
            key_name: type_name::<K>(),
            value: Rc::new(value),
        }
    }

    /// The tagged value, if this tag belongs to key `K`.
    #[must_use]
    pub fn value<K: PreferenceKey>(&self) -> Option<&K::Value> {
        if self.key == TypeId::of::<K>() {
            self.value.as_any().downcast_ref::<K::Value>()
        } else {
            None
        }
    }
}

/// View modifier that tags its content with a preference value.
pub struct Preference<V, K: PreferenceKey> {
    content: V,
    value: K::Value,
    _key: PhantomData<K>,
}

impl<V: Debug, K: PreferenceKey> Debug for Preference<V, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preference")
            .field("content", &self.content)
            .field("value", &self.value)
            .finish()
    }
}

impl<V, K: PreferenceKey> Preference<V, K> {
    /// Tags `content` with `value`.
    pub const fn new(content: V, value: K::Value) -> Self {
        Self {
            content,
            value,
            _key: PhantomData,
        }
    }
}

impl<V: View, K: PreferenceKey> View for Preference<V, K> {
    fn render(self, env: &Environment) -> Node {
        Node::Preference {
            tag: PreferenceTag::new::<K>(self.value),
            child: Box::new(self.content.render(env)),
        }
    }

    fn collect_children(self, id: ChildId, children: &mut Vec<Child>) {
        let mut inner = Vec::new();
        self.content.collect_children(id, &mut inner);
        for child in inner {
            let (id, view) = child.into_parts();
            let tagged = Preference::<AnyView, K>::new(view, self.value.clone());
            children.push(Child::new(id, AnyView::new(tagged)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct MaxWidthKey;

    impl PreferenceKey for MaxWidthKey {
        type Value = f32;

        fn default_value() -> f32 {
            0.0
        }

        fn reduce(value: &mut f32, next: f32) {
            *value = value.max(next);
        }
    }

    fn tagged<K: PreferenceKey>(value: K::Value, child: Node) -> Node {
        Node::Preference {
            tag: PreferenceTag::new::<K>(value),
            child: Box::new(child),
        }
    }

    #[test]
    fn last_declared_background_wins() {
        let tree = Node::Group(vec![
            tagged::<CellBackgroundKey>(Color::RED, Node::Empty),
            tagged::<CellBackgroundKey>(Color::GREEN, Node::Empty),
        ]);
        assert_eq!(tree.preference::<CellBackgroundKey>(), Color::GREEN);
    }

    #[test]
    fn outer_tag_overrides_inner() {
        let tree = tagged::<CellBackgroundKey>(
            Color::BLUE,
            tagged::<CellBackgroundKey>(Color::RED, Node::Empty),
        );
        assert_eq!(tree.preference::<CellBackgroundKey>(), Color::BLUE);
    }

    #[test]
    fn untagged_tree_yields_default() {
        assert_eq!(Node::Empty.preference::<CellBackgroundKey>(), Color::CLEAR);
    }

    #[test]
    fn keys_do_not_mix() {
        let tree = Node::Group(vec![
            tagged::<MaxWidthKey>(120.0, Node::Empty),
            tagged::<CellBackgroundKey>(Color::RED, Node::Empty),
            tagged::<MaxWidthKey>(80.0, Node::Empty),
        ]);
        assert_eq!(tree.preference::<MaxWidthKey>(), 120.0);
        assert_eq!(tree.preference::<CellBackgroundKey>(), Color::RED);
    }

    #[test]
    fn tag_applies_to_each_listed_child() {
        use crate::{ViewExt, children_of, text};

        let children = children_of((text("a"), text("b")).preference::<MaxWidthKey>(40.0));
        assert_eq!(children.len(), 2);
        for child in children {
            let node = child.into_parts().1.render(&Environment::new());
            assert!(matches!(node, Node::Preference { .. }));
            assert_eq!(node.preference::<MaxWidthKey>(), 40.0);
        }
    }

    #[test]
    fn declared_preference_distinguishes_missing_tags() {
        assert_eq!(Node::Empty.declared_preference::<CellBackgroundKey>(), None);
        let tree = tagged::<CellBackgroundKey>(Color::CLEAR, Node::Empty);
        assert_eq!(tree.declared_preference::<CellBackgroundKey>(), Some(Color::CLEAR));
    }

    #[test]
    fn tags_compare_by_value() {
        assert_eq!(
            PreferenceTag::new::<CellBackgroundKey>(Color::RED),
            PreferenceTag::new::<CellBackgroundKey>(Color::RED)
        );
        assert_ne!(
            PreferenceTag::new::<CellBackgroundKey>(Color::RED),
            PreferenceTag::new::<MaxWidthKey>(1.0)
        );
    }
}
