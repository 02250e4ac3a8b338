//! Values inherited down the view tree during a render pass.
//!
//! An [`Environment`] is a small type map. Modifiers such as
//! [`ViewExt::font`](crate::ViewExt::font) clone it, insert a value and hand
//! the copy to their content, so a value is visible to the whole subtree below
//! the modifier and nowhere else.

use alloc::{collections::BTreeMap, rc::Rc};
use core::{
    any::{Any, TypeId, type_name},
    fmt::{self, Debug},
};

use crate::{AnyView, Color};

/// Type-keyed storage passed to every [`View::render`](crate::View::render) call.
#[derive(Clone, Default)]
pub struct Environment {
    map: BTreeMap<TypeId, Rc<dyn Any>>,
}

impl Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("len", &self.map.len())
            .finish()
    }
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value`, replacing any previous value of the same type.
    pub fn insert<T: 'static>(&mut self, value: T) {
        self.map.insert(TypeId::of::<T>(), Rc::new(value));
    }

    /// Returns a copy of this environment with `value` stored.
    #[must_use]
    pub fn with<T: 'static>(mut self, value: T) -> Self {
        self.insert(value);
        self
    }

    /// Looks up a value by type.
    #[must_use]
    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.map
            .get(&TypeId::of::<T>())
            .and_then(|value| (**value).downcast_ref::<T>())
    }

    /// Removes a value by type.
    pub fn remove<T: 'static>(&mut self) {
        self.map.remove(&TypeId::of::<T>());
    }

    /// Pixel density of the target display.
    #[must_use]
    pub fn display_scale(&self) -> f32 {
        self.get::<DisplayScale>().copied().unwrap_or_default().0
    }
}

/// Physical pixels per point on the target display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayScale(pub f32);

impl Default for DisplayScale {
    fn default() -> Self {
        Self(1.0)
    }
}

impl DisplayScale {
    /// Thickness, in points, of the thinnest line the display can draw.
    #[must_use]
    pub fn hairline(self) -> f32 {
        1.0 / self.0.next_up()
    }
}

/// Foreground color inherited by text and images.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForegroundColor(pub Color);

/// A style hook that turns a component's configuration into a view.
///
/// Components such as [`Label`](crate::Label) and [`Button`](crate::Button)
/// look up `Hook<TheirConfig>` in the environment; when present it decides how
/// they are drawn.
pub struct Hook<C>(Rc<dyn Fn(&Environment, C) -> AnyView>);

impl<C> Clone for Hook<C> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<C> Debug for Hook<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(type_name::<Self>())
    }
}

impl<C> Hook<C> {
    /// Wraps a function as a hook.
    pub fn new(hook: impl Fn(&Environment, C) -> AnyView + 'static) -> Self {
        Self(Rc::new(hook))
    }

    /// Produces the view for `config`.
    #[must_use]
    pub fn apply(&self, env: &Environment, config: C) -> AnyView {
        (self.0)(env, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_keyed_by_type() {
        let env = Environment::new()
            .with(DisplayScale(3.0))
            .with(ForegroundColor(Color::RED));
        assert_eq!(env.get::<DisplayScale>(), Some(&DisplayScale(3.0)));
        assert_eq!(env.get::<ForegroundColor>(), Some(&ForegroundColor(Color::RED)));
        assert!(env.get::<u32>().is_none());
    }

    #[test]
    fn clones_do_not_leak_inserts() {
        let parent = Environment::new().with(DisplayScale(2.0));
        let child = parent.clone().with(DisplayScale(3.0));
        assert_eq!(parent.display_scale(), 2.0);
        assert_eq!(child.display_scale(), 3.0);
    }

    #[test]
    fn hairline_is_just_under_one_pixel() {
        assert_eq!(Environment::new().display_scale(), 1.0);
        let hairline = DisplayScale(2.0).hairline();
        assert!(hairline < 0.5);
        assert!(hairline > 0.49);
    }
}
