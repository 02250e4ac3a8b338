//! A settings-style grouped section for a small declarative view library.
//!
//! Views are plain values. They are composed with the modifiers on
//! [`ViewExt`] and turned into a resolved [`Node`] tree by [`render`]:
//!
//! ```
//! use grouped_section::{
//!     Color, Environment, GroupedSection, RowPreference, button, label, render, text,
//! };
//!
//! let section = GroupedSection::new(|| {
//!     (
//!         label("Wi-Fi", "wifi"),
//!         label("Bluetooth", "bolt"),
//!         button("Sign Out", || {}),
//!     )
//! })
//! .footer(|| text("Signed in as guest"))
//! .with_row_preference(RowPreference::default().row_separator_tint(Color::RED));
//!
//! let node = render(section, &Environment::new());
//! assert_eq!(node.rows().len(), 3);
//! assert_eq!(node.separators().len(), 2);
//! ```
//!
//! Drawing the tree is left to the host. Section styles can also be loaded
//! from JSON with [`SectionTheme`].

extern crate alloc;

mod color;
mod component;
mod config;
mod env;
mod font;
mod layout;
mod modifier;
mod node;
mod preference;
mod preference_key;
mod section;
mod stack;
pub mod style;
mod view;


pub use color::{Color, HexColorError};
pub use component::{
    Button, ButtonConfig, Image, ImageScale, Label, LabelConfig, Stroke, Text, button, label, text,
};
pub use config::{ConfigError, SectionTheme};
pub use env::{DisplayScale, Environment, ForegroundColor, Hook};
pub use font::{Font, FontWeight};
pub use layout::{EdgeInsets, Frame, HorizontalAlignment, Shape, VerticalAlignment};
pub use modifier::{
    Background, Clip, ContentShape, FrameView, Overlay, Padding, ViewExt, With,
};
pub use node::{Action, ImageNode, Node, Outline, SeparatorNode, Slot, TextNode};
pub use preference::{RowPreference, SectionPreference, Visibility};
pub use preference_key::{CellBackgroundKey, Preference, PreferenceKey, PreferenceTag};
pub use section::{GroupedSection, SectionList, SectionRows};
pub use stack::{HStack, VStack, hstack, vstack};
pub use style::{ButtonStyle, LabelStyle, SectionButtonStyle, SectionLabelStyle};
pub use view::{AnyView, Child, ChildId, Either, Empty, ForEach, Segment, View, children_of};

/// Renders `view` into a resolved node tree.
///
/// Rendering is pure: rendering equal views in equal environments produces
/// equal trees.
pub fn render(view: impl View, env: &Environment) -> Node {
    view.render(env)
}
