//! The grouped section container.
//!
//! A [`GroupedSection`] lays its content out as rows inside a rounded
//! container, with a separator between consecutive rows and an optional
//! header above and footer below:
//!
//! ```
//! use grouped_section::{Environment, GroupedSection, Outline, label, render, text};
//!
//! let section = GroupedSection::new(|| (label("Wi-Fi", "wifi"), label("Bluetooth", "bolt")))
//!     .header(|| text("Network"));
//!
//! let node = render(section, &Environment::new());
//! assert_eq!(
//!     node.outline(),
//!     vec![Outline::Header, Outline::Row, Outline::Separator, Outline::Row]
//! );
//! ```

use alloc::{boxed::Box, rc::Rc, vec::Vec};
use core::fmt::{self, Debug};

use crate::{
    AnyView, CellBackgroundKey, Color, DisplayScale, Empty, Environment, Frame,
    HorizontalAlignment, Node, RowPreference, SectionButtonStyle, SectionLabelStyle,
    SectionPreference, SeparatorNode, Shape, Slot, Stroke, VStack, View, ViewExt, children_of,
};

/// Rows with separators between them.
///
/// Each child of the content becomes one [`Node::Row`], padded by
/// [`RowPreference::row_insets`]. A separator follows every child except the
/// last one, unless separators are hidden. The last child is recognized by its
/// [`ChildId`](crate::ChildId), not by its position in the list.
#[derive(Debug, Clone)]
pub struct SectionRows<C> {
    content: C,
    row: RowPreference,
}

impl<C: View> SectionRows<C> {
    /// Lays out `content` with the row options in `row`.
    pub const fn new(content: C, row: RowPreference) -> Self {
        Self { content, row }
    }

    fn separator(&self, env: &Environment) -> Option<SeparatorNode> {
        if self.row.row_separator_visibility.is_hidden() {
            return None;
        }
        let (color, thickness) = match self.row.row_separator_tint {
            Some(tint) => (tint, 1.0),
            None => (
                Color::GRAY.with_opacity(0.5),
                env.get::<DisplayScale>()
                    .copied()
                    .unwrap_or_default()
                    .hairline(),
            ),
        };
        Some(SeparatorNode {
            color,
            thickness,
            insets: self.row.row_separator_insets,
        })
    }
}

impl<C: View> View for SectionRows<C> {
    fn render(self, env: &Environment) -> Node {
        let separator = self.separator(env);
        let children = children_of(self.content);
        let last = children.last().map(|child| child.id().clone());

        let mut nodes = Vec::with_capacity(children.len() * 2);
        for child in children {
            let (id, view) = child.into_parts();
            let is_last = last.as_ref() == Some(&id);
            let content = view.padding(self.row.row_insets).render(env);
            nodes.push(Node::Row {
                id: id.clone(),
                child: Box::new(content),
            });

            match separator {
                Some(separator) if !is_last => {
                    tracing::trace!(?id, "separator after row");
                    nodes.push(Node::Separator(separator));
                }
                _ => tracing::trace!(?id, is_last, "no separator after row"),
            }
        }

        Node::VStack {
            alignment: HorizontalAlignment::Leading,
            spacing: 0.0,
            children: nodes,
        }
    }
}

struct SlotView<V> {
    slot: Slot,
    content: V,
}

impl<V: View> View for SlotView<V> {
    fn render(self, env: &Environment) -> Node {
        Node::Slot {
            slot: self.slot,
            child: Box::new(self.content.render(env)),
        }
    }
}

struct Rendered(Node);

impl View for Rendered {
    fn render(self, _env: &Environment) -> Node {
        self.0
    }
}

/// A settings-style group of rows.
///
/// `C` is the view the content closure produces; each child it flattens into
/// is one row. `H` and `F` are the header and footer views and default to
/// [`Empty`], which leaves the slot out entirely.
///
/// A section is a value. Cloning it shares the content closures; replacing a
/// preference on one clone leaves the others untouched.
pub struct GroupedSection<C, H = Empty, F = Empty> {
    content: Rc<dyn Fn() -> C>,
    header: Rc<dyn Fn() -> H>,
    footer: Rc<dyn Fn() -> F>,
    section: SectionPreference,
    row: RowPreference,
}

impl<C, H, F> Clone for GroupedSection<C, H, F> {
    fn clone(&self) -> Self {
        Self {
            content: self.content.clone(),
            header: self.header.clone(),
            footer: self.footer.clone(),
            section: self.section.clone(),
            row: self.row.clone(),
        }
    }
}

impl<C: View, H: View, F: View> Debug for GroupedSection<C, H, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupedSection")
            .field("header", &!H::EMPTY)
            .field("footer", &!F::EMPTY)
            .field("section", &self.section)
            .field("row", &self.row)
            .finish_non_exhaustive()
    }
}

impl<C: View> GroupedSection<C> {
    /// Creates a section without header or footer.
    pub fn new(content: impl Fn() -> C + 'static) -> Self {
        Self::with_header_footer(content, || Empty, || Empty)
    }
}

impl<C: View, H: View, F: View> GroupedSection<C, H, F> {
    /// Creates a section with a header and a footer.
    pub fn with_header_footer(
        content: impl Fn() -> C + 'static,
        header: impl Fn() -> H + 'static,
        footer: impl Fn() -> F + 'static,
    ) -> Self {
        Self {
            content: Rc::new(content),
            header: Rc::new(header),
            footer: Rc::new(footer),
            section: SectionPreference::default(),
            row: RowPreference::default(),
        }
    }

    /// Replaces the header.
    pub fn header<H2: View>(self, header: impl Fn() -> H2 + 'static) -> GroupedSection<C, H2, F> {
        GroupedSection {
            content: self.content,
            header: Rc::new(header),
            footer: self.footer,
            section: self.section,
            row: self.row,
        }
    }

    /// Replaces the footer.
    pub fn footer<F2: View>(self, footer: impl Fn() -> F2 + 'static) -> GroupedSection<C, H, F2> {
        GroupedSection {
            content: self.content,
            header: self.header,
            footer: Rc::new(footer),
            section: self.section,
            row: self.row,
        }
    }

    /// Returns this section with its section options replaced.
    #[must_use]
    pub fn with_section_preference(mut self, preference: SectionPreference) -> Self {
        self.section = preference;
        self
    }

    /// Returns this section with its row options replaced.
    #[must_use]
    pub fn with_row_preference(mut self, preference: RowPreference) -> Self {
        self.row = preference;
        self
    }

    /// The section options.
    #[must_use]
    pub const fn section_preference(&self) -> &SectionPreference {
        &self.section
    }

    /// The row options.
    #[must_use]
    pub const fn row_preference(&self) -> &RowPreference {
        &self.row
    }
}

impl<C: View, H: View, F: View> View for GroupedSection<C, H, F> {
    fn render(self, env: &Environment) -> Node {
        let Self {
            content,
            header,
            footer,
            section,
            row,
        } = self;
        section.warn_negative();

        let leading = Frame::fill_width(HorizontalAlignment::Leading);
        let header = (!H::EMPTY).then(|| SlotView {
            slot: Slot::Header,
            content: header().frame(leading),
        });
        let footer = (!F::EMPTY).then(|| SlotView {
            slot: Slot::Footer,
            content: footer().frame(leading),
        });
        let rows = SectionRows::new(content(), row.clone())
            .label_style(SectionLabelStyle::new(row.clone()))
            .button_style(SectionButtonStyle)
            .font(row.title_font)
            .frame(leading);

        let body = VStack::new(HorizontalAlignment::Leading, 0.0, (header, rows, footer)).render(env);
        let cell_background = body.declared_preference::<CellBackgroundKey>();
        tracing::debug!(
            rows = body.rows().len(),
            header = !H::EMPTY,
            footer = !F::EMPTY,
            ?cell_background,
            "rendering grouped section"
        );

        let shape = Shape::rounded(section.section_radius);
        let border = section
            .section_border_color
            .map(|color| Stroke::new(shape, color, section.section_border_width));

        let container = Rendered(body)
            .frame(Frame::fill_width(HorizontalAlignment::Leading))
            .background(row.row_background_color.unwrap_or(Color::CLEAR))
            .clip(shape)
            .overlay(border)
            .padding(section.section_insets);

        // Only rows that declared a background report one upward.
        match cell_background {
            Some(color) => container.preference::<CellBackgroundKey>(color).render(env),
            None => container.render(env),
        }
    }
}

/// Several sections stacked vertically.
///
/// Sections are separated by [`SectionPreference::section_spacing`].
#[derive(Debug)]
pub struct SectionList {
    spacing: f32,
    sections: Vec<AnyView>,
}

impl Default for SectionList {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionList {
    /// Creates an empty list with the default section spacing.
    #[must_use]
    pub fn new() -> Self {
        Self::with_preference(&SectionPreference::default())
    }

    /// Creates an empty list spaced by `preference`.
    #[must_use]
    pub fn with_preference(preference: &SectionPreference) -> Self {
        Self {
            spacing: preference.section_spacing,
            sections: Vec::new(),
        }
    }

    /// Appends a section.
    #[must_use]
    pub fn section(mut self, section: impl View) -> Self {
        self.sections.push(AnyView::new(section));
        self
    }

    /// Number of sections in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the list has no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl View for SectionList {
    fn render(self, env: &Environment) -> Node {
        if self.spacing < 0.0 {
            tracing::warn!(spacing = self.spacing, "negative section spacing used as is");
        }
        VStack::new(HorizontalAlignment::Leading, self.spacing, self.sections).render(env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChildId, EdgeInsets, ForEach, Outline, Visibility, text};

    fn rows(content: impl View, row: RowPreference) -> Node {
        SectionRows::new(content, row).render(&Environment::new())
    }

    #[test]
    fn rows_are_padded_by_row_insets() {
        let node = rows((text("a"),), RowPreference::default());
        let row = node.rows()[0];
        let Node::Row { child, id } = row else {
            panic!("expected row");
        };
        assert_eq!(id, &ChildId::root().index(0));
        assert!(matches!(
            child.as_ref(),
            Node::Padding { insets, .. } if *insets == EdgeInsets::new(12.0, 12.0, 20.0, 20.0)
        ));
    }

    #[test]
    fn zero_children_render_no_rows() {
        let node = rows(Empty, RowPreference::default());
        assert!(node.outline().is_empty());
    }

    #[test]
    fn hidden_rows_have_no_separators() {
        let row = RowPreference::default().row_separator_visibility(Visibility::Hidden);
        let node = rows((text("a"), text("b"), text("c")), row);
        assert_eq!(node.outline(), vec![Outline::Row; 3]);
    }

    #[test]
    fn duplicate_last_key_suppresses_its_separators() {
        let node = rows(
            ForEach::new([1, 2, 1], |n| *n, |n| text(n.to_string())),
            RowPreference::default(),
        );
        assert_eq!(
            node.outline(),
            vec![Outline::Row, Outline::Row, Outline::Separator, Outline::Row]
        );
    }

    #[test]
    fn section_list_uses_section_spacing() {
        let list = SectionList::with_preference(&SectionPreference::default().section_spacing(20.0))
            .section(GroupedSection::new(|| (text("a"),)))
            .section(GroupedSection::new(|| (text("b"),)));
        assert_eq!(list.len(), 2);

        let Node::VStack {
            spacing, children, ..
        } = list.render(&Environment::new())
        else {
            panic!("expected vstack");
        };
        assert_eq!(spacing, 20.0);
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn border_is_drawn_only_when_colored() {
        let plain = render_section(SectionPreference::default());
        assert_eq!(plain.count(|node| matches!(node, Node::Stroke { .. })), 0);

        let bordered = render_section(
            SectionPreference::default()
                .section_border_color(Color::BLUE)
                .section_border_width(2.0),
        );
        assert_eq!(
            bordered.count(|node| matches!(
                node,
                Node::Stroke { color, line_width, shape: Shape::RoundedRectangle { corner_radius } }
                    if *color == Color::BLUE && *line_width == 2.0 && *corner_radius == 10.0
            )),
            1
        );
    }

    fn render_section(preference: SectionPreference) -> Node {
        GroupedSection::new(|| (text("a"), text("b")))
            .with_section_preference(preference)
            .render(&Environment::new())
    }
}
