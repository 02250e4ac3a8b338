//! Renders a small settings screen and prints its structure.
//!
//! Run with `RUST_LOG=grouped_section=trace` to see the render pass, and pass
//! a JSON theme path as the first argument to restyle the sections.

use grouped_section::{
    Color, Environment, ForEach, GroupedSection, Node, SectionList, SectionTheme, Visibility,
    button, label, render, text,
};
use tracing_subscriber::EnvFilter;

fn describe(node: &Node, depth: usize, out: &mut String) {
    let line = match node {
        Node::Row { id, .. } => Some(format!("row {:?}", id.segments())),
        Node::Separator(separator) => Some(format!(
            "separator {} {:.3}pt",
            separator.color, separator.thickness
        )),
        Node::Slot { slot, .. } => Some(format!("{slot:?}")),
        Node::Text(text) => Some(format!("\"{}\"", text.content)),
        _ => None,
    };
    let depth = match line {
        Some(line) => {
            out.push_str(&"  ".repeat(depth));
            out.push_str(&line);
            out.push('\n');
            depth + 1
        }
        None => depth,
    };
    for child in node.children() {
        describe(child, depth, out);
    }
}

fn main() -> Result<(), grouped_section::ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let theme = match std::env::args().nth(1) {
        Some(path) => SectionTheme::from_path(path)?,
        None => SectionTheme::default(),
    };

    let network = theme.apply(
        GroupedSection::new(|| {
            (
                label("Wi-Fi", "wifi"),
                label("Bluetooth", "bolt"),
                label("Cellular", "antenna"),
            )
        })
        .header(|| text("Network")),
    );

    let accounts = ["iCloud", "Mail", "Calendar"];
    let mut account_rows = theme.row.clone();
    account_rows.row_separator_tint = Some(Color::BLUE);
    let accounts = GroupedSection::new(move || {
        ForEach::new(accounts, |name| *name, |name| label(name, "person"))
    })
    .with_section_preference(theme.section.clone())
    .with_row_preference(account_rows);

    let mut quiet_rows = theme.row.clone();
    quiet_rows.row_separator_visibility = Visibility::Hidden;
    let session = GroupedSection::new(|| button("Sign Out", || tracing::info!("signed out")))
        .footer(|| text("Signing out removes local data."))
        .with_section_preference(theme.section.clone())
        .with_row_preference(quiet_rows);

    let screen = SectionList::with_preference(&theme.section)
        .section(network)
        .section(accounts)
        .section(session);

    let node = render(screen, &Environment::new());
    let mut out = String::new();
    describe(&node, 0, &mut out);
    print!("{out}");

    if node.tap() {
        tracing::info!("first button tapped");
    }
    Ok(())
}
