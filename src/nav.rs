// Navigation Bar - Brand label plus the six fixed entries

use crate::node::Node;
use crate::shell::{nav_items, AppShell, Interaction, Message, ViewSelector};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLayout {
    /// All entries inline
    Desktop,
    /// Toggle button; entries listed only while the menu is open
    Compact,
}

impl NavLayout {
    /// Terminal widths below this use the compact layout
    pub const COMPACT_BELOW_COLUMNS: u16 = 100;

    pub fn for_width(columns: u16) -> Self {
        if columns < Self::COMPACT_BELOW_COLUMNS {
            NavLayout::Compact
        } else {
            NavLayout::Desktop
        }
    }
}

pub fn navbar(brand: &str, shell: &AppShell, layout: NavLayout) -> Node {
    let entry = |id: &str, label: &str| {
        let target = ViewSelector::from_id(id);
        let mut messages = vec![Message::Navigate(target)];
        if layout == NavLayout::Compact {
            messages.push(Message::SetMenuOpen(false));
        }
        Node::Button {
            label: label.to_string(),
            active: shell.selector == target,
            on_click: Interaction::Dispatch(messages),
        }
    };

    match layout {
        NavLayout::Desktop => Node::Nav {
            brand: brand.to_string(),
            toggle: None,
            entries: nav_items().iter().map(|i| entry(i.id, i.label)).collect(),
        },
        NavLayout::Compact => {
            let toggle = Node::Button {
                label: if shell.menu_open { "✕ Close" } else { "☰ Menu" }.to_string(),
                active: shell.menu_open,
                on_click: Interaction::Dispatch(vec![Message::SetMenuOpen(!shell.menu_open)]),
            };
            let entries = if shell.menu_open {
                nav_items().iter().map(|i| entry(i.id, i.label)).collect()
            } else {
                Vec::new()
            };
            Node::Nav {
                brand: brand.to_string(),
                toggle: Some(Box::new(toggle)),
                entries,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::App;

    fn entry_labels(nav: &Node) -> Vec<String> {
        nav.children()
            .iter()
            .filter_map(|n| match n {
                Node::Button { label, .. } => Some(label.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_desktop_shows_all_entries_inline() {
        let nav = navbar("Brand", &AppShell::default(), NavLayout::Desktop);
        assert_eq!(entry_labels(&nav).len(), 6);
        assert!(matches!(nav, Node::Nav { toggle: None, .. }));
    }

    #[test]
    fn test_active_entry_marked() {
        let mut shell = AppShell::default();
        shell.set_selector("projects");
        let nav = navbar("Brand", &shell, NavLayout::Desktop);

        let active: Vec<_> = nav
            .children()
            .iter()
            .filter(|n| matches!(n, Node::Button { active: true, .. }))
            .collect();
        assert_eq!(active.len(), 1);
        assert!(matches!(active[0], Node::Button { label, .. } if label == "Projects"));
    }

    #[test]
    fn test_compact_closed_hides_entries() {
        let nav = navbar("Brand", &AppShell::default(), NavLayout::Compact);
        assert!(entry_labels(&nav).is_empty());
        // Only the toggle is clickable
        assert_eq!(
            nav.interactions(),
            vec![Interaction::Dispatch(vec![Message::SetMenuOpen(true)])]
        );
    }

    #[test]
    fn test_compact_toggle_opens_menu() {
        let mut app = App::new();
        let nav = navbar("Brand", &app.shell, NavLayout::Compact);
        app.activate(&nav.interactions()[0]);
        assert!(app.shell.menu_open);

        let nav = navbar("Brand", &app.shell, NavLayout::Compact);
        assert_eq!(entry_labels(&nav).len(), 6);
    }

    #[test]
    fn test_compact_click_navigates_and_closes_menu() {
        let mut app = App::new();
        app.shell.set_menu_open(true);
        let nav = navbar("Brand", &app.shell, NavLayout::Compact);

        // interactions: toggle, then the six entries
        let contact = &nav.interactions()[6];
        app.activate(contact);
        assert_eq!(app.selector(), ViewSelector::Contact);
        assert!(!app.shell.menu_open);
    }

    #[test]
    fn test_desktop_click_leaves_menu_flag_alone() {
        let mut app = App::new();
        app.shell.set_menu_open(true);
        let nav = navbar("Brand", &app.shell, NavLayout::Desktop);

        app.activate(&nav.interactions()[1]);
        assert_eq!(app.selector(), ViewSelector::About);
        assert!(app.shell.menu_open);
    }

    #[test]
    fn test_layout_for_width() {
        assert_eq!(NavLayout::for_width(80), NavLayout::Compact);
        assert_eq!(NavLayout::for_width(120), NavLayout::Desktop);
    }
}
