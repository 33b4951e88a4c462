// View Tree - Renderer-agnostic output of every view
//
// Views build a Node tree; the terminal UI and the HTML renderer walk it.
// Clickable nodes carry an Interaction instead of a callback, so a tree is
// plain data and can be compared in tests.

use crate::shell::Interaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Navigation bar. `toggle` is present only in the compact layout.
    Nav {
        brand: String,
        toggle: Option<Box<Node>>,
        entries: Vec<Node>,
    },
    /// Page section with a title
    Section { title: String, children: Vec<Node> },
    Group(Vec<Node>),
    Heading(String),
    Text(String),
    /// De-emphasised text (dates, hints)
    Note(String),
    Card {
        key: String,
        highlighted: bool,
        on_click: Option<Interaction>,
        children: Vec<Node>,
    },
    Progress { label: String, percent: u8 },
    Tags(Vec<String>),
    /// Outbound link; `icon` names a glyph the front end draws (mail, linkedin, github)
    Link {
        label: String,
        href: String,
        icon: Option<String>,
    },
    Button {
        label: String,
        active: bool,
        on_click: Interaction,
    },
    Image { url: String, alt: String },
    Video {
        url: String,
        title: String,
        playing: bool,
        on_toggle: Interaction,
    },
    Form {
        action: String,
        method: String,
        fields: Vec<FormField>,
        submit_label: String,
    },
}

impl Node {
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Nav { entries, .. } => entries,
            Node::Section { children, .. } | Node::Card { children, .. } => children,
            Node::Group(children) => children,
            _ => &[],
        }
    }

    /// Pre-order traversal
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Node)) {
        visit(self);
        if let Node::Nav { toggle: Some(toggle), .. } = self {
            toggle.walk(visit);
        }
        for child in self.children() {
            child.walk(visit);
        }
    }

    /// Every click target in document order. A link nested in a card is its
    /// own target: activating it never triggers the card.
    pub fn interactions(&self) -> Vec<Interaction> {
        let mut out = Vec::new();
        self.walk(&mut |node| {
            if let Some(interaction) = node.own_interaction() {
                out.push(interaction);
            }
        });
        out
    }

    /// The interaction of this node alone, not its descendants
    pub fn own_interaction(&self) -> Option<Interaction> {
        match self {
            Node::Card { on_click: Some(i), .. } => Some(i.clone()),
            Node::Button { on_click, .. } => Some(on_click.clone()),
            Node::Video { on_toggle, .. } => Some(on_toggle.clone()),
            Node::Link { href, .. } => Some(Interaction::Follow(href.clone())),
            _ => None,
        }
    }

    pub fn find_card(&self, key: &str) -> Option<&Node> {
        let mut found = None;
        self.walk(&mut |node| {
            if found.is_none() {
                if let Node::Card { key: k, .. } = node {
                    if k == key {
                        found = Some(node);
                    }
                }
            }
        });
        found
    }

    /// All visible text, one entry per node, for searching
    pub fn text_content(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        self.walk(&mut |node| match node {
            Node::Nav { brand, .. } => parts.push(brand.clone()),
            Node::Section { title, .. } => parts.push(title.clone()),
            Node::Heading(s) | Node::Text(s) | Node::Note(s) => parts.push(s.clone()),
            Node::Progress { label, percent } => parts.push(format!("{} {}%", label, percent)),
            Node::Tags(tags) => parts.push(tags.join(" ")),
            Node::Link { label, .. } | Node::Button { label, .. } => parts.push(label.clone()),
            Node::Image { alt, .. } => parts.push(alt.clone()),
            Node::Video { title, .. } => parts.push(title.clone()),
            Node::Form { fields, submit_label, .. } => {
                parts.extend(fields.iter().map(|f| f.label.clone()));
                parts.push(submit_label.clone());
            }
            Node::Card { .. } | Node::Group(_) => {}
        });
        parts.join("\n")
    }

    pub fn count(&self, pred: &dyn Fn(&Node) -> bool) -> usize {
        let mut n = 0;
        self.walk(&mut |node| {
            if pred(node) {
                n += 1;
            }
        });
        n
    }
}
