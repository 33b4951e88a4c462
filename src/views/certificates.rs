// Certificates View - Expandable cards with a one-way "load more"

use super::{RenderContext, ViewStates};
use crate::node::Node;
use crate::shell::{Interaction, Message};

/// Cards shown before "load more" is used
pub const INITIAL_DISPLAY_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificatesState {
    /// At most one card is expanded
    pub expanded: Option<u32>,
    pub display_count: usize,
}

impl Default for CertificatesState {
    fn default() -> Self {
        Self {
            expanded: None,
            display_count: INITIAL_DISPLAY_COUNT,
        }
    }
}

impl CertificatesState {
    /// Same id collapses; a different id replaces the expanded card
    pub fn toggle(&mut self, id: u32) {
        self.expanded = if self.expanded == Some(id) { None } else { Some(id) };
    }

    /// Reveal everything. Never shrinks the count.
    pub fn show_all(&mut self, total: usize) {
        self.display_count = self.display_count.max(total);
    }

    pub fn can_show_more(&self, total: usize) -> bool {
        self.display_count < total
    }
}

pub fn render(ctx: &RenderContext, states: &ViewStates) -> Node {
    let state = &states.certificates;
    let certificates = &ctx.content.certificates;
    let total = certificates.len();

    let cards = certificates
        .iter()
        .take(state.display_count)
        .map(|cert| {
            let expanded = state.expanded == Some(cert.id);
            let mut children = vec![
                Node::Heading(cert.title.clone()),
                Node::Text(cert.issuer.clone()),
                Node::Note(cert.date.clone()),
                Node::Text(cert.description.clone()),
            ];
            if expanded {
                children.push(Node::Text(cert.details.clone()));
                children.push(Node::Link {
                    label: "View Credential".to_string(),
                    href: cert.credential_link.clone(),
                    icon: None,
                });
            }
            children.push(Node::Note(
                if expanded { "Show less" } else { "Click to expand" }.to_string(),
            ));

            Node::Card {
                key: card_key(cert.id),
                highlighted: expanded,
                on_click: Some(Interaction::Dispatch(vec![Message::ToggleCertificate(cert.id)])),
                children,
            }
        })
        .collect();

    let mut children = vec![Node::Group(cards)];
    if state.can_show_more(total) {
        children.push(Node::Button {
            label: "Load More Certificates".to_string(),
            active: false,
            on_click: Interaction::Dispatch(vec![Message::ShowAllCertificates(total)]),
        });
    }

    Node::Section {
        title: "Certificates".to_string(),
        children,
    }
}

pub fn card_key(id: u32) -> String {
    format!("certificate-{}", id)
}
