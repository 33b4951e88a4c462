// Contact View - Social links and the relay-backed contact form
//
// The form posts straight to the relay endpoint. Field values are never
// held here, and the relay's response is not visible to us.

use super::{RenderContext, ViewStates};
use crate::node::{FieldKind, FormField, Node};

/// Names the relay expects, in display order
pub const FORM_FIELDS: [&str; 4] = ["name", "email", "subject", "message"];

pub fn render(ctx: &RenderContext, _states: &ViewStates) -> Node {
    let content = ctx.content;

    let socials = content
        .social_links
        .iter()
        .map(|social| Node::Link {
            label: social.name.clone(),
            href: social.url.clone(),
            icon: Some(social.icon.clone()),
        })
        .collect();

    Node::Section {
        title: "Let's Connect".to_string(),
        children: vec![
            Node::Text(content.profile.contact_blurb.clone()),
            Node::Group(socials),
            Node::Form {
                action: ctx.form_endpoint.to_string(),
                method: "POST".to_string(),
                fields: form_fields(),
                submit_label: "Send Message".to_string(),
            },
        ],
    }
}

fn form_fields() -> Vec<FormField> {
    let field = |name: &str, label: &str, kind, placeholder: &str| FormField {
        name: name.to_string(),
        label: label.to_string(),
        kind,
        placeholder: placeholder.to_string(),
    };

    FORM_FIELDS
        .iter()
        .map(|&name| match name {
            "email" => field(name, "Email", FieldKind::Email, "Your Email"),
            "subject" => field(name, "Subject", FieldKind::Text, "Subject"),
            "message" => field(name, "Message", FieldKind::TextArea, "Your Message"),
            _ => field(name, "Name", FieldKind::Text, "Your Name"),
        })
        .collect()
}
