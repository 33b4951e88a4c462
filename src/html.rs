// HTML Renderer - Node tree to markup
//
// Clicks become plain links; a Linker decides where each one points.

use crate::node::{FieldKind, Node};
use crate::shell::Interaction;

pub trait Linker {
    fn href(&self, interaction: &Interaction) -> String;
}

/// Points every in-site click at the current page. Used for static dumps.
pub struct InertLinker;

impl Linker for InertLinker {
    fn href(&self, interaction: &Interaction) -> String {
        match interaction {
            Interaction::Follow(url) => url.clone(),
            Interaction::Dispatch(_) => "#".to_string(),
        }
    }
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLE: &str = "\
body{margin:0;font-family:system-ui,sans-serif;background:#111827;color:#f9fafb}\
nav{display:flex;gap:1rem;align-items:center;padding:.75rem 1rem;background:#1f2937}\
nav .brand{font-weight:700;margin-right:auto}\
nav a{color:#d1d5db;text-decoration:none;padding:.25rem .5rem;border-radius:.5rem}\
nav a.active{background:#2563eb;color:#fff}\
.nav-compact{display:none;flex-direction:column;align-items:flex-start}\
@media (max-width:768px){.nav-desktop{display:none}.nav-compact{display:flex}}\
main{max-width:72rem;margin:0 auto;padding:2rem 1rem}\
.card{background:#1f2937;border-radius:.75rem;padding:1.5rem;margin:1rem 0}\
.card.highlighted{outline:2px solid #3b82f6}\
.note{color:#9ca3af;font-size:.875rem}\
.bar{height:.5rem;background:#374151;border-radius:9999px}\
.fill{height:100%;background:linear-gradient(90deg,#3b82f6,#9333ea);border-radius:9999px}\
.tags{display:flex;flex-wrap:wrap;gap:.5rem;list-style:none;padding:0}\
.tags li{background:#374151;border-radius:9999px;padding:.25rem .75rem}\
a{color:#60a5fa}";

/// Whole document. Every nav in `navs` is emitted; CSS shows the one that fits.
pub fn render_document(title: &str, navs: &[&Node], body: &Node, linker: &dyn Linker) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape(title)));
    out.push_str(&format!("<style>{}</style>\n", STYLE));
    out.push_str("</head>\n<body>\n");
    for nav in navs {
        render_node(nav, linker, &mut out);
    }
    out.push_str("<main>\n");
    render_node(body, linker, &mut out);
    out.push_str("</main>\n</body>\n</html>\n");
    out
}

pub fn render_fragment(node: &Node, linker: &dyn Linker) -> String {
    let mut out = String::new();
    render_node(node, linker, &mut out);
    out
}

fn render_node(node: &Node, linker: &dyn Linker, out: &mut String) {
    render_in(node, linker, None, out);
}

/// `card_href` is set inside a clickable card: headings and notes link to it
fn render_in(node: &Node, linker: &dyn Linker, card_href: Option<&str>, out: &mut String) {
    match node {
        Node::Nav { brand, toggle, entries } => {
            let class = if toggle.is_some() { "nav-compact" } else { "nav-desktop" };
            out.push_str(&format!("<nav class=\"{}\">\n", class));
            out.push_str(&format!("<span class=\"brand\">{}</span>\n", escape(brand)));
            if let Some(toggle) = toggle {
                render_in(toggle, linker, None, out);
            }
            for entry in entries {
                render_in(entry, linker, None, out);
            }
            out.push_str("</nav>\n");
        }
        Node::Section { title, children } => {
            out.push_str("<section>\n");
            out.push_str(&format!("<h2>{}</h2>\n", escape(title)));
            for child in children {
                render_in(child, linker, card_href, out);
            }
            out.push_str("</section>\n");
        }
        Node::Group(children) => {
            out.push_str("<div class=\"group\">\n");
            for child in children {
                render_in(child, linker, card_href, out);
            }
            out.push_str("</div>\n");
        }
        Node::Heading(text) => match card_href {
            Some(href) => out.push_str(&format!(
                "<h3><a href=\"{}\">{}</a></h3>\n",
                escape(href),
                escape(text)
            )),
            None => out.push_str(&format!("<h3>{}</h3>\n", escape(text))),
        },
        Node::Text(text) => out.push_str(&format!("<p>{}</p>\n", escape(text))),
        Node::Note(text) => match card_href {
            Some(href) => out.push_str(&format!(
                "<p class=\"note\"><a href=\"{}\">{}</a></p>\n",
                escape(href),
                escape(text)
            )),
            None => out.push_str(&format!("<p class=\"note\">{}</p>\n", escape(text))),
        },
        Node::Card { key, highlighted, on_click, children } => {
            let class = if *highlighted { "card highlighted" } else { "card" };
            out.push_str(&format!("<article class=\"{}\" id=\"{}\">\n", class, escape(key)));
            let href = on_click.as_ref().map(|i| linker.href(i));
            for child in children {
                render_in(child, linker, href.as_deref(), out);
            }
            out.push_str("</article>\n");
        }
        Node::Progress { label, percent } => {
            let percent = (*percent).min(100);
            out.push_str("<div class=\"progress\">\n");
            out.push_str(&format!(
                "<span class=\"label\">{}</span> <span class=\"value\">{}%</span>\n",
                escape(label),
                percent
            ));
            out.push_str(&format!(
                "<div class=\"bar\"><div class=\"fill\" style=\"width: {}%\"></div></div>\n",
                percent
            ));
            out.push_str("</div>\n");
        }
        Node::Tags(tags) => {
            out.push_str("<ul class=\"tags\">");
            for tag in tags {
                out.push_str(&format!("<li>{}</li>", escape(tag)));
            }
            out.push_str("</ul>\n");
        }
        Node::Link { label, href, icon } => {
            let icon_attrs = icon
                .as_deref()
                .map(|icon| {
                    let icon = escape(icon);
                    format!(" class=\"icon icon-{0}\" data-icon=\"{0}\"", icon)
                })
                .unwrap_or_default();
            out.push_str(&format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\"{}>{}</a>\n",
                escape(href),
                icon_attrs,
                escape(label)
            ));
        }
        Node::Button { label, active, on_click } => {
            let class = if *active { "button active" } else { "button" };
            out.push_str(&format!(
                "<a class=\"{}\" href=\"{}\">{}</a>\n",
                class,
                escape(&linker.href(on_click)),
                escape(label)
            ));
        }
        Node::Image { url, alt } => out.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">\n",
            escape(url),
            escape(alt)
        )),
        Node::Video { url, title, playing, on_toggle } => {
            let class = if *playing { "video playing" } else { "video" };
            out.push_str(&format!("<div class=\"{}\">\n", class));
            out.push_str(&format!(
                "<video src=\"{}\" title=\"{}\" controls preload=\"metadata\"></video>\n",
                escape(url),
                escape(title)
            ));
            let label = if *playing { "❚❚ Playing" } else { "▶ Play" };
            out.push_str(&format!(
                "<a class=\"video-toggle\" href=\"{}\">{}</a>\n",
                escape(&linker.href(on_toggle)),
                label
            ));
            out.push_str("</div>\n");
        }
        Node::Form { action, method, fields, submit_label } => {
            out.push_str(&format!(
                "<form action=\"{}\" method=\"{}\">\n",
                escape(action),
                escape(method)
            ));
            for field in fields {
                let name = escape(&field.name);
                out.push_str(&format!(
                    "<label for=\"{}\">{}</label>\n",
                    name,
                    escape(&field.label)
                ));
                match field.kind {
                    FieldKind::TextArea => out.push_str(&format!(
                        "<textarea id=\"{0}\" name=\"{0}\" rows=\"5\" \
                         placeholder=\"{1}\"></textarea>\n",
                        name,
                        escape(&field.placeholder)
                    )),
                    FieldKind::Text | FieldKind::Email => {
                        let kind = if field.kind == FieldKind::Email { "email" } else { "text" };
                        out.push_str(&format!(
                            "<input type=\"{}\" id=\"{1}\" name=\"{1}\" placeholder=\"{2}\">\n",
                            kind,
                            name,
                            escape(&field.placeholder)
                        ));
                    }
                }
            }
            out.push_str(&format!(
                "<button type=\"submit\">{}</button>\n</form>\n",
                escape(submit_label)
            ));
        }
    }
}
