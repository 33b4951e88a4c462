// Views - One module per page, plus the registry that picks between them
//
// A view is a pure function of the loaded content and the views' local
// state. Only Certificates and Projects have local state.

pub mod about;
pub mod certificates;
pub mod contact;
pub mod current_work;
pub mod home;
pub mod projects;

pub use certificates::CertificatesState;
pub use projects::ProjectsState;

use crate::content::Content;
use crate::nav::{navbar, NavLayout};
use crate::node::Node;
use crate::shell::{App, ViewSelector};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewStates {
    pub certificates: CertificatesState,
    pub projects: ProjectsState,
}

/// Things a view needs besides content and local state
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub content: &'a Content,
    pub form_endpoint: &'a str,
}

pub type ViewFn = fn(&RenderContext, &ViewStates) -> Node;

/// Fixed mapping from selector to view function
pub fn view_for(selector: ViewSelector) -> ViewFn {
    match selector {
        ViewSelector::Home => home::render,
        ViewSelector::About => about::render,
        ViewSelector::Certificates => certificates::render,
        ViewSelector::Projects => projects::render,
        ViewSelector::Current => current_work::render,
        ViewSelector::Contact => contact::render,
    }
}

/// A full screen: navigation bar followed by the selected view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub nav: Node,
    pub body: Node,
}

pub fn render(app: &App, ctx: &RenderContext, layout: NavLayout) -> Page {
    let nav = navbar(&ctx.content.profile.name, &app.shell, layout);
    let body = view_for(app.selector())(ctx, &app.views);
    Page { nav, body }
}

/// Section titles double as the view's identity in rendered output
pub fn section_title(node: &Node) -> Option<&str> {
    match node {
        Node::Section { title, .. } => Some(title),
        _ => None,
    }
}
