// URL State - Encode an App as a path plus query string, and back
//
// The web front end keeps no session. Every link carries the full state the
// click would produce, so a request rebuilds the App from its URL alone.

use crate::content::Content;
use crate::html::Linker;
use crate::shell::{App, Interaction, ViewSelector};
use serde::{Deserialize, Serialize};

/// Query parameters. Kept as strings so malformed values are ignored
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewQuery {
    pub expanded: Option<String>,
    pub all: Option<String>,
    pub menu: Option<String>,
    pub playing: Option<String>,
}

fn flag(value: &Option<String>) -> bool {
    matches!(value.as_deref(), Some("1") | Some("true"))
}

fn id(value: &Option<String>) -> Option<u32> {
    value.as_deref().and_then(|v| v.trim().parse().ok())
}

impl App {
    /// Rebuild state from a URL. Ids that do not exist in `content` are dropped.
    pub fn from_query(view: &str, query: &ViewQuery, content: &Content) -> App {
        let mut app = App::new();
        app.navigate_to(view);
        app.shell.set_menu_open(flag(&query.menu));

        match app.selector() {
            ViewSelector::Certificates => {
                let certs = &mut app.views.certificates;
                if flag(&query.all) {
                    certs.show_all(content.certificates.len());
                }
                // A card can only be expanded if it is on screen
                let visible = content.certificates.iter().take(certs.display_count);
                if let Some(expanded) = id(&query.expanded) {
                    if visible.into_iter().any(|c| c.id == expanded) {
                        certs.toggle(expanded);
                    }
                }
            }
            ViewSelector::Projects => {
                if let Some(playing) = id(&query.playing) {
                    if content.project(playing).is_some_and(|p| p.media.is_video()) {
                        app.views.projects.play(playing);
                    }
                }
            }
            _ => {}
        }

        app
    }

    /// Path and query that reproduce this state
    pub fn to_href(&self) -> String {
        let mut params = Vec::new();
        let certs = &self.views.certificates;

        if let Some(expanded) = certs.expanded {
            params.push(format!("expanded={}", expanded));
        }
        if certs.display_count != crate::views::certificates::INITIAL_DISPLAY_COUNT {
            params.push("all=1".to_string());
        }
        if self.shell.menu_open {
            params.push("menu=1".to_string());
        }
        if let Some(playing) = self.views.projects.active_video {
            params.push(format!("playing={}", playing));
        }

        let path = format!("/{}", self.selector().id());
        if params.is_empty() {
            path
        } else {
            format!("{}?{}", path, params.join("&"))
        }
    }
}

/// Turns each click into the URL of the state it leads to
pub struct QueryLinker<'a> {
    pub app: &'a App,
}

impl Linker for QueryLinker<'_> {
    fn href(&self, interaction: &Interaction) -> String {
        let mut next = self.app.clone();
        match next.activate(interaction) {
            Some(url) => url,
            None => next.to_href(),
        }
    }
}
