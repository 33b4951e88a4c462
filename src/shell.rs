// App Shell - Which view is selected, and every state change
//
// All interaction arrives as a Message and is applied by App::update.
// Views never mutate anything themselves; they attach Messages to the
// clickable parts of the tree they return.

use crate::views::ViewStates;
use serde::{Deserialize, Serialize};

// ============================================================================
// VIEW SELECTOR
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewSelector {
    #[default]
    Home,
    About,
    Certificates,
    Projects,
    Current,
    Contact,
}

impl ViewSelector {
    pub const ALL: [ViewSelector; 6] = [
        ViewSelector::Home,
        ViewSelector::About,
        ViewSelector::Certificates,
        ViewSelector::Projects,
        ViewSelector::Current,
        ViewSelector::Contact,
    ];

    /// Unknown identifiers select Home
    pub fn from_id(id: &str) -> Self {
        match id {
            "about" => ViewSelector::About,
            "certificates" => ViewSelector::Certificates,
            "projects" => ViewSelector::Projects,
            "current" => ViewSelector::Current,
            "contact" => ViewSelector::Contact,
            _ => ViewSelector::Home,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            ViewSelector::Home => "home",
            ViewSelector::About => "about",
            ViewSelector::Certificates => "certificates",
            ViewSelector::Projects => "projects",
            ViewSelector::Current => "current",
            ViewSelector::Contact => "contact",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ViewSelector::Home => "Home",
            ViewSelector::About => "About Me",
            ViewSelector::Certificates => "Certificates",
            ViewSelector::Projects => "Projects",
            ViewSelector::Current => "Currently Working On",
            ViewSelector::Contact => "Let's Connect",
        }
    }

    pub fn next(&self) -> Self {
        let i = self.index();
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        let i = self.index();
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }
}

// ============================================================================
// NAV ITEMS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

/// The fixed navigation entries, in display order
pub fn nav_items() -> Vec<NavItem> {
    ViewSelector::ALL
        .iter()
        .map(|s| NavItem { id: s.id(), label: s.title() })
        .collect()
}

// ============================================================================
// APP SHELL
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppShell {
    pub selector: ViewSelector,
    pub menu_open: bool,
}

impl AppShell {
    pub fn set_selector(&mut self, id: &str) {
        self.selector = ViewSelector::from_id(id);
    }

    pub fn set_menu_open(&mut self, open: bool) {
        self.menu_open = open;
    }
}

// ============================================================================
// MESSAGES
// ============================================================================

/// One user interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Navigate(ViewSelector),
    SetMenuOpen(bool),
    ToggleCertificate(u32),
    /// Reveal every certificate; carries the total count
    ShowAllCertificates(usize),
    PlayVideo(u32),
    PauseVideo(u32),
}

/// What a click on an interactive node does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    /// Apply these messages in order
    Dispatch(Vec<Message>),
    /// Leave the site; no state changes
    Follow(String),
}

// ============================================================================
// APP
// ============================================================================

/// Top-level state: the shell plus each view's local state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct App {
    pub shell: AppShell,
    pub views: ViewStates,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selector(&self) -> ViewSelector {
        self.shell.selector
    }

    pub fn update(&mut self, msg: &Message) {
        match msg {
            Message::Navigate(target) => {
                if *target != self.shell.selector {
                    // The previous view is unmounted, so its local state goes with it
                    self.views = ViewStates::default();
                    tracing::debug!(from = self.shell.selector.id(), to = target.id(), "navigate");
                }
                self.shell.set_selector(target.id());
            }
            Message::SetMenuOpen(open) => self.shell.set_menu_open(*open),
            Message::ToggleCertificate(id) => self.views.certificates.toggle(*id),
            Message::ShowAllCertificates(total) => self.views.certificates.show_all(*total),
            Message::PlayVideo(id) => self.views.projects.play(*id),
            Message::PauseVideo(id) => self.views.projects.pause(*id),
        }
    }

    /// Apply a click. Returns the URL to open when the click leaves the site.
    pub fn activate(&mut self, interaction: &Interaction) -> Option<String> {
        match interaction {
            Interaction::Dispatch(messages) => {
                for msg in messages {
                    self.update(msg);
                }
                None
            }
            Interaction::Follow(url) => Some(url.clone()),
        }
    }

    /// Set the selector from a raw identifier, with the same remount rules as navigation
    pub fn navigate_to(&mut self, id: &str) {
        self.update(&Message::Navigate(ViewSelector::from_id(id)));
    }
}

// ============================================================================
// TESTS
// ============================================================================
