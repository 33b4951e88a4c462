// Portfolio - Core Library
// Content, view state, and view rendering shared by the terminal UI and the web server

pub mod config;
pub mod content;
pub mod error;
pub mod html;
pub mod nav;
pub mod node;
pub mod query;
pub mod shell;
pub mod views;

#[cfg(feature = "server")]
pub mod server;     // HTTP front end (axum)

#[cfg(feature = "tui")]
pub mod ui;         // Terminal front end (ratatui)

// Re-export commonly used types
pub use config::Config;
pub use content::{
    Activity, Certificate, Content, Media, MediaKind, Profile, Project, Skill, SocialLink,
};
pub use error::{PortfolioError, Result};
pub use html::{InertLinker, Linker};
pub use nav::{navbar, NavLayout};
pub use node::{FieldKind, FormField, Node};
pub use query::{QueryLinker, ViewQuery};
pub use shell::{nav_items, App, AppShell, Interaction, Message, NavItem, ViewSelector};
pub use views::{render, view_for, Page, RenderContext, ViewStates};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
