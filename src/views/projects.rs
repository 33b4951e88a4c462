// Projects View - Cards with an image or an embedded video each

use super::{RenderContext, ViewStates};
use crate::content::MediaKind;
use crate::node::Node;
use crate::shell::{Interaction, Message};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectsState {
    /// Drives the play indicator only
    pub active_video: Option<u32>,
}

impl ProjectsState {
    pub fn play(&mut self, id: u32) {
        self.active_video = Some(id);
    }

    /// Pausing a video other than the active one is ignored
    pub fn pause(&mut self, id: u32) {
        if self.active_video == Some(id) {
            self.active_video = None;
        }
    }
}

pub fn render(ctx: &RenderContext, states: &ViewStates) -> Node {
    let state = &states.projects;

    let cards = ctx
        .content
        .projects
        .iter()
        .map(|project| {
            let media = match project.media.kind {
                MediaKind::Video => {
                    let playing = state.active_video == Some(project.id);
                    let msg = if playing {
                        Message::PauseVideo(project.id)
                    } else {
                        Message::PlayVideo(project.id)
                    };
                    Node::Video {
                        url: project.media.url.clone(),
                        title: project.name.clone(),
                        playing,
                        on_toggle: Interaction::Dispatch(vec![msg]),
                    }
                }
                MediaKind::Image => Node::Image {
                    url: project.media.url.clone(),
                    alt: project.name.clone(),
                },
            };

            Node::Card {
                key: card_key(project.id),
                highlighted: state.active_video == Some(project.id),
                on_click: None,
                children: vec![
                    media,
                    Node::Heading(project.name.clone()),
                    Node::Note(project.year.to_string()),
                    Node::Link {
                        label: "GitHub".to_string(),
                        href: project.github_url.clone(),
                        icon: Some("github".to_string()),
                    },
                    Node::Text(project.description.clone()),
                    Node::Tags(project.technologies.clone()),
                ],
            }
        })
        .collect();

    Node::Section {
        title: "Projects".to_string(),
        children: vec![Node::Group(cards)],
    }
}

pub fn card_key(id: u32) -> String {
    format!("project-{}", id)
}
