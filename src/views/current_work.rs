// Current Work View - Ongoing activities with progress

use super::{RenderContext, ViewStates};
use crate::node::Node;

pub fn render(ctx: &RenderContext, _states: &ViewStates) -> Node {
    let cards = ctx
        .content
        .activities
        .iter()
        .enumerate()
        .map(|(i, activity)| Node::Card {
            key: format!("activity-{}", i),
            highlighted: false,
            on_click: None,
            children: vec![
                Node::Heading(activity.title.clone()),
                Node::Text(activity.description.clone()),
                Node::Progress {
                    label: "Progress".to_string(),
                    percent: activity.progress.min(100),
                },
                Node::Tags(activity.technologies.clone()),
            ],
        })
        .collect();

    Node::Section {
        title: "Currently Working On".to_string(),
        children: vec![Node::Group(cards)],
    }
}
