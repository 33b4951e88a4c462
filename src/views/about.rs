// About View - Biography and skill levels

use super::{RenderContext, ViewStates};
use crate::node::Node;

pub fn render(ctx: &RenderContext, _states: &ViewStates) -> Node {
    let content = ctx.content;

    let bio = Node::Section {
        title: "Get to Know Me".to_string(),
        children: content.profile.about.iter().cloned().map(Node::Text).collect(),
    };

    let skills = Node::Section {
        title: "Skills & Technologies".to_string(),
        children: content
            .skills
            .iter()
            .map(|skill| Node::Progress {
                label: skill.name.clone(),
                percent: skill.level.min(100),
            })
            .collect(),
    };

    Node::Section {
        title: "About Me".to_string(),
        children: vec![bio, skills],
    }
}
