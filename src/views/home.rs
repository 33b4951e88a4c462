// Home View - Greeting and a call to action

use super::{RenderContext, ViewStates};
use crate::node::Node;
use crate::shell::{Interaction, Message, ViewSelector};

pub fn render(ctx: &RenderContext, _states: &ViewStates) -> Node {
    let profile = &ctx.content.profile;

    Node::Section {
        title: "Home".to_string(),
        children: vec![
            Node::Heading(format!("Hi, I'm {}", profile.name)),
            Node::Text(profile.headline.clone()),
            Node::Text(profile.intro.clone()),
            Node::Button {
                label: "View My Work".to_string(),
                active: false,
                on_click: Interaction::Dispatch(vec![Message::Navigate(ViewSelector::Projects)]),
            },
        ],
    }
}
