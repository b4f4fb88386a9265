use yew::prelude::*;

use crate::hooks::use_count_up;

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub end: u32,
    #[prop_or(2000)]
    pub duration_ms: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or_default]
    pub label: AttrValue,
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let node = use_node_ref();
    let count = use_count_up(node.clone(), props.end, props.duration_ms);

    html! {
        <div class="stat">
            <span ref={node} class="stat-value">{count}{props.suffix.clone()}</span>
            <span class="stat-label">{props.label.clone()}</span>
        </div>
    }
}
