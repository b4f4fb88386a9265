use yew::prelude::*;

use crate::hooks::{use_reveal, use_stagger};
use crate::motion::reveal::RevealOptions;

/// Entry animation played by the stylesheet once the wrapper is revealed.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum RevealKind {
    FadeIn,
    SlideUp,
    SlideLeft,
    SlideRight,
    Zoom,
}

impl RevealKind {
    pub fn class(self) -> &'static str {
        match self {
            RevealKind::FadeIn => "scroll-fade-in",
            RevealKind::SlideUp => "scroll-slide-up",
            RevealKind::SlideLeft => "scroll-slide-left",
            RevealKind::SlideRight => "scroll-slide-right",
            RevealKind::Zoom => "scroll-zoom",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or(RevealKind::FadeIn)]
    pub kind: RevealKind,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    use_reveal(node.clone(), RevealOptions::page());

    html! {
        <div ref={node} class={classes!(props.kind.class(), props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StaggerGroupProps {
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub item_class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps every child in a `stagger-item` and reveals them in order when
/// the group scrolls into view.
#[function_component(StaggerGroup)]
pub fn stagger_group(props: &StaggerGroupProps) -> Html {
    let container = use_node_ref();
    let items = use_memo(
        |count: &usize| (0..*count).map(|_| NodeRef::default()).collect::<Vec<_>>(),
        props.children.len(),
    );
    use_stagger(container.clone(), items.clone(), RevealOptions::stagger(props.delay_ms));

    html! {
        <div ref={container} class={props.class.clone()}>
            { for props.children.iter().zip(items.iter()).map(|(child, item)| html! {
                <div ref={item.clone()} class={classes!("stagger-item", props.item_class.clone())}>
                    { child }
                </div>
            }) }
        </div>
    }
}
