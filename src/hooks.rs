use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::motion::autoplay::CarouselAutoplay;
use crate::motion::browser::{mark_visible, BrowserTimer, BrowserViewport};
use crate::motion::count_up::CountUp;
use crate::motion::geometry::RootMargin;
use crate::motion::reveal::{RevealController, RevealOptions};
use crate::motion::viewport::ObserveOptions;

/// Counters wait until half of the number is on screen.
pub const COUNTER_OPTIONS: ObserveOptions = ObserveOptions {
    threshold: 0.5,
    root_margin: RootMargin::ZERO,
};

/// Adds the visible class to `node` the first time it scrolls into view.
#[hook]
pub fn use_reveal(node: NodeRef, options: RevealOptions) {
    use_effect_with_deps(
        move |node: &NodeRef| {
            let element = node.cast::<Element>();
            let handle = match RevealController::browser() {
                Ok(controller) => Some(controller.register(element, options)),
                Err(err) => {
                    warn!("Reveal disabled: {}", err);
                    if let Some(element) = element {
                        mark_visible(&element);
                    }
                    None
                }
            };
            move || {
                if let Some(handle) = handle {
                    handle.dispose();
                }
            }
        },
        node,
    );
}

/// Reveals `items` one after another once `container` scrolls into view.
#[hook]
pub fn use_stagger(container: NodeRef, items: Rc<Vec<NodeRef>>, options: RevealOptions) {
    use_effect_with_deps(
        move |(container, items): &(NodeRef, Rc<Vec<NodeRef>>)| {
            let members: Vec<Element> = items.iter().filter_map(|item| item.cast::<Element>()).collect();
            let handle = match RevealController::browser() {
                Ok(controller) => Some(controller.register_group(container.cast::<Element>(), members, options)),
                Err(err) => {
                    warn!("Stagger disabled: {}", err);
                    members.iter().for_each(mark_visible);
                    None
                }
            };
            move || {
                if let Some(handle) = handle {
                    handle.dispose();
                }
            }
        },
        (container, items),
    );
}

/// Counts from 0 to `target` once `node` is half visible. Returns the value
/// to display.
#[hook]
pub fn use_count_up(node: NodeRef, target: u32, duration_ms: u32) -> u32 {
    let value = use_state(|| 0u32);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |(node, target, duration_ms): &(NodeRef, u32, u32)| {
                let count_up = CountUp::new(Rc::new(BrowserTimer), *target, *duration_ms);
                match BrowserViewport::new() {
                    Ok(viewport) => {
                        count_up.on_change(move |v| value.set(v));
                        count_up.attach(&viewport, node.cast::<Element>().as_ref(), &COUNTER_OPTIONS);
                    }
                    Err(err) => {
                        warn!("Counter animation disabled: {}", err);
                        value.set(*target);
                    }
                }
                move || count_up.dispose()
            },
            (node, target, duration_ms),
        );
    }

    *value
}

/// Pause/resume handle for a carousel's autoplay.
#[derive(Clone)]
pub struct UseAutoplayHandle {
    slot: Rc<RefCell<Option<CarouselAutoplay>>>,
}

impl UseAutoplayHandle {
    pub fn pointer_enter(&self) {
        if let Some(autoplay) = self.slot.borrow().as_ref() {
            autoplay.pointer_enter();
        }
    }

    pub fn pointer_leave(&self) {
        if let Some(autoplay) = self.slot.borrow().as_ref() {
            autoplay.pointer_leave();
        }
    }
}

/// Emits `advance` every `interval_ms` while mounted and not hovered.
#[hook]
pub fn use_autoplay(interval_ms: u32, enabled: bool, advance: Callback<()>) -> UseAutoplayHandle {
    let slot = use_mut_ref(|| None::<CarouselAutoplay>);

    {
        let slot = slot.clone();
        use_effect_with_deps(
            move |(interval_ms, enabled): &(u32, bool)| {
                if *enabled {
                    let autoplay = CarouselAutoplay::new(Rc::new(BrowserTimer));
                    autoplay.start(*interval_ms, move || advance.emit(()));
                    *slot.borrow_mut() = Some(autoplay);
                }
                move || {
                    let autoplay = slot.borrow_mut().take();
                    if let Some(autoplay) = autoplay {
                        autoplay.stop();
                    }
                }
            },
            (interval_ms, enabled),
        );
    }

    UseAutoplayHandle { slot }
}
