use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use super::geometry::{crosses, intersection_ratio, Rect, RootMargin};
use super::timer::Disposer;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserveOptions {
    /// Fraction of the element that must be visible, `0.0..=1.0`.
    pub threshold: f64,
    pub root_margin: RootMargin,
}

impl Default for ObserveOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: RootMargin::ZERO,
        }
    }
}

/// Viewport-observation primitive.
///
/// `on_change` receives `true` when the element starts intersecting and
/// `false` when it stops. Delivery happens from the host's event loop, never
/// synchronously from inside `observe`.
pub trait Viewport {
    type Element: Clone + 'static;

    fn observe(
        &self,
        element: &Self::Element,
        options: &ObserveOptions,
        on_change: Box<dyn FnMut(bool)>,
    ) -> Disposer;
}

/// Observes `element` until it first intersects, runs `on_enter`, and
/// disconnects. The returned disposer disconnects early; it is safe to call
/// after the trigger already fired.
pub fn observe_once<V>(
    viewport: &V,
    element: &V::Element,
    options: &ObserveOptions,
    on_enter: impl FnOnce() + 'static,
) -> Disposer
where
    V: Viewport + ?Sized,
{
    let slot: Rc<RefCell<Option<Disposer>>> = Rc::default();
    let mut on_enter = Some(on_enter);

    let disconnect = {
        let slot = Rc::clone(&slot);
        move || {
            let disposer = slot.borrow_mut().take();
            if let Some(disposer) = disposer {
                disposer();
            }
        }
    };

    let on_change = {
        let disconnect = disconnect.clone();
        Box::new(move |visible: bool| {
            if !visible {
                return;
            }
            if let Some(on_enter) = on_enter.take() {
                disconnect();
                on_enter();
            }
        })
    };

    let disposer = viewport.observe(element, options, on_change);
    *slot.borrow_mut() = Some(disposer);
    Box::new(disconnect)
}

/// Handle for elements tracked by a [`PolledViewport`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementId(pub u32);

type Callback = Rc<RefCell<Box<dyn FnMut(bool)>>>;

struct Observation {
    id: u64,
    element: ElementId,
    options: ObserveOptions,
    last: Option<bool>,
    on_change: Callback,
}

#[derive(Default)]
struct PolledState {
    viewport: Rect,
    layout: HashMap<ElementId, Rect>,
    observations: Vec<Observation>,
    next_id: u64,
}

/// Viewport primitive for hosts without a native intersection observer.
///
/// The host feeds it layout rectangles and scroll positions and calls
/// [`poll`](Self::poll) once per frame; changed visibility is delivered
/// then, including the initial state of freshly observed elements.
#[derive(Clone)]
pub struct PolledViewport {
    state: Rc<RefCell<PolledState>>,
}

impl PolledViewport {
    pub fn new(viewport: Rect) -> Self {
        Self {
            state: Rc::new(RefCell::new(PolledState {
                viewport,
                ..PolledState::default()
            })),
        }
    }

    pub fn set_layout(&self, element: ElementId, rect: Rect) {
        self.state.borrow_mut().layout.insert(element, rect);
    }

    pub fn remove_layout(&self, element: ElementId) {
        self.state.borrow_mut().layout.remove(&element);
    }

    pub fn scroll_to(&self, y: f64) {
        self.state.borrow_mut().viewport.y = y;
    }

    pub fn scroll_by(&self, dy: f64) {
        self.state.borrow_mut().viewport.y += dy;
    }

    pub fn observer_count(&self) -> usize {
        self.state.borrow().observations.len()
    }

    /// Recomputes every observation and delivers changes. Returns how many
    /// callbacks ran.
    pub fn poll(&self) -> usize {
        let changed: Vec<(u64, bool, Callback)> = {
            let mut guard = self.state.borrow_mut();
            let state = &mut *guard;
            let viewport = state.viewport;
            let layout = &state.layout;
            state
                .observations
                .iter_mut()
                .filter_map(|observation| {
                    let visible = layout
                        .get(&observation.element)
                        .map(|rect| {
                            let ratio = intersection_ratio(rect, &viewport, &observation.options.root_margin);
                            crosses(ratio, observation.options.threshold)
                        })
                        .unwrap_or(false);
                    if observation.last == Some(visible) {
                        return None;
                    }
                    observation.last = Some(visible);
                    Some((observation.id, visible, Rc::clone(&observation.on_change)))
                })
                .collect()
        };

        let mut delivered = 0;
        for (id, visible, on_change) in changed {
            // an earlier callback in this batch may have disconnected it
            let live = self.state.borrow().observations.iter().any(|o| o.id == id);
            if live {
                (on_change.borrow_mut())(visible);
                delivered += 1;
            }
        }
        delivered
    }
}

impl Viewport for PolledViewport {
    type Element = ElementId;

    fn observe(
        &self,
        element: &ElementId,
        options: &ObserveOptions,
        on_change: Box<dyn FnMut(bool)>,
    ) -> Disposer {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.observations.push(Observation {
                id,
                element: *element,
                options: *options,
                last: None,
                on_change: Rc::new(RefCell::new(on_change)),
            });
            id
        };

        let state: Weak<RefCell<PolledState>> = Rc::downgrade(&self.state);
        Box::new(move || {
            if let Some(state) = state.upgrade() {
                state.borrow_mut().observations.retain(|o| o.id != id);
            }
        })
    }
}
