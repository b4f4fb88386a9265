//! Scroll-triggered reveal flags.
//!
//! Every registration is a [`RevealGroup`]: a single element is a group of
//! one whose trigger is the element itself, a staggered group is triggered
//! by its container. The first crossing disconnects detection and schedules
//! each member exactly once, `reveal_index * group_delay_ms` after the
//! trigger.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, trace};

use super::geometry::RootMargin;
use super::timer::{Disposer, Timer};
use super::viewport::{observe_once, ObserveOptions, Viewport};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: RootMargin,
    /// Stagger step between members. `None` reveals the whole group at once.
    pub group_delay_ms: Option<u32>,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: RootMargin::bottom(-100.0),
            group_delay_ms: None,
        }
    }
}

impl RevealOptions {
    /// Section-level fades and slides.
    pub fn page() -> Self {
        Self {
            root_margin: RootMargin::bottom(-80.0),
            ..Self::default()
        }
    }

    /// Card grids revealed one after another.
    pub fn stagger(delay_ms: u32) -> Self {
        Self {
            root_margin: RootMargin::bottom(-50.0),
            group_delay_ms: Some(delay_ms),
            ..Self::default()
        }
    }

    pub fn observe_options(&self) -> ObserveOptions {
        ObserveOptions {
            threshold: self.threshold,
            root_margin: self.root_margin,
        }
    }
}

pub struct ObservedElement<E> {
    element: E,
    reveal_index: usize,
    revealed: Cell<bool>,
}

impl<E> ObservedElement<E> {
    fn new(element: E, reveal_index: usize) -> Self {
        Self {
            element,
            reveal_index,
            revealed: Cell::new(false),
        }
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn reveal_index(&self) -> usize {
        self.reveal_index
    }

    pub fn has_been_revealed(&self) -> bool {
        self.revealed.get()
    }

    /// Latches the flag. Returns whether this call flipped it.
    fn latch(&self) -> bool {
        !self.revealed.replace(true)
    }
}

/// Delay of the member at `reveal_index`, saturating instead of wrapping.
fn stagger_delay(step_ms: u32, reveal_index: usize) -> u32 {
    let index = u32::try_from(reveal_index).unwrap_or(u32::MAX);
    step_ms.saturating_mul(index)
}

pub type RevealHook<E> = Rc<dyn Fn(&E)>;

pub struct RevealGroup<E> {
    members: Vec<ObservedElement<E>>,
    on_reveal: RevealHook<E>,
    observer: RefCell<Option<Disposer>>,
    pending: RefCell<Vec<Disposer>>,
    triggered: Cell<bool>,
    disposed: Cell<bool>,
}

impl<E: 'static> RevealGroup<E> {
    fn new(members: Vec<E>, on_reveal: RevealHook<E>) -> Self {
        Self {
            members: members
                .into_iter()
                .enumerate()
                .map(|(index, element)| ObservedElement::new(element, index))
                .collect(),
            on_reveal,
            observer: RefCell::new(None),
            pending: RefCell::new(Vec::new()),
            triggered: Cell::new(false),
            disposed: Cell::new(false),
        }
    }

    pub fn members(&self) -> &[ObservedElement<E>] {
        &self.members
    }

    fn reveal(&self, index: usize) {
        if self.disposed.get() {
            return;
        }
        if let Some(member) = self.members.get(index) {
            if member.latch() {
                trace!("Revealed member {}", index);
                (self.on_reveal)(&member.element);
            }
        }
    }

    fn trigger(self: &Rc<Self>, timer: &dyn Timer, group_delay_ms: Option<u32>) {
        if self.disposed.get() || self.triggered.replace(true) {
            return;
        }
        debug!(
            "Reveal group of {} triggered, step {:?}",
            self.members.len(),
            group_delay_ms
        );

        let Some(step) = group_delay_ms else {
            for index in 0..self.members.len() {
                self.reveal(index);
            }
            return;
        };

        for member in &self.members {
            let delay = stagger_delay(step, member.reveal_index);
            if delay == 0 {
                self.reveal(member.reveal_index);
                continue;
            }
            let group: Weak<Self> = Rc::downgrade(self);
            let index = member.reveal_index;
            let cancel = timer.after(
                delay,
                Box::new(move || {
                    if let Some(group) = group.upgrade() {
                        group.reveal(index);
                    }
                }),
            );
            self.pending.borrow_mut().push(cancel);
        }
    }

    fn dispose(&self) {
        if self.disposed.replace(true) {
            return;
        }
        let observer = self.observer.borrow_mut().take();
        if let Some(disconnect) = observer {
            disconnect();
        }
        let pending: Vec<Disposer> = self.pending.borrow_mut().drain(..).collect();
        for cancel in pending {
            cancel();
        }
    }
}

/// Returned by registration. Disposing (explicitly or by drop) stops
/// detection and cancels staggered reveals that have not happened yet;
/// members already revealed stay revealed.
pub struct RevealHandle<E: 'static> {
    group: Option<Rc<RevealGroup<E>>>,
}

impl<E: 'static> RevealHandle<E> {
    fn inert() -> Self {
        Self { group: None }
    }

    pub fn is_active(&self) -> bool {
        self.group.as_ref().map_or(false, |g| !g.disposed.get())
    }

    pub fn is_triggered(&self) -> bool {
        self.group.as_ref().map_or(false, |g| g.triggered.get())
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.group
            .as_ref()
            .and_then(|g| g.members.get(index))
            .map_or(false, ObservedElement::has_been_revealed)
    }

    pub fn revealed_count(&self) -> usize {
        self.group
            .as_ref()
            .map_or(0, |g| g.members.iter().filter(|m| m.has_been_revealed()).count())
    }

    pub fn dispose(&self) {
        if let Some(group) = &self.group {
            group.dispose();
        }
    }
}

impl<E: 'static> Drop for RevealHandle<E> {
    fn drop(&mut self) {
        self.dispose();
    }
}

pub struct RevealController<V: Viewport> {
    viewport: Rc<V>,
    timer: Rc<dyn Timer>,
    on_reveal: RevealHook<V::Element>,
}

impl<V: Viewport + 'static> RevealController<V> {
    pub fn new(viewport: Rc<V>, timer: Rc<dyn Timer>, on_reveal: RevealHook<V::Element>) -> Self {
        Self {
            viewport,
            timer,
            on_reveal,
        }
    }

    /// Reveals `element` once it crosses into view.
    pub fn register(&self, element: Option<V::Element>, options: RevealOptions) -> RevealHandle<V::Element> {
        match element {
            Some(element) => self.register_group(Some(element.clone()), vec![element], options),
            None => {
                debug!("Reveal target missing, skipping");
                RevealHandle::inert()
            }
        }
    }

    /// Reveals `members` in order once `container` crosses into view.
    pub fn register_group(
        &self,
        container: Option<V::Element>,
        members: Vec<V::Element>,
        options: RevealOptions,
    ) -> RevealHandle<V::Element> {
        let Some(container) = container else {
            debug!("Reveal container missing, skipping");
            return RevealHandle::inert();
        };

        let group = Rc::new(RevealGroup::new(members, Rc::clone(&self.on_reveal)));
        let weak = Rc::downgrade(&group);
        let timer = Rc::clone(&self.timer);
        let group_delay_ms = options.group_delay_ms;

        let disconnect = observe_once(&*self.viewport, &container, &options.observe_options(), move || {
            if let Some(group) = weak.upgrade() {
                group.trigger(&*timer, group_delay_ms);
            }
        });
        *group.observer.borrow_mut() = Some(disconnect);

        RevealHandle { group: Some(group) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::geometry::Rect;
    use crate::motion::testing::ManualTimer;
    use crate::motion::viewport::{ElementId, PolledViewport};

    struct Fixture {
        viewport: Rc<PolledViewport>,
        timer: ManualTimer,
        log: Rc<RefCell<Vec<(u32, u64)>>>,
        controller: RevealController<PolledViewport>,
    }

    fn fixture() -> Fixture {
        let viewport = Rc::new(PolledViewport::new(Rect::new(0.0, 0.0, 1000.0, 800.0)));
        let timer = ManualTimer::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let on_reveal: RevealHook<ElementId> = {
            let log = Rc::clone(&log);
            let clock = timer.clone();
            Rc::new(move |el: &ElementId| log.borrow_mut().push((el.0, clock.now())))
        };
        let controller = RevealController::new(Rc::clone(&viewport), Rc::new(timer.clone()), on_reveal);
        Fixture {
            viewport,
            timer,
            log,
            controller,
        }
    }

    #[test]
    fn reveals_single_element_once_when_scrolled_into_view() {
        let f = fixture();
        let el = ElementId(1);
        f.viewport.set_layout(el, Rect::new(0.0, 1000.0, 1000.0, 400.0));
        let handle = f.controller.register(Some(el), RevealOptions::default());

        f.viewport.poll();
        assert!(!handle.is_revealed(0));

        f.viewport.scroll_to(400.0);
        f.viewport.poll();
        assert!(handle.is_revealed(0));
        assert_eq!(f.viewport.observer_count(), 0);

        // leave and come back: still exactly one reveal
        f.viewport.scroll_to(0.0);
        f.viewport.poll();
        f.viewport.scroll_to(400.0);
        f.viewport.poll();
        assert!(handle.is_revealed(0));
        assert_eq!(f.log.borrow().len(), 1);
    }

    #[test]
    fn root_margin_holds_back_the_trigger() {
        let f = fixture();
        let el = ElementId(1);
        // 60px above the fold, inside the -100px band
        f.viewport.set_layout(el, Rect::new(0.0, 740.0, 1000.0, 400.0));
        let handle = f.controller.register(Some(el), RevealOptions::default());
        f.viewport.poll();
        assert!(!handle.is_revealed(0));

        f.viewport.scroll_by(200.0);
        f.viewport.poll();
        assert!(handle.is_revealed(0));
    }

    #[test]
    fn stagger_reveals_in_index_order_spaced_by_delay() {
        let f = fixture();
        let container = ElementId(100);
        f.viewport.set_layout(container, Rect::new(0.0, 100.0, 1000.0, 600.0));
        let members = vec![ElementId(10), ElementId(11), ElementId(12), ElementId(13)];
        let handle = f.controller.register_group(Some(container), members, RevealOptions::stagger(100));

        f.timer.advance(40);
        f.viewport.poll();
        assert_eq!(handle.revealed_count(), 1);

        f.timer.advance(1000);
        assert_eq!(
            *f.log.borrow(),
            vec![(10, 40), (11, 140), (12, 240), (13, 340)]
        );
        assert_eq!(handle.revealed_count(), 4);
    }

    #[test]
    fn dispose_cancels_pending_stagger_but_keeps_revealed() {
        let f = fixture();
        let container = ElementId(100);
        f.viewport.set_layout(container, Rect::new(0.0, 0.0, 100.0, 100.0));
        let handle = f.controller.register_group(
            Some(container),
            vec![ElementId(1), ElementId(2), ElementId(3)],
            RevealOptions::stagger(50),
        );
        f.viewport.poll();
        f.timer.advance(60);
        assert_eq!(handle.revealed_count(), 2);

        handle.dispose();
        handle.dispose();
        assert_eq!(f.timer.pending(), 0);
        f.timer.advance(500);
        assert_eq!(handle.revealed_count(), 2);
        assert!(handle.is_revealed(1));
        assert!(!handle.is_active());
    }

    #[test]
    fn dispose_before_trigger_disconnects_observer() {
        let f = fixture();
        let el = ElementId(5);
        f.viewport.set_layout(el, Rect::new(0.0, 2000.0, 100.0, 100.0));
        let handle = f.controller.register(Some(el), RevealOptions::default());
        assert_eq!(f.viewport.observer_count(), 1);

        drop(handle);
        assert_eq!(f.viewport.observer_count(), 0);
        f.viewport.scroll_to(1900.0);
        f.viewport.poll();
        assert!(f.log.borrow().is_empty());
    }

    #[test]
    fn missing_element_is_a_silent_noop() {
        let f = fixture();
        let handle = f.controller.register(None, RevealOptions::default());
        assert!(!handle.is_active());
        assert_eq!(handle.revealed_count(), 0);
        assert_eq!(f.viewport.observer_count(), 0);
        handle.dispose();

        let group = f.controller.register_group(None, vec![ElementId(1)], RevealOptions::stagger(10));
        assert!(!group.is_triggered());
    }

    #[test]
    fn group_without_delay_reveals_everything_at_trigger() {
        let f = fixture();
        let container = ElementId(50);
        f.viewport.set_layout(container, Rect::new(0.0, 0.0, 100.0, 100.0));
        let handle = f.controller.register_group(
            Some(container),
            vec![ElementId(1), ElementId(2)],
            RevealOptions::page(),
        );
        f.viewport.poll();
        assert!(handle.is_triggered());
        assert_eq!(handle.revealed_count(), 2);
        assert_eq!(f.timer.pending(), 0);
    }

    #[test]
    fn stagger_delay_saturates() {
        assert_eq!(stagger_delay(100, 0), 0);
        assert_eq!(stagger_delay(100, 5), 500);
        assert_eq!(stagger_delay(100, usize::MAX), u32::MAX);
        assert_eq!(stagger_delay(1, u32::MAX as usize), u32::MAX);
    }
}
