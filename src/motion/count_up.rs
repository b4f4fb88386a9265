use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::debug;

use super::timer::{Disposer, Timer};
use super::viewport::{observe_once, ObserveOptions, Viewport};

/// Roughly one display refresh.
pub const DEFAULT_TICK_MS: u32 = 16;

struct Inner {
    timer: Rc<dyn Timer>,
    target: u32,
    duration_ms: u32,
    tick_ms: Cell<u32>,
    accumulator: Cell<f64>,
    value: Cell<u32>,
    has_started: Cell<bool>,
    finished: Cell<bool>,
    disposed: Cell<bool>,
    ticks: Cell<u32>,
    live: RefCell<Option<Disposer>>,
    observer: RefCell<Option<Disposer>>,
    on_change: RefCell<Option<Box<dyn FnMut(u32)>>>,
}

impl Inner {
    fn increment(&self) -> f64 {
        let steps = f64::from(self.duration_ms) / f64::from(self.tick_ms.get().max(1));
        f64::from(self.target) / steps
    }

    fn show(&self, value: u32) {
        if self.value.replace(value) == value {
            return;
        }
        let callback = self.on_change.borrow_mut().take();
        if let Some(mut callback) = callback {
            callback(value);
            let mut slot = self.on_change.borrow_mut();
            if slot.is_none() && !self.disposed.get() {
                *slot = Some(callback);
            }
        }
    }

    fn finish(&self) {
        self.finished.set(true);
        self.show(self.target);
        debug!("Count-up to {} finished after {} ticks", self.target, self.ticks.get());
    }

    fn schedule(self: &Rc<Self>) {
        let weak: Weak<Self> = Rc::downgrade(self);
        let cancel = self.timer.after(
            self.tick_ms.get(),
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.step();
                }
            }),
        );
        *self.live.borrow_mut() = Some(cancel);
    }

    fn start(self: &Rc<Self>) {
        if self.disposed.get() || self.has_started.replace(true) {
            return;
        }
        debug!("Count-up to {} started over {}ms", self.target, self.duration_ms);
        if self.target == 0 || self.duration_ms == 0 {
            self.finish();
            return;
        }
        self.schedule();
    }

    fn step(self: &Rc<Self>) {
        self.live.borrow_mut().take();
        if self.disposed.get() || self.finished.get() {
            return;
        }
        self.ticks.set(self.ticks.get() + 1);

        let accumulated = self.accumulator.get() + self.increment();
        self.accumulator.set(accumulated);
        if accumulated >= f64::from(self.target) {
            self.finish();
            return;
        }
        self.show(accumulated.floor() as u32);
        self.schedule();
    }
}

/// Counts a displayed integer from 0 up to `target` over `duration_ms`,
/// once per lifetime.
pub struct CountUp {
    inner: Rc<Inner>,
}

impl CountUp {
    pub fn new(timer: Rc<dyn Timer>, target: u32, duration_ms: u32) -> Self {
        Self {
            inner: Rc::new(Inner {
                timer,
                target,
                duration_ms,
                tick_ms: Cell::new(DEFAULT_TICK_MS),
                accumulator: Cell::new(0.0),
                value: Cell::new(0),
                has_started: Cell::new(false),
                finished: Cell::new(false),
                disposed: Cell::new(false),
                ticks: Cell::new(0),
                live: RefCell::new(None),
                observer: RefCell::new(None),
                on_change: RefCell::new(None),
            }),
        }
    }

    pub fn with_tick_ms(self, tick_ms: u32) -> Self {
        self.inner.tick_ms.set(tick_ms.max(1));
        self
    }

    /// Called with every new displayed value.
    pub fn on_change(&self, callback: impl FnMut(u32) + 'static) {
        *self.inner.on_change.borrow_mut() = Some(Box::new(callback));
    }

    pub fn value(&self) -> u32 {
        self.inner.value.get()
    }

    pub fn target(&self) -> u32 {
        self.inner.target
    }

    pub fn has_started(&self) -> bool {
        self.inner.has_started.get()
    }

    pub fn is_finished(&self) -> bool {
        self.inner.finished.get()
    }

    pub fn ticks(&self) -> u32 {
        self.inner.ticks.get()
    }

    /// Begins counting. Only the first call does anything.
    pub fn start(&self) {
        self.inner.start();
    }

    /// Starts counting the first time `element` enters the viewport.
    pub fn attach<V>(&self, viewport: &V, element: Option<&V::Element>, options: &ObserveOptions)
    where
        V: Viewport + ?Sized,
    {
        let Some(element) = element else {
            debug!("Count-up target missing, skipping");
            return;
        };
        if self.has_started() || self.inner.disposed.get() {
            return;
        }

        let weak = Rc::downgrade(&self.inner);
        let disconnect = observe_once(viewport, element, options, move || {
            if let Some(inner) = weak.upgrade() {
                inner.start();
            }
        });
        if let Some(previous) = self.inner.observer.replace(Some(disconnect)) {
            previous();
        }
    }

    pub fn dispose(&self) {
        let inner = &self.inner;
        if inner.disposed.replace(true) {
            return;
        }
        let observer = inner.observer.borrow_mut().take();
        if let Some(disconnect) = observer {
            disconnect();
        }
        let live = inner.live.borrow_mut().take();
        if let Some(cancel) = live {
            cancel();
        }
        inner.on_change.borrow_mut().take();
    }
}

impl Drop for CountUp {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::geometry::Rect;
    use crate::motion::testing::ManualTimer;
    use crate::motion::viewport::{ElementId, PolledViewport};

    fn recorded(count_up: &CountUp) -> Rc<RefCell<Vec<u32>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        count_up.on_change(move |v| sink.borrow_mut().push(v));
        seen
    }

    #[test]
    fn counts_to_exact_target_monotonically() {
        let timer = ManualTimer::new();
        let count_up = CountUp::new(Rc::new(timer.clone()), 2000, 2000);
        let seen = recorded(&count_up);
        assert_eq!(count_up.value(), 0);

        count_up.start();
        timer.advance(10_000);

        assert!(count_up.is_finished());
        assert_eq!(count_up.value(), 2000);
        assert_eq!(*seen.borrow().last().unwrap(), 2000);
        assert!(seen.borrow().windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(count_up.ticks(), 125);
        assert_eq!(timer.pending(), 0);
    }

    #[test]
    fn uneven_increment_clamps_instead_of_overshooting() {
        let timer = ManualTimer::new();
        let count_up = CountUp::new(Rc::new(timer.clone()), 7, 100);
        let seen = recorded(&count_up);
        count_up.start();
        timer.advance(1000);
        assert_eq!(count_up.value(), 7);
        assert!(seen.borrow().iter().all(|&v| v <= 7));
    }

    #[test]
    fn zero_target_shows_zero_without_ticking() {
        let timer = ManualTimer::new();
        let count_up = CountUp::new(Rc::new(timer.clone()), 0, 2000);
        count_up.start();
        assert!(count_up.is_finished());
        assert_eq!(count_up.value(), 0);
        assert_eq!(count_up.ticks(), 0);
        assert_eq!(timer.pending(), 0);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let timer = ManualTimer::new();
        let count_up = CountUp::new(Rc::new(timer.clone()), 15, 0);
        count_up.start();
        assert_eq!(count_up.value(), 15);
        assert_eq!(timer.pending(), 0);
    }

    #[test]
    fn starts_on_first_visibility_only() {
        let timer = ManualTimer::new();
        let viewport = PolledViewport::new(Rect::new(0.0, 0.0, 1000.0, 800.0));
        let el = ElementId(3);
        viewport.set_layout(el, Rect::new(0.0, 1000.0, 200.0, 100.0));

        let count_up = CountUp::new(Rc::new(timer.clone()), 500, 1000);
        let half = ObserveOptions {
            threshold: 0.5,
            ..ObserveOptions::default()
        };
        count_up.attach(&viewport, Some(&el), &half);
        viewport.poll();
        assert!(!count_up.has_started());

        viewport.scroll_to(300.0);
        viewport.poll();
        assert!(count_up.has_started());
        timer.advance(5000);
        assert_eq!(count_up.value(), 500);
        let ticks = count_up.ticks();

        viewport.scroll_to(0.0);
        viewport.poll();
        viewport.scroll_to(300.0);
        viewport.poll();
        count_up.start();
        timer.advance(5000);
        assert_eq!(count_up.ticks(), ticks);
        assert_eq!(timer.fired(), ticks as usize);
    }

    #[test]
    fn dispose_mid_count_freezes_value() {
        let timer = ManualTimer::new();
        let count_up = CountUp::new(Rc::new(timer.clone()), 2000, 2000);
        count_up.start();
        timer.advance(160);
        let frozen = count_up.value();
        assert_eq!(frozen, 160);

        count_up.dispose();
        count_up.dispose();
        timer.advance(5000);
        assert_eq!(count_up.value(), frozen);
        assert_eq!(timer.pending(), 0);
    }

    #[test]
    fn missing_element_never_starts() {
        let timer = ManualTimer::new();
        let viewport = PolledViewport::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        let count_up = CountUp::new(Rc::new(timer), 10, 100);
        count_up.attach(&viewport, None, &ObserveOptions::default());
        assert_eq!(viewport.observer_count(), 0);
        assert!(!count_up.has_started());
    }
}
