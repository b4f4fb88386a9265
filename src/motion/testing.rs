//! Deterministic virtual clock for driving the motion mechanisms in tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::timer::{Disposer, Timer};

struct Scheduled {
    id: u64,
    due: u64,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Clock {
    now: Cell<u64>,
    next_id: Cell<u64>,
    queue: RefCell<Vec<Scheduled>>,
    fired: Cell<usize>,
}

/// A [`Timer`] whose time only moves when the test calls
/// [`advance`](Self::advance). Callbacks due at the same instant run in the
/// order they were scheduled.
#[derive(Clone, Default)]
pub struct ManualTimer {
    clock: Rc<Clock>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.clock.now.get()
    }

    pub fn pending(&self) -> usize {
        self.clock.queue.borrow().len()
    }

    /// Total callbacks run so far.
    pub fn fired(&self) -> usize {
        self.clock.fired.get()
    }

    /// Moves time forward by `ms`, running everything that falls due,
    /// including callbacks scheduled by callbacks.
    pub fn advance(&self, ms: u64) {
        let target = self.now() + ms;
        loop {
            let next = {
                let mut queue = self.clock.queue.borrow_mut();
                let earliest = queue
                    .iter()
                    .enumerate()
                    .filter(|(_, s)| s.due <= target)
                    .min_by_key(|(_, s)| (s.due, s.id))
                    .map(|(index, _)| index);
                earliest.map(|index| queue.remove(index))
            };
            match next {
                Some(scheduled) => {
                    self.clock.now.set(scheduled.due);
                    self.clock.fired.set(self.clock.fired.get() + 1);
                    (scheduled.callback)();
                }
                None => break,
            }
        }
        self.clock.now.set(target);
    }
}

impl Timer for ManualTimer {
    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Disposer {
        let id = self.clock.next_id.get();
        self.clock.next_id.set(id + 1);
        self.clock.queue.borrow_mut().push(Scheduled {
            id,
            due: self.now() + u64::from(delay_ms),
            callback,
        });

        let clock = Rc::downgrade(&self.clock);
        Box::new(move || {
            if let Some(clock) = clock.upgrade() {
                clock.queue.borrow_mut().retain(|s| s.id != id);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_callbacks_in_due_order() {
        let timer = ManualTimer::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (delay, tag) in [(30, "c"), (10, "a"), (10, "b")] {
            let log = Rc::clone(&log);
            let _ = timer.after(delay, Box::new(move || log.borrow_mut().push(tag)));
        }
        timer.advance(20);
        assert_eq!(*log.borrow(), vec!["a", "b"]);
        timer.advance(20);
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
        assert_eq!(timer.now(), 40);
    }

    #[test]
    fn cancelled_callbacks_never_run() {
        let timer = ManualTimer::new();
        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);
        let cancel = timer.after(5, Box::new(move || flag.set(true)));
        cancel();
        timer.advance(100);
        assert!(!ran.get());
        assert_eq!(timer.pending(), 0);
    }
}
