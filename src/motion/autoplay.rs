use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, trace};

use super::timer::{Disposer, Timer};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutoplayState {
    Idle,
    Running,
    Paused,
    Stopped,
}

struct Inner {
    timer: Rc<dyn Timer>,
    state: Cell<AutoplayState>,
    interval_ms: Cell<u32>,
    advance: RefCell<Option<Box<dyn FnMut()>>>,
    live: RefCell<Option<Disposer>>,
    ticks: Cell<u64>,
}

impl Inner {
    fn arm(self: &Rc<Self>) {
        let weak: Weak<Self> = Rc::downgrade(self);
        let cancel = self.timer.after(
            self.interval_ms.get(),
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.tick();
                }
            }),
        );
        if let Some(previous) = self.live.replace(Some(cancel)) {
            previous();
        }
    }

    fn disarm(&self) {
        let live = self.live.borrow_mut().take();
        if let Some(cancel) = live {
            cancel();
        }
    }

    fn tick(self: &Rc<Self>) {
        // the timer that got us here has fired; forget its handle
        self.live.borrow_mut().take();
        if self.state.get() != AutoplayState::Running {
            return;
        }

        // taken out so `advance` may call back into pause/stop
        let advance = self.advance.borrow_mut().take();
        if let Some(mut advance) = advance {
            self.ticks.set(self.ticks.get() + 1);
            trace!("Autoplay advance #{}", self.ticks.get());
            advance();
            if self.state.get() != AutoplayState::Stopped {
                *self.advance.borrow_mut() = Some(advance);
            }
        }

        if self.state.get() == AutoplayState::Running {
            self.arm();
        }
    }
}

/// Drives a carousel forward on a fixed interval.
///
/// States move `Idle -> Running <-> Paused`, and anything `-> Stopped`.
/// Resuming arms a fresh full interval; progress made before a pause is
/// dropped rather than credited. Wrapping the slide index is the job of the
/// `advance` callback.
pub struct CarouselAutoplay {
    inner: Rc<Inner>,
}

impl CarouselAutoplay {
    pub fn new(timer: Rc<dyn Timer>) -> Self {
        Self {
            inner: Rc::new(Inner {
                timer,
                state: Cell::new(AutoplayState::Idle),
                interval_ms: Cell::new(0),
                advance: RefCell::new(None),
                live: RefCell::new(None),
                ticks: Cell::new(0),
            }),
        }
    }

    pub fn state(&self) -> AutoplayState {
        self.inner.state.get()
    }

    pub fn is_paused(&self) -> bool {
        self.state() == AutoplayState::Paused
    }

    /// Number of times `advance` has been invoked.
    pub fn ticks(&self) -> u64 {
        self.inner.ticks.get()
    }

    pub fn start(&self, interval_ms: u32, advance: impl FnMut() + 'static) {
        if self.state() != AutoplayState::Idle {
            debug!("Autoplay already {:?}, ignoring start", self.state());
            return;
        }
        // a zero interval would re-arm on every turn of the event loop
        let interval_ms = interval_ms.max(1);
        debug!("Autoplay started, every {}ms", interval_ms);
        self.inner.interval_ms.set(interval_ms);
        *self.inner.advance.borrow_mut() = Some(Box::new(advance));
        self.inner.state.set(AutoplayState::Running);
        self.inner.arm();
    }

    pub fn pause(&self) {
        if self.state() != AutoplayState::Running {
            return;
        }
        trace!("Autoplay paused");
        self.inner.state.set(AutoplayState::Paused);
        self.inner.disarm();
    }

    pub fn resume(&self) {
        if self.state() != AutoplayState::Paused {
            return;
        }
        trace!("Autoplay resumed");
        self.inner.state.set(AutoplayState::Running);
        self.inner.arm();
    }

    pub fn pointer_enter(&self) {
        self.pause();
    }

    pub fn pointer_leave(&self) {
        self.resume();
    }

    pub fn stop(&self) {
        if self.inner.state.replace(AutoplayState::Stopped) == AutoplayState::Stopped {
            return;
        }
        debug!("Autoplay stopped after {} ticks", self.ticks());
        self.inner.disarm();
        self.inner.advance.borrow_mut().take();
    }
}

impl Drop for CarouselAutoplay {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::slides::SlideIndex;
    use crate::motion::testing::ManualTimer;

    fn recording(timer: &ManualTimer) -> (CarouselAutoplay, Rc<RefCell<Vec<u64>>>) {
        let autoplay = CarouselAutoplay::new(Rc::new(timer.clone()));
        let at = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&at);
        let clock = timer.clone();
        autoplay.start(8000, move || sink.borrow_mut().push(clock.now()));
        (autoplay, at)
    }

    #[test]
    fn zero_interval_is_clamped_to_one_millisecond() {
        let timer = ManualTimer::new();
        let autoplay = CarouselAutoplay::new(Rc::new(timer.clone()));
        let count = Rc::new(Cell::new(0u32));
        let sink = Rc::clone(&count);
        autoplay.start(0, move || sink.set(sink.get() + 1));

        timer.advance(0);
        assert_eq!(count.get(), 0);
        assert_eq!(timer.pending(), 1);

        timer.advance(10);
        assert_eq!(count.get(), 10);
        assert_eq!(autoplay.ticks(), 10);
    }

    #[test]
    fn ticks_every_interval() {
        let timer = ManualTimer::new();
        let (autoplay, at) = recording(&timer);
        timer.advance(7999);
        assert!(at.borrow().is_empty());
        timer.advance(16_001);
        assert_eq!(*at.borrow(), vec![8000, 16000, 24000]);
        assert_eq!(autoplay.ticks(), 3);
        assert_eq!(timer.pending(), 1);
    }

    #[test]
    fn pause_suppresses_ticks_and_resume_restarts_full_interval() {
        let timer = ManualTimer::new();
        let (autoplay, at) = recording(&timer);

        timer.advance(5000);
        autoplay.pointer_enter();
        assert!(autoplay.is_paused());
        assert_eq!(timer.pending(), 0);

        timer.advance(20_000);
        assert!(at.borrow().is_empty());

        // t2 = 25000; nothing before t2 + T
        autoplay.pointer_leave();
        timer.advance(7999);
        assert!(at.borrow().is_empty());
        timer.advance(1);
        assert_eq!(*at.borrow(), vec![33_000]);
    }

    #[test]
    fn hover_events_are_level_triggered() {
        let timer = ManualTimer::new();
        let (autoplay, at) = recording(&timer);

        autoplay.pointer_enter();
        autoplay.pointer_enter();
        timer.advance(3000);
        autoplay.pointer_leave();
        timer.advance(4000);
        // a second leave must not reset the running interval
        autoplay.pointer_leave();
        assert_eq!(timer.pending(), 1);
        timer.advance(4000);
        assert_eq!(*at.borrow(), vec![11_000]);
    }

    #[test]
    fn stop_is_final_and_idempotent() {
        let timer = ManualTimer::new();
        let (autoplay, at) = recording(&timer);
        timer.advance(8000);
        autoplay.stop();
        autoplay.stop();
        assert_eq!(timer.pending(), 0);

        autoplay.resume();
        autoplay.start(10, || {});
        timer.advance(100_000);
        assert_eq!(at.borrow().len(), 1);
        assert_eq!(autoplay.state(), AutoplayState::Stopped);
    }

    #[test]
    fn stop_without_start_is_safe() {
        let timer = ManualTimer::new();
        let autoplay = CarouselAutoplay::new(Rc::new(timer.clone()));
        autoplay.pause();
        autoplay.stop();
        assert_eq!(autoplay.state(), AutoplayState::Stopped);
        assert_eq!(timer.fired(), 0);
    }

    #[test]
    fn drop_cancels_live_timer() {
        let timer = ManualTimer::new();
        let (autoplay, at) = recording(&timer);
        drop(autoplay);
        assert_eq!(timer.pending(), 0);
        timer.advance(50_000);
        assert!(at.borrow().is_empty());
    }

    #[test]
    fn advance_may_stop_the_autoplay() {
        let timer = ManualTimer::new();
        let autoplay = Rc::new(CarouselAutoplay::new(Rc::new(timer.clone())));
        let handle = Rc::downgrade(&autoplay);
        autoplay.start(100, move || {
            if let Some(autoplay) = handle.upgrade() {
                autoplay.stop();
            }
        });
        timer.advance(1000);
        assert_eq!(autoplay.ticks(), 1);
        assert_eq!(autoplay.state(), AutoplayState::Stopped);
        assert_eq!(timer.pending(), 0);
    }

    #[test]
    fn drives_a_looping_slide_index() {
        let timer = ManualTimer::new();
        let slides = Rc::new(RefCell::new(SlideIndex::new(3).unwrap()));
        let autoplay = CarouselAutoplay::new(Rc::new(timer.clone()));
        let target = Rc::clone(&slides);
        autoplay.start(8000, move || target.borrow_mut().next());

        let mut seen = Vec::new();
        for _ in 0..4 {
            timer.advance(8000);
            seen.push(slides.borrow().current());
        }
        assert_eq!(seen, vec![1, 2, 0, 1]);
    }
}
