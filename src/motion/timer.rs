/// Cancels whatever it was returned for. Calling it after the work already
/// happened is harmless.
pub type Disposer = Box<dyn FnOnce()>;

/// One-shot timer primitive: run `callback` once after `delay_ms`.
///
/// Periodic behaviour (autoplay ticks, count-up steps) is built by re-arming
/// from inside the callback, so a tick can never start before the previous
/// one returned.
pub trait Timer {
    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Disposer;
}

/// A disposer that does nothing, for registrations that never armed anything.
pub fn noop() -> Disposer {
    Box::new(|| ())
}
