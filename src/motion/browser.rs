//! Browser-backed implementations of the timer and viewport primitives.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::error::{MotionError, Result};
use super::geometry::entry_crosses;
use super::reveal::{RevealController, RevealHook};
use super::timer::{self, Disposer, Timer};
use super::viewport::{ObserveOptions, Viewport};

/// Class the stylesheet keys the reveal transitions on.
pub const VISIBLE_CLASS: &str = "is-visible";

pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Disposer {
        let timeout = Timeout::new(delay_ms, callback);
        // dropping a gloo Timeout clears it
        Box::new(move || drop(timeout))
    }
}

/// `IntersectionObserver`, one observer per observed element.
pub struct BrowserViewport;

impl BrowserViewport {
    pub fn new() -> Result<Self> {
        let window = web_sys::window().ok_or(MotionError::NoWindow)?;
        let supported = Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
        if !supported {
            return Err(MotionError::PrimitiveUnavailable("IntersectionObserver"));
        }
        Ok(Self)
    }

    fn connect(
        element: &Element,
        options: &ObserveOptions,
        mut on_change: Box<dyn FnMut(bool)>,
    ) -> Result<Disposer> {
        let threshold = options.threshold;
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        on_change(entry_crosses(
                            entry.is_intersecting(),
                            entry.intersection_ratio(),
                            threshold,
                        ));
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin.to_string());

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(element);

        Ok(Box::new(move || {
            observer.disconnect();
            drop(callback);
        }))
    }
}

impl Viewport for BrowserViewport {
    type Element = Element;

    fn observe(
        &self,
        element: &Element,
        options: &ObserveOptions,
        on_change: Box<dyn FnMut(bool)>,
    ) -> Disposer {
        match Self::connect(element, options, on_change) {
            Ok(disposer) => disposer,
            Err(err) => {
                warn!("Failed to observe element: {}", err);
                timer::noop()
            }
        }
    }
}

pub fn mark_visible(element: &Element) {
    if let Err(err) = element.class_list().add_1(VISIBLE_CLASS) {
        warn!("Failed to add visible class: {:?}", err);
    }
}

impl RevealController<BrowserViewport> {
    /// Controller that toggles [`VISIBLE_CLASS`] on revealed elements.
    pub fn browser() -> Result<Self> {
        let viewport = BrowserViewport::new()?;
        let on_reveal: RevealHook<Element> = Rc::new(mark_visible);
        Ok(Self::new(Rc::new(viewport), Rc::new(BrowserTimer), on_reveal))
    }
}
