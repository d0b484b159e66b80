use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::prelude::*;

use super::subscription::Subscription;

/// Two-way flag tracking whether the page is scrolled past a fixed offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollToggle {
    threshold: f64,
    past: bool,
}

impl ScrollToggle {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            past: false,
        }
    }

    pub fn is_past(&self) -> bool {
        self.past
    }

    /// Returns `true` when `offset` moved the flag across the threshold.
    pub fn update(&mut self, offset: f64) -> bool {
        let past = offset > self.threshold;
        let crossed = past != self.past;
        self.past = past;
        crossed
    }
}

/// Calls `on_offset` with `scrollY` on every window `scroll` event until the
/// returned subscription is dropped.
pub fn listen_scroll(window: &Window, mut on_offset: impl FnMut(f64) + 'static) -> Result<Subscription, JsValue> {
    let scroll_window = window.clone();
    let scroll_callback = Closure::wrap(Box::new(move || {
        if let Ok(offset) = scroll_window.scroll_y() {
            on_offset(offset);
        }
    }) as Box<dyn FnMut()>);

    window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())?;

    let window = window.clone();
    Ok(Subscription::new(move || {
        if let Err(err) = window.remove_event_listener_with_callback(
            "scroll",
            scroll_callback.as_ref().unchecked_ref(),
        ) {
            warn!("failed to remove scroll listener: {:?}", err);
        }
    }))
}

/// Tracks `window.scrollY > threshold` for as long as the calling component is mounted.
#[hook]
pub fn use_scrolled_past(threshold: f64) -> bool {
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |threshold: &f64| {
                let toggle = Rc::new(RefCell::new(ScrollToggle::new(*threshold)));
                let mut subscription = None;

                if let Some(window) = web_sys::window() {
                    // Page may be restored mid-scroll.
                    if let Ok(offset) = window.scroll_y() {
                        if toggle.borrow_mut().update(offset) {
                            scrolled.set(toggle.borrow().is_past());
                        }
                    }

                    let listener_toggle = toggle.clone();
                    let listener_scrolled = scrolled.clone();
                    match listen_scroll(&window, move |offset| {
                        let crossed = listener_toggle.borrow_mut().update(offset);
                        if crossed {
                            listener_scrolled.set(listener_toggle.borrow().is_past());
                        }
                    }) {
                        Ok(sub) => subscription = Some(sub),
                        Err(err) => warn!("could not listen for scroll: {:?}", err),
                    }
                }

                move || drop(subscription)
            },
            threshold,
        );
    }

    *scrolled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NAV_SCROLL_THRESHOLD;

    #[test]
    fn stays_clear_at_threshold() {
        let mut toggle = ScrollToggle::new(NAV_SCROLL_THRESHOLD);
        assert!(!toggle.update(0.0));
        assert!(!toggle.update(50.0));
        assert!(!toggle.is_past());
    }

    #[test]
    fn flips_both_ways_on_repeated_crossings() {
        let mut toggle = ScrollToggle::new(NAV_SCROLL_THRESHOLD);
        for _ in 0..3 {
            assert!(toggle.update(51.0));
            assert!(toggle.is_past());
            assert!(!toggle.update(400.0));
            assert!(toggle.is_past());
            assert!(toggle.update(50.0));
            assert!(!toggle.is_past());
            assert!(!toggle.update(12.0));
        }
    }
}
