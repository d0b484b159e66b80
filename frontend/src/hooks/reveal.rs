use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::subscription::Subscription;
use crate::config::REVEAL_THRESHOLD;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    Hidden,
    Shown,
}

/// One intersection report for the observed element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Observation {
    pub intersecting: bool,
    pub ratio: f64,
}

impl Observation {
    fn reaches(&self, threshold: f64) -> bool {
        self.intersecting && self.ratio >= threshold
    }
}

impl From<&IntersectionObserverEntry> for Observation {
    fn from(entry: &IntersectionObserverEntry) -> Self {
        Self {
            intersecting: entry.is_intersecting(),
            ratio: entry.intersection_ratio(),
        }
    }
}

/// One-shot latch behind every section's entrance animation.
///
/// Starts `Hidden`, flips to `Shown` on the first observation that reaches the
/// threshold and releases its subscription at that moment. Once released,
/// either by firing or by [`RevealController::detach`], later observations are
/// ignored.
pub struct RevealController {
    state: Reveal,
    threshold: f64,
    subscription: Option<Subscription>,
    released: bool,
}

impl RevealController {
    pub fn new(threshold: f64) -> Self {
        Self {
            state: Reveal::Hidden,
            threshold,
            subscription: None,
            released: false,
        }
    }

    pub fn state(&self) -> Reveal {
        self.state
    }

    pub fn is_observing(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn attach(&mut self, subscription: Subscription) {
        if self.released {
            subscription.unsubscribe();
            return;
        }
        self.subscription = Some(subscription);
    }

    /// Feeds one observation in. Returns `true` only for the call that flips the latch.
    pub fn observe(&mut self, observation: Observation) -> bool {
        if self.released || !observation.reaches(self.threshold) {
            return false;
        }
        self.state = Reveal::Shown;
        self.release();
        true
    }

    pub fn detach(&mut self) {
        self.release();
    }

    fn release(&mut self) {
        self.released = true;
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}

pub type EntriesCallback = Closure<dyn FnMut(Array)>;

/// Starts observing `target`. Dropping the subscription disconnects the observer.
///
/// The JS callback is handed back separately so it can outlive a disconnect
/// issued from inside that same callback. Drop it only after the subscription.
pub fn observe_intersection(
    target: &Element,
    threshold: f64,
    mut on_observation: impl FnMut(Observation) + 'static,
) -> Result<(Subscription, EntriesCallback), JsValue> {
    let callback = Closure::wrap(Box::new(move |entries: Array| {
        for entry in entries.iter() {
            if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                on_observation(Observation::from(&entry));
            }
        }
    }) as Box<dyn FnMut(Array)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(target);

    Ok((Subscription::new(move || observer.disconnect()), callback))
}

/// Returns `true` once the element behind `target` has been at least
/// [`REVEAL_THRESHOLD`] on screen, and stays `true` for the life of the component.
///
/// Without `IntersectionObserver` the section simply stays hidden.
#[hook]
pub fn use_reveal(target: NodeRef) -> bool {
    let state = use_state_eq(Reveal::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |target: &NodeRef| {
                let controller = Rc::new(RefCell::new(RevealController::new(REVEAL_THRESHOLD)));
                let mut entries_callback = None;

                match target.cast::<Element>() {
                    Some(element) => {
                        let section = element.id();
                        let latch = controller.clone();
                        let watched =
                            observe_intersection(&element, REVEAL_THRESHOLD, move |observation| {
                                let fired = latch.borrow_mut().observe(observation);
                                if fired {
                                    debug!("revealing #{} at ratio {:.2}", section, observation.ratio);
                                    state.set(latch.borrow().state());
                                }
                            });
                        match watched {
                            Ok((subscription, callback)) => {
                                controller.borrow_mut().attach(subscription);
                                entries_callback = Some(callback);
                            }
                            Err(err) => {
                                warn!("IntersectionObserver unavailable, #{} stays hidden: {:?}", element.id(), err)
                            }
                        }
                    }
                    None => warn!("reveal target not mounted"),
                }

                move || {
                    if controller.borrow().is_observing() {
                        debug!("section unmounted before it was revealed");
                    }
                    controller.borrow_mut().detach();
                    drop(entries_callback);
                }
            },
            target,
        );
    }

    *state == Reveal::Shown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::subscription::tests::counting;

    fn seen(ratio: f64) -> Observation {
        Observation {
            intersecting: ratio > 0.0,
            ratio,
        }
    }

    #[test]
    fn starts_hidden() {
        let controller = RevealController::new(REVEAL_THRESHOLD);
        assert_eq!(controller.state(), Reveal::Hidden);
        assert!(!controller.is_observing());
    }

    #[test]
    fn ignores_observations_below_threshold() {
        let (sub, released) = counting();
        let mut controller = RevealController::new(REVEAL_THRESHOLD);
        controller.attach(sub);

        assert!(!controller.observe(seen(0.0)));
        assert!(!controller.observe(seen(0.05)));
        assert!(!controller.observe(Observation { intersecting: false, ratio: 0.4 }));

        assert_eq!(controller.state(), Reveal::Hidden);
        assert!(controller.is_observing());
        assert_eq!(released.get(), 0);
    }

    #[test]
    fn flips_once_and_disengages() {
        let (sub, released) = counting();
        let mut controller = RevealController::new(REVEAL_THRESHOLD);
        controller.attach(sub);

        assert!(controller.observe(seen(0.1)));
        assert_eq!(controller.state(), Reveal::Shown);
        assert!(!controller.is_observing());
        assert_eq!(released.get(), 1);

        // Further reports change nothing and do not tear down again.
        assert!(!controller.observe(seen(0.9)));
        assert!(!controller.observe(seen(0.0)));
        assert_eq!(controller.state(), Reveal::Shown);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn statistics_section_reveals_at_half_visible() {
        let (sub, _released) = counting();
        let mut controller = RevealController::new(REVEAL_THRESHOLD);
        controller.attach(sub);
        assert!(controller.observe(seen(0.5)));
        assert_eq!(controller.state(), Reveal::Shown);
    }

    #[test]
    fn detach_before_trigger_releases_observer() {
        let (sub, released) = counting();
        let mut controller = RevealController::new(REVEAL_THRESHOLD);
        controller.attach(sub);

        controller.detach();
        assert_eq!(released.get(), 1);
        assert!(!controller.is_observing());

        // A late report after unmount must not flip anything.
        assert!(!controller.observe(seen(1.0)));
        assert_eq!(controller.state(), Reveal::Hidden);

        controller.detach();
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn attach_after_release_unsubscribes_immediately() {
        let mut controller = RevealController::new(REVEAL_THRESHOLD);
        controller.detach();

        let (sub, released) = counting();
        controller.attach(sub);
        assert_eq!(released.get(), 1);
        assert!(!controller.is_observing());
    }
}
