use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::scope::use_effect_scope;
use crate::config;

// Browsers report the crossing ratio a hair under the requested threshold.
const RATIO_TOLERANCE: f64 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    None,
    Reveal,
    RevealAndUnobserve,
}

/// Visibility of one observed element. Once visible it stays visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealState {
    visible: bool,
    observing: bool,
    once: bool,
}

impl RevealState {
    pub fn new(once: bool) -> Self {
        Self {
            visible: false,
            observing: true,
            once,
        }
    }

    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[cfg(test)]
    pub fn is_observing(&self) -> bool {
        self.observing
    }

    pub fn on_intersection(&mut self, intersecting: bool, ratio: f64, threshold: f64) -> RevealAction {
        if !self.observing || self.visible || !intersecting {
            return RevealAction::None;
        }
        if ratio + RATIO_TOLERANCE < threshold {
            return RevealAction::None;
        }
        self.visible = true;
        if self.once {
            self.observing = false;
            RevealAction::RevealAndUnobserve
        } else {
            RevealAction::Reveal
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub once: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: config::REVEAL_THRESHOLD,
            once: true,
        }
    }
}

pub fn reveal_class(visible: bool) -> &'static str {
    if visible {
        "reveal is-visible"
    } else {
        "reveal"
    }
}

struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    use_reveal_with(node, RevealOptions::default())
}

/// Tracks whether the element behind `node` has scrolled into view.
#[hook]
pub fn use_reveal_with(node: NodeRef, options: RevealOptions) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.setter();
        use_effect_scope((node, options), move |scope, (node, options)| {
            let Some(element) = node.cast::<Element>() else {
                return;
            };
            let state = Rc::new(RefCell::new(RevealState::new(options.once)));
            let threshold = options.threshold;
            let handle = scope.handle();

            let on_change = {
                let visible = visible.clone();
                Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                    if !handle.is_alive() {
                        return;
                    }
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        let action = state.borrow_mut().on_intersection(
                            entry.is_intersecting(),
                            entry.intersection_ratio(),
                            threshold,
                        );
                        match action {
                            RevealAction::None => {}
                            RevealAction::Reveal => visible.set(true),
                            RevealAction::RevealAndUnobserve => {
                                observer.unobserve(&entry.target());
                                visible.set(true);
                            }
                        }
                    }
                }) as Box<dyn FnMut(Array, IntersectionObserver)>)
            };

            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(threshold));
            match IntersectionObserver::new_with_options(on_change.as_ref().unchecked_ref(), &init) {
                Ok(observer) => {
                    observer.observe(&element);
                    scope.hold(ObserverGuard {
                        observer,
                        _callback: on_change,
                    });
                }
                Err(err) => {
                    warn!("IntersectionObserver unavailable, showing content: {:?}", err);
                    visible.set(true);
                }
            }
        });
    }

    *visible
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_hidden_below_threshold() {
        let mut state = RevealState::new(true);
        assert_eq!(state.on_intersection(true, 0.02, 0.1), RevealAction::None);
        assert_eq!(state.on_intersection(false, 0.0, 0.1), RevealAction::None);
        assert!(!state.is_visible());
        assert!(state.is_observing());
    }

    #[test]
    fn once_mode_unobserves_after_first_reveal() {
        let mut state = RevealState::new(true);
        assert_eq!(state.on_intersection(true, 0.1, 0.1), RevealAction::RevealAndUnobserve);
        assert!(state.is_visible());
        assert!(!state.is_observing());

        // leaving and re-entering the viewport changes nothing
        assert_eq!(state.on_intersection(false, 0.0, 0.1), RevealAction::None);
        assert_eq!(state.on_intersection(true, 0.8, 0.1), RevealAction::None);
        assert!(state.is_visible());
    }

    #[test]
    fn persistent_mode_reveals_once_and_keeps_observing() {
        let mut state = RevealState::new(false);
        assert_eq!(state.on_intersection(true, 0.5, 0.1), RevealAction::Reveal);
        assert!(state.is_observing());
        assert_eq!(state.on_intersection(true, 0.9, 0.1), RevealAction::None);
        assert!(state.is_visible());
    }

    #[test]
    fn ratio_just_under_threshold_counts_as_crossing() {
        let mut state = RevealState::new(true);
        assert_eq!(
            state.on_intersection(true, 0.0995, 0.1),
            RevealAction::RevealAndUnobserve
        );
    }

    #[test]
    fn default_options_reveal_once_at_a_tenth() {
        let options = RevealOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert!(options.once);

        let mut state = RevealState::new(options.once);
        assert_eq!(state.on_intersection(true, 0.05, options.threshold), RevealAction::None);
        assert_eq!(
            state.on_intersection(true, 0.1, options.threshold),
            RevealAction::RevealAndUnobserve
        );
    }

    #[test]
    fn class_tracks_visibility() {
        assert_eq!(reveal_class(false), "reveal");
        assert_eq!(reveal_class(true), "reveal is-visible");
    }
}
