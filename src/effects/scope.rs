use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gloo_timers::callback::{Interval, Timeout};
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};
use yew::prelude::*;

struct ScopeInner {
    alive: Cell<bool>,
    guards: RefCell<Vec<Box<dyn Any>>>,
    slots: RefCell<HashMap<&'static str, Box<dyn Any>>>,
}

impl ScopeInner {
    fn hold(&self, guard: Box<dyn Any>) {
        if self.alive.get() {
            self.guards.borrow_mut().push(guard);
        }
    }

    fn hold_slot(&self, key: &'static str, guard: Box<dyn Any>) {
        if !self.alive.get() {
            return;
        }
        let previous = self.slots.borrow_mut().insert(key, guard);
        // dropped after the borrow ends; a cancelled timer may not re-enter the map
        drop(previous);
    }

    fn dispose(&self) {
        if !self.alive.replace(false) {
            return;
        }
        let guards = std::mem::take(&mut *self.guards.borrow_mut());
        let slots = std::mem::take(&mut *self.slots.borrow_mut());
        debug!(
            "disposing effect scope ({} guards, {} slots)",
            guards.len(),
            slots.len()
        );
        drop(guards);
        drop(slots);
    }
}

/// Owns every timer, frame loop and listener a component registers.
///
/// Dropping or disposing the scope cancels all of them, and any callback
/// the browser had already queued becomes a no-op.
pub struct EffectScope {
    inner: Rc<ScopeInner>,
}

/// Non-owning reference to a scope, for callbacks that need to schedule
/// more work (a timeout started from inside an interval, say).
#[derive(Clone)]
pub struct ScopeHandle {
    inner: Weak<ScopeInner>,
}

impl EffectScope {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(ScopeInner {
                alive: Cell::new(true),
                guards: RefCell::new(Vec::new()),
                slots: RefCell::new(HashMap::new()),
            }),
        }
    }

    pub fn handle(&self) -> ScopeHandle {
        ScopeHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    #[cfg(test)]
    pub fn is_alive(&self) -> bool {
        self.inner.alive.get()
    }

    /// Keeps `guard` alive until the scope is disposed.
    pub fn hold<G: 'static>(&self, guard: G) {
        self.inner.hold(Box::new(guard));
    }

    /// Wraps `f` so it does nothing once the scope is gone.
    pub fn guard<F>(&self, f: F) -> impl FnMut() + 'static
    where
        F: FnMut() + 'static,
    {
        self.handle().guard(f)
    }

    pub fn interval<F>(&self, millis: u32, f: F)
    where
        F: FnMut() + 'static,
    {
        let tick = self.guard(f);
        self.hold(Interval::new(millis, tick));
    }

    pub fn timeout<F>(&self, key: &'static str, millis: u32, f: F)
    where
        F: FnOnce() + 'static,
    {
        self.handle().timeout(key, millis, f);
    }

    /// Runs `f` with the frame timestamp on every animation frame.
    pub fn animation_loop<F>(&self, f: F)
    where
        F: FnMut(f64) + 'static,
    {
        let handle = self.handle();
        let mut f = f;
        match AnimationLoop::start(move |timestamp| {
            if handle.is_alive() {
                f(timestamp);
            }
        }) {
            Some(frames) => self.hold(frames),
            None => warn!("requestAnimationFrame unavailable, animation disabled"),
        }
    }

    pub fn listen<F>(&self, target: &EventTarget, event: &'static str, f: F)
    where
        F: FnMut(Event) + 'static,
    {
        let handle = self.handle();
        let mut f = f;
        match Listener::new(target, event, move |e| {
            if handle.is_alive() {
                f(e);
            }
        }) {
            Some(listener) => self.hold(listener),
            None => warn!("could not listen for {event}"),
        }
    }

    pub fn dispose(&self) {
        self.inner.dispose();
    }
}

impl Default for EffectScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EffectScope {
    fn drop(&mut self) {
        self.inner.dispose();
    }
}

impl ScopeHandle {
    pub fn is_alive(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.alive.get())
            .unwrap_or(false)
    }

    pub fn guard<F>(&self, f: F) -> impl FnMut() + 'static
    where
        F: FnMut() + 'static,
    {
        let handle = self.clone();
        let mut f = f;
        move || {
            if handle.is_alive() {
                f();
            }
        }
    }

    /// Arms a one-shot timer under `key`, cancelling any timer already
    /// stored under the same key.
    pub fn timeout<F>(&self, key: &'static str, millis: u32, f: F)
    where
        F: FnOnce() + 'static,
    {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        let handle = self.clone();
        inner.hold_slot(
            key,
            Box::new(Timeout::new(millis, move || {
                if handle.is_alive() {
                    f();
                }
            })),
        );
    }

    /// Cancels the timer stored under `key`, if any.
    pub fn cancel(&self, key: &'static str) {
        if let Some(inner) = self.inner.upgrade() {
            let removed = inner.slots.borrow_mut().remove(key);
            drop(removed);
        }
    }
}

/// `requestAnimationFrame` loop that stops when dropped.
pub struct AnimationLoop {
    frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
    request: Rc<Cell<Option<i32>>>,
    stopped: Rc<Cell<bool>>,
}

impl AnimationLoop {
    pub fn start<F>(f: F) -> Option<Self>
    where
        F: FnMut(f64) + 'static,
    {
        let window = web_sys::window()?;
        let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let request = Rc::new(Cell::new(None));
        let stopped = Rc::new(Cell::new(false));

        let mut f = f;
        let next = frame.clone();
        let next_request = request.clone();
        let halted = stopped.clone();
        *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            if halted.get() {
                return;
            }
            f(timestamp);
            if halted.get() {
                return;
            }
            if let (Some(window), Ok(slot)) = (web_sys::window(), next.try_borrow()) {
                if let Some(callback) = slot.as_ref() {
                    next_request.set(
                        window
                            .request_animation_frame(callback.as_ref().unchecked_ref())
                            .ok(),
                    );
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let first = frame
            .borrow()
            .as_ref()
            .and_then(|callback| window.request_animation_frame(callback.as_ref().unchecked_ref()).ok());
        request.set(Some(first?));

        Some(Self {
            frame,
            request,
            stopped,
        })
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stopped.set(true);
        if let (Some(window), Some(id)) = (web_sys::window(), self.request.take()) {
            let _ = window.cancel_animation_frame(id);
        }
        // Breaks the self-reference; skipped if the frame is mid-call.
        if let Ok(mut slot) = self.frame.try_borrow_mut() {
            slot.take();
        }
    }
}

/// DOM event listener removed on drop.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, f: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Builds an [`EffectScope`] when `deps` change and disposes it on the
/// next change or on unmount.
#[hook]
pub fn use_effect_scope<D, F>(deps: D, setup: F)
where
    D: PartialEq + 'static,
    F: FnOnce(&EffectScope, &D) + 'static,
{
    use_effect_with_deps(
        move |deps| {
            let scope = EffectScope::new();
            setup(&scope, deps);
            move || scope.dispose()
        },
        deps,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DropFlag(Rc<Cell<bool>>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[test]
    fn guarded_callback_stops_after_dispose() {
        let scope = EffectScope::new();
        let calls = Rc::new(Cell::new(0));
        let mut tick = scope.guard({
            let calls = calls.clone();
            move || calls.set(calls.get() + 1)
        });

        tick();
        tick();
        scope.dispose();
        tick();
        tick();

        assert_eq!(calls.get(), 2);
        assert!(!scope.is_alive());
    }

    #[test]
    fn dropping_scope_releases_held_guards() {
        let released = Rc::new(Cell::new(false));
        let scope = EffectScope::new();
        scope.hold(DropFlag(released.clone()));
        assert!(!released.get());

        drop(scope);
        assert!(released.get());
    }

    #[test]
    fn handle_is_inert_once_scope_is_gone() {
        let scope = EffectScope::new();
        let handle = scope.handle();
        let calls = Rc::new(Cell::new(0));
        let mut tick = handle.guard({
            let calls = calls.clone();
            move || calls.set(calls.get() + 1)
        });
        assert!(handle.is_alive());

        drop(scope);
        tick();

        assert!(!handle.is_alive());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn hold_after_dispose_drops_immediately() {
        let released = Rc::new(Cell::new(false));
        let scope = EffectScope::new();
        scope.dispose();
        scope.hold(DropFlag(released.clone()));
        assert!(released.get());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn interval_never_fires_after_dispose() {
        let scope = EffectScope::new();
        let calls = Rc::new(Cell::new(0));
        scope.interval(10, {
            let calls = calls.clone();
            move || calls.set(calls.get() + 1)
        });

        TimeoutFuture::new(55).await;
        scope.dispose();
        let at_dispose = calls.get();
        assert!(at_dispose > 0);

        TimeoutFuture::new(60).await;
        assert_eq!(calls.get(), at_dispose);
    }

    #[wasm_bindgen_test]
    async fn keyed_timeout_replaces_previous() {
        let scope = EffectScope::new();
        let fired = Rc::new(RefCell::new(Vec::new()));
        for label in ["first", "second"] {
            let fired = fired.clone();
            scope.timeout("slot", 20, move || fired.borrow_mut().push(label));
        }

        TimeoutFuture::new(50).await;
        assert_eq!(*fired.borrow(), vec!["second"]);
    }
}
