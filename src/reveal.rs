//! Reveal-on-scroll trigger.
//!
//! A section is "revealed" the first time enough of it scrolls into view,
//! and stays revealed forever after. The detector only reports the
//! transition; turning it into a visual change (adding the `visible` class)
//! belongs to the rendering layer, here the `use_reveal` hook.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Default fraction of a section that must be visible before it reveals.
pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// Per-section reveal state machine: `Pending` until the visibility ratio
/// first crosses the threshold, then `Revealed` permanently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

impl RevealState {
    /// Feed a visibility ratio. Returns true exactly once, on the
    /// `Pending -> Revealed` transition; later calls never fire again and
    /// the state never reverts.
    pub fn observe(&mut self, visible_ratio: f64, threshold: f64) -> bool {
        self.on_crossing(visible_ratio >= threshold)
    }

    /// Feed an already-judged crossing signal, e.g. `isIntersecting` from an
    /// observer configured at the reveal threshold. Same one-shot contract
    /// as [`observe`](Self::observe).
    pub fn on_crossing(&mut self, crossed: bool) -> bool {
        match self {
            RevealState::Pending if crossed => {
                *self = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(self) -> bool {
        matches!(self, RevealState::Revealed)
    }
}

/// `IntersectionObserver` wrapper emitting each observed section's id once,
/// through a `Callback<String>`, when it first becomes sufficiently visible.
pub struct RevealObserver {
    observer: Option<IntersectionObserver>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn new(threshold: f64, on_reveal: Callback<String>) -> Option<Self> {
        let states: Rc<RefCell<HashMap<String, RevealState>>> =
            Rc::new(RefCell::new(HashMap::new()));

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let id = target.id();
                    if id.is_empty() {
                        continue;
                    }
                    // The observer is configured at the reveal threshold, so
                    // `isIntersecting` is the crossing judgment; the reported
                    // ratio can land a hair under the threshold at that exact
                    // event, so it is not re-checked here.
                    let fired = states
                        .borrow_mut()
                        .entry(id.clone())
                        .or_default()
                        .on_crossing(entry.is_intersecting());
                    if fired {
                        // One-shot: nothing more to watch for this section.
                        observer.unobserve(&target);
                        on_reveal.emit(id);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .ok()?;

        Some(Self {
            observer: Some(observer),
            _callback: callback,
        })
    }

    pub fn attach(&self, element: &Element) {
        if let Some(observer) = &self.observer {
            observer.observe(element);
        }
    }

    /// Stop observing everything. Idempotent; also runs on drop, so no
    /// visibility callbacks outlive the owning component.
    pub fn detach(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Hook: returns a `NodeRef` to place on a section element. When the section
/// first becomes visible past `threshold`, the `visible` class is added to
/// it, driving the CSS fade-in transition.
#[hook]
pub fn use_reveal(threshold: f64) -> NodeRef {
    let node = use_node_ref();
    {
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let on_reveal = Callback::from(|id: String| {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        if let Some(element) = document.get_element_by_id(&id) {
                            let _ = element.class_list().add_1("visible");
                        }
                    }
                });
                let observer = RevealObserver::new(threshold, on_reveal);
                if let (Some(observer), Some(element)) =
                    (observer.as_ref(), node.cast::<Element>())
                {
                    observer.attach(&element);
                }
                move || drop(observer)
            },
            (),
        );
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_at_threshold() {
        let mut state = RevealState::default();
        assert!(!state.observe(0.05, 0.2));
        assert_eq!(state, RevealState::Pending);
        assert!(state.observe(0.2, 0.2));
        assert!(state.is_revealed());
    }

    #[test]
    fn never_fires_twice() {
        let mut state = RevealState::default();
        assert!(state.observe(0.9, 0.2));
        assert!(!state.observe(1.0, 0.2));
        assert!(!state.observe(0.5, 0.2));
    }

    #[test]
    fn never_reverts_when_scrolled_away() {
        let mut state = RevealState::default();
        state.observe(0.3, 0.2);
        // Section leaves the viewport entirely; the flag must hold.
        assert!(!state.observe(0.0, 0.2));
        assert!(state.is_revealed());
    }

    #[test]
    fn crossing_signal_reveals_once() {
        let mut state = RevealState::default();
        assert!(!state.on_crossing(false));
        assert!(state.on_crossing(true));
        assert!(!state.on_crossing(true));
        // Leaving the viewport never reverts the flag.
        assert!(!state.on_crossing(false));
        assert!(state.is_revealed());
    }

    #[test]
    fn stays_pending_below_threshold() {
        let mut state = RevealState::default();
        for ratio in [0.0, 0.05, 0.1, 0.19] {
            assert!(!state.observe(ratio, 0.2));
        }
        assert!(!state.is_revealed());
    }
}
