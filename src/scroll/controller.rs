//! Browser glue for smooth scrolling and snapping.
//!
//! One `ScrollController` is owned per mounted page. It drives explicit
//! navigation (`scroll_to_section`) and, when enabled, the automatic snap
//! heuristic from scroll events. All coordination state lives inside the
//! controller instance; there are no module-level globals, so separate
//! mounts (and tests) cannot interfere with each other.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_console::log;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use super::motion::ScrollTween;
use super::snap::{pick_snap_target, SectionGeometry, SnapConfig, VelocityTracker};

/// Class carried by every snappable page section.
pub const SECTION_CLASS: &str = "scroll-snap-section";

#[derive(Clone)]
pub struct ScrollController {
    inner: Rc<Inner>,
}

struct Inner {
    config: SnapConfig,
    /// Generation stamp for tween frames. Each new animation bumps this;
    /// frames from an older generation stop rescheduling instead of writing
    /// stale offsets over a newer target.
    generation: Cell<u64>,
    /// Guard between the snap decision and the settling animation. Reset by
    /// a timer a fixed margin after the tween's nominal duration, so scroll
    /// events produced by the animation itself are not re-evaluated.
    is_snapping: Cell<bool>,
    velocity: RefCell<VelocityTracker>,
    debounce: RefCell<Option<Timeout>>,
    guard_reset: RefCell<Option<Timeout>>,
    scroll_listener: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl ScrollController {
    pub fn new(config: SnapConfig) -> Self {
        Self {
            inner: Rc::new(Inner {
                config,
                generation: Cell::new(0),
                is_snapping: Cell::new(false),
                velocity: RefCell::new(VelocityTracker::new()),
                debounce: RefCell::new(None),
                guard_reset: RefCell::new(None),
                scroll_listener: RefCell::new(None),
            }),
        }
    }

    /// Animate the viewport to the section with the given id.
    ///
    /// An id with no mounted element is a silent no-op; it can only come
    /// from a stale link in the static section configuration.
    pub fn scroll_to_section(&self, section_id: &str) {
        let Some(window) = web_sys::window() else { return };
        let Some(document) = window.document() else { return };
        let Some(element) = document.get_element_by_id(section_id) else {
            return;
        };

        let scroll_top = page_y_offset(&window);
        let document_top = scroll_top + element.get_bounding_client_rect().top();
        // Only the first section in document order skips the navbar offset.
        let target = if first_section_id(&document).as_deref() == Some(section_id) {
            document_top
        } else {
            document_top - self.inner.config.navbar_height
        };

        self.animate_to(&window, scroll_top, target);
    }

    /// Attach the scroll listener that feeds the snap heuristic.
    /// Does nothing when snapping is disabled or already started.
    pub fn start(&self) {
        if !self.inner.config.enabled || self.inner.scroll_listener.borrow().is_some() {
            return;
        }
        let Some(window) = web_sys::window() else { return };

        let controller = self.clone();
        let listener = Closure::<dyn FnMut()>::new(move || controller.on_scroll());
        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(true);
        if window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                listener.as_ref().unchecked_ref(),
                &options,
            )
            .is_ok()
        {
            *self.inner.scroll_listener.borrow_mut() = Some(listener);
        }
    }

    /// Detach the listener, cancel pending timers, and halt in-flight tween
    /// frames. Idempotent; must be called when the owning page unmounts
    /// (the listener closure keeps the controller alive until then).
    pub fn stop(&self) {
        self.inner.generation.set(self.inner.generation.get() + 1);
        self.inner.debounce.borrow_mut().take();
        self.inner.guard_reset.borrow_mut().take();
        self.inner.is_snapping.set(false);
        if let Some(listener) = self.inner.scroll_listener.borrow_mut().take() {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "scroll",
                    listener.as_ref().unchecked_ref(),
                );
            }
        }
    }

    fn on_scroll(&self) {
        if self.inner.is_snapping.get() {
            return;
        }
        let Some(window) = web_sys::window() else { return };
        let now = now_ms(&window);
        let position = page_y_offset(&window);
        self.inner.velocity.borrow_mut().observe(now, position);

        // Cancel-and-reschedule: only the most recent timer can fire, so the
        // heuristic runs once per pause in scrolling.
        let controller = self.clone();
        *self.inner.debounce.borrow_mut() = Some(Timeout::new(
            self.inner.config.settle_delay_ms,
            move || controller.evaluate_snap(),
        ));
    }

    fn evaluate_snap(&self) {
        if self.inner.is_snapping.get() {
            return;
        }
        // Still flinging; do not fight the user.
        if self.inner.velocity.borrow().velocity() > self.inner.config.velocity_cutoff {
            return;
        }
        let Some(window) = web_sys::window() else { return };
        let Some(document) = window.document() else { return };

        let scroll_top = page_y_offset(&window);
        let viewport_height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let sections = measure_sections(&document);

        let Some(target) =
            pick_snap_target(scroll_top, viewport_height, &sections, &self.inner.config)
        else {
            return;
        };

        log!("snapping to section:", target.id.as_str());
        self.inner.is_snapping.set(true);
        self.animate_to(&window, scroll_top, target.target_offset);

        // Time-based guard release, not an animation-completion signal: the
        // margin covers scroll events emitted while the tween settles.
        let inner = Rc::clone(&self.inner);
        let margin = self.inner.config.snap_duration_ms as u32 + 100;
        *self.inner.guard_reset.borrow_mut() = Some(Timeout::new(margin, move || {
            inner.is_snapping.set(false);
        }));
    }

    fn animate_to(&self, window: &Window, start_offset: f64, target_offset: f64) {
        let tween = ScrollTween::new(
            start_offset,
            target_offset,
            now_ms(window),
            self.inner.config.snap_duration_ms,
        );
        // Sub-pixel corrections read as jitter, not motion.
        if tween.distance() < self.inner.config.min_snap_distance {
            return;
        }

        let generation = self.inner.generation.get() + 1;
        self.inner.generation.set(generation);

        let inner = Rc::clone(&self.inner);
        let handle: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let frame = Rc::clone(&handle);
        *handle.borrow_mut() = Some(Closure::new(move |now: f64| {
            if inner.generation.get() != generation {
                frame.borrow_mut().take();
                return;
            }
            let Some(window) = web_sys::window() else {
                frame.borrow_mut().take();
                return;
            };
            window.scroll_to_with_x_and_y(0.0, tween.position_at(now));
            if tween.is_complete(now) {
                frame.borrow_mut().take();
                return;
            }
            if let Some(callback) = frame.borrow().as_ref() {
                let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
            }
        }));
        if let Some(callback) = handle.borrow().as_ref() {
            let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
        };
    }
}

fn page_y_offset(window: &Window) -> f64 {
    window.page_y_offset().unwrap_or(0.0)
}

fn now_ms(window: &Window) -> f64 {
    window.performance().map(|p| p.now()).unwrap_or(0.0)
}

fn first_section_id(document: &Document) -> Option<String> {
    document
        .query_selector(&format!(".{SECTION_CLASS}"))
        .ok()
        .flatten()
        .map(|element| element.id())
}

fn measure_sections(document: &Document) -> Vec<SectionGeometry> {
    let Ok(list) = document.query_selector_all(&format!(".{SECTION_CLASS}")) else {
        return Vec::new();
    };
    let mut sections = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        let Some(node) = list.item(index) else { continue };
        let Some(element) = node.dyn_ref::<Element>() else {
            continue;
        };
        let id = element.id();
        if id.is_empty() {
            continue;
        }
        sections.push(SectionGeometry {
            id,
            viewport_top: element.get_bounding_client_rect().top(),
            offset_navbar: index != 0,
        });
    }
    sections
}
