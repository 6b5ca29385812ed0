// Thin wrappers over `web_sys` used by the components: event listeners that
// unregister on drop, one-shot timers and a few window/document lookups.

pub mod observe;
pub mod raf;
pub mod storage;
pub mod track;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::state::SectionBounds;
use crate::state::nav::scroll_target_y;
use crate::util::cwarn;

/// A registered DOM listener. Dropping it removes the listener and frees the closure.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<E, F>(target: &EventTarget, event: &'static str, mut handler: F) -> Self
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |e: Event| {
            handler(e.unchecked_into::<E>());
        }) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok();
        Self {
            target: target.clone(),
            event,
            callback,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Run `f` once after `ms`. Returns the timer id if the window accepted it.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) -> Option<i32> {
    let window = web_sys::window()?;
    let cb = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
        .ok()
}

pub fn clear_timeout(id: i32) {
    if let Some(window) = web_sys::window() {
        window.clear_timeout_with_handle(id);
    }
}

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1024.0)
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn element_by_id(id: &str) -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Current geometry of the sections that exist on the page.
pub fn section_bounds(ids: &[&str]) -> Vec<SectionBounds> {
    ids.iter()
        .filter_map(|id| {
            let el = element_by_id(id)?;
            Some(SectionBounds {
                id: id.to_string(),
                top: el.offset_top() as f64,
                height: el.client_height() as f64,
            })
        })
        .collect()
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = web_sys::window() {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Smooth-scroll so section `id` sits just below the fixed nav bar.
pub fn scroll_to_section(id: &str) -> bool {
    match element_by_id(id) {
        Some(el) => {
            smooth_scroll_to(scroll_target_y(el.offset_top() as f64));
            true
        }
        None => {
            cwarn(&format!("Target element #{} not found", id));
            false
        }
    }
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}
