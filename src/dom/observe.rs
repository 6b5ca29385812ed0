// One-shot viewport visibility, used for scroll reveals and lazy images.
use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Keeps the observer alive; dropping it disconnects.
pub struct VisibilityWatch {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn intersection_observer_supported() -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

/// Call `on_visible` the first time `el` intersects the viewport. Browsers without
/// `IntersectionObserver` get the call immediately and no watch is returned.
pub fn when_visible(
    el: &Element,
    root_margin: &str,
    threshold: f64,
    on_visible: impl FnOnce() + 'static,
) -> Option<VisibilityWatch> {
    if !intersection_observer_supported() {
        on_visible();
        return None;
    }
    let pending = RefCell::new(Some(on_visible));
    let callback: EntriesCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let hit = entries.iter().any(|entry| {
                entry
                    .dyn_into::<IntersectionObserverEntry>()
                    .map(|e| e.is_intersecting())
                    .unwrap_or(false)
            });
            if !hit {
                return;
            }
            observer.disconnect();
            if let Some(f) = pending.borrow_mut().take() {
                f();
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let opts = IntersectionObserverInit::new();
    opts.set_root_margin(root_margin);
    opts.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts).ok()?;
    observer.observe(el);
    Some(VisibilityWatch {
        observer,
        _callback: callback,
    })
}
