// Marquee bound to a real element: the track adapter and the mount entry point.
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlElement, MouseEvent, TouchEvent};

use super::raf::RafScheduler;
use super::{Listener, set_style, set_timeout};
use crate::marquee::{Marquee, TrackSurface, translate_x};
use crate::state::{MarqueeState, MarqueeTuning};
use crate::util::{clog, cwarn};

pub const ICON_SELECTOR: &str = ".tech-icon";
const ICON_PRESS_MS: i32 = 200;

pub struct ElementTrack {
    el: HtmlElement,
}

impl ElementTrack {
    pub fn new(el: HtmlElement) -> Self {
        Self { el }
    }

    fn children(&self) -> Vec<Element> {
        let mut out = Vec::new();
        let mut next = self.el.first_element_child();
        while let Some(child) = next {
            next = child.next_element_sibling();
            out.push(child);
        }
        out
    }
}

impl TrackSurface for ElementTrack {
    fn item_count(&self) -> usize {
        self.el.child_element_count() as usize
    }

    fn duplicate_items(&mut self) {
        for child in self.children() {
            let Ok(copy) = child.clone_node_with_deep(true) else {
                continue;
            };
            if let Some(copy_el) = copy.dyn_ref::<Element>() {
                let _ = copy_el.set_attribute("aria-hidden", "true");
                let _ = copy_el.set_attribute("data-clone", "true");
            }
            let _ = self.el.append_child(&copy);
        }
    }

    fn scroll_width(&self) -> f64 {
        self.el.scroll_width() as f64
    }

    fn set_translate_x(&mut self, px: f64) {
        set_style(&self.el, "transform", &translate_x(px));
    }

    fn set_transition(&mut self, transition: Option<&str>) {
        set_style(&self.el, "transition", transition.unwrap_or("none"));
    }
}

pub type DomMarquee = Marquee<RafScheduler, ElementTrack>;

/// A running marquee. Dropping it cancels the frame loop and unbinds every listener.
pub struct MarqueeHandle {
    marquee: Rc<RefCell<DomMarquee>>,
    _listeners: Vec<Listener>,
}

impl MarqueeHandle {
    pub fn snapshot(&self) -> MarqueeState {
        self.marquee.borrow().state().clone()
    }
}

impl Drop for MarqueeHandle {
    fn drop(&mut self) {
        self.marquee.borrow_mut().stop();
    }
}

fn first_touch_x(e: &TouchEvent) -> Option<f64> {
    e.touches().item(0).map(|t| t.client_x() as f64)
}

/// Start the marquee on `track`. A missing track disables the feature with a
/// console warning; nothing is retried.
pub fn mount_marquee(track: Option<HtmlElement>, tuning: MarqueeTuning) -> Option<MarqueeHandle> {
    let Some(track) = track else {
        cwarn("Tech stack container not found");
        return None;
    };
    let window = web_sys::window()?;

    let marquee: Rc<RefCell<DomMarquee>> = Rc::new_cyclic(|weak: &Weak<RefCell<DomMarquee>>| {
        let weak = weak.clone();
        let scheduler = RafScheduler::new(window.clone(), move || {
            if let Some(m) = weak.upgrade() {
                m.borrow_mut().on_frame();
            }
        });
        RefCell::new(Marquee::new(scheduler, ElementTrack::new(track.clone()), tuning))
    });
    marquee.borrow_mut().start();

    let target: &EventTarget = track.as_ref();
    let mut listeners = Vec::new();
    {
        let m = marquee.clone();
        listeners.push(Listener::new(target, "mouseenter", move |_: MouseEvent| {
            m.borrow_mut().on_pointer_enter();
        }));
    }
    {
        let m = marquee.clone();
        listeners.push(Listener::new(target, "mouseleave", move |_: MouseEvent| {
            m.borrow_mut().on_pointer_leave();
        }));
    }
    {
        let m = marquee.clone();
        listeners.push(Listener::new(target, "touchstart", move |e: TouchEvent| {
            if let Some(x) = first_touch_x(&e) {
                m.borrow_mut().on_touch_start(x);
            }
        }));
    }
    {
        let m = marquee.clone();
        listeners.push(Listener::new(target, "touchmove", move |e: TouchEvent| {
            if let Some(x) = first_touch_x(&e) {
                m.borrow_mut().on_touch_move(x);
            }
        }));
    }
    for event in ["touchend", "touchcancel"] {
        let m = marquee.clone();
        listeners.push(Listener::new(target, event, move |_: TouchEvent| {
            m.borrow_mut().on_touch_end();
        }));
    }
    {
        let m = marquee.clone();
        listeners.push(Listener::new(window.as_ref(), "resize", move |_: web_sys::Event| {
            m.borrow_mut().remeasure();
        }));
    }
    // Delegated so the cloned icons respond too.
    listeners.push(Listener::new(target, "click", move |e: MouseEvent| {
        let icon = e
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(ICON_SELECTOR).ok().flatten())
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if let Some(icon) = icon {
            press_icon(&icon);
        }
    }));

    let handle = MarqueeHandle {
        marquee,
        _listeners: listeners,
    };
    let state = handle.snapshot();
    clog(&format!(
        "marquee: half_width={} mode={:?}",
        state.half_width, state.mode
    ));
    Some(handle)
}

fn press_icon(icon: &HtmlElement) {
    set_style(icon, "transition", "transform 0.2s ease");
    set_style(icon, "transform", "scale(0.9)");
    let release = icon.clone();
    set_timeout(ICON_PRESS_MS, move || {
        set_style(&release, "transform", "scale(1)");
    });
    if let Some(name) = icon.get_attribute("data-name") {
        clog(&format!("tech icon: {}", name));
    }
}
