use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::marquee::FrameScheduler;

/// `requestAnimationFrame` with a fixed callback. The callback is owned here and
/// re-registered on every request, so one closure serves the whole loop.
pub struct RafScheduler {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl RafScheduler {
    pub fn new(window: Window, on_frame: impl FnMut() + 'static) -> Self {
        Self {
            window,
            callback: Closure::wrap(Box::new(on_frame) as Box<dyn FnMut()>),
        }
    }
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request(&mut self) -> Option<i32> {
        self.window
            .request_animation_frame(self.callback.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel(&mut self, handle: i32) {
        let _ = self.window.cancel_animation_frame(handle);
    }
}
