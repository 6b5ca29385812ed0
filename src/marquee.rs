//! Auto-scrolling marquee controller.
//!
//! The controller owns a [`MarqueeState`] and drives it from animation frames and
//! pointer/touch input. The browser is reached only through [`FrameScheduler`] and
//! [`TrackSurface`], so the frame loop can be stepped by hand in tests.
//!
//! While the state is `Running` exactly one frame request is outstanding. Every
//! transition out of `Running` cancels it and every transition back requests one.

use crate::state::{MarqueeMode, MarqueeState, MarqueeTuning};

/// Per-frame request/cancel pair.
pub trait FrameScheduler {
    type Handle;
    /// Ask for one callback on the next frame. `None` if the host refused.
    fn request(&mut self) -> Option<Self::Handle>;
    fn cancel(&mut self, handle: Self::Handle);
}

/// The element being translated.
pub trait TrackSurface {
    fn item_count(&self) -> usize;
    /// Append one copy of the current items after the originals.
    fn duplicate_items(&mut self);
    /// Full content width of the (already doubled) track in px.
    fn scroll_width(&self) -> f64;
    fn set_translate_x(&mut self, px: f64);
    fn set_transition(&mut self, transition: Option<&str>);
}

pub const HOVER_TRANSITION: &str = "transform 0.3s ease";

pub struct Marquee<S: FrameScheduler, T: TrackSurface> {
    state: MarqueeState,
    scheduler: S,
    track: T,
    pending: Option<S::Handle>,
}

impl<S: FrameScheduler, T: TrackSurface> Marquee<S, T> {
    /// Doubles the track content and measures it. Does not start the loop; call
    /// [`Marquee::start`] once the value is in its final place.
    pub fn new(scheduler: S, mut track: T, tuning: MarqueeTuning) -> Self {
        if track.item_count() > 0 {
            track.duplicate_items();
        }
        let half_width = measure(&track);
        let mut m = Self {
            state: MarqueeState::new(half_width, tuning),
            scheduler,
            track,
            pending: None,
        };
        m.apply();
        m
    }

    pub fn state(&self) -> &MarqueeState {
        &self.state
    }

    #[cfg(test)]
    pub fn track(&self) -> &T {
        &self.track
    }

    #[cfg(test)]
    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    pub fn start(&mut self) {
        self.sync_schedule();
    }

    /// Cancel any outstanding frame; used on teardown.
    pub fn stop(&mut self) {
        if let Some(h) = self.pending.take() {
            self.scheduler.cancel(h);
        }
    }

    /// Entry point for the scheduled frame callback.
    pub fn on_frame(&mut self) {
        // The request that brought us here has been consumed.
        self.pending = None;
        self.tick();
    }

    pub fn tick(&mut self) {
        self.refresh_half_width();
        if self.state.advance() {
            self.apply();
        }
        self.sync_schedule();
    }

    pub fn on_pointer_enter(&mut self) {
        self.state.pointer_enter();
        if self.state.mode == MarqueeMode::Paused {
            self.track.set_transition(Some(HOVER_TRANSITION));
            self.apply();
        }
        self.sync_schedule();
    }

    pub fn on_pointer_leave(&mut self) {
        self.state.pointer_leave();
        self.track.set_transition(None);
        self.sync_schedule();
    }

    pub fn on_touch_start(&mut self, x: f64) {
        self.state.touch_start(x);
        self.track.set_transition(None);
        self.sync_schedule();
    }

    pub fn on_touch_move(&mut self, x: f64) {
        if self.state.touch_move(x) {
            self.apply();
        }
    }

    pub fn on_touch_end(&mut self) {
        self.state.touch_end();
        self.sync_schedule();
    }

    /// Re-read the track width after a layout change and restart if it became usable.
    pub fn remeasure(&mut self) {
        self.refresh_half_width();
        self.sync_schedule();
    }

    fn refresh_half_width(&mut self) {
        let hw = measure(&self.track);
        if hw != self.state.half_width {
            self.state.set_half_width(hw);
        }
    }

    fn apply(&mut self) {
        self.track.set_translate_x(self.state.offset);
    }

    fn sync_schedule(&mut self) {
        match self.state.mode {
            MarqueeMode::Running => {
                if self.pending.is_none() {
                    self.pending = self.scheduler.request();
                }
            }
            MarqueeMode::Paused | MarqueeMode::Dragging => self.stop(),
        }
    }
}

/// Half the doubled content width. An empty track has nothing to loop, whatever
/// width the element itself reports.
fn measure<T: TrackSurface>(track: &T) -> f64 {
    if track.item_count() == 0 {
        0.0
    } else {
        track.scroll_width() / 2.0
    }
}

pub fn translate_x(px: f64) -> String {
    format!("translateX({}px)", px)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default, Debug)]
    struct FrameLog {
        next_id: u32,
        outstanding: Vec<u32>,
        requested: u32,
        cancelled: u32,
    }

    #[derive(Clone, Default)]
    struct ManualFrames(Rc<RefCell<FrameLog>>);

    impl FrameScheduler for ManualFrames {
        type Handle = u32;
        fn request(&mut self) -> Option<u32> {
            let mut log = self.0.borrow_mut();
            log.next_id += 1;
            let id = log.next_id;
            log.outstanding.push(id);
            log.requested += 1;
            Some(id)
        }
        fn cancel(&mut self, handle: u32) {
            let mut log = self.0.borrow_mut();
            log.outstanding.retain(|h| *h != handle);
            log.cancelled += 1;
        }
    }

    #[derive(Debug, Default)]
    struct FakeTrack {
        item_width: f64,
        items: usize,
        copies: usize,
        transform: Option<String>,
        transition: Option<String>,
    }

    impl FakeTrack {
        fn new(items: usize, item_width: f64) -> Self {
            Self {
                item_width,
                items,
                copies: 1,
                ..Default::default()
            }
        }
    }

    impl TrackSurface for FakeTrack {
        fn item_count(&self) -> usize {
            self.items * self.copies
        }
        fn duplicate_items(&mut self) {
            self.copies *= 2;
        }
        fn scroll_width(&self) -> f64 {
            self.item_count() as f64 * self.item_width
        }
        fn set_translate_x(&mut self, px: f64) {
            self.transform = Some(translate_x(px));
        }
        fn set_transition(&mut self, transition: Option<&str>) {
            self.transition = transition.map(str::to_string);
        }
    }

    fn setup(items: usize, item_width: f64) -> (Marquee<ManualFrames, FakeTrack>, ManualFrames) {
        let frames = ManualFrames::default();
        let mut m = Marquee::new(
            frames.clone(),
            FakeTrack::new(items, item_width),
            MarqueeTuning::default(),
        );
        m.start();
        (m, frames)
    }

    /// Fire the outstanding frame, as the browser would.
    fn run_frames(m: &mut Marquee<ManualFrames, FakeTrack>, frames: &ManualFrames, n: usize) {
        for _ in 0..n {
            let fired = frames.0.borrow_mut().outstanding.pop();
            assert!(fired.is_some(), "no frame pending");
            m.on_frame();
        }
    }

    fn outstanding(frames: &ManualFrames) -> usize {
        frames.0.borrow().outstanding.len()
    }

    #[test]
    fn init_duplicates_and_measures_half() {
        let (m, frames) = setup(3, 100.0);
        assert_eq!(m.track().copies, 2);
        assert_eq!(m.state().half_width, 300.0);
        assert_eq!(m.state().mode, MarqueeMode::Running);
        assert_eq!(outstanding(&frames), 1);
        assert_eq!(frames.0.borrow().requested, 1);
        assert_eq!(m.track().transform.as_deref(), Some("translateX(0px)"));
    }

    #[test]
    fn end_to_end_hover_scenario() {
        let (mut m, frames) = setup(3, 100.0);
        run_frames(&mut m, &frames, 600);
        assert_eq!(m.state().offset, 0.0);

        run_frames(&mut m, &frames, 300);
        assert_eq!(m.state().offset, -150.0);

        m.on_pointer_enter();
        assert_eq!(outstanding(&frames), 0);
        assert_eq!(m.track().transition.as_deref(), Some(HOVER_TRANSITION));
        // 50 frames pass with nothing scheduled
        for _ in 0..50 {
            assert!(!m.has_pending_frame());
        }
        m.on_pointer_leave();
        assert_eq!(m.state().offset, -150.0);
        assert_eq!(m.track().transition, None);

        run_frames(&mut m, &frames, 50);
        assert_eq!(m.state().offset, -175.0);
        assert_eq!(m.track().transform.as_deref(), Some("translateX(-175px)"));
    }

    #[test]
    fn transform_tracks_offset_every_frame() {
        let (mut m, frames) = setup(4, 25.0);
        for _ in 0..250 {
            run_frames(&mut m, &frames, 1);
            let expected = translate_x(m.state().offset);
            assert_eq!(m.track().transform.as_deref(), Some(expected.as_str()));
            assert!(m.state().offset <= 0.0 && m.state().offset > -100.0);
        }
    }

    #[test]
    fn never_more_than_one_pending_frame() {
        let (mut m, frames) = setup(3, 100.0);
        m.start();
        m.remeasure();
        m.on_pointer_leave();
        assert_eq!(outstanding(&frames), 1);

        m.on_touch_start(10.0);
        assert_eq!(outstanding(&frames), 0);
        m.on_touch_move(30.0);
        m.on_touch_end();
        assert_eq!(outstanding(&frames), 1);

        m.on_pointer_enter();
        m.on_pointer_enter();
        assert_eq!(outstanding(&frames), 0);
        m.on_pointer_leave();
        m.on_pointer_leave();
        assert_eq!(outstanding(&frames), 1);
    }

    #[test]
    fn touch_drag_moves_track_without_frames() {
        let (mut m, frames) = setup(3, 100.0);
        run_frames(&mut m, &frames, 10);
        m.on_touch_start(200.0);
        m.on_touch_move(180.0);
        m.on_touch_move(150.0);
        assert_eq!(m.state().offset, -5.0 - 25.0);
        assert_eq!(m.track().transform.as_deref(), Some("translateX(-30px)"));
        assert!(!m.has_pending_frame());
        m.on_touch_end();
        run_frames(&mut m, &frames, 1);
        assert_eq!(m.state().offset, -30.5);
    }

    #[test]
    fn empty_track_stays_parked() {
        let (mut m, frames) = setup(0, 100.0);
        assert_eq!(m.track().copies, 1);
        assert_eq!(m.state().mode, MarqueeMode::Paused);
        assert_eq!(outstanding(&frames), 0);
        m.tick();
        m.on_pointer_leave();
        m.on_touch_start(0.0);
        m.on_touch_end();
        assert_eq!(m.state().offset, 0.0);
        assert_eq!(outstanding(&frames), 0);
    }

    #[test]
    fn resize_is_picked_up_before_wrap() {
        let (mut m, frames) = setup(3, 100.0);
        run_frames(&mut m, &frames, 200);
        assert_eq!(m.state().offset, -100.0);
        // Items shrink; the old 300px modulus would let the offset run past the clone.
        m.track.item_width = 20.0;
        run_frames(&mut m, &frames, 1);
        assert_eq!(m.state().half_width, 60.0);
        assert_eq!(m.state().offset, 0.0);
        assert_eq!(m.track().transform.as_deref(), Some("translateX(0px)"));
    }

    #[test]
    fn drag_overshoot_wraps_to_zero_after_release() {
        let (mut m, frames) = setup(3, 100.0);
        run_frames(&mut m, &frames, 100);
        assert_eq!(m.state().offset, -50.0);
        m.on_touch_start(500.0);
        m.on_touch_move(100.0);
        m.on_touch_move(-200.0);
        // Dragging never wraps, even past the clone boundary.
        assert_eq!(m.state().offset, -400.0);
        assert_eq!(m.track().transform.as_deref(), Some("translateX(-400px)"));
        m.on_touch_end();
        assert_eq!(outstanding(&frames), 1);
        run_frames(&mut m, &frames, 1);
        assert_eq!(m.state().offset, 0.0);
        run_frames(&mut m, &frames, 1);
        assert_eq!(m.state().offset, -0.5);
    }

    #[test]
    fn remeasure_restarts_a_collapsed_track() {
        let (mut m, frames) = setup(3, 0.0);
        assert_eq!(outstanding(&frames), 0);
        m.track.item_width = 50.0;
        m.remeasure();
        assert_eq!(m.state().half_width, 150.0);
        assert_eq!(outstanding(&frames), 1);
    }

    #[test]
    fn stop_cancels_outstanding_frame() {
        let (mut m, frames) = setup(3, 100.0);
        m.stop();
        assert_eq!(outstanding(&frames), 0);
        assert_eq!(frames.0.borrow().cancelled, 1);
    }
}
