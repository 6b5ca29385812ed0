// Marquee offset/mode state, kept free of DOM types so it can be driven by tests.
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarqueeTuning {
    /// Pixels the track moves left per animation frame.
    pub speed: f64,
    /// Damping applied to raw touch movement while dragging.
    pub drag_factor: f64,
}

impl Default for MarqueeTuning {
    fn default() -> Self {
        Self {
            speed: 0.5,
            drag_factor: 0.5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarqueeMode {
    Running,
    Paused,
    Dragging,
}

#[derive(Debug, Clone)]
pub struct MarqueeState {
    /// Current horizontal translation in px, always <= 0 once a tick has run.
    pub offset: f64,
    pub mode: MarqueeMode,
    pub drag_anchor: Option<f64>,
    /// Width of one copy of the items; the wrap modulus.
    pub half_width: f64,
    /// Pointer is over the track.
    pub hovered: bool,
    tuning: MarqueeTuning,
}

impl MarqueeState {
    pub fn new(half_width: f64, tuning: MarqueeTuning) -> Self {
        let mut s = Self {
            offset: 0.0,
            mode: MarqueeMode::Paused,
            drag_anchor: None,
            half_width: 0.0,
            hovered: false,
            tuning,
        };
        s.set_half_width(half_width);
        s
    }

    pub fn is_degenerate(&self) -> bool {
        self.half_width <= 0.0
    }

    /// Store a fresh measurement. A track that collapses to zero width parks in
    /// `Paused`; one that regains width resumes unless the pointer is over it.
    pub fn set_half_width(&mut self, half_width: f64) {
        self.half_width = if half_width.is_finite() {
            half_width.max(0.0)
        } else {
            0.0
        };
        if self.is_degenerate() {
            if self.mode == MarqueeMode::Running {
                self.mode = MarqueeMode::Paused;
            }
        } else if self.mode == MarqueeMode::Paused && !self.hovered {
            self.mode = MarqueeMode::Running;
        }
    }

    /// One frame of motion. Returns whether the offset changed.
    pub fn advance(&mut self) -> bool {
        if self.mode != MarqueeMode::Running || self.is_degenerate() {
            return false;
        }
        let before = self.offset;
        let hw = self.half_width;
        // A rightward drag can leave the offset positive; shift it onto the same
        // picture in (-hw, 0]. Leftward overshoot is handled by the wrap below.
        if self.offset > 0.0 {
            let r = self.offset.rem_euclid(hw);
            self.offset = if r == 0.0 { 0.0 } else { r - hw };
        }
        self.offset -= self.tuning.speed;
        if self.offset.abs() >= hw {
            self.offset = 0.0;
        }
        self.offset != before
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
        if self.mode == MarqueeMode::Running {
            self.mode = MarqueeMode::Paused;
        }
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
        if self.mode == MarqueeMode::Paused && !self.is_degenerate() {
            self.mode = MarqueeMode::Running;
        }
    }

    /// Ignored on a degenerate track, which has nothing to scrub.
    pub fn touch_start(&mut self, x: f64) {
        if self.is_degenerate() {
            return;
        }
        self.drag_anchor = Some(x);
        self.mode = MarqueeMode::Dragging;
    }

    /// Returns whether the offset moved.
    pub fn touch_move(&mut self, x: f64) -> bool {
        if self.mode != MarqueeMode::Dragging || self.is_degenerate() {
            return false;
        }
        let Some(anchor) = self.drag_anchor else {
            self.drag_anchor = Some(x);
            return false;
        };
        let delta = x - anchor;
        self.offset += delta * self.tuning.drag_factor;
        self.drag_anchor = Some(x);
        delta != 0.0
    }

    pub fn touch_end(&mut self) {
        if self.mode != MarqueeMode::Dragging {
            return;
        }
        self.drag_anchor = None;
        self.mode = if self.is_degenerate() {
            MarqueeMode::Paused
        } else {
            MarqueeMode::Running
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(hw: f64) -> MarqueeState {
        MarqueeState::new(hw, MarqueeTuning::default())
    }

    #[test]
    fn ticks_follow_speed_modulo_half_width() {
        let mut s = running(300.0);
        for k in 1..=1500u32 {
            s.advance();
            let expected = -((k as f64 * 0.5) % 300.0);
            assert_eq!(s.offset, expected, "tick {k}");
        }
    }

    #[test]
    fn wrap_lands_exactly_on_zero() {
        let mut s = MarqueeState::new(
            10.0,
            MarqueeTuning {
                speed: 3.0,
                drag_factor: 0.5,
            },
        );
        s.advance();
        s.advance();
        s.advance();
        assert_eq!(s.offset, -9.0);
        // -12 would overshoot the clone boundary
        s.advance();
        assert_eq!(s.offset, 0.0);
    }

    #[test]
    fn pointer_enter_is_idempotent() {
        let mut s = running(300.0);
        for _ in 0..40 {
            s.advance();
        }
        s.pointer_enter();
        let frozen = s.offset;
        s.pointer_enter();
        assert_eq!(s.mode, MarqueeMode::Paused);
        assert_eq!(s.offset, frozen);
        assert!(!s.advance());
        assert_eq!(s.offset, frozen);
    }

    #[test]
    fn leave_resumes_from_same_offset() {
        let mut s = running(300.0);
        for _ in 0..10 {
            s.advance();
        }
        s.pointer_enter();
        let before = s.offset;
        s.pointer_leave();
        assert_eq!(s.offset, before);
        assert_eq!(s.mode, MarqueeMode::Running);
        s.advance();
        assert_eq!(s.offset, before - 0.5);
    }

    #[test]
    fn drag_is_linear_in_total_delta() {
        let mut chunked = running(300.0);
        let mut single = running(300.0);
        for _ in 0..20 {
            chunked.advance();
            single.advance();
        }
        let pre = chunked.offset;

        chunked.touch_start(100.0);
        for x in [104.0, 97.0, 130.0, 122.0] {
            chunked.touch_move(x);
        }
        single.touch_start(100.0);
        single.touch_move(122.0);

        assert_eq!(chunked.offset, pre + 0.5 * 22.0);
        assert_eq!(single.offset, chunked.offset);
        assert_eq!(chunked.mode, MarqueeMode::Dragging);
    }

    #[test]
    fn drag_does_not_wrap_until_next_tick() {
        let mut s = running(300.0);
        s.touch_start(0.0);
        s.touch_move(40.0);
        assert_eq!(s.offset, 20.0);
        s.touch_end();
        assert_eq!(s.mode, MarqueeMode::Running);
        assert_eq!(s.drag_anchor, None);
        s.advance();
        // +20 is the same picture as -280
        assert_eq!(s.offset, -280.5);
    }

    #[test]
    fn leftward_overshoot_resets_to_zero_on_next_tick() {
        let mut s = running(300.0);
        s.touch_start(0.0);
        s.touch_move(-700.0);
        assert_eq!(s.offset, -350.0);
        s.touch_end();
        assert!(s.advance());
        assert_eq!(s.offset, 0.0);
    }

    #[test]
    fn shrunken_half_width_resets_to_zero() {
        let mut s = running(300.0);
        for _ in 0..200 {
            s.advance();
        }
        assert_eq!(s.offset, -100.0);
        s.set_half_width(60.0);
        s.advance();
        assert_eq!(s.offset, 0.0);
    }

    #[test]
    fn move_without_drag_is_ignored() {
        let mut s = running(300.0);
        assert!(!s.touch_move(50.0));
        assert_eq!(s.offset, 0.0);
    }

    #[test]
    fn degenerate_track_never_moves() {
        let mut s = running(0.0);
        assert_eq!(s.mode, MarqueeMode::Paused);
        assert!(!s.advance());
        s.pointer_leave();
        assert_eq!(s.mode, MarqueeMode::Paused);
        s.touch_start(10.0);
        assert_eq!(s.mode, MarqueeMode::Paused);
        assert!(!s.touch_move(50.0));
        assert_eq!(s.offset, 0.0);
        s.touch_end();
        assert_eq!(s.mode, MarqueeMode::Paused);
        assert!(!s.advance());
        assert_eq!(s.offset, 0.0);
    }

    #[test]
    fn regaining_width_resumes_unless_hovered() {
        let mut s = running(0.0);
        s.set_half_width(120.0);
        assert_eq!(s.mode, MarqueeMode::Running);

        let mut hovered = running(0.0);
        hovered.pointer_enter();
        hovered.set_half_width(120.0);
        assert_eq!(hovered.mode, MarqueeMode::Paused);
        hovered.pointer_leave();
        assert_eq!(hovered.mode, MarqueeMode::Running);
    }

    #[test]
    fn collapsing_width_pauses() {
        let mut s = running(300.0);
        s.advance();
        s.set_half_width(0.0);
        assert_eq!(s.mode, MarqueeMode::Paused);
        s.set_half_width(f64::NAN);
        assert!(s.is_degenerate());
    }
}
