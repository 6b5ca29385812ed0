// 3D hover tilt for project cards.

/// Below this viewport width cards use press feedback instead of tilt.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const MAX_TILT_DEG: f64 = 10.0;
pub const REST_TRANSFORM: &str = "perspective(1000px) rotateX(0) rotateY(0)";
pub const REST_SHADOW: &str = "0 10px 30px rgba(0, 0, 0, 0.2)";
pub const PRESS_TRANSFORM: &str = "scale(0.95)";
pub const PRESS_MS: i32 = 150;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub shadow_x: f64,
    pub shadow_y: f64,
}

impl CardTilt {
    /// `x`/`y` are pointer coordinates relative to the card's top-left corner.
    pub fn from_pointer(width: f64, height: f64, x: f64, y: f64) -> Option<Self> {
        if width <= 0.0 || height <= 0.0 {
            return None;
        }
        let cx = width / 2.0;
        let cy = height / 2.0;
        Some(Self {
            rotate_x: (cy - y) / cy * MAX_TILT_DEG,
            rotate_y: (x - cx) / cx * MAX_TILT_DEG,
            shadow_x: (x - cx) / 10.0,
            shadow_y: (y - cy) / 10.0,
        })
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) scale3d(1.05, 1.05, 1.05)",
            self.rotate_x, self.rotate_y
        )
    }

    pub fn box_shadow(&self) -> String {
        format!(
            "{}px {}px 30px rgba(59, 130, 246, 0.3)",
            self.shadow_x, self.shadow_y
        )
    }
}

pub fn is_mobile(viewport_width: f64) -> bool {
    viewport_width < MOBILE_BREAKPOINT_PX
}
