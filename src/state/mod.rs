pub mod form;
pub mod hero;
pub mod marquee;
pub mod nav;
pub mod theme;
pub mod tilt;

pub use form::{ContactDraft, Field, FieldError, FormTuning, SubmitStatus};
pub use hero::HeroStage;
pub use marquee::{MarqueeMode, MarqueeState, MarqueeTuning};
pub use nav::{NavScroll, SectionBounds};
pub use theme::Theme;
pub use tilt::CardTilt;
