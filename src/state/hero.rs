// Hero intro timeline: per-character reveal and staggered buttons.

pub const TITLE_DELAY_MS: i32 = 300;
pub const SUBTITLE_AFTER_TITLE_MS: i32 = 500;
pub const BUTTONS_AFTER_TITLE_MS: i32 = 1000;

/// Stage of the intro animation; each stage reveals everything before it too.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeroStage {
    #[default]
    Hidden,
    Title,
    Subtitle,
    Buttons,
}

/// Characters of `text` ready to become individual spans. Spaces become NBSP so
/// inline-block spans keep their width.
pub fn split_chars(text: &str) -> Vec<String> {
    text.chars()
        .map(|c| if c == ' ' { '\u{00A0}' } else { c })
        .map(String::from)
        .collect()
}

pub fn char_style(index: usize, revealed: bool) -> String {
    let delay = index as f64 * 0.05;
    format!(
        "display:inline-block; opacity:{}; transform:{}; transition:opacity 0.5s ease {delay:.2}s, transform 0.5s ease {delay:.2}s;",
        if revealed { "1" } else { "0" },
        if revealed { "translateY(0)" } else { "translateY(20px)" },
    )
}

pub fn button_style(index: usize, revealed: bool) -> String {
    let delay = index as f64 * 0.2;
    format!(
        "opacity:{}; transform:{}; transition:opacity 0.5s ease {delay:.2}s, transform 0.5s ease {delay:.2}s;",
        if revealed { "1" } else { "0" },
        if revealed { "translateY(0)" } else { "translateY(20px)" },
    )
}

/// (stage, delay from mount) pairs in firing order.
pub fn timeline() -> [(HeroStage, i32); 3] {
    [
        (HeroStage::Title, TITLE_DELAY_MS),
        (HeroStage::Subtitle, TITLE_DELAY_MS + SUBTITLE_AFTER_TITLE_MS),
        (HeroStage::Buttons, TITLE_DELAY_MS + BUTTONS_AFTER_TITLE_MS),
    ]
}
