//! Page content and tuning, deserialized from the embedded `content/site.json`.
//! Every field has a default so a partial document still renders.

use serde::{Deserialize, Serialize};

use crate::state::{FormTuning, MarqueeTuning};

const SITE_JSON: &str = include_str!("../content/site.json");

/// Section ids rendered by the app, in page order.
pub const SECTION_IDS: [&str; 4] = ["hero", "projects", "skills", "contact"];

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroCopy {
    pub title: String,
    pub subtitle: String,
    pub buttons: Vec<NavLink>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    /// Loaded lazily once the card is near the viewport.
    pub image: Option<String>,
    pub url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    /// Short glyph shown in the icon tile.
    pub icon: String,
    pub color: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactCopy {
    pub heading: String,
    pub blurb: String,
    pub email: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub owner: String,
    pub nav: Vec<NavLink>,
    pub hero: HeroCopy,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub contact: ContactCopy,
    pub marquee: MarqueeTuning,
    pub form: FormTuning,
}

impl SiteContent {
    pub fn load() -> Result<Self, serde_json::Error> {
        Self::parse(SITE_JSON)
    }

    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
