use web_sys::Storage;

use crate::state::Theme;
use crate::state::theme::STORAGE_KEY;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn stored_theme() -> Option<String> {
    local_storage()?.get_item(STORAGE_KEY).ok().flatten()
}

pub fn store_theme(theme: Theme) {
    if let Some(store) = local_storage() {
        let _ = store.set_item(STORAGE_KEY, theme.as_str());
    }
}

pub fn prefers_dark() -> Option<bool> {
    web_sys::window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|mq| mq.matches())
}

pub fn initial_theme() -> Theme {
    Theme::resolve(stored_theme().as_deref(), prefers_dark())
}

/// Reflect the theme on `<html>` as `data-theme` and the `dark` class.
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = root.set_attribute("data-theme", theme.as_str());
    let _ = root
        .class_list()
        .toggle_with_force("dark", theme == Theme::Dark);
}
