use yew::prelude::*;

use crate::state::Theme;

#[derive(Properties, PartialEq, Clone)]
pub struct ThemeToggleProps {
    pub theme: Theme,
    pub on_toggle: Callback<()>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let cb = {
        let cb = props.on_toggle.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <button onclick={cb} aria-label="Toggle color theme"
            style="padding:4px 10px; font-size:12px; border-radius:6px; border:1px solid var(--border); background:transparent; color:inherit; cursor:pointer;">
            { props.theme.toggle_label() }
        </button>
    }
}
