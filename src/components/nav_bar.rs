use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Node};
use yew::prelude::*;

use super::theme_toggle::ThemeToggle;
use crate::dom::{self, Listener};
use crate::model::{NavLink, SECTION_IDS};
use crate::state::nav::{active_section, anchor_target};
use crate::state::{NavScroll, Theme};

/// Click handler for `#section` links: smooth-scrolls instead of jumping and then
/// runs `after` (e.g. closing the mobile menu). Other links are left alone.
pub fn in_page_link(href: String, after: Callback<()>) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        if !href.starts_with('#') {
            return;
        }
        e.prevent_default();
        let Some(id) = anchor_target(&href) else {
            return;
        };
        after.emit(());
        dom::scroll_to_section(id);
    })
}

#[derive(Properties, PartialEq, Clone)]
pub struct NavBarProps {
    pub owner: AttrValue,
    pub links: Vec<NavLink>,
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let scroll_ref = use_mut_ref(NavScroll::default);
    let scroll_view = use_state_eq(NavScroll::default);
    let active = use_state_eq(|| None::<String>);
    let menu_open = use_state_eq(|| false);
    let menu_ref = use_node_ref();
    let button_ref = use_node_ref();

    // Scroll: bar appearance + active link
    {
        let scroll_ref = scroll_ref.clone();
        let scroll_view = scroll_view.clone();
        let active = active.clone();
        use_effect_with((), move |_| {
            let update = move || {
                let y = dom::scroll_y();
                let snap = {
                    let mut s = scroll_ref.borrow_mut();
                    s.on_scroll(y);
                    *s
                };
                scroll_view.set(snap);
                let bounds = dom::section_bounds(&SECTION_IDS);
                active.set(active_section(&bounds, y).map(str::to_string));
            };
            update();
            let listener = web_sys::window()
                .map(|w| Listener::new(w.as_ref(), "scroll", move |_: web_sys::Event| update()));
            move || drop(listener)
        });
    }

    // Click outside the open menu closes it
    {
        let menu_open = menu_open.clone();
        let menu_ref = menu_ref.clone();
        let button_ref = button_ref.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().and_then(|w| w.document()).map(|doc| {
                Listener::new(doc.as_ref(), "click", move |e: MouseEvent| {
                    let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                    let inside = [&menu_ref, &button_ref].iter().any(|r| {
                        r.get()
                            .map(|n| n.contains(target.as_ref()))
                            .unwrap_or(false)
                    });
                    if !inside {
                        menu_open.set(false);
                    }
                })
            });
            move || drop(listener)
        });
    }

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let link_html = |link: &NavLink| {
        let is_active = anchor_target(&link.href).is_some_and(|id| active.as_deref() == Some(id));
        let style = if is_active {
            "color:var(--link); border-bottom:2px solid var(--link); padding:4px 0; text-decoration:none;"
        } else {
            "color:var(--link-muted); border-bottom:2px solid transparent; padding:4px 0; text-decoration:none;"
        };
        html! {
            <a href={link.href.clone()} {style}
                aria-current={is_active.then_some("true")}
                onclick={in_page_link(link.href.clone(), close_menu.clone())}>
                { link.label.clone() }
            </a>
        }
    };

    let nav_style = format!(
        "position:fixed; top:0; left:0; right:0; z-index:40; display:flex; align-items:center; justify-content:space-between; padding:14px 24px; transition:transform 0.3s ease, background 0.3s ease; transform:{}; {}",
        if scroll_view.hidden { "translateY(-100%)" } else { "translateY(0)" },
        if scroll_view.solid {
            "background:var(--nav-solid); backdrop-filter:blur(12px); box-shadow:0 4px 16px var(--nav-shadow);"
        } else {
            "background:transparent;"
        },
    );
    let open = *menu_open;
    let bar = |i: usize| {
        let t = match (open, i) {
            (true, 0) => "transform:rotate(45deg) translate(5px, 5px);",
            (true, 1) => "opacity:0;",
            (true, _) => "transform:rotate(-45deg) translate(7px, -6px);",
            (false, _) => "transform:none; opacity:1;",
        };
        html! { <span style={format!("display:block; width:22px; height:2px; margin:4px 0; background:currentColor; transition:transform 0.3s ease, opacity 0.3s ease; {t}")}></span> }
    };

    html! {
        <nav id="top-bar" style={nav_style}>
            <a href="#hero" onclick={in_page_link("#hero".to_string(), close_menu.clone())}
                style="font-weight:700; font-size:18px; color:inherit; text-decoration:none;">
                { props.owner.clone() }
            </a>
            <div class="desktop-links" style="display:flex; gap:24px; align-items:center;">
                { for props.links.iter().map(link_html) }
                <ThemeToggle theme={props.theme} on_toggle={props.on_toggle_theme.clone()} />
            </div>
            <button ref={button_ref} class="mobile-menu-button" onclick={toggle_menu}
                aria-label="Toggle navigation" aria-expanded={open.to_string()}
                style="background:none; border:none; color:inherit; cursor:pointer; padding:4px;">
                { for (0..3).map(bar) }
            </button>
            <div ref={menu_ref} class="mobile-menu"
                style={format!("position:absolute; top:100%; left:0; right:0; flex-direction:column; gap:12px; padding:16px 24px; background:var(--nav-menu); display:{};", if open { "flex" } else { "none" })}>
                { for props.links.iter().map(link_html) }
                <ThemeToggle theme={props.theme} on_toggle={props.on_toggle_theme.clone()} />
            </div>
        </nav>
    }
}
