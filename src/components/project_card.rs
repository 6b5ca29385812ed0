use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::dom::observe::when_visible;
use crate::dom::{set_timeout, viewport_width};
use crate::model::Project;
use crate::state::CardTilt;
use crate::state::tilt::{PRESS_MS, PRESS_TRANSFORM, REST_SHADOW, REST_TRANSFORM, is_mobile};

#[derive(Properties, PartialEq, Clone)]
pub struct ProjectCardProps {
    pub project: Project,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let card_ref = use_node_ref();
    let img_ref = use_node_ref();
    let link_ref = use_node_ref();
    let transform = use_state_eq(|| REST_TRANSFORM.to_string());
    let shadow = use_state_eq(|| REST_SHADOW.to_string());
    let image_loaded = use_state_eq(|| false);

    // Lazy image: swap in the real source once the card is near the viewport
    {
        let img_ref = img_ref.clone();
        let image_loaded = image_loaded.clone();
        use_effect_with((), move |_| {
            let watch = img_ref.cast::<Element>().and_then(|img| {
                when_visible(&img, "50px 0px", 0.1, move || image_loaded.set(true))
            });
            move || drop(watch)
        });
    }

    let onmousemove = {
        let card_ref = card_ref.clone();
        let transform = transform.clone();
        let shadow = shadow.clone();
        Callback::from(move |e: MouseEvent| {
            if is_mobile(viewport_width()) {
                return;
            }
            let Some(card) = card_ref.cast::<HtmlElement>() else {
                return;
            };
            let rect = card.get_bounding_client_rect();
            let x = e.client_x() as f64 - rect.left();
            let y = e.client_y() as f64 - rect.top();
            if let Some(tilt) = CardTilt::from_pointer(rect.width(), rect.height(), x, y) {
                transform.set(tilt.transform());
                shadow.set(tilt.box_shadow());
            }
        })
    };
    let onmouseleave = {
        let transform = transform.clone();
        let shadow = shadow.clone();
        Callback::from(move |_: MouseEvent| {
            transform.set(REST_TRANSFORM.to_string());
            shadow.set(REST_SHADOW.to_string());
        })
    };
    let ontouchstart = {
        let transform = transform.clone();
        Callback::from(move |_: TouchEvent| {
            if is_mobile(viewport_width()) {
                transform.set("scale(0.98)".to_string());
            }
        })
    };
    let ontouchend = {
        let transform = transform.clone();
        Callback::from(move |_: TouchEvent| {
            if is_mobile(viewport_width()) {
                transform.set("scale(1)".to_string());
            }
        })
    };
    let onclick = {
        let transform = transform.clone();
        let link_ref = link_ref.clone();
        Callback::from(move |e: MouseEvent| {
            // Inner links handle themselves
            let on_link = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest("a").ok().flatten())
                .is_some();
            if on_link {
                return;
            }
            transform.set(PRESS_TRANSFORM.to_string());
            let release = transform.clone();
            set_timeout(PRESS_MS, move || release.set(REST_TRANSFORM.to_string()));
            if let Some(link) = link_ref.cast::<HtmlElement>() {
                link.click();
            }
        })
    };
    let onkeydown = {
        let card_ref = card_ref.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                if let Some(card) = card_ref.cast::<HtmlElement>() {
                    card.click();
                }
            }
        })
    };

    let p = &props.project;
    let label = format!(
        "View {} details",
        if p.title.is_empty() { "project" } else { p.title.as_str() }
    );
    let style = format!(
        "background:var(--surface); border:1px solid var(--border); border-radius:12px; overflow:hidden; cursor:pointer; transform-style:preserve-3d; transition:transform 0.5s ease, box-shadow 0.5s ease; transform:{}; box-shadow:{};",
        *transform, *shadow
    );
    let loaded = *image_loaded;
    html! {
        <article ref={card_ref} class="project-card" tabindex="0" role="button" aria-label={label}
            {style} {onmousemove} {onmouseleave} {ontouchstart} {ontouchend} {onclick} {onkeydown}>
            if let Some(src) = p.image.clone() {
                <img ref={img_ref} class={classes!("project-image", loaded.then_some("loaded"))}
                    data-src={src.clone()} src={loaded.then_some(src)} alt={p.title.clone()}
                    style={format!("display:block; width:100%; aspect-ratio:16/9; object-fit:cover; background:var(--bg); transition:opacity 0.4s ease; opacity:{};", if loaded { "1" } else { "0" })} />
            }
            <div style="padding:18px 20px; display:flex; flex-direction:column; gap:10px;">
                <h3 style="margin:0; font-size:20px;">{ p.title.clone() }</h3>
                <p style="margin:0; opacity:0.8; line-height:1.5;">{ p.description.clone() }</p>
                <div style="display:flex; gap:6px; flex-wrap:wrap;">
                    { for p.tags.iter().map(|t| html! {
                        <span style="font-size:11px; padding:2px 8px; border-radius:999px; background:var(--chip-bg); color:var(--chip-fg);">{ t.clone() }</span>
                    }) }
                </div>
                <a ref={link_ref} href={p.url.clone()} target="_blank" rel="noopener noreferrer"
                    style="color:var(--link); font-size:14px; text-decoration:none;">{"View project →"}</a>
            </div>
        </article>
    }
}
