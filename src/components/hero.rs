use yew::prelude::*;

use super::nav_bar::in_page_link;
use crate::dom::{clear_timeout, set_timeout};
use crate::model::HeroCopy;
use crate::state::HeroStage;
use crate::state::hero::{button_style, char_style, split_chars, timeline};

#[derive(Properties, PartialEq, Clone)]
pub struct HeroProps {
    pub copy: HeroCopy,
}

fn split_line(text: &str, revealed: bool) -> Html {
    split_chars(text)
        .into_iter()
        .enumerate()
        .map(|(i, c)| html! { <span style={char_style(i, revealed)}>{ c }</span> })
        .collect::<Html>()
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let stage = use_state_eq(HeroStage::default);

    {
        let stage = stage.clone();
        use_effect_with((), move |_| {
            let ids: Vec<i32> = timeline()
                .into_iter()
                .filter_map(|(next, ms)| {
                    let stage = stage.clone();
                    set_timeout(ms, move || stage.set(next))
                })
                .collect();
            move || ids.into_iter().for_each(clear_timeout)
        });
    }

    let at = *stage;
    html! {
        <section id="hero" style="min-height:100vh; display:flex; flex-direction:column; justify-content:center; align-items:center; text-align:center; padding:0 24px; position:relative; overflow:hidden;">
            <h1 class="hero-title" aria-label={props.copy.title.clone()} style="font-size:clamp(32px, 6vw, 64px); margin:0 0 16px 0;">
                { split_line(&props.copy.title, at >= HeroStage::Title) }
            </h1>
            <p class="hero-subtitle" aria-label={props.copy.subtitle.clone()} style="font-size:clamp(16px, 2.4vw, 22px); opacity:0.85; margin:0 0 32px 0;">
                { split_line(&props.copy.subtitle, at >= HeroStage::Subtitle) }
            </p>
            <div class="hero-buttons" style="display:flex; gap:16px; flex-wrap:wrap; justify-content:center;">
                { for props.copy.buttons.iter().enumerate().map(|(i, b)| html! {
                    <a href={b.href.clone()}
                        onclick={in_page_link(b.href.clone(), Callback::noop())}
                        style={format!("display:inline-block; padding:12px 24px; border-radius:8px; background:#2563eb; color:#fff; text-decoration:none; {}", button_style(i, at >= HeroStage::Buttons))}>
                        { b.label.clone() }
                    </a>
                }) }
            </div>
        </section>
    }
}
