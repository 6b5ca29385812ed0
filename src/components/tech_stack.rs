use web_sys::HtmlElement;
use yew::prelude::*;

use crate::dom::track::mount_marquee;
use crate::model::Skill;
use crate::state::MarqueeTuning;

#[derive(Properties, PartialEq, Clone)]
pub struct TechStackProps {
    pub skills: Vec<Skill>,
    pub tuning: MarqueeTuning,
}

/// Endless row of skill icons. The row is rendered once; the marquee doubles it
/// in place when it mounts.
#[function_component(TechStack)]
pub fn tech_stack(props: &TechStackProps) -> Html {
    let track_ref = use_node_ref();

    {
        let track_ref = track_ref.clone();
        let tuning = props.tuning;
        use_effect_with((), move |_| {
            let handle = mount_marquee(track_ref.cast::<HtmlElement>(), tuning);
            move || drop(handle)
        });
    }

    html! {
        <div class="tech-stack-viewport" style="overflow:hidden; width:100%; padding:12px 0; mask-image:linear-gradient(to right, transparent, #000 8%, #000 92%, transparent);">
            <div ref={track_ref} class="tech-stack-container"
                style="display:flex; gap:24px; width:max-content; will-change:transform; touch-action:pan-y;">
                { for props.skills.iter().map(|s| html! {
                    <div class="tech-icon" data-name={s.name.clone()} title={s.name.clone()}
                        style="flex:0 0 auto; width:96px; display:flex; flex-direction:column; align-items:center; gap:8px; cursor:pointer;">
                        <div style={format!("width:64px; height:64px; border-radius:16px; display:flex; align-items:center; justify-content:center; font-weight:700; font-size:20px; background:var(--surface); border:1px solid var(--border); color:{};", s.color)}>
                            { s.icon.clone() }
                        </div>
                        <span style="font-size:12px; opacity:0.8;">{ s.name.clone() }</span>
                    </div>
                }) }
            </div>
        </div>
    }
}
