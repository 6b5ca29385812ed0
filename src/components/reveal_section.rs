use web_sys::Element;
use yew::prelude::*;

use crate::dom::observe::when_visible;

#[derive(Properties, PartialEq, Clone)]
pub struct RevealSectionProps {
    pub id: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

/// A page section that fades and slides in the first time it scrolls into view.
#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state_eq(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with((), move |_| {
            let watch = node.cast::<Element>().and_then(|el| {
                when_visible(&el, "0px", 0.1, move || revealed.set(true))
            });
            move || drop(watch)
        });
    }

    let style = format!(
        "padding:96px 24px; max-width:1100px; margin:0 auto; transition:opacity 0.8s ease, transform 0.8s ease; opacity:{}; transform:{};",
        if *revealed { "1" } else { "0" },
        if *revealed { "translateY(0)" } else { "translateY(30px)" },
    );
    html! {
        <section id={props.id.clone()} ref={node} {style}>
            <h2 style="font-size:32px; margin:0 0 32px 0; text-align:center;">{ props.title.clone() }</h2>
            { props.children.clone() }
        </section>
    }
}
