use super::{
    contact_form::ContactForm, hero::Hero, nav_bar::NavBar, project_card::ProjectCard,
    reveal_section::RevealSection, tech_stack::TechStack,
};
use crate::dom::storage::{apply_theme, initial_theme, store_theme};
use crate::model::SiteContent;
use crate::util::{clog, cwarn};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let content = use_memo((), |_| {
        SiteContent::load().unwrap_or_else(|e| {
            cwarn(&format!("site.json unreadable, using defaults: {}", e));
            SiteContent::default()
        })
    });
    let theme = use_state_eq(initial_theme);

    {
        use_effect_with((), |_| {
            clog("Personal website initialized");
            || ()
        });
    }
    // Reflect theme on <html>
    {
        let t = *theme;
        use_effect_with(t, move |_| {
            apply_theme(t);
            || ()
        });
    }

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = theme.toggled();
            store_theme(next);
            theme.set(next);
        })
    };

    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <div id="root">
            <NavBar owner={content.owner.clone()} links={content.nav.clone()}
                theme={*theme} on_toggle_theme={toggle_theme} />
            <main>
                <Hero copy={content.hero.clone()} />
                <RevealSection id="projects" title="Projects">
                    <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(280px, 1fr)); gap:24px; perspective:1000px;">
                        { for content.projects.iter().map(|p| html! { <ProjectCard project={p.clone()} /> }) }
                    </div>
                </RevealSection>
                <RevealSection id="skills" title="Tech Stack">
                    <TechStack skills={content.skills.clone()} tuning={content.marquee} />
                </RevealSection>
                <RevealSection id="contact" title={content.contact.heading.clone()}>
                    <ContactForm copy={content.contact.clone()} tuning={content.form} />
                </RevealSection>
            </main>
            <footer style="text-align:center; padding:32px 24px; opacity:0.6; font-size:13px;">
                { format!("© {} {}", year, content.owner) }
            </footer>
        </div>
    }
}
