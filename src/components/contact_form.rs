use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::dom::set_timeout;
use crate::model::ContactCopy;
use crate::state::{ContactDraft, Field, FieldError, FormTuning, SubmitStatus};
use crate::util::clog;

#[derive(Properties, PartialEq, Clone)]
pub struct ContactFormProps {
    pub copy: ContactCopy,
    pub tuning: FormTuning,
}

const INPUT_STYLE: &str = "width:100%; box-sizing:border-box; padding:10px 12px; border-radius:8px; border:1px solid var(--border); background:var(--bg); color:inherit; font:inherit;";

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let draft = use_state(ContactDraft::default);
    let errors = use_state(Vec::<FieldError>::new);
    let status = use_state_eq(|| SubmitStatus::Idle);

    let on_edit = |field: Field| {
        let draft = draft.clone();
        let errors = errors.clone();
        let status = status.clone();
        Callback::from(move |value: String| {
            let mut d = (*draft).clone();
            d.set(field, value);
            draft.set(d);
            if errors.iter().any(|e| e.field == field) {
                errors.set(errors.iter().filter(|e| e.field != field).cloned().collect());
            }
            if matches!(*status, SubmitStatus::Sent | SubmitStatus::Failed) {
                status.set(SubmitStatus::Idle);
            }
        })
    };
    let input_cb = |field: Field| {
        let cb = on_edit(field);
        Callback::from(move |e: InputEvent| {
            cb.emit(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let textarea_cb = |field: Field| {
        let cb = on_edit(field);
        Callback::from(move |e: InputEvent| {
            cb.emit(e.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let errors = errors.clone();
        let status = status.clone();
        let tuning = props.tuning;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == SubmitStatus::Sending {
                return;
            }
            if let Err(errs) = draft.validate() {
                errors.set(errs);
                return;
            }
            errors.set(Vec::new());
            status.set(SubmitStatus::Sending);
            clog(&format!(
                "contact: sending {}",
                serde_json::to_string(&*draft).unwrap_or_default()
            ));
            let draft = draft.clone();
            let status = status.clone();
            set_timeout(tuning.delay_ms, move || {
                let outcome = SubmitStatus::from_roll(js_sys::Math::random(), &tuning);
                clog(&format!("contact: {:?}", outcome));
                if outcome == SubmitStatus::Sent {
                    draft.set(ContactDraft::default());
                }
                status.set(outcome);
            });
        })
    };

    let error_for = |field: Field| -> Html {
        match errors.iter().find(|e| e.field == field) {
            Some(err) => html! {
                <div id={format!("{}-error", field.id())} role="alert" style="color:var(--error); font-size:12px; margin-top:4px;">{ err.message }</div>
            },
            None => html! {},
        }
    };
    let invalid = |field: Field| errors.iter().any(|e| e.field == field).to_string();
    let sending = *status == SubmitStatus::Sending;

    html! {
        <div style="max-width:640px; margin:0 auto; display:flex; flex-direction:column; gap:20px;">
            <p style="text-align:center; opacity:0.85; margin:0;">
                { props.copy.blurb.clone() }
                if !props.copy.email.is_empty() {
                    {" "}<a href={format!("mailto:{}", props.copy.email)} style="color:var(--link);">{ props.copy.email.clone() }</a>
                }
            </p>
            <form class="contact-form" novalidate={true} {onsubmit} style="display:flex; flex-direction:column; gap:14px;">
                <label for={Field::Name.id()}>
                    {"Name"}
                    <input id={Field::Name.id()} type="text" autocomplete="name" value={draft.name.clone()}
                        aria-invalid={invalid(Field::Name)} oninput={input_cb(Field::Name)} style={INPUT_STYLE} />
                    { error_for(Field::Name) }
                </label>
                <label for={Field::Email.id()}>
                    {"Email"}
                    <input id={Field::Email.id()} type="email" autocomplete="email" value={draft.email.clone()}
                        aria-invalid={invalid(Field::Email)} oninput={input_cb(Field::Email)} style={INPUT_STYLE} />
                    { error_for(Field::Email) }
                </label>
                <label for={Field::Subject.id()}>
                    {"Subject (optional)"}
                    <input id={Field::Subject.id()} type="text" value={draft.subject.clone()}
                        aria-invalid={invalid(Field::Subject)} oninput={input_cb(Field::Subject)} style={INPUT_STYLE} />
                    { error_for(Field::Subject) }
                </label>
                <label for={Field::Message.id()}>
                    {"Message"}
                    <textarea id={Field::Message.id()} rows="6" value={draft.message.clone()}
                        aria-invalid={invalid(Field::Message)} oninput={textarea_cb(Field::Message)} style={INPUT_STYLE} />
                    { error_for(Field::Message) }
                </label>
                <button type="submit" disabled={sending}
                    style="padding:12px 20px; border-radius:8px; border:none; background:#2563eb; color:#fff; font-weight:600; cursor:pointer;">
                    { status.button_label() }
                </button>
                if let Some(notice) = status.notice() {
                    <div role="status" style={format!("padding:10px 14px; border-radius:8px; {}", if *status == SubmitStatus::Sent { "background:var(--ok-bg); color:var(--ok);" } else { "background:var(--error-bg); color:var(--error);" })}>
                        { notice }
                    </div>
                }
            </form>
        </div>
    }
}
