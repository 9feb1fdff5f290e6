use crate::components::ui::toast::Toast;
use crate::forms::{event_value, use_submission};
use crate::i18n::t;
use balkan_moto_core::{ContactForm, FormTimings, SubmitPhase};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ContactFormProps {
    pub timings: FormTimings,
}

/// Label for the submit button in each phase.
#[must_use]
pub const fn submit_label_key(phase: SubmitPhase) -> &'static str {
    match phase {
        SubmitPhase::Idle => "forms.send",
        SubmitPhase::Submitting => "forms.sending",
        SubmitPhase::Submitted => "forms.sent",
    }
}

#[function_component(ContactFormView)]
pub fn contact_form_view(p: &ContactFormProps) -> Html {
    let form = use_submission::<ContactForm>(p.timings);
    let phase = form.phase();
    let locked = !phase.accepts_input();
    let fields = form.fields().clone();

    let on_name = form
        .on_edit(|f, v| f.name = v)
        .filter_reform(|e: InputEvent| event_value(&e));
    let on_email = form
        .on_edit(|f, v| f.email = v)
        .filter_reform(|e: InputEvent| event_value(&e));
    let on_phone = form
        .on_edit(|f, v| f.phone = v)
        .filter_reform(|e: InputEvent| event_value(&e));
    let on_message = form
        .on_edit(|f, v| f.message = v)
        .filter_reform(|e: InputEvent| event_value(&e));
    let on_submit = {
        let submit = form.on_submit();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    html! {
        <>
            <form class="contact-form" onsubmit={on_submit} aria-busy={(phase == SubmitPhase::Submitting).to_string()}>
                <div class="form-row">
                    <label for="contact-name">{ t("forms.name") }</label>
                    <input id="contact-name" type="text" autocomplete="name" required={true}
                        value={fields.name} disabled={locked} oninput={on_name} />
                </div>
                <div class="form-row">
                    <label for="contact-email">{ t("forms.email") }</label>
                    <input id="contact-email" type="email" autocomplete="email" required={true}
                        value={fields.email} disabled={locked} oninput={on_email} />
                </div>
                <div class="form-row">
                    <label for="contact-phone">{ t("forms.phone") }</label>
                    <input id="contact-phone" type="tel" autocomplete="tel"
                        value={fields.phone} disabled={locked} oninput={on_phone} />
                </div>
                <div class="form-row">
                    <label for="contact-message">{ t("forms.message") }</label>
                    <textarea id="contact-message" rows="5" required={true}
                        value={fields.message} disabled={locked} oninput={on_message} />
                </div>
                if let Some(err) = form.error() {
                    <p class="form-error" role="alert">{ err.to_string() }</p>
                }
                <button type="submit" class="btn btn--primary" disabled={locked}>
                    { t(submit_label_key(phase)) }
                </button>
            </form>
            <Toast visible={phase == SubmitPhase::Submitted} message={t("contact.sent_toast")} />
        </>
    }
}
