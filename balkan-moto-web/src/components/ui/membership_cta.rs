use crate::components::modal::Modal;
use crate::components::ui::toast::Toast;
use crate::forms::{event_value, use_submission};
use crate::i18n::t;
use balkan_moto_core::{FormTimings, MembershipForm, SubmitPhase};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MembershipCtaProps {
    pub timings: FormTimings,
}

const fn join_label_key(phase: SubmitPhase) -> &'static str {
    match phase {
        SubmitPhase::Idle => "forms.join",
        SubmitPhase::Submitting => "forms.joining",
        SubmitPhase::Submitted => "forms.joined",
    }
}

/// Home page call to action with the membership form in a dialog.
#[function_component(MembershipCta)]
pub fn membership_cta(p: &MembershipCtaProps) -> Html {
    let open = use_state(|| false);
    let form = use_submission::<MembershipForm>(p.timings);
    let phase = form.phase();

    {
        let open = open.clone();
        use_effect_with(phase, move |phase| {
            if *phase == SubmitPhase::Submitted {
                open.set(false);
                crate::a11y::set_status(&t("home.membership.welcome"));
            }
            || ()
        });
    }

    let show = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(true))
    };
    let close = {
        let open = open.clone();
        Callback::from(move |()| open.set(false))
    };
    let on_submit = {
        let submit = form.on_submit();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };
    let locked = !phase.accepts_input();
    let fields = form.fields().clone();

    html! {
        <section class="membership-cta" aria-labelledby="membership-title">
            <h2 id="membership-title">{ t("home.membership.title") }</h2>
            <p>{ t("home.membership.body") }</p>
            <button type="button" id="membership-open" class="btn btn--primary" onclick={show}>
                { t("home.membership.cta") }
            </button>
            <Modal
                open={*open}
                title={t("home.membership.dialog_title")}
                description={Some(AttrValue::from(t("home.membership.dialog_body")))}
                return_focus_id={Some(AttrValue::from("membership-open"))}
                on_close={close}
            >
                <form class="membership-form" onsubmit={on_submit}>
                    <div class="form-row">
                        <label for="member-name">{ t("forms.name") }</label>
                        <input id="member-name" type="text" autocomplete="name" required={true}
                            value={fields.name} disabled={locked}
                            oninput={form.on_edit(|f, v| f.name = v).filter_reform(|e: InputEvent| event_value(&e))} />
                    </div>
                    <div class="form-row">
                        <label for="member-email">{ t("forms.email") }</label>
                        <input id="member-email" type="email" autocomplete="email" required={true}
                            value={fields.email} disabled={locked}
                            oninput={form.on_edit(|f, v| f.email = v).filter_reform(|e: InputEvent| event_value(&e))} />
                    </div>
                    <div class="form-row">
                        <label for="member-bike">{ t("forms.bike_model") }</label>
                        <input id="member-bike" type="text" required={true}
                            value={fields.bike_model} disabled={locked}
                            oninput={form.on_edit(|f, v| f.bike_model = v).filter_reform(|e: InputEvent| event_value(&e))} />
                    </div>
                    if let Some(err) = form.error() {
                        <p class="form-error" role="alert">{ err.to_string() }</p>
                    }
                    <button type="submit" class="btn btn--primary" disabled={locked}>
                        { t(join_label_key(phase)) }
                    </button>
                </form>
            </Modal>
            <Toast visible={phase == SubmitPhase::Submitted} message={t("home.membership.welcome")} />
        </section>
    }
}
