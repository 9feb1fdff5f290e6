use crate::components::footer::{CLUB_EMAIL, CLUB_PHONE};
use crate::components::ui::contact_form::ContactFormView;
use crate::i18n::t;
use balkan_moto_core::FormTimings;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub timings: FormTimings,
}

#[function_component(ContactPage)]
pub fn contact_page(p: &Props) -> Html {
    let tel = format!("tel:{}", CLUB_PHONE.replace(' ', ""));
    html! {
        <section class="contact-page" aria-labelledby="contact-title">
            <h1 id="contact-title">{ t("contact.title") }</h1>
            <p class="lead">{ t("contact.intro") }</p>
            <div class="contact-page__grid">
                <aside class="contact-info">
                    <div class="contact-info__block">
                        <h2>{ t("contact.visit") }</h2>
                        <p>{ t("contact.address") }</p>
                    </div>
                    <div class="contact-info__block">
                        <h2>{ t("contact.call") }</h2>
                        <a href={tel}>{ CLUB_PHONE }</a>
                    </div>
                    <div class="contact-info__block">
                        <h2>{ t("contact.write") }</h2>
                        <a href={format!("mailto:{CLUB_EMAIL}")}>{ CLUB_EMAIL }</a>
                    </div>
                    <div class="contact-info__block">
                        <h2>{ t("contact.hours_title") }</h2>
                        <p>{ t("contact.hours") }</p>
                    </div>
                </aside>
                <ContactFormView timings={p.timings} />
            </div>
        </section>
    }
}
