use crate::components::ui::gallery::ImageGallery;
use crate::i18n::t;
use balkan_moto_core::Location;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LocationDetailProps {
    pub location: Rc<Location>,
    pub on_close: Callback<()>,
}

/// Detail panel for the selected location.
#[function_component(LocationDetail)]
pub fn location_detail(p: &LocationDetailProps) -> Html {
    let loc = &p.location;
    let close = {
        let cb = p.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <section class="location-detail" aria-labelledby="location-detail-title">
            <header class="location-detail__header">
                <p class="location-detail__kind">{ t(&format!("locations.kind.{}", loc.kind.key())) }{" · "}{ loc.category.clone() }</p>
                <h2 id="location-detail-title">{ loc.name.clone() }</h2>
                <button type="button" class="modal__close" aria-label={t("ui.close")} onclick={close}>{"×"}</button>
            </header>
            <ImageGallery images={loc.images.clone()} alt={AttrValue::from(loc.name.clone())} />
            <p>{ loc.description.clone() }</p>
            <dl class="location-detail__facts">
                <dt>{ t("locations.address") }</dt>
                <dd>{ loc.full_address() }</dd>
                <dt>{ t("locations.hours") }</dt>
                <dd>{ loc.hours.clone() }</dd>
                <dt>{ t("locations.phone") }</dt>
                <dd><a href={loc.tel_href()}>{ loc.phone.clone() }</a></dd>
            </dl>
            <div class="location-detail__actions">
                <a class="btn btn--primary" href={loc.directions_url()} target="_blank" rel="noopener noreferrer">
                    { t("locations.directions") }
                </a>
                if let Some(site) = loc.website.clone() {
                    <a class="btn btn--ghost" href={site} target="_blank" rel="noopener noreferrer">
                        { t("locations.website") }
                    </a>
                }
                <a class="btn btn--ghost" href={loc.tel_href()}>{ t("locations.call") }</a>
            </div>
        </section>
    }
}
