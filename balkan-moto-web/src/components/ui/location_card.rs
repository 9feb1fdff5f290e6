use crate::i18n::t;
use crate::paths::sized_image_url;
use balkan_moto_core::Location;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LocationCardProps {
    pub location: Rc<Location>,
    pub selected: bool,
    pub on_select: Callback<String>,
}

#[function_component(LocationCard)]
pub fn location_card(p: &LocationCardProps) -> Html {
    let loc = &p.location;
    let select = {
        let cb = p.on_select.clone();
        let id = loc.id.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
    };
    let thumb = loc
        .images
        .first()
        .map(|url| sized_image_url(url, 240))
        .unwrap_or_default();

    html! {
        <li>
            <button
                type="button"
                id={format!("location-{}", loc.id)}
                class={classes!("location-card", format!("location-card--{}", loc.kind.key()), p.selected.then_some("location-card--selected"))}
                aria-pressed={p.selected.to_string()}
                onclick={select}
            >
                <img class="location-card__thumb" src={thumb} alt="" loading="lazy" />
                <span class="location-card__text">
                    <span class="location-card__kind">{ t(&format!("locations.kind.{}", loc.kind.key())) }{" · "}{ loc.category.clone() }</span>
                    <span class="location-card__name">{ loc.name.clone() }</span>
                    <span class="location-card__city">{ loc.full_address() }</span>
                </span>
            </button>
        </li>
    }
}
