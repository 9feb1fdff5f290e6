use crate::i18n::{fmt_price, t};
use crate::paths::sized_image_url;
use balkan_moto_core::Product;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductCardProps {
    pub product: Rc<Product>,
    #[prop_or_default]
    pub on_open: Option<Callback<String>>,
}

/// Availability badge; nothing for ordinary in-stock items.
#[must_use]
pub fn availability_badge(product: &Product) -> Html {
    if !product.availability.shows_badge() {
        return Html::default();
    }
    let key = product.availability.key();
    html! {
        <span class={classes!("badge", format!("badge--{key}"))}>
            { t(&format!("product.availability.{key}")) }
        </span>
    }
}

#[function_component(ProductCard)]
pub fn product_card(p: &ProductCardProps) -> Html {
    let product = &p.product;
    let open = p.on_open.clone().map(|cb| {
        let id = product.id.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
    });
    let image = product
        .primary_image()
        .map(|url| sized_image_url(url, 480))
        .unwrap_or_default();

    html! {
        <article class="product-card" data-product-id={product.id.clone()}>
            <div class="product-card__media">
                <img src={image} alt={product.name.clone()} loading="lazy" />
                { availability_badge(product) }
            </div>
            <div class="product-card__body">
                <p class="product-card__category">{ t(&format!("shop.category.{}", product.category.key())) }</p>
                <h3 class="product-card__name">{ product.name.clone() }</h3>
                <p class="product-card__desc">{ product.short_desc.clone() }</p>
                <ul class="tag-list">
                    { for product.tags.iter().map(|tag| html! { <li class="tag">{ tag.clone() }</li> }) }
                </ul>
                <div class="product-card__footer">
                    <span class="price">{ fmt_price(product.price_cents) }</span>
                    if let Some(open) = open {
                        <button type="button" id={format!("product-{}", product.id)} class="btn btn--ghost" onclick={open}>
                            { t("shop.view_details") }
                        </button>
                    }
                </div>
            </div>
        </article>
    }
}
