use crate::components::modal::Modal;
use crate::components::ui::gallery::ImageGallery;
use crate::components::ui::product_card::availability_badge;
use crate::i18n::{fmt_price, t};
use balkan_moto_core::{Product, VariantPicker};
use std::rc::Rc;
use yew::prelude::*;

/// What the visitor asked for when pressing the add button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRequest {
    pub product_id: String,
    pub size: Option<String>,
    pub color: Option<String>,
}

#[derive(Properties, PartialEq, Clone)]
pub struct ProductModalProps {
    pub product: Option<Rc<Product>>,
    pub on_close: Callback<()>,
    pub on_add: Callback<CartRequest>,
}

fn pickers_for(product: Option<&Product>) -> (VariantPicker, VariantPicker) {
    product.map_or_else(Default::default, |p| {
        (VariantPicker::new(&p.sizes), VariantPicker::new(&p.colors))
    })
}

fn variant_row(
    label_key: &str,
    picker: &UseStateHandle<VariantPicker>,
    group: &'static str,
) -> Html {
    if picker.options().is_empty() {
        return Html::default();
    }
    html! {
        <fieldset class="variant-picker">
            <legend>{ t(label_key) }</legend>
            { for picker.options().iter().map(|option| {
                let chosen = picker.chosen() == Some(option.as_str());
                let handle = picker.clone();
                let value = option.clone();
                let choose = Callback::from(move |_: MouseEvent| {
                    let mut next = (*handle).clone();
                    if next.choose(&value) {
                        handle.set(next);
                    }
                });
                html! {
                    <button
                        type="button"
                        class={classes!("variant", chosen.then_some("variant--chosen"))}
                        aria-pressed={chosen.to_string()}
                        data-group={group}
                        onclick={choose}
                    >
                        { option.clone() }
                    </button>
                }
            }) }
        </fieldset>
    }
}

#[function_component(ProductModal)]
pub fn product_modal(p: &ProductModalProps) -> Html {
    let (initial_sizes, initial_colors) = pickers_for(p.product.as_deref());
    let sizes = use_state(move || initial_sizes);
    let colors = use_state(move || initial_colors);
    {
        let sizes = sizes.clone();
        let colors = colors.clone();
        use_effect_with(p.product.clone(), move |product| {
            let (s, c) = pickers_for(product.as_deref());
            sizes.set(s);
            colors.set(c);
            || {}
        });
    }

    let Some(product) = p.product.clone() else {
        return Html::default();
    };

    let purchasable = product.availability.allows_purchase();
    let add = {
        let on_add = p.on_add.clone();
        let sizes = sizes.clone();
        let colors = colors.clone();
        let product_id = product.id.clone();
        Callback::from(move |_: MouseEvent| {
            on_add.emit(CartRequest {
                product_id: product_id.clone(),
                size: sizes.chosen().map(str::to_string),
                color: colors.chosen().map(str::to_string),
            });
        })
    };
    let add_label = if purchasable {
        t("product.add")
    } else {
        t("product.availability.sold_out")
    };

    html! {
        <Modal
            open={true}
            wide={true}
            title={AttrValue::from(product.name.clone())}
            on_close={p.on_close.clone()}
            return_focus_id={Some(AttrValue::from(format!("product-{}", product.id)))}
        >
            <div class="product-detail">
                <ImageGallery images={product.images.clone()} alt={AttrValue::from(product.name.clone())} />
                <div class="product-detail__info">
                    <p class="product-detail__meta">
                        { t(&format!("shop.category.{}", product.category.key())) }
                        { availability_badge(&product) }
                    </p>
                    <p class="price price--large">{ fmt_price(product.price_cents) }</p>
                    <p>{ product.full_desc.clone() }</p>
                    { variant_row("product.size", &sizes, "size") }
                    { variant_row("product.color", &colors, "color") }
                    if !product.specs.is_empty() {
                        <table class="spec-table">
                            <caption>{ t("product.specs") }</caption>
                            <tbody>
                                { for product.specs.iter().map(|spec| html! {
                                    <tr><th scope="row">{ spec.label.clone() }</th><td>{ spec.value.clone() }</td></tr>
                                }) }
                            </tbody>
                        </table>
                    }
                    <button type="button" class="btn btn--primary" disabled={!purchasable} onclick={add}>
                        { add_label }
                    </button>
                </div>
            </div>
        </Modal>
    }
}
