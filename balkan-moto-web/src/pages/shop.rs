use crate::components::ui::filter_bar::{Chip, FilterBar};
use crate::components::ui::product_card::ProductCard;
use crate::components::ui::product_modal::{CartRequest, ProductModal};
use crate::components::ui::toast::Toast;
use crate::i18n::{fmt_count, t, tr};
use balkan_moto_core::{
    Catalog, CategoryFilter, Product, ProductCategory, ProductCriteria, SiteConfig, SortKey,
};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub catalog: Rc<Catalog>,
    pub config: Rc<SiteConfig>,
}

/// Category filter for a chip position: `0` is "All", then [`ProductCategory::ALL`] in order.
#[must_use]
pub fn category_for_chip(index: usize) -> CategoryFilter<ProductCategory> {
    index
        .checked_sub(1)
        .and_then(|i| ProductCategory::ALL.get(i).copied())
        .map_or(CategoryFilter::All, CategoryFilter::Only)
}

#[must_use]
pub fn category_chips(criteria: &ProductCriteria) -> Vec<Chip> {
    let all = Chip {
        label: t("shop.category.all").into(),
        active: criteria.category == CategoryFilter::All,
    };
    std::iter::once(all)
        .chain(ProductCategory::ALL.iter().map(|cat| Chip {
            label: t(&format!("shop.category.{}", cat.key())).into(),
            active: criteria.category == CategoryFilter::Only(*cat),
        }))
        .collect()
}

/// Add-to-cart confirmation. `seq` goes up on every add, so repeating the same
/// product restarts the hide timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartToast {
    pub seq: u32,
    pub message: String,
}

impl CartToast {
    #[must_use]
    pub fn next(previous: Option<&Self>, message: String) -> Self {
        Self {
            seq: previous.map_or(1, |t| t.seq.wrapping_add(1)),
            message,
        }
    }
}

#[function_component(ShopPage)]
pub fn shop_page(p: &Props) -> Html {
    let criteria = use_state(ProductCriteria::default);
    let open_id = use_state(|| None::<String>);
    let toast = use_state(|| None::<CartToast>);

    #[cfg(target_arch = "wasm32")]
    {
        use std::cell::Cell;

        let toast = toast.clone();
        let display_ms = p.config.forms.display_ms;
        use_effect_with((*toast).as_ref().map(|t| t.seq), move |seq| {
            let cancelled = Rc::new(Cell::new(false));
            if seq.is_some() {
                let cancelled = cancelled.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(err) = crate::dom::sleep_ms(display_ms).await {
                        log::warn!("toast timer failed: {}", crate::dom::js_error_message(&err));
                    }
                    if !cancelled.get() {
                        toast.set(None);
                    }
                });
            }
            move || cancelled.set(true)
        });
    }

    let visible: Vec<Rc<Product>> = p
        .catalog
        .visible(&criteria)
        .into_iter()
        .cloned()
        .map(Rc::new)
        .collect();
    let open_product = open_id
        .as_deref()
        .and_then(|id| p.catalog.find(id))
        .cloned()
        .map(Rc::new);

    let on_chip = {
        let criteria = criteria.clone();
        Callback::from(move |idx: usize| {
            criteria.set((*criteria).clone().with_category(category_for_chip(idx)));
        })
    };
    let on_query = {
        let criteria = criteria.clone();
        Callback::from(move |q: String| criteria.set((*criteria).clone().with_query(q)))
    };
    let on_sort = {
        let criteria = criteria.clone();
        Callback::from(move |s: SortKey| criteria.set((*criteria).clone().with_sort(s)))
    };
    let on_reset = {
        let criteria = criteria.clone();
        Callback::from(move |()| {
            let mut next = (*criteria).clone();
            next.reset();
            criteria.set(next);
        })
    };
    let on_open = {
        let open_id = open_id.clone();
        Callback::from(move |id: String| open_id.set(Some(id)))
    };
    let on_close = {
        let open_id = open_id.clone();
        Callback::from(move |()| open_id.set(None))
    };
    let on_add = {
        let open_id = open_id.clone();
        let toast = toast.clone();
        let catalog = p.catalog.clone();
        Callback::from(move |req: CartRequest| {
            log::info!(
                "add to cart: {} size={:?} color={:?}",
                req.product_id,
                req.size,
                req.color
            );
            let name = catalog
                .find(&req.product_id)
                .map_or_else(|| req.product_id.clone(), |p| p.name.clone());
            let mut args = BTreeMap::new();
            args.insert("name", name.as_str());
            let message = tr("product.added", Some(&args));
            toast.set(Some(CartToast::next((*toast).as_ref(), message)));
            open_id.set(None);
        })
    };

    html! {
        <section class="shop-page" aria-labelledby="shop-title">
            <header class="page-header">
                <h1 id="shop-title">{ t("shop.title") }</h1>
                <p class="lead">{ t("shop.intro") }</p>
            </header>
            <FilterBar
                id_prefix="shop"
                chips={category_chips(&criteria)}
                chips_label={t("shop.categories")}
                on_chip={on_chip}
                query={criteria.query.clone()}
                search_placeholder={t("shop.search")}
                on_query={on_query}
                sort={Some(criteria.sort)}
                on_sort={on_sort}
                show_reset={!criteria.is_default()}
                on_reset={on_reset}
                summary={fmt_count("shop.count", visible.len())}
            />
            if visible.is_empty() {
                <p class="empty-state">{ t("shop.empty") }</p>
            } else {
                <div class="product-grid">
                    { for visible.into_iter().map(|product| html! {
                        <ProductCard key={product.id.clone()} {product} on_open={Some(on_open.clone())} />
                    }) }
                </div>
            }
            <ProductModal product={open_product} on_close={on_close} on_add={on_add} />
            <Toast visible={toast.is_some()} message={(*toast).as_ref().map(|t| t.message.clone()).unwrap_or_default()} />
        </section>
    }
}
