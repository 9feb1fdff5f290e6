use crate::components::ui::membership_cta::MembershipCta;
use crate::components::ui::product_card::ProductCard;
use crate::i18n::t;
use crate::router::Route;
use balkan_moto_core::{Catalog, SiteConfig};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::Link;

/// Highlights listed beside the about copy.
pub const HIGHLIGHTS: [&str; 3] = ["diagnostics", "maintenance", "performance"];

/// Service tiles, in display order.
pub const SERVICES: [&str; 6] = [
    "maintenance",
    "diagnostics",
    "tires",
    "performance",
    "detailing",
    "parts",
];

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub catalog: Rc<Catalog>,
    pub config: Rc<SiteConfig>,
}

fn hero() -> Html {
    html! {
        <section class="hero" aria-labelledby="hero-title">
            <h1 id="hero-title">{ t("home.hero.title") }</h1>
            <p class="hero__tagline">{ t("home.hero.tagline") }</p>
            <div class="hero__actions">
                <Link<Route> to={Route::Locations} classes={classes!("btn", "btn--primary")}>
                    { t("home.hero.find_us") }
                </Link<Route>>
                <Link<Route> to={Route::Shop} classes={classes!("btn", "btn--ghost")}>
                    { t("home.hero.browse") }
                </Link<Route>>
            </div>
        </section>
    }
}

fn about() -> Html {
    html! {
        <section class="about" aria-labelledby="about-title">
            <div class="about__copy">
                <h2 id="about-title">{ t("home.about.title") }</h2>
                <p>{ t("home.about.intro") }</p>
                <p>{ t("home.about.community") }</p>
            </div>
            <ul class="about__highlights">
                { for HIGHLIGHTS.iter().map(|key| html! {
                    <li class="highlight">
                        <h3>{ t(&format!("home.about.highlights.{key}.title")) }</h3>
                        <p>{ t(&format!("home.about.highlights.{key}.body")) }</p>
                    </li>
                }) }
            </ul>
        </section>
    }
}

fn services() -> Html {
    html! {
        <section class="services" aria-labelledby="services-title">
            <h2 id="services-title">{ t("home.services.title") }</h2>
            <div class="services__grid">
                { for SERVICES.iter().map(|key| html! {
                    <article class={classes!("service-tile", format!("service-tile--{key}"))}>
                        <h3>{ t(&format!("home.services.items.{key}.title")) }</h3>
                        <p>{ t(&format!("home.services.items.{key}.body")) }</p>
                    </article>
                }) }
            </div>
        </section>
    }
}

#[function_component(HomePage)]
pub fn home_page(p: &Props) -> Html {
    let featured: Vec<Rc<_>> = p
        .catalog
        .featured(p.config.featured_count)
        .into_iter()
        .cloned()
        .map(Rc::new)
        .collect();

    html! {
        <>
            { hero() }
            { about() }
            { services() }
            <section class="shop-preview" aria-labelledby="preview-title">
                <h2 id="preview-title">{ t("home.preview.title") }</h2>
                <p>{ t("home.preview.body") }</p>
                <div class="product-grid">
                    { for featured.into_iter().map(|product| html! {
                        <ProductCard key={product.id.clone()} {product} />
                    }) }
                </div>
                <Link<Route> to={Route::Shop} classes={classes!("btn", "btn--ghost")}>
                    { t("home.preview.all") }
                </Link<Route>>
            </section>
            <MembershipCta timings={p.config.forms} />
        </>
    }
}
