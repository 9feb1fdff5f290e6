use balkan_moto_core::{Catalog, Directory, SiteConfig};
use balkan_moto_web::app::state::use_app_state;
use balkan_moto_web::app::view::render_app;
use balkan_moto_web::pages::{
    contact::{ContactPage, Props as ContactProps},
    home::{HomePage, Props as HomeProps, SERVICES},
    locations::{LocationsPage, Props as LocationsProps},
    not_found::{NotFound, Props as NotFoundProps},
    shop::{Props as ShopProps, ShopPage},
};
use balkan_moto_web::router::Route;
use futures::executor::block_on;
use std::rc::Rc;
use yew::prelude::*;
use yew::LocalServerRenderer;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::Router;

#[derive(Properties, PartialEq)]
struct InRouterProps {
    path: &'static str,
    children: Html,
}

#[function_component(InRouter)]
fn in_router(props: &InRouterProps) -> Html {
    let history = AnyHistory::from(MemoryHistory::new());
    history.push(props.path);
    html! {
        <Router {history}>{ props.children.clone() }</Router>
    }
}

fn render_routed(path: &'static str, children: Html) -> String {
    block_on(LocalServerRenderer::<InRouter>::with_props(InRouterProps { path, children }).render())
}

fn catalog() -> Rc<Catalog> {
    Rc::new(Catalog::load_from_static().expect("catalog"))
}

fn directory() -> Rc<Directory> {
    Rc::new(Directory::load_from_static().expect("directory"))
}

fn config() -> Rc<SiteConfig> {
    Rc::new(SiteConfig::load_from_static())
}

#[test]
fn home_page_features_bestsellers() {
    balkan_moto_web::i18n::set_lang("en");
    let props = HomeProps {
        catalog: catalog(),
        config: config(),
    };
    let html = render_routed("/", html! { <HomePage ..props /> });
    assert!(html.contains("Premium service. Trusted parts. Rider community."));
    assert_eq!(html.matches("class=\"product-card\"").count(), 3);
    for name in ["BMC Rider Hoodie", "Multi-Tool Kit", "Digital Tire Gauge"] {
        assert!(html.contains(name), "featured product {name} missing");
    }
    assert_eq!(html.matches("service-tile--").count(), SERVICES.len());
    assert!(html.contains("Become a member"));
    assert!(!html.contains("role=\"dialog\""), "membership modal starts closed");
}

#[test]
fn shop_page_lists_the_whole_catalog_by_default() {
    balkan_moto_web::i18n::set_lang("en");
    let props = ShopProps {
        catalog: catalog(),
        config: config(),
    };
    let html = render_routed("/shop", html! { <ShopPage ..props /> });
    assert!(html.contains("Showing 21 products"));
    assert_eq!(html.matches("class=\"product-card\"").count(), 21);
    assert!(!html.contains("Reset filters"));
    let hoodie = html.find("BMC Rider Hoodie").expect("first product");
    let chain_kit = html.find("Chain Care Kit").expect("last product");
    assert!(hoodie < chain_kit, "declared order is kept");
}

#[test]
fn shop_page_in_serbian_uses_few_form() {
    balkan_moto_web::i18n::set_lang("sr");
    let props = ShopProps {
        catalog: catalog(),
        config: config(),
    };
    let html = render_routed("/shop", html! { <ShopPage ..props /> });
    balkan_moto_web::i18n::set_lang("en");
    assert!(html.contains("Prikazan 21 proizvod"));
}

#[test]
fn locations_page_lists_every_location_without_a_selection() {
    balkan_moto_web::i18n::set_lang("en");
    let props = LocationsProps {
        directory: directory(),
        config: config(),
    };
    let html = render_routed("/locations", html! { <LocationsPage ..props /> });
    assert!(html.contains("11 locations"));
    assert_eq!(html.matches("location-card location-card--").count(), 11);
    assert!(html.contains("Shops (5)"));
    assert!(html.contains("Services (6)"));
    assert!(html.contains("Loading map"));
    assert!(!html.contains("location-detail-title"));
}

#[test]
fn contact_page_shows_details_and_form() {
    balkan_moto_web::i18n::set_lang("en");
    let props = ContactProps {
        timings: config().forms,
    };
    let html = block_on(LocalServerRenderer::<ContactPage>::with_props(props).render());
    assert!(html.contains("+381 11 123 4567"));
    assert!(html.contains("Send message"));
    assert!(!html.contains("Bike model"));
}

#[test]
fn not_found_page_offers_a_way_home() {
    balkan_moto_web::i18n::set_lang("en");
    let html = block_on(
        LocalServerRenderer::<NotFound>::with_props(NotFoundProps {
            on_go_home: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("Page not found"));
    assert!(html.contains("Back to home"));
}

#[derive(Properties, PartialEq)]
struct ShellProps {
    route: Option<Route>,
}

#[function_component(Shell)]
fn shell(props: &ShellProps) -> Html {
    let state = use_app_state();
    render_app(&state, props.route.as_ref(), None)
}

#[test]
fn app_shell_shows_loading_until_data_arrives() {
    balkan_moto_web::i18n::set_lang("en");
    let html = render_routed("/", html! { <Shell route={Some(Route::Home)} /> });
    assert!(html.contains("Warming up the engine"));
    assert!(html.contains("id=\"live-status\""));
    assert!(html.contains("site-footer"));
    assert!(html.contains("Balkan Moto Club"));
}
