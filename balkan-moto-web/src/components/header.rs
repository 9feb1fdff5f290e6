use crate::i18n::{locales, t};
use crate::router::Route;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current_lang: String,
    pub on_lang_change: Callback<String>,
    #[prop_or_default]
    pub active: Option<Route>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let menu_open = use_state(|| false);

    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                cb.emit(sel.value());
            }
        })
    };
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };

    let links = Route::NAV.iter().map(|route| {
        let current = p.active.as_ref() == Some(route);
        html! {
            <li onclick={close_menu.clone()}>
                <Link<Route>
                    to={route.clone()}
                    classes={classes!("nav-link", current.then_some("nav-link--active"))}
                >
                    { t(route.label_key()) }
                </Link<Route>>
            </li>
        }
    });

    html! {
        <header role="banner" class="site-header">
            <a href="#main" class="sr-only">{ t("nav.skip") }</a>
            <div class="header-content">
                <Link<Route> to={Route::Home} classes={classes!("brand")}>
                    <span class="brand__mark" aria-hidden="true">{"BMC"}</span>
                    <span class="brand__name">{ t("app.title") }</span>
                </Link<Route>>
                <button
                    type="button"
                    class="nav-toggle"
                    aria-expanded={menu_open.to_string()}
                    aria-controls="primary-nav"
                    onclick={toggle_menu}
                >
                    <span class="sr-only">{ t("nav.menu") }</span>
                    {"☰"}
                </button>
                <nav id="primary-nav" aria-label={t("nav.primary")} class={classes!("primary-nav", menu_open.then_some("primary-nav--open"))}>
                    <ul>{ for links }</ul>
                </nav>
                <div class="header-right">
                    <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                    <select id="lang-select" onchange={on_change} aria-label={t("nav.language")}>
                        { for locales().iter().map(|meta| html! {
                            <option value={meta.code} selected={meta.code == p.current_lang}>{ meta.name }</option>
                        }) }
                    </select>
                </div>
            </div>
        </header>
    }
}
