use crate::app::state::AppState;
use crate::pages::contact::ContactPage;
use crate::pages::home::HomePage;
use crate::pages::locations::LocationsPage;
use crate::pages::not_found::NotFound;
use crate::pages::shop::ShopPage;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::Navigator;

fn lang_change(state: &AppState) -> Callback<String> {
    let current_language = state.current_language.clone();
    Callback::from(move |code: String| {
        crate::i18n::set_lang(&code);
        current_language.set(code);
    })
}

fn go_home(navigator: Option<Navigator>) -> Callback<()> {
    Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Home);
        }
    })
}

fn render_page(state: &AppState, route: Option<&Route>, navigator: Option<Navigator>) -> Html {
    if let Some(err) = state.load_error.as_ref() {
        return html! {
            <section class="panel load-error" role="alert">
                <h1>{ crate::i18n::t("errors.load_title") }</h1>
                <p>{ crate::i18n::t("errors.load_body") }</p>
                <pre class="muted">{ err.clone() }</pre>
            </section>
        };
    }
    if !*state.ready {
        return html! {
            <section class="panel loading" role="status">
                <span class="spinner" aria-hidden="true"></span>
                { crate::i18n::t("app.loading") }
            </section>
        };
    }

    let catalog = (*state.catalog).clone();
    let directory = (*state.directory).clone();
    let config = (*state.config).clone();
    match route {
        Some(Route::Home) => html! { <HomePage {catalog} {config} /> },
        Some(Route::Shop) => html! { <ShopPage {catalog} {config} /> },
        Some(Route::Locations) => html! { <LocationsPage {directory} {config} /> },
        Some(Route::Contact) => html! { <ContactPage timings={config.forms} /> },
        Some(Route::NotFound) | None => html! { <NotFound on_go_home={go_home(navigator)} /> },
    }
}

/// Header, the routed page and the footer.
pub fn render_app(state: &AppState, route: Option<&Route>, navigator: Option<Navigator>) -> Html {
    let page = render_page(state, route, navigator);
    html! {
        <>
            <crate::components::header::Header
                current_lang={(*state.current_language).clone()}
                on_lang_change={lang_change(state)}
                active={route.cloned()}
            />
            <main id="main" role="main">
                <style>{ crate::a11y::visible_focus_css() }</style>
                { page }
                <div id="live-status" class="sr-only" aria-live="polite"></div>
            </main>
            <crate::components::footer::Footer />
        </>
    }
}
