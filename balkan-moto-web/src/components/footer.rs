use crate::i18n::t;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::Link;

pub const CLUB_PHONE: &str = "+381 11 123 4567";
pub const CLUB_EMAIL: &str = "info@balkanmoto.rs";

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <section>
                    <h2 class="footer-heading">{ t("app.title") }</h2>
                    <p>{ t("footer.about") }</p>
                </section>
                <section>
                    <h2 class="footer-heading">{ t("footer.links") }</h2>
                    <ul class="footer-links">
                        { for Route::NAV.iter().map(|route| html! {
                            <li><Link<Route> to={route.clone()}>{ t(route.label_key()) }</Link<Route>></li>
                        }) }
                    </ul>
                </section>
                <section>
                    <h2 class="footer-heading">{ t("footer.contact") }</h2>
                    <address>
                        <p>{ t("contact.address") }</p>
                        <p><a href={format!("tel:{}", CLUB_PHONE.replace(' ', ""))}>{ CLUB_PHONE }</a></p>
                        <p><a href={format!("mailto:{CLUB_EMAIL}")}>{ CLUB_EMAIL }</a></p>
                    </address>
                </section>
            </div>
            <p class="footer-copy">{ t("footer.copyright") }</p>
        </footer>
    }
}
