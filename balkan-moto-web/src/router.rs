use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/shop")]
    Shop,
    #[at("/locations")]
    Locations,
    #[at("/contact")]
    Contact,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Entries shown in the header navigation, in display order.
    pub const NAV: [Self; 4] = [Self::Home, Self::Shop, Self::Locations, Self::Contact];

    /// Translation key for the navigation label.
    #[must_use]
    pub const fn label_key(&self) -> &'static str {
        match self {
            Self::Home => "nav.home",
            Self::Shop => "nav.shop",
            Self::Locations => "nav.locations",
            Self::Contact => "nav.contact",
            Self::NotFound => "not_found.title",
        }
    }
}
