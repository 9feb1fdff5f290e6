use balkan_moto_core::{Catalog, Directory, SiteConfig};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub catalog: UseStateHandle<Rc<Catalog>>,
    pub directory: UseStateHandle<Rc<Directory>>,
    pub config: UseStateHandle<Rc<SiteConfig>>,
    pub load_error: UseStateHandle<Option<String>>,
    pub ready: UseStateHandle<bool>,
    pub current_language: UseStateHandle<String>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        catalog: use_state(|| Rc::new(Catalog::default())),
        directory: use_state(|| Rc::new(Directory::default())),
        config: use_state(|| Rc::new(SiteConfig::default_config())),
        load_error: use_state(|| None::<String>),
        ready: use_state(|| false),
        current_language: use_state(crate::i18n::current_lang),
    }
}

impl AppState {
    /// Both data stores loaded and nothing failed.
    #[must_use]
    pub fn data_ready(&self) -> bool {
        *self.ready && self.load_error.is_none()
    }
}
