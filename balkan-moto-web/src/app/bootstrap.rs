//! Loads the bundled catalog, directory and site config into [`AppState`].
use crate::app::state::AppState;
use anyhow::Context;
use balkan_moto_core::{Catalog, Directory, SiteConfig};
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// Everything the pages read, parsed and validated.
#[derive(Debug, Clone)]
pub struct SiteData {
    pub catalog: Catalog,
    pub directory: Directory,
    pub config: SiteConfig,
}

/// Parse the embedded data files.
///
/// # Errors
///
/// Returns the first data file that fails validation, with context naming it.
pub fn load_site_data() -> anyhow::Result<SiteData> {
    let catalog = Catalog::load_from_static().context("loading product catalog")?;
    let directory = Directory::load_from_static().context("loading location directory")?;
    let config = SiteConfig::bundled().clone();
    log::info!(
        "site data loaded: {} products, {} locations",
        catalog.len(),
        directory.len()
    );
    Ok(SiteData {
        catalog,
        directory,
        config,
    })
}

/// Push the loaded data (or the load failure) into app state.
pub fn bootstrap_load(state: &AppState) {
    match load_site_data() {
        Ok(data) => {
            state.catalog.set(Rc::new(data.catalog));
            state.directory.set(Rc::new(data.directory));
            state.config.set(Rc::new(data.config));
            state.load_error.set(None);
        }
        Err(err) => {
            log::error!("site data failed to load: {err:#}");
            state.load_error.set(Some(format!("{err:#}")));
        }
    }
    state.ready.set(true);
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let state = app_state.clone();
    use_effect_with((), move |()| {
        wasm_bindgen_futures::spawn_local(async move {
            bootstrap_load(&state);
        });
        || {}
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;
    use yew::prelude::*;

    #[function_component(BootstrapHarness)]
    fn bootstrap_harness() -> Html {
        let app_state = crate::app::state::use_app_state();
        let initialized = use_state(|| false);
        if !*initialized {
            initialized.set(true);
            bootstrap_load(&app_state);
        }
        Html::default()
    }

    #[test]
    fn bundled_data_loads() {
        let data = load_site_data().expect("bundled data should validate");
        assert_eq!(data.catalog.len(), 21);
        assert_eq!(data.directory.len(), 11);
        assert_eq!(data.config.featured_count, 3);
        assert_eq!(&data.config, SiteConfig::bundled());
    }

    #[test]
    fn bootstrap_runs_inside_a_component() {
        let _ = block_on(LocalServerRenderer::<BootstrapHarness>::new().render());
    }
}
