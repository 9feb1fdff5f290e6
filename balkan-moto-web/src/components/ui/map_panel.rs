use crate::i18n::t;
use crate::map::MAP_CONTAINER_ID;
use balkan_moto_core::{Location, MapConfig, MapStatus};
use std::rc::Rc;
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::map::{LeafletWidget, wait_for_library};
#[cfg(target_arch = "wasm32")]
use balkan_moto_core::MapSync;

#[derive(Properties, PartialEq, Clone)]
pub struct MapPanelProps {
    /// Locations passing the current filters, in list order.
    pub visible: Rc<Vec<Location>>,
    #[prop_or_default]
    pub selected: Option<Rc<Location>>,
    pub on_select: Callback<String>,
    pub config: Rc<MapConfig>,
}

/// Overlay shown on top of the map canvas for `status`.
#[must_use]
pub fn status_overlay(status: &MapStatus) -> Html {
    match status {
        MapStatus::Ready => Html::default(),
        MapStatus::Loading => html! {
            <div class="map-overlay map-overlay--loading" role="status">
                <span class="spinner" aria-hidden="true"></span>
                { t("locations.map_loading") }
            </div>
        },
        MapStatus::Failed(_) => html! {
            <div class="map-overlay map-overlay--failed" role="alert">
                <p>{ t("locations.map_unavailable") }</p>
                <p class="muted">{ t("locations.map_list_hint") }</p>
            </div>
        },
    }
}

#[function_component(MapPanel)]
pub fn map_panel(p: &MapPanelProps) -> Html {
    let status = use_state(MapStatus::default);

    #[cfg(target_arch = "wasm32")]
    {
        let sync = use_mut_ref(|| MapSync::new(p.config.sync_options()));
        let widget = use_mut_ref(|| None::<LeafletWidget>);

        {
            let status = status.clone();
            let sync = sync.clone();
            let widget = widget.clone();
            let config = p.config.clone();
            let on_select = p.on_select.clone();
            use_effect_with((), move |()| {
                let mounted = widget.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let outcome =
                        match wait_for_library(config.library_wait_ms, config.library_poll_ms)
                            .await
                        {
                            Ok(()) => LeafletWidget::mount(&config, on_select),
                            Err(err) => Err(err),
                        };
                    match outcome {
                        Ok(leaflet) => {
                            *mounted.borrow_mut() = Some(leaflet);
                            sync.borrow_mut().mark_ready();
                        }
                        Err(err) => sync.borrow_mut().mark_failed(err.to_string()),
                    }
                    status.set(sync.borrow().status().clone());
                });
                move || {
                    widget.borrow_mut().take();
                }
            });
        }

        {
            let on_select = p.on_select.clone();
            use_effect_with(
                (p.visible.clone(), p.selected.clone(), (*status).clone()),
                move |(visible, selected, _)| {
                    if let Some(leaflet) = widget.borrow_mut().as_mut() {
                        leaflet.set_on_select(on_select);
                        let shown: Vec<&Location> = visible.iter().collect();
                        sync.borrow_mut()
                            .sync(leaflet, &shown, selected.as_deref());
                    }
                    || ()
                },
            );
        }
    }

    html! {
        <div class="map-panel">
            <div id={MAP_CONTAINER_ID} class="map-canvas" role="region" aria-label={t("locations.map_label")}></div>
            { status_overlay(&status) }
        </div>
    }
}
