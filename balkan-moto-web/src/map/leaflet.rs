//! Bindings to the handful of Leaflet calls the locations map uses, and the
//! [`MapWidget`] built on them.
use super::{MAP_CONTAINER_ID, MapInitError, marker_style};
use balkan_moto_core::{Bounds, FitOptions, LatLng, MapConfig, MapWidget, MarkerSpec};
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use yew::Callback;

#[wasm_bindgen]
extern "C" {
    pub type LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn create_map(container_id: &str, options: &JsValue) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: u8);

    #[wasm_bindgen(method, js_name = fitBounds)]
    fn fit_bounds(this: &LeafletMap, bounds: &JsValue, options: &JsValue);

    #[wasm_bindgen(method, js_name = flyTo)]
    fn fly_to(this: &LeafletMap, center: &JsValue, zoom: u8, options: &JsValue);

    #[wasm_bindgen(method)]
    fn remove(this: &LeafletMap);

    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_tiles_to(this: &TileLayer, map: &LeafletMap);

    pub type LayerGroup;

    #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
    fn layer_group() -> LayerGroup;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_group_to(this: &LayerGroup, map: &LeafletMap);

    #[wasm_bindgen(method, js_name = clearLayers)]
    fn clear_layers(this: &LayerGroup);

    #[wasm_bindgen(method, js_name = addLayer)]
    fn add_layer(this: &LayerGroup, layer: &CircleMarker);

    pub type CircleMarker;

    #[wasm_bindgen(js_namespace = L, js_name = circleMarker)]
    fn circle_marker(center: &JsValue, options: &JsValue) -> CircleMarker;

    #[wasm_bindgen(method, js_name = bindTooltip)]
    fn bind_tooltip(this: &CircleMarker, content: &str);

    #[wasm_bindgen(method)]
    fn on(this: &CircleMarker, event: &str, handler: &Closure<dyn FnMut()>);
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileOptions<'a> {
    attribution: &'a str,
    max_zoom: u8,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FitBoundsOptions {
    padding: [u32; 2],
    max_zoom: u8,
}

#[derive(Serialize)]
struct FlyOptions {
    duration: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions {
    zoom_control: bool,
    scroll_wheel_zoom: bool,
}

fn js<T: Serialize + ?Sized>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::UNDEFINED)
}

fn point(at: LatLng) -> JsValue {
    js(&at.as_pair())
}

/// Leaflet map with one layer group for the location markers.
pub struct LeafletWidget {
    map: LeafletMap,
    markers: LayerGroup,
    on_select: Callback<String>,
    fly_duration_s: f64,
    // Click handlers must outlive the markers they are bound to.
    handlers: Vec<Closure<dyn FnMut()>>,
}

impl LeafletWidget {
    /// Create the map inside [`MAP_CONTAINER_ID`].
    ///
    /// # Errors
    ///
    /// Fails when the container is not in the document or Leaflet throws.
    pub fn mount(config: &MapConfig, on_select: Callback<String>) -> Result<Self, MapInitError> {
        let present = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(MAP_CONTAINER_ID))
            .is_some();
        if !present {
            return Err(MapInitError::MissingContainer(MAP_CONTAINER_ID.to_string()));
        }

        let map = create_map(
            MAP_CONTAINER_ID,
            &js(&MapOptions {
                zoom_control: true,
                scroll_wheel_zoom: false,
            }),
        )
        .map_err(|err| MapInitError::Library(crate::dom::js_error_message(&err)))?;
        map.set_view(&point(config.initial_center), config.initial_zoom);

        tile_layer(
            &config.tile_url,
            &js(&TileOptions {
                attribution: &config.attribution,
                max_zoom: 19,
            }),
        )
        .add_tiles_to(&map);

        let markers = layer_group();
        markers.add_group_to(&map);
        log::debug!("leaflet map mounted in #{MAP_CONTAINER_ID}");

        Ok(Self {
            map,
            markers,
            on_select,
            fly_duration_s: config.fly_duration_s,
            handlers: Vec::new(),
        })
    }

    /// Replace the callback fired when a marker is clicked.
    pub fn set_on_select(&mut self, on_select: Callback<String>) {
        self.on_select = on_select;
    }
}

impl MapWidget for LeafletWidget {
    fn show_markers(&mut self, markers: &[MarkerSpec]) {
        self.markers.clear_layers();
        self.handlers.clear();
        for spec in markers {
            let marker = circle_marker(
                &point(spec.position),
                &js(&marker_style(spec.kind, spec.selected)),
            );
            marker.bind_tooltip(&spec.label);
            let on_select = self.on_select.clone();
            let id = spec.id.clone();
            let handler = Closure::<dyn FnMut()>::new(move || on_select.emit(id.clone()));
            marker.on("click", &handler);
            self.markers.add_layer(&marker);
            self.handlers.push(handler);
        }
    }

    fn fit_bounds(&mut self, bounds: Bounds, options: FitOptions) {
        let fit = FitBoundsOptions {
            padding: [options.padding_px; 2],
            max_zoom: options.max_zoom,
        };
        self.map.fit_bounds(&js(&bounds.as_pairs()), &js(&fit));
    }

    fn fly_to(&mut self, center: LatLng, zoom: u8) {
        let options = FlyOptions {
            duration: self.fly_duration_s,
        };
        self.map.fly_to(&point(center), zoom, &js(&options));
    }
}

impl Drop for LeafletWidget {
    fn drop(&mut self) {
        self.map.remove();
    }
}
